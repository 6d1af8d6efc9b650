use clap::Parser;
use exprcalc::batch;
use exprcalc::calc::functions;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "exprcalc", version, about = "Evaluate arithmetic expressions")]
struct Cli {
    #[arg(long, help = "Read expressions from stdin, one per line")]
    stdin: bool,

    #[arg(long, help = "Print results as YAML")]
    yaml: bool,

    #[arg(long, env = "EXPRCALC_PRECISION", help = "Number of decimal places to print")]
    precision: Option<usize>,

    #[arg(long, help = "List the supported functions and exit")]
    list_functions: bool,

    #[arg(help = "Expressions to evaluate", allow_hyphen_values = true)]
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_functions {
        for name in functions::names() {
            println!("{}", name);
        }
        return ExitCode::from(0);
    }

    let mut lines = cli.expressions;
    if cli.stdin {
        lines.extend(batch::read_lines_from_stdin());
    }

    if lines.is_empty() {
        eprintln!("Error: No expression provided. Pass one as an argument or use --stdin");
        return ExitCode::from(2);
    }

    let outcomes = batch::evaluate_all(&lines);
    debug!(count = outcomes.len(), "evaluated expressions");

    if cli.yaml {
        match batch::format_yaml(&outcomes, cli.precision) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                eprintln!("Error: Failed to write YAML: {}", e);
                return ExitCode::from(2);
            }
        }
    } else {
        for line in batch::format_plain(&outcomes, cli.precision) {
            println!("{}", line);
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed == 0 {
        ExitCode::from(0)
    } else {
        warn!(failed, "some expressions could not be evaluated");
        ExitCode::from(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use exprcalc::batch::Outcome;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_expression_argument() {
        let cli = Cli::try_parse_from(["exprcalc", "-2^2", "3*3"]).unwrap();
        assert_eq!(cli.expressions, ["-2^2", "3*3"]);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["exprcalc", "--yaml", "--precision", "4", "1/3"]).unwrap();
        assert!(cli.yaml);
        assert_eq!(cli.precision, Some(4));
        assert!(!cli.stdin);
    }

    #[test]
    fn test_outcomes_drive_exit_status() {
        let outcomes: Vec<Outcome> = batch::evaluate_all(["1", "1/0"]);
        assert_eq!(outcomes.iter().filter(|o| !o.is_ok()).count(), 1);
    }
}
