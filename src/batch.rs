use crate::calc::{EvalError, Evaluator};
use serde::Serialize;
use std::io::{self, BufRead};

#[derive(Debug)]
pub struct Outcome {
    pub expression: String,
    pub result: Result<f64, EvalError>,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Serialize)]
struct Record<'a> {
    expression: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Evaluates one expression per line. Blank lines and `#` comments are skipped.
pub fn evaluate_all<I, S>(lines: I) -> Vec<Outcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let evaluator = Evaluator::new();
    lines
        .into_iter()
        .filter_map(|line| {
            let expression = line.as_ref().trim();
            if expression.is_empty() || expression.starts_with('#') {
                return None;
            }
            Some(Outcome {
                expression: expression.to_string(),
                result: evaluator.evaluate(expression),
            })
        })
        .collect()
}

pub fn read_lines_from_stdin() -> Vec<String> {
    let stdin = io::stdin();
    stdin.lock().lines().map_while(Result::ok).collect()
}

pub fn format_plain(outcomes: &[Outcome], precision: Option<usize>) -> Vec<String> {
    outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(value) => format_value(*value, precision),
            Err(e) => format!("error: {}", e),
        })
        .collect()
}

pub fn format_yaml(outcomes: &[Outcome], precision: Option<usize>) -> Result<String, serde_yaml::Error> {
    let records: Vec<Record> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(value) => Record {
                expression: &outcome.expression,
                value: Some(round_to(*value, precision)),
                error: None,
            },
            Err(e) => Record {
                expression: &outcome.expression,
                value: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    serde_yaml::to_string(&records)
}

fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None => value.to_string(),
    }
}

fn round_to(value: f64, precision: Option<usize>) -> f64 {
    let Some(digits) = precision else {
        return value;
    };
    let factor = 10f64.powi(digits.min(300) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::ErrorKind;
    use serde_yaml::Value as YamlValue;

    #[test]
    fn test_evaluate_all_skips_blank_and_comments() {
        let lines = ["1+1", "", "   ", "# a comment", " 2*3 "];
        let outcomes = evaluate_all(lines);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].result, Ok(2.0));
        assert_eq!(outcomes[1].expression, "2*3");
        assert_eq!(outcomes[1].result, Ok(6.0));
    }

    #[test]
    fn test_evaluate_all_keeps_going_after_error() {
        let outcomes = evaluate_all(["5/0", "4"]);
        assert_eq!(outcomes[0].result.as_ref().unwrap_err().kind, ErrorKind::DivisionByZero);
        assert!(outcomes[1].is_ok());
    }

    #[test]
    fn test_format_plain() {
        let outcomes = evaluate_all(["1/4", "2^0.5", "foo(2)"]);
        let lines = format_plain(&outcomes, None);
        assert_eq!(lines[0], "0.25");
        assert_eq!(lines[2], "error: Unknown function: foo at position 0");

        let lines = format_plain(&outcomes, Some(3));
        assert_eq!(lines[0], "0.250");
        assert_eq!(lines[1], "1.414");
    }

    #[test]
    fn test_format_yaml() {
        let outcomes = evaluate_all(["1+2", "sqrt(-4)", "10/3"]);
        let yaml = format_yaml(&outcomes, Some(2)).unwrap();
        let parsed: YamlValue = serde_yaml::from_str(&yaml).unwrap();
        let items = parsed.as_sequence().unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["expression"], "1+2");
        assert_eq!(items[0]["value"].as_f64(), Some(3.0));
        assert!(items[0].get("error").is_none());

        assert!(items[1].get("value").is_none());
        assert_eq!(
            items[1]["error"],
            "Square root of negative number at position 0"
        );

        assert_eq!(items[2]["value"].as_f64(), Some(3.33));
    }

    #[test]
    fn test_round_to_leaves_huge_values_alone() {
        assert_eq!(round_to(1e308, Some(10)), 1e308);
        assert_eq!(round_to(2.0f64.sqrt(), None), 2.0f64.sqrt());
    }
}
