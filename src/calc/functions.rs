use super::error::ErrorKind;

pub type UnaryFn = fn(f64) -> Result<f64, ErrorKind>;

const FUNCTIONS: &[(&str, UnaryFn)] = &[
    ("sin", |x: f64| Ok(x.sin())),
    ("cos", |x: f64| Ok(x.cos())),
    ("tan", |x: f64| Ok(x.tan())),
    ("abs", |x: f64| Ok(x.abs())),
    ("sqrt", sqrt),
    ("exp", |x: f64| Ok(x.exp())),
    ("ln", ln),
    ("log10", log10),
];

fn sqrt(x: f64) -> Result<f64, ErrorKind> {
    if x < 0.0 {
        return Err(ErrorKind::NegativeSqrt);
    }
    Ok(x.sqrt())
}

fn ln(x: f64) -> Result<f64, ErrorKind> {
    if x <= 0.0 {
        return Err(ErrorKind::NonPositiveLn);
    }
    Ok(x.ln())
}

fn log10(x: f64) -> Result<f64, ErrorKind> {
    if x <= 0.0 {
        return Err(ErrorKind::NonPositiveLog10);
    }
    Ok(x.log10())
}

pub fn lookup(name: &str) -> Option<UnaryFn> {
    FUNCTIONS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, f)| *f)
}

pub fn apply(name: &str, x: f64) -> Result<f64, ErrorKind> {
    let f = lookup(name).ok_or_else(|| ErrorKind::UnknownFunction(name.to_string()))?;
    f(x)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    FUNCTIONS.iter().map(|(name, _)| *name)
}
