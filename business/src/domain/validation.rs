use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static NUMERIC: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").ok());
static INTEGER: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[-+]?(0|[1-9][0-9]*)$").ok());

/// Where a validated value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Params,
    Body,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Params => write!(f, "params"),
            Location::Body => write!(f, "body"),
        }
    }
}

/// A single failed check against one request field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub value: Option<Value>,
    pub msg: &'static str,
    pub path: &'static str,
    pub location: Location,
}

/// The raw parts of a request the rules are allowed to look at.
#[derive(Debug, Default)]
pub struct RequestInput<'a> {
    pub id: Option<&'a str>,
    pub body: Option<&'a Value>,
}

impl<'a> RequestInput<'a> {
    pub fn new(id: Option<&'a str>, body: Option<&'a Value>) -> Self {
        Self { id, body }
    }

    /// Looks up a top-level field of the JSON body. Non-object bodies have no fields.
    pub fn body_field(&self, name: &str) -> Option<&'a Value> {
        self.body.and_then(|body| body.get(name))
    }
}

/// A check against one field producing zero or one error.
pub type Rule = fn(&RequestInput<'_>) -> Option<FieldError>;

/// Runs every rule in order and collects all failures. No rule short-circuits another.
pub fn run(rules: &[Rule], input: &RequestInput<'_>) -> Vec<FieldError> {
    rules.iter().filter_map(|rule| rule(input)).collect()
}

/// Text form of a body value, as loosely-typed form validators see it.
pub fn text_form(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| text_form(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// Numeric form of a body value, used by relational checks such as `price > 0`.
///
/// A missing value and objects are NaN, `null` is 0, booleans are 1/0 and
/// strings are parsed after trimming (the empty string is 0).
pub fn numeric_form(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Object(_)) => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::String(s)) => parse_number(s),
        Some(array @ Value::Array(_)) => parse_number(&text_form(Some(array))),
    }
}

fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    // `f64::from_str` also accepts "inf" and "nan".
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

pub fn is_numeric(text: &str) -> bool {
    NUMERIC.as_ref().is_some_and(|re| re.is_match(text))
}

pub fn is_int(text: &str) -> bool {
    INTEGER.as_ref().is_some_and(|re| re.is_match(text))
}

/// Accepts exactly `true`, `false`, `1` and `0`.
pub fn as_boolean(text: &str) -> Option<bool> {
    match text {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
