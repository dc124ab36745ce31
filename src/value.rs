// 🧩 Value - the runtime shape of an arbitrary item
//
// Record::process and utility::format dispatch on "what kind of thing is this".
// Instead of inspecting types at runtime, every item is one of these variants.

use crate::entities::Record;
use std::fmt;

// ============================================================================
// VALUE
// ============================================================================

/// An item handed to a type-dispatching operation.
///
/// `Text` and `Integer` are the two shapes the dispatchers have dedicated
/// branches for. Everything else falls through to its default textual form.
/// Absence is not a variant: callers model it as `Option<Value>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Textual item
    Text(String),

    /// 32-bit signed integer item
    Integer(i32),

    /// A Record passed where any item is accepted (see Record::equals)
    Record(Box<Record>),

    /// Any other shape: floats, booleans, arrays, objects, wide integers
    Other(serde_json::Value),
}

impl Value {
    /// Classify a JSON value.
    ///
    /// `null` is the absent value and yields `None`. Integers that do not fit
    /// in an `i32` are not `Integer` and land in `Other`.
    pub fn from_json(json: serde_json::Value) -> Option<Value> {
        match json {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(Value::Text(s)),
            serde_json::Value::Number(n) => {
                match n.as_i64().and_then(|i| i32::try_from(i).ok()) {
                    Some(i) => Some(Value::Integer(i)),
                    None => Some(Value::Other(serde_json::Value::Number(n))),
                }
            }
            other => Some(Value::Other(other)),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Integer(_) => "integer",
            Value::Record(_) => "record",
            Value::Other(_) => "other",
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(&**record),
            _ => None,
        }
    }
}

/// Default textual representation
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Record(record) => {
                let json = serde_json::to_string(record).map_err(|_| fmt::Error)?;
                write!(f, "{}", json)
            }
            Value::Other(json) => write!(f, "{}", json),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i)
    }
}

/// Non-finite floats have no JSON number form and become JSON `null`.
impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Other(serde_json::Value::from(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Other(serde_json::Value::Bool(b))
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(Box::new(record))
    }
}

// ============================================================================
// TESTS
// ============================================================================
