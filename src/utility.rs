// 🔧 Utility - stateless helpers
//
// Conditional console logging, type-dispatching formatting, and a list
// processor that recovers from its own errors. `run` is the program entry.

use crate::error::AbsentValue;
use crate::value::Value;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::{self, Write};

/// Name reported by `Utility::name`
pub const UTILITY_NAME: &str = "Utils";

/// Logged once by the entry point
pub const STARTUP_MESSAGE: &str = "Starting...";

// ============================================================================
// LOGGING
// ============================================================================

/// Print `LOG: <message>` to stdout. An absent message is ignored.
pub fn log(message: Option<&str>) -> io::Result<()> {
    log_to(message, &mut io::stdout().lock())
}

pub fn log_to<W: Write>(message: Option<&str>, out: &mut W) -> io::Result<()> {
    if let Some(message) = message {
        writeln!(out, "LOG: {}", message)?;
    }
    Ok(())
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Describe a value.
///
/// - text    → `String: <value>`
/// - integer → `Int: <value>`
/// - other   → the value's default textual form
///
/// There is no textual form for an absent value, so `None` is an
/// `AbsentValue` error.
pub fn format(value: Option<&Value>) -> Result<String> {
    let value = value.ok_or_else(|| AbsentValue::new("format", "value"))?;

    Ok(match value {
        Value::Text(s) => format!("String: {}", s),
        Value::Integer(i) => format!("Int: {}", i),
        other => other.to_string(),
    })
}

// ============================================================================
// LIST PROCESSING
// ============================================================================

/// Map every item to its length in bytes.
///
/// A failure part way through is reported as `Error: <message>` on `out`
/// and does not propagate; entries inserted before the failure are kept.
/// Only a failed write to `out` is returned as an error.
pub fn collect_lengths<W: Write>(
    items: &[String],
    out: &mut W,
) -> io::Result<HashMap<String, serde_json::Value>> {
    collect_with(items, out, |item| {
        serde_json::to_value(item.len())
            .with_context(|| format!("length of '{}' is not representable", item))
    })
}

/// Map every item through `value_of`, stopping at the first failure
fn collect_with<W, F>(
    items: &[String],
    out: &mut W,
    mut value_of: F,
) -> io::Result<HashMap<String, serde_json::Value>>
where
    W: Write,
    F: FnMut(&str) -> Result<serde_json::Value>,
{
    let mut config: HashMap<String, serde_json::Value> = HashMap::new();

    let result: Result<()> = items.iter().try_for_each(|item| {
        let value = value_of(item.as_str())?;
        config.insert(item.clone(), value);
        Ok(())
    });

    if let Err(e) = result {
        writeln!(out, "Error: {}", e)?;
    }

    Ok(config)
}

// ============================================================================
// UTILITY HANDLE
// ============================================================================

/// Instance-level helpers. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utility;

impl Utility {
    pub fn new() -> Self {
        Utility
    }

    pub fn name(&self) -> &'static str {
        UTILITY_NAME
    }

    /// Accepted for API compatibility; has no effect
    pub fn set_debug(&mut self, _debug: bool) {}

    /// Run the length collector over an empty list and discard the result
    pub fn process_items(&self) -> io::Result<()> {
        self.process_items_to(&mut io::stdout().lock())
    }

    pub fn process_items_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let items: Vec<String> = Vec::new();
        collect_lengths(&items, out)?;
        Ok(())
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Program entry: log the startup message once
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    log_to(Some(STARTUP_MESSAGE), out).context("failed to write startup log")?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Record;

    fn captured(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_log_present_message() {
        let output = captured(|out| log_to(Some("hello"), out));
        assert_eq!(output, "LOG: hello\n");
    }

    #[test]
    fn test_log_absent_message_is_silent() {
        assert_eq!(captured(|out| log_to(None, out)), "");
    }

    #[test]
    fn test_log_empty_message_is_still_logged() {
        assert_eq!(captured(|out| log_to(Some(""), out)), "LOG: \n");
    }

    #[test]
    fn test_format_text_and_integer() {
        assert_eq!(format(Some(&Value::from("hi"))).unwrap(), "String: hi");
        assert_eq!(format(Some(&Value::from(5))).unwrap(), "Int: 5");
    }

    #[test]
    fn test_format_other_uses_default_form() {
        assert_eq!(format(Some(&Value::from(2.5))).unwrap(), "2.5");
        assert_eq!(format(Some(&Value::from(true))).unwrap(), "true");

        let mut record = Record::new();
        record.set_email(Some("a@x.com".to_string()));
        assert_eq!(
            format(Some(&Value::from(record))).unwrap(),
            r#"{"email":"a@x.com"}"#
        );
    }

    #[test]
    fn test_format_absent_value_is_error() {
        let err = format(None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<AbsentValue>(),
            Some(&AbsentValue::new("format", "value"))
        );
    }

    #[test]
    fn test_process_items_is_silent() {
        let utility = Utility::new();
        assert_eq!(captured(|out| utility.process_items_to(out)), "");
    }

    #[test]
    fn test_collect_lengths() {
        let items = vec!["a".to_string(), "abc".to_string(), "".to_string()];
        let mut out = Vec::new();

        let config = collect_lengths(&items, &mut out).unwrap();

        assert!(out.is_empty());
        assert_eq!(config.len(), 3);
        assert_eq!(config["a"], serde_json::json!(1));
        assert_eq!(config["abc"], serde_json::json!(3));
        assert_eq!(config[""], serde_json::json!(0));
    }

    #[test]
    fn test_collect_lengths_reports_error_and_keeps_prefix() {
        let items = vec!["first".to_string(), "second".to_string(), "third".to_string()];
        let mut out = Vec::new();
        let mut visited = Vec::new();

        let config = collect_with(&items, &mut out, |item| {
            visited.push(item.to_string());
            if item == "second" {
                anyhow::bail!("cannot measure '{}'", item);
            }
            Ok(serde_json::json!(item.len()))
        })
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Error: cannot measure 'second'\n");
        assert_eq!(config.len(), 1);
        assert_eq!(config["first"], serde_json::json!(5));
        assert!(!config.contains_key("second"));

        // Iteration stops at the failing item
        assert_eq!(visited, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_collect_lengths_duplicate_items_collapse() {
        let items = vec!["x".to_string(), "x".to_string()];
        let config = collect_lengths(&items, &mut Vec::new()).unwrap();

        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_utility_name_and_debug() {
        let mut utility = Utility::new();
        utility.set_debug(true);
        utility.set_debug(false);

        assert_eq!(utility.name(), "Utils");
    }

    #[test]
    fn test_run_logs_startup_once() {
        let mut out = Vec::new();
        run(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "LOG: Starting...\n");
    }
}
