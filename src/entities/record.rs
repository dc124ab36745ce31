// 👤 Record Entity - name / email / age holder
//
// Every field may be absent. A Record is created empty and filled in through
// setters or from a string map. Identity for equality purposes is the name.

use crate::error::AbsentValue;
use crate::value::Value;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Write};

/// Age at which `is_adult` flips to true
pub const ADULT_AGE: i32 = 18;

/// Printed in place of an absent email
const ABSENT: &str = "null";

// ============================================================================
// RECORD ENTITY
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,

    /// Absent means "unknown"
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<i32>,
}

impl Record {
    /// Create an empty record (all fields absent)
    pub fn new() -> Self {
        Record::default()
    }

    /// Build a record from the `name` and `email` keys of a map.
    ///
    /// Missing keys leave the field absent. `age` is never read.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let mut record = Record::new();
        record.set_name(map.get("name").cloned());
        record.set_email(map.get("email").cloned());
        record
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    pub fn set_age(&mut self, age: Option<i32>) {
        self.age = age;
    }

    /// Unknown age is not adult
    pub fn is_adult(&self) -> bool {
        match self.age {
            Some(age) => age >= ADULT_AGE,
            None => false,
        }
    }

    /// Print `Name: <name>, Email: <email>` to stdout when a name is set
    pub fn print_info(&self) -> io::Result<()> {
        self.print_info_to(&mut io::stdout().lock())
    }

    pub fn print_info_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(name) = &self.name {
            writeln!(
                out,
                "Name: {}, Email: {}",
                name,
                self.email.as_deref().unwrap_or(ABSENT)
            )?;
        }
        Ok(())
    }

    /// Print text and integer items with their kind; ignore everything else
    pub fn process(&self, item: &Value) -> io::Result<()> {
        self.process_to(item, &mut io::stdout().lock())
    }

    pub fn process_to<W: Write>(&self, item: &Value, out: &mut W) -> io::Result<()> {
        match item {
            Value::Text(s) => writeln!(out, "String: {}", s),
            Value::Integer(i) => writeln!(out, "Integer: {}", i),
            Value::Record(_) | Value::Other(_) => Ok(()),
        }
    }

    /// Container demo. Builds a list, a score map and a task closure, then
    /// drops all three. The task is never run.
    pub fn handle_list(&self) {
        let _names: Vec<String> = vec!["Alice".to_string(), "Bob".to_string()];

        let mut scores: HashMap<String, i32> = HashMap::new();
        scores.insert("Alice".to_string(), 100);

        let _task = || {
            println!("Running task");
        };
    }

    /// Name-based equality against an arbitrary item.
    ///
    /// Non-record items are never equal. Comparing from a record whose own
    /// name is absent is an error (`AbsentValue`), even when `other` also has
    /// no name.
    pub fn equals(&self, other: &Value) -> Result<bool> {
        let Some(other) = other.as_record() else {
            return Ok(false);
        };

        let name = self
            .name
            .as_deref()
            .ok_or_else(|| AbsentValue::new("Record::equals", "name"))?;

        Ok(other.name.as_deref() == Some(name))
    }
}

/// Same name, both present. An absent name never equals anything, itself
/// included. Use `equals` to surface that case as an error.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        match (&self.name, &other.name) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
