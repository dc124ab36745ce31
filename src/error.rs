use std::fmt;

/// An absent value reached an operation that needs it to be present.
///
/// Returned (inside `anyhow::Error`) by `Record::equals` when the receiver has
/// no name, and by `utility::format` when it is handed no value at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsentValue {
    /// Operation that hit the absent value (e.g. "Record::equals")
    pub operation: &'static str,

    /// What was absent (e.g. "name")
    pub what: &'static str,
}

impl AbsentValue {
    pub fn new(operation: &'static str, what: &'static str) -> Self {
        AbsentValue { operation, what }
    }
}

impl fmt::Display for AbsentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} is absent", self.operation, self.what)
    }
}

impl std::error::Error for AbsentValue {}
