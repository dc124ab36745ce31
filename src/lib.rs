// Fixture Kit - Core Library
// Exposes the Record entity and the Utility helpers for the CLI and tests

pub mod entities;
pub mod error;
pub mod utility;
pub mod value;

// Re-export commonly used types
pub use entities::{Record, ADULT_AGE};
pub use error::AbsentValue;
pub use utility::{
    collect_lengths, format, log, log_to, run,
    Utility, STARTUP_MESSAGE, UTILITY_NAME,
};
pub use value::Value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
