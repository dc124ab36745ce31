// Entity Models
// Record: name/email/age data holder

pub mod record;

pub use record::{Record, ADULT_AGE};
