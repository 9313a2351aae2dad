//! Sign-up and event form validation.
//!
//! Forms hold what the user typed; validation runs every field through
//! the document, contact, and date checks and reports all failures at once
//! as [`ValidationError`](crate::core::ValidationError)s with stable codes
//! (`CPF-CHECK`, `PHONE-MOBILE`, `BIRTH-AGE`, ...).

mod builder;
mod types;
mod validation;

pub use builder::*;
pub use types::*;
pub use validation::*;
