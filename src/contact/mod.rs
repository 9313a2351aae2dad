//! Phone number and email address validation.
//!
//! # Example
//!
//! ```
//! use cadastro::contact::*;
//!
//! assert!(valid_phone("+55 (42) 99999-9999"));
//! assert!(!valid_phone("+55 (42) 89999-9999"));
//! assert!(valid_email("a@b.com"));
//! ```

mod email;
mod phone;

pub use email::{Email, check_email, valid_email};
pub use phone::{COUNTRY_PREFIX, NATIONAL_DIGITS, Phone, check_phone, valid_phone};
