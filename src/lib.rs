//! # cadastro
//!
//! Input validation and formatting for Brazilian sign-up forms:
//! CPF, CNPJ, CEP, mobile phone, email, and `DD/MM/YYYY` dates.
//!
//! Every validator is a pure function. The boolean forms (`valid_cpf`, ...)
//! never panic and return `false` for anything malformed; the `check_*`
//! twins return a typed error naming the stage that rejected the input.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::contact::valid_phone;
//! use cadastro::core::mask_cpf;
//! use cadastro::datetime::format_date_time;
//! use cadastro::documents::{check_cpf, valid_cnpj};
//!
//! assert!(valid_cnpj("11.222.333/0001-81"));
//! assert!(valid_phone("+55 (42) 99999-9999"));
//!
//! let cpf = check_cpf("52998224725").unwrap();
//! assert_eq!(cpf.to_string(), "529.982.247-25");
//! assert_eq!(mask_cpf("5299822"), "529.982.2");
//!
//! assert_eq!(format_date_time("2024-05-01T17:30:00Z").unwrap(), "01/05/2024 14:30");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `documents` | CPF, CNPJ, CEP |
//! | `contact` | Phone and email (pulls in `regex`) |
//! | `datetime` | Date formatting, parsing, range checks |
//! | `forms` (default) | Sign-up and event form validation; enables the three above |
//! | `all` | Everything |

pub mod core;

#[cfg(feature = "documents")]
pub mod documents;

#[cfg(feature = "contact")]
pub mod contact;

#[cfg(feature = "datetime")]
pub mod datetime;

#[cfg(feature = "forms")]
pub mod forms;

pub use crate::core::{ContactError, DateTimeError, DocumentError, Error, ValidationError};
