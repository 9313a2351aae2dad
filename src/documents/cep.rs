//! CEP (Código de Endereçamento Postal) validation.
//!
//! Structural only: there is no check digit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CEP_MASK, DocumentError, DocumentKind, apply_mask, digits_to_string, structural};

/// A validated postal code, stored as its 8 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cep(String);

impl Cep {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First digit, the postal region (8 = Paraná and Santa Catarina, ...).
    pub fn region(&self) -> u8 {
        self.0.as_bytes()[0] - b'0'
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&apply_mask(CEP_MASK, &self.0))
    }
}

impl AsRef<str> for Cep {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Cep {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_cep(s)
    }
}

impl TryFrom<String> for Cep {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_cep(&value)
    }
}

impl From<Cep> for String {
    fn from(cep: Cep) -> Self {
        cep.0
    }
}

pub fn check_cep(input: &str) -> Result<Cep, DocumentError> {
    let digits = structural(DocumentKind::Cep, input)?;
    Ok(Cep(digits_to_string(&digits)))
}

/// True iff exactly 8 digits remain after stripping punctuation.
pub fn valid_cep(input: &str) -> bool {
    check_cep(input).is_ok()
}
