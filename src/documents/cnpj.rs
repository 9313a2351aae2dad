//! CNPJ (Cadastro Nacional da Pessoa Jurídica) validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{
    CNPJ_MASK, DocumentError, DocumentKind, apply_mask, digits_to_string, structural,
};

use super::verify_check_digits;

/// Weights for the first check digit (over the 12-digit base).
pub const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit (base plus first check digit).
pub const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// A validated CNPJ, stored as its 14 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// The 14 digits without punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 4-digit branch number (`0001` is the head office).
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    pub fn is_head_office(&self) -> bool {
        self.branch() == "0001"
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&apply_mask(CNPJ_MASK, &self.0))
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_cnpj(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_cnpj(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

/// Compute the two check digits completing a 12-digit CNPJ base.
///
/// ```
/// let base = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1];
/// assert_eq!(cadastro::documents::cnpj_check_digits(&base), [8, 1]);
/// ```
pub fn cnpj_check_digits(base: &[u8; 12]) -> [u8; 2] {
    let first = mod11_digit(base.iter().copied(), &CNPJ_FIRST_WEIGHTS);
    let second = mod11_digit(
        base.iter().copied().chain(std::iter::once(first)),
        &CNPJ_SECOND_WEIGHTS,
    );
    [first, second]
}

/// `sum mod 11`, giving 0 for remainders below 2 and `11 - r` otherwise.
fn mod11_digit(digits: impl Iterator<Item = u8>, weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .zip(weights)
        .map(|(d, w)| u32::from(d) * w)
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Validate a CNPJ, returning the normalized value or the failing stage.
pub fn check_cnpj(input: &str) -> Result<Cnpj, DocumentError> {
    let digits = structural(DocumentKind::Cnpj, input)?;
    let mut base = [0u8; 12];
    base.copy_from_slice(&digits[..12]);
    verify_check_digits(DocumentKind::Cnpj, &digits, cnpj_check_digits(&base))?;
    Ok(Cnpj(digits_to_string(&digits)))
}

/// True if `input` is a valid CNPJ, with or without punctuation.
pub fn valid_cnpj(input: &str) -> bool {
    check_cnpj(input).is_ok()
}
