//! CPF (Cadastro de Pessoas Físicas) validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CPF_MASK, DocumentError, DocumentKind, apply_mask, digits_to_string, structural};

use super::verify_check_digits;

/// A validated CPF, stored as its 11 digits.
///
/// Displays with the usual mask:
///
/// ```
/// use cadastro::documents::Cpf;
///
/// let cpf: Cpf = "52998224725".parse().unwrap();
/// assert_eq!(cpf.to_string(), "529.982.247-25");
/// assert_eq!(cpf.as_str(), "52998224725");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// The 11 digits without punctuation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&apply_mask(CPF_MASK, &self.0))
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_cpf(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_cpf(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

/// Compute the two check digits completing a 9-digit CPF base.
///
/// ```
/// assert_eq!(cadastro::documents::cpf_check_digits(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), [2, 5]);
/// ```
pub fn cpf_check_digits(base: &[u8; 9]) -> [u8; 2] {
    let first = mod11_digit(base.iter().copied(), 10);
    let second = mod11_digit(base.iter().copied().chain(std::iter::once(first)), 11);
    [first, second]
}

/// Weighted sum with weights descending from `top_weight` to 2,
/// then `(sum * 10) mod 11` with 10 collapsed to 0.
fn mod11_digit(digits: impl Iterator<Item = u8>, top_weight: u32) -> u8 {
    let sum: u32 = digits
        .zip((2..=top_weight).rev())
        .map(|(d, w)| u32::from(d) * w)
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r as u8,
    }
}

/// Validate a CPF, returning the normalized value or the failing stage.
pub fn check_cpf(input: &str) -> Result<Cpf, DocumentError> {
    let digits = structural(DocumentKind::Cpf, input)?;
    let mut base = [0u8; 9];
    base.copy_from_slice(&digits[..9]);
    verify_check_digits(DocumentKind::Cpf, &digits, cpf_check_digits(&base))?;
    Ok(Cpf(digits_to_string(&digits)))
}

/// True if `input` is a valid CPF, with or without punctuation.
pub fn valid_cpf(input: &str) -> bool {
    check_cpf(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_valid() {
        assert!(valid_cpf("529.982.247-25"));
        assert!(valid_cpf("52998224725"));
        assert!(valid_cpf("123.456.789-09"));
        assert!(valid_cpf(" 529 982 247 25 "));
    }

    #[test]
    fn repeated_digits_rejected() {
        for d in 0..=9 {
            let s = d.to_string().repeat(11);
            assert_eq!(
                check_cpf(&s).unwrap_err(),
                DocumentError::RepeatedDigits {
                    kind: DocumentKind::Cpf
                },
                "{s}"
            );
        }
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(!valid_cpf(""));
        assert!(!valid_cpf("5299822472"));
        assert!(!valid_cpf("529982247250"));
        assert!(!valid_cpf("not a cpf"));
    }

    #[test]
    fn corrupted_second_digit() {
        assert_eq!(
            check_cpf("529.982.247-26").unwrap_err(),
            DocumentError::CheckDigit {
                kind: DocumentKind::Cpf,
                position: 2,
                expected: 5,
                found: 6,
            }
        );
    }

    #[test]
    fn corrupted_first_digit() {
        let err = check_cpf("529.982.247-35").unwrap_err();
        assert!(matches!(
            err,
            DocumentError::CheckDigit { position: 1, expected: 2, found: 3, .. }
        ));
    }

    #[test]
    fn remainder_ten_collapses_to_zero() {
        // 1..9 weighted sum is 210, (210 * 10) mod 11 == 10.
        assert_eq!(cpf_check_digits(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), [0, 9]);
    }

    #[test]
    fn normalized_value_is_digits_only() {
        let cpf = check_cpf("529.982.247-25").unwrap();
        assert_eq!(cpf.as_str(), "52998224725");
        assert_eq!(String::from(cpf), "52998224725");
    }
}
