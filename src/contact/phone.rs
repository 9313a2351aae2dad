//! Brazilian mobile phone numbers in `+55` international form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ContactError, mask_phone, phone_chars};

/// Brazilian country calling code, including the plus.
pub const COUNTRY_PREFIX: &str = "+55";

/// Area code (DDD) plus 9-digit mobile subscriber number.
pub const NATIONAL_DIGITS: usize = 11;

/// A validated mobile number, stored as `+55` followed by 11 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// The E.164 form, e.g. `+5542999999999`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 11-digit national number.
    pub fn national(&self) -> &str {
        &self.0[COUNTRY_PREFIX.len()..]
    }

    /// Two-digit area code (DDD).
    pub fn area_code(&self) -> &str {
        &self.national()[..2]
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_phone(&self.0))
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_phone(s)
    }
}

impl TryFrom<String> for Phone {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_phone(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

/// Validate a phone number, returning the E.164 form or the reason it failed.
pub fn check_phone(input: &str) -> Result<Phone, ContactError> {
    let cleaned = phone_chars(input);

    let Some(national) = cleaned.strip_prefix(COUNTRY_PREFIX) else {
        tracing::debug!(stage = "country_code", "phone rejected");
        return Err(ContactError::MissingCountryCode);
    };

    if national.len() != NATIONAL_DIGITS {
        tracing::debug!(stage = "length", found = national.len(), "phone rejected");
        return Err(ContactError::NationalLength {
            found: national.len(),
        });
    }

    if national.as_bytes()[2] != b'9' {
        tracing::debug!(stage = "mobile_prefix", "phone rejected");
        return Err(ContactError::NotMobile);
    }

    Ok(Phone(cleaned))
}

/// True for `+55` numbers with an 11-digit national part whose third digit is `9`.
///
/// The `+` must lead the input and appear once: `(+55) 42 99999-9999` and
/// `++55 42 99999-9999` are both missing the country code.
pub fn valid_phone(input: &str) -> bool {
    check_phone(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_mobile() {
        assert!(valid_phone("+5542999999999"));
        assert!(valid_phone("+55 (42) 99999-9999"));
        assert!(valid_phone("  +55 11 91234-5678"));
    }

    #[test]
    fn third_digit_must_be_nine() {
        assert_eq!(
            check_phone("+5542899999999").unwrap_err(),
            ContactError::NotMobile
        );
    }

    #[test]
    fn country_code_required() {
        assert_eq!(
            check_phone("42999999999").unwrap_err(),
            ContactError::MissingCountryCode
        );
        // Digits alone are not enough, the plus must lead.
        assert_eq!(
            check_phone("5542999999999").unwrap_err(),
            ContactError::MissingCountryCode
        );
        assert_eq!(
            check_phone("+1 555 999 9999").unwrap_err(),
            ContactError::MissingCountryCode
        );
    }

    #[test]
    fn plus_must_be_single_and_leading() {
        for input in ["++5542999999999", "(+55) 42 99999-9999", "+55 +42 99999-9999"] {
            assert_eq!(
                check_phone(input).unwrap_err(),
                ContactError::MissingCountryCode,
                "{input}"
            );
        }
    }

    #[test]
    fn national_length() {
        assert_eq!(
            check_phone("+554299999999").unwrap_err(),
            ContactError::NationalLength { found: 10 }
        );
        assert_eq!(
            check_phone("+55").unwrap_err(),
            ContactError::NationalLength { found: 0 }
        );
    }

    #[test]
    fn accessors() {
        let phone: Phone = "+55 (42) 99876-5432".parse().unwrap();
        assert_eq!(phone.as_str(), "+5542998765432");
        assert_eq!(phone.national(), "42998765432");
        assert_eq!(phone.area_code(), "42");
        assert_eq!(phone.to_string(), "+55 (42) 99876-5432");
    }
}
