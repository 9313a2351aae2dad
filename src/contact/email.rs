//! Email address shape check.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::ContactError;

/// `local@domain.tld`: no whitespace or `@` in either part, a dot in the
/// domain, and a TLD of at least two ASCII letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
});

/// An email address with a plausible `local@domain.tld` shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_email(s)
    }
}

impl TryFrom<String> for Email {
    type Error = ContactError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check_email(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

/// Validate an email address; surrounding whitespace is trimmed first.
pub fn check_email(input: &str) -> Result<Email, ContactError> {
    let trimmed = input.trim();
    if EMAIL_REGEX.is_match(trimmed) {
        Ok(Email(trimmed.to_string()))
    } else {
        tracing::debug!(stage = "shape", len = trimmed.len(), "email rejected");
        Err(ContactError::MalformedEmail)
    }
}

pub fn valid_email(input: &str) -> bool {
    check_email(input).is_ok()
}
