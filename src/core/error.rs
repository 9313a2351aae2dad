use std::fmt;

use thiserror::Error;

/// Which Brazilian document a [`DocumentError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas (individual taxpayer, 11 digits).
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica (company registry, 14 digits).
    Cnpj,
    /// Código de Endereçamento Postal (postal code, 8 digits).
    Cep,
}

impl DocumentKind {
    /// Number of digits a normalized document of this kind has.
    pub fn digit_count(self) -> usize {
        match self {
            Self::Cpf => 11,
            Self::Cnpj => 14,
            Self::Cep => 8,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Cep => "CEP",
        })
    }
}

/// Why a CPF, CNPJ or CEP was rejected.
///
/// Each variant corresponds to one stage of the
/// normalize, structural check, checksum pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// Wrong number of digits after stripping punctuation.
    #[error("{kind} must have {expected} digits, found {found}")]
    Length {
        kind: DocumentKind,
        expected: usize,
        found: usize,
    },

    /// All digits are the same (e.g. "000.000.000-00").
    #[error("{kind} must not consist of a single repeated digit")]
    RepeatedDigits { kind: DocumentKind },

    /// A check digit does not match the computed one.
    #[error("{kind} check digit {position} is {found}, expected {expected}")]
    CheckDigit {
        kind: DocumentKind,
        /// 1 for the first check digit, 2 for the second.
        position: u8,
        expected: u8,
        found: u8,
    },
}

impl DocumentError {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Length { kind, .. }
            | Self::RepeatedDigits { kind }
            | Self::CheckDigit { kind, .. } => *kind,
        }
    }

    /// Stable code for form errors, e.g. `CPF-CHECK`.
    pub fn code(&self) -> String {
        let stage = match self {
            Self::Length { .. } => "LENGTH",
            Self::RepeatedDigits { .. } => "REPEATED",
            Self::CheckDigit { .. } => "CHECK",
        };
        format!("{}-{stage}", self.kind())
    }
}

/// Why a phone number or email address was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ContactError {
    /// Phone does not start with the Brazilian `+55` prefix.
    #[error("phone number must start with +55")]
    MissingCountryCode,

    /// National number (area code + subscriber) is not 11 digits.
    #[error("phone number must have 11 digits after +55, found {found}")]
    NationalLength { found: usize },

    /// Third national digit is not the mobile prefix `9`.
    #[error("phone number must be a mobile number (9 after the area code)")]
    NotMobile,

    /// Address does not have the `local@domain.tld` shape.
    #[error("malformed email address")]
    MalformedEmail,
}

impl ContactError {
    /// Stable code for form errors, e.g. `PHONE-MOBILE`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCountryCode => "PHONE-COUNTRY",
            Self::NationalLength { .. } => "PHONE-LENGTH",
            Self::NotMobile => "PHONE-MOBILE",
            Self::MalformedEmail => "EMAIL-SHAPE",
        }
    }
}

/// Date or time input that could not be parsed or represented.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DateTimeError {
    /// Input does not have the expected textual shape.
    #[error("malformed date/time '{input}': expected {expected}")]
    Malformed {
        input: String,
        expected: &'static str,
    },

    /// Fields parsed but do not form a real date or instant
    /// (e.g. 31/02/2024, or a timestamp outside chrono's range).
    #[error("date/time out of range: '{0}'")]
    OutOfRange(String),
}

/// Top-level error type of the crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error(transparent)]
    DateTime(#[from] DateTimeError),

    /// One or more form validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered a missing required field.
    #[error("builder error: {0}")]
    Builder(String),
}

/// One rejected field of a registration or event form.
///
/// Forms report every failing field at once, so a sign-up screen can mark
/// the CPF, phone and birth date inputs together. `code` is the stable key
/// the screen matches on (`CPF-CHECK`, `PHONE-MOBILE`, `BIRTH-AGE`); the
/// message is for display and may change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Form field the error belongs to (e.g. "cpf", "birth_date").
    pub field: String,
    pub message: String,
    pub code: Option<String>,
}

/// `[CPF-CHECK] cpf: CPF check digit 2 is 4, expected 5`
impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{code}] {}: {}", self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// Report a rejected CPF, CNPJ or CEP under `field`, keeping the
    /// pipeline stage in the code (`CNPJ-REPEATED`).
    pub fn document(field: impl Into<String>, error: &DocumentError) -> Self {
        Self::with_code(field, error.to_string(), error.code())
    }

    /// Report a rejected phone number or email address under `field`.
    pub fn contact(field: impl Into<String>, error: &ContactError) -> Self {
        Self::with_code(field, error.to_string(), error.code())
    }

    /// Document kind behind this error, read from its code prefix.
    pub fn document_kind(&self) -> Option<DocumentKind> {
        let prefix = self.code.as_deref()?.split('-').next()?;
        match prefix {
            "CPF" => Some(DocumentKind::Cpf),
            "CNPJ" => Some(DocumentKind::Cnpj),
            "CEP" => Some(DocumentKind::Cep),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_error_messages() {
        let e = DocumentError::Length {
            kind: DocumentKind::Cpf,
            expected: 11,
            found: 4,
        };
        assert_eq!(e.to_string(), "CPF must have 11 digits, found 4");

        let e = DocumentError::CheckDigit {
            kind: DocumentKind::Cnpj,
            position: 2,
            expected: 1,
            found: 2,
        };
        assert_eq!(e.to_string(), "CNPJ check digit 2 is 2, expected 1");
    }

    #[test]
    fn top_level_error_is_transparent() {
        let e: Error = ContactError::MissingCountryCode.into();
        assert_eq!(e.to_string(), "phone number must start with +55");
    }

    #[test]
    fn validation_error_display() {
        let plain = ValidationError::new("name", "must not be empty");
        assert_eq!(plain.to_string(), "name: must not be empty");

        let coded = ValidationError::with_code("cpf", "invalid check digit", "CPF-CHECK");
        assert_eq!(coded.to_string(), "[CPF-CHECK] cpf: invalid check digit");
    }

    #[test]
    fn validation_error_from_pipeline_errors() {
        let e = ValidationError::document(
            "cnpj",
            &DocumentError::RepeatedDigits {
                kind: DocumentKind::Cnpj,
            },
        );
        assert_eq!(e.code.as_deref(), Some("CNPJ-REPEATED"));
        assert_eq!(e.document_kind(), Some(DocumentKind::Cnpj));

        let e = ValidationError::contact("phone", &ContactError::NotMobile);
        assert_eq!(e.to_string(), format!("[PHONE-MOBILE] phone: {}", ContactError::NotMobile));
        assert_eq!(e.document_kind(), None);
        assert_eq!(ValidationError::new("name", "empty").document_kind(), None);
    }

    #[test]
    fn error_codes() {
        let e = DocumentError::RepeatedDigits {
            kind: DocumentKind::Cnpj,
        };
        assert_eq!(e.code(), "CNPJ-REPEATED");
        assert_eq!(e.kind(), DocumentKind::Cnpj);
        assert_eq!(ContactError::NotMobile.code(), "PHONE-MOBILE");
    }

    #[test]
    fn digit_counts() {
        assert_eq!(DocumentKind::Cpf.digit_count(), 11);
        assert_eq!(DocumentKind::Cnpj.digit_count(), 14);
        assert_eq!(DocumentKind::Cep.digit_count(), 8);
    }
}
