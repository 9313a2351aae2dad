//! First and second stages of the document pipeline:
//! strip punctuation, then check the digit count and repeated digits.

#[cfg(feature = "documents")]
use super::error::{DocumentError, DocumentKind};

/// Keep only ASCII digits.
///
/// ```
/// assert_eq!(cadastro::core::digits_only("123.456.789-09"), "12345678909");
/// ```
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Digits of `input` as numeric values, punctuation dropped.
pub fn digit_values(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Keep digits plus a `+` when it is the first non-whitespace character
/// and the only `+` in the input.
///
/// ```
/// assert_eq!(cadastro::core::phone_chars(" +55 (42) 99999-9999"), "+5542999999999");
/// assert_eq!(cadastro::core::phone_chars("55+42"), "5542");
/// assert_eq!(cadastro::core::phone_chars("++55"), "55");
/// ```
pub fn phone_chars(input: &str) -> String {
    let trimmed = input.trim_start();
    let mut out = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') && trimmed.matches('+').count() == 1 {
        out.push('+');
    }
    out.extend(trimmed.chars().filter(|c| c.is_ascii_digit()));
    out
}

/// True when every digit equals the first one.
pub fn is_repeated(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// Normalize and run the structural checks shared by all document kinds.
///
/// Returns the digit values on success. Repeated-digit rejection only
/// applies to kinds with check digits.
#[cfg(feature = "documents")]
pub(crate) fn structural(kind: DocumentKind, input: &str) -> Result<Vec<u8>, DocumentError> {
    let digits = digit_values(input);
    let expected = kind.digit_count();
    if digits.len() != expected {
        tracing::debug!(%kind, stage = "length", found = digits.len(), "document rejected");
        return Err(DocumentError::Length {
            kind,
            expected,
            found: digits.len(),
        });
    }
    if kind != DocumentKind::Cep && is_repeated(&digits) {
        tracing::debug!(%kind, stage = "repeated", "document rejected");
        return Err(DocumentError::RepeatedDigits { kind });
    }
    Ok(digits)
}

/// Render digit values back into a string.
#[cfg(feature = "documents")]
pub(crate) fn to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_everything_but_digits() {
        assert_eq!(digits_only("11.222.333/0001-81"), "11222333000181");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only(""), "");
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        // Arabic-Indic digits are not accepted as document digits.
        assert_eq!(digits_only("١٢٣4"), "4");
        assert_eq!(digit_values("١٢٣4"), vec![4]);
    }

    #[test]
    fn phone_plus_only_when_leading() {
        assert_eq!(phone_chars("+55 42 9"), "+55429");
        assert_eq!(phone_chars("  +55"), "+55");
        assert_eq!(phone_chars("55 +42"), "5542");
        assert_eq!(phone_chars("++55"), "55");
        assert_eq!(phone_chars("+55 +42"), "5542");
    }

    #[test]
    fn repeated_detection() {
        assert!(is_repeated(&[1, 1, 1]));
        assert!(is_repeated(&[]));
        assert!(!is_repeated(&[1, 1, 2]));
    }

    #[cfg(feature = "documents")]
    #[test]
    fn structural_length() {
        let err = structural(DocumentKind::Cpf, "123").unwrap_err();
        assert_eq!(
            err,
            DocumentError::Length {
                kind: DocumentKind::Cpf,
                expected: 11,
                found: 3
            }
        );
    }

    #[cfg(feature = "documents")]
    #[test]
    fn structural_repeated_skipped_for_cep() {
        assert!(structural(DocumentKind::Cep, "00000-000").is_ok());
        assert_eq!(
            structural(DocumentKind::Cpf, "000.000.000-00").unwrap_err(),
            DocumentError::RepeatedDigits {
                kind: DocumentKind::Cpf
            }
        );
    }

    #[cfg(feature = "documents")]
    #[test]
    fn digits_render_back() {
        assert_eq!(to_string(&[0, 1, 9]), "019");
    }
}
