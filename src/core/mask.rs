//! Progressive input masks for form fields.
//!
//! Masks are applied on every keystroke: only the digits of the input
//! are kept and poured into the pattern. A literal is emitted only once a
//! digit follows it, so partially typed input never ends in punctuation.

/// Placeholder for one digit in a mask pattern.
pub const DIGIT_SLOT: char = '#';

pub const CPF_MASK: &str = "###.###.###-##";
pub const CNPJ_MASK: &str = "##.###.###/####-##";
pub const CEP_MASK: &str = "#####-###";
pub const PHONE_MASK: &str = "+## (##) #####-####";
pub const DATE_MASK: &str = "##/##/####";
pub const TIME_MASK: &str = "##:##";

/// Pour the digits of `input` into `pattern`.
///
/// Digits beyond the last slot are dropped.
///
/// ```
/// use cadastro::core::{apply_mask, CPF_MASK};
///
/// assert_eq!(apply_mask(CPF_MASK, "1234"), "123.4");
/// assert_eq!(apply_mask(CPF_MASK, "123456789091234"), "123.456.789-09");
/// ```
pub fn apply_mask(pattern: &str, input: &str) -> String {
    let mut digits = input.chars().filter(char::is_ascii_digit).peekable();
    let mut out = String::with_capacity(pattern.len());

    for slot in pattern.chars() {
        if digits.peek().is_none() {
            break;
        }
        if slot == DIGIT_SLOT {
            if let Some(d) = digits.next() {
                out.push(d);
            }
        } else {
            out.push(slot);
        }
    }
    out
}

pub fn mask_cpf(input: &str) -> String {
    apply_mask(CPF_MASK, input)
}

pub fn mask_cnpj(input: &str) -> String {
    apply_mask(CNPJ_MASK, input)
}

pub fn mask_cep(input: &str) -> String {
    apply_mask(CEP_MASK, input)
}

/// Mask a phone number as `+55 (42) 99999-9999`.
///
/// A missing country code is not inserted; the first two digits typed
/// always land in the country slot.
pub fn mask_phone(input: &str) -> String {
    apply_mask(PHONE_MASK, input)
}

pub fn mask_date(input: &str) -> String {
    apply_mask(DATE_MASK, input)
}

pub fn mask_time(input: &str) -> String {
    apply_mask(TIME_MASK, input)
}
