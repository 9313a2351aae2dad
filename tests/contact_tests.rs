#![cfg(feature = "contact")]

use cadastro::contact::*;
use cadastro::core::ContactError;

// ---------------------------------------------------------------------------
// Phone
// ---------------------------------------------------------------------------

#[test]
fn phone_mobile_valid() {
    assert!(valid_phone("+5542999999999"));
    assert!(valid_phone("+55 (11) 98765-4321"));
}

#[test]
fn phone_third_digit_not_nine() {
    assert!(!valid_phone("+5542899999999"));
}

#[test]
fn phone_missing_country_code() {
    assert!(!valid_phone("42999999999"));
    assert!(!valid_phone("(42) 99999-9999"));
    assert!(!valid_phone("+5442999999999"));
}

#[test]
fn phone_landline_length_rejected() {
    assert_eq!(
        check_phone("+55 42 3333-4444").unwrap_err(),
        ContactError::NationalLength { found: 10 }
    );
}

#[test]
fn phone_display_and_serde() {
    let phone: Phone = serde_json::from_str(r#""+55 (42) 99999-9999""#).unwrap();
    assert_eq!(serde_json::to_string(&phone).unwrap(), r#""+5542999999999""#);
    insta::assert_snapshot!(phone.to_string(), @"+55 (42) 99999-9999");
}

// ---------------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------------

#[test]
fn email_shapes() {
    assert!(valid_email("a@b.com"));
    assert!(!valid_email("a@b"));
    assert!(!valid_email("a.com"));
}

#[test]
fn email_error_code() {
    let err = check_email("sem arroba").unwrap_err();
    assert_eq!(err, ContactError::MalformedEmail);
    assert_eq!(err.code(), "EMAIL-SHAPE");
}

#[test]
fn email_trimmed_value_kept() {
    let email = check_email("  contato@ong.org.br ").unwrap();
    assert_eq!(email.as_str(), "contato@ong.org.br");
    assert_eq!(email.domain(), "ong.org.br");
}
