//! Brazilian document validation: CPF, CNPJ, and CEP.
//!
//! Each document runs through the same pipeline: strip punctuation,
//! check the digit count (and reject repeated digits), then verify the
//! check digits where the document has them.
//!
//! # Example
//!
//! ```
//! use cadastro::documents::*;
//!
//! assert!(valid_cpf("529.982.247-25"));
//! assert!(valid_cnpj("11.222.333/0001-81"));
//! assert!(valid_cep("80000-000"));
//!
//! let err = check_cpf("529.982.247-26").unwrap_err();
//! assert_eq!(err.to_string(), "CPF check digit 2 is 6, expected 5");
//! ```

mod cep;
mod cnpj;
mod cpf;

pub use cep::{Cep, check_cep, valid_cep};
pub use cnpj::{
    CNPJ_FIRST_WEIGHTS, CNPJ_SECOND_WEIGHTS, Cnpj, check_cnpj, cnpj_check_digits, valid_cnpj,
};
pub use cpf::{Cpf, check_cpf, cpf_check_digits, valid_cpf};

use crate::core::{DocumentError, DocumentKind};

/// Compare the last two digits of `digits` against the computed ones.
fn verify_check_digits(
    kind: DocumentKind,
    digits: &[u8],
    expected: [u8; 2],
) -> Result<(), DocumentError> {
    let found = &digits[digits.len() - 2..];
    for (i, (&exp, &got)) in expected.iter().zip(found).enumerate() {
        if exp != got {
            let position = i as u8 + 1;
            tracing::debug!(%kind, stage = "checksum", position, "document rejected");
            return Err(DocumentError::CheckDigit {
                kind,
                position,
                expected: exp,
                found: got,
            });
        }
    }
    Ok(())
}
