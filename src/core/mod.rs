//! Error taxonomy, digit normalization, and input masks.
//!
//! Everything here is independent of the document kind and is always
//! compiled, whatever features are enabled.

mod error;
pub mod mask;
mod normalize;

pub use error::*;
pub use mask::{
    CEP_MASK, CNPJ_MASK, CPF_MASK, DATE_MASK, PHONE_MASK, TIME_MASK, apply_mask, mask_cep,
    mask_cnpj, mask_cpf, mask_date, mask_phone, mask_time,
};
pub use normalize::{digit_values, digits_only, is_repeated, phone_chars};

#[cfg(feature = "documents")]
pub(crate) use normalize::{structural, to_string as digits_to_string};
