#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Validators return false on garbage; a panic is a bug.
        let _ = cadastro::documents::valid_cpf(s);
        let _ = cadastro::documents::valid_cnpj(s);
        let _ = cadastro::documents::valid_cep(s);
        let _ = cadastro::contact::valid_phone(s);
        let _ = cadastro::contact::valid_email(s);
    }
});
