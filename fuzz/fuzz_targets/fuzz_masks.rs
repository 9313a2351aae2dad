#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Masking twice must give the same result as masking once.
        let once = cadastro::core::mask_cpf(s);
        assert_eq!(cadastro::core::mask_cpf(&once), once);
        let once = cadastro::core::mask_phone(s);
        assert_eq!(cadastro::core::mask_phone(&once), once);
    }
});
