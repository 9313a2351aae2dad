#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse → format → parse must not panic at any step.
        if let Ok(ms) = cadastro::datetime::to_timestamp(s) {
            if let Ok(ms) = ms.parse::<i64>() {
                if let Ok(text) = cadastro::datetime::format_date_time(ms) {
                    let _ = cadastro::datetime::to_timestamp(&text);
                }
            }
        }
    }
});
