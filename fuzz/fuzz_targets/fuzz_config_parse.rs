#![no_main]
#![forbid(unsafe_code)]
use libfuzzer_sys::fuzz_target;
use msgtracker::Config;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz TOML config parsing — silently discard invalid input
        if let Ok(config) = toml::from_str::<Config>(s) {
            let _ = config.validate();
        }
    }
});
