#![no_main]

use extplan::{OutputCategory, OutputTemplate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // First line is the pattern, the rest is substituted for [name]
        let (pattern, name) = input.split_once('\n').unwrap_or((input, "x"));
        for category in OutputCategory::ALL {
            if let Ok(template) = OutputTemplate::parse(category, pattern) {
                if let Ok(resolved) = template.resolve(name, "js") {
                    assert!(!resolved.as_str().starts_with('/'));
                }
            }
        }
    }
});
