#![no_main]
use libfuzzer_sys::fuzz_target;
use mime_header::decoder::{try_tokenize, Grammar};

fuzz_target!(|data: &[u8]| {
    if let Some((name, value)) = try_tokenize(data, Grammar::Strict) {
        assert_eq!(name.len() + 1 + value.len(), data.len());
    }
    try_tokenize(data, Grammar::Lenient);
});
