#![no_main]
use libfuzzer_sys::fuzz_target;
use mime_header::{
    decoder::{decode_text, unfold},
    HeaderCfg,
};

fuzz_target!(|data: &[u8]| {
    let text = unfold(&decode_text(&HeaderCfg::default(), data));
    assert_eq!(unfold(&text), text);
});
