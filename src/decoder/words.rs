use crate::common::HeaderCfg;
use rfc2047_decoder::{Decoder, RecoverStrategy};
use std::borrow::Cow;
use tracing::trace;

/// Linear white space: the only separators between encoded words.
#[inline]
fn is_lwsp(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

// =?charset?encoding?payload?=
#[inline]
fn is_encoded_word(token: &str) -> bool {
    token.len() >= 8
        && token.starts_with("=?")
        && token.ends_with("?=")
        && token.bytes().filter(|b| *b == b'?').count() >= 4
}

fn decode_word(token: &str) -> Option<String> {
    let decoder = Decoder::new().too_long_encoded_word_strategy(RecoverStrategy::Decode);
    match decoder.decode(token.as_bytes()) {
        // the decoder hands back tokens it does not recognize as text
        Ok(s) if s != token => Some(s),
        Ok(_) => None,
        Err(err) => {
            trace!(%err, token, "encoded word kept verbatim");
            None
        }
    }
}

/// Decodes a raw header value into text, replacing RFC 2047 encoded words.
///
/// Raw bytes which are not valid UTF-8 are read with
/// [`HeaderCfg::fallback_charset`]. Encoded words that cannot be decoded
/// are kept verbatim. Line breaks are left in place.
pub fn decode_text(cfg: &HeaderCfg, raw: &[u8]) -> String {
    let text = match std::str::from_utf8(raw) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(cfg.fallback_charset.decode(raw)),
    };

    let mut out = String::with_capacity(text.len());
    // white space after a decoded word; dropped if another decoded word follows
    let mut gap: &str = "";
    let mut after_word = false;
    let mut rest: &str = &text;

    while !rest.is_empty() {
        let ws_len = rest.len() - rest.trim_start_matches(is_lwsp).len();
        if ws_len > 0 {
            let (ws, tail) = rest.split_at(ws_len);
            if after_word {
                gap = ws;
            } else {
                out.push_str(ws);
            }
            rest = tail;
            continue;
        }

        let token_len = rest.find(is_lwsp).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(token_len);
        rest = tail;

        match is_encoded_word(token).then(|| decode_word(token)).flatten() {
            Some(decoded) => {
                out.push_str(&decoded);
                after_word = true;
            }
            None => {
                out.push_str(gap);
                out.push_str(token);
                after_word = false;
            }
        }
        gap = "";
    }

    out.push_str(gap);
    out
}
