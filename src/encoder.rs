//! The encoding half of the value codec: RFC 2047 encoded words and folding.

use crate::{common::HeaderCfg, Charset};
use base64::{engine::general_purpose::STANDARD as B64, Engine};
use bytes::{BufMut, Bytes, BytesMut};

mod fold;
pub use fold::*;

// RFC 2047 section 2
const MAX_ENCODED_WORD_LEN: usize = 75;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Scheme {
    Q,
    B,
}

impl Scheme {
    #[inline]
    fn as_str(self) -> &'static str {
        match self {
            Self::Q => "Q",
            Self::B => "B",
        }
    }
}

#[inline]
fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[inline]
fn is_q_safe(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'!' | b'*' | b'+' | b'-' | b'/')
}

#[inline]
fn q_len(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .map(|b| if is_q_safe(*b) || *b == b' ' { 1 } else { 3 })
        .sum()
}

#[inline]
fn b_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}

fn needs_encoding(cfg: &HeaderCfg, word: &str) -> bool {
    word.contains("=?")
        || word
            .chars()
            .any(|c| c.is_control() || (!c.is_ascii() && !cfg.international))
}

/// Encodes text for use as a raw header value.
///
/// Words which cannot be sent as they are (non-ASCII, control characters,
/// or text which would read back as an encoded word) are turned into
/// RFC 2047 encoded words. Neighbouring words of that kind share encoded
/// words. `charset` is used when it can represent the text, UTF-8
/// otherwise.
pub fn encode_text(cfg: &HeaderCfg, charset: Charset, text: &str) -> Bytes {
    let mut out = BytesMut::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        let ws_len = rest.len() - rest.trim_start_matches(is_blank).len();
        if ws_len > 0 {
            out.put_slice(rest[..ws_len].as_bytes());
            rest = &rest[ws_len..];
            continue;
        }

        let word_len = rest.find(is_blank).unwrap_or(rest.len());
        if !needs_encoding(cfg, &rest[..word_len]) {
            out.put_slice(rest[..word_len].as_bytes());
            rest = &rest[word_len..];
            continue;
        }

        let mut run_len = word_len;
        loop {
            let tail = &rest[run_len..];
            let gap = tail.len() - tail.trim_start_matches(is_blank).len();
            let next = &tail[gap..];
            let next_len = next.find(is_blank).unwrap_or(next.len());
            if next_len == 0 || !needs_encoding(cfg, &next[..next_len]) {
                break;
            }
            run_len += gap + next_len;
        }

        encode_run(charset, &rest[..run_len], &mut out);
        rest = &rest[run_len..];
    }

    out.freeze()
}

fn encode_run(charset: Charset, run: &str, out: &mut BytesMut) {
    let cs = if charset.can_encode(run) {
        charset
    } else {
        Charset::Utf8
    };

    let all = cs.encode(run);
    let scheme = if q_len(&all) <= b_len(all.len()) {
        Scheme::Q
    } else {
        Scheme::B
    };
    // "=?" charset "?" scheme "?" ... "?="
    let budget = MAX_ENCODED_WORD_LEN - (cs.as_str().len() + 7);

    let mut chunk = Vec::with_capacity(budget);
    let mut chunk_q_len = 0;
    let mut first = true;
    let mut tmp = [0u8; 4];

    for c in run.chars() {
        let encoded = cs.encode(c.encode_utf8(&mut tmp));
        let cost = q_len(&encoded);
        let next_len = match scheme {
            Scheme::Q => chunk_q_len + cost,
            Scheme::B => b_len(chunk.len() + encoded.len()),
        };
        if !chunk.is_empty() && next_len > budget {
            put_encoded_word(out, cs, scheme, &chunk, first);
            first = false;
            chunk.clear();
            chunk_q_len = 0;
        }
        chunk.extend_from_slice(&encoded);
        chunk_q_len += cost;
    }

    if !chunk.is_empty() {
        put_encoded_word(out, cs, scheme, &chunk, first);
    }
}

fn put_encoded_word(out: &mut BytesMut, cs: Charset, scheme: Scheme, bytes: &[u8], first: bool) {
    if !first {
        out.put_u8(b' ');
    }
    out.put_slice(b"=?");
    out.put_slice(cs.as_str().as_bytes());
    out.put_u8(b'?');
    out.put_slice(scheme.as_str().as_bytes());
    out.put_u8(b'?');
    match scheme {
        Scheme::B => out.put_slice(B64.encode(bytes).as_bytes()),
        Scheme::Q => {
            for b in bytes {
                match *b {
                    b' ' => out.put_u8(b'_'),
                    v if is_q_safe(v) => out.put_u8(v),
                    v => {
                        const HEX: &[u8; 16] = b"0123456789ABCDEF";
                        out.put_slice(&[b'=', HEX[(v >> 4) as usize], HEX[(v & 0xF) as usize]]);
                    }
                }
            }
        }
    }
    out.put_slice(b"?=");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode_text;

    #[test]
    fn test_encode_text_ascii_passthrough() {
        let cfg = HeaderCfg::default();
        let inputs = ["hello   world", "a\tb", "", "[PATCH 1/2] fix: foo.bar()"];
        for s in &inputs {
            assert_eq!(encode_text(&cfg, Charset::Utf8, s).as_ref(), s.as_bytes());
        }
    }

    #[test]
    fn test_encode_text() {
        let cfg = HeaderCfg::default();
        let expectations: Vec<(Charset, &str, &[u8])> = vec![
            (Charset::Utf8, "caf\u{e9}", b"=?utf-8?B?Y2Fmw6k=?="),
            (Charset::Iso88591, "caf\u{e9} au lait", b"=?iso-8859-1?Q?caf=E9?= au lait"),
            (Charset::UsAscii, "caf\u{e9}", b"=?utf-8?B?Y2Fmw6k=?="),
            (Charset::Utf8, "x \u{e9}t\u{e9} y", b"x =?utf-8?B?w6l0w6k=?= y"),
            (Charset::Utf8, "\u{e9} \u{e8}", b"=?utf-8?B?w6kgw6g=?="),
            (Charset::Utf8, "=?x?=", b"=?utf-8?B?PT94Pz0=?="),
            (Charset::Utf8, "Z\u{fc}rich-Flughafen", b"=?utf-8?Q?Z=C3=BCrich-Flughafen?="),
            (
                Charset::Utf8,
                "\u{65e5}\u{672c}\u{8a9e}",
                b"=?utf-8?B?5pel5pys6Kqe?=",
            ),
        ];
        for e in &expectations {
            assert_eq!(encode_text(&cfg, e.0, e.1).as_ref(), e.2, "{:?}", e.1);
        }
    }

    #[test]
    fn test_encode_text_international() {
        let cfg = HeaderCfg::builder().international(true).build();
        assert_eq!(
            encode_text(&cfg, Charset::Utf8, "caf\u{e9}").as_ref(),
            "caf\u{e9}".as_bytes()
        );
    }

    #[test]
    fn test_encode_text_splits_long_runs() {
        let cfg = HeaderCfg::default();
        let text = "\u{e9}".repeat(100);
        let encoded = encode_text(&cfg, Charset::Utf8, &text);
        let encoded = std::str::from_utf8(&encoded).unwrap();

        let words: Vec<&str> = encoded.split(' ').collect();
        assert!(words.len() > 1);
        for w in &words {
            assert!(w.len() <= MAX_ENCODED_WORD_LEN, "{}", w);
            assert!(w.starts_with("=?utf-8?") && w.ends_with("?="));
        }
        assert_eq!(decode_text(&cfg, encoded.as_bytes()), text);
    }

    #[test]
    fn test_encode_decode_text() {
        let cfg = HeaderCfg::default();
        let inputs = [
            "plain ascii",
            "Gr\u{fc}\u{df}e aus M\u{fc}nchen",
            "a  \u{e9}  b",
            "\u{1f600} smile \u{1f600}\u{1f600}",
            "tab\tsep\u{e9}",
            "ctrl\u{7}char",
        ];
        for s in &inputs {
            for cs in [Charset::Utf8, Charset::Iso88591, Charset::UsAscii] {
                let encoded = encode_text(&cfg, cs, s);
                assert!(encoded.is_ascii(), "{:?}", encoded);
                assert_eq!(decode_text(&cfg, &encoded), *s);
            }
        }
    }
}
