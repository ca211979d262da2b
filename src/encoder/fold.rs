use crate::common::HeaderCfg;
use bytes::{BufMut, Bytes, BytesMut};

#[inline]
fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

#[inline]
fn split_blanks(s: &[u8]) -> (&[u8], &[u8]) {
    s.split_at(s.iter().take_while(|b| is_blank(**b)).count())
}

#[inline]
fn split_token(s: &[u8]) -> (&[u8], &[u8]) {
    s.split_at(s.iter().take_while(|b| !is_blank(**b)).count())
}

/// Folds an encoded value into a raw header value for `field`.
///
/// The result starts with a space and ends with [`HeaderCfg::newline`].
/// A line break goes in front of the blanks preceding a token that would
/// overflow [`HeaderCfg::max_line_len`]; those blanks indent the
/// continuation line. Tokens are never split, and blanks around the value
/// are dropped.
pub fn fold_header(cfg: &HeaderCfg, field: &str, encoded: &[u8]) -> Bytes {
    let newline = cfg.newline.as_bytes();
    let mut out = BytesMut::with_capacity(encoded.len() + 2 * newline.len() + 1);

    let (_, rest) = split_blanks(encoded);
    let (token, mut rest) = split_token(rest);
    if token.is_empty() {
        out.put_slice(newline);
        return out.freeze();
    }

    out.put_u8(b' ');
    out.put_slice(token);
    let mut line_len = field.len() + 2 + token.len();

    while !rest.is_empty() {
        let (blanks, tail) = split_blanks(rest);
        let (token, tail) = split_token(tail);
        if token.is_empty() {
            break;
        }

        if line_len + blanks.len() + token.len() > cfg.max_line_len {
            out.put_slice(newline);
            line_len = 0;
        }
        out.put_slice(blanks);
        out.put_slice(token);
        line_len += blanks.len() + token.len();
        rest = tail;
    }

    out.put_slice(newline);
    out.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::NewLine,
        decoder::{decode_text, unfold},
    };

    #[test]
    fn test_fold_short() {
        let cfg = HeaderCfg::default();
        let expectations: Vec<(&[u8], &[u8])> = vec![
            (b"hello   world", b" hello   world\r\n"),
            (b"x", b" x\r\n"),
            (b"", b"\r\n"),
            (b"  \t ", b"\r\n"),
            (b"  padded  ", b" padded\r\n"),
            (b"a\tb", b" a\tb\r\n"),
        ];
        for e in &expectations {
            assert_eq!(fold_header(&cfg, "Subject", e.0).as_ref(), e.1);
        }
    }

    #[test]
    fn test_fold_newline() {
        let cfg = HeaderCfg::builder().newline(NewLine::Lf).build();
        assert_eq!(fold_header(&cfg, "To", b"a b").as_ref(), b" a b\n");
    }

    #[test]
    fn test_fold_long() {
        let cfg = HeaderCfg::builder().max_line_len(30).build();
        let value = b"one two three four five six seven eight nine ten";

        let folded = fold_header(&cfg, "Subject", value);
        assert_eq!(
            folded.as_ref(),
            b" one two three four\r\n five six seven eight nine ten\r\n".as_ref()
        );

        let text = std::str::from_utf8(&folded).unwrap();
        for line in text.split("\r\n") {
            assert!(line.len() <= 30, "{:?}", line);
        }
        assert_eq!(
            unfold(&decode_text(&cfg, &folded)),
            std::str::from_utf8(value).unwrap()
        );
    }

    #[test]
    fn test_fold_keeps_blanks_and_long_tokens() {
        let cfg = HeaderCfg::builder().max_line_len(20).build();
        let long = "x".repeat(40);
        let value = format!("a\t\t{} b", long);

        let folded = fold_header(&cfg, "X-Long", value.as_bytes());
        assert_eq!(
            folded.as_ref(),
            format!(" a\r\n\t\t{}\r\n b\r\n", long).as_bytes()
        );
        assert_eq!(unfold(&decode_text(&cfg, &folded)), value);
    }
}
