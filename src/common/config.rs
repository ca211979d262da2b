use crate::{common::HeaderCfgBuilder, decoder::Grammar, Charset};

pub(crate) const DEFAULT_MAX_LINE_LEN: usize = 78;
pub(crate) const MIN_MAX_LINE_LEN: usize = 20;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum NewLine {
    #[default]
    CrLf,
    Lf,
}

impl NewLine {
    #[inline]
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::CrLf => b"\r\n",
            Self::Lf => b"\n",
        }
    }
}

/// Controls how header values are parsed, encoded and folded.
///
/// A [`Header`](crate::Header) keeps its own copy of the configuration it
/// was created with, so changing a `HeaderCfg` afterwards does not affect
/// headers that already exist.
#[derive(Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub struct HeaderCfg {
    /// Field-name grammar used by [`Header::try_parse`](crate::Header::try_parse).
    pub grammar: Grammar,
    /// Preferred maximum length of a folded line, terminator excluded.
    pub max_line_len: usize,
    pub newline: NewLine,
    /// Write non-ASCII text as raw UTF-8 (RFC 6532) instead of encoded words.
    pub international: bool,
    /// Charset used to read raw values which are not valid UTF-8.
    pub fallback_charset: Charset,
}

impl HeaderCfg {
    #[inline]
    pub fn builder() -> HeaderCfgBuilder {
        HeaderCfgBuilder::default()
    }
}

impl Default for HeaderCfg {
    fn default() -> Self {
        Self {
            grammar: Grammar::Strict,
            max_line_len: DEFAULT_MAX_LINE_LEN,
            newline: NewLine::CrLf,
            international: false,
            fallback_charset: Charset::Iso88591,
        }
    }
}
