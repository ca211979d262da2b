use crate::errors::BadCharsetError;
use std::fmt::{Display, Formatter};

static CHARSET_NAME: [&str; 3] = ["us-ascii", "utf-8", "iso-8859-1"];

/// The charsets understood by the encoded-word codec.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default)]
#[non_exhaustive]
pub enum Charset {
    UsAscii = 0,
    #[default]
    Utf8 = 1,
    Iso88591 = 2,
}

impl Charset {
    #[inline]
    pub fn as_str(self) -> &'static str {
        CHARSET_NAME[self as usize]
    }

    /// Returns `true` if every char of `text` has a representation in this charset.
    pub fn can_encode(self, text: &str) -> bool {
        match self {
            Self::UsAscii => text.is_ascii(),
            Self::Utf8 => true,
            // C1 controls are read back as windows-1252 by decoders
            Self::Iso88591 => text
                .chars()
                .all(|c| matches!(c as u32, 0..=0x7F | 0xA0..=0xFF)),
        }
    }

    /// Encodes `text`. Chars outside of the charset become `?`.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::UsAscii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            Self::Iso88591 => text
                .chars()
                .map(|c| u8::try_from(c as u32).unwrap_or(b'?'))
                .collect(),
        }
    }

    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 | Self::UsAscii => String::from_utf8_lossy(bytes).into_owned(),
            Self::Iso88591 => ::charset::decode_latin1(bytes).into_owned(),
        }
    }
}

impl std::str::FromStr for Charset {
    type Err = BadCharsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us-ascii" | "ascii" | "us_ascii" | "ansi_x3.4-1968" => Ok(Self::UsAscii),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "iso-8859-1" | "iso8859-1" | "iso_8859-1" | "latin1" | "latin-1" => {
                Ok(Self::Iso88591)
            }
            _ => Err(BadCharsetError),
        }
    }
}

impl Display for Charset {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
