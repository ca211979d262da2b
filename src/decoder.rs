//! Header line tokenizer and the decoding half of the value codec.

use bytes::Bytes;
use tracing::{instrument, trace};

#[macro_use]
mod macros;

mod maps;
pub(crate) use maps::*;

mod unfold;
pub use unfold::*;

mod words;
pub use words::*;

/// Rule deciding where a field name ends.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Grammar {
    /// The name is a run of RFC 5322 atom characters.
    #[default]
    Strict,
    /// The name is anything up to a colon, blank or control byte.
    Lenient,
}

/// Splits a raw header line into its field name and raw value.
///
/// Returns `None` unless the name scan stops at a `:`. The raw value is
/// everything after the colon, including any leading blank and the line
/// terminator, copied out of `buf`.
///
/// A line starting with `:` yields an empty name under both grammars.
#[instrument(level = "trace", skip(buf), fields(len = buf.len()))]
pub fn try_tokenize(buf: &[u8], grammar: Grammar) -> Option<(String, Bytes)> {
    let name_len = match grammar {
        Grammar::Strict => buf.iter().take_while(|b| is_atom(**b)).count(),
        Grammar::Lenient => buf.iter().take_while(|b| !is_name_stop(**b)).count(),
    };

    match buf.get(name_len) {
        Some(b':') => (),
        Some(_) => reject!("unexpected byte", buf, name_len),
        None => reject!("end of buffer", buf, name_len),
    }

    // strict names are ASCII; lenient ones may carry 8-bit bytes, widened as latin-1
    let name: String = buf[..name_len].iter().map(|b| *b as char).collect();
    let value = Bytes::copy_from_slice(&buf[name_len + 1..]);

    trace!(name = %name, value_len = value.len(), "tokenized");
    Some((name, value))
}

/// Returns `true` if `name` is a non-empty run of atom characters.
#[inline]
pub fn is_atom_field(name: &[u8]) -> bool {
    !name.is_empty() && name.iter().all(|b| is_atom(*b))
}
