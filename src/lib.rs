//! A single MIME/RFC 5322 header field: name, raw wire value and decoded
//! text, plus the tokenizer, unfolder and encoded-word codec that convert
//! between them.

pub(crate) mod common;
pub mod decoder;
pub mod encoder;
pub(crate) mod errors;
pub mod header;

pub use common::*;
pub use errors::*;
pub use header::{Header, HeaderBuilder, HeaderName};
