mod builder;
mod header_name;

pub use builder::*;
pub use header_name::*;

use crate::{
    common::{HeaderCfg, HeaderId, ObserverId, OBSERVER_ID},
    decoder::{decode_text, is_atom_field, try_tokenize, unfold},
    encoder::{encode_text, fold_header},
    errors::HeaderError,
    Charset,
};
use bytes::Bytes;
use std::{cell::OnceCell, fmt, mem};
use tracing::{instrument, trace};

type Observer = Box<dyn FnMut(&Header) + Send>;

/// A single header field.
///
/// The raw value is the canonical wire form: every byte after the colon,
/// line terminator included. The decoded text is derived from it on first
/// read and cached until the raw value changes.
///
/// `Header` has no internal locking. It is `Send` but not `Sync`; share it
/// between threads behind a lock.
pub struct Header {
    cfg: HeaderCfg,
    name: HeaderName,
    raw: Bytes,
    text: OnceCell<String>,
    offset: Option<u64>,
    invalid: bool,
    observers: Vec<(ObserverId, Observer)>,
}

pub(crate) fn validate_field(field: &str) -> Result<(), HeaderError> {
    if field.is_empty() {
        return Err(HeaderError::EmptyField);
    }
    if !is_atom_field(field.as_bytes()) {
        return Err(HeaderError::IllegalFieldCharacters(field.to_owned()));
    }
    Ok(())
}

fn encode_value(cfg: &HeaderCfg, name: &HeaderName, charset: Charset, text: &str) -> (String, Bytes) {
    let text = unfold(text);
    let encoded = encode_text(cfg, charset, &text);
    let raw = fold_header(cfg, name.as_str(), &encoded);
    (text, raw)
}

impl Header {
    /// Creates a header with a UTF-8 value and the default configuration.
    pub fn new(field: &str, text: &str) -> Result<Self, HeaderError> {
        Self::with_charset(Charset::Utf8, field, text)
    }

    pub fn with_charset(charset: Charset, field: &str, text: &str) -> Result<Self, HeaderError> {
        Self::with_cfg(&HeaderCfg::default(), charset, field, text)
    }

    /// Creates a header, encoding `text` in `charset` where needed.
    ///
    /// `field` must be a non-empty run of RFC 5322 atom characters.
    pub fn with_cfg(
        cfg: &HeaderCfg,
        charset: Charset,
        field: &str,
        text: &str,
    ) -> Result<Self, HeaderError> {
        validate_field(field)?;
        Ok(Self::with_cfg_unchecked(cfg, charset, field, text))
    }

    pub(crate) fn with_cfg_unchecked(
        cfg: &HeaderCfg,
        charset: Charset,
        field: &str,
        text: &str,
    ) -> Self {
        let mut header = Self::from_parts(cfg, HeaderName::new(field), Bytes::new());
        let (text, raw) = encode_value(&header.cfg, &header.name, charset, text);
        header.commit(text, raw);
        header
    }

    /// Creates a header from an already tokenized field name and raw value.
    ///
    /// Nothing is validated. A name outside the atom grammar marks the
    /// header as [invalid](Header::is_invalid).
    pub fn from_raw(cfg: &HeaderCfg, field: String, raw: Bytes) -> Self {
        Self::from_parts(cfg, HeaderName::new(field), raw)
    }

    fn from_parts(cfg: &HeaderCfg, name: HeaderName, raw: Bytes) -> Self {
        let invalid = !is_atom_field(name.as_bytes());
        Self {
            cfg: cfg.clone(),
            name,
            raw,
            text: OnceCell::new(),
            offset: None,
            invalid,
            observers: Vec::new(),
        }
    }

    /// Parses a header line using [`HeaderCfg::grammar`].
    ///
    /// `offset` is the position of the line within its source stream, if
    /// known. Lines without a field name yield `None`.
    #[instrument(level = "trace", skip(cfg, buf), fields(len = buf.len()))]
    pub fn try_parse(cfg: &HeaderCfg, buf: &[u8], offset: Option<u64>) -> Option<Self> {
        let (field, raw) = try_tokenize(buf, cfg.grammar)?;
        if field.is_empty() {
            trace!("empty field name");
            return None;
        }
        let mut header = Self::from_raw(cfg, field, raw);
        header.offset = offset;
        Some(header)
    }

    #[inline]
    pub fn builder() -> HeaderBuilder {
        HeaderBuilder::default()
    }

    #[inline]
    pub fn field(&self) -> &str {
        self.name.as_str()
    }

    #[inline]
    pub fn name(&self) -> &HeaderName {
        &self.name
    }

    #[inline]
    pub fn id(&self) -> HeaderId {
        HeaderId::from_name(self.name.as_str())
    }

    #[inline]
    pub fn raw_value(&self) -> &Bytes {
        &self.raw
    }

    /// Position of the header within the stream it was parsed from.
    ///
    /// `None` for headers built by hand and for headers whose value has
    /// been changed since parsing.
    #[inline]
    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// `true` if the field name does not satisfy the atom grammar, which
    /// only happens for headers parsed with [`Grammar::Lenient`](crate::decoder::Grammar::Lenient).
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    #[inline]
    pub fn cfg(&self) -> &HeaderCfg {
        &self.cfg
    }

    /// The decoded and unfolded value.
    pub fn value(&self) -> &str {
        self.text
            .get_or_init(|| unfold(&decode_text(&self.cfg, &self.raw)))
    }

    /// Replaces the value, encoding and folding it with the header's own
    /// configuration.
    pub fn set_value(&mut self, charset: Charset, text: &str) {
        let (text, raw) = encode_value(&self.cfg, &self.name, charset, text);
        self.commit(text, raw);
        self.notify();
    }

    /// Like [`set_value`](Header::set_value), with `cfg` used for this write only.
    pub fn set_value_with(&mut self, cfg: &HeaderCfg, charset: Charset, text: &str) {
        let (text, raw) = encode_value(cfg, &self.name, charset, text);
        self.commit(text, raw);
        self.notify();
    }

    /// Replaces the raw value as is. The decoded value is derived again on
    /// the next read.
    pub fn set_raw_value(&mut self, raw: impl Into<Bytes>) {
        self.raw = raw.into();
        self.text = OnceCell::new();
        self.offset = None;
        trace!(field = %self.name, raw_len = self.raw.len(), "raw value replaced");
        self.notify();
    }

    fn commit(&mut self, text: String, raw: Bytes) {
        self.raw = raw;
        self.text = OnceCell::from(text);
        self.offset = None;
        trace!(field = %self.name, raw_len = self.raw.len(), "value replaced");
    }

    /// Registers `observer` to be called after every change of the value.
    ///
    /// Observers run synchronously, in registration order, once the new
    /// value can be read from the header they are handed.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&Header) + Send + 'static,
    {
        let id = OBSERVER_ID.next();
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if `id` is not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let len = self.observers.len();
        self.observers.retain(|(i, _)| *i != id);
        self.observers.len() != len
    }

    fn notify(&mut self) {
        let mut observers = mem::take(&mut self.observers);
        for (_, observer) in observers.iter_mut() {
            observer(self);
        }
        self.observers = observers;
    }
}

/// Observers are not carried over to the clone.
impl Clone for Header {
    fn clone(&self) -> Self {
        Self {
            cfg: self.cfg.clone(),
            name: self.name.clone(),
            raw: self.raw.clone(),
            text: self.text.clone(),
            offset: self.offset,
            invalid: self.invalid,
            observers: Vec::new(),
        }
    }
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Header")
            .field("name", &self.name)
            .field("raw", &self.raw)
            .field("offset", &self.offset)
            .field("invalid", &self.invalid)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// `field:value` with the decoded value. Not a wire format.
impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.value())
    }
}
