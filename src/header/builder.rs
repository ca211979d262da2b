use crate::{
    common::HeaderCfg,
    errors::HeaderError,
    header::{validate_field, Header},
    Charset,
};
use tracing::instrument;

/// Builds a user-authored [`Header`], reporting every missing or invalid
/// argument as its own [`HeaderError`].
///
/// Charset, field and value are required; the configuration defaults to
/// [`HeaderCfg::default`].
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct HeaderBuilder {
    cfg: Option<HeaderCfg>,
    charset: Option<Charset>,
    field: Option<String>,
    value: Option<String>,
}

impl HeaderBuilder {
    pub fn cfg(mut self, cfg: &HeaderCfg) -> Self {
        self.cfg = Some(cfg.clone());
        self
    }

    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = Some(charset);
        self
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[instrument(err)]
    pub fn build(self) -> Result<Header, HeaderError> {
        let charset = self.charset.ok_or(HeaderError::MissingCharset)?;
        let field = self.field.ok_or(HeaderError::MissingField)?;
        validate_field(&field)?;
        let value = self.value.ok_or(HeaderError::MissingValue)?;
        let cfg = self.cfg.unwrap_or_default();

        Ok(Header::with_cfg_unchecked(&cfg, charset, &field, &value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_build() {
        let cfg = HeaderCfg::builder().international(true).build();
        let h = Header::builder()
            .cfg(&cfg)
            .charset(Charset::Utf8)
            .field("Subject")
            .value("caf\u{e9}")
            .build()
            .unwrap();

        assert_eq!(h.field(), "Subject");
        assert_eq!(h.value(), "caf\u{e9}");
        assert_eq!(h.raw_value().as_ref(), " caf\u{e9}\r\n".as_bytes());
        assert!(h.cfg().international);
    }

    #[test]
    #[traced_test]
    fn test_build_errors() {
        let err = Header::builder().field("Subject").value("x").build();
        assert_eq!(err.unwrap_err(), HeaderError::MissingCharset);

        let err = Header::builder().charset(Charset::Utf8).value("x").build();
        assert_eq!(err.unwrap_err(), HeaderError::MissingField);

        let err = Header::builder()
            .charset(Charset::Utf8)
            .field("")
            .value("x")
            .build();
        assert_eq!(err.unwrap_err(), HeaderError::EmptyField);

        let err = Header::builder()
            .charset(Charset::Utf8)
            .field("Bad Field")
            .value("x")
            .build();
        assert_eq!(
            err.unwrap_err(),
            HeaderError::IllegalFieldCharacters("Bad Field".into())
        );

        let err = Header::builder()
            .charset(Charset::Utf8)
            .field("Subject")
            .build();
        assert_eq!(err.unwrap_err(), HeaderError::MissingValue);

        assert!(logs_contain("value not specified"));
    }
}
