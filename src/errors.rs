use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("bad charset")]
#[non_exhaustive]
pub struct BadCharsetError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HeaderError {
    #[error("charset not specified")]
    MissingCharset,
    #[error("field name not specified")]
    MissingField,
    #[error("field name is empty")]
    EmptyField,
    #[error("illegal characters in field name: {0:?}")]
    IllegalFieldCharacters(String),
    #[error("value not specified")]
    MissingValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(BadCharsetError.to_string(), "bad charset");
        assert_eq!(HeaderError::EmptyField.to_string(), "field name is empty");
        assert_eq!(
            HeaderError::IllegalFieldCharacters("Bad Field".into()).to_string(),
            "illegal characters in field name: \"Bad Field\""
        );
    }
}
