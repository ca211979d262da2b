use crate::{
    common::{
        config::{DEFAULT_MAX_LINE_LEN, MIN_MAX_LINE_LEN},
        HeaderCfg, NewLine,
    },
    decoder::Grammar,
    Charset,
};

#[derive(Debug, Default)]
#[non_exhaustive]
pub struct HeaderCfgBuilder {
    grammar: Option<Grammar>,
    max_line_len: Option<usize>,
    newline: Option<NewLine>,
    international: Option<bool>,
    fallback_charset: Option<Charset>,
}

impl HeaderCfgBuilder {
    pub fn grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = Some(grammar);
        self
    }

    pub fn max_line_len(mut self, len: usize) -> Self {
        self.max_line_len = Some(len);
        self
    }

    pub fn newline(mut self, newline: NewLine) -> Self {
        self.newline = Some(newline);
        self
    }

    pub fn international(mut self, international: bool) -> Self {
        self.international = Some(international);
        self
    }

    pub fn fallback_charset(mut self, charset: Charset) -> Self {
        self.fallback_charset = Some(charset);
        self
    }

    pub fn build(self) -> HeaderCfg {
        let defaults = HeaderCfg::default();
        HeaderCfg {
            grammar: self.grammar.unwrap_or(defaults.grammar),
            max_line_len: self
                .max_line_len
                .unwrap_or(DEFAULT_MAX_LINE_LEN)
                .max(MIN_MAX_LINE_LEN),
            newline: self.newline.unwrap_or(defaults.newline),
            international: self.international.unwrap_or(defaults.international),
            fallback_charset: self.fallback_charset.unwrap_or(defaults.fallback_charset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        assert_eq!(HeaderCfg::builder().build(), HeaderCfg::default());
    }

    #[test]
    fn test_build() {
        let cfg = HeaderCfg::builder()
            .grammar(Grammar::Lenient)
            .max_line_len(5)
            .newline(NewLine::Lf)
            .international(true)
            .fallback_charset(Charset::Utf8)
            .build();

        assert_eq!(cfg.grammar, Grammar::Lenient);
        assert_eq!(cfg.max_line_len, MIN_MAX_LINE_LEN);
        assert_eq!(cfg.newline, NewLine::Lf);
        assert!(cfg.international);
        assert_eq!(cfg.fallback_charset, Charset::Utf8);
    }
}
