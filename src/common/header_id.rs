use std::fmt::{Display, Formatter};

macro_rules! header_ids {
    ($(($konst:ident, $name:literal);)+) => {
        /// Well-known header fields.
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
        #[non_exhaustive]
        pub enum HeaderId {
            $($konst,)+
            Unknown,
        }

        static HEADER_NAME: &[&str] = &[$($name,)+ ""];

        impl HeaderId {
            /// Case-insensitive lookup of a field name.
            pub fn from_name(name: &str) -> Self {
                match name {
                    $(_ if name.eq_ignore_ascii_case($name) => Self::$konst,)+
                    _ => Self::Unknown,
                }
            }
        }
    };
}

header_ids! {
    (Bcc, "Bcc");
    (Cc, "Cc");
    (Comments, "Comments");
    (ContentDescription, "Content-Description");
    (ContentDisposition, "Content-Disposition");
    (ContentId, "Content-Id");
    (ContentLanguage, "Content-Language");
    (ContentTransferEncoding, "Content-Transfer-Encoding");
    (ContentType, "Content-Type");
    (Date, "Date");
    (From, "From");
    (InReplyTo, "In-Reply-To");
    (Keywords, "Keywords");
    (MessageId, "Message-Id");
    (MimeVersion, "MIME-Version");
    (Received, "Received");
    (References, "References");
    (ReplyTo, "Reply-To");
    (ResentDate, "Resent-Date");
    (ResentFrom, "Resent-From");
    (ResentMessageId, "Resent-Message-Id");
    (ResentTo, "Resent-To");
    (ReturnPath, "Return-Path");
    (Sender, "Sender");
    (Subject, "Subject");
    (To, "To");
}

impl HeaderId {
    /// Canonical spelling; empty for [`HeaderId::Unknown`].
    #[inline]
    pub fn as_str(self) -> &'static str {
        HEADER_NAME[self as usize]
    }

    #[inline]
    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }
}

impl Display for HeaderId {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(HeaderId::from_name("Subject"), HeaderId::Subject);
        assert_eq!(HeaderId::from_name("sUBJECT"), HeaderId::Subject);
        assert_eq!(HeaderId::from_name("content-type"), HeaderId::ContentType);
        assert_eq!(HeaderId::from_name("Mime-Version"), HeaderId::MimeVersion);
        assert_eq!(HeaderId::from_name("X-Mailer"), HeaderId::Unknown);
        assert_eq!(HeaderId::from_name(""), HeaderId::Unknown);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(HeaderId::MessageId.as_str(), "Message-Id");
        assert_eq!(HeaderId::To.to_string(), "To");
        assert_eq!(HeaderId::Unknown.as_str(), "");
        assert!(HeaderId::Unknown.is_unknown());
    }
}
