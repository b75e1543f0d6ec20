use std::fmt;

use serde::{Deserialize, Serialize};

/// Display language for content fetches. The site ships in exactly two
/// languages; every document in the content lake carries a matching
/// `language` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Az,
}

impl Locale {
    /// Language tag as stored on documents and in the locale cookie.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Az => "az",
        }
    }

    /// Parse a language tag. Unknown tags are rejected rather than
    /// defaulted so callers can distinguish "absent" from "garbage".
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Locale::En),
            "az" => Some(Locale::Az),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tags() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("az"), Some(Locale::Az));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("EN"), None);
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }
}
