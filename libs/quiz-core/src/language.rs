//! Supported editions of the question bank.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Directory holding the upstream README files.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/lydiahallie/javascript-questions/master";

/// Language edition of the question bank.
///
/// The Chinese edition is left out: its README does not follow the
/// question layout closely enough to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ru,
    Vi,
    De,
    Bs,
}

impl Language {
    /// Every supported edition, in display order.
    pub const ALL: [Language; 5] = [Self::En, Self::Ru, Self::Vi, Self::De, Self::Bs];

    /// Short code accepted on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Vi => "vi",
            Self::De => "de",
            Self::Bs => "bs",
        }
    }

    /// README file name suffix of this edition.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::En => "",
            Self::Ru => "_ru-RU",
            Self::Vi => "-vi",
            Self::De => "-de_DE",
            Self::Bs => "-bs_BS",
        }
    }

    /// Resolve a command-line code.
    pub fn from_code(code: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| ConfigError::UnsupportedLanguage {
                code: code.to_string(),
                supported: Self::supported_codes(),
            })
    }

    /// Comma separated list of the supported codes.
    pub fn supported_codes() -> String {
        Self::ALL.map(Self::code).join(", ")
    }

    /// URL of this edition's README below `base`.
    pub fn document_url(self, base: &str) -> String {
        format!("{}/README{}.md", base.trim_end_matches('/'), self.suffix())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_codes() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()).unwrap(), lang);
        }
    }

    #[test]
    fn rejects_unknown_code_with_supported_list() {
        let err = Language::from_code("zh").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported lang, supported: en, ru, vi, de, bs");
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!("EN".parse::<Language>().is_err());
    }

    #[test]
    fn builds_document_urls() {
        assert_eq!(
            Language::En.document_url(DEFAULT_SOURCE_URL),
            "https://raw.githubusercontent.com/lydiahallie/javascript-questions/master/README.md"
        );
        assert_eq!(
            Language::De.document_url("http://localhost:8080/"),
            "http://localhost:8080/README-de_DE.md"
        );
        assert_eq!(Language::Ru.document_url("x"), "x/README_ru-RU.md");
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::default().to_string(), "en");
    }
}
