use std::{collections::HashMap, fmt::Display, str::FromStr};

use crate::lexer::{
    lexer::{RegexPattern, ENGLISH_PATTERNS, FRENCH_PATTERNS},
    tokens::{TokenKind, ENGLISH_KEYWORDS, FRENCH_KEYWORDS},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    French,
    English,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fr" | "french" | "francais" => Ok(Language::French),
            "en" | "english" => Ok(Language::English),
            other => Err(format!(
                "unknown language `{}`, expected `fr` or `en`",
                other
            )),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::French => write!(f, "fr"),
            Language::English => write!(f, "en"),
        }
    }
}

/// Keyword vocabulary and number format for one source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Locale {
    language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Locale { language }
    }

    pub fn french() -> Self {
        Locale::new(Language::French)
    }

    pub fn english() -> Self {
        Locale::new(Language::English)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn decimal_separator(&self) -> char {
        match self.language {
            Language::French => ',',
            Language::English => '.',
        }
    }

    pub fn keywords(&self) -> &'static HashMap<&'static str, TokenKind> {
        match self.language {
            Language::French => &FRENCH_KEYWORDS,
            Language::English => &ENGLISH_KEYWORDS,
        }
    }

    pub fn keyword(&self, identifier: &str) -> Option<TokenKind> {
        self.keywords().get(identifier).copied()
    }

    pub(crate) fn patterns(&self) -> &'static [RegexPattern] {
        match self.language {
            Language::French => &FRENCH_PATTERNS,
            Language::English => &ENGLISH_PATTERNS,
        }
    }
}

impl From<Language> for Locale {
    fn from(language: Language) -> Self {
        Locale::new(language)
    }
}
