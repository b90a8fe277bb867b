//! Language selection and user-facing notices.
//!
//! The site is bilingual. Instead of a process-wide setting, the selected
//! language lives in a [`LanguageContext`] value that is created once and
//! handed to whatever renders text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German (site default)
    #[default]
    De,
    /// English
    En,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de" => Ok(Language::De),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

/// Currently selected language, with a single mutator.
#[derive(Debug, Clone, Default)]
pub struct LanguageContext {
    language: Language,
}

impl LanguageContext {
    /// Create a context starting in `language`.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Selected language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch language (the toggle in the header).
    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            log::debug!("Language switched from {} to {}", self.language, language);
        }
        self.language = language;
    }

    /// Pick the string for the selected language.
    pub fn pick<'a>(&self, de: &'a str, en: &'a str) -> &'a str {
        match self.language {
            Language::De => de,
            Language::En => en,
        }
    }
}

/// Toast-style message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Short heading
    pub title: String,
    /// Detail line
    pub description: String,
}

impl Notice {
    /// Create a notice.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
