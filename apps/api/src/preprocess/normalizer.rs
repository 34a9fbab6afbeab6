use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::preprocess::{indonesian, porter, stopwords};

/// Inputs above this size are rejected rather than tokenized.
pub const MAX_INPUT_BYTES: usize = 4 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("input of {len} bytes exceeds the {max} byte limit")]
    InputTooLarge { len: usize, max: usize },
}

/// Deployment language: picks the stopword set and the stemmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Indonesian,
}

impl Language {
    pub fn stopwords(self) -> &'static [&'static str] {
        match self {
            Language::English => stopwords::ENGLISH,
            Language::Indonesian => stopwords::INDONESIAN,
        }
    }

    pub fn stem(self, word: &str) -> String {
        match self {
            Language::English => porter::stem(word),
            Language::Indonesian => indonesian::stem(word),
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "indonesian" | "id" => Ok(Language::Indonesian),
            other => anyhow::bail!("unknown language '{other}'"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "english"),
            Language::Indonesian => write!(f, "indonesian"),
        }
    }
}

/// Turns free text into the space-joined stem sequence the classifier was trained on.
///
/// Steps, in order: drop non-ASCII, lowercase, drop ASCII punctuation,
/// split on whitespace, drop stopwords, stem. A token whose stem is itself a
/// stopword is dropped too, and stems are taken to a fixed point, so
/// normalizing an already normalized string returns it unchanged.
pub struct TextNormalizer {
    language: Language,
    stopwords: HashSet<&'static str>,
}

impl TextNormalizer {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            stopwords: language.stopwords().iter().copied().collect(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Normalizes `text`, degrading to an empty string on failure.
    pub fn normalize(&self, text: &str) -> String {
        self.try_normalize(text).unwrap_or_else(|e| {
            warn!(error = %e, "Text normalization failed; continuing with empty text");
            String::new()
        })
    }

    pub fn try_normalize(&self, text: &str) -> Result<String, NormalizeError> {
        if text.len() > MAX_INPUT_BYTES {
            return Err(NormalizeError::InputTooLarge {
                len: text.len(),
                max: MAX_INPUT_BYTES,
            });
        }

        let cleaned: String = text
            .chars()
            .filter(char::is_ascii)
            .filter(|c| !c.is_ascii_punctuation())
            .map(|c| {
                if c.is_ascii_control() {
                    ' '
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();

        let tokens: Vec<String> = cleaned
            .split_ascii_whitespace()
            .filter(|token| !self.is_stopword(token))
            .map(|token| self.stem(token))
            .filter(|stem| !stem.is_empty() && !self.is_stopword(stem))
            .collect();

        Ok(tokens.join(" "))
    }

    /// Re-stems until the word stops changing. Every rule either shortens
    /// the word or applies a one-way rewrite (`y` -> `i`, `bli` -> `ble`),
    /// so twice the length plus one bounds the number of passes.
    fn stem(&self, token: &str) -> String {
        let mut current = token.to_string();
        for _ in 0..=2 * token.len() {
            let next = self.language.stem(&current);
            if next == current {
                break;
            }
            current = next;
        }
        current
    }
}
