//! Whole-word restricted topic detection.

use regex::Regex;

use super::PolicyError;

/// Topics that are never answered from static data.
///
/// Each word matches only as a whole word: `bus` matches "the bus route"
/// but not "busy". Matching happens on already-normalized (lower-case) text.
#[derive(Debug, Clone)]
pub struct RestrictedTopics {
    pattern: Option<Regex>,
    notice: String,
}

impl RestrictedTopics {
    /// Compile the word list into a single word-bounded alternation.
    ///
    /// Words are escaped, so punctuation inside a word is matched literally.
    pub fn new<I, S>(words: I, notice: impl Into<String>) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.into().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let pattern = if words.is_empty() {
            None
        } else {
            let alternation = words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"\b(?:{})\b", alternation))?)
        };

        Ok(Self {
            pattern,
            notice: notice.into(),
        })
    }

    /// True iff any restricted word occurs as a whole word in `normalized`.
    pub fn is_restricted(&self, normalized: &str) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(normalized))
    }

    /// Fixed deflection reply.
    pub fn notice(&self) -> &str {
        &self.notice
    }
}
