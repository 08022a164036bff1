//! Request dispatcher — picks the stage that answers a message.
//!
//! Stages run in fixed order and the first answer wins:
//! 1. Normalize (aliases, lower-case)
//! 2. Knowledge lookup on the normalized text
//! 3. Restricted-topic check on the normalized text
//! 4. Generative fallback with the original, un-normalized text

use std::sync::Arc;

use thiserror::Error;

use super::fallback::{FallbackOutcome, GenerativeFallback};
use crate::knowledge::{campus, AliasTable, KnowledgeBase, KnowledgeError};
use crate::llms::base_llm::TextGenerator;
use crate::policy::{PolicyError, RestrictedTopics};

/// Errors assembling a dispatcher's tables.
#[derive(Debug, Error)]
pub enum DispatcherError {
    #[error("Knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("Topic policy error: {0}")]
    Policy(#[from] PolicyError),
}

/// Which stage produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Knowledge,
    Restricted,
    Generated,
    GenerationEmpty,
    GenerationFailed,
}

/// A dispatched reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub source: ReplySource,
    pub text: String,
}

impl Reply {
    fn new(source: ReplySource, text: impl Into<String>) -> Self {
        Self {
            source,
            text: text.into(),
        }
    }
}

/// Read-only tables plus the fallback client. Shared across requests.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    aliases: AliasTable,
    knowledge: KnowledgeBase,
    restricted: RestrictedTopics,
    fallback: GenerativeFallback,
}

impl Dispatcher {
    pub fn new(
        aliases: AliasTable,
        knowledge: KnowledgeBase,
        restricted: RestrictedTopics,
        fallback: GenerativeFallback,
    ) -> Self {
        Self {
            aliases,
            knowledge,
            restricted,
            fallback,
        }
    }

    /// Dispatcher over the CBIT tables.
    pub fn campus(generator: Arc<dyn TextGenerator>) -> Result<Self, DispatcherError> {
        Ok(Self::new(
            campus::aliases(),
            campus::knowledge_base()?,
            RestrictedTopics::new(
                campus::RESTRICTED_WORDS.iter().copied(),
                campus::RESTRICTED_NOTICE,
            )?,
            GenerativeFallback::new(generator),
        ))
    }

    pub fn fallback(&self) -> &GenerativeFallback {
        &self.fallback
    }

    /// Answer one message. Never fails; every path yields reply text.
    pub async fn dispatch(&self, message: &str) -> Reply {
        let normalized = self.aliases.normalize(message);

        if let Some(answer) = self.knowledge.lookup(&normalized) {
            tracing::debug!("answered from knowledge base");
            return Reply::new(ReplySource::Knowledge, answer);
        }

        if self.restricted.is_restricted(&normalized) {
            tracing::debug!("restricted topic deflected");
            return Reply::new(ReplySource::Restricted, self.restricted.notice());
        }

        tracing::debug!(model = self.fallback.model(), "forwarding to generative fallback");
        match self.fallback.generate(message).await {
            FallbackOutcome::Generated(text) => Reply::new(ReplySource::Generated, text),
            outcome @ FallbackOutcome::Empty => {
                Reply::new(ReplySource::GenerationEmpty, outcome.into_reply())
            }
            outcome @ FallbackOutcome::Failed => {
                Reply::new(ReplySource::GenerationFailed, outcome.into_reply())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::fallback::{ERROR_REPLY, NO_TEXT_REPLY};
    use crate::llms::base_llm::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records prompts and replies with a fixed result.
    struct RecordingGenerator {
        prompts: Mutex<Vec<String>>,
        reply: Option<&'static str>,
        fail: bool,
    }

    impl RecordingGenerator {
        fn replying(reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                prompts: Mutex::new(Vec::new()),
                reply: Some(reply),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                prompts: Mutex::new(Vec::new()),
                reply: None,
                fail: true,
            })
        }

        fn silent() -> Arc<Self> {
            Arc::new(Self {
                prompts: Mutex::new(Vec::new()),
                reply: None,
                fail: false,
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        fn model(&self) -> &str {
            "recording"
        }

        fn provider(&self) -> &str {
            "test"
        }

        async fn generate(&self, prompt: &str) -> Result<Option<String>, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                return Err(LlmError::Status {
                    provider: "test",
                    status: 503,
                    body: "unavailable".to_string(),
                });
            }
            Ok(self.reply.map(str::to_string))
        }
    }

    fn campus_dispatcher(generator: Arc<RecordingGenerator>) -> Dispatcher {
        Dispatcher::campus(generator).unwrap()
    }

    #[tokio::test]
    async fn test_about_cbit_answers_from_knowledge() {
        let generator = RecordingGenerator::failing();
        let reply = campus_dispatcher(generator.clone()).dispatch("Tell me about CBIT").await;
        assert_eq!(reply.source, ReplySource::Knowledge);
        assert_eq!(
            reply.text,
            campus::knowledge_base().unwrap().get("about").unwrap().render()
        );
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_where_routes_to_about() {
        let reply = campus_dispatcher(RecordingGenerator::failing())
            .dispatch("Where is Chaitanya Bharathi?")
            .await;
        assert_eq!(reply.source, ReplySource::Knowledge);
        assert!(reply.text.starts_with("Chaitanya Bharathi Institute Of Technology was established"));
    }

    #[tokio::test]
    async fn test_directors_two_lines() {
        let reply = campus_dispatcher(RecordingGenerator::failing())
            .dispatch("List the DIRECTORS")
            .await;
        assert_eq!(
            reply.text,
            "Academics: Prof. G.K.D. Prasanna Venkatesan\nAdmin: Dr. G. Sreenivasulu Reddy"
        );
    }

    #[tokio::test]
    async fn test_first_declared_trigger_wins() {
        // "about" is declared before "contact" and "vision".
        let reply = campus_dispatcher(RecordingGenerator::failing())
            .dispatch("contact me about nothing, just the vision")
            .await;
        assert!(reply.text.starts_with("Chaitanya Bharathi Institute Of Technology was established"));

        // "contact" occurs first in the text, "vision" is declared first.
        let reply = campus_dispatcher(RecordingGenerator::failing())
            .dispatch("contact and vision")
            .await;
        assert!(reply.text.starts_with("To contribute through brilliance"));
    }

    #[tokio::test]
    async fn test_knowledge_beats_restricted() {
        let reply = campus_dispatcher(RecordingGenerator::failing())
            .dispatch("principal and hostel fee")
            .await;
        assert_eq!(reply.source, ReplySource::Knowledge);
        assert_eq!(reply.text, "Dr. S. SRUTHI, M.E, Ph.D");
    }

    #[tokio::test]
    async fn test_hostel_fee_is_deflected() {
        let generator = RecordingGenerator::failing();
        let reply = campus_dispatcher(generator.clone()).dispatch("What is the hostel fee?").await;
        assert_eq!(reply.source, ReplySource::Restricted);
        assert_eq!(reply.text, campus::RESTRICTED_NOTICE);
        assert!(reply.text.contains("https://cbit.edu.in"));
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_every_restricted_word_gives_same_notice() {
        let dispatcher = campus_dispatcher(RecordingGenerator::failing());
        for word in campus::RESTRICTED_WORDS {
            let reply = dispatcher.dispatch(&format!("tell me the {} please", word)).await;
            assert_eq!(reply.source, ReplySource::Restricted, "word: {}", word);
            assert_eq!(reply.text, campus::RESTRICTED_NOTICE);
        }
    }

    #[tokio::test]
    async fn test_restricted_word_inside_larger_word_is_forwarded() {
        let generator = RecordingGenerator::replying("Sounds busy.");
        let reply = campus_dispatcher(generator.clone()).dispatch("I am busy today").await;
        assert_eq!(reply.source, ReplySource::Generated);
        assert_eq!(generator.prompts(), vec!["I am busy today".to_string()]);
    }

    #[tokio::test]
    async fn test_fallback_receives_original_text() {
        let generator = RecordingGenerator::replying("  A businessman.  ");
        let reply = campus_dispatcher(generator.clone()).dispatch("Who is Elon Musk?").await;
        assert_eq!(reply, Reply::new(ReplySource::Generated, "A businessman."));
        assert_eq!(generator.prompts(), vec!["Who is Elon Musk?".to_string()]);
    }

    #[tokio::test]
    async fn test_fallback_failure_gives_warning() {
        let generator = RecordingGenerator::failing();
        let reply = campus_dispatcher(generator.clone()).dispatch("Who is Elon Musk?").await;
        assert_eq!(reply.source, ReplySource::GenerationFailed);
        assert_eq!(reply.text, ERROR_REPLY);
        assert_eq!(generator.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_fallback_without_text() {
        let reply = campus_dispatcher(RecordingGenerator::silent())
            .dispatch("Who is Elon Musk?")
            .await;
        assert_eq!(reply.source, ReplySource::GenerationEmpty);
        assert_eq!(reply.text, NO_TEXT_REPLY);
    }

    #[tokio::test]
    async fn test_empty_message_forwarded_as_empty_prompt() {
        let generator = RecordingGenerator::replying("Hello!");
        let reply = campus_dispatcher(generator.clone()).dispatch("").await;
        assert_eq!(reply.text, "Hello!");
        assert_eq!(generator.prompts(), vec![String::new()]);
    }
}
