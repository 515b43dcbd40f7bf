//! The assistant session: owned state plus the single processing entry point.

mod respond;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::AssistantConfig;
use crate::error::{AssistantError, Result};
use crate::intent;
use crate::memory::ChatMemory;
use crate::personality::Personality;
use crate::types::{CommandResponse, Note, Reminder};

/// A single-user assistant session.
///
/// Owns all mutable state (memory, reminders, notes, random source), so
/// independent sessions never share anything and tests get a fresh world
/// from each constructor call. Callers are expected to serialize calls to
/// [`process_command`](Assistant::process_command); there is no internal
/// locking.
pub struct Assistant {
    config: AssistantConfig,
    memory: ChatMemory,
    reminders: Vec<Reminder>,
    notes: Vec<Note>,
    last_id: i64,
    rng: StdRng,
}

impl Assistant {
    /// Create a session with the given configuration.
    pub fn new(config: AssistantConfig) -> Self {
        let mut memory = ChatMemory::new();
        memory.set_personality(config.personality);
        Self {
            config,
            memory,
            reminders: Vec::new(),
            notes: Vec::new(),
            last_id: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a session with a deterministic random source, so phrase
    /// selection is reproducible.
    pub fn with_rng_seed(config: AssistantConfig, seed: u64) -> Self {
        let mut assistant = Self::new(config);
        assistant.rng = StdRng::seed_from_u64(seed);
        assistant
    }

    /// Process one utterance end to end: classify, generate a reply, record
    /// the exchange.
    ///
    /// This is the one call UI collaborators make per utterance. Blank input
    /// is rejected before classification. Errors are terminal for this call
    /// only; the session stays usable.
    pub async fn process_command(&mut self, text: &str) -> Result<CommandResponse> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AssistantError::EmptyInput);
        }

        // Simulated processing latency. No cancellation semantics: callers
        // that need a timeout ignore the late result.
        if self.config.processing_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.processing_delay_ms)).await;
        }

        let intent = intent::classify(text);
        debug!("Classified command as {intent}");

        let response = self.generate(intent, text);
        self.memory.add_interaction(text, response.response.clone());
        Ok(response)
    }

    /// Reminders captured so far, oldest first. Append-only.
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Notes captured so far, oldest first. Append-only.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Personality used for phrasing.
    pub fn personality(&self) -> Personality {
        self.memory.personality()
    }

    /// Switch the phrasing personality for subsequent replies.
    pub fn set_personality(&mut self, personality: Personality) {
        self.memory.set_personality(personality);
    }

    /// Read-only snapshot of the session memory.
    pub fn chat_memory(&self) -> ChatMemory {
        self.memory.clone()
    }

    /// Name the user asked to be called, if one was given this session.
    pub fn user_name(&self) -> Option<&str> {
        self.memory.user_name()
    }

    /// Drop all session state, returning to a just-constructed session with
    /// the same configuration. The random source keeps its state.
    pub fn reset(&mut self) {
        self.memory.reset();
        self.memory.set_personality(self.config.personality);
        self.reminders.clear();
        self.notes.clear();
        self.last_id = 0;
    }

    /// Greeting shown by UIs before the first exchange, keyed to the active
    /// personality.
    pub fn welcome_message(&self) -> String {
        let name = crate::ASSISTANT_NAME;
        match self.personality() {
            Personality::Default => {
                format!("Hello! I'm {name}, your AI assistant. How can I help you today?")
            }
            Personality::Formal => {
                format!("Good day. I am {name}, your virtual assistant. How may I be of service?")
            }
            Personality::Funny => format!(
                "Helloooo! {name} here, your favorite digital sidekick. What mischief can I help with today?"
            ),
            Personality::TonyStark => {
                format!("{name} online. Genius-level assistance, at your service. What do you need?")
            }
        }
    }

    /// Session-unique id for stored items: wall-clock milliseconds, bumped
    /// past the previous id when two items land in the same millisecond.
    fn next_id(&mut self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}
