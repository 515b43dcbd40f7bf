//! Session-scoped conversational memory.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::personality::Personality;

/// Interactions retained in the rolling history.
pub const MAX_RECENT_INTERACTIONS: usize = 10;

/// One user/assistant exchange in the rolling history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub user_message: String,
    pub ai_response: String,
    pub timestamp: DateTime<Utc>,
}

/// What the assistant remembers within one session.
///
/// Holds the user's name, a bounded history of recent exchanges, free-form
/// preferences, and the active personality. Serializable so UIs can persist
/// a session snapshot, but nothing here touches disk on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatMemory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Oldest first; capped at [`MAX_RECENT_INTERACTIONS`].
    pub recent_interactions: Vec<Interaction>,
    pub preferences: HashMap<String, serde_json::Value>,
    pub personality: Personality,
}

impl ChatMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one exchange, evicting the oldest entry past the cap.
    pub fn add_interaction(&mut self, user_message: impl Into<String>, ai_response: impl Into<String>) {
        self.recent_interactions.push(Interaction {
            user_message: user_message.into(),
            ai_response: ai_response.into(),
            timestamp: Utc::now(),
        });
        if self.recent_interactions.len() > MAX_RECENT_INTERACTIONS {
            self.recent_interactions.remove(0);
        }
    }

    pub fn set_user_name(&mut self, name: impl Into<String>) {
        self.user_name = Some(name.into());
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn set_preference(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.preferences.insert(key.into(), value);
    }

    pub fn preference(&self, key: &str) -> Option<&serde_json::Value> {
        self.preferences.get(key)
    }

    pub fn remove_preference(&mut self, key: &str) -> Option<serde_json::Value> {
        self.preferences.remove(key)
    }

    pub fn set_personality(&mut self, personality: Personality) {
        self.personality = personality;
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    /// Restore defaults: no name, empty history and preferences, default
    /// personality.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_caps_at_limit() {
        let mut memory = ChatMemory::new();
        for i in 0..15 {
            memory.add_interaction(format!("question {i}"), format!("answer {i}"));
        }
        assert_eq!(memory.recent_interactions.len(), MAX_RECENT_INTERACTIONS);
        // Oldest entries were evicted first.
        assert_eq!(memory.recent_interactions[0].user_message, "question 5");
        assert_eq!(memory.recent_interactions[9].user_message, "question 14");
    }

    #[test]
    fn test_history_is_chronological() {
        let mut memory = ChatMemory::new();
        memory.add_interaction("first", "one");
        memory.add_interaction("second", "two");
        assert!(
            memory.recent_interactions[0].timestamp <= memory.recent_interactions[1].timestamp
        );
    }

    #[test]
    fn test_user_name_and_preferences() {
        let mut memory = ChatMemory::new();
        assert_eq!(memory.user_name(), None);
        memory.set_user_name("Alex");
        assert_eq!(memory.user_name(), Some("Alex"));

        memory.set_preference("units", serde_json::json!("metric"));
        assert_eq!(memory.preference("units"), Some(&serde_json::json!("metric")));
        assert_eq!(memory.preference("missing"), None);

        let removed = memory.remove_preference("units");
        assert_eq!(removed, Some(serde_json::json!("metric")));
        assert_eq!(memory.preference("units"), None);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut memory = ChatMemory::new();
        memory.set_user_name("Alex");
        memory.set_personality(Personality::Funny);
        memory.add_interaction("hi", "hello");
        memory.reset();
        assert_eq!(memory, ChatMemory::default());
        assert_eq!(memory.personality(), Personality::Default);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut memory = ChatMemory::new();
        memory.set_user_name("Alex");
        memory.set_personality(Personality::TonyStark);
        memory.add_interaction("hello", "hi there");

        let json = serde_json::to_string(&memory).unwrap();
        assert!(json.contains("\"userName\":\"Alex\""));
        assert!(json.contains("\"recentInteractions\""));
        let back: ChatMemory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, memory);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let memory: ChatMemory = serde_json::from_str("{}").unwrap();
        assert_eq!(memory, ChatMemory::default());
    }
}
