use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Intents
// ---------------------------------------------------------------------------

/// Category assigned to an utterance by the classifier.
///
/// Selects the response branch and is echoed back in [`CommandResponse`] so
/// UIs can render intent-specific views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    Weather,
    Greeting,
    Time,
    Joke,
    News,
    Reminder,
    Note,
    Search,
    SystemCommand,
    Youtube,
    AiChat,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Intent::Weather => "weather",
            Intent::Greeting => "greeting",
            Intent::Time => "time",
            Intent::Joke => "joke",
            Intent::News => "news",
            Intent::Reminder => "reminder",
            Intent::Note => "note",
            Intent::Search => "search",
            Intent::SystemCommand => "systemCommand",
            Intent::Youtube => "youtube",
            Intent::AiChat => "aiChat",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// System commands
// ---------------------------------------------------------------------------

/// Device-control domain targeted by a [`SystemCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemAction {
    Volume,
    Brightness,
    Wifi,
    App,
    Youtube,
}

/// A parsed device-control request.
///
/// Transient: built by the extractor and consumed while generating the
/// response, never kept in session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemCommand {
    pub action: SystemAction,
    /// Action-specific qualifier ("up", "mute", an app name, a video query).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// Numeric payload for volume changes: a delta, a 1-100 level, or 0 for
    /// mute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
    /// Target URL for actions that open one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SystemCommand {
    pub fn new(action: SystemAction) -> Self {
        Self {
            action,
            parameter: None,
            value: None,
            url: None,
        }
    }

    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    pub fn with_value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Stored items
// ---------------------------------------------------------------------------

/// A reminder captured from a "remind me to ..." utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Session-unique id, strictly increasing in creation order.
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Always false today; completion flows are reserved for UIs.
    pub completed: bool,
}

/// A note captured from a "take a note ..." utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Session-unique id, strictly increasing in creation order.
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A fixed weather reading served from the built-in city table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub location: String,
    pub temp_c: i32,
    pub condition: String,
    /// Relative humidity, percent.
    pub humidity: u8,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Structured payload attached to a response. Shape depends on the intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    Weather(WeatherReading),
    Time {
        time: String,
        date: String,
    },
    Reminders {
        reminders: Vec<Reminder>,
    },
    Notes {
        notes: Vec<Note>,
    },
    Search {
        query: String,
    },
    #[serde(rename_all = "camelCase")]
    Youtube {
        command: SystemCommand,
        search_query: String,
        url: String,
    },
    System(SystemCommand),
}

/// The reply contract returned for every processed command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// Intent the command was classified as.
    #[serde(rename = "type")]
    pub intent: Intent,
    /// Spoken/displayed reply text.
    pub response: String,
    /// Optional structured payload for richer UI rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl CommandResponse {
    pub fn new(intent: Intent, response: impl Into<String>) -> Self {
        Self {
            intent,
            response: response.into(),
            data: None,
        }
    }

    pub fn with_data(intent: Intent, response: impl Into<String>, data: ResponseData) -> Self {
        Self {
            intent,
            response: response.into(),
            data: Some(data),
        }
    }
}
