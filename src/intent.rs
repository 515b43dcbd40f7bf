//! Intent classification: ordered keyword rules, first match wins.

use crate::types::Intent;
use crate::util::{contains_any_phrase, contains_any_word, contains_word, starts_with_any};

const NAME_PHRASES: &[&str] = &["my name is", "call me"];

const VIDEO_WORDS: &[&str] = &["play", "watch"];

const QUESTION_STARTS: &[&str] = &[
    "what is ",
    "what are ",
    "what's ",
    "who is ",
    "who are ",
    "who's ",
    "why ",
    "how are ",
    "how do ",
    "how does ",
    "how can ",
];

const EXPLAIN_PHRASES: &[&str] = &["tell me about"];

const WEATHER_WORDS: &[&str] = &["weather", "temperature", "forecast"];

const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "greetings"];

const GREETING_PHRASES: &[&str] = &[
    "good morning",
    "good afternoon",
    "good evening",
    "good day",
];

const TIME_WORDS: &[&str] = &["time", "date", "day", "today"];

const JOKE_WORDS: &[&str] = &["joke", "jokes", "funny"];

const NEWS_WORDS: &[&str] = &["news", "headline", "headlines"];

const REMINDER_WORDS: &[&str] = &["remind", "reminder", "reminders", "remember"];

const NOTE_WORDS: &[&str] = &["note", "notes"];

const SEARCH_WORDS: &[&str] = &["search", "google"];

const SEARCH_PHRASES: &[&str] = &["look up"];

const SYSTEM_WORDS: &[&str] = &[
    "open",
    "launch",
    "start",
    "run",
    "volume",
    "brightness",
    "wifi",
    "turn",
];

fn is_name_setting(text: &str) -> bool {
    contains_any_phrase(text, NAME_PHRASES)
}

fn is_video_request(text: &str) -> bool {
    contains_any_phrase(text, &["youtube"]) || contains_any_word(text, VIDEO_WORDS)
}

fn is_open_question(text: &str) -> bool {
    starts_with_any(text, QUESTION_STARTS)
        || contains_any_phrase(text, EXPLAIN_PHRASES)
        || contains_word(text, "explain")
}

fn is_weather(text: &str) -> bool {
    contains_any_word(text, WEATHER_WORDS)
}

pub(crate) fn is_greeting(text: &str) -> bool {
    contains_any_word(text, GREETING_WORDS) || contains_any_phrase(text, GREETING_PHRASES)
}

fn is_time(text: &str) -> bool {
    contains_any_word(text, TIME_WORDS)
}

fn is_joke(text: &str) -> bool {
    contains_any_word(text, JOKE_WORDS)
}

fn is_news(text: &str) -> bool {
    contains_any_word(text, NEWS_WORDS)
}

fn is_reminder(text: &str) -> bool {
    contains_any_word(text, REMINDER_WORDS)
}

fn is_note(text: &str) -> bool {
    contains_any_word(text, NOTE_WORDS)
}

fn is_search(text: &str) -> bool {
    contains_any_word(text, SEARCH_WORDS) || contains_any_phrase(text, SEARCH_PHRASES)
}

fn is_system_command(text: &str) -> bool {
    contains_any_word(text, SYSTEM_WORDS)
}

type Predicate = fn(&str) -> bool;

/// Ordered rule table. Earlier rules shadow later ones wherever keywords
/// overlap ("remind me about the weather" lands on weather, not reminder),
/// so the order is part of the contract.
const RULES: &[(Predicate, Intent)] = &[
    (is_name_setting, Intent::AiChat),
    (is_video_request, Intent::Youtube),
    (is_open_question, Intent::AiChat),
    (is_weather, Intent::Weather),
    (is_greeting, Intent::Greeting),
    (is_time, Intent::Time),
    (is_joke, Intent::Joke),
    (is_news, Intent::News),
    (is_reminder, Intent::Reminder),
    (is_note, Intent::Note),
    (is_search, Intent::Search),
    (is_system_command, Intent::SystemCommand),
];

/// Classify an utterance. Total: unmatched text is free-form chat.
pub fn classify(text: &str) -> Intent {
    let text = text.trim();
    for (matches, intent) in RULES {
        if matches(text) {
            return *intent;
        }
    }
    Intent::AiChat
}
