//! Per-intent parameter extraction from raw utterance text.
//!
//! Extractors match case-insensitively but slice from the original string,
//! so returned fragments keep the user's casing. Each one is a pure
//! text-to-value function; storing whatever they produce is the response
//! generator's job.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{SystemAction, SystemCommand};
use crate::util::{after_phrase, contains_word, find_ci};

// ---------------------------------------------------------------------------
// Reminders, notes, searches
// ---------------------------------------------------------------------------

const REMINDER_LEAD_INS: &[&str] = &["remind me to ", "reminder to ", "remember to "];
const REMINDER_KEYWORDS: &[&str] = &[
    "remind", "reminder", "reminders", "remember", "me", "my", "to", "a", "please", "set", "show",
    "list", "all",
];

const NOTE_LEAD_INS: &[&str] = &["take a note ", "write down ", "note that "];
const NOTE_KEYWORDS: &[&str] = &[
    "note", "notes", "take", "write", "down", "my", "a", "please", "show", "list", "all",
];

const SEARCH_LEAD_INS: &[&str] = &["search for ", "look up ", "search ", "google "];
const SEARCH_KEYWORDS: &[&str] = &["search", "google", "look", "up", "for", "please"];

/// Body of a reminder request, or `None` when only the command words were
/// spoken ("show my reminders").
pub fn reminder_text(text: &str) -> Option<String> {
    extract_after_lead_in(text, REMINDER_LEAD_INS, REMINDER_KEYWORDS)
}

/// Body of a note request, or `None` when only the command words were spoken.
pub fn note_text(text: &str) -> Option<String> {
    extract_after_lead_in(text, NOTE_LEAD_INS, NOTE_KEYWORDS)
}

/// Search query with the search keywords stripped out.
pub fn search_query(text: &str) -> Option<String> {
    extract_after_lead_in(text, SEARCH_LEAD_INS, SEARCH_KEYWORDS)
}

/// Everything after the first matching lead-in phrase; if no lead-in
/// matches, the utterance minus the bare command keywords.
fn extract_after_lead_in(text: &str, lead_ins: &[&str], keywords: &[&str]) -> Option<String> {
    for lead_in in lead_ins {
        if let Some(rest) = after_phrase(text, lead_in) {
            let rest = rest.trim();
            if rest.is_empty() {
                return None;
            }
            return Some(rest.to_string());
        }
    }

    let residual: Vec<&str> = text
        .split_whitespace()
        .filter(|token| {
            let word = token.trim_matches(|c: char| !c.is_ascii_alphanumeric());
            !keywords.iter().any(|k| word.eq_ignore_ascii_case(k))
        })
        .collect();
    if residual.is_empty() {
        None
    } else {
        Some(residual.join(" "))
    }
}

// ---------------------------------------------------------------------------
// User name
// ---------------------------------------------------------------------------

const NAME_LEAD_INS: &[&str] = &["my name is ", "call me "];

/// Name from a "my name is X" / "call me X" utterance, with trailing
/// punctuation dropped.
pub fn user_name(text: &str) -> Option<String> {
    for lead_in in NAME_LEAD_INS {
        if let Some(rest) = after_phrase(text, lead_in) {
            let name = rest.trim().trim_end_matches(['.', '!', '?', ',']).trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// Cities with fixed readings, in lookup order.
pub(crate) const WEATHER_CITIES: &[&str] = &[
    "new york", "london", "tokyo", "paris", "sydney", "berlin", "moscow", "dubai", "mumbai", "rio",
];

const WEATHER_WORDS: &[&str] = &["weather", "temperature", "forecast"];

/// Sentinel returned when only generic weather words were heard.
pub const CURRENT_LOCATION: &str = "current";

/// A known city mentioned in the text, or [`CURRENT_LOCATION`] when generic
/// weather words are present without one.
pub fn weather_location(text: &str) -> Option<&'static str> {
    for city in WEATHER_CITIES {
        if find_ci(text, city).is_some() {
            return Some(city);
        }
    }
    if WEATHER_WORDS.iter().any(|w| contains_word(text, w)) {
        return Some(CURRENT_LOCATION);
    }
    None
}

// ---------------------------------------------------------------------------
// System commands
// ---------------------------------------------------------------------------

/// Keyword to launchable-app-name table for the app sub-parser.
const APP_TABLE: &[(&str, &str)] = &[
    ("browser", "Browser"),
    ("spotify", "Spotify"),
    ("email", "Email"),
    ("calendar", "Calendar"),
    ("calculator", "Calculator"),
    ("notepad", "Notepad"),
    ("maps", "Maps"),
    ("weather", "Weather"),
    ("clock", "Clock"),
    ("camera", "Camera"),
    ("photos", "Photos"),
    ("settings", "Settings"),
];

static VOLUME_LEVEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,3})\b").expect("valid volume pattern"));

static YOUTUBE_TARGET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:play|watch)\s+(.+?)\s+on\s+youtube").expect("valid youtube pattern")
});

static YOUTUBE_SIMPLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:play|watch|youtube)\s+(.+)").expect("valid youtube pattern")
});

/// Parse a device-control utterance. Sub-parsers run in a fixed order, so a
/// command naming several domains resolves to the first one.
pub fn system_command(text: &str) -> Option<SystemCommand> {
    if contains_word(text, "volume") {
        return Some(volume_command(text));
    }
    if contains_word(text, "brightness") {
        return Some(SystemCommand::new(SystemAction::Brightness));
    }
    if contains_word(text, "wifi") {
        return Some(wifi_command(text));
    }
    if let Some(cmd) = youtube_command(text) {
        return Some(cmd);
    }
    app_command(text)
}

/// Volume changes: a direction word maps to a fixed delta, "mute" to zero,
/// and a bare number to an absolute level.
fn volume_command(text: &str) -> SystemCommand {
    let cmd = SystemCommand::new(SystemAction::Volume);
    if contains_word(text, "mute") {
        return cmd.with_parameter("mute").with_value(0);
    }
    if contains_word(text, "up") || contains_word(text, "increase") {
        return cmd.with_parameter("up").with_value(10);
    }
    if contains_word(text, "down") || contains_word(text, "decrease") {
        return cmd.with_parameter("down").with_value(-10);
    }
    if let Some(caps) = VOLUME_LEVEL_RE.captures(text) {
        if let Ok(level) = caps[1].parse::<i32>() {
            return cmd.with_parameter("set").with_value(level);
        }
    }
    cmd
}

fn wifi_command(text: &str) -> SystemCommand {
    let cmd = SystemCommand::new(SystemAction::Wifi);
    if contains_word(text, "off") {
        cmd.with_parameter("off")
    } else if contains_word(text, "on") {
        cmd.with_parameter("on")
    } else {
        cmd
    }
}

fn app_command(text: &str) -> Option<SystemCommand> {
    for (keyword, app) in APP_TABLE {
        if contains_word(text, keyword) {
            return Some(SystemCommand::new(SystemAction::App).with_parameter(*app));
        }
    }
    // Unknown app: take the word following "open".
    if let Some(rest) = after_phrase(text, "open ") {
        if let Some(word) = rest.split_whitespace().next() {
            let target = word.trim_matches(|c: char| !c.is_ascii_alphanumeric());
            if !target.is_empty() {
                return Some(SystemCommand::new(SystemAction::App).with_parameter(target));
            }
        }
    }
    None
}

/// Play/watch target, via "play X on youtube" first and a looser
/// "play/watch/youtube X" shape second, plus a ready-to-open search URL.
pub fn youtube_command(text: &str) -> Option<SystemCommand> {
    let target = YOUTUBE_TARGET_RE
        .captures(text)
        .or_else(|| YOUTUBE_SIMPLE_RE.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())?;
    let query = target.trim_end_matches(['.', '!', '?']).trim();
    if query.is_empty() {
        return None;
    }
    Some(
        SystemCommand::new(SystemAction::Youtube)
            .with_parameter(query)
            .with_url(youtube_search_url(query)),
    )
}

/// Search-results URL with the query percent-encoded.
pub fn youtube_search_url(query: &str) -> String {
    format!(
        "https://www.youtube.com/results?search_query={}",
        urlencoding::encode(query)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_lead_in() {
        assert_eq!(
            reminder_text("Remind me to call John tomorrow"),
            Some("call John tomorrow".to_string())
        );
        assert_eq!(
            reminder_text("could you remember to feed the cat"),
            Some("feed the cat".to_string())
        );
    }

    #[test]
    fn test_reminder_keyword_fallback() {
        assert_eq!(reminder_text("reminder: buy milk"), Some("buy milk".to_string()));
        assert_eq!(reminder_text("show my reminders"), None);
        assert_eq!(reminder_text("remind me to"), None);
    }

    #[test]
    fn test_note_extraction() {
        assert_eq!(
            note_text("take a note buy milk and bread"),
            Some("buy milk and bread".to_string())
        );
        assert_eq!(
            note_text("note that the deadline moved to Friday"),
            Some("the deadline moved to Friday".to_string())
        );
        assert_eq!(note_text("show my notes"), None);
        assert_eq!(note_text("take a note"), None);
    }

    #[test]
    fn test_search_query() {
        assert_eq!(
            search_query("search for rust tutorials"),
            Some("rust tutorials".to_string())
        );
        assert_eq!(
            search_query("look up the capital of France"),
            Some("the capital of France".to_string())
        );
        assert_eq!(search_query("google it"), Some("it".to_string()));
        assert_eq!(search_query("search"), None);
    }

    #[test]
    fn test_user_name() {
        assert_eq!(user_name("My name is Alex"), Some("Alex".to_string()));
        assert_eq!(user_name("call me Dr. Strange!"), Some("Dr. Strange".to_string()));
        assert_eq!(user_name("my name is "), None);
        assert_eq!(user_name("weather please"), None);
    }

    #[test]
    fn test_weather_location() {
        assert_eq!(weather_location("weather in tokyo"), Some("tokyo"));
        assert_eq!(weather_location("What about New York?"), Some("new york"));
        assert_eq!(weather_location("what's the temperature"), Some(CURRENT_LOCATION));
        assert_eq!(weather_location("hello there"), None);
    }

    #[test]
    fn test_volume_commands() {
        let up = system_command("volume up").unwrap();
        assert_eq!(up.action, SystemAction::Volume);
        assert_eq!(up.parameter.as_deref(), Some("up"));
        assert_eq!(up.value, Some(10));

        let down = system_command("decrease the volume").unwrap();
        assert_eq!(down.value, Some(-10));

        let mute = system_command("mute the volume").unwrap();
        assert_eq!(mute.value, Some(0));

        let set = system_command("set the volume to 45").unwrap();
        assert_eq!(set.parameter.as_deref(), Some("set"));
        assert_eq!(set.value, Some(45));

        let bare = system_command("volume").unwrap();
        assert_eq!(bare.action, SystemAction::Volume);
        assert_eq!(bare.value, None);
    }

    #[test]
    fn test_brightness_and_wifi() {
        let brightness = system_command("turn up the brightness").unwrap();
        assert_eq!(brightness.action, SystemAction::Brightness);

        let wifi_off = system_command("turn off the wifi").unwrap();
        assert_eq!(wifi_off.action, SystemAction::Wifi);
        assert_eq!(wifi_off.parameter.as_deref(), Some("off"));

        let wifi_on = system_command("turn the wifi on").unwrap();
        assert_eq!(wifi_on.parameter.as_deref(), Some("on"));
    }

    #[test]
    fn test_app_commands() {
        let known = system_command("open the calculator").unwrap();
        assert_eq!(known.action, SystemAction::App);
        assert_eq!(known.parameter.as_deref(), Some("Calculator"));

        let fallback = system_command("open foobar now").unwrap();
        assert_eq!(fallback.parameter.as_deref(), Some("foobar"));

        assert_eq!(system_command("do something else"), None);
    }

    #[test]
    fn test_youtube_shapes() {
        let full = youtube_command("play Despacito on YouTube").unwrap();
        assert_eq!(full.action, SystemAction::Youtube);
        assert_eq!(full.parameter.as_deref(), Some("Despacito"));
        assert_eq!(
            full.url.as_deref(),
            Some("https://www.youtube.com/results?search_query=Despacito")
        );

        let simple = youtube_command("watch funny cat videos").unwrap();
        assert_eq!(simple.parameter.as_deref(), Some("funny cat videos"));
        assert_eq!(
            simple.url.as_deref(),
            Some("https://www.youtube.com/results?search_query=funny%20cat%20videos")
        );

        assert_eq!(youtube_command("open youtube"), None);
    }

    #[test]
    fn test_youtube_trims_punctuation() {
        let cmd = youtube_command("play some jazz!").unwrap();
        assert_eq!(cmd.parameter.as_deref(), Some("some jazz"));
    }
}
