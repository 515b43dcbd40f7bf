//! Response generation: one branch per intent, plus the fixed reply tables.

use chrono::{Local, Utc};
use rand::seq::SliceRandom;
use tracing::debug;

use crate::extract;
use crate::intent;
use crate::personality::{self, PhraseCategory};
use crate::types::{
    CommandResponse, Intent, Note, Reminder, ResponseData, SystemAction, WeatherReading,
};
use crate::util::find_ci;

use super::Assistant;

/// Fixed joke list; replies are sampled uniformly.
const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "Why did the scarecrow win an award? Because he was outstanding in his field!",
    "What do you call a fake noodle? An impasta!",
    "How do penguins build their houses? Igloos it together!",
    "Why don't eggs tell jokes? They'd crack each other up!",
    "Why did the math book look so sad? Because it had too many problems!",
    "What do you call a bear with no teeth? A gummy bear!",
    "Why can't a bicycle stand up by itself? It's two tired!",
];

/// Fixed readings per city: keyword, display name, temp °C, condition,
/// humidity %. Keys match the extractor's city table.
const CITY_READINGS: &[(&str, &str, i32, &str, u8)] = &[
    ("new york", "New York", 22, "Partly Cloudy", 65),
    ("london", "London", 15, "Rainy", 80),
    ("tokyo", "Tokyo", 26, "Sunny", 50),
    ("paris", "Paris", 18, "Cloudy", 70),
    ("sydney", "Sydney", 24, "Sunny", 55),
    ("berlin", "Berlin", 16, "Overcast", 75),
    ("moscow", "Moscow", 5, "Snowy", 85),
    ("dubai", "Dubai", 38, "Sunny", 30),
    ("mumbai", "Mumbai", 32, "Humid", 90),
    ("rio", "Rio", 28, "Sunny", 60),
];

/// Reading served when only generic weather words were heard.
const CURRENT_READING: (&str, i32, &str, u8) = ("Current Location", 21, "Partly Cloudy", 60);

const NEWS_STUB: &str = "I'm sorry, I can't fetch the news right now. \
    In a full implementation, I would connect to a news API for the latest headlines.";

const SYSTEM_STUB: &str = "I understand you want to perform a system action. \
    In a full implementation, I would be able to open applications or perform system commands.";

const WEATHER_STUB: &str = "I'm sorry, I don't have weather data for that location. \
    In a full implementation, I would connect to a weather API.";

impl Assistant {
    /// Build the reply for a classified utterance. Total over intents: every
    /// branch resolves to some response rather than an error.
    pub(super) fn generate(&mut self, intent: Intent, text: &str) -> CommandResponse {
        match intent {
            Intent::Weather => weather_response(text),
            Intent::Greeting => {
                let greeting = self.greeting_text();
                CommandResponse::new(Intent::Greeting, greeting)
            }
            Intent::Time => time_response(),
            Intent::Joke => self.joke_response(),
            Intent::News => CommandResponse::new(Intent::News, NEWS_STUB),
            Intent::Reminder => self.reminder_response(text),
            Intent::Note => self.note_response(text),
            Intent::Search => search_response(text),
            Intent::SystemCommand => system_response(text),
            Intent::Youtube => youtube_response(text),
            Intent::AiChat => self.chat_response(text),
        }
    }

    /// Personality greeting, addressed by name once one is known.
    fn greeting_text(&mut self) -> String {
        let phrase = personality::pick(
            &mut self.rng,
            self.memory.personality(),
            PhraseCategory::Greeting,
        );
        match self.memory.user_name() {
            Some(name) => format!("{phrase} {name}!"),
            None => phrase.to_string(),
        }
    }

    fn joke_response(&mut self) -> CommandResponse {
        let joke = JOKES.choose(&mut self.rng).copied().unwrap_or(JOKES[0]);
        CommandResponse::new(Intent::Joke, joke)
    }

    fn reminder_response(&mut self, text: &str) -> CommandResponse {
        match extract::reminder_text(text) {
            Some(body) => {
                let reminder = Reminder {
                    id: self.next_id(),
                    text: body.clone(),
                    created_at: Utc::now(),
                    completed: false,
                };
                self.reminders.push(reminder);
                debug!("Added reminder ({} stored)", self.reminders.len());
                CommandResponse::with_data(
                    Intent::Reminder,
                    format!("I've added a reminder: \"{body}\""),
                    ResponseData::Reminders {
                        reminders: self.reminders.clone(),
                    },
                )
            }
            None => {
                let response = match self.reminders.len() {
                    0 => "You don't have any reminders yet.".to_string(),
                    1 => "You have 1 reminder.".to_string(),
                    n => format!("You have {n} reminders."),
                };
                CommandResponse::with_data(
                    Intent::Reminder,
                    response,
                    ResponseData::Reminders {
                        reminders: self.reminders.clone(),
                    },
                )
            }
        }
    }

    fn note_response(&mut self, text: &str) -> CommandResponse {
        match extract::note_text(text) {
            Some(body) => {
                let note = Note {
                    id: self.next_id(),
                    text: body.clone(),
                    created_at: Utc::now(),
                };
                self.notes.push(note);
                debug!("Added note ({} stored)", self.notes.len());
                CommandResponse::with_data(
                    Intent::Note,
                    format!("I've added a note: \"{body}\""),
                    ResponseData::Notes {
                        notes: self.notes.clone(),
                    },
                )
            }
            None => {
                let response = match self.notes.len() {
                    0 => "You don't have any notes yet.".to_string(),
                    1 => "You have 1 note.".to_string(),
                    n => format!("You have {n} notes."),
                };
                CommandResponse::with_data(
                    Intent::Note,
                    response,
                    ResponseData::Notes {
                        notes: self.notes.clone(),
                    },
                )
            }
        }
    }

    /// Free-form chat: name setting, small talk about the assistant, then a
    /// personality fallback.
    fn chat_response(&mut self, text: &str) -> CommandResponse {
        if let Some(name) = extract::user_name(text) {
            self.memory.set_user_name(name.clone());
            debug!("Stored user name");
            return CommandResponse::new(
                Intent::AiChat,
                format!("Great, I'll call you {name} from now on!"),
            );
        }
        if intent::is_greeting(text) {
            let greeting = self.greeting_text();
            return CommandResponse::new(Intent::AiChat, greeting);
        }
        if find_ci(text, "who are you").is_some() || find_ci(text, "what are you").is_some() {
            return CommandResponse::new(
                Intent::AiChat,
                personality::identity_line(self.memory.personality()),
            );
        }
        if find_ci(text, "how are you").is_some() {
            return CommandResponse::new(
                Intent::AiChat,
                personality::wellbeing_line(self.memory.personality()),
            );
        }
        let fallback = personality::chat_fallbacks(self.memory.personality())
            .choose(&mut self.rng)
            .copied()
            .unwrap_or("");
        CommandResponse::new(Intent::AiChat, fallback)
    }
}

fn weather_response(text: &str) -> CommandResponse {
    match extract::weather_location(text) {
        Some(extract::CURRENT_LOCATION) => {
            let (location, temp, condition, humidity) = CURRENT_READING;
            let response = format!(
                "At your current location it's {condition}, around {temp}°C with {humidity}% humidity."
            );
            CommandResponse::with_data(
                Intent::Weather,
                response,
                ResponseData::Weather(WeatherReading {
                    location: location.to_string(),
                    temp_c: temp,
                    condition: condition.to_string(),
                    humidity,
                }),
            )
        }
        Some(city) => match CITY_READINGS.iter().find(|(key, ..)| *key == city) {
            Some(&(_, display, temp, condition, humidity)) => {
                let response = format!(
                    "The weather in {display} is {condition} with a temperature of {temp}°C and {humidity}% humidity."
                );
                CommandResponse::with_data(
                    Intent::Weather,
                    response,
                    ResponseData::Weather(WeatherReading {
                        location: display.to_string(),
                        temp_c: temp,
                        condition: condition.to_string(),
                        humidity,
                    }),
                )
            }
            None => CommandResponse::new(Intent::Weather, WEATHER_STUB),
        },
        None => CommandResponse::new(Intent::Weather, WEATHER_STUB),
    }
}

fn time_response() -> CommandResponse {
    let now = Local::now();
    let time = now.format("%-I:%M:%S %p").to_string();
    let date = now.format("%A, %B %-d, %Y").to_string();
    let response = format!("The current time is {time} and today is {date}.");
    CommandResponse::with_data(Intent::Time, response, ResponseData::Time { time, date })
}

fn search_response(text: &str) -> CommandResponse {
    match extract::search_query(text) {
        Some(query) => {
            let response = format!("I would search for \"{query}\", but web search isn't connected yet.");
            CommandResponse::with_data(Intent::Search, response, ResponseData::Search { query })
        }
        None => CommandResponse::new(Intent::Search, "What would you like me to search for?"),
    }
}

fn system_response(text: &str) -> CommandResponse {
    let command = match extract::system_command(text) {
        Some(command) => command,
        None => return CommandResponse::new(Intent::SystemCommand, SYSTEM_STUB),
    };
    let response = match command.action {
        SystemAction::Volume => volume_reply(command.parameter.as_deref(), command.value),
        SystemAction::App => match command.parameter.as_deref() {
            Some(app) => format!("I'll open {app}."),
            None => SYSTEM_STUB.to_string(),
        },
        _ => SYSTEM_STUB.to_string(),
    };
    CommandResponse::with_data(Intent::SystemCommand, response, ResponseData::System(command))
}

/// Volume reply keyed on how the command was derived: direction words give a
/// delta, an explicit level reads back as a percentage only when plausible.
fn volume_reply(parameter: Option<&str>, value: Option<i32>) -> String {
    match (parameter, value) {
        (_, Some(0)) => "I've muted the volume.".to_string(),
        (Some("set"), Some(level)) if (1..=100).contains(&level) => {
            format!("I've set the volume to {level}%.")
        }
        (_, Some(value)) if value > 0 => "I've increased the volume.".to_string(),
        (_, Some(_)) => "I've decreased the volume.".to_string(),
        _ => SYSTEM_STUB.to_string(),
    }
}

fn youtube_response(text: &str) -> CommandResponse {
    match extract::youtube_command(text) {
        Some(command) => {
            let query = command.parameter.clone().unwrap_or_default();
            let url = command.url.clone().unwrap_or_default();
            let response = format!("I'll play {query} on YouTube.");
            CommandResponse::with_data(
                Intent::Youtube,
                response,
                ResponseData::Youtube {
                    command,
                    search_query: query,
                    url,
                },
            )
        }
        None => {
            CommandResponse::new(Intent::Youtube, "What would you like me to play on YouTube?")
        }
    }
}
