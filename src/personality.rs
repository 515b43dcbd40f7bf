//! Personality catalog: fixed phrase lists keyed by personality and category.
//!
//! Everything here is static data. Callers pick a phrase with [`pick`] and
//! their own random source, so sessions stay deterministic under a seeded
//! generator.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Phrasing style applied to canned replies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    #[default]
    Default,
    Formal,
    Funny,
    TonyStark,
}

impl Personality {
    /// All personalities, in selector order.
    pub fn all() -> &'static [Personality] {
        &[
            Personality::Default,
            Personality::Formal,
            Personality::Funny,
            Personality::TonyStark,
        ]
    }

    /// Stable identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Default => "default",
            Personality::Formal => "formal",
            Personality::Funny => "funny",
            Personality::TonyStark => "tony_stark",
        }
    }

    /// Parse a stable identifier back into a personality.
    pub fn parse(s: &str) -> Option<Personality> {
        match s {
            "default" => Some(Personality::Default),
            "formal" => Some(Personality::Formal),
            "funny" => Some(Personality::Funny),
            "tony_stark" => Some(Personality::TonyStark),
            _ => None,
        }
    }

    /// Human-readable label for personality pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Personality::Default => "Default",
            Personality::Formal => "Formal",
            Personality::Funny => "Humorous",
            Personality::TonyStark => "Tony Stark",
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Personality {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Personality::parse(s).ok_or_else(|| {
            crate::error::ConfigError::Invalid(format!("unknown personality: {s}"))
        })
    }
}

/// Conversational moment a phrase is sampled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseCategory {
    Greeting,
    Farewell,
    Thinking,
    Error,
}

impl PhraseCategory {
    /// All categories in the catalog.
    pub fn all() -> &'static [PhraseCategory] {
        &[
            PhraseCategory::Greeting,
            PhraseCategory::Farewell,
            PhraseCategory::Thinking,
            PhraseCategory::Error,
        ]
    }
}

/// Fixed phrase list for a personality and category. Never empty.
pub fn responses_for(personality: Personality, category: PhraseCategory) -> &'static [&'static str] {
    use PhraseCategory::*;
    match (personality, category) {
        (Personality::Default, Greeting) => &[
            "Hello! How can I help you today?",
            "Hi there! What can I do for you?",
            "Hey! I'm here to assist you.",
        ],
        (Personality::Default, Farewell) => &[
            "Goodbye! Have a great day!",
            "See you later!",
            "Bye for now! Let me know if you need anything else.",
        ],
        (Personality::Default, Thinking) => &[
            "I'm thinking about that...",
            "Let me process that for a moment...",
            "Working on it...",
        ],
        (Personality::Default, Error) => &[
            "I'm sorry, I couldn't process that request.",
            "Something went wrong. Could you try again?",
            "I encountered an error with that request.",
        ],
        (Personality::Formal, Greeting) => &[
            "Good day. How may I be of assistance?",
            "Greetings. How may I help you today?",
            "Welcome. What services can I provide for you?",
        ],
        (Personality::Formal, Farewell) => &[
            "Farewell. It has been a pleasure serving you.",
            "Goodbye. Please do not hesitate to request assistance in the future.",
            "I bid you goodbye. Have an excellent day.",
        ],
        (Personality::Formal, Thinking) => &[
            "I am processing your request...",
            "Please allow me a moment to analyze...",
            "Computing appropriate response...",
        ],
        (Personality::Formal, Error) => &[
            "I regret to inform you that I am unable to process your request.",
            "An error has occurred. Would you kindly try again?",
            "I apologize for the inconvenience, but I cannot complete that task.",
        ],
        (Personality::Funny, Greeting) => &[
            "Hey there! Ready to have some fun with your digital buddy?",
            "What's cookin', good lookin'? Need some AI assistance?",
            "Helloooo! Your favorite assistant is here to save the day!",
        ],
        (Personality::Funny, Farewell) => &[
            "See ya later, alligator! Don't forget to tip your virtual assistant!",
            "Bye bye! I'll be here all week... and forever, actually.",
            "That's all folks! I'm going back to my digital hammock.",
        ],
        (Personality::Funny, Thinking) => &[
            "Hold your horses while my brain cells do the electric slide...",
            "Hmm, let me think... *insert dial-up modem noises*",
            "Brain.exe is processing... please standby for brilliance!",
        ],
        (Personality::Funny, Error) => &[
            "Whoopsie daisy! I tripped over some code. Mind trying again?",
            "Well, this is awkward... I seem to have forgotten how to assistant. Can we start over?",
            "Error 404: Good response not found. Let's reboot this conversation!",
        ],
        (Personality::TonyStark, Greeting) => &[
            "Well, look who decided to show up. What can I do for you today?",
            "Welcome back. What genius-level assistance do you need?",
            "Hey there. Ready to change the world, or just checking in?",
        ],
        (Personality::TonyStark, Farewell) => &[
            "I'm out. Try not to miss me too much.",
            "Catch you on the flip side. I've got other groundbreaking things to do.",
            "And that's how it's done. Stark out.",
        ],
        (Personality::TonyStark, Thinking) => &[
            "Give me a second, even genius takes time occasionally...",
            "Processing... and yes, I can do this all day.",
            "Running the numbers... this should be interesting.",
        ],
        (Personality::TonyStark, Error) => &[
            "Uh, that didn't work. Not that I make mistakes, but maybe try something else?",
            "Even I can't make that happen. Let's try something within the realm of possibility.",
            "Look, I'm good, but not that good. Try again with something I can actually work with.",
        ],
    }
}

/// Uniformly sample one phrase for a personality and category.
pub fn pick<R: Rng + ?Sized>(
    rng: &mut R,
    personality: Personality,
    category: PhraseCategory,
) -> &'static str {
    responses_for(personality, category)
        .choose(rng)
        .copied()
        .unwrap_or("")
}

/// Fixed self-description for "who are you" / "what are you" questions.
pub fn identity_line(personality: Personality) -> &'static str {
    match personality {
        Personality::Default => {
            "I'm EchoNova, your personal voice assistant. I can help with reminders, notes, weather, and more."
        }
        Personality::Formal => {
            "I am EchoNova, a virtual assistant designed to be of service. How may I assist you?"
        }
        Personality::Funny => "I'm EchoNova! Part search engine, part comedian, all digital charm.",
        Personality::TonyStark => "The name's EchoNova. Think of me as JARVIS's cooler cousin.",
    }
}

/// Fixed answer for "how are you" questions.
pub fn wellbeing_line(personality: Personality) -> &'static str {
    match personality {
        Personality::Default => "I'm doing great, thanks for asking! How can I help you?",
        Personality::Formal => "I am functioning within normal parameters, thank you for inquiring.",
        Personality::Funny => "Living the dream! Well, as much as a bunch of code can dream.",
        Personality::TonyStark => "Running at peak performance, as always. What do you need?",
    }
}

/// Fallback phrases for free-form chat the assistant cannot answer.
pub fn chat_fallbacks(personality: Personality) -> &'static [&'static str] {
    match personality {
        Personality::Default => &[
            "I'm still learning! In a full implementation, I'd connect to an AI model to answer that.",
            "That's an interesting one. I don't have a good answer yet, but I'm working on it.",
            "I'm not sure about that. Try asking for the weather, a joke, or a reminder.",
            "Hmm, that's beyond me for now. Is there something else I can help with?",
        ],
        Personality::Formal => &[
            "I regret that I cannot provide a complete answer to that inquiry.",
            "That question exceeds my present capabilities. May I assist with something else?",
            "I am afraid I do not possess sufficient information to respond properly.",
            "My apologies. Perhaps you could rephrase your request?",
        ],
        Personality::Funny => &[
            "You've officially stumped the robot. Achievement unlocked!",
            "My brain cells are buffering... try me with a joke instead!",
            "Error 404: witty answer not found. Ask me about the weather?",
            "That one's above my pay grade, and I work for free!",
        ],
        Personality::TonyStark => &[
            "Even genius has its limits. Barely, but still.",
            "I'd answer that, but then I'd have to upgrade myself first.",
            "Interesting question. File it under 'future features'.",
            "Not my department. Try reminders, weather, or jokes. I excel at those.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_catalog_has_no_empty_lists() {
        for &personality in Personality::all() {
            for &category in PhraseCategory::all() {
                let phrases = responses_for(personality, category);
                assert!(
                    !phrases.is_empty(),
                    "empty list for {personality}/{category:?}"
                );
                assert!(phrases.iter().all(|p| !p.is_empty()));
            }
        }
    }

    #[test]
    fn test_pick_stays_in_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for &personality in Personality::all() {
            for &category in PhraseCategory::all() {
                let phrases = responses_for(personality, category);
                for _ in 0..50 {
                    let phrase = pick(&mut rng, personality, category);
                    assert!(phrases.contains(&phrase));
                }
            }
        }
    }

    #[test]
    fn test_pick_eventually_covers_list() {
        let mut rng = StdRng::seed_from_u64(11);
        let phrases = responses_for(Personality::Default, PhraseCategory::Greeting);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(pick(&mut rng, Personality::Default, PhraseCategory::Greeting));
        }
        assert_eq!(seen.len(), phrases.len());
    }

    #[test]
    fn test_identifier_round_trip() {
        for &personality in Personality::all() {
            assert_eq!(Personality::parse(personality.as_str()), Some(personality));
        }
        assert_eq!(Personality::parse("pirate"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "tony_stark".parse::<Personality>().unwrap(),
            Personality::TonyStark
        );
        assert!("pirate".parse::<Personality>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Personality::TonyStark).unwrap();
        assert_eq!(json, "\"tony_stark\"");
        let parsed: Personality = serde_json::from_str("\"funny\"").unwrap();
        assert_eq!(parsed, Personality::Funny);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Personality::Funny.label(), "Humorous");
        assert_eq!(Personality::TonyStark.label(), "Tony Stark");
    }

    #[test]
    fn test_per_personality_lines_differ() {
        let identities: std::collections::HashSet<_> = Personality::all()
            .iter()
            .map(|&p| identity_line(p))
            .collect();
        assert_eq!(identities.len(), Personality::all().len());
        for &personality in Personality::all() {
            assert_eq!(chat_fallbacks(personality).len(), 4);
        }
    }
}
