//! Catalog-level tests for personality phrase selection.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use echonova::personality::{self, Personality, PhraseCategory};

#[test]
fn test_every_pair_has_phrases() {
    for &personality in Personality::all() {
        for &category in PhraseCategory::all() {
            let list = personality::responses_for(personality, category);
            assert!(!list.is_empty(), "empty list for {personality}/{category:?}");
            assert!((3..=4).contains(&list.len()));
        }
    }
}

#[test]
fn test_pick_is_subset_and_covers_list() {
    let mut rng = StdRng::seed_from_u64(3);
    for &personality in Personality::all() {
        for &category in PhraseCategory::all() {
            let list = personality::responses_for(personality, category);
            let mut seen = HashSet::new();
            for _ in 0..100 {
                let phrase = personality::pick(&mut rng, personality, category);
                assert!(list.contains(&phrase));
                seen.insert(phrase);
            }
            assert_eq!(seen.len(), list.len(), "100 draws should cover {personality}/{category:?}");
        }
    }
}

#[test]
fn test_identifiers_round_trip() {
    for &personality in Personality::all() {
        assert_eq!(Personality::parse(personality.as_str()), Some(personality));
    }
    assert_eq!(Personality::parse("sarcastic"), None);
    assert_eq!(Personality::TonyStark.as_str(), "tony_stark");
}

#[test]
fn test_selector_metadata() {
    assert_eq!(Personality::all().len(), 4);
    assert_eq!(Personality::default(), Personality::Default);
    assert_eq!(Personality::Funny.label(), "Humorous");
    assert_eq!(Personality::TonyStark.label(), "Tony Stark");
}

#[test]
fn test_chat_lines_exist_for_every_personality() {
    for &personality in Personality::all() {
        assert!(!personality::identity_line(personality).is_empty());
        assert!(!personality::wellbeing_line(personality).is_empty());
        assert_eq!(personality::chat_fallbacks(personality).len(), 4);
    }
}
