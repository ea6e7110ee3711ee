// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for Tunesmith
//!
//! These tests drive the engine through its public API only.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tunesmith::music::{voice_chord, ChordType, Note, Pitch};
use tunesmith::{
    detect_key, EngineConfig, Genre, MusicalEvent, PresetLibrary, Quantization, ScriptedSource, Suggestion,
    SuggestionEngine,
};

fn events(tokens: &[&str]) -> Vec<MusicalEvent> {
    tokens.iter().map(|t| t.parse().unwrap()).collect()
}

fn pitch(s: &str) -> Pitch {
    s.parse().unwrap()
}

fn suggest(engine: &SuggestionEngine, history: &[MusicalEvent], genre: Genre, rng: &mut impl tunesmith::RandomSource) -> Suggestion {
    engine
        .suggest(history, genre, 120, Quantization::Quarter, 4, rng)
        .expect("non-empty history must produce a suggestion")
}

fn random_event(rng: &mut StdRng) -> MusicalEvent {
    let random_pitch = |rng: &mut StdRng| {
        Pitch::new(Note::from_pitch_class(rng.gen_range(0..12)), rng.gen_range(1..7))
    };
    match rng.gen_range(0..10) {
        0 => MusicalEvent::Rest,
        1..=3 => {
            let size = rng.gen_range(2..5);
            MusicalEvent::Chord((0..size).map(|_| random_pitch(rng)).collect())
        }
        _ => MusicalEvent::Note(random_pitch(rng)),
    }
}

/// Chord in, chord out; note in, note out
#[test]
fn test_shape_continuity() {
    let engine = SuggestionEngine::new(EngineConfig {
        classic_example_probability: 0.0,
        ..Default::default()
    });
    let mut rng = StdRng::seed_from_u64(2026);

    for genre in Genre::ALL {
        for _ in 0..100 {
            let after_chord = suggest(&engine, &events(&["E4", "A3+C4+E4"]), genre, &mut rng);
            assert!(after_chord.pitches().len() >= 2, "{} gave {}", genre, after_chord);

            let after_note = suggest(&engine, &events(&["A3+C4+E4", "E4"]), genre, &mut rng);
            assert_eq!(after_note.pitches().len(), 1, "{} gave {}", genre, after_note);
        }
    }
}

/// Classic quotes keep the shape too
#[test]
fn test_shape_continuity_with_quotes_forced() {
    let engine = SuggestionEngine::new(EngineConfig {
        classic_example_probability: 1.0,
        ..Default::default()
    });
    let mut rng = StdRng::seed_from_u64(8);

    for genre in Genre::ALL {
        for length in 1..12 {
            let mut history = vec![MusicalEvent::Note(pitch("D4")); length];
            let s = suggest(&engine, &history, genre, &mut rng);
            assert!(!s.is_chord());

            history.push("D4+F4+A4".parse().unwrap());
            let s = suggest(&engine, &history, genre, &mut rng);
            assert!(s.is_chord());
        }
    }
}

#[test]
fn test_transposition_round_trip() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..500 {
        let p = Pitch::from_midi(rng.gen_range(0..128));
        let k = rng.gen_range(-36..=36);
        assert_eq!(p.transpose(k).transpose(-k), p);
    }
}

#[test]
fn test_voicing_octave_rule() {
    let voiced = voice_chord(&ChordType::Major7.notes(), 3);
    assert_eq!(voiced, vec![pitch("C3"), pitch("E3"), pitch("G3"), pitch("B4")]);

    let triad = voice_chord(&ChordType::Minor.notes(), 5);
    assert!(triad.iter().all(|p| p.octave == 5));
}

#[test]
fn test_key_detection() {
    assert_eq!(detect_key(&events(&["C4", "C4", "C4", "G4"]), 8), Note::C);
    assert_eq!(detect_key(&[], 8), Note::C);
}

/// A source that always picks the first branch quotes the Pop fragments at
/// position 1 (G4) and moves it from G to the history key C
#[test]
fn test_determinism_with_first_choices() {
    let engine = SuggestionEngine::default();
    let mut rng = ScriptedSource::constant(0.0);
    let s = suggest(&engine, &events(&["C4"]), Genre::Pop, &mut rng);
    assert_eq!(s.pitches(), &[pitch("C5")]);

    let mut again = ScriptedSource::constant(0.0);
    assert_eq!(suggest(&engine, &events(&["C4"]), Genre::Pop, &mut again), s);
}

#[test]
fn test_seeded_runs_repeat() {
    let engine = SuggestionEngine::default();
    let history = events(&["C4", "E4", "G4+B4+D5", "REST", "A4"]);
    for genre in Genre::ALL {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(suggest(&engine, &history, genre, &mut a), suggest(&engine, &history, genre, &mut b));
        }
    }
}

#[test]
fn test_no_empty_output_over_random_histories() {
    let engine = SuggestionEngine::default();
    let mut rng = StdRng::seed_from_u64(42);

    for i in 0..1000 {
        let genre = Genre::ALL[i % Genre::ALL.len()];
        let length = rng.gen_range(1..16);
        let history: Vec<MusicalEvent> = (0..length).map(|_| random_event(&mut rng)).collect();
        let octave = rng.gen_range(1..7);

        let s = engine
            .suggest(&history, genre, 100, Quantization::Eighth, octave, &mut rng)
            .unwrap();
        assert!(!s.pitches().is_empty());
    }
}

#[test]
fn test_empty_history_yields_none_but_next_event_still_suggests() {
    let engine = SuggestionEngine::default();
    let mut rng = StdRng::seed_from_u64(3);
    assert!(engine.suggest(&[], Genre::Rock, 140, Quantization::Sixteenth, 4, &mut rng).is_none());

    let s = engine.next_event(&[], Genre::Rock, 4, &mut rng);
    assert_eq!(s.pitches().len(), 1);
    assert_eq!(s.pitches()[0].octave, 4);
}

/// Every Pop fragment opens on C4 and has eight events, so a history of
/// eight events quotes a C4 and moves it into the history's key
#[test]
fn test_example_transposition_into_g() {
    let engine = SuggestionEngine::new(EngineConfig {
        classic_example_probability: 1.0,
        ..Default::default()
    });

    let mut rng = ScriptedSource::constant(0.0);
    let in_g = events(&["G4", "D4", "G4", "B3", "G4", "D5", "G4", "G3"]);
    assert_eq!(detect_key(&in_g, 8), Note::G);
    let s = suggest(&engine, &in_g, Genre::Pop, &mut rng);
    assert_eq!(s.pitches(), &[pitch("G4")]);

    let mut rng = ScriptedSource::constant(0.0);
    let in_d = vec![MusicalEvent::Note(pitch("D3")); 8];
    let s = suggest(&engine, &in_d, Genre::Pop, &mut rng);
    assert_eq!(s.pitches(), &[pitch("D4")]);
}

#[test]
fn test_extreme_base_octaves_do_not_overflow() {
    let engine = SuggestionEngine::default();
    let mut rng = StdRng::seed_from_u64(64);

    for genre in Genre::ALL {
        for octave in [i32::MAX, i32::MIN] {
            let histories = [
                vec![MusicalEvent::Note(Pitch::new(Note::E, octave))],
                vec![MusicalEvent::Chord(vec![Pitch::new(Note::D, octave), Pitch::new(Note::F, octave)])],
                events(&["REST"]),
            ];
            for history in &histories {
                for _ in 0..50 {
                    let s = engine
                        .suggest(history, genre, 120, Quantization::Quarter, octave, &mut rng)
                        .unwrap();
                    assert!(!s.pitches().is_empty());
                }
            }
        }
    }
}

#[test]
fn test_presets_feed_the_engine() {
    let library = PresetLibrary::builtin().unwrap();
    let engine = SuggestionEngine::default();
    let mut rng = StdRng::seed_from_u64(17);

    for preset in library.all() {
        let genre = preset.genre.unwrap_or(Genre::Pop);
        let mut history = preset.sequence.clone();
        for _ in 0..4 {
            let s = engine
                .suggest(&history, genre, preset.bpm, Quantization::Quarter, 4, &mut rng)
                .unwrap();
            history.push(s.into_event());
        }
        assert_eq!(history.len(), preset.sequence.len() + 4);
    }
}

#[tokio::test]
async fn test_service_publishes_latest() {
    use std::time::Duration;
    use tunesmith::{SuggestionRequest, SuggestionService};

    let engine = SuggestionEngine::new(EngineConfig {
        debounce_ms: 10,
        latency_ms: 0,
        ..Default::default()
    });
    let (mut service, mut rx) = SuggestionService::new(engine);
    service.history_changed(SuggestionRequest::new(events(&["C4", "C4+E4+G4"]), Genre::Pop));

    let published = tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            rx.changed().await.unwrap();
            if let Some(s) = rx.borrow_and_update().clone() {
                return s;
            }
        }
    })
    .await
    .unwrap();
    assert!(published.is_chord());
}
