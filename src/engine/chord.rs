// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord-follows-chord suggestions.
//!
//! Picks the next root either from a genre progression or by a small step
//! from the previous root, then derives the chord type from the root's scale
//! degree and voices it at the base octave.

use super::random::RandomSource;
use super::Suggestion;
use crate::config::EngineConfig;
use crate::music::{chord_notes, voice_chord, ChordQuality, ChordType, Note, Pitch, Scale, Semitones};
use crate::theory::GenreTheory;

/// Root movements tried by voice leading, in semitones
const VOICE_LEADING_OFFSETS: [Semitones; 6] = [-3, -2, -1, 1, 2, 3];

/// Suggest a chord to follow `last_chord` in the detected `key`
pub(crate) fn suggest_chord<R: RandomSource>(
    last_chord: &[Pitch],
    key: Note,
    theory: &GenreTheory,
    base_octave: i32,
    config: &EngineConfig,
    rng: &mut R,
) -> Suggestion {
    let scale = Scale::new(key, theory.primary_scale());
    let last_root = last_chord.first().map(|p| p.note).unwrap_or(key);

    let root = if rng.chance(config.progression_probability) {
        let root = progression_root(last_root, theory, rng);
        tracing::debug!(%last_root, %root, "chord root from progression");
        root
    } else {
        let root = voice_led_root(last_root, &scale, rng);
        tracing::debug!(%last_root, %root, "chord root from voice leading");
        root
    };

    let chord_type = chord_type_for(root, &scale, theory, rng);
    let notes = chord_notes(root, chord_type);
    tracing::debug!(%root, chord = %chord_type, "suggesting chord");
    Suggestion::from_pitches(voice_chord(&notes, base_octave))
}

/// Next entry after `last_root` in a random progression, or a random entry
/// when the root is absent or closes the progression
fn progression_root<R: RandomSource>(last_root: Note, theory: &GenreTheory, rng: &mut R) -> Note {
    let Some(progression) = rng.choose(&theory.progressions) else {
        return last_root;
    };
    match progression.iter().position(|&n| n == last_root) {
        Some(i) if i + 1 < progression.len() => progression[i + 1],
        _ => progression[rng.index(progression.len())],
    }
}

/// Random in-scale root within three semitones of `last_root`
fn voice_led_root<R: RandomSource>(last_root: Note, scale: &Scale, rng: &mut R) -> Note {
    let candidates: Vec<Note> = VOICE_LEADING_OFFSETS
        .iter()
        .map(|&offset| last_root.transpose(offset))
        .filter(|&note| scale.contains(note))
        .collect();

    match rng.choose(&candidates) {
        Some(&note) => note,
        None => rng.choose(scale.notes()).copied().unwrap_or(scale.root()),
    }
}

/// Major on degrees 0 and 4, minor on degree 2, anything from the palette elsewhere
fn chord_type_for<R: RandomSource>(
    root: Note,
    scale: &Scale,
    theory: &GenreTheory,
    rng: &mut R,
) -> ChordType {
    match scale.degree_of(root) {
        Some(0) | Some(4) => theory.chord_of_quality(ChordQuality::Major),
        Some(2) => theory.chord_of_quality(ChordQuality::Minor),
        _ => rng.choose(&theory.chords).copied().unwrap_or(ChordType::Major),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::random::ScriptedSource;
    use crate::music::ScaleType;
    use crate::theory::{Genre, TheoryDatabase};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pitches(tokens: &[&str]) -> Vec<Pitch> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_progression_follows_next_entry() {
        let pop = TheoryDatabase::global().genre(Genre::Pop);
        // First progression is C-G-A-F; C is followed by G
        let mut rng = ScriptedSource::constant(0.0);
        assert_eq!(progression_root(Note::C, pop, &mut rng), Note::G);
        assert_eq!(progression_root(Note::A, pop, &mut rng), Note::F);
    }

    #[test]
    fn test_progression_last_or_missing_root_picks_entry() {
        let pop = TheoryDatabase::global().genre(Genre::Pop);
        // F closes C-G-A-F; index draw 0.0 picks C
        let mut rng = ScriptedSource::constant(0.0);
        assert_eq!(progression_root(Note::F, pop, &mut rng), Note::C);
        let mut rng = ScriptedSource::new(vec![0.0, 0.99]);
        assert_eq!(progression_root(Note::Ds, pop, &mut rng), Note::F);
    }

    #[test]
    fn test_voice_led_root_stays_close_and_in_scale() {
        let scale = Scale::new(Note::C, ScaleType::Major);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let root = voice_led_root(Note::E, &scale, &mut rng);
            assert!(scale.contains(root));
            let distance = Note::E.interval_to(root).min(root.interval_to(Note::E));
            assert!((1..=3).contains(&distance), "{} too far from E", root);
        }
    }

    #[test]
    fn test_chord_type_by_degree() {
        let pop = TheoryDatabase::global().genre(Genre::Pop);
        let scale = Scale::new(Note::C, ScaleType::Major);
        let mut rng = ScriptedSource::constant(0.99);
        assert_eq!(chord_type_for(Note::C, &scale, pop, &mut rng), ChordType::Major);
        assert_eq!(chord_type_for(Note::E, &scale, pop, &mut rng), ChordType::Minor);
        assert_eq!(chord_type_for(Note::G, &scale, pop, &mut rng), ChordType::Major);
        // Other degrees draw from the palette; 0.99 picks the last entry
        assert_eq!(chord_type_for(Note::D, &scale, pop, &mut rng), ChordType::Sus4);
        assert_eq!(chord_type_for(Note::Cs, &scale, pop, &mut rng), ChordType::Sus4);
    }

    #[test]
    fn test_suggest_chord_always_voices_two_or_more() {
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(99);
        for genre in Genre::ALL {
            let theory = TheoryDatabase::global().genre(genre);
            for _ in 0..100 {
                let chord = suggest_chord(&pitches(&["D4", "F4", "A4"]), Note::D, theory, 3, &config, &mut rng);
                assert!(chord.is_chord());
                assert!(chord.pitches().iter().take(3).all(|p| p.octave == 3));
            }
        }
    }

    #[test]
    fn test_progression_path_with_first_choices() {
        // Every draw 0.0: progression path, first progression, C -> G, G is degree 4 (major)
        let pop = TheoryDatabase::global().genre(Genre::Pop);
        let mut rng = ScriptedSource::constant(0.0);
        let chord = suggest_chord(&pitches(&["C4", "E4", "G4"]), Note::C, pop, 4, &EngineConfig::default(), &mut rng);
        assert_eq!(chord.pitches(), pitches(&["G4", "B4", "D4"]).as_slice());
    }
}
