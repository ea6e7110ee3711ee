// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Suggestion engine.
//!
//! Reads the performer's history, picks a strategy from the shape of the
//! last event and produces one next event. A suggestion after a chord is a
//! chord, after a note it is a single note.
//!
//! ```text
//! history ──► state ──┬─ Empty ─────► random scale note at C
//!                     ├─ AfterRest ─► strong degree in detected key
//!                     ├─ AfterChord ─► [classic quote] ─► chord suggester
//!                     └─ AfterNote ──► [classic quote] ─► note suggester
//! ```

pub mod chord;
pub mod classic;
pub mod key;
pub mod melody;
pub mod random;

pub use key::{detect_key, DEFAULT_KEY_WINDOW};
pub use random::{RandomSource, ScriptedSource};

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::EngineConfig;
use crate::music::{EventShape, MusicalEvent, Note, Pitch, Quantization, Scale};
use crate::theory::{Genre, GenreTheory, TheoryDatabase};

/// What the last history event leaves the engine to respond to
#[derive(Debug, Clone, PartialEq)]
pub enum EngineState<'a> {
    Empty,
    AfterRest,
    AfterChord(&'a [Pitch]),
    AfterNote(Pitch),
}

impl<'a> EngineState<'a> {
    pub fn from_history(history: &'a [MusicalEvent]) -> Self {
        match history.last() {
            None => EngineState::Empty,
            Some(event) => match event.shape() {
                EventShape::Rest => EngineState::AfterRest,
                EventShape::Note => EngineState::AfterNote(event.pitches()[0]),
                EventShape::Chord => EngineState::AfterChord(event.pitches()),
            },
        }
    }
}

/// A proposed next event; never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion(Vec<Pitch>);

impl Suggestion {
    pub(crate) fn from_pitch(pitch: Pitch) -> Self {
        Suggestion(vec![pitch])
    }

    /// Callers guarantee at least one pitch
    pub(crate) fn from_pitches(pitches: Vec<Pitch>) -> Self {
        debug_assert!(!pitches.is_empty());
        Suggestion(pitches)
    }

    pub fn pitches(&self) -> &[Pitch] {
        &self.0
    }

    pub fn is_chord(&self) -> bool {
        self.0.len() > 1
    }

    pub fn into_pitches(self) -> Vec<Pitch> {
        self.0
    }

    /// The suggestion as a history event, ready to append
    pub fn into_event(self) -> MusicalEvent {
        MusicalEvent::from_pitches(self.0)
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pitch) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "{}", pitch)?;
        }
        Ok(())
    }
}

/// Stateless suggestion engine; all per-request state lives in the arguments
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    config: EngineConfig,
    theory: &'static TheoryDatabase,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl SuggestionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            theory: TheoryDatabase::global(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Suggest the next event, or `None` for an empty history.
    ///
    /// `bpm` and `quantization` describe the session; they are logged but do
    /// not steer the choice.
    pub fn suggest<R: RandomSource>(
        &self,
        history: &[MusicalEvent],
        genre: Genre,
        bpm: u32,
        quantization: Quantization,
        base_octave: i32,
        rng: &mut R,
    ) -> Option<Suggestion> {
        if history.is_empty() {
            tracing::debug!("empty history, nothing to suggest");
            return None;
        }
        tracing::debug!(%genre, bpm, %quantization, base_octave, events = history.len(), "suggestion requested");
        Some(self.next_event(history, genre, base_octave, rng))
    }

    /// [`suggest`](Self::suggest) with a fresh entropy-seeded generator
    pub fn suggest_with_entropy(
        &self,
        history: &[MusicalEvent],
        genre: Genre,
        bpm: u32,
        quantization: Quantization,
        base_octave: i32,
    ) -> Option<Suggestion> {
        let mut rng = StdRng::from_entropy();
        self.suggest(history, genre, bpm, quantization, base_octave, &mut rng)
    }

    /// Pick a strategy from the last event and produce one suggestion
    pub fn next_event<R: RandomSource>(
        &self,
        history: &[MusicalEvent],
        genre: Genre,
        base_octave: i32,
        rng: &mut R,
    ) -> Suggestion {
        let theory = self.theory.genre(genre);
        let state = EngineState::from_history(history);
        tracing::debug!(?state, %genre, "selecting strategy");

        match state {
            EngineState::Empty => {
                let scale_type = rng.choose(&theory.scales).copied().unwrap_or(theory.primary_scale());
                let scale = Scale::new(Note::C, scale_type);
                let note = rng.choose(scale.notes()).copied().unwrap_or(Note::C);
                Suggestion::from_pitch(Pitch::new(note, base_octave))
            }
            EngineState::AfterRest => {
                let key = detect_key(history, self.config.key_window);
                let scale_type = rng.choose(&theory.scales).copied().unwrap_or(theory.primary_scale());
                let scale = Scale::new(key, scale_type);
                Suggestion::from_pitch(melody::strong_degree(&scale, base_octave, rng))
            }
            EngineState::AfterChord(last_chord) => {
                if let Some(quote) = self.classic_quote(history, theory, EventShape::Chord, rng) {
                    return quote;
                }
                let key = detect_key(history, self.config.key_window);
                chord::suggest_chord(last_chord, key, theory, base_octave, &self.config, rng)
            }
            EngineState::AfterNote(last) => {
                if let Some(quote) = self.classic_quote(history, theory, EventShape::Note, rng) {
                    return quote;
                }
                let key = detect_key(history, self.config.key_window);
                melody::suggest_note(last, key, theory, base_octave, &self.config, rng)
            }
        }
    }

    fn classic_quote<R: RandomSource>(
        &self,
        history: &[MusicalEvent],
        theory: &GenreTheory,
        shape: EventShape,
        rng: &mut R,
    ) -> Option<Suggestion> {
        if !rng.chance(self.config.classic_example_probability) {
            return None;
        }
        classic::quote_example(history, theory, shape, self.config.key_window, rng)
    }
}
