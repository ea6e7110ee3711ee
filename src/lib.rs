// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tunesmith - a musical suggestion engine
//!
//! Given what a performer has played so far (notes, chords and rests), a
//! genre and a few session parameters, proposes one plausible next event.

pub mod config;
pub mod engine;
pub mod music;
pub mod service;
pub mod theory;

pub use config::EngineConfig;
pub use engine::{detect_key, EngineState, RandomSource, ScriptedSource, Suggestion, SuggestionEngine};
pub use music::{MusicalEvent, Note, ParseError, Pitch, Quantization};
pub use service::{suggest_delayed, SuggestionRequest, SuggestionService};
pub use theory::{Genre, MelodyPreset, PresetLibrary, TheoryDatabase};
