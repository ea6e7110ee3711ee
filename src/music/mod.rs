// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities.
//!
//! This module provides pitch classes, concrete pitches, scales, chords and
//! the event type the suggestion engine reads.

pub mod chord;
pub mod event;
pub mod pitch;
pub mod scale;

pub use chord::{chord_notes, voice_chord, ChordQuality, ChordType};
pub use event::{flatten, EventShape, MusicalEvent, Quantization};
pub use pitch::{transpose_chord, transpose_name, Pitch};
pub use scale::{scale_notes, Note, Scale, ScaleType, Semitones};

use thiserror::Error;

/// Errors from parsing musical text at the crate boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid note name: {0:?}")]
    InvalidNote(String),
    #[error("invalid pitch: {0:?} (expected e.g. C4, F#3, Bb2)")]
    InvalidPitch(String),
    #[error("chord has no pitches")]
    EmptyChord,
    #[error("unknown genre: {0:?}")]
    UnknownGenre(String),
    #[error("unknown quantization: {0:?} (expected 1/16, 1/8, 1/4 or 1/1)")]
    UnknownQuantization(String),
}
