// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Concrete pitches: a note class plus an octave.
//!
//! Text form is `<LETTER>[#|b]<octave>` (e.g. `F#3`, `Bb4`). Parsing and
//! formatting happen only at the edges; everything inside works on the
//! structured value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::scale::{Note, Semitones};
use super::ParseError;

/// MIDI note number for middle C, used when pitch text can't be parsed
pub const MIDDLE_C_MIDI: i32 = 60;

/// A note class at a specific octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch {
    pub note: Note,
    pub octave: i32,
}

impl Pitch {
    pub const fn new(note: Note, octave: i32) -> Self {
        Self { note, octave }
    }

    /// Shift by a signed number of semitones, carrying into the octave.
    pub fn transpose(self, semitones: Semitones) -> Self {
        let total = (self.note.pitch_class() as Semitones).saturating_add(semitones);
        Self {
            note: Note::from_pitch_class(total),
            octave: self.octave.saturating_add(total.div_euclid(12)),
        }
    }

    /// MIDI note number (C4 = 60). May fall outside 0-127 for extreme octaves.
    pub fn to_midi(self) -> i32 {
        self.octave
            .saturating_add(1)
            .saturating_mul(12)
            .saturating_add(self.note.pitch_class() as i32)
    }

    /// Inverse of [`Pitch::to_midi`]
    pub fn from_midi(midi: i32) -> Self {
        Self {
            note: Note::from_pitch_class(midi),
            octave: midi.div_euclid(12) - 1,
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.octave)
    }
}

impl FromStr for Pitch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let split = text
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .ok_or_else(|| ParseError::InvalidPitch(s.to_string()))?;
        let (name, octave) = text.split_at(split);
        let note = Note::from_name(name).ok_or_else(|| ParseError::InvalidPitch(s.to_string()))?;
        let octave = octave
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidPitch(s.to_string()))?;
        Ok(Pitch { note, octave })
    }
}

impl TryFrom<String> for Pitch {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> Self {
        pitch.to_string()
    }
}

/// Transpose every pitch of a chord
pub fn transpose_chord(pitches: &[Pitch], semitones: Semitones) -> Vec<Pitch> {
    pitches.iter().map(|p| p.transpose(semitones)).collect()
}

/// Transpose pitch text. Text that doesn't parse is returned unchanged.
pub fn transpose_name(text: &str, semitones: Semitones) -> String {
    match text.parse::<Pitch>() {
        Ok(pitch) => pitch.transpose(semitones).to_string(),
        Err(_) => text.to_string(),
    }
}

/// MIDI number for pitch text, or middle C when it doesn't parse
pub fn midi_or_default(text: &str) -> i32 {
    text.parse::<Pitch>()
        .map(Pitch::to_midi)
        .unwrap_or(MIDDLE_C_MIDI)
}

/// Whether the pitch's class belongs to the given note classes
pub fn is_in_scale(pitch: Pitch, scale_notes: &[Note]) -> bool {
    scale_notes.contains(&pitch.note)
}

/// Whether the pitch's class belongs to the given chord tones
pub fn is_in_chord(pitch: Pitch, chord_notes: &[Note]) -> bool {
    chord_notes.contains(&pitch.note)
}
