// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord types and fixed-octave voicing.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pitch::Pitch;
use super::scale::{notes_from_intervals, Note};

/// Broad harmonic category of a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Dominant,
    Suspended,
    Power,
}

/// Chord shapes available to the genre palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
    Augmented,
    Dominant7,
    Major7,
    Minor7,
    Sus2,
    Sus4,
    Power,
}

impl ChordType {
    /// Semitone offsets from the root
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
            ChordType::Dominant7 => &[0, 4, 7, 10],
            ChordType::Major7 => &[0, 4, 7, 11],
            ChordType::Minor7 => &[0, 3, 7, 10],
            ChordType::Sus2 => &[0, 2, 7],
            ChordType::Sus4 => &[0, 5, 7],
            ChordType::Power => &[0, 7],
        }
    }

    pub fn quality(self) -> ChordQuality {
        match self {
            ChordType::Major | ChordType::Major7 => ChordQuality::Major,
            ChordType::Minor | ChordType::Minor7 => ChordQuality::Minor,
            ChordType::Diminished => ChordQuality::Diminished,
            ChordType::Augmented => ChordQuality::Augmented,
            ChordType::Dominant7 => ChordQuality::Dominant,
            ChordType::Sus2 | ChordType::Sus4 => ChordQuality::Suspended,
            ChordType::Power => ChordQuality::Power,
        }
    }

    /// Get a human-readable name for this chord type
    pub fn name(self) -> &'static str {
        match self {
            ChordType::Major => "Major",
            ChordType::Minor => "Minor",
            ChordType::Diminished => "Diminished",
            ChordType::Augmented => "Augmented",
            ChordType::Dominant7 => "Dominant 7th",
            ChordType::Major7 => "Major 7th",
            ChordType::Minor7 => "Minor 7th",
            ChordType::Sus2 => "Suspended 2nd",
            ChordType::Sus4 => "Suspended 4th",
            ChordType::Power => "Power Chord",
        }
    }

    /// Chord tones rooted at C
    pub fn notes(self) -> Vec<Note> {
        chord_notes(Note::C, self)
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Note classes of `chord` rooted at `root`, ignoring octave
pub fn chord_notes(root: Note, chord: ChordType) -> Vec<Note> {
    notes_from_intervals(root, chord.intervals())
}

/// Assign octaves to chord tones.
///
/// Root, third and fifth sit at `base_octave`; a seventh goes one octave up.
/// Tones past the seventh are dropped.
pub fn voice_chord(notes: &[Note], base_octave: i32) -> Vec<Pitch> {
    notes
        .iter()
        .take(4)
        .enumerate()
        .map(|(i, &note)| {
            let octave = if i == 3 { base_octave.saturating_add(1) } else { base_octave };
            Pitch::new(note, octave)
        })
        .collect()
}
