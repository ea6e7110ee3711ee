// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and scales.
//!
//! Provides the twelve note classes, the scale types used by the genre
//! tables, and scale-degree lookups on a rooted scale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Signed distance in semitones
pub type Semitones = i32;

/// One of the twelve pitch classes, spelled with sharps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Note {
    C,
    Cs,
    D,
    Ds,
    E,
    F,
    Fs,
    G,
    Gs,
    A,
    As,
    B,
}

const CHROMATIC: [Note; 12] = [
    Note::C,
    Note::Cs,
    Note::D,
    Note::Ds,
    Note::E,
    Note::F,
    Note::Fs,
    Note::G,
    Note::Gs,
    Note::A,
    Note::As,
    Note::B,
];

const SHARP_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

impl Note {
    /// 0 for C through 11 for B
    pub fn pitch_class(self) -> u8 {
        self as u8
    }

    /// Any integer, reduced modulo 12
    pub fn from_pitch_class(pc: Semitones) -> Self {
        CHROMATIC[pc.rem_euclid(12) as usize]
    }

    /// `C`, `F#`, `Bb` and so on.
    ///
    /// The letter is case-sensitive so that `b` always means flat.
    pub fn from_name(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let natural: Semitones = match chars.next()? {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };
        let accidental = match chars.next() {
            None => 0,
            Some('#') => 1,
            Some('b') => -1,
            Some(_) => return None,
        };
        match chars.next() {
            None => Some(Note::from_pitch_class(natural + accidental)),
            Some(_) => None,
        }
    }

    pub fn transpose(self, semitones: Semitones) -> Self {
        Note::from_pitch_class(self.pitch_class() as Semitones + semitones)
    }

    /// Upward distance to `other`, in `0..12`
    pub fn interval_to(self, other: Note) -> Semitones {
        (other.pitch_class() as Semitones - self.pitch_class() as Semitones).rem_euclid(12)
    }

    pub fn name(self) -> &'static str {
        SHARP_NAMES[self.pitch_class() as usize]
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::from_name(s.trim()).ok_or_else(|| ParseError::InvalidNote(s.to_string()))
    }
}

/// Scales available to the genre tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Major,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    NaturalMinor,
    Locrian,
    MajorPentatonic,
    MinorPentatonic,
    Blues,
}

impl ScaleType {
    pub const ALL: [ScaleType; 10] = [
        ScaleType::Major,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::NaturalMinor,
        ScaleType::Locrian,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
    ];

    /// Offsets above the root, ascending, starting at 0
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            ScaleType::MajorPentatonic => &[0, 2, 4, 7, 9],
            ScaleType::MinorPentatonic => &[0, 3, 5, 7, 10],
            ScaleType::Blues => &[0, 3, 5, 6, 7, 10],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Dorian => "dorian",
            ScaleType::Phrygian => "phrygian",
            ScaleType::Lydian => "lydian",
            ScaleType::Mixolydian => "mixolydian",
            ScaleType::NaturalMinor => "natural minor",
            ScaleType::Locrian => "locrian",
            ScaleType::MajorPentatonic => "major pentatonic",
            ScaleType::MinorPentatonic => "minor pentatonic",
            ScaleType::Blues => "blues",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pitch classes at each offset above `root`. Octave is not tracked.
pub fn notes_from_intervals(root: Note, intervals: &[u8]) -> Vec<Note> {
    intervals
        .iter()
        .map(|&offset| root.transpose(Semitones::from(offset)))
        .collect()
}

pub fn scale_notes(root: Note, scale_type: ScaleType) -> Vec<Note> {
    notes_from_intervals(root, scale_type.intervals())
}

/// A scale type rooted on a note, indexed by degree (0 = root)
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    kind: ScaleType,
    degrees: Vec<Note>,
}

impl Scale {
    pub fn new(root: Note, kind: ScaleType) -> Self {
        Self {
            kind,
            degrees: scale_notes(root, kind),
        }
    }

    pub fn root(&self) -> Note {
        self.degrees[0]
    }

    pub fn scale_type(&self) -> ScaleType {
        self.kind
    }

    pub fn notes(&self) -> &[Note] {
        &self.degrees
    }

    /// Number of degrees (5 to 7 for the built-in types)
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    pub fn contains(&self, note: Note) -> bool {
        self.degree_of(note).is_some()
    }

    pub fn degree_of(&self, note: Note) -> Option<usize> {
        self.degrees.iter().position(|&n| n == note)
    }

    pub fn note_at(&self, degree: usize) -> Option<Note> {
        self.degrees.get(degree).copied()
    }
}
