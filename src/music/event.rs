// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Committed musical events and grid quantization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::pitch::Pitch;
use super::ParseError;

/// Text token for a rest
pub const REST: &str = "REST";

/// One step of the performer's timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRepr", into = "EventRepr")]
pub enum MusicalEvent {
    /// A single pitch
    Note(Pitch),
    /// Simultaneous pitches
    Chord(Vec<Pitch>),
    /// Silence for one step
    Rest,
}

/// Whether an event sounds as a chord, a single note or nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventShape {
    Note,
    Chord,
    Rest,
}

impl MusicalEvent {
    /// Sounding pitches of this event (empty for a rest)
    pub fn pitches(&self) -> &[Pitch] {
        match self {
            MusicalEvent::Note(pitch) => std::slice::from_ref(pitch),
            MusicalEvent::Chord(pitches) => pitches,
            MusicalEvent::Rest => &[],
        }
    }

    /// Shape by member count: one-member chords count as notes,
    /// empty chords as rests.
    pub fn shape(&self) -> EventShape {
        match self.pitches().len() {
            0 => EventShape::Rest,
            1 => EventShape::Note,
            _ => EventShape::Chord,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.shape() == EventShape::Rest
    }

    /// Build an event from a pitch list, choosing note vs chord by length
    pub fn from_pitches(mut pitches: Vec<Pitch>) -> Self {
        match pitches.len() {
            0 => MusicalEvent::Rest,
            1 => MusicalEvent::Note(pitches.remove(0)),
            _ => MusicalEvent::Chord(pitches),
        }
    }
}

/// All sounding pitches of a history in order, rests dropped and chords expanded
pub fn flatten(events: &[MusicalEvent]) -> impl Iterator<Item = Pitch> + '_ {
    events.iter().flat_map(|e| e.pitches().iter().copied())
}

impl fmt::Display for MusicalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MusicalEvent::Note(pitch) => write!(f, "{}", pitch),
            MusicalEvent::Chord(pitches) => {
                let names: Vec<String> = pitches.iter().map(|p| p.to_string()).collect();
                write!(f, "{}", names.join("+"))
            }
            MusicalEvent::Rest => f.write_str(REST),
        }
    }
}

impl FromStr for MusicalEvent {
    type Err = ParseError;

    /// Parses `C4`, `C4+E4+G4` or `REST`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.eq_ignore_ascii_case(REST) {
            return Ok(MusicalEvent::Rest);
        }
        if text.contains('+') {
            let pitches = text
                .split('+')
                .map(str::parse)
                .collect::<Result<Vec<Pitch>, _>>()?;
            return Ok(MusicalEvent::Chord(pitches));
        }
        Ok(MusicalEvent::Note(text.parse()?))
    }
}

/// Serialized form: a pitch or `REST` as a string, a chord as a list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum EventRepr {
    Single(String),
    Group(Vec<String>),
}

impl TryFrom<EventRepr> for MusicalEvent {
    type Error = ParseError;

    fn try_from(repr: EventRepr) -> Result<Self, Self::Error> {
        match repr {
            EventRepr::Single(text) => text.parse(),
            EventRepr::Group(names) => {
                if names.is_empty() {
                    return Err(ParseError::EmptyChord);
                }
                let pitches = names
                    .iter()
                    .map(|n| n.parse())
                    .collect::<Result<Vec<Pitch>, _>>()?;
                Ok(MusicalEvent::Chord(pitches))
            }
        }
    }
}

impl From<MusicalEvent> for EventRepr {
    fn from(event: MusicalEvent) -> Self {
        match event {
            MusicalEvent::Chord(pitches) => {
                EventRepr::Group(pitches.iter().map(|p| p.to_string()).collect())
            }
            other => EventRepr::Single(other.to_string()),
        }
    }
}

/// Grid subdivision assigned to every event's duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantization {
    #[serde(rename = "1/16")]
    Sixteenth,
    #[serde(rename = "1/8")]
    Eighth,
    #[serde(rename = "1/4")]
    Quarter,
    #[serde(rename = "1/1")]
    Whole,
}

impl Quantization {
    pub const ALL: [Quantization; 4] = [
        Quantization::Sixteenth,
        Quantization::Eighth,
        Quantization::Quarter,
        Quantization::Whole,
    ];

    /// Note division: 1 = whole, 4 = quarter, ...
    pub fn division(self) -> u32 {
        match self {
            Quantization::Sixteenth => 16,
            Quantization::Eighth => 8,
            Quantization::Quarter => 4,
            Quantization::Whole => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quantization::Sixteenth => "1/16",
            Quantization::Eighth => "1/8",
            Quantization::Quarter => "1/4",
            Quantization::Whole => "1/1",
        }
    }
}

impl fmt::Display for Quantization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quantization {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1/16" | "16" => Ok(Quantization::Sixteenth),
            "1/8" | "8" => Ok(Quantization::Eighth),
            "1/4" | "4" => Ok(Quantization::Quarter),
            "1/1" | "1" => Ok(Quantization::Whole),
            other => Err(ParseError::UnknownQuantization(other.to_string())),
        }
    }
}
