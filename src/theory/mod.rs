// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Per-genre theory tables.
//!
//! Every genre bundles candidate scales (index 0 is the primary scale),
//! a chord palette, common four-chord progressions, melodic interval
//! patterns, a tempo range, preferred quantizations and a small library
//! of example fragments. The tables are built once and never mutated.

pub mod fragments;
pub mod presets;

pub use fragments::Fragment;
pub use presets::{MelodyPreset, PresetLibrary};

use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::music::{ChordQuality, ChordType, Note, ParseError, Quantization, ScaleType};

/// Musical genres with their own theory tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Pop,
    Jazz,
    Classical,
    Rock,
    Electronic,
    Blues,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Pop,
        Genre::Jazz,
        Genre::Classical,
        Genre::Rock,
        Genre::Electronic,
        Genre::Blues,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::Jazz => "Jazz",
            Genre::Classical => "Classical",
            Genre::Rock => "Rock",
            Genre::Electronic => "Electronic",
            Genre::Blues => "Blues",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Genre {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownGenre(s.to_string()))
    }
}

/// Theory bundle for one genre
#[derive(Debug, Clone)]
pub struct GenreTheory {
    /// Candidate scales; the first is the primary scale
    pub scales: Vec<ScaleType>,
    /// Chord palette
    pub chords: Vec<ChordType>,
    /// Four-chord progressions as root note classes
    pub progressions: Vec<[Note; 4]>,
    /// Melodic patterns as signed steps
    pub melodic_patterns: Vec<Vec<i32>>,
    /// Typical tempo range in BPM
    pub tempo_range: RangeInclusive<u32>,
    /// Preferred grid subdivisions, most preferred first
    pub quantizations: Vec<Quantization>,
    /// Example fragments quoted by the engine
    pub fragments: Vec<Fragment>,
}

impl GenreTheory {
    /// The scale suggestions are built on
    pub fn primary_scale(&self) -> ScaleType {
        self.scales[0]
    }

    /// First palette chord of the given quality, else the first palette chord
    pub fn chord_of_quality(&self, quality: ChordQuality) -> ChordType {
        self.chords
            .iter()
            .copied()
            .find(|c| c.quality() == quality)
            .unwrap_or(self.chords[0])
    }
}

/// Frozen genre -> theory map
#[derive(Debug)]
pub struct TheoryDatabase {
    genres: HashMap<Genre, GenreTheory>,
}

static DATABASE: OnceLock<TheoryDatabase> = OnceLock::new();

impl TheoryDatabase {
    /// Process-wide tables, built on first use
    pub fn global() -> &'static TheoryDatabase {
        DATABASE.get_or_init(TheoryDatabase::build)
    }

    /// Theory for a genre. Every genre has an entry.
    pub fn genre(&self, genre: Genre) -> &GenreTheory {
        &self.genres[&genre]
    }

    fn build() -> Self {
        use ChordType::*;
        use Note::*;
        use ScaleType::*;

        let mut genres = HashMap::new();

        genres.insert(
            Genre::Pop,
            GenreTheory {
                scales: vec![ScaleType::Major, NaturalMinor, MajorPentatonic, MinorPentatonic],
                chords: vec![ChordType::Major, Minor, Dominant7, Major7, Minor7, Sus2, Sus4],
                progressions: vec![
                    [C, G, A, F], // I-V-vi-IV
                    [A, F, C, G], // vi-IV-I-V
                    [C, A, F, G], // I-vi-IV-V
                    [F, C, G, A], // IV-I-V-vi
                ],
                melodic_patterns: vec![vec![0, 2, 4], vec![0, -2, -4], vec![0, 7, 0], vec![0, 5, 7]],
                tempo_range: 80..=140,
                quantizations: vec![Quantization::Quarter, Quantization::Eighth],
                fragments: fragments::pop(),
            },
        );

        genres.insert(
            Genre::Jazz,
            GenreTheory {
                scales: vec![
                    ScaleType::Major,
                    NaturalMinor,
                    Dorian,
                    Mixolydian,
                    Phrygian,
                    Lydian,
                    Locrian,
                    Blues,
                ],
                chords: vec![
                    ChordType::Major,
                    Minor,
                    Diminished,
                    Augmented,
                    Dominant7,
                    Major7,
                    Minor7,
                ],
                progressions: vec![
                    [C, A, D, G], // I-vi-ii-V
                    [D, G, C, F], // ii-V-I-IV
                    [C, F, D, G], // I-IV-ii-V
                    [A, D, G, C], // vi-ii-V-I
                ],
                melodic_patterns: vec![
                    vec![0, 2, 4, 7],
                    vec![0, -2, -4, -7],
                    vec![0, 4, 7, 11],
                    vec![0, 3, 7, 10],
                ],
                tempo_range: 60..=200,
                quantizations: vec![Quantization::Eighth, Quantization::Sixteenth],
                fragments: fragments::jazz(),
            },
        );

        genres.insert(
            Genre::Classical,
            GenreTheory {
                scales: vec![ScaleType::Major, NaturalMinor, Dorian, Mixolydian, Phrygian, Lydian, Locrian],
                chords: vec![
                    ChordType::Major,
                    Minor,
                    Diminished,
                    Augmented,
                    Dominant7,
                    Major7,
                    Minor7,
                ],
                progressions: vec![
                    [C, F, G, C], // I-IV-V-I
                    [C, A, F, G], // I-vi-IV-V
                    [A, D, G, C], // vi-ii-V-I
                    [C, G, A, F], // I-V-vi-IV
                ],
                melodic_patterns: vec![
                    vec![0, 2, 4, 5],
                    vec![0, -2, -4, -5],
                    vec![0, 4, 7, 0],
                    vec![0, 5, 7, 0],
                ],
                tempo_range: 40..=180,
                quantizations: vec![Quantization::Quarter, Quantization::Eighth, Quantization::Whole],
                fragments: fragments::classical(),
            },
        );

        genres.insert(
            Genre::Rock,
            GenreTheory {
                scales: vec![ScaleType::Major, NaturalMinor, MajorPentatonic, MinorPentatonic, Blues],
                chords: vec![ChordType::Major, Minor, Power, Dominant7, Sus2, Sus4],
                progressions: vec![
                    [C, G, A, F],  // I-V-vi-IV
                    [A, F, C, G],  // vi-IV-I-V
                    [C, A, F, G],  // I-vi-IV-V
                    [E, B, Cs, A], // I-V-vi-IV in E
                ],
                melodic_patterns: vec![vec![0, 7, 0], vec![0, 5, 7], vec![0, -5, -7], vec![0, 12, 0]],
                tempo_range: 80..=160,
                quantizations: vec![Quantization::Quarter, Quantization::Eighth],
                fragments: fragments::rock(),
            },
        );

        genres.insert(
            Genre::Electronic,
            GenreTheory {
                scales: vec![
                    ScaleType::Major,
                    NaturalMinor,
                    MajorPentatonic,
                    MinorPentatonic,
                    Dorian,
                    Mixolydian,
                ],
                chords: vec![ChordType::Major, Minor, Dominant7, Major7, Minor7, Sus2, Sus4],
                progressions: vec![
                    [C, A, F, G], // I-vi-IV-V
                    [A, F, C, G], // vi-IV-I-V
                    [C, G, A, F], // I-V-vi-IV
                    [F, C, G, A], // IV-I-V-vi
                ],
                melodic_patterns: vec![vec![0, 4, 7], vec![0, 7, 12], vec![0, 5, 9], vec![0, -4, -7]],
                tempo_range: 120..=140,
                quantizations: vec![Quantization::Sixteenth, Quantization::Eighth],
                fragments: fragments::electronic(),
            },
        );

        genres.insert(
            Genre::Blues,
            GenreTheory {
                scales: vec![Blues, MinorPentatonic, NaturalMinor],
                chords: vec![ChordType::Major, Minor, Dominant7, Power],
                progressions: vec![
                    [C, F, G, C], // I-IV-V-I
                    [C, F, C, G], // I-IV-I-V
                    [C, G, F, C], // I-V-IV-I
                    [A, D, G, C], // vi-ii-V-I
                ],
                melodic_patterns: vec![
                    vec![0, 3, 5, 6, 7],
                    vec![0, -3, -5, -6, -7],
                    vec![0, 7, 0],
                    vec![0, 5, 6, 7],
                ],
                tempo_range: 60..=120,
                quantizations: vec![Quantization::Eighth, Quantization::Quarter],
                fragments: fragments::blues(),
            },
        );

        Self { genres }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_genre_has_tables() {
        let db = TheoryDatabase::global();
        for genre in Genre::ALL {
            let theory = db.genre(genre);
            assert!(!theory.scales.is_empty(), "{} has no scales", genre);
            assert!(!theory.chords.is_empty(), "{} has no chords", genre);
            assert!(!theory.progressions.is_empty());
            assert!(theory.melodic_patterns.iter().all(|p| !p.is_empty()));
            assert!(!theory.fragments.is_empty());
            assert!(theory.fragments.iter().all(|f| !f.events.is_empty()));
            assert!(theory.tempo_range.start() < theory.tempo_range.end());
            assert!(!theory.quantizations.is_empty());
        }
    }

    #[test]
    fn test_primary_scales() {
        let db = TheoryDatabase::global();
        assert_eq!(db.genre(Genre::Pop).primary_scale(), ScaleType::Major);
        assert_eq!(db.genre(Genre::Blues).primary_scale(), ScaleType::Blues);
    }

    #[test]
    fn test_chord_of_quality_falls_back_to_first() {
        let db = TheoryDatabase::global();
        let rock = db.genre(Genre::Rock);
        assert_eq!(rock.chord_of_quality(ChordQuality::Minor), ChordType::Minor);
        assert_eq!(rock.chord_of_quality(ChordQuality::Augmented), ChordType::Major);
    }

    #[test]
    fn test_genre_from_str() {
        assert_eq!("jazz".parse::<Genre>().unwrap(), Genre::Jazz);
        assert_eq!("Electronic".parse::<Genre>().unwrap(), Genre::Electronic);
        assert!("polka".parse::<Genre>().is_err());
    }
}
