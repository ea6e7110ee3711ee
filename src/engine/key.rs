// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tonal-center guess from recent pitches.
//!
//! A frequency count over the last few sounding pitches, not harmonic
//! analysis. Cheap enough to rerun on every request.

use crate::music::{flatten, MusicalEvent, Note, Pitch};

/// Pitches considered when no window is configured
pub const DEFAULT_KEY_WINDOW: usize = 8;

/// Most frequent note class among the last `window` pitches.
///
/// Rests are skipped and chords contribute every member. Ties go to the
/// class seen first. An empty history yields `C`.
pub fn detect_key(events: &[MusicalEvent], window: usize) -> Note {
    let pitches: Vec<Pitch> = flatten(events).collect();
    let recent = &pitches[pitches.len().saturating_sub(window)..];

    let mut counts: Vec<(Note, usize)> = Vec::new();
    for pitch in recent {
        match counts.iter_mut().find(|(note, _)| *note == pitch.note) {
            Some((_, count)) => *count += 1,
            None => counts.push((pitch.note, 1)),
        }
    }

    let mut best: Option<(Note, usize)> = None;
    for &(note, count) in &counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((note, count));
        }
    }

    let key = best.map(|(note, _)| note).unwrap_or(Note::C);
    tracing::trace!(%key, considered = recent.len(), "detected key");
    key
}
