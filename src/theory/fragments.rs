// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Short example fragments in the style of well-known pieces.
//!
//! The engine occasionally quotes the event at the current position of one
//! of these, re-pitched into the performer's key.

use crate::music::{MusicalEvent, Note, Pitch};
use Note::*;

/// A named, ordered sequence of events
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub name: &'static str,
    pub events: Vec<MusicalEvent>,
}

impl Fragment {
    /// Event at `position`, wrapping around the fragment length
    pub fn event_at(&self, position: usize) -> Option<&MusicalEvent> {
        if self.events.is_empty() {
            return None;
        }
        self.events.get(position % self.events.len())
    }
}

fn melody(name: &'static str, notes: &[(Note, i32)]) -> Fragment {
    Fragment {
        name,
        events: notes
            .iter()
            .map(|&(note, octave)| MusicalEvent::Note(Pitch::new(note, octave)))
            .collect(),
    }
}

pub(super) fn pop() -> Vec<Fragment> {
    vec![
        melody("Let It Be", &[(C, 4), (G, 4), (A, 4), (F, 4), (C, 4), (G, 4), (F, 4), (C, 4)]),
        melody("Wonderwall", &[(C, 4), (G, 4), (A, 4), (F, 4), (C, 4), (G, 4), (A, 4), (F, 4)]),
        melody("Someone Like You", &[(C, 4), (G, 4), (A, 4), (F, 4), (C, 4), (G, 4), (F, 4), (C, 4)]),
        melody("All of Me", &[(C, 4), (G, 4), (A, 4), (F, 4), (C, 4), (G, 4), (A, 4), (F, 4)]),
        melody("Perfect", &[(C, 4), (G, 4), (A, 4), (F, 4), (C, 4), (G, 4), (F, 4), (C, 4)]),
    ]
}

pub(super) fn jazz() -> Vec<Fragment> {
    vec![
        melody("Autumn Leaves", &[(A, 4), (D, 4), (G, 4), (C, 4), (F, 4), (B, 4), (E, 4), (A, 4)]),
        melody("Take Five", &[(Ds, 4), (As, 4), (Gs, 4), (Cs, 4), (Ds, 4), (As, 4), (Gs, 4), (Cs, 4)]),
        melody("So What", &[(D, 4), (D, 4), (Ds, 4), (Ds, 4), (D, 4), (D, 4), (Ds, 4), (Ds, 4)]),
        melody("Blue Bossa", &[(C, 4), (F, 4), (D, 4), (G, 4), (C, 4), (F, 4), (D, 4), (G, 4)]),
        melody("Giant Steps", &[(B, 4), (D, 4), (G, 4), (B, 4), (D, 4), (G, 4), (B, 4), (D, 4)]),
    ]
}

pub(super) fn classical() -> Vec<Fragment> {
    vec![
        melody("Fur Elise", &[(E, 4), (Ds, 4), (E, 4), (Ds, 4), (E, 4), (B, 3), (D, 4), (C, 4)]),
        melody("Moonlight Sonata", &[(Cs, 4), (Gs, 3), (Cs, 4), (Gs, 3), (Cs, 4), (Gs, 3), (Cs, 4), (Gs, 3)]),
        melody("Prelude in C", &[(C, 4), (E, 4), (G, 4), (C, 5), (E, 5), (G, 4), (C, 5), (E, 5)]),
        melody("Clair de Lune", &[(Ds, 4), (Fs, 4), (A, 4), (Ds, 5), (Fs, 5), (A, 4), (Ds, 5), (Fs, 5)]),
        melody("Canon in D", &[(D, 4), (A, 3), (B, 3), (Fs, 3), (G, 3), (D, 3), (G, 3), (A, 3)]),
    ]
}

pub(super) fn rock() -> Vec<Fragment> {
    vec![
        melody("Stairway to Heaven", &[(A, 4), (A, 4), (G, 4), (G, 4), (F, 4), (F, 4), (C, 4), (C, 4)]),
        melody("Sweet Child O' Mine", &[(D, 4), (A, 4), (B, 4), (Fs, 4), (G, 4), (D, 4), (A, 4), (B, 4)]),
        melody("Nothing Else Matters", &[(E, 4), (E, 4), (D, 4), (D, 4), (C, 4), (C, 4), (G, 4), (G, 4)]),
        melody("Hotel California", &[(A, 4), (E, 4), (G, 4), (D, 4), (F, 4), (C, 4), (E, 4), (A, 4)]),
        melody("Bohemian Rhapsody", &[(As, 4), (F, 4), (G, 4), (Ds, 4), (F, 4), (As, 4), (F, 4), (G, 4)]),
    ]
}

pub(super) fn electronic() -> Vec<Fragment> {
    vec![
        melody("Sandstorm", &[(C, 4), (C, 4), (G, 4), (G, 4), (A, 4), (A, 4), (F, 4), (F, 4)]),
        melody("Levels", &[(F, 4), (F, 4), (C, 4), (C, 4), (G, 4), (G, 4), (A, 4), (A, 4)]),
        melody("Animals", &[(C, 4), (C, 4), (G, 4), (G, 4), (A, 4), (A, 4), (F, 4), (F, 4)]),
        melody("Titanium", &[(C, 4), (G, 4), (A, 4), (F, 4), (C, 4), (G, 4), (A, 4), (F, 4)]),
        melody("Wake Me Up", &[(C, 4), (G, 4), (A, 4), (F, 4), (C, 4), (G, 4), (A, 4), (F, 4)]),
    ]
}

pub(super) fn blues() -> Vec<Fragment> {
    vec![
        melody("Hoochie Coochie Man", &[(C, 4), (F, 4), (C, 4), (G, 4), (F, 4), (C, 4), (G, 4), (C, 4)]),
        melody("Sweet Home Chicago", &[(C, 4), (F, 4), (C, 4), (G, 4), (F, 4), (C, 4), (G, 4), (C, 4)]),
        melody("The Thrill is Gone", &[(A, 4), (D, 4), (G, 4), (C, 4), (F, 4), (B, 4), (E, 4), (A, 4)]),
        melody("Red House", &[(A, 4), (A, 4), (D, 4), (D, 4), (A, 4), (A, 4), (E, 4), (E, 4)]),
        melody("Born Under a Bad Sign", &[(C, 4), (F, 4), (C, 4), (G, 4), (F, 4), (C, 4), (G, 4), (C, 4)]),
    ]
}
