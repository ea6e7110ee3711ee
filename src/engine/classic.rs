// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Quoting example fragments.
//!
//! Looks up the event at the current history position in each of the
//! genre's fragments and re-pitches one of matching shape into the key the
//! performer is playing in.

use super::key::detect_key;
use super::random::RandomSource;
use super::Suggestion;
use crate::music::{transpose_chord, EventShape, MusicalEvent};
use crate::theory::GenreTheory;

/// Quote a fragment event of the given `shape`, transposed into the history's key.
///
/// `None` when no fragment has a matching event at this position.
pub(crate) fn quote_example<R: RandomSource>(
    history: &[MusicalEvent],
    theory: &GenreTheory,
    shape: EventShape,
    key_window: usize,
    rng: &mut R,
) -> Option<Suggestion> {
    let position = history.len();
    let candidates: Vec<(&str, &MusicalEvent)> = theory
        .fragments
        .iter()
        .filter_map(|fragment| fragment.event_at(position).map(|e| (fragment.name, e)))
        .filter(|(_, event)| event.shape() == shape)
        .collect();

    let &(name, event) = rng.choose(&candidates)?;

    let current_key = detect_key(history, key_window);
    let example_key = detect_key(std::slice::from_ref(event), key_window);
    let shift = example_key.interval_to(current_key);

    tracing::debug!(fragment = name, position, %example_key, %current_key, shift, "quoting example");
    Some(Suggestion::from_pitches(transpose_chord(event.pitches(), shift)))
}
