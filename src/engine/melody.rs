// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note-follows-note suggestions.
//!
//! One draw splits between three strategies: walking a genre melodic
//! pattern, leaping to a scale degree, or stepping to a neighbouring degree.
//! A strategy that cannot apply (e.g. the last note is outside the scale)
//! falls back to a strong degree at the base octave.

use super::random::RandomSource;
use super::Suggestion;
use crate::config::EngineConfig;
use crate::music::{Note, Pitch, Scale};
use crate::theory::GenreTheory;

/// Root, third and fifth as 0-based scale degrees
pub(crate) const STRONG_DEGREES: [usize; 3] = [0, 2, 4];

const ALL_DEGREES: [usize; 7] = [0, 1, 2, 3, 4, 5, 6];

/// Suggest a single note to follow `last` in the detected `key`
pub(crate) fn suggest_note<R: RandomSource>(
    last: Pitch,
    key: Note,
    theory: &GenreTheory,
    base_octave: i32,
    config: &EngineConfig,
    rng: &mut R,
) -> Suggestion {
    let scale = Scale::new(key, theory.primary_scale());
    let last_degree = scale.degree_of(last.note);

    let roll = rng.next_f64();
    let picked = if roll < config.melodic_pattern_probability {
        pattern_walk(last_degree, &scale, theory, base_octave, rng)
    } else if roll < config.melodic_pattern_probability + config.scale_degree_probability {
        degree_leap(last.octave, last_degree, &scale, config, rng)
    } else {
        stepwise(last.octave, last_degree, &scale, rng)
    };

    let pitch = match picked {
        Some(pitch) => pitch,
        None => {
            tracing::debug!(%last, "melodic strategy not applicable, using strong degree");
            strong_degree(&scale, base_octave, rng)
        }
    };
    tracing::debug!(%last, suggestion = %pitch, roll, "suggesting note");
    Suggestion::from_pitch(pitch)
}

/// Apply one step of a random melodic pattern to the last degree.
/// Steps wider than an octave move the result an octave up or down.
fn pattern_walk<R: RandomSource>(
    last_degree: Option<usize>,
    scale: &Scale,
    theory: &GenreTheory,
    base_octave: i32,
    rng: &mut R,
) -> Option<Pitch> {
    let pattern = rng.choose(&theory.melodic_patterns)?;
    let degree = last_degree?;
    let step = *rng.choose(pattern)?;

    let len = scale.len() as i32;
    let next = (degree as i32 + step).rem_euclid(len) as usize;
    let octave = match step {
        s if s > 6 => base_octave.saturating_add(1),
        s if s < -6 => base_octave.saturating_sub(1),
        _ => base_octave,
    };
    Some(Pitch::new(scale.note_at(next)?, octave))
}

/// Leap to a degree, usually a strong one, staying near the last octave
fn degree_leap<R: RandomSource>(
    last_octave: i32,
    last_degree: Option<usize>,
    scale: &Scale,
    config: &EngineConfig,
    rng: &mut R,
) -> Option<Pitch> {
    let degrees: &[usize] = if rng.chance(config.strong_degree_probability) {
        &STRONG_DEGREES
    } else {
        &ALL_DEGREES
    };
    let degree = *rng.choose(degrees)?;
    // Degrees 5 and 6 do not exist in pentatonic scales
    let note = scale.note_at(degree)?;

    let jump = last_degree.map_or(0, |last| degree as i32 - last as i32);
    let octave = match jump {
        j if j > 3 => last_octave.saturating_add(1),
        j if j < -3 => last_octave.saturating_sub(1),
        _ => last_octave,
    };
    Some(Pitch::new(note, octave))
}

/// Move to an adjacent degree without wrapping past either end of the scale
fn stepwise<R: RandomSource>(
    last_octave: i32,
    last_degree: Option<usize>,
    scale: &Scale,
    rng: &mut R,
) -> Option<Pitch> {
    let degree = last_degree?;
    let neighbours: Vec<usize> = [degree.checked_sub(1), Some(degree + 1)]
        .into_iter()
        .flatten()
        .filter(|&d| d < scale.len())
        .collect();
    let next = *rng.choose(&neighbours)?;
    Some(Pitch::new(scale.note_at(next)?, last_octave))
}

/// Root, third or fifth of `scale` at `octave`
pub(crate) fn strong_degree<R: RandomSource>(scale: &Scale, octave: i32, rng: &mut R) -> Pitch {
    let degree = rng.choose(&STRONG_DEGREES).copied().unwrap_or(0);
    let note = scale.note_at(degree).unwrap_or(scale.root());
    Pitch::new(note, octave)
}
