// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Melody presets: ready-made histories to start a session from.
//!
//! The built-in library ships as an embedded YAML document; more presets can
//! be loaded from files with the same layout.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Genre;
use crate::music::MusicalEvent;

const BUILTIN_PRESETS: &str = include_str!("presets.yaml");

/// A named starting sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MelodyPreset {
    pub name: String,
    /// Genre this preset is a classic of, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
    pub bpm: u32,
    pub sequence: Vec<MusicalEvent>,
}

/// On-disk layout of a preset file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetFile {
    #[serde(default)]
    pub presets: Vec<MelodyPreset>,
}

/// Collection of presets, searchable by name and genre
#[derive(Debug, Clone, Default)]
pub struct PresetLibrary {
    presets: Vec<MelodyPreset>,
}

impl PresetLibrary {
    /// Library containing the presets shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_PRESETS).context("Built-in preset table is malformed")
    }

    /// Parse a preset library from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: PresetFile =
            serde_yaml::from_str(yaml).context("Failed to parse preset YAML")?;
        Ok(Self {
            presets: file.presets,
        })
    }

    /// Load a preset library from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read preset file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Add presets from another library. Later entries win on name clashes.
    pub fn extend(&mut self, other: PresetLibrary) {
        for preset in other.presets {
            if let Some(existing) = self
                .presets
                .iter_mut()
                .find(|p| p.name.eq_ignore_ascii_case(&preset.name))
            {
                tracing::warn!(name = %preset.name, "Replacing preset with the same name");
                *existing = preset;
            } else {
                self.presets.push(preset);
            }
        }
    }

    /// Find a preset by name (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&MelodyPreset> {
        self.presets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Presets tagged with the given genre
    pub fn by_genre(&self, genre: Genre) -> Vec<&MelodyPreset> {
        self.presets
            .iter()
            .filter(|p| p.genre == Some(genre))
            .collect()
    }

    pub fn all(&self) -> &[MelodyPreset] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
