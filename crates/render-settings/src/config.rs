// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Loading setting lists from JSON documents.
//!
//! A document is an object with a `settings` array. Every entry is tagged by
//! its `kind` and carries the fields of the matching [`crate::Setting`] variant.
//! Option records may be partial; missing fields take their defaults.
//!
//! ```json
//! {
//!     "settings": [
//!         { "kind": "depth", "options": { "func": "less_or_equal" } },
//!         { "kind": "scissor", "x": 0, "y": 0, "width": 800, "height": 600 },
//!         { "kind": "cull_face", "face": "back" },
//!         { "kind": "dither" }
//!     ]
//! }
//! ```
//!
//! Only the shape is checked. Scalars outside their documented range are
//! loaded as-is.

use super::enums::BlendFactor;
use super::error::SettingsError;
use super::list::SettingList;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The on-disk representation of a settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsFile {
    /// The settings, in application order.
    #[serde(default)]
    pub settings: SettingList,
}

/// Parses a settings document from a JSON string.
pub fn load_from_str(json: &str) -> Result<SettingList, SettingsError> {
    let file: SettingsFile = serde_json::from_str(json)?;
    log::debug!("Parsed settings document with {} entries.", file.settings.len());
    report_blend_constraints(&file.settings);
    Ok(file.settings)
}

/// Reads and parses a settings document from disk.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<SettingList, SettingsError> {
    let path = path.as_ref();
    log::debug!("Loading settings document from '{}'.", path.display());
    let contents = fs::read_to_string(path)?;
    load_from_str(&contents)
}

/// Serializes a list into a pretty-printed settings document.
pub fn to_json_string(settings: &SettingList) -> Result<String, SettingsError> {
    let file = SettingsFile {
        settings: settings.clone(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// A blend factor combination that GL documents as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendConstraint {
    /// `SrcAlphaSaturate` is used as a destination factor.
    SaturateDestination,
    /// A constant color factor is paired with a constant alpha factor.
    MixedConstantColorAndAlpha,
}

/// Lists every documented blend restriction broken by `settings`, as
/// `(index, constraint)` pairs in list order. Nothing is rejected.
pub fn blend_constraint_violations(settings: &SettingList) -> Vec<(usize, BlendConstraint)> {
    let mut violations = Vec::new();
    for (index, setting) in settings.iter().enumerate() {
        let Some((first, second)) = setting.blend_functions() else {
            continue;
        };
        for options in std::iter::once(first).chain(second) {
            if options.destination == BlendFactor::SrcAlphaSaturate {
                violations.push((index, BlendConstraint::SaturateDestination));
            }
            if options.mixes_constant_color_and_alpha() {
                violations.push((index, BlendConstraint::MixedConstantColorAndAlpha));
            }
        }
    }
    violations
}

fn report_blend_constraints(settings: &SettingList) {
    for (index, constraint) in blend_constraint_violations(settings) {
        let setting = &settings.as_slice()[index];
        match constraint {
            BlendConstraint::SaturateDestination => log::warn!(
                "Setting #{index} ({setting}) uses SrcAlphaSaturate as a destination factor."
            ),
            BlendConstraint::MixedConstantColorAndAlpha => log::warn!(
                "Setting #{index} ({setting}) mixes constant color and constant alpha factors."
            ),
        }
    }
}
