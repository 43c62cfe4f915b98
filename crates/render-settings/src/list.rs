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

//! An ordered sequence of settings applied before a draw call.

use super::setting::{Setting, SettingKind};
use serde::{Deserialize, Serialize};

/// An ordered, append-only list of [`Setting`] values.
///
/// The list only records order. Whether a later setting of the same kind
/// replaces an earlier one is up to the renderer that consumes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingList {
    settings: Vec<Setting>,
}

impl SettingList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` settings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            settings: Vec::with_capacity(capacity),
        }
    }

    /// Appends a setting.
    pub fn push(&mut self, setting: Setting) {
        log::trace!("Pushing setting #{}: {setting}", self.settings.len());
        self.settings.push(setting);
    }

    /// Appends a setting and returns the list, for chained construction.
    pub fn with(mut self, setting: Setting) -> Self {
        self.push(setting);
        self
    }

    /// Returns the number of settings.
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Returns `true` if the list holds no settings.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Iterates over the settings in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Setting> {
        self.settings.iter()
    }

    /// Returns the settings as a slice.
    pub fn as_slice(&self) -> &[Setting] {
        &self.settings
    }

    /// Iterates over the kind of every setting, in insertion order.
    pub fn kinds(&self) -> impl Iterator<Item = SettingKind> + '_ {
        self.settings.iter().map(Setting::kind)
    }

    /// Returns the most recently pushed setting of the given kind.
    pub fn last_of(&self, kind: SettingKind) -> Option<&Setting> {
        self.settings.iter().rev().find(|setting| setting.kind() == kind)
    }
}

impl From<Vec<Setting>> for SettingList {
    fn from(settings: Vec<Setting>) -> Self {
        Self { settings }
    }
}

impl From<SettingList> for Vec<Setting> {
    fn from(list: SettingList) -> Self {
        list.settings
    }
}

impl FromIterator<Setting> for SettingList {
    fn from_iter<I: IntoIterator<Item = Setting>>(iter: I) -> Self {
        let mut list = SettingList::new();
        list.extend(iter);
        list
    }
}

impl Extend<Setting> for SettingList {
    fn extend<I: IntoIterator<Item = Setting>>(&mut self, iter: I) {
        for setting in iter {
            self.push(setting);
        }
    }
}

impl IntoIterator for SettingList {
    type Item = Setting;
    type IntoIter = std::vec::IntoIter<Setting>;

    fn into_iter(self) -> Self::IntoIter {
        self.settings.into_iter()
    }
}

impl<'a> IntoIterator for &'a SettingList {
    type Item = &'a Setting;
    type IntoIter = std::slice::Iter<'a, Setting>;

    fn into_iter(self) -> Self::IntoIter {
        self.settings.iter()
    }
}
