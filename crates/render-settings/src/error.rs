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

//! Defines the error type for code lookups and settings documents.
//!
//! Building a [`crate::Setting`] never fails. Errors only arise when a raw
//! GL code is mapped back to a typed constant, or when a settings document
//! is read or parsed.

use std::fmt;

/// An error raised while converting raw codes or loading settings documents.
#[derive(Debug)]
pub enum SettingsError {
    /// A raw code does not belong to the requested constant family.
    UnknownCode {
        /// The name of the constant family that was queried.
        family: &'static str,
        /// The code that did not match any member.
        code: u32,
    },
    /// The settings document could not be read.
    Io(std::io::Error),
    /// The settings document is not valid JSON or does not describe settings.
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::UnknownCode { family, code } => {
                write!(f, "Unknown {family} code: 0x{code:04X}")
            }
            SettingsError::Io(err) => write!(f, "Failed to read settings document: {err}"),
            SettingsError::Parse(err) => write!(f, "Invalid settings document: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
            SettingsError::UnknownCode { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}
