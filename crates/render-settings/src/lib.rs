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

//! # Render Settings
//!
//! Type-safe render-state settings for GL-style renderers.
//!
//! Each [`Setting`] describes one orthogonal piece of pipeline state: blending,
//! depth and stencil testing, the scissor box, the color mask, dithering,
//! polygon offset, multisample coverage or face culling. Every constant is a
//! closed enum backed by its exact GL code, so an invalid value cannot be
//! built through this API.
//!
//! The crate only produces values. A renderer receives them, usually as an
//! ordered [`SettingList`], and issues the matching native state changes
//! before drawing.
//!
//! ```
//! use render_settings::{color_mask, depth, depth_options, scissor, SettingList};
//!
//! let settings = SettingList::new()
//!     .with(depth(depth_options()))
//!     .with(scissor(0, 0, 800, 600))
//!     .with(color_mask(true, true, true, false));
//! assert_eq!(settings.len(), 3);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod enums;
pub mod error;
pub mod list;
pub mod options;
pub mod setting;

pub use enums::{BlendEquation, BlendFactor, CompareMode, FaceMode, GlConstant, ZMode};
pub use error::SettingsError;
pub use list::SettingList;
pub use options::{
    blend_options, depth_options, stencil_options, BlendOptions, DepthOptions, StencilOptions,
};
pub use setting::{
    blend, blend_separate, color_mask, cull_face, depth, dither, polygon_offset,
    sample_alpha_to_coverage, sample_coverage, scissor, stencil, stencil_separate, BlendColor,
    Setting, SettingKind,
};
