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

//! Option records bundling the fields of blend, depth and stencil settings.
//!
//! Each record has a documented default, available as an associated `DEFAULT`
//! constant and through [`Default`]. Fields are public so that a default can
//! be overridden field by field with struct-update syntax:
//!
//! ```
//! use render_settings::{CompareMode, DepthOptions};
//!
//! let options = DepthOptions {
//!     func: CompareMode::LessOrEqual,
//!     ..DepthOptions::DEFAULT
//! };
//! assert!(options.mask);
//! ```

use super::enums::{BlendEquation, BlendFactor, CompareMode, ZMode};
use serde::{Deserialize, Serialize};

/// Describes the blend function and equation used by a blend setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendOptions {
    /// The operator combining source and destination.
    pub equation: BlendEquation,
    /// The factor applied to the incoming fragment color.
    pub source: BlendFactor,
    /// The factor applied to the color already in the framebuffer.
    pub destination: BlendFactor,
}

impl BlendOptions {
    /// `{ equation: Add, source: One, destination: Zero }`, which leaves the
    /// incoming color untouched.
    pub const DEFAULT: Self = Self {
        equation: BlendEquation::Add,
        source: BlendFactor::One,
        destination: BlendFactor::Zero,
    };

    /// Creates blend options from an equation and both factors.
    pub const fn new(
        equation: BlendEquation,
        source: BlendFactor,
        destination: BlendFactor,
    ) -> Self {
        Self {
            equation,
            source,
            destination,
        }
    }

    /// Returns `true` if a constant color factor is paired with a constant
    /// alpha factor across source and destination.
    ///
    /// GL implementations may reject that pairing. It is reported, not
    /// prevented.
    pub const fn mixes_constant_color_and_alpha(&self) -> bool {
        (self.source.uses_constant_color() && self.destination.uses_constant_alpha())
            || (self.source.uses_constant_alpha() && self.destination.uses_constant_color())
    }
}

impl Default for BlendOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Describes the depth test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepthOptions {
    /// The comparison used against the stored depth.
    pub func: CompareMode,
    /// If `true`, passing fragments write their depth.
    pub mask: bool,
    /// Near end of the depth range mapping.
    pub near: f32,
    /// Far end of the depth range mapping.
    pub far: f32,
}

impl DepthOptions {
    /// `{ func: Less, mask: true, near: 0.0, far: 1.0 }`.
    pub const DEFAULT: Self = Self {
        func: CompareMode::Less,
        mask: true,
        near: 0.0,
        far: 1.0,
    };
}

impl Default for DepthOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Describes the stencil test and buffer updates for one face (or both).
///
/// Masks are not clamped to the stencil buffer width; the renderer does that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StencilOptions {
    /// The comparison used against the stored stencil value.
    pub func: CompareMode,
    /// The reference value for the comparison and for `ZMode::Replace`.
    #[serde(alias = "ref")]
    pub reference: i32,
    /// Mask ANDed with both the reference and the stored value before comparing.
    pub value_mask: u32,
    /// Update applied when the stencil test fails.
    pub fail: ZMode,
    /// Update applied when the stencil test passes and the depth test fails.
    pub zfail: ZMode,
    /// Update applied when both tests pass.
    pub zpass: ZMode,
    /// Mask controlling which stencil bits are written.
    pub write_mask: u32,
}

impl StencilOptions {
    /// Always passes, reference 0, every mask bit set, every update `Keep`.
    pub const DEFAULT: Self = Self {
        func: CompareMode::Always,
        reference: 0,
        value_mask: u32::MAX,
        fail: ZMode::Keep,
        zfail: ZMode::Keep,
        zpass: ZMode::Keep,
        write_mask: u32::MAX,
    };
}

impl Default for StencilOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Returns the default blend options.
pub const fn blend_options() -> BlendOptions {
    BlendOptions::DEFAULT
}

/// Returns the default depth options.
pub const fn depth_options() -> DepthOptions {
    DepthOptions::DEFAULT
}

/// Returns the default stencil options.
pub const fn stencil_options() -> StencilOptions {
    StencilOptions::DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_blend_options() {
        let options = BlendOptions::default();
        assert_eq!(options.equation, BlendEquation::Add);
        assert_eq!(options.source, BlendFactor::One);
        assert_eq!(options.destination, BlendFactor::Zero);
        assert_eq!(blend_options(), options);
    }

    #[test]
    fn test_default_depth_options() {
        let options = depth_options();
        assert_eq!(options.func, CompareMode::Less);
        assert!(options.mask);
        assert_eq!(options.near, 0.0);
        assert_eq!(options.far, 1.0);
        assert_eq!(DepthOptions::default(), options);
    }

    #[test]
    fn test_default_stencil_options() {
        let options = stencil_options();
        assert_eq!(options.func, CompareMode::Always);
        assert_eq!(options.reference, 0);
        assert_eq!(options.value_mask, 0xFFFF_FFFF);
        assert_eq!(options.fail, ZMode::Keep);
        assert_eq!(options.zfail, ZMode::Keep);
        assert_eq!(options.zpass, ZMode::Keep);
        assert_eq!(options.write_mask, 0xFFFF_FFFF);
    }

    #[test]
    fn field_override_keeps_other_defaults() {
        let options = StencilOptions {
            zpass: ZMode::Replace,
            reference: 1,
            ..StencilOptions::DEFAULT
        };
        assert_eq!(options.zpass, ZMode::Replace);
        assert_eq!(options.reference, 1);
        assert_eq!(options.func, CompareMode::Always);
        assert_eq!(options.write_mask, u32::MAX);
    }

    #[test]
    fn constant_color_alpha_mix_is_reported() {
        let mixed = BlendOptions::new(
            BlendEquation::Add,
            BlendFactor::ConstantColor,
            BlendFactor::OneMinusConstantAlpha,
        );
        assert!(mixed.mixes_constant_color_and_alpha());

        let reversed = BlendOptions::new(
            BlendEquation::Add,
            BlendFactor::ConstantAlpha,
            BlendFactor::ConstantColor,
        );
        assert!(reversed.mixes_constant_color_and_alpha());

        let same_kind = BlendOptions::new(
            BlendEquation::Add,
            BlendFactor::ConstantColor,
            BlendFactor::OneMinusConstantColor,
        );
        assert!(!same_kind.mixes_constant_color_and_alpha());
        assert!(!BlendOptions::DEFAULT.mixes_constant_color_and_alpha());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let options: StencilOptions =
            serde_json::from_str(r#"{ "func": "equal", "ref": 3 }"#).unwrap();
        assert_eq!(options.func, CompareMode::Equal);
        assert_eq!(options.reference, 3);
        assert_eq!(options.value_mask, u32::MAX);
        assert_eq!(options.zpass, ZMode::Keep);

        let options: BlendOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, BlendOptions::DEFAULT);
    }
}
