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

//! Closed constant families used by render settings.
//!
//! Every member is backed by the exact integer code defined by the
//! OpenGL ES / WebGL standard. The codes cross straight into the native API,
//! so they must never be reassigned.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that maps to a single native GL enum constant.
pub trait GlConstant: Copy {
    /// Human readable name of the constant family, used in error messages.
    const FAMILY: &'static str;

    /// Returns the raw GL code of this value.
    fn code(self) -> u32;
}

/// Declares a `#[repr(u32)]` enum whose discriminants are GL codes, together
/// with its `GlConstant`, `TryFrom<u32>` and `Display` implementations.
macro_rules! gl_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $family:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:expr,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        #[repr(u32)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $code,
            )+
        }

        impl $name {
            /// Every member of the family, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl GlConstant for $name {
            const FAMILY: &'static str = $family;

            #[inline]
            fn code(self) -> u32 {
                self as u32
            }
        }

        impl TryFrom<u32> for $name {
            type Error = SettingsError;

            fn try_from(code: u32) -> Result<Self, Self::Error> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|member| member.code() == code)
                    .ok_or(SettingsError::UnknownCode {
                        family: $family,
                        code,
                    })
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value.code()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:?}(0x{:04X})", self, self.code())
            }
        }
    };
}

gl_enum! {
    /// A factor in a blend equation, determining how much a source or
    /// destination color contributes.
    ///
    /// `SrcAlphaSaturate` is only meaningful as a source factor. Constant
    /// color and constant alpha factors should not be mixed between source
    /// and destination. Neither restriction is enforced here; see
    /// [`BlendFactor::is_valid_destination`] and
    /// [`crate::BlendOptions::mixes_constant_color_and_alpha`].
    pub enum BlendFactor: "blend factor" {
        /// `(0, 0, 0, 0)`
        Zero = 0,
        /// `(1, 1, 1, 1)`
        One = 1,
        /// The source color.
        SrcColor = 0x0300,
        /// One minus the source color.
        OneMinusSrcColor = 0x0301,
        /// The source alpha.
        SrcAlpha = 0x0302,
        /// One minus the source alpha.
        OneMinusSrcAlpha = 0x0303,
        /// The destination alpha.
        DstAlpha = 0x0304,
        /// One minus the destination alpha.
        OneMinusDstAlpha = 0x0305,
        /// The destination color.
        DstColor = 0x0306,
        /// One minus the destination color.
        OneMinusDstColor = 0x0307,
        /// `min(src.a, 1 - dst.a)` on RGB, `1` on alpha. Source only.
        SrcAlphaSaturate = 0x0308,
        /// The constant blend color.
        ConstantColor = 0x8001,
        /// One minus the constant blend color.
        OneMinusConstantColor = 0x8002,
        /// The constant blend alpha.
        ConstantAlpha = 0x8003,
        /// One minus the constant blend alpha.
        OneMinusConstantAlpha = 0x8004,
    }
}

impl BlendFactor {
    /// Returns `false` for factors that are only legal on the source side.
    pub const fn is_valid_destination(self) -> bool {
        !matches!(self, BlendFactor::SrcAlphaSaturate)
    }

    /// Returns `true` if the factor reads the RGB part of the blend constant.
    pub const fn uses_constant_color(self) -> bool {
        matches!(
            self,
            BlendFactor::ConstantColor | BlendFactor::OneMinusConstantColor
        )
    }

    /// Returns `true` if the factor reads the alpha part of the blend constant.
    pub const fn uses_constant_alpha(self) -> bool {
        matches!(
            self,
            BlendFactor::ConstantAlpha | BlendFactor::OneMinusConstantAlpha
        )
    }
}

gl_enum! {
    /// The operator combining the weighted source and destination colors.
    pub enum BlendEquation: "blend equation" {
        /// `src * srcK + dst * dstK`
        Add = 0x8006,
        /// `src * srcK - dst * dstK`
        Subtract = 0x800A,
        /// `dst * dstK - src * srcK`
        ReverseSubtract = 0x800B,
    }
}

gl_enum! {
    /// The comparison function used for depth and stencil testing.
    pub enum CompareMode: "compare mode" {
        /// The test never passes.
        Never = 0x0200,
        /// The test passes if the incoming value is less than the stored value.
        Less = 0x0201,
        /// The test passes if the values are equal.
        Equal = 0x0202,
        /// The test passes if the incoming value is less than or equal to the stored value.
        LessOrEqual = 0x0203,
        /// The test passes if the incoming value is greater than the stored value.
        Greater = 0x0204,
        /// The test passes if the values differ.
        NotEqual = 0x0205,
        /// The test passes if the incoming value is greater than or equal to the stored value.
        GreaterOrEqual = 0x0206,
        /// The test always passes.
        Always = 0x0207,
    }
}

gl_enum! {
    /// An update applied to the stencil buffer after a stencil or depth test.
    pub enum ZMode: "stencil operation" {
        /// Set the stencil value to 0.
        #[serde(alias = "none")]
        Zero = 0,
        /// Keep the stored stencil value.
        Keep = 0x1E00,
        /// Replace the stored value with the reference value.
        Replace = 0x1E01,
        /// Increment, clamping at the maximum representable value.
        Increment = 0x1E02,
        /// Decrement, clamping at 0.
        Decrement = 0x1E03,
        /// Bitwise invert the stored value.
        Invert = 0x150A,
        /// Increment, wrapping to 0 on overflow.
        IncrementWrap = 0x8507,
        /// Decrement, wrapping to the maximum value on underflow.
        DecrementWrap = 0x8508,
    }
}

gl_enum! {
    /// Which polygon faces a face-dependent setting applies to.
    pub enum FaceMode: "face mode" {
        /// Front-facing polygons.
        Front = 0x0404,
        /// Back-facing polygons.
        Back = 0x0405,
        /// Both front- and back-facing polygons.
        FrontAndBack = 0x0408,
    }
}
