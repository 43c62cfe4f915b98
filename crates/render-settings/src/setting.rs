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

//! The [`Setting`] catalog: one value per render-state change.
//!
//! A `Setting` is a self-contained descriptor. It carries no ordering or
//! accumulation semantics; the renderer consuming a sequence of settings
//! decides how and when each one is applied. Scalar payloads are stored
//! exactly as given, without clamping.

use super::enums::{FaceMode, GlConstant};
use super::options::{BlendOptions, DepthOptions, StencilOptions};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The constant color used by the `Constant*` blend factors.
///
/// Components are expected in `[0.0, 1.0]` and are passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BlendColor {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl BlendColor {
    /// Creates a blend color from its components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A single render-state change.
///
/// Variants are plain `Copy` values. Every constructor returns an
/// independent value, so changing one `Setting` (or a copy of it) never
/// affects any other `Setting`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Setting {
    /// Enables blending with one function for all channels.
    Blend {
        /// Blend function and equation.
        #[serde(default)]
        options: BlendOptions,
        /// The blend constant color.
        color: BlendColor,
    },
    /// Enables blending with separate RGB and alpha functions.
    BlendSeparate {
        /// Function and equation for the RGB channels.
        #[serde(default)]
        color_options: BlendOptions,
        /// Function and equation for the alpha channel.
        #[serde(default)]
        alpha_options: BlendOptions,
        /// The blend constant color.
        color: BlendColor,
    },
    /// Enables the depth test.
    Depth {
        /// Depth comparison, write mask and range.
        #[serde(default)]
        options: DepthOptions,
    },
    /// Enables the stencil test with the same options for both faces.
    Stencil {
        /// Stencil comparison and buffer updates.
        #[serde(default)]
        options: StencilOptions,
    },
    /// Enables the stencil test with separate front and back options.
    StencilSeparate {
        /// Options for front-facing polygons.
        #[serde(default)]
        front: StencilOptions,
        /// Options for back-facing polygons.
        #[serde(default)]
        back: StencilOptions,
    },
    /// Restricts drawing to a window-space rectangle (lower-left origin).
    Scissor {
        /// Left edge.
        x: i32,
        /// Bottom edge.
        y: i32,
        /// Width of the box.
        width: i32,
        /// Height of the box.
        height: i32,
    },
    /// Enables or disables writes per color channel.
    ColorMask {
        /// Red writes.
        r: bool,
        /// Green writes.
        g: bool,
        /// Blue writes.
        b: bool,
        /// Alpha writes.
        a: bool,
    },
    /// Enables face culling.
    CullFace {
        /// The faces to cull.
        face: FaceMode,
    },
    /// Enables dithering of color components.
    Dither,
    /// Offsets the depth of rasterized fragments.
    PolygonOffset {
        /// Scale applied to the fragment's depth slope.
        factor: f32,
        /// Multiplier of the implementation's minimum resolvable offset.
        units: f32,
    },
    /// Sets the multisample coverage value.
    SampleCoverage {
        /// Coverage value, expected in `[0.0, 1.0]`.
        value: f32,
        /// If `true`, the coverage mask is inverted.
        invert: bool,
    },
    /// Derives a temporary coverage value from the fragment's alpha.
    SampleAlphaToCoverage,
}

/// The payload-free tag of a [`Setting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    /// [`Setting::Blend`]
    Blend,
    /// [`Setting::BlendSeparate`]
    BlendSeparate,
    /// [`Setting::Depth`]
    Depth,
    /// [`Setting::Stencil`]
    Stencil,
    /// [`Setting::StencilSeparate`]
    StencilSeparate,
    /// [`Setting::Scissor`]
    Scissor,
    /// [`Setting::ColorMask`]
    ColorMask,
    /// [`Setting::CullFace`]
    CullFace,
    /// [`Setting::Dither`]
    Dither,
    /// [`Setting::PolygonOffset`]
    PolygonOffset,
    /// [`Setting::SampleCoverage`]
    SampleCoverage,
    /// [`Setting::SampleAlphaToCoverage`]
    SampleAlphaToCoverage,
}

impl SettingKind {
    /// The snake_case name used for the `kind` tag in settings documents.
    pub const fn name(self) -> &'static str {
        match self {
            SettingKind::Blend => "blend",
            SettingKind::BlendSeparate => "blend_separate",
            SettingKind::Depth => "depth",
            SettingKind::Stencil => "stencil",
            SettingKind::StencilSeparate => "stencil_separate",
            SettingKind::Scissor => "scissor",
            SettingKind::ColorMask => "color_mask",
            SettingKind::CullFace => "cull_face",
            SettingKind::Dither => "dither",
            SettingKind::PolygonOffset => "polygon_offset",
            SettingKind::SampleCoverage => "sample_coverage",
            SettingKind::SampleAlphaToCoverage => "sample_alpha_to_coverage",
        }
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Setting {
    /// Blending with a single function. `r`, `g`, `b`, `a` form the constant color.
    pub const fn blend(options: BlendOptions, r: f32, g: f32, b: f32, a: f32) -> Self {
        Setting::Blend {
            options,
            color: BlendColor::new(r, g, b, a),
        }
    }

    /// Blending with separate RGB and alpha functions.
    pub const fn blend_separate(
        color_options: BlendOptions,
        alpha_options: BlendOptions,
        r: f32,
        g: f32,
        b: f32,
        a: f32,
    ) -> Self {
        Setting::BlendSeparate {
            color_options,
            alpha_options,
            color: BlendColor::new(r, g, b, a),
        }
    }

    /// Depth testing.
    pub const fn depth(options: DepthOptions) -> Self {
        Setting::Depth { options }
    }

    /// Stencil testing, same options for both faces.
    pub const fn stencil(options: StencilOptions) -> Self {
        Setting::Stencil { options }
    }

    /// Stencil testing with separate front and back options.
    pub const fn stencil_separate(front: StencilOptions, back: StencilOptions) -> Self {
        Setting::StencilSeparate { front, back }
    }

    /// Scissor box. Negative sizes are passed through to the renderer.
    pub const fn scissor(x: i32, y: i32, width: i32, height: i32) -> Self {
        Setting::Scissor {
            x,
            y,
            width,
            height,
        }
    }

    /// Per-channel color write mask.
    pub const fn color_mask(r: bool, g: bool, b: bool, a: bool) -> Self {
        Setting::ColorMask { r, g, b, a }
    }

    /// Face culling.
    pub const fn cull_face(face: FaceMode) -> Self {
        Setting::CullFace { face }
    }

    /// Dithering.
    pub const fn dither() -> Self {
        Setting::Dither
    }

    /// Polygon depth offset.
    pub const fn polygon_offset(factor: f32, units: f32) -> Self {
        Setting::PolygonOffset { factor, units }
    }

    /// Multisample coverage.
    pub const fn sample_coverage(value: f32, invert: bool) -> Self {
        Setting::SampleCoverage { value, invert }
    }

    /// Alpha-to-coverage.
    pub const fn sample_alpha_to_coverage() -> Self {
        Setting::SampleAlphaToCoverage
    }

    /// Returns the tag of this setting.
    pub const fn kind(&self) -> SettingKind {
        match self {
            Setting::Blend { .. } => SettingKind::Blend,
            Setting::BlendSeparate { .. } => SettingKind::BlendSeparate,
            Setting::Depth { .. } => SettingKind::Depth,
            Setting::Stencil { .. } => SettingKind::Stencil,
            Setting::StencilSeparate { .. } => SettingKind::StencilSeparate,
            Setting::Scissor { .. } => SettingKind::Scissor,
            Setting::ColorMask { .. } => SettingKind::ColorMask,
            Setting::CullFace { .. } => SettingKind::CullFace,
            Setting::Dither => SettingKind::Dither,
            Setting::PolygonOffset { .. } => SettingKind::PolygonOffset,
            Setting::SampleCoverage { .. } => SettingKind::SampleCoverage,
            Setting::SampleAlphaToCoverage => SettingKind::SampleAlphaToCoverage,
        }
    }

    /// For [`Setting::CullFace`], the raw GL code of the culled face.
    pub fn face_code(&self) -> Option<u32> {
        match self {
            Setting::CullFace { face } => Some(face.code()),
            _ => None,
        }
    }

    /// Returns the blend options carried by this setting, if any.
    ///
    /// For [`Setting::BlendSeparate`] both the color and alpha options are
    /// returned, in that order.
    pub fn blend_functions(&self) -> Option<(BlendOptions, Option<BlendOptions>)> {
        match *self {
            Setting::Blend { options, .. } => Some((options, None)),
            Setting::BlendSeparate {
                color_options,
                alpha_options,
                ..
            } => Some((color_options, Some(alpha_options))),
            _ => None,
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Blend { options, color } => write!(
                f,
                "blend(equation={}, src={}, dst={}, color=[{}, {}, {}, {}])",
                options.equation,
                options.source,
                options.destination,
                color.r,
                color.g,
                color.b,
                color.a
            ),
            Setting::BlendSeparate {
                color_options,
                alpha_options,
                color,
            } => write!(
                f,
                "blend_separate(rgb=[{}, {}, {}], alpha=[{}, {}, {}], color=[{}, {}, {}, {}])",
                color_options.equation,
                color_options.source,
                color_options.destination,
                alpha_options.equation,
                alpha_options.source,
                alpha_options.destination,
                color.r,
                color.g,
                color.b,
                color.a
            ),
            Setting::Depth { options } => write!(
                f,
                "depth(func={}, mask={}, range=[{}, {}])",
                options.func, options.mask, options.near, options.far
            ),
            Setting::Stencil { options } => {
                write!(f, "stencil(")?;
                write_stencil(f, options)?;
                write!(f, ")")
            }
            Setting::StencilSeparate { front, back } => {
                write!(f, "stencil_separate(front=(")?;
                write_stencil(f, front)?;
                write!(f, "), back=(")?;
                write_stencil(f, back)?;
                write!(f, "))")
            }
            Setting::Scissor {
                x,
                y,
                width,
                height,
            } => write!(f, "scissor({x}, {y}, {width}x{height})"),
            Setting::ColorMask { r, g, b, a } => {
                write!(f, "color_mask(r={r}, g={g}, b={b}, a={a})")
            }
            Setting::CullFace { face } => write!(f, "cull_face({face})"),
            Setting::Dither => write!(f, "dither"),
            Setting::PolygonOffset { factor, units } => {
                write!(f, "polygon_offset(factor={factor}, units={units})")
            }
            Setting::SampleCoverage { value, invert } => {
                write!(f, "sample_coverage(value={value}, invert={invert})")
            }
            Setting::SampleAlphaToCoverage => write!(f, "sample_alpha_to_coverage"),
        }
    }
}

fn write_stencil(f: &mut fmt::Formatter<'_>, options: &StencilOptions) -> fmt::Result {
    write!(
        f,
        "func={}, ref={}, value_mask=0x{:08X}, fail={}, zfail={}, zpass={}, write_mask=0x{:08X}",
        options.func,
        options.reference,
        options.value_mask,
        options.fail,
        options.zfail,
        options.zpass,
        options.write_mask
    )
}

/// See [`Setting::blend`].
pub const fn blend(options: BlendOptions, r: f32, g: f32, b: f32, a: f32) -> Setting {
    Setting::blend(options, r, g, b, a)
}

/// See [`Setting::blend_separate`].
pub const fn blend_separate(
    color_options: BlendOptions,
    alpha_options: BlendOptions,
    r: f32,
    g: f32,
    b: f32,
    a: f32,
) -> Setting {
    Setting::blend_separate(color_options, alpha_options, r, g, b, a)
}

/// See [`Setting::depth`].
pub const fn depth(options: DepthOptions) -> Setting {
    Setting::depth(options)
}

/// See [`Setting::stencil`].
pub const fn stencil(options: StencilOptions) -> Setting {
    Setting::stencil(options)
}

/// See [`Setting::stencil_separate`].
pub const fn stencil_separate(front: StencilOptions, back: StencilOptions) -> Setting {
    Setting::stencil_separate(front, back)
}

/// See [`Setting::scissor`].
pub const fn scissor(x: i32, y: i32, width: i32, height: i32) -> Setting {
    Setting::scissor(x, y, width, height)
}

/// See [`Setting::color_mask`].
pub const fn color_mask(r: bool, g: bool, b: bool, a: bool) -> Setting {
    Setting::color_mask(r, g, b, a)
}

/// See [`Setting::cull_face`].
pub const fn cull_face(face: FaceMode) -> Setting {
    Setting::cull_face(face)
}

/// See [`Setting::dither`].
pub const fn dither() -> Setting {
    Setting::dither()
}

/// See [`Setting::polygon_offset`].
pub const fn polygon_offset(factor: f32, units: f32) -> Setting {
    Setting::polygon_offset(factor, units)
}

/// See [`Setting::sample_coverage`].
pub const fn sample_coverage(value: f32, invert: bool) -> Setting {
    Setting::sample_coverage(value, invert)
}

/// See [`Setting::sample_alpha_to_coverage`].
pub const fn sample_alpha_to_coverage() -> Setting {
    Setting::sample_alpha_to_coverage()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{BlendEquation, BlendFactor, CompareMode, ZMode};

    fn one_of_each() -> Vec<Setting> {
        vec![
            blend(BlendOptions::DEFAULT, 0.0, 0.0, 0.0, 0.0),
            blend_separate(BlendOptions::DEFAULT, BlendOptions::DEFAULT, 0.0, 0.0, 0.0, 0.0),
            depth(DepthOptions::DEFAULT),
            stencil(StencilOptions::DEFAULT),
            stencil_separate(StencilOptions::DEFAULT, StencilOptions::DEFAULT),
            scissor(0, 0, 1, 1),
            color_mask(true, true, true, true),
            cull_face(FaceMode::Back),
            dither(),
            polygon_offset(0.0, 0.0),
            sample_coverage(1.0, false),
            sample_alpha_to_coverage(),
        ]
    }

    #[test]
    fn blend_stores_arguments_unchanged() {
        let options = BlendOptions::new(
            BlendEquation::Subtract,
            BlendFactor::SrcAlpha,
            BlendFactor::OneMinusSrcAlpha,
        );
        let setting = blend(options, 1.0, 0.5, 0.0, 1.0);
        assert_eq!(
            setting,
            Setting::Blend {
                options,
                color: BlendColor {
                    r: 1.0,
                    g: 0.5,
                    b: 0.0,
                    a: 1.0
                }
            }
        );
    }

    #[test]
    fn blend_separate_keeps_option_order() {
        let rgb = BlendOptions::new(BlendEquation::Add, BlendFactor::SrcColor, BlendFactor::DstColor);
        let alpha = BlendOptions::new(
            BlendEquation::ReverseSubtract,
            BlendFactor::One,
            BlendFactor::One,
        );
        let setting = blend_separate(rgb, alpha, 0.1, 0.2, 0.3, 0.4);
        match setting {
            Setting::BlendSeparate {
                color_options,
                alpha_options,
                color,
            } => {
                assert_eq!(color_options, rgb);
                assert_eq!(alpha_options, alpha);
                assert_eq!(color, BlendColor::new(0.1, 0.2, 0.3, 0.4));
            }
            other => panic!("unexpected setting {other:?}"),
        }
        assert_eq!(setting.blend_functions(), Some((rgb, Some(alpha))));
    }

    #[test]
    fn out_of_range_scalars_pass_through() {
        assert_eq!(
            blend(BlendOptions::DEFAULT, 2.0, -1.0, 0.0, 7.5),
            Setting::Blend {
                options: BlendOptions::DEFAULT,
                color: BlendColor::new(2.0, -1.0, 0.0, 7.5)
            }
        );
        assert_eq!(
            scissor(-5, 10, -1, 0),
            Setting::Scissor {
                x: -5,
                y: 10,
                width: -1,
                height: 0
            }
        );
        assert_eq!(
            sample_coverage(3.0, true),
            Setting::SampleCoverage {
                value: 3.0,
                invert: true
            }
        );
    }

    #[test]
    fn depth_and_stencil_store_options() {
        let d = DepthOptions {
            func: CompareMode::GreaterOrEqual,
            mask: false,
            near: 0.25,
            far: 0.75,
        };
        assert_eq!(depth(d), Setting::Depth { options: d });

        let front = StencilOptions {
            zpass: ZMode::IncrementWrap,
            ..StencilOptions::DEFAULT
        };
        let back = StencilOptions {
            zpass: ZMode::DecrementWrap,
            ..StencilOptions::DEFAULT
        };
        assert_eq!(stencil(front), Setting::Stencil { options: front });
        assert_eq!(
            stencil_separate(front, back),
            Setting::StencilSeparate { front, back }
        );
        assert_ne!(stencil_separate(front, back), stencil_separate(back, front));
    }

    #[test]
    fn remaining_constructors_store_arguments() {
        assert_eq!(
            color_mask(true, false, true, false),
            Setting::ColorMask {
                r: true,
                g: false,
                b: true,
                a: false
            }
        );
        assert_eq!(
            polygon_offset(1.5, -2.0),
            Setting::PolygonOffset {
                factor: 1.5,
                units: -2.0
            }
        );
    }

    #[test]
    fn cull_face_carries_face_code() {
        assert_eq!(cull_face(FaceMode::Front).face_code(), Some(1028));
        assert_eq!(cull_face(FaceMode::Back).face_code(), Some(1029));
        assert_eq!(cull_face(FaceMode::FrontAndBack).face_code(), Some(1032));
        assert_eq!(dither().face_code(), None);
    }

    #[test]
    fn identical_arguments_give_equal_values() {
        let a = stencil(StencilOptions::DEFAULT);
        let b = stencil(StencilOptions::DEFAULT);
        assert_eq!(a, b);

        let mut changed = a;
        if let Setting::Stencil { options } = &mut changed {
            options.reference = 9;
        }
        assert_ne!(changed, a);
        assert_eq!(a, b);
    }

    #[test]
    fn toggles_are_distinct_from_every_other_variant() {
        let all = one_of_each();
        for (i, left) in all.iter().enumerate() {
            for (j, right) in all.iter().enumerate() {
                assert_eq!(i == j, left == right, "{left} vs {right}");
                assert_eq!(i == j, left.kind() == right.kind());
            }
        }
        assert_eq!(dither(), dither());
        assert_eq!(sample_alpha_to_coverage(), sample_alpha_to_coverage());
    }

    #[test]
    fn kind_names_match_serde_tags() {
        for setting in one_of_each() {
            let value = serde_json::to_value(setting).unwrap();
            assert_eq!(value["kind"], setting.kind().name());
        }
    }

    #[test]
    fn display_is_single_line() {
        assert_eq!(scissor(0, 0, 800, 600).to_string(), "scissor(0, 0, 800x600)");
        assert_eq!(
            cull_face(FaceMode::Front).to_string(),
            "cull_face(Front(0x0404))"
        );
        assert_eq!(
            depth(DepthOptions::DEFAULT).to_string(),
            "depth(func=Less(0x0201), mask=true, range=[0, 1])"
        );
        for setting in one_of_each() {
            assert!(!setting.to_string().contains('\n'));
        }
    }
}
