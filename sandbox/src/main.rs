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

// Sandbox host for render settings.
// Run with: cargo run -p sandbox -- [--file settings.json] [--dump]

use anyhow::{Context, Result};
use clap::Parser;
use render_settings::config::{load_from_path, to_json_string};
use render_settings::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Builds or loads a render-setting list and logs it")]
struct Args {
    /// JSON settings document to load instead of the built-in pass.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the list back as a JSON document.
    #[arg(long)]
    dump: bool,
}

/// The state a typical alpha-blended overlay pass would request.
fn overlay_pass() -> SettingList {
    SettingList::new()
        .with(depth(DepthOptions {
            func: CompareMode::LessOrEqual,
            mask: false,
            ..depth_options()
        }))
        .with(blend(
            BlendOptions {
                source: BlendFactor::SrcAlpha,
                destination: BlendFactor::OneMinusSrcAlpha,
                ..blend_options()
            },
            0.0,
            0.0,
            0.0,
            0.0,
        ))
        .with(cull_face(FaceMode::Back))
        .with(scissor(0, 0, 800, 600))
        .with(color_mask(true, true, true, false))
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = match &args.file {
        Some(path) => load_from_path(path)
            .with_context(|| format!("Failed to load settings from '{}'", path.display()))?,
        None => overlay_pass(),
    };

    log::info!("Applying {} render settings:", settings.len());
    for (index, setting) in settings.iter().enumerate() {
        log::info!("  #{index} {setting}");
    }

    if args.dump {
        let json = to_json_string(&settings).context("Failed to serialize settings")?;
        println!("{json}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_pass_order() {
        let kinds: Vec<_> = overlay_pass().kinds().collect();
        assert_eq!(
            kinds,
            vec![
                SettingKind::Depth,
                SettingKind::Blend,
                SettingKind::CullFace,
                SettingKind::Scissor,
                SettingKind::ColorMask,
            ]
        );
    }

    #[test]
    fn parses_arguments() {
        let args = Args::parse_from(["sandbox", "--file", "pass.json", "--dump"]);
        assert_eq!(args.file, Some(PathBuf::from("pass.json")));
        assert!(args.dump);
    }
}
