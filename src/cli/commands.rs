//! Subcommand handlers for config actions.

use std::path::Path;

use super::args::ConfigAction;
use crate::ascii::DEFAULT_TARGET_WIDTH;
use crate::config::{default_path, Config};

const DEFAULT_CONFIG: &str = "\
# bmp2ascii configuration

[input]
# BMP file to convert when no path is given on the command line
# path = \"image.bmp\"

[render]
# Output width in characters
width = 100

[output]
# Where to write the rendered text (default: <input stem>_ascii_art.txt)
# path = \"image_ascii_art.txt\"
";

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => match Config::load(config_path) {
            Ok(config) => {
                println!("Current configuration:");
                println!("  Input: {}", display_path(config.input.path.as_deref()));
                println!(
                    "  Width: {}",
                    config.render.width.unwrap_or(DEFAULT_TARGET_WIDTH)
                );
                println!("  Output: {}", display_path(config.output.path.as_deref()));
                println!();

                if path.exists() {
                    println!("Config file: {} (exists)", path.display());
                } else {
                    println!("Config file: {} (not found)", path.display());
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        ConfigAction::Init => {
            if path.exists() {
                println!("Config file already exists: {}", path.display());
                return;
            }

            if let Some(parent) = path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error: failed to create {}: {}", parent.display(), e);
                    std::process::exit(1);
                }
            }

            match std::fs::write(&path, DEFAULT_CONFIG) {
                Ok(()) => println!("Created config file: {}", path.display()),
                Err(e) => {
                    eprintln!("Error: failed to write {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string())
}
