use std::fmt::Write;

use clap::Subcommand;
use farmday_core::{Config, ConfigError};

use super::CmdResult;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value by dotted key
    Get {
        /// "ui.theme", "data.dir" or "clock.tick_ms"
        key: String,
    },
    /// Change one value and save
    Set {
        /// Dotted key
        key: String,
        /// New value (empty string unsets data.dir)
        value: String,
    },
    /// Show every section with its effective values
    List {
        /// Print the raw config as JSON
        #[arg(long)]
        json: bool,
    },
    /// Restore the defaults: light theme, bundled dataset, 1s ticks
    Reset,
}

/// One block per config section, e.g. `[ui]\ntheme = light`.
fn sections(config: &Config) -> String {
    let dir = match &config.data.dir {
        Some(dir) => dir.display().to_string(),
        None => "(bundled dataset)".to_string(),
    };
    let mut out = String::new();
    let _ = writeln!(out, "[ui]\ntheme = {}", config.ui.theme);
    let _ = writeln!(out, "\n[data]\ndir = {dir}");
    let _ = write!(out, "\n[clock]\ntick_ms = {}", config.clock.tick_ms);
    out
}

pub fn run(action: ConfigAction) -> CmdResult {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config
                .get(&key)
                .ok_or_else(|| ConfigError::UnknownKey(key.clone()))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            println!("{key} = {}", config.get(&key).unwrap_or_default());
        }
        ConfigAction::List { json } => {
            let config = Config::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("{}", sections(&config));
            }
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("{}", sections(&config));
        }
    }
    Ok(())
}
