mod config;

pub use config::{ClockConfig, Config, DataConfig, Theme, UiConfig};

use std::path::PathBuf;

/// Returns `~/.config/farmday[-dev]/` based on FARMDAY_ENV.
///
/// Set FARMDAY_ENV=dev to use development data directory. FARMDAY_CONFIG_DIR
/// overrides the location entirely.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var_os("FARMDAY_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("FARMDAY_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("farmday-dev")
            } else {
                base_dir.join("farmday")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
