use clap::Subcommand;
use farmday_core::{Config, Theme};

use super::CmdResult;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the saved theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the theme explicitly
    Set {
        /// "light" or "dark"
        theme: Theme,
    },
}

pub fn run(action: ThemeAction) -> CmdResult {
    match action {
        ThemeAction::Show => {
            println!("{}", Config::load_or_default().ui.theme);
        }
        ThemeAction::Toggle => {
            let mut config = Config::load()?;
            let theme = config.toggle_theme()?;
            println!("{theme}");
        }
        ThemeAction::Set { theme } => {
            let mut config = Config::load()?;
            config.ui.theme = theme;
            config.save()?;
            println!("{theme}");
        }
    }
    Ok(())
}
