//! # farmday Core Library
//!
//! This library answers one question for a gacha game's daily farming
//! routine: which characters and weapons can have their ascension
//! materials farmed today, and how long until the server resets. The CLI
//! binary is a thin presentation layer over the same library.
//!
//! ## Architecture
//!
//! - **Dataset**: five read-only JSON tables decoded once, in source order
//! - **Schedule**: weekday availability of materials, characters, weapons
//! - **Filter**: single-active-filter catalog views and alphabetical sort
//! - **Reset**: countdown to the fixed 20:00 UTC server reset
//! - **View**: pure mapping from dataset + [`ViewState`] to an [`AppView`]
//! - **Storage**: TOML configuration, including the theme preference
//!
//! ## Key Components
//!
//! - [`Dataset`]: Decoded tables and id lookups
//! - [`CountdownTicker`]: Periodic countdown refresh
//! - [`Config`]: Application configuration management

pub mod dataset;
pub mod day;
pub mod error;
pub mod filter;
pub mod reset;
pub mod schedule;
pub mod storage;
pub mod ticker;
pub mod view;

pub use dataset::{Character, DanglingReference, Dataset, Domain, Element, Material, Weapon};
pub use day::{day_name, Day};
pub use error::{ConfigError, CoreError, DatasetError};
pub use filter::{filter_characters, filter_weapons, weapon_types, Filter, FilterOption};
pub use reset::{
    countdown_string, local_reset_time_label, next_reset_instant, LocalResetLabel, RESET_NOW,
};
pub use schedule::{characters_available_today, material_available, weapons_available_today};
pub use storage::{Config, Theme};
pub use ticker::{CountdownTick, CountdownTicker};
pub use view::{render, AppView, DetailView, EntityKind, Tab, ViewState};
