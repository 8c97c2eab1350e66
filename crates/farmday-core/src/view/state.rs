use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::filter::Filter;

/// Which kind of entity a list item or detail refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Character,
    Weapon,
}

impl EntityKind {
    /// Plural form, used for asset folders and tab names.
    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Character => "characters",
            EntityKind::Weapon => "weapons",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Character => "character",
            EntityKind::Weapon => "weapon",
        })
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "character" | "characters" => Ok(EntityKind::Character),
            "weapon" | "weapons" => Ok(EntityKind::Weapon),
            other => Err(format!("unknown entity kind: {other}")),
        }
    }
}

/// The "today" tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Characters,
    Weapons,
}

impl Tab {
    pub fn kind(self) -> EntityKind {
        match self {
            Tab::Characters => EntityKind::Character,
            Tab::Weapons => EntityKind::Weapon,
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "characters" => Ok(Tab::Characters),
            "weapons" => Ok(Tab::Weapons),
            other => Err(format!("unknown tab: {other}")),
        }
    }
}

/// The entity whose details are open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub kind: EntityKind,
    pub id: String,
}

/// Everything the user has chosen in the UI.
///
/// Immutable: each `with_*` call returns a new state, so render functions
/// can take it by reference and stay pure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub tab: Tab,
    pub character_filter: Filter,
    pub weapon_filter: Filter,
    pub selected: Option<Selection>,
}

impl ViewState {
    pub fn with_tab(&self, tab: Tab) -> Self {
        Self { tab, ..self.clone() }
    }

    pub fn with_character_filter(&self, filter: Filter) -> Self {
        Self {
            character_filter: filter,
            ..self.clone()
        }
    }

    pub fn with_weapon_filter(&self, filter: Filter) -> Self {
        Self {
            weapon_filter: filter,
            ..self.clone()
        }
    }

    pub fn with_selection(&self, kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            selected: Some(Selection { kind, id: id.into() }),
            ..self.clone()
        }
    }

    pub fn without_selection(&self) -> Self {
        Self {
            selected: None,
            ..self.clone()
        }
    }

    /// The active filter of a catalog.
    pub fn filter_for(&self, kind: EntityKind) -> &Filter {
        match kind {
            EntityKind::Character => &self.character_filter,
            EntityKind::Weapon => &self.weapon_filter,
        }
    }
}
