//! Declarative view-model consumed by whatever renders the UI.

use serde::Serialize;

use super::state::{EntityKind, Tab};
use crate::day::Day;
use crate::reset::LocalResetLabel;

/// Asset path for an entity icon, e.g. `assets/icons/weapons/harp.png`.
pub fn entity_icon_path(kind: EntityKind, icon: &str) -> String {
    format!("assets/icons/{}/{icon}", kind.plural())
}

/// Asset path for a material icon; character and weapon materials live in
/// separate folders.
pub fn material_icon_path(kind: EntityKind, icon: &str) -> String {
    let folder = match kind {
        EntityKind::Character => "character-ascension",
        EntityKind::Weapon => "weapon-ascension",
    };
    format!("assets/icons/materials/{folder}/{icon}")
}

pub fn region_icon_path(icon: &str) -> String {
    format!("assets/icons/regions/{icon}")
}

pub fn element_icon_path(element_id: &str) -> String {
    format!("assets/icons/elements/{element_id}.png")
}

/// A clickable tile in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconItem {
    pub id: String,
    pub name: String,
    pub kind: EntityKind,
    pub icon_path: String,
}

/// A filter button with its active flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub token: String,
    pub label: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,
}

/// Entities farmable today for the active tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodayView {
    pub day: Day,
    pub day_name: &'static str,
    pub tab: Tab,
    pub items: Vec<IconItem>,
}

/// A full catalog under its active filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub kind: EntityKind,
    pub filters: Vec<FilterButton>,
    pub items: Vec<IconItem>,
}

/// How an available material card is emphasised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Highlight {
    /// The theme accent colour.
    Accent,
    /// The owning character's element colour.
    Element { color: String },
}

/// One material and the domain it drops from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialCard {
    pub material_id: String,
    pub material_name: String,
    pub material_icon_path: String,
    pub domain_name: String,
    pub region: String,
    pub region_icon_path: String,
    /// Schedule entries as written in the data.
    pub days: Vec<String>,
    pub available_today: bool,
    /// Only set when the material is available today.
    pub highlight: Option<Highlight>,
}

impl MaterialCard {
    /// `"Days: Monday, Thursday, Sunday"`.
    pub fn days_label(&self) -> String {
        format!("Days: {}", self.days.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementBadge {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterDetail {
    pub id: String,
    pub name: String,
    pub icon_path: String,
    pub element: ElementBadge,
    pub cards: Vec<MaterialCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeaponDetail {
    pub id: String,
    pub name: String,
    pub icon_path: String,
    pub weapon_type: String,
    /// `"<name> (<Type>)"`.
    pub title: String,
    pub card: MaterialCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DetailView {
    Character(CharacterDetail),
    Weapon(WeaponDetail),
}

/// Reset clock strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockView {
    pub countdown: String,
    pub server_reset: String,
    pub local_reset: LocalResetLabel,
}

/// Everything on screen for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppView {
    pub today: TodayView,
    pub characters: CatalogView,
    pub weapons: CatalogView,
    pub detail: Option<DetailView>,
    pub clock: ClockView,
}
