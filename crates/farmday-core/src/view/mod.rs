//! Pure mapping from (dataset, view state, clock) to a view-model.
//!
//! Nothing here touches I/O or global state; the same inputs always render
//! the same [`AppView`].

mod detail;
mod model;
mod state;

pub use detail::{character_detail, detail_for, weapon_detail};
pub use model::{
    element_icon_path, entity_icon_path, material_icon_path, region_icon_path, AppView,
    CatalogView, CharacterDetail, ClockView, DetailView, ElementBadge, FilterButton, Highlight,
    IconItem, MaterialCard, TodayView, WeaponDetail,
};
pub use state::{EntityKind, Selection, Tab, ViewState};

use chrono::{DateTime, FixedOffset, Utc};

use crate::dataset::{Character, Dataset, Weapon};
use crate::day::Day;
use crate::filter::{
    character_filter_options, filter_characters, filter_weapons, weapon_filter_options, Filter,
    FilterOption,
};
use crate::reset::{countdown_string, local_reset_time_label, SERVER_RESET_LABEL};
use crate::schedule::{characters_available_today, weapons_available_today};

fn character_item(character: &Character) -> IconItem {
    IconItem {
        id: character.id.clone(),
        name: character.name.clone(),
        kind: EntityKind::Character,
        icon_path: entity_icon_path(EntityKind::Character, &character.icon),
    }
}

fn weapon_item(weapon: &Weapon) -> IconItem {
    IconItem {
        id: weapon.id.clone(),
        name: weapon.name.clone(),
        kind: EntityKind::Weapon,
        icon_path: entity_icon_path(EntityKind::Weapon, &weapon.icon),
    }
}

fn buttons(
    options: Vec<FilterOption>,
    active: &Filter,
    icon: impl Fn(&str) -> Option<String>,
) -> Vec<FilterButton> {
    options
        .into_iter()
        .map(|option| FilterButton {
            active: option.token == active.token(),
            icon_path: icon(&option.token),
            token: option.token,
            label: option.label,
        })
        .collect()
}

/// Icon tiles for entities farmable on `day` under the given tab.
pub fn today_view(dataset: &Dataset, tab: Tab, day: Day) -> TodayView {
    let items = match tab {
        Tab::Characters => characters_available_today(dataset, day)
            .into_iter()
            .filter_map(|id| dataset.character(id))
            .map(character_item)
            .collect(),
        Tab::Weapons => weapons_available_today(dataset, day)
            .into_iter()
            .filter_map(|id| dataset.weapon(id))
            .map(weapon_item)
            .collect(),
    };
    TodayView {
        day,
        day_name: day.name(),
        tab,
        items,
    }
}

/// The character catalog under `filter`.
pub fn character_catalog(dataset: &Dataset, filter: &Filter) -> CatalogView {
    let filters = buttons(character_filter_options(dataset), filter, |token| {
        dataset.element(token).map(|_| element_icon_path(token))
    });
    CatalogView {
        kind: EntityKind::Character,
        filters,
        items: filter_characters(dataset, filter)
            .into_iter()
            .map(character_item)
            .collect(),
    }
}

/// The weapon catalog under `filter`.
pub fn weapon_catalog(dataset: &Dataset, filter: &Filter) -> CatalogView {
    CatalogView {
        kind: EntityKind::Weapon,
        filters: buttons(weapon_filter_options(dataset), filter, |_| None),
        items: filter_weapons(dataset, filter)
            .into_iter()
            .map(weapon_item)
            .collect(),
    }
}

/// Reset clock strings for one clock reading.
pub fn clock_view(now: DateTime<Utc>, offset: FixedOffset) -> ClockView {
    ClockView {
        countdown: countdown_string(now),
        server_reset: SERVER_RESET_LABEL.to_string(),
        local_reset: local_reset_time_label(now, offset),
    }
}

/// Render the whole screen.
pub fn render(
    dataset: &Dataset,
    state: &ViewState,
    day: Day,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> AppView {
    AppView {
        today: today_view(dataset, state.tab, day),
        characters: character_catalog(dataset, &state.character_filter),
        weapons: weapon_catalog(dataset, &state.weapon_filter),
        detail: state
            .selected
            .as_ref()
            .and_then(|selection| detail_for(dataset, selection, day)),
        clock: clock_view(now, offset),
    }
}
