//! Per-entity detail lookups.
//!
//! A detail joins an entity with its material(s), their domains and, for
//! characters, the element. Anything that fails to resolve is dropped
//! quietly: a missing card, or no detail at all.

use super::model::{
    entity_icon_path, material_icon_path, region_icon_path, CharacterDetail, DetailView,
    ElementBadge, Highlight, MaterialCard, WeaponDetail,
};
use super::state::{EntityKind, Selection};
use crate::dataset::Dataset;
use crate::day::Day;
use crate::filter::capitalize;
use crate::schedule::material_available;

fn material_card(
    dataset: &Dataset,
    material_id: &str,
    kind: EntityKind,
    day: Day,
    highlight: Highlight,
) -> Option<MaterialCard> {
    let material = dataset.material(material_id)?;
    let domain = dataset.domain(&material.domain_id)?;
    let available_today = material_available(material, day);

    Some(MaterialCard {
        material_id: material.id.clone(),
        material_name: material.name.clone(),
        material_icon_path: material_icon_path(kind, &material.icon),
        domain_name: domain.name.clone(),
        region: domain.region.clone(),
        region_icon_path: region_icon_path(&domain.region_icon),
        days: material.domain_schedule.clone(),
        available_today,
        highlight: available_today.then_some(highlight),
    })
}

/// Character detail, or `None` when the character or its element is
/// missing. Materials without a resolvable domain produce no card.
pub fn character_detail(dataset: &Dataset, id: &str, day: Day) -> Option<CharacterDetail> {
    let character = dataset.character(id)?;
    let element = dataset.element(&character.element_type)?;

    let cards = character
        .material_ids
        .iter()
        .filter_map(|material_id| {
            material_card(
                dataset,
                material_id,
                EntityKind::Character,
                day,
                Highlight::Element {
                    color: element.color.clone(),
                },
            )
        })
        .collect();

    Some(CharacterDetail {
        id: character.id.clone(),
        name: character.name.clone(),
        icon_path: entity_icon_path(EntityKind::Character, &character.icon),
        element: ElementBadge {
            id: element.id.clone(),
            name: element.name.clone(),
            color: element.color.clone(),
        },
        cards,
    })
}

/// Weapon detail, or `None` when the weapon, its material or the
/// material's domain is missing.
pub fn weapon_detail(dataset: &Dataset, id: &str, day: Day) -> Option<WeaponDetail> {
    let weapon = dataset.weapon(id)?;
    let card = material_card(
        dataset,
        &weapon.material_id,
        EntityKind::Weapon,
        day,
        Highlight::Accent,
    )?;

    Some(WeaponDetail {
        id: weapon.id.clone(),
        name: weapon.name.clone(),
        icon_path: entity_icon_path(EntityKind::Weapon, &weapon.icon),
        weapon_type: weapon.weapon_type.clone(),
        title: format!("{} ({})", weapon.name, capitalize(&weapon.weapon_type)),
        card,
    })
}

/// Detail for a selection, dispatching on its kind.
pub fn detail_for(dataset: &Dataset, selection: &Selection, day: Day) -> Option<DetailView> {
    match selection.kind {
        EntityKind::Character => {
            character_detail(dataset, &selection.id, day).map(DetailView::Character)
        }
        EntityKind::Weapon => weapon_detail(dataset, &selection.id, day).map(DetailView::Weapon),
    }
}
