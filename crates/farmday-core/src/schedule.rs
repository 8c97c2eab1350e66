//! Daily farming availability.
//!
//! A material is farmable on a day when that day's canonical name appears,
//! ignoring case, in its `domain_schedule`. Characters use OR semantics over
//! their materials; weapons have exactly one material. References that do
//! not resolve count as "not available" and are never errors.

use crate::dataset::{Character, Dataset, Material, Weapon};
use crate::day::Day;

/// Whether `material` can be farmed on `day`.
pub fn material_available(material: &Material, day: Day) -> bool {
    material.is_farmable_on(day)
}

/// Whether at least one of the character's resolvable materials is
/// farmable on `day`.
pub fn character_available(dataset: &Dataset, character: &Character, day: Day) -> bool {
    character
        .material_ids
        .iter()
        .filter_map(|id| dataset.material(id))
        .any(|m| material_available(m, day))
}

/// Whether the weapon's material resolves and is farmable on `day`.
pub fn weapon_available(dataset: &Dataset, weapon: &Weapon, day: Day) -> bool {
    dataset
        .material(&weapon.material_id)
        .is_some_and(|m| material_available(m, day))
}

/// Ids of characters with at least one material farmable on `day`,
/// in dataset order.
pub fn characters_available_today(dataset: &Dataset, day: Day) -> Vec<&str> {
    dataset
        .characters()
        .iter()
        .filter(|(_, c)| character_available(dataset, c, day))
        .map(|(id, _)| id.as_str())
        .collect()
}

/// Ids of weapons whose material is farmable on `day`, in dataset order.
pub fn weapons_available_today(dataset: &Dataset, day: Day) -> Vec<&str> {
    dataset
        .weapons()
        .iter()
        .filter(|(_, w)| weapon_available(dataset, w, day))
        .map(|(id, _)| id.as_str())
        .collect()
}

/// Materials farmable on `day`, in dataset order.
pub fn available_materials(dataset: &Dataset, day: Day) -> Vec<&Material> {
    dataset
        .materials()
        .values()
        .filter(|m| material_available(m, day))
        .collect()
}
