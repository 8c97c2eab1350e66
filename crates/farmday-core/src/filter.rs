//! Catalog filtering and sorting.
//!
//! Exactly one filter is active per catalog: everything, alphabetical, or a
//! single category (element for characters, weapon type for weapons).
//! Choosing `a-z` drops any category, matching a one-active-button UI.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::dataset::{Character, Dataset, Weapon};

/// Token for the unfiltered catalog.
pub const ALL_TOKEN: &str = "all";
/// Token for the alphabetical sort.
pub const A_Z_TOKEN: &str = "a-z";

/// The active catalog filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    /// Sort by display name, ascending.
    AlphabeticalAsc,
    /// Keep one element id or weapon type.
    Category(String),
}

impl Filter {
    /// Parse a filter button token. Anything that is not `all` or `a-z`
    /// is a category.
    pub fn from_token(token: &str) -> Self {
        match token {
            ALL_TOKEN => Filter::All,
            A_Z_TOKEN => Filter::AlphabeticalAsc,
            other => Filter::Category(other.to_string()),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Filter::All => ALL_TOKEN,
            Filter::AlphabeticalAsc => A_Z_TOKEN,
            Filter::Category(c) => c,
        }
    }
}

impl From<String> for Filter {
    fn from(token: String) -> Self {
        Filter::from_token(&token)
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.token().to_string()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One filter button: its token and display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub token: String,
    pub label: String,
}

impl FilterOption {
    fn new(token: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            label: label.into(),
        }
    }
}

/// Letters with accents and case folded away, e.g. `"Émile"` → `"emile"`.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Compare display names the way a locale collator does for Latin names.
///
/// Base letters decide first, so `"Émile"` sits beside `"Eula"` rather than
/// after `"Zed"`. Ties fall back to accents (unaccented first), then case
/// (lowercase first). Equal names compare equal so a stable sort keeps
/// dataset order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
}

/// Capitalise the first character, e.g. `"bow"` → `"Bow"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Characters under `filter`.
///
/// An element id that is not in the dataset leaves the list unfiltered.
pub fn filter_characters<'a>(dataset: &'a Dataset, filter: &Filter) -> Vec<&'a Character> {
    let mut characters: Vec<&Character> = dataset.characters().values().collect();
    match filter {
        Filter::All => {}
        Filter::AlphabeticalAsc => characters.sort_by(|a, b| compare_names(&a.name, &b.name)),
        Filter::Category(element) => {
            if dataset.element(element).is_some() {
                characters.retain(|c| &c.element_type == element);
            }
        }
    }
    characters
}

/// Weapons under `filter`. An unknown weapon type yields nothing.
pub fn filter_weapons<'a>(dataset: &'a Dataset, filter: &Filter) -> Vec<&'a Weapon> {
    let mut weapons: Vec<&Weapon> = dataset.weapons().values().collect();
    match filter {
        Filter::All => {}
        Filter::AlphabeticalAsc => weapons.sort_by(|a, b| compare_names(&a.name, &b.name)),
        Filter::Category(weapon_type) => weapons.retain(|w| &w.weapon_type == weapon_type),
    }
    weapons
}

/// Distinct weapon types in first-seen dataset order.
pub fn weapon_types(dataset: &Dataset) -> Vec<&str> {
    let mut types: Vec<&str> = Vec::new();
    for weapon in dataset.weapons().values() {
        if !types.contains(&weapon.weapon_type.as_str()) {
            types.push(&weapon.weapon_type);
        }
    }
    types
}

/// Filter buttons for the character catalog: `all`, `a-z`, then one per
/// element in dataset order.
pub fn character_filter_options(dataset: &Dataset) -> Vec<FilterOption> {
    let mut options = vec![
        FilterOption::new(ALL_TOKEN, "All"),
        FilterOption::new(A_Z_TOKEN, "A-Z"),
    ];
    options.extend(
        dataset
            .elements()
            .iter()
            .map(|(id, element)| FilterOption::new(id.as_str(), element.name.as_str())),
    );
    options
}

/// Filter buttons for the weapon catalog: `all`, `a-z`, then one per
/// weapon type found in the data.
pub fn weapon_filter_options(dataset: &Dataset) -> Vec<FilterOption> {
    let mut options = vec![
        FilterOption::new(ALL_TOKEN, "All"),
        FilterOption::new(A_Z_TOKEN, "A-Z"),
    ];
    options.extend(
        weapon_types(dataset)
            .into_iter()
            .map(|t| FilterOption::new(t, capitalize(t))),
    );
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures;
    use proptest::prelude::*;

    fn ids<T>(items: &[&T], id: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|i| id(i).to_string()).collect()
    }

    #[test]
    fn token_parsing() {
        assert_eq!(Filter::from_token("all"), Filter::All);
        assert_eq!(Filter::from_token("a-z"), Filter::AlphabeticalAsc);
        assert_eq!(Filter::from_token("pyro"), Filter::Category("pyro".into()));
        assert_eq!(Filter::Category("bow".into()).to_string(), "bow");
    }

    #[test]
    fn all_keeps_dataset_order() {
        let ds = fixtures::sample();
        let out = filter_characters(&ds, &Filter::All);
        assert_eq!(ids(&out, |c| &c.id), ["venti", "diluc", "amber", "traveler", "stray"]);
    }

    #[test]
    fn alphabetical_ignores_case() {
        let ds = fixtures::sample();
        let out = filter_characters(&ds, &Filter::AlphabeticalAsc);
        assert_eq!(ids(&out, |c| &c.id), ["amber", "diluc", "stray", "traveler", "venti"]);
    }

    #[test]
    fn element_filter_keeps_order() {
        let ds = fixtures::sample();
        let out = filter_characters(&ds, &Filter::Category("pyro".into()));
        assert_eq!(ids(&out, |c| &c.id), ["diluc", "amber"]);
    }

    #[test]
    fn unknown_element_leaves_list_unfiltered() {
        let ds = fixtures::sample();
        let out = filter_characters(&ds, &Filter::Category("void".into()));
        assert_eq!(out.len(), ds.characters().len());
    }

    #[test]
    fn bow_filter_keeps_only_bows_in_order() {
        let ds = fixtures::sample();
        let out = filter_weapons(&ds, &Filter::Category("bow".into()));
        assert_eq!(ids(&out, |w| &w.id), ["harp", "amos"]);
    }

    #[test]
    fn unknown_weapon_type_is_empty() {
        let ds = fixtures::sample();
        assert!(filter_weapons(&ds, &Filter::Category("polearm".into())).is_empty());
    }

    #[test]
    fn weapons_sort_alphabetically() {
        let ds = fixtures::sample();
        let out = filter_weapons(&ds, &Filter::AlphabeticalAsc);
        assert_eq!(ids(&out, |w| &w.id), ["amos", "blade", "ghost", "harp"]);
    }

    #[test]
    fn weapon_types_come_from_data() {
        let ds = fixtures::sample();
        assert_eq!(weapon_types(&ds), ["bow", "sword"]);
        let labels: Vec<String> = weapon_filter_options(&ds).into_iter().map(|o| o.label).collect();
        assert_eq!(labels, ["All", "A-Z", "Bow", "Sword"]);
    }

    #[test]
    fn character_options_list_elements() {
        let ds = fixtures::sample();
        let tokens: Vec<String> = character_filter_options(&ds).into_iter().map(|o| o.token).collect();
        assert_eq!(tokens, ["all", "a-z", "pyro", "anemo"]);
    }

    #[test]
    fn compare_names_orders_lowercase_first_on_case_ties() {
        assert_eq!(compare_names("amber", "Amber"), Ordering::Less);
        assert_eq!(compare_names("Zed", "abe"), Ordering::Greater);
        assert_eq!(compare_names("Same", "Same"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_beside_their_base_letter() {
        assert_eq!(compare_names("Émile", "Eula"), Ordering::Less);
        assert_eq!(compare_names("Émile", "Zed"), Ordering::Less);
        assert_eq!(compare_names("Eula", "Éula"), Ordering::Less);
        assert_eq!(compare_names("éula", "Éula"), Ordering::Less);

        let ds = Dataset::from_json_tables(
            "{}",
            "{}",
            "{}",
            "{}",
            r#"{
                "zed": {"name": "Zed", "icon": "z.png", "element_type": "pyro", "material_ids": []},
                "emile": {"name": "Émile", "icon": "e.png", "element_type": "pyro", "material_ids": []},
                "albedo": {"name": "Albedo", "icon": "a.png", "element_type": "pyro", "material_ids": []},
                "eula": {"name": "Eula", "icon": "u.png", "element_type": "pyro", "material_ids": []}
            }"#,
        )
        .unwrap();
        let names: Vec<&str> = filter_characters(&ds, &Filter::AlphabeticalAsc)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Albedo", "Émile", "Eula", "Zed"]);
    }

    #[test]
    fn capitalize_handles_empty() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("catalyst"), "Catalyst");
    }

    proptest! {
        #[test]
        fn sort_is_ordered_and_stable(names in prop::collection::vec("[a-cA-C]{0,3}", 0..12)) {
            let weapons: String = names
                .iter()
                .enumerate()
                .map(|(i, n)| format!(r#""w{i}": {{"name": "{n}", "type": "sword", "material_id": "m"}}"#))
                .collect::<Vec<_>>()
                .join(",");
            let ds = Dataset::from_json_tables("{}", "{}", "{}", &format!("{{{weapons}}}"), "{}").unwrap();

            let first = filter_weapons(&ds, &Filter::AlphabeticalAsc);
            let second = filter_weapons(&ds, &Filter::AlphabeticalAsc);
            prop_assert_eq!(&first, &second);

            for pair in first.windows(2) {
                let ord = compare_names(&pair[0].name, &pair[1].name);
                prop_assert!(ord != Ordering::Greater);
                if ord == Ordering::Equal {
                    let a: usize = pair[0].id[1..].parse().unwrap();
                    let b: usize = pair[1].id[1..].parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}
