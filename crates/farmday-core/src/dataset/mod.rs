//! The static relational dataset.
//!
//! Five read-only tables (elements, materials, domains, weapons, characters)
//! decoded once at startup. Tables keep the key order of the source JSON
//! object, which is the "dataset order" every unsorted view preserves.

mod loader;
mod types;

pub use loader::TABLE_FILES;
pub use types::{Character, Domain, Element, Material, Weapon};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::DatasetError;

/// An id-keyed table in dataset order.
pub type Table<T> = IndexMap<String, T>;

const EMBEDDED_ELEMENTS: &str = include_str!("../../data/elements.json");
const EMBEDDED_MATERIALS: &str = include_str!("../../data/materials.json");
const EMBEDDED_DOMAINS: &str = include_str!("../../data/domains.json");
const EMBEDDED_WEAPONS: &str = include_str!("../../data/weapons.json");
const EMBEDDED_CHARACTERS: &str = include_str!("../../data/characters.json");

/// The decoded dataset. Immutable after construction.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dataset {
    elements: Table<Element>,
    materials: Table<Material>,
    domains: Table<Domain>,
    weapons: Table<Weapon>,
    characters: Table<Character>,
}

/// A reference from one record to an id that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DanglingReference {
    CharacterMaterial { character: String, material: String },
    CharacterElement { character: String, element: String },
    WeaponMaterial { weapon: String, material: String },
    MaterialDomain { material: String, domain: String },
}

trait Keyed {
    fn set_id(&mut self, id: &str);
}

macro_rules! impl_keyed {
    ($($ty:ty),*) => {
        $(impl Keyed for $ty {
            fn set_id(&mut self, id: &str) {
                self.id = id.to_string();
            }
        })*
    };
}

impl_keyed!(Element, Material, Domain, Weapon, Character);

fn decode_table<T>(table: &'static str, json: &str) -> Result<Table<T>, DatasetError>
where
    T: DeserializeOwned + Keyed,
{
    let mut rows: Table<T> = serde_json::from_str(json)
        .map_err(|source| DatasetError::ParseFailed { table, source })?;
    for (id, row) in rows.iter_mut() {
        row.set_id(id);
    }
    Ok(rows)
}

impl Dataset {
    /// Decode the five tables from their JSON documents.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::ParseFailed`] naming the first table that
    /// does not decode.
    pub fn from_json_tables(
        elements: &str,
        materials: &str,
        domains: &str,
        weapons: &str,
        characters: &str,
    ) -> Result<Self, DatasetError> {
        let dataset = Self {
            elements: decode_table("elements", elements)?,
            materials: decode_table("materials", materials)?,
            domains: decode_table("domains", domains)?,
            weapons: decode_table("weapons", weapons)?,
            characters: decode_table("characters", characters)?,
        };
        tracing::debug!(
            elements = dataset.elements.len(),
            materials = dataset.materials.len(),
            domains = dataset.domains.len(),
            weapons = dataset.weapons.len(),
            characters = dataset.characters.len(),
            "dataset decoded"
        );
        Ok(dataset)
    }

    /// The sample dataset bundled with the library.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled JSON is malformed.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json_tables(
            EMBEDDED_ELEMENTS,
            EMBEDDED_MATERIALS,
            EMBEDDED_DOMAINS,
            EMBEDDED_WEAPONS,
            EMBEDDED_CHARACTERS,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
            && self.materials.is_empty()
            && self.domains.is_empty()
            && self.weapons.is_empty()
            && self.characters.is_empty()
    }

    // ── Tables ───────────────────────────────────────────────────────

    pub fn elements(&self) -> &Table<Element> {
        &self.elements
    }

    pub fn materials(&self) -> &Table<Material> {
        &self.materials
    }

    pub fn domains(&self) -> &Table<Domain> {
        &self.domains
    }

    pub fn weapons(&self) -> &Table<Weapon> {
        &self.weapons
    }

    pub fn characters(&self) -> &Table<Character> {
        &self.characters
    }

    // ── Lookups ──────────────────────────────────────────────────────

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    pub fn domain(&self, id: &str) -> Option<&Domain> {
        self.domains.get(id)
    }

    pub fn weapon(&self, id: &str) -> Option<&Weapon> {
        self.weapons.get(id)
    }

    pub fn character(&self, id: &str) -> Option<&Character> {
        self.characters.get(id)
    }

    /// Every reference that does not resolve, in dataset order.
    ///
    /// Dangling references are not errors: the affected entity is simply
    /// left out of availability and detail views.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut out = Vec::new();

        for (id, character) in &self.characters {
            if !self.elements.contains_key(&character.element_type) {
                out.push(DanglingReference::CharacterElement {
                    character: id.clone(),
                    element: character.element_type.clone(),
                });
            }
            for material in &character.material_ids {
                if !self.materials.contains_key(material) {
                    out.push(DanglingReference::CharacterMaterial {
                        character: id.clone(),
                        material: material.clone(),
                    });
                }
            }
        }

        for (id, weapon) in &self.weapons {
            if !self.materials.contains_key(&weapon.material_id) {
                out.push(DanglingReference::WeaponMaterial {
                    weapon: id.clone(),
                    material: weapon.material_id.clone(),
                });
            }
        }

        for (id, material) in &self.materials {
            if !self.domains.contains_key(&material.domain_id) {
                out.push(DanglingReference::MaterialDomain {
                    material: id.clone(),
                    domain: material.domain_id.clone(),
                });
            }
        }

        out
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Dataset;

    /// Small hand-written dataset shared by unit tests across modules.
    pub fn sample() -> Dataset {
        Dataset::from_json_tables(
            r##"{
                "pyro": {"name": "Pyro", "color": "#ef7938"},
                "anemo": {"name": "Anemo", "color": "#74c2a8"}
            }"##,
            r#"{
                "freedom": {"name": "Freedom", "icon": "f.png", "domain_id": "rift", "domain_schedule": ["Monday", "Thursday", "Sunday"]},
                "ballad": {"name": "Ballad", "icon": "b.png", "domain_id": "rift", "domain_schedule": ["WEDNESDAY", "saturday", "Sunday"]},
                "tooth": {"name": "Wolf Tooth", "icon": "t.png", "domain_id": "garden", "domain_schedule": ["Tuesday", "Friday"]},
                "lost": {"name": "Lost Tile", "icon": "l.png", "domain_id": "nowhere", "domain_schedule": []}
            }"#,
            r#"{
                "rift": {"name": "Forsaken Rift", "region": "Mondstadt", "region_icon": "mond.png"},
                "garden": {"name": "Cecilia Garden", "region": "Mondstadt", "region_icon": "mond.png"}
            }"#,
            r#"{
                "harp": {"name": "Skyward Harp", "icon": "harp.png", "type": "bow", "material_id": "tooth"},
                "blade": {"name": "Aquila Favonia", "icon": "aq.png", "type": "sword", "material_id": "freedom"},
                "amos": {"name": "Amos' Bow", "icon": "amos.png", "type": "bow", "material_id": "ballad"},
                "ghost": {"name": "Ghost Blade", "icon": "g.png", "type": "sword", "material_id": "missing"}
            }"#,
            r#"{
                "venti": {"name": "Venti", "icon": "v.png", "element_type": "anemo", "material_ids": ["ballad"]},
                "diluc": {"name": "Diluc", "icon": "d.png", "element_type": "pyro", "material_ids": ["tooth"]},
                "amber": {"name": "amber", "icon": "a.png", "element_type": "pyro", "material_id": "freedom"},
                "traveler": {"name": "Traveler", "icon": "t.png", "element_type": "anemo", "material_ids": ["missing", "freedom", "ballad"]},
                "stray": {"name": "Stray", "icon": "s.png", "element_type": "void", "material_ids": ["missing"]}
            }"#,
        )
        .expect("fixture dataset decodes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_filled_from_keys() {
        let ds = fixtures::sample();
        assert_eq!(ds.character("venti").unwrap().id, "venti");
        assert_eq!(ds.material("tooth").unwrap().id, "tooth");
        assert_eq!(ds.domain("rift").unwrap().name, "Forsaken Rift");
    }

    #[test]
    fn tables_keep_source_order() {
        let ds = fixtures::sample();
        let ids: Vec<&str> = ds.characters().keys().map(String::as_str).collect();
        assert_eq!(ids, ["venti", "diluc", "amber", "traveler", "stray"]);
    }

    #[test]
    fn parse_failure_names_the_table() {
        let err = Dataset::from_json_tables("{}", "{}", "{}", "[1, 2]", "{}").unwrap_err();
        assert!(matches!(err, DatasetError::ParseFailed { table: "weapons", .. }));
    }

    #[test]
    fn dangling_references_are_reported() {
        let ds = fixtures::sample();
        let dangling = ds.dangling_references();
        assert!(dangling.contains(&DanglingReference::CharacterElement {
            character: "stray".into(),
            element: "void".into(),
        }));
        assert!(dangling.contains(&DanglingReference::WeaponMaterial {
            weapon: "ghost".into(),
            material: "missing".into(),
        }));
        assert!(dangling.contains(&DanglingReference::MaterialDomain {
            material: "lost".into(),
            domain: "nowhere".into(),
        }));
        assert_eq!(dangling.len(), 5);
    }

    #[test]
    fn embedded_dataset_is_consistent() {
        let ds = Dataset::embedded().unwrap();
        assert!(!ds.characters().is_empty());
        assert!(!ds.weapons().is_empty());
        assert!(ds.dangling_references().is_empty());
    }

    #[test]
    fn default_dataset_is_empty() {
        assert!(Dataset::default().is_empty());
        assert!(!fixtures::sample().is_empty());
    }
}
