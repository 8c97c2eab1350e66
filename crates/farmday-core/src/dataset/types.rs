//! Record shapes for the five dataset tables.
//!
//! Each table file is a JSON object keyed by a stable string id. The id is
//! not repeated inside the record, so it is filled in from the key after
//! decoding (see [`super::Dataset::from_json_tables`]).

use serde::{Deserialize, Deserializer, Serialize};

use crate::day::Day;

/// Elemental affinity of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// CSS-style colour used for badges and highlights.
    #[serde(default)]
    pub color: String,
}

/// An ascension material farmed from a domain on certain weekdays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub domain_id: String,
    /// Weekday names as published, compared case-insensitively.
    /// Entries that are not strings are dropped at decode time.
    #[serde(default, deserialize_with = "deserialize_schedule")]
    pub domain_schedule: Vec<String>,
}

impl Material {
    /// Whether the material's domain is open on `day`.
    pub fn is_farmable_on(&self, day: Day) -> bool {
        let wanted = day.name();
        self.domain_schedule
            .iter()
            .any(|entry| entry.to_lowercase() == wanted)
    }
}

/// A farmable location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub region_icon: String,
}

/// A weapon with exactly one ascension material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(rename = "type")]
    pub weapon_type: String,
    pub material_id: String,
}

/// A playable character with one or more ascension materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCharacter")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub element_type: String,
    pub material_ids: Vec<String>,
}

/// Wire shape of a character. Older records carry a single `material_id`.
#[derive(Deserialize)]
struct RawCharacter {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    icon: String,
    element_type: String,
    #[serde(default)]
    material_ids: Option<Vec<String>>,
    #[serde(default)]
    material_id: Option<String>,
}

impl From<RawCharacter> for Character {
    fn from(raw: RawCharacter) -> Self {
        let material_ids = match (raw.material_ids, raw.material_id) {
            (Some(ids), _) => ids,
            (None, Some(id)) => vec![id],
            (None, None) => Vec::new(),
        };
        Self {
            id: raw.id,
            name: raw.name,
            icon: raw.icon,
            element_type: raw.element_type,
            material_ids,
        }
    }
}

fn deserialize_schedule<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| match entry {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_material_id_becomes_single_entry_list() {
        let json = r#"{"name":"Keqing","icon":"k.png","element_type":"electro","material_id":"prosperity"}"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.material_ids, vec!["prosperity".to_string()]);
    }

    #[test]
    fn material_ids_win_over_legacy_field() {
        let json = r#"{"name":"T","element_type":"anemo","material_ids":["a","b"],"material_id":"c"}"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.material_ids, vec!["a", "b"]);
    }

    #[test]
    fn schedule_drops_non_string_entries() {
        let json = r#"{"name":"M","domain_id":"d","domain_schedule":["Monday", 3, null, "sunday"]}"#;
        let material: Material = serde_json::from_str(json).unwrap();
        assert_eq!(material.domain_schedule, vec!["Monday", "sunday"]);
        assert!(material.is_farmable_on(Day::MONDAY));
        assert!(!material.is_farmable_on(Day::WEDNESDAY));
    }

    #[test]
    fn missing_or_null_schedule_is_empty() {
        let missing: Material = serde_json::from_str(r#"{"name":"M","domain_id":"d"}"#).unwrap();
        let null: Material =
            serde_json::from_str(r#"{"name":"M","domain_id":"d","domain_schedule":null}"#).unwrap();
        assert!(missing.domain_schedule.is_empty());
        assert!(null.domain_schedule.is_empty());
        assert!(Day::all().all(|d| !missing.is_farmable_on(d)));
    }

    #[test]
    fn weapon_type_field_is_renamed() {
        let weapon: Weapon =
            serde_json::from_str(r#"{"name":"W","type":"bow","material_id":"m"}"#).unwrap();
        assert_eq!(weapon.weapon_type, "bow");
        let back = serde_json::to_value(&weapon).unwrap();
        assert_eq!(back["type"], "bow");
    }
}
