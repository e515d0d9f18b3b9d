//! # Entity Catalogs
//!
//! Identifier lists the populators draw enemies and items from.
//!
//! Catalogs normally come from external enemy and item registries. When a
//! registry cannot be read the caller substitutes [`Catalog::fallback`] so a
//! dungeon can still be generated.

use crate::DungeonResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Identifiers available for placement.
///
/// An empty list is valid and means "spawn nothing of that kind".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Enemies that may appear on any non-reserved position
    #[serde(rename = "normalEnemyIds", default)]
    pub normal_enemies: Vec<String>,
    /// Enemies eligible to guard `boss_arena`
    #[serde(rename = "bossEnemyIds", default)]
    pub bosses: Vec<String>,
    #[serde(rename = "itemIds", default)]
    pub items: Vec<String>,
}

impl Catalog {
    pub fn new(normal_enemies: Vec<String>, bosses: Vec<String>, items: Vec<String>) -> Self {
        Self {
            normal_enemies,
            bosses,
            items,
        }
    }

    /// The fixed catalog used when registries are unavailable: normal enemies
    /// `"1"` to `"10"`, bosses `"27"` and `"67"`, items `"1"` to `"3"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use brc_dungeon::Catalog;
    ///
    /// let catalog = Catalog::fallback();
    /// assert_eq!(catalog.normal_enemies.len(), 10);
    /// assert_eq!(catalog.bosses, vec!["27", "67"]);
    /// ```
    pub fn fallback() -> Self {
        Self {
            normal_enemies: (1..=10).map(|id| id.to_string()).collect(),
            bosses: vec!["27".to_string(), "67".to_string()],
            items: vec!["1".to_string(), "2".to_string(), "3".to_string()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normal_enemies.is_empty() && self.bosses.is_empty() && self.items.is_empty()
    }
}

/// One enemy record as published by the enemy registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyRecord {
    pub id: String,
    #[serde(default)]
    pub is_boss: bool,
}

/// One item record as published by the item registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
}

/// Snapshot of both registries, loadable from a JSON file.
///
/// ```json
/// {
///   "enemies": [{ "id": "1", "isBoss": false }, { "id": "27", "isBoss": true }],
///   "items": [{ "id": "potion" }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub enemies: Vec<EnemyRecord>,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl Registry {
    pub fn from_json(json: &str) -> DungeonResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> DungeonResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Splits enemy records into normal and boss lists.
    pub fn to_catalog(&self) -> Catalog {
        let (bosses, normal): (Vec<&EnemyRecord>, Vec<&EnemyRecord>) =
            self.enemies.iter().partition(|record| record.is_boss);

        Catalog {
            normal_enemies: normal.into_iter().map(|record| record.id.clone()).collect(),
            bosses: bosses.into_iter().map(|record| record.id.clone()).collect(),
            items: self.items.iter().map(|record| record.id.clone()).collect(),
        }
    }
}

/// Reads a registry file, substituting [`Catalog::fallback`] when the file is
/// missing or malformed.
pub fn load_catalog_or_fallback(path: &Path) -> Catalog {
    match Registry::load(path) {
        Ok(registry) => {
            let catalog = registry.to_catalog();
            log::info!(
                "Loaded registry {}: {} normal enemies, {} bosses, {} items",
                path.display(),
                catalog.normal_enemies.len(),
                catalog.bosses.len(),
                catalog.items.len()
            );
            catalog
        }
        Err(e) => {
            log::warn!(
                "Could not read registry {} ({}), using fallback catalog",
                path.display(),
                e
            );
            Catalog::fallback()
        }
    }
}
