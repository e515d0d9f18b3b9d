//! # Spawn Maps
//!
//! Records of which catalog identifier occupies which positions.

use crate::Position;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Mapping from a catalog identifier to the positions it was placed at.
///
/// Identifiers are kept sorted so serialized output is stable; each list
/// keeps the order positions were assigned in.
///
/// # Examples
///
/// ```
/// use brc_dungeon::{Position, SpawnMap};
///
/// let mut enemies = SpawnMap::new();
/// enemies.place("7", Position::at(1, 0));
/// enemies.place("7", Position::at(2, 1));
///
/// assert_eq!(enemies.positions_of("7").len(), 2);
/// assert_eq!(enemies.holder_of(&Position::at(2, 1)), Some("7"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpawnMap(BTreeMap<String, Vec<Position>>);

/// Enemy identifier to the positions that enemy appears at.
pub type EncounterMap = SpawnMap;

/// Item identifier to the positions that item lies at.
pub type ItemMap = SpawnMap;

impl SpawnMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `pos` to the list of `id`, creating the list if absent.
    pub fn place(&mut self, id: impl Into<String>, pos: Position) {
        self.0.entry(id.into()).or_default().push(pos);
    }

    /// Replaces whatever `id` held with exactly `positions`.
    pub fn assign(&mut self, id: impl Into<String>, positions: Vec<Position>) {
        self.0.insert(id.into(), positions);
    }

    /// Positions recorded for `id`.
    pub fn positions_of(&self, id: &str) -> &[Position] {
        self.0.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First identifier holding `pos`.
    pub fn holder_of(&self, pos: &Position) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, positions)| positions.contains(pos))
            .map(|(id, _)| id.as_str())
    }

    /// Identifiers holding `pos`. More than one means the map is malformed.
    pub fn holders_of(&self, pos: &Position) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, positions)| positions.contains(pos))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Every position that holds something.
    pub fn occupied(&self) -> HashSet<Position> {
        self.0.values().flatten().cloned().collect()
    }

    /// Total number of placements across all identifiers.
    pub fn placement_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Position])> + '_ {
        self.0
            .iter()
            .map(|(id, positions)| (id.as_str(), positions.as_slice()))
    }

    /// Number of distinct identifiers placed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_appends_in_order() {
        let mut map = SpawnMap::new();
        map.place("a", Position::at(1, 0));
        map.place("a", Position::at(1, 2));
        map.place("b", Position::at(2, 0));

        assert_eq!(map.len(), 2);
        assert_eq!(map.placement_count(), 3);
        assert_eq!(map.positions_of("a"), &[Position::at(1, 0), Position::at(1, 2)]);
        assert!(map.positions_of("missing").is_empty());
    }

    #[test]
    fn test_assign_overwrites() {
        let mut map = SpawnMap::new();
        map.place("27", Position::at(1, 0));
        map.assign("27", vec![Position::boss_arena()]);

        assert_eq!(map.positions_of("27"), &[Position::boss_arena()]);
        assert_eq!(map.holder_of(&Position::at(1, 0)), None);
    }

    #[test]
    fn test_occupied_and_holders() {
        let mut map = SpawnMap::new();
        map.place("a", Position::at(1, 0));
        map.place("b", Position::at(1, 0));
        map.place("b", Position::at(2, 0));

        let occupied = map.occupied();
        assert_eq!(occupied.len(), 2);
        assert_eq!(map.holders_of(&Position::at(1, 0)), vec!["a", "b"]);
    }

    #[test]
    fn test_serializes_as_sorted_object() {
        let mut map = SpawnMap::new();
        map.place("b", Position::at(2, 0));
        map.place("a", Position::at(1, 0));

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"a":["pos_1_0"],"b":["pos_2_0"]}"#);
    }
}
