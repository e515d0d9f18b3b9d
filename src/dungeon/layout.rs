//! # Dungeon Layout
//!
//! The assembled result of one generation request and the placement rules it
//! must satisfy.

use crate::utils::traversal;
use crate::{
    Difficulty, DungeonError, DungeonResult, EncounterMap, ItemMap, PathGraph, Position,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A generated dungeon level: the path graph plus its enemy and item
/// placements, tagged with the request parameters that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DungeonLayout {
    /// Opaque label stored with the layout. Never feeds the random draws.
    pub seed: String,
    pub size: u32,
    pub difficulty: Difficulty,
    pub paths: PathGraph,
    pub enemies: EncounterMap,
    pub items: ItemMap,
}

impl DungeonLayout {
    /// Identifier of the enemy waiting in `boss_arena`, if any.
    pub fn boss(&self) -> Option<&str> {
        self.enemies.holder_of(&Position::boss_arena())
    }

    /// Checks the graph, the step count and every placement rule.
    pub fn validate(&self) -> DungeonResult<()> {
        if self.size < 1 {
            return Err(DungeonError::InvalidSize(self.size));
        }

        self.paths.validate()?;

        match traversal::uniform_path_length(&self.paths) {
            Some(steps) if steps == self.size as usize => {}
            _ => {
                return Err(DungeonError::InvalidLayout(format!(
                    "every walk to boss_arena must take exactly {} steps",
                    self.size
                )))
            }
        }

        check_enemy_placements(&self.paths, &self.enemies)?;
        check_item_placements(&self.paths, &self.items, &self.enemies.occupied())
    }
}

/// Enemy placement rules: positions exist, `start` stays empty, no position
/// has two enemies, and whoever holds `boss_arena` holds nothing else.
pub fn check_enemy_placements(graph: &PathGraph, enemies: &EncounterMap) -> DungeonResult<()> {
    check_exclusive(graph, enemies, "enemy")?;

    for (id, positions) in enemies.iter() {
        if positions.iter().any(Position::is_start) {
            return Err(DungeonError::InvalidLayout(format!(
                "enemy {} is placed at start",
                id
            )));
        }
        if positions.iter().any(Position::is_boss_arena) && positions.len() != 1 {
            return Err(DungeonError::InvalidLayout(format!(
                "boss {} must occupy only boss_arena",
                id
            )));
        }
    }

    Ok(())
}

/// Item placement rules: positions exist, never reserved, never shared with
/// another item or with anything in `enemy_positions`.
pub fn check_item_placements(
    graph: &PathGraph,
    items: &ItemMap,
    enemy_positions: &HashSet<Position>,
) -> DungeonResult<()> {
    check_exclusive(graph, items, "item")?;

    for (id, positions) in items.iter() {
        if let Some(pos) = positions.iter().find(|pos| pos.is_reserved()) {
            return Err(DungeonError::InvalidLayout(format!(
                "item {} is placed at reserved position {}",
                id, pos
            )));
        }
        if let Some(pos) = positions.iter().find(|pos| enemy_positions.contains(pos)) {
            return Err(DungeonError::InvalidLayout(format!(
                "item {} shares position {} with an enemy",
                id, pos
            )));
        }
    }

    Ok(())
}

fn check_exclusive(graph: &PathGraph, spawns: &EncounterMap, kind: &str) -> DungeonResult<()> {
    let mut seen = HashSet::new();

    for (id, positions) in spawns.iter() {
        for pos in positions {
            if !graph.contains(pos) {
                return Err(DungeonError::InvalidLayout(format!(
                    "{} {} is placed at unknown position {}",
                    kind, id, pos
                )));
            }
            if !seen.insert(pos) {
                return Err(DungeonError::InvalidLayout(format!(
                    "position {} holds more than one {}",
                    pos, kind
                )));
            }
        }
    }

    Ok(())
}
