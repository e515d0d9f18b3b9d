//! # Encounter Generation
//!
//! Enemy placement over a finished path graph. Normal enemies are rolled per
//! position against the difficulty's enemy rate; the boss is placed in
//! `boss_arena` unconditionally.

use crate::dungeon::check_enemy_placements;
use crate::{
    Catalog, Difficulty, DungeonError, DungeonResult, EncounterMap, Generator, PathGraph,
    Position,
};
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Places normal enemies and the boss on `graph`.
///
/// Every position except `start` and `boss_arena` is visited once in creation
/// order and receives at most one enemy. An empty `normal_ids` or `boss_ids`
/// simply leaves those enemies out.
///
/// # Examples
///
/// ```
/// use brc_dungeon::{build_graph, place_enemies, Difficulty, Position};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let graph = build_graph(4, &mut rng).unwrap();
/// let normal = vec!["1".to_string(), "2".to_string()];
/// let bosses = vec!["27".to_string()];
///
/// let enemies = place_enemies(&graph, Difficulty::Hard, &normal, &bosses, &mut rng);
/// assert_eq!(enemies.positions_of("27"), &[Position::boss_arena()]);
/// ```
pub fn place_enemies<R: Rng + ?Sized>(
    graph: &PathGraph,
    difficulty: Difficulty,
    normal_ids: &[String],
    boss_ids: &[String],
    rng: &mut R,
) -> EncounterMap {
    let profile = difficulty.profile();
    let mut enemies = EncounterMap::new();

    if normal_ids.is_empty() {
        debug!("Normal enemy catalog is empty, skipping normal spawns");
    }

    for pos in graph.spawn_candidates() {
        let roll: f64 = rng.gen();
        if roll >= profile.enemy_rate {
            continue;
        }
        if let Some(id) = normal_ids.choose(rng) {
            trace!("Enemy {} spawns at {}", id, pos);
            enemies.place(id.clone(), pos.clone());
        }
    }

    match boss_ids.choose(rng) {
        Some(boss) => {
            trace!("Boss {} guards boss_arena", boss);
            enemies.assign(boss.clone(), vec![Position::boss_arena()]);
        }
        None => warn!("Boss catalog is empty, boss_arena is left unguarded"),
    }

    debug!(
        "Placed {} enemies across {} identifiers on {} difficulty",
        enemies.placement_count(),
        enemies.len(),
        difficulty
    );

    enemies
}

/// Enemy generator for one graph and catalog.
#[derive(Debug, Clone)]
pub struct EncounterPopulator<'a> {
    pub graph: &'a PathGraph,
    pub difficulty: Difficulty,
    pub catalog: &'a Catalog,
}

impl<'a> EncounterPopulator<'a> {
    pub fn new(graph: &'a PathGraph, difficulty: Difficulty, catalog: &'a Catalog) -> Self {
        Self {
            graph,
            difficulty,
            catalog,
        }
    }
}

impl Generator<EncounterMap> for EncounterPopulator<'_> {
    fn generate(&self, rng: &mut StdRng) -> DungeonResult<EncounterMap> {
        Ok(place_enemies(
            self.graph,
            self.difficulty,
            &self.catalog.normal_enemies,
            &self.catalog.bosses,
            rng,
        ))
    }

    fn validate(&self, enemies: &EncounterMap) -> DungeonResult<()> {
        check_enemy_placements(self.graph, enemies)?;

        let arena = Position::boss_arena();
        match enemies.holder_of(&arena) {
            Some(boss) if !self.catalog.bosses.iter().any(|id| id == boss) => {
                Err(DungeonError::InvalidLayout(format!(
                    "boss_arena holds {} which is not in the boss catalog",
                    boss
                )))
            }
            None if !self.catalog.bosses.is_empty() => Err(DungeonError::InvalidLayout(
                "boss_arena has no boss".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn generator_type(&self) -> &'static str {
        "EncounterPopulator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils::create_rng;
    use crate::build_graph;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_boss_always_in_arena() {
        let bosses = ids(&["27", "67"]);
        for seed in 0..20 {
            let mut rng = create_rng(seed);
            let graph = build_graph(6, &mut rng).unwrap();
            let enemies = place_enemies(&graph, Difficulty::Easy, &ids(&["1"]), &bosses, &mut rng);

            let holders = enemies.holders_of(&Position::boss_arena());
            assert_eq!(holders.len(), 1);
            assert!(bosses.iter().any(|boss| boss == holders[0]));
            assert_eq!(enemies.positions_of(holders[0]), &[Position::boss_arena()]);
        }
    }

    #[test]
    fn test_never_spawns_at_start() {
        let mut rng = create_rng(8);
        let graph = build_graph(8, &mut rng).unwrap();
        let enemies = place_enemies(&graph, Difficulty::Hard, &ids(&["1", "2"]), &[], &mut rng);
        assert!(enemies.holder_of(&Position::start()).is_none());
        assert!(enemies.holder_of(&Position::boss_arena()).is_none());
    }

    #[test]
    fn test_empty_normal_catalog_places_only_boss() {
        let mut rng = create_rng(11);
        let graph = build_graph(7, &mut rng).unwrap();
        let enemies = place_enemies(&graph, Difficulty::Hard, &[], &ids(&["67"]), &mut rng);

        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies.positions_of("67"), &[Position::boss_arena()]);
    }

    #[test]
    fn test_empty_catalogs_place_nothing() {
        let mut rng = create_rng(12);
        let graph = build_graph(5, &mut rng).unwrap();
        let enemies = place_enemies(&graph, Difficulty::Medium, &[], &[], &mut rng);
        assert!(enemies.is_empty());
    }

    #[test]
    fn test_boss_overwrites_normal_placements() {
        // The same id in both catalogs keeps only its arena placement
        let shared = ids(&["9"]);
        let mut rng = create_rng(4);
        let graph = build_graph(8, &mut rng).unwrap();
        let enemies = place_enemies(&graph, Difficulty::Hard, &shared, &shared, &mut rng);

        assert_eq!(enemies.positions_of("9"), &[Position::boss_arena()]);
    }

    #[test]
    fn test_at_most_one_enemy_per_position() {
        let mut rng = create_rng(21);
        let graph = build_graph(10, &mut rng).unwrap();
        let normal = ids(&["1", "2", "3", "4", "5"]);
        let enemies = place_enemies(&graph, Difficulty::Hard, &normal, &ids(&["27"]), &mut rng);

        for pos in graph.positions() {
            assert!(enemies.holders_of(pos).len() <= 1);
        }
    }

    #[test]
    fn test_populator_validates_its_output() {
        let catalog = Catalog::fallback();
        let mut rng = create_rng(77);
        let graph = build_graph(9, &mut rng).unwrap();
        let populator = EncounterPopulator::new(&graph, Difficulty::Medium, &catalog);

        let enemies = populator.generate(&mut rng).unwrap();
        assert!(populator.validate(&enemies).is_ok());
        assert_eq!(populator.generator_type(), "EncounterPopulator");
    }

    #[test]
    fn test_populator_rejects_foreign_boss() {
        let catalog = Catalog::fallback();
        let mut rng = create_rng(78);
        let graph = build_graph(3, &mut rng).unwrap();
        let populator = EncounterPopulator::new(&graph, Difficulty::Easy, &catalog);

        let mut enemies = EncounterMap::new();
        enemies.assign("999", vec![Position::boss_arena()]);
        assert!(populator.validate(&enemies).is_err());

        assert!(populator.validate(&EncounterMap::new()).is_err());
    }
}
