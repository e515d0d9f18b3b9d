//! # Item Generation
//!
//! Item placement over positions left free after enemy placement.

use crate::dungeon::check_item_placements;
use crate::{Difficulty, DungeonResult, Generator, ItemMap, PathGraph, Position};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Places items on free positions of `graph`.
///
/// Positions in `occupied` are skipped without consuming a roll. Each
/// position that receives an item is added to `occupied`, so after the call
/// the set covers enemies and items alike.
///
/// # Examples
///
/// ```
/// use brc_dungeon::{build_graph, place_items, Difficulty, Position};
/// use rand::{rngs::StdRng, SeedableRng};
/// use std::collections::HashSet;
///
/// let mut rng = StdRng::seed_from_u64(5);
/// let graph = build_graph(6, &mut rng).unwrap();
/// let mut occupied: HashSet<Position> = graph.spawn_candidates().cloned().collect();
///
/// // Nothing is free, so nothing is placed
/// let items = place_items(&graph, Difficulty::Easy, &["a".to_string()], &mut occupied, &mut rng);
/// assert!(items.is_empty());
/// ```
pub fn place_items<R: Rng + ?Sized>(
    graph: &PathGraph,
    difficulty: Difficulty,
    item_ids: &[String],
    occupied: &mut HashSet<Position>,
    rng: &mut R,
) -> ItemMap {
    let profile = difficulty.profile();
    let mut items = ItemMap::new();

    if item_ids.is_empty() {
        debug!("Item catalog is empty, skipping item spawns");
    }

    for pos in graph.spawn_candidates() {
        if occupied.contains(pos) {
            continue;
        }

        let roll: f64 = rng.gen();
        if roll >= profile.item_rate {
            continue;
        }
        if let Some(id) = item_ids.choose(rng) {
            trace!("Item {} lies at {}", id, pos);
            items.place(id.clone(), pos.clone());
            occupied.insert(pos.clone());
        }
    }

    debug!(
        "Placed {} items across {} identifiers on {} difficulty",
        items.placement_count(),
        items.len(),
        difficulty
    );

    items
}

/// Item generator for one graph, catalog and set of taken positions.
#[derive(Debug, Clone)]
pub struct ItemPopulator<'a> {
    pub graph: &'a PathGraph,
    pub difficulty: Difficulty,
    pub item_ids: &'a [String],
    /// Positions already holding an enemy
    pub occupied: &'a HashSet<Position>,
}

impl<'a> ItemPopulator<'a> {
    pub fn new(
        graph: &'a PathGraph,
        difficulty: Difficulty,
        item_ids: &'a [String],
        occupied: &'a HashSet<Position>,
    ) -> Self {
        Self {
            graph,
            difficulty,
            item_ids,
            occupied,
        }
    }
}

impl Generator<ItemMap> for ItemPopulator<'_> {
    fn generate(&self, rng: &mut StdRng) -> DungeonResult<ItemMap> {
        let mut occupied = self.occupied.clone();
        Ok(place_items(
            self.graph,
            self.difficulty,
            self.item_ids,
            &mut occupied,
            rng,
        ))
    }

    fn validate(&self, items: &ItemMap) -> DungeonResult<()> {
        check_item_placements(self.graph, items, self.occupied)
    }

    fn generator_type(&self) -> &'static str {
        "ItemPopulator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_graph;
    use crate::generation::utils::create_rng;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_items_skip_reserved_and_occupied() {
        let mut rng = create_rng(14);
        let graph = build_graph(10, &mut rng).unwrap();
        let taken: HashSet<Position> = graph.spawn_candidates().step_by(2).cloned().collect();
        let mut occupied = taken.clone();

        let items = place_items(&graph, Difficulty::Easy, &ids(&["a", "b", "c"]), &mut occupied, &mut rng);

        for (_, positions) in items.iter() {
            for pos in positions {
                assert!(!pos.is_reserved());
                assert!(!taken.contains(pos));
                assert!(occupied.contains(pos));
            }
        }
    }

    #[test]
    fn test_placed_items_are_added_to_occupied() {
        let mut rng = create_rng(15);
        let graph = build_graph(10, &mut rng).unwrap();
        let mut occupied = HashSet::new();

        let items = place_items(&graph, Difficulty::Easy, &ids(&["a"]), &mut occupied, &mut rng);
        assert_eq!(occupied, items.occupied());
    }

    #[test]
    fn test_empty_catalog_places_nothing() {
        let mut rng = create_rng(16);
        let graph = build_graph(8, &mut rng).unwrap();
        let mut occupied = HashSet::new();

        let items = place_items(&graph, Difficulty::Easy, &[], &mut occupied, &mut rng);
        assert!(items.is_empty());
        assert!(occupied.is_empty());
    }

    #[test]
    fn test_single_step_dungeon_has_no_item_slots() {
        let mut rng = create_rng(17);
        let graph = build_graph(1, &mut rng).unwrap();
        let mut occupied = HashSet::new();

        let items = place_items(&graph, Difficulty::Easy, &ids(&["a"]), &mut occupied, &mut rng);
        assert!(items.is_empty());
    }

    #[test]
    fn test_populator_leaves_caller_set_untouched() {
        let mut rng = create_rng(18);
        let graph = build_graph(9, &mut rng).unwrap();
        let occupied: HashSet<Position> = HashSet::new();
        let catalog = ids(&["a", "b"]);
        let populator = ItemPopulator::new(&graph, Difficulty::Easy, &catalog, &occupied);

        let items = populator.generate(&mut rng).unwrap();
        assert!(populator.validate(&items).is_ok());
        assert!(occupied.is_empty());
        assert_eq!(populator.generator_type(), "ItemPopulator");
    }

    #[test]
    fn test_populator_rejects_item_on_enemy() {
        let mut rng = create_rng(19);
        let graph = build_graph(4, &mut rng).unwrap();
        let enemy_pos = graph.spawn_candidates().next().cloned().unwrap();
        let occupied: HashSet<Position> = [enemy_pos.clone()].into_iter().collect();
        let catalog = ids(&["a"]);
        let populator = ItemPopulator::new(&graph, Difficulty::Easy, &catalog, &occupied);

        let mut items = ItemMap::new();
        items.place("a", enemy_pos);
        assert!(populator.validate(&items).is_err());
    }
}
