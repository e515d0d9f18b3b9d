//! Property tests for path graph structure and placement exclusivity.

use brc_dungeon::generation::utils::create_rng;
use brc_dungeon::utils::{hop_depths, is_acyclic, reaching, uniform_path_length};
use brc_dungeon::{
    build_graph, Catalog, Difficulty, DungeonGenerator, GenerationRequest, Position,
};
use proptest::prelude::*;

fn arb_difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn arb_ids(prefix: &'static str) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(0u8..50, 0..6)
        .prop_map(move |ids| ids.into_iter().map(|id| format!("{}{}", prefix, id)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generated_graphs_lead_everywhere_to_the_boss(seed in any::<u64>(), size in 1u32..=12) {
        let graph = build_graph(size, &mut create_rng(seed)).unwrap();

        prop_assert!(graph.contains(&Position::start()));
        prop_assert!(graph.contains(&Position::boss_arena()));
        prop_assert!(graph.successors(&Position::boss_arena()).is_empty());
        prop_assert!(!graph.successors(&Position::start()).is_empty());
        prop_assert!(is_acyclic(&graph));
        prop_assert_eq!(reaching(&graph, &Position::boss_arena()).len(), graph.len());
        prop_assert!(graph.orphans().is_empty(), "seed={seed}, size={size} left orphans");
        prop_assert!(graph.validate().is_ok());
    }

    #[test]
    fn every_walk_to_the_boss_takes_size_steps(seed in any::<u64>(), size in 1u32..=12) {
        let graph = build_graph(size, &mut create_rng(seed)).unwrap();
        prop_assert_eq!(uniform_path_length(&graph), Some(size as usize));

        let depths = hop_depths(&graph);
        for pos in graph.positions() {
            if let Some(depth) = pos.generated_depth() {
                prop_assert_eq!(depths[pos], depth as usize);
            }
        }
    }

    #[test]
    fn placements_stay_exclusive(
        seed in any::<u64>(),
        size in 1u32..=10,
        difficulty in arb_difficulty(),
        normal in arb_ids("n"),
        bosses in arb_ids("b"),
        items in arb_ids("i"),
    ) {
        let request = GenerationRequest::new(size, difficulty, Catalog::new(normal, bosses.clone(), items));
        let layout = DungeonGenerator::validating()
            .generate_layout(&request, &mut create_rng(seed))
            .unwrap();

        prop_assert!(layout.validate().is_ok());

        let enemy_positions = layout.enemies.occupied();
        let item_positions = layout.items.occupied();
        prop_assert!(enemy_positions.is_disjoint(&item_positions));
        prop_assert!(!enemy_positions.contains(&Position::start()));
        prop_assert!(!item_positions.contains(&Position::start()));
        prop_assert!(!item_positions.contains(&Position::boss_arena()));

        match layout.boss() {
            Some(boss) => {
                prop_assert!(bosses.iter().any(|id| id == boss));
                prop_assert_eq!(layout.enemies.holders_of(&Position::boss_arena()).len(), 1);
                prop_assert_eq!(layout.enemies.positions_of(boss), &[Position::boss_arena()]);
            }
            None => {
                prop_assert!(bosses.is_empty());
            }
        }
    }
}
