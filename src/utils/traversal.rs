//! # Graph Traversal
//!
//! Reachability and ordering queries over a [`PathGraph`].

use crate::{PathGraph, Position};
use pathfinding::directed::bfs::bfs_reach;
use pathfinding::directed::topological_sort::topological_sort;
use std::collections::{HashMap, HashSet, VecDeque};

/// All positions reachable from `origin` by following edges forward,
/// `origin` included.
pub fn reachable_from(graph: &PathGraph, origin: &Position) -> HashSet<Position> {
    bfs_reach(origin.clone(), |pos| graph.successors(pos).to_vec()).collect()
}

/// All positions that have a walk to `target`, `target` included.
pub fn reaching(graph: &PathGraph, target: &Position) -> HashSet<Position> {
    let mut predecessors: HashMap<&Position, Vec<Position>> = HashMap::new();
    for pos in graph.positions() {
        for next in graph.successors(pos) {
            predecessors.entry(next).or_default().push(pos.clone());
        }
    }

    bfs_reach(target.clone(), |pos| {
        predecessors.get(pos).cloned().unwrap_or_default()
    })
    .collect()
}

/// Whether the graph contains no directed cycle.
pub fn is_acyclic(graph: &PathGraph) -> bool {
    let roots: Vec<Position> = graph.positions().cloned().collect();
    topological_sort(&roots, |pos| graph.successors(pos).to_vec()).is_ok()
}

/// Shortest hop count from `start` to every reachable position.
pub fn hop_depths(graph: &PathGraph) -> HashMap<Position, usize> {
    let mut depths = HashMap::new();
    let mut queue = VecDeque::new();

    let start = Position::start();
    depths.insert(start.clone(), 0);
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        let depth = depths[&pos];
        for next in graph.successors(&pos) {
            if depths.contains_key(next) {
                continue;
            }
            depths.insert(next.clone(), depth + 1);
            queue.push_back(next.clone());
        }
    }

    depths
}

/// Length shared by every walk from `start` to `boss_arena`.
///
/// Returns `None` if some edge skips or repeats a layer, meaning walks of
/// different lengths exist, or if the boss is unreachable.
pub fn uniform_path_length(graph: &PathGraph) -> Option<usize> {
    let depths = hop_depths(graph);

    for pos in graph.positions() {
        let depth = depths.get(pos)?;
        for next in graph.successors(pos) {
            if depths.get(next)? != &(depth + 1) {
                return None;
            }
        }
    }

    depths.get(&Position::boss_arena()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> PathGraph {
        let mut graph = PathGraph::new();
        let start = Position::start();
        let left = Position::at(1, 0);
        let right = Position::at(1, 1);
        let boss = Position::boss_arena();
        graph.add_edge(&start, &left);
        graph.add_edge(&start, &right);
        graph.add_edge(&left, &boss);
        graph.add_edge(&right, &boss);
        graph
    }

    #[test]
    fn test_reachability_both_directions() {
        let graph = diamond();
        assert_eq!(reachable_from(&graph, &Position::start()).len(), 4);
        assert_eq!(reaching(&graph, &Position::boss_arena()).len(), 4);
        assert_eq!(reachable_from(&graph, &Position::at(1, 0)).len(), 2);
    }

    #[test]
    fn test_cycle_detection() {
        let mut graph = diamond();
        assert!(is_acyclic(&graph));

        graph.add_edge(&Position::at(1, 1), &Position::start());
        assert!(!is_acyclic(&graph));
    }

    #[test]
    fn test_hop_depths_and_uniform_length() {
        let graph = diamond();
        let depths = hop_depths(&graph);
        assert_eq!(depths[&Position::start()], 0);
        assert_eq!(depths[&Position::at(1, 1)], 1);
        assert_eq!(depths[&Position::boss_arena()], 2);
        assert_eq!(uniform_path_length(&graph), Some(2));
    }

    #[test]
    fn test_shortcut_breaks_uniform_length() {
        let mut graph = diamond();
        graph.add_edge(&Position::start(), &Position::boss_arena());
        assert_eq!(uniform_path_length(&graph), None);
    }
}
