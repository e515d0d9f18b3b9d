//! # Path Graph Generation
//!
//! Builds the branching path graph a dungeon level is laid out on.
//!
//! The graph grows in two phases. During expansion every frontier position
//! spawns one to three successors at random, so the level widens. Once the
//! convergence point is reached the fan-out shrinks deterministically with
//! depth, and at the last step every frontier position feeds into the single
//! `boss_arena`.

use crate::config::MAX_BRANCHING;
use crate::utils::{convergence_point, converging_branch_count, remaining_steps, uniform_path_length};
use crate::{DungeonError, DungeonResult, Generator, PathGraph, Position};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::Rng;

/// Builds a path graph where every walk from `start` to `boss_arena` takes
/// exactly `size` steps.
///
/// # Examples
///
/// ```
/// use brc_dungeon::{build_graph, Position};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let graph = build_graph(1, &mut rng).unwrap();
/// assert_eq!(graph.successors(&Position::start()), &[Position::boss_arena()]);
/// ```
pub fn build_graph<R: Rng + ?Sized>(size: u32, rng: &mut R) -> DungeonResult<PathGraph> {
    if size < 1 {
        return Err(DungeonError::InvalidSize(size));
    }

    let convergence_point = convergence_point(size);
    let remaining_steps = remaining_steps(size);
    let mut graph = PathGraph::new();
    let mut frontier = vec![Position::start()];

    for depth in 0..convergence_point.saturating_sub(1) {
        let mut next_frontier = Vec::new();
        for pos in &frontier {
            let branches = rng.gen_range(1..=MAX_BRANCHING);
            trace!("{} branches into {} positions", pos, branches);
            for _ in 0..branches {
                let next = Position::at(depth + 1, next_frontier.len());
                graph.add_edge(pos, &next);
                next_frontier.push(next);
            }
        }
        frontier = next_frontier;
    }

    debug!(
        "Expansion finished with {} positions at depth {}",
        frontier.len(),
        convergence_point - 1
    );

    if remaining_steps == 0 {
        let boss = Position::boss_arena();
        for pos in &frontier {
            graph.add_edge(pos, &boss);
        }
        return Ok(graph);
    }

    for depth in (convergence_point - 1)..size {
        let Some(branches) = converging_branch_count(depth, convergence_point, remaining_steps)
        else {
            break;
        };
        let final_step = depth == size - 1;
        frontier = converge_step(&mut graph, &frontier, depth, branches, final_step);
    }

    debug!(
        "Built path graph for size {}: {} positions, {} edges",
        size,
        graph.len(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Links every frontier position to `branches` successors one depth further
/// and returns the next frontier. On the final step all successors are the
/// arena, so the next frontier is just `boss_arena`.
fn converge_step(
    graph: &mut PathGraph,
    frontier: &[Position],
    depth: u32,
    branches: usize,
    final_step: bool,
) -> Vec<Position> {
    if final_step {
        let boss = Position::boss_arena();
        for pos in frontier {
            graph.add_edge(pos, &boss);
        }
        return vec![boss];
    }

    let mut next_frontier = Vec::with_capacity(frontier.len() * branches);
    for pos in frontier {
        for _ in 0..branches {
            let next = Position::at(depth + 1, next_frontier.len());
            graph.add_edge(pos, &next);
            next_frontier.push(next);
        }
    }
    next_frontier
}

/// Path graph generator for a fixed dungeon size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGraphBuilder {
    /// Steps from `start` to `boss_arena`
    pub size: u32,
}

impl PathGraphBuilder {
    pub fn new(size: u32) -> Self {
        Self { size }
    }
}

impl Generator<PathGraph> for PathGraphBuilder {
    fn generate(&self, rng: &mut StdRng) -> DungeonResult<PathGraph> {
        build_graph(self.size, rng)
    }

    fn validate(&self, graph: &PathGraph) -> DungeonResult<()> {
        graph.validate()?;

        if uniform_path_length(graph) != Some(self.size as usize) {
            return Err(DungeonError::InvalidLayout(format!(
                "walks to boss_arena must all take {} steps",
                self.size
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "PathGraphBuilder"
    }
}
