//! # Path Graph
//!
//! Directed graph of dungeon positions running from `start` to `boss_arena`.

use crate::utils::traversal;
use crate::{DungeonError, DungeonResult, Position};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Mapping from each position to its ordered successors.
///
/// Positions are remembered in the order they were first seen so iteration,
/// and therefore every random draw made while walking the graph, is stable
/// for a given generator seed. Serializes as a JSON object whose keys follow
/// that same order.
///
/// # Examples
///
/// ```
/// use brc_dungeon::{PathGraph, Position};
///
/// let mut graph = PathGraph::new();
/// graph.add_edge(&Position::start(), &Position::boss_arena());
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.successors(&Position::start()), &[Position::boss_arena()]);
/// assert!(graph.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PathGraph {
    order: Vec<Position>,
    successors: HashMap<Position, Vec<Position>>,
}

impl PathGraph {
    /// Creates a graph holding only `start`.
    pub fn new() -> Self {
        let mut graph = Self::empty();
        graph.insert_position(Position::start());
        graph
    }

    fn empty() -> Self {
        Self {
            order: Vec::new(),
            successors: HashMap::new(),
        }
    }

    /// Adds a position with no outgoing edges. Returns `false` if it was
    /// already present.
    pub fn insert_position(&mut self, pos: Position) -> bool {
        if self.successors.contains_key(&pos) {
            return false;
        }
        self.order.push(pos.clone());
        self.successors.insert(pos, Vec::new());
        true
    }

    /// Adds an edge, inserting either endpoint if missing.
    ///
    /// Returns `false` when the edge already existed; a source never lists
    /// the same successor twice.
    pub fn add_edge(&mut self, from: &Position, to: &Position) -> bool {
        self.insert_position(from.clone());
        self.insert_position(to.clone());

        let successors = self.successors.entry(from.clone()).or_default();
        if successors.contains(to) {
            return false;
        }
        successors.push(to.clone());
        true
    }

    /// Successors of `pos`, empty for sinks and unknown positions.
    pub fn successors(&self, pos: &Position) -> &[Position] {
        self.successors.get(pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All positions in creation order.
    pub fn positions(&self) -> impl Iterator<Item = &Position> + '_ {
        self.order.iter()
    }

    /// Positions that may hold a normal enemy or an item, in creation order.
    pub fn spawn_candidates(&self) -> impl Iterator<Item = &Position> + '_ {
        self.order.iter().filter(|pos| !pos.is_reserved())
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.successors.contains_key(pos)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.successors.values().map(Vec::len).sum()
    }

    /// Positions other than `start` that no edge leads into.
    pub fn orphans(&self) -> Vec<&Position> {
        let targeted: std::collections::HashSet<&Position> =
            self.successors.values().flatten().collect();

        self.order
            .iter()
            .filter(|pos| !pos.is_start() && !targeted.contains(pos))
            .collect()
    }

    /// Checks the structural invariants of a finished graph.
    ///
    /// `start` and `boss_arena` must both exist, the arena must be the only
    /// sink, the graph must be acyclic, every position must be reachable from
    /// `start` and every position must be able to reach the arena.
    pub fn validate(&self) -> DungeonResult<()> {
        let start = Position::start();
        let boss = Position::boss_arena();

        if !self.contains(&start) {
            return Err(DungeonError::InvalidLayout("graph has no start position".to_string()));
        }
        if !self.contains(&boss) {
            return Err(DungeonError::InvalidLayout("graph has no boss_arena position".to_string()));
        }
        if !self.successors(&boss).is_empty() {
            return Err(DungeonError::InvalidLayout(
                "boss_arena must not have outgoing paths".to_string(),
            ));
        }

        if let Some(dead_end) = self
            .order
            .iter()
            .find(|pos| !pos.is_boss_arena() && self.successors(pos).is_empty())
        {
            return Err(DungeonError::InvalidLayout(format!(
                "position {} is a dead end",
                dead_end
            )));
        }

        if !traversal::is_acyclic(self) {
            return Err(DungeonError::InvalidLayout("graph contains a cycle".to_string()));
        }

        let from_start = traversal::reachable_from(self, &start);
        if let Some(unreached) = self.order.iter().find(|pos| !from_start.contains(pos)) {
            return Err(DungeonError::InvalidLayout(format!(
                "position {} is not reachable from start",
                unreached
            )));
        }

        let to_boss = traversal::reaching(self, &boss);
        if let Some(stranded) = self.order.iter().find(|pos| !to_boss.contains(pos)) {
            return Err(DungeonError::InvalidLayout(format!(
                "position {} cannot reach boss_arena",
                stranded
            )));
        }

        Ok(())
    }
}

/// Two graphs are equal when they hold the same edges, whatever order their
/// positions were created in.
impl PartialEq for PathGraph {
    fn eq(&self, other: &Self) -> bool {
        self.successors == other.successors
    }
}

impl Eq for PathGraph {}

impl Default for PathGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for PathGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for pos in &self.order {
            map.serialize_entry(pos, self.successors(pos))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PathGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PathGraphVisitor)
    }
}

struct PathGraphVisitor;

impl<'de> Visitor<'de> for PathGraphVisitor {
    type Value = PathGraph;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from position to a list of successor positions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut graph = PathGraph::empty();
        while let Some((pos, successors)) = access.next_entry::<Position, Vec<Position>>()? {
            graph.insert_position(pos.clone());
            for next in &successors {
                graph.add_edge(&pos, next);
            }
        }
        Ok(graph)
    }
}
