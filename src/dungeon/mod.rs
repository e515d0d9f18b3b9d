//! # Dungeon Module
//!
//! Data model for generated dungeon layouts.
//!
//! This module contains the structures the generators produce:
//! - Positions, the node identifiers of a layout
//! - The path graph connecting `start` to `boss_arena`
//! - Spawn maps recording which enemy or item sits where
//! - The assembled layout returned to callers

pub mod graph;
pub mod layout;
pub mod spawns;

pub use graph::*;
pub use layout::*;
pub use spawns::*;

use crate::config::{BOSS_ARENA_POSITION, START_POSITION};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node identifier in a generated path graph.
///
/// Positions are opaque strings. Two values are reserved: `start`, the single
/// entry point, and `boss_arena`, the single sink. Every other position is
/// named `pos_<depth>_<index>` by the graph builder.
///
/// # Examples
///
/// ```
/// use brc_dungeon::Position;
///
/// let pos = Position::at(2, 5);
/// assert_eq!(pos.as_str(), "pos_2_5");
/// assert!(!pos.is_reserved());
/// assert!(Position::start().is_start());
/// assert!(Position::boss_arena().is_boss_arena());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(String);

impl Position {
    /// Creates a position from any identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The entry position.
    pub fn start() -> Self {
        Self::new(START_POSITION)
    }

    /// The boss position every path ends in.
    pub fn boss_arena() -> Self {
        Self::new(BOSS_ARENA_POSITION)
    }

    /// A generated position at the given depth with a per-depth index.
    pub fn at(depth: u32, index: usize) -> Self {
        Self(format!("pos_{}_{}", depth, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_start(&self) -> bool {
        self.0 == START_POSITION
    }

    pub fn is_boss_arena(&self) -> bool {
        self.0 == BOSS_ARENA_POSITION
    }

    /// Whether this is `start` or `boss_arena`. Reserved positions never
    /// receive normal enemies or items.
    pub fn is_reserved(&self) -> bool {
        self.is_start() || self.is_boss_arena()
    }

    /// Depth encoded in a generated `pos_<depth>_<index>` name.
    ///
    /// Returns `None` for reserved or foreign identifiers.
    pub fn generated_depth(&self) -> Option<u32> {
        let rest = self.0.strip_prefix("pos_")?;
        let (depth, index) = rest.split_once('_')?;
        index.parse::<usize>().ok()?;
        depth.parse().ok()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Position {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Position {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for Position {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
