//! # BRC Dungeon
//!
//! Procedural dungeon layout generation for a single dungeon level.
//!
//! ## Architecture Overview
//!
//! A layout is produced in two stages, each driven by an explicitly passed
//! random number generator:
//!
//! - **Path Graph**: a directed graph from `start` to `boss_arena` that fans out
//!   for the first half of the level and converges onto the boss for the second
//! - **Encounters**: enemies are rolled per position against the difficulty's
//!   spawn rate, a boss is always placed in the arena, and items fill the
//!   remaining free positions
//!
//! Catalog sourcing, storage and request handling live outside this crate. The
//! bundled binary is a thin front end that feeds the generator from the command
//! line and prints the resulting layout as JSON.

pub mod catalog;
pub mod dungeon;
pub mod generation;
pub mod utils;

// Core module re-exports
pub use catalog::*;
pub use dungeon::*;
pub use generation::*;

pub use generation::{
    Difficulty, DungeonGenerator, EncounterPopulator, GenerationRequest, Generator,
    ItemPopulator, PathGraphBuilder, SpawnProfile,
};

/// Core error type for dungeon generation.
#[derive(thiserror::Error, Debug)]
pub enum DungeonError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Requested dungeon size is below the minimum of one step
    #[error("Invalid size {0}: a dungeon needs at least 1 step to the boss")]
    InvalidSize(u32),

    /// Difficulty text did not name a known difficulty
    #[error("Invalid difficulty '{0}': expected easy, medium, or hard")]
    InvalidDifficulty(String),

    /// A graph or layout breaks one of its structural invariants
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

/// Result type used throughout the crate.
pub type DungeonResult<T> = Result<T, DungeonError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation constants.
pub mod config {
    /// Identifier of the unique entry position
    pub const START_POSITION: &str = "start";

    /// Identifier of the unique terminal position holding the boss
    pub const BOSS_ARENA_POSITION: &str = "boss_arena";

    /// Upper bound of the branching factor drawn during expansion
    pub const MAX_BRANCHING: usize = 3;

    /// Size used by the command line when none is given
    pub const DEFAULT_DUNGEON_SIZE: u32 = 10;

    /// Largest size the command line accepts. Expansion roughly doubles the
    /// frontier at every step, so position counts grow exponentially.
    pub const MAX_CLI_SIZE: u32 = 24;
}
