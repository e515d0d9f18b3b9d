//! # Generation Module
//!
//! Procedural generation of dungeon layouts.
//!
//! A layout is built in three passes that share one random number generator:
//! the path graph, then enemies over that graph, then items over whatever
//! positions enemies left free. Each pass is available as a free function
//! taking any [`rand::Rng`] and as a [`Generator`] implementation.

pub mod difficulty;
pub mod encounters;
pub mod items;
pub mod paths;

pub use difficulty::*;
pub use encounters::*;
pub use items::*;
pub use paths::*;

use crate::{Catalog, DungeonLayout, DungeonResult};
use log::{debug, info};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One request for a dungeon layout.
///
/// Deserializes from the request shape used by callers:
///
/// ```
/// use brc_dungeon::{Difficulty, GenerationRequest};
///
/// let request: GenerationRequest = serde_json::from_str(r#"{
///     "size": 10,
///     "difficulty": "hard",
///     "normalEnemyIds": ["1", "2"],
///     "bossEnemyIds": ["27"],
///     "itemIds": ["a"]
/// }"#).unwrap();
///
/// assert_eq!(request.difficulty, Difficulty::Hard);
/// assert_eq!(request.catalog.bosses, vec!["27"]);
/// assert!(request.seed.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Steps from `start` to `boss_arena`, at least 1
    pub size: u32,
    pub difficulty: Difficulty,
    #[serde(flatten)]
    pub catalog: Catalog,
    /// Label stored with the layout; a UUID is generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
}

impl GenerationRequest {
    pub fn new(size: u32, difficulty: Difficulty, catalog: Catalog) -> Self {
        Self {
            size,
            difficulty,
            catalog,
            seed: None,
        }
    }

    /// Sets the label stored alongside the generated layout.
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }
}

/// Trait for procedural generators.
///
/// Each generator carries its own inputs and draws all randomness from the
/// generator passed in, so a seeded [`StdRng`] reproduces its output exactly.
pub trait Generator<T> {
    /// Generates content using the provided random number generator.
    fn generate(&self, rng: &mut StdRng) -> DungeonResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T) -> DungeonResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Runs the full pipeline for a [`GenerationRequest`].
#[derive(Debug, Clone, Default)]
pub struct DungeonGenerator {
    /// Re-check every stage's output before assembling the layout
    pub validate_stages: bool,
}

impl DungeonGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator that validates each stage as it goes.
    pub fn validating() -> Self {
        Self {
            validate_stages: true,
        }
    }

    /// Builds the path graph, places enemies, then places items.
    pub fn generate_layout(
        &self,
        request: &GenerationRequest,
        rng: &mut StdRng,
    ) -> DungeonResult<DungeonLayout> {
        let seed = request
            .seed
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        info!(
            "Generating dungeon '{}' of size {} on {} difficulty",
            seed, request.size, request.difficulty
        );

        let builder = PathGraphBuilder::new(request.size);
        let paths = self.run_stage(&builder, rng)?;

        let encounters = EncounterPopulator::new(&paths, request.difficulty, &request.catalog);
        let enemies = self.run_stage(&encounters, rng)?;

        let occupied = enemies.occupied();
        let item_populator =
            ItemPopulator::new(&paths, request.difficulty, &request.catalog.items, &occupied);
        let items = self.run_stage(&item_populator, rng)?;

        info!(
            "Dungeon '{}' has {} positions, {} enemies and {} items",
            seed,
            paths.len(),
            enemies.placement_count(),
            items.placement_count()
        );

        Ok(DungeonLayout {
            seed,
            size: request.size,
            difficulty: request.difficulty,
            paths,
            enemies,
            items,
        })
    }

    fn run_stage<T, G: Generator<T>>(&self, generator: &G, rng: &mut StdRng) -> DungeonResult<T> {
        debug!("Running {}", generator.generator_type());
        let content = generator.generate(rng)?;
        if self.validate_stages {
            generator.validate(&content)?;
        }
        Ok(content)
    }
}

/// Utility functions for generation.
pub mod utils {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates a seeded random number generator for reproducible layouts.
    pub fn create_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Creates a random number generator seeded from the operating system.
    pub fn entropy_rng() -> StdRng {
        StdRng::from_entropy()
    }
}
