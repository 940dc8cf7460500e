//! Level catalog
//!
//! Ordered list of levels (terrain text, par, music theme). Asking for a level
//! that does not exist is an error, never an empty level.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::parser::{ParsedLevel, parse_level};
use crate::error::{GolfError, GolfResult};

const BUILTIN_LEVELS: &str = include_str!("../../assets/levels.json");

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelData {
    /// Level text in the wall/hole/ball-start line format
    pub terrain: String,
    /// Strokes expected for this hole
    #[serde(default = "default_par")]
    pub par: u32,
    /// Music theme name, passed through to the audio collaborator
    #[serde(default)]
    pub theme: String,
}

fn default_par() -> u32 {
    3
}

/// Ordered level list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelCatalog {
    levels: Vec<LevelData>,
}

impl LevelCatalog {
    pub fn new(levels: Vec<LevelData>) -> Self {
        Self { levels }
    }

    /// Levels bundled with the crate
    pub fn builtin() -> GolfResult<Self> {
        Self::from_json(BUILTIN_LEVELS)
    }

    pub fn from_json(json: &str) -> GolfResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        log::info!("Loaded level catalog with {} levels", catalog.len());
        Ok(catalog)
    }

    /// Read a catalog JSON file
    pub fn load(path: impl AsRef<Path>) -> GolfResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelData> {
        self.levels.iter()
    }

    /// Level data at `index` (0-based)
    pub fn get(&self, index: usize) -> GolfResult<&LevelData> {
        self.levels.get(index).ok_or_else(|| {
            log::error!("Level data not found for level {}", index);
            GolfError::LevelNotFound {
                index,
                count: self.levels.len(),
            }
        })
    }

    /// Parse the level at `index`
    pub fn parse(&self, index: usize) -> GolfResult<ParsedLevel> {
        let data = self.get(index)?;
        let parsed = parse_level(&data.terrain);
        log::info!(
            "Level {} loaded: {} walls, par {}",
            index + 1,
            parsed.model.wall_count(),
            data.par
        );
        Ok(parsed)
    }
}
