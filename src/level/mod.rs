//! Level geometry
//!
//! Turns level text into walls, a hole and a ball start. The model is built
//! once per level load and read-only afterwards.

pub mod catalog;
pub mod model;
pub mod parser;

pub use catalog::{LevelCatalog, LevelData};
pub use model::{BallStart, Hole, LevelModel, SurfaceType, WallGroup, WallSegment};
pub use parser::{ParseWarning, ParsedLevel, WarningKind, parse_level};
