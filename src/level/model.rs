//! Level model types
//!
//! All coordinates are in the 1280x720 logical space.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::HOLE_RADIUS;

/// A straight wall between two points.
///
/// Zero-length segments are legal and behave as a single point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub start: DVec2,
    pub end: DVec2,
}

impl WallSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: DVec2::new(x1, y1),
            end: DVec2::new(x2, y2),
        }
    }

    pub fn from_points(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    /// Vector from start to end
    #[inline]
    pub fn direction(&self) -> DVec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.direction().length_squared()
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length_squared() == 0.0
    }
}

/// Walls parsed from one level line, in input order (an open polyline)
pub type WallGroup = Vec<WallSegment>;

/// The cup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub position: DVec2,
    pub radius: f64,
}

impl Default for Hole {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            radius: HOLE_RADIUS,
        }
    }
}

/// Where the ball is placed at level start and on retry
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BallStart {
    pub position: DVec2,
}

/// Ground type for the whole level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SurfaceType {
    #[default]
    Normal,
    Sand,
    Ice,
}

impl SurfaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceType::Normal => "normal",
            SurfaceType::Sand => "sand",
            SurfaceType::Ice => "ice",
        }
    }

    /// Surface selected by a whole-line marker in level text
    pub fn from_marker(line: &str) -> Option<Self> {
        match line {
            "S" => Some(SurfaceType::Sand),
            "G" => Some(SurfaceType::Ice),
            _ => None,
        }
    }
}

/// A parsed level: walls, one hole, one ball start, one surface.
///
/// A level without walls is an open field and is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelModel {
    pub wall_groups: Vec<WallGroup>,
    pub hole: Hole,
    pub ball_start: BallStart,
    pub surface: SurfaceType,
}

impl LevelModel {
    /// All wall segments in group order, then segment order
    pub fn walls(&self) -> impl Iterator<Item = &WallSegment> {
        self.wall_groups.iter().flatten()
    }

    pub fn wall_count(&self) -> usize {
        self.wall_groups.iter().map(Vec::len).sum()
    }
}
