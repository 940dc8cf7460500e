//! Surface friction

use crate::consts::{ICE_FRICTION, NORMAL_FRICTION, SAND_FRICTION};
use crate::level::SurfaceType;

/// Per-tick velocity multiplier for a surface, applied to both axes
#[inline]
pub fn friction_for(surface: SurfaceType) -> f64 {
    match surface {
        SurfaceType::Normal => NORMAL_FRICTION,
        SurfaceType::Sand => SAND_FRICTION,
        SurfaceType::Ice => ICE_FRICTION,
    }
}
