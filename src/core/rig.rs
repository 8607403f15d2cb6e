use serde::{Deserialize, Serialize};

use crate::math::{clamp_unit, lerp};

/// Endpoint pair interpolated by progress: `from` at 0, `to` at 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RigRange {
    pub from: f32,
    pub to: f32,
}

impl RigRange {
    pub const fn new(from: f32, to: f32) -> Self {
        Self { from, to }
    }

    fn at(&self, t: f32) -> f32 {
        lerp(self.from, self.to, t)
    }
}

/// Camera offset relative to the actor, recomputed every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RigParameters {
    pub distance_behind: f32,
    pub height_above: f32,
}

/// Map a progress value onto rig parameters.
///
/// `distance` runs far -> near, `height` runs high -> low. A range with equal
/// endpoints just yields a constant.
pub fn map_progress(progress: f32, distance: RigRange, height: RigRange) -> RigParameters {
    let t = clamp_unit(progress);
    RigParameters {
        distance_behind: distance.at(t),
        height_above: height.at(t),
    }
}
