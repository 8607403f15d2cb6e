use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::math::sanitize_delta;

/// Direction of travel along the fixed path.
pub const PATH_FORWARD: Vec3 = Vec3::NEG_Z;

/// What happens once the actor reaches the end of its path.
///
/// A policy only acts on the step that crosses its boundary. An actor that
/// spawns past the boundary keeps driving as if unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", deny_unknown_fields)]
pub enum PathEnd {
    /// Keep driving forever.
    Unbounded {},
    /// Stop at `limit` on the path axis.
    Clamp { limit: f32 },
    /// Wrap from `end` back to `start`, keeping the overshoot. Requires `start > end`.
    Loop { start: f32, end: f32 },
}

impl PathEnd {
    fn apply(&self, previous: f32, z: f32) -> f32 {
        match *self {
            PathEnd::Unbounded {} => z,
            PathEnd::Clamp { limit } => {
                if z < limit && previous >= limit {
                    if previous > limit {
                        debug!("actor reached path limit {limit}");
                    }
                    limit
                } else {
                    z
                }
            }
            PathEnd::Loop { start, end } => {
                let length = start - end;
                if z >= end || previous < end || !(length > 0.0) {
                    return z;
                }
                let wrapped = start - (end - z).rem_euclid(length);
                debug!("actor wrapped from {z} to {wrapped}");
                wrapped
            }
        }
    }
}

/// Kinematic constants for the actor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotionParams {
    /// Units per second along the path.
    pub speed: f32,
    pub bob_amplitude: f32,
    /// Multiplier on `elapsed * speed` forming the bob phase.
    pub bob_frequency_scale: f32,
    pub path_end: PathEnd,
}

/// Actor transform. Created once at mount and only mutated by [`advance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActorPose {
    pub position: Vec3,
    /// Fixed model orientation around Y.
    pub yaw: f32,
    /// Height the bob oscillates around.
    pub base_height: f32,
}

impl ActorPose {
    pub fn new(start: Vec3, yaw: f32) -> Self {
        Self {
            position: start,
            yaw,
            base_height: start.y,
        }
    }

    /// Unit vector the actor travels along.
    pub fn forward(&self) -> Vec3 {
        PATH_FORWARD
    }

    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }
}

/// Move the actor forward by `delta * speed` and set its bob height for `elapsed`.
///
/// The height is assigned absolutely from the phase, so repeated ticks never drift.
/// `elapsed` stays `f64` until the phase is reduced, so hours-long sessions bob smoothly.
pub fn advance(pose: &mut ActorPose, delta: f32, params: &MotionParams, elapsed: f64) {
    let delta = sanitize_delta(delta);

    let previous = pose.position.z;
    let z = previous - delta * params.speed;
    pose.position.z = params.path_end.apply(previous, z);

    pose.position.y = pose.base_height + params.bob_amplitude * bob_wave(elapsed, params);
}

/// `sin` of the bob phase, computed in `f64`.
pub fn bob_wave(elapsed: f64, params: &MotionParams) -> f32 {
    let phase = elapsed * f64::from(params.speed) * f64::from(params.bob_frequency_scale);
    phase.sin() as f32
}
