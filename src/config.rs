// config.rs - Scene configuration, loaded from JSON
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::camera_rig::{CameraState, LookAhead};
use crate::core::motion::{MotionParams, PathEnd};
use crate::core::rig::RigRange;

/// Where the actor spawns and how it faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActorConfig {
    /// Spawn point. `y` doubles as the bob base height.
    pub start: Vec3,
    pub yaw: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RigRanges {
    /// far -> near
    pub distance: RigRange,
    /// high -> low
    pub height: RigRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    pub start: CameraState,
    pub look_ahead: LookAhead,
    pub smoothing_rate: f32,
}

/// Everything needed to mount a scene. Every field is required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RigConfig {
    pub actor: ActorConfig,
    pub motion: MotionParams,
    pub rig: RigRanges,
    pub camera: CameraConfig,
}

impl RigConfig {
    /// The retro-car landing page scene.
    pub fn original_scene() -> Self {
        Self {
            actor: ActorConfig {
                start: Vec3::new(0.0, 0.25, 15.0),
                yaw: std::f32::consts::PI,
            },
            motion: MotionParams {
                speed: 5.0,
                bob_amplitude: 0.03,
                bob_frequency_scale: 1.5,
                path_end: PathEnd::Unbounded {},
            },
            rig: RigRanges {
                distance: RigRange::new(8.0, 4.0),
                height: RigRange::new(3.0, 2.0),
            },
            camera: CameraConfig {
                start: CameraState::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO),
                look_ahead: LookAhead { ahead: 2.0, up: 0.5 },
                smoothing_rate: 2.0,
            },
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse rig config")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rig config: {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid rig config: {}", path.display()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize rig config")
    }
}
