pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod math;
pub mod scene;
pub mod traits;
pub mod types;

pub use config::RigConfig;
pub use crate::core::camera_rig::{CameraPose, CameraState};
pub use crate::core::motion::{ActorPose, PathEnd};
pub use crate::core::rig::RigParameters;
pub use scene::{SceneState, ScrollRig};
