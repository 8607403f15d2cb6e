use std::sync::Arc;

use log::{debug, trace};

use crate::config::RigConfig;
use crate::core::camera_rig::{CameraPose, CameraRig, CameraState};
use crate::core::motion::{self, ActorPose};
use crate::core::progress::{ProgressCell, ProgressHandle};
use crate::core::rig::{self, RigParameters};
use crate::math::sanitize_delta;
use crate::traits::CameraPoseSource;

/// Mutable per-session state. Actor and camera are absent before mount and after teardown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneState {
    pub actor: Option<ActorPose>,
    pub camera: Option<CameraState>,
    /// Scene clock in seconds, drives the bob phase.
    pub elapsed: f64,
}

/// Per-frame motion and camera system.
///
/// The host calls [`ScrollRig::tick`] once per rendered frame, then reads
/// [`ScrollRig::camera_pose`] to position its render camera.
#[derive(Debug)]
pub struct ScrollRig {
    config: RigConfig,
    camera_rig: CameraRig,
    progress: Arc<ProgressCell>,
    state: SceneState,
}

impl ScrollRig {
    /// Build an unmounted rig. Ticks are no-ops until [`ScrollRig::mount`].
    pub fn new(config: RigConfig) -> Self {
        Self {
            camera_rig: CameraRig::new(config.camera.look_ahead, config.camera.smoothing_rate),
            config,
            progress: Arc::new(ProgressCell::new(0.0)),
            state: SceneState::default(),
        }
    }

    /// Build and mount in one step.
    pub fn mounted(config: RigConfig) -> Self {
        let mut rig = Self::new(config);
        rig.mount();
        rig
    }

    /// Spawn the actor and camera at their configured start poses.
    pub fn mount(&mut self) {
        let actor = ActorPose::new(self.config.actor.start, self.config.actor.yaw);
        debug!(
            "mounting actor at {:?}, camera at {:?}",
            actor.position, self.config.camera.start.position
        );
        self.state = SceneState {
            actor: Some(actor),
            camera: Some(self.config.camera.start),
            elapsed: 0.0,
        };
    }

    /// Release actor and camera. Later ticks do nothing.
    pub fn teardown(&mut self) {
        debug!("tearing down scene after {:.3}s", self.state.elapsed);
        self.state.actor = None;
        self.state.camera = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.state.actor.is_some() && self.state.camera.is_some()
    }

    /// Store the latest progress verbatim. Clamped when read.
    pub fn set_progress(&self, value: f32) {
        self.progress.store(value);
    }

    /// Producer handle for an input thread.
    pub fn progress_handle(&self) -> ProgressHandle {
        ProgressHandle::new(Arc::clone(&self.progress))
    }

    /// Advance one frame using the internal scene clock.
    pub fn tick(&mut self, delta: f32) {
        let delta = sanitize_delta(delta);
        let elapsed = self.state.elapsed + f64::from(delta);
        self.step(delta, elapsed);
    }

    /// Advance one frame with a host-supplied clock time as the bob phase.
    pub fn tick_with_elapsed(&mut self, delta: f32, elapsed: f64) {
        self.step(sanitize_delta(delta), elapsed);
    }

    fn step(&mut self, delta: f32, elapsed: f64) {
        let params = self.rig_parameters();

        let SceneState {
            actor: Some(actor),
            camera: Some(camera),
            elapsed: clock,
        } = &mut self.state
        else {
            trace!("tick skipped, scene not mounted");
            return;
        };

        *clock = elapsed;
        motion::advance(actor, delta, &self.config.motion, elapsed);
        self.camera_rig.update(camera, Some(&*actor), params, delta);

        trace!(
            "tick dt={delta:.4} actor={:?} camera={:?}",
            actor.position, camera.position
        );
    }

    /// Rig parameters for the current progress snapshot.
    pub fn rig_parameters(&self) -> RigParameters {
        rig::map_progress(
            self.progress.snapshot(),
            self.config.rig.distance,
            self.config.rig.height,
        )
    }

    pub fn camera_pose(&self) -> Option<CameraPose> {
        self.state.camera
    }

    pub fn actor(&self) -> Option<&ActorPose> {
        self.state.actor.as_ref()
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    pub fn elapsed(&self) -> f64 {
        self.state.elapsed
    }
}

impl CameraPoseSource for ScrollRig {
    fn camera_pose(&self) -> Option<CameraPose> {
        ScrollRig::camera_pose(self)
    }
}
