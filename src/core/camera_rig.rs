use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::motion::{ActorPose, PATH_FORWARD};
use super::rig::RigParameters;
use crate::math::{sanitize_delta, smoothing_factor};
use crate::types::CameraUniform;

/// Point the camera aims at, relative to the actor, in the actor's forward/up axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookAhead {
    pub ahead: f32,
    pub up: f32,
}

impl LookAhead {
    fn offset(&self, actor: &ActorPose) -> Vec3 {
        actor.forward() * self.ahead + actor.up() * self.up
    }
}

/// Camera position and aim point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraState {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Snapshot handed to the host renderer after each tick.
pub type CameraPose = CameraState;

impl CameraState {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    pub fn forward(&self) -> Vec3 {
        let dir = (self.look_at - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            PATH_FORWARD
        } else {
            dir
        }
    }

    pub fn right(&self) -> Vec3 {
        let right = self.forward().cross(Vec3::Y).normalize_or_zero();
        if right == Vec3::ZERO {
            Vec3::X
        } else {
            right
        }
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), self.up())
    }

    pub fn to_uniform(&self, time: f32) -> CameraUniform {
        CameraUniform {
            position: self.position.to_array(),
            _pad1: 0.0,
            forward: self.forward().to_array(),
            _pad2: 0.0,
            right: self.right().to_array(),
            _pad3: 0.0,
            up: self.up().to_array(),
            time,
        }
    }
}

/// Trailing camera controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub look_ahead: LookAhead,
    /// Larger is snappier. Governs approach per second, not per frame.
    pub smoothing_rate: f32,
}

impl CameraRig {
    pub fn new(look_ahead: LookAhead, smoothing_rate: f32) -> Self {
        Self {
            look_ahead,
            smoothing_rate,
        }
    }

    /// Where the camera wants to be this frame.
    pub fn target(&self, actor: &ActorPose, rig: RigParameters) -> CameraState {
        let offset = actor.up() * rig.height_above - actor.forward() * rig.distance_behind;
        CameraState {
            position: actor.position + offset,
            look_at: actor.position + self.look_ahead.offset(actor),
        }
    }

    /// Ease `camera` toward this frame's target. No actor means no change.
    pub fn update(
        &self,
        camera: &mut CameraState,
        actor: Option<&ActorPose>,
        rig: RigParameters,
        delta: f32,
    ) {
        let Some(actor) = actor else {
            return;
        };

        let target = self.target(actor, rig);
        let factor = smoothing_factor(self.smoothing_rate, sanitize_delta(delta));
        if factor <= 0.0 {
            return;
        }

        camera.position = camera.position.lerp(target.position, factor);
        camera.look_at = camera.look_at.lerp(target.look_at, factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> CameraRig {
        CameraRig::new(LookAhead { ahead: 2.0, up: 0.5 }, 2.0)
    }

    fn actor() -> ActorPose {
        ActorPose::new(Vec3::new(0.0, 0.25, 15.0), std::f32::consts::PI)
    }

    const PARAMS: RigParameters = RigParameters {
        distance_behind: 8.0,
        height_above: 3.0,
    };

    #[test]
    fn target_sits_behind_and_above() {
        let target = rig().target(&actor(), PARAMS);
        assert_eq!(target.position, Vec3::new(0.0, 3.25, 23.0));
        assert_eq!(target.look_at, Vec3::new(0.0, 0.75, 13.0));
    }

    #[test]
    fn missing_actor_is_noop() {
        let mut camera = CameraState::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let before = camera;
        rig().update(&mut camera, None, PARAMS, 0.1);
        assert_eq!(camera, before);
    }

    #[test]
    fn zero_delta_is_noop() {
        let mut camera = CameraState::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let before = camera;
        rig().update(&mut camera, Some(&actor()), PARAMS, 0.0);
        assert_eq!(camera, before);
    }

    #[test]
    fn moves_toward_target_without_reaching_it() {
        let mut camera = CameraState::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        let target = rig().target(&actor(), PARAMS);

        rig().update(&mut camera, Some(&actor()), PARAMS, 0.1);

        let before = Vec3::new(0.0, 0.0, 5.0).distance(target.position);
        let after = camera.position.distance(target.position);
        assert!(after < before);
        assert!(after > 0.0);
    }

    #[test]
    fn basis_is_orthonormal() {
        let camera = CameraState::new(Vec3::new(0.0, 3.0, 10.0), Vec3::new(0.0, 0.5, 0.0));
        let (f, r, u) = (camera.forward(), camera.right(), camera.up());
        assert!(f.dot(r).abs() < 1e-5);
        assert!(f.dot(u).abs() < 1e-5);
        assert!((u.length() - 1.0).abs() < 1e-5);
        assert!(u.y > 0.0);
    }

    #[test]
    fn degenerate_aim_falls_back_to_path_forward() {
        let camera = CameraState::new(Vec3::ONE, Vec3::ONE);
        assert_eq!(camera.forward(), PATH_FORWARD);
    }

    #[test]
    fn uniform_carries_pose() {
        let camera = CameraState::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 0.0));
        let uniform = camera.to_uniform(4.0);
        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.forward, [0.0, 0.0, -1.0]);
        assert_eq!(uniform.time, 4.0);
    }
}
