use glam::Vec3;
use scroll_rig::core::motion::{advance, ActorPose, MotionParams, PathEnd};
use scroll_rig::core::rig::{map_progress, RigRange};

#[cfg(test)]
mod motion_tests {
    use super::*;

    fn landing_page_motion() -> MotionParams {
        MotionParams {
            speed: 5.0,
            bob_amplitude: 0.03,
            bob_frequency_scale: 1.5,
            path_end: PathEnd::Unbounded {},
        }
    }

    #[test]
    fn test_single_tick_from_rest() {
        let mut pose = ActorPose::new(Vec3::new(0.0, 0.25, 15.0), std::f32::consts::PI);

        advance(&mut pose, 0.1, &landing_page_motion(), 0.0);

        assert_eq!(pose.position.y, 0.25, "sin(0) leaves the actor at base height");
        assert_eq!(pose.position.z, 14.5, "path coordinate drops by delta * speed");
    }

    #[test]
    fn test_path_coordinate_drops_by_delta_times_speed() {
        let params = landing_page_motion();
        let mut pose = ActorPose::new(Vec3::new(0.0, 0.25, 0.0), 0.0);
        let mut elapsed = 0.0_f64;

        for delta in [0.0_f32, 0.004, 0.016, 0.033, 0.1, 0.25] {
            let before = pose.position.z;
            elapsed += f64::from(delta);
            advance(&mut pose, delta, &params, elapsed);
            assert_eq!(pose.position.z, before - delta * params.speed);
        }
    }

    #[test]
    fn test_path_coordinate_is_monotonic() {
        let params = MotionParams {
            path_end: PathEnd::Clamp { limit: -3.0 },
            ..landing_page_motion()
        };
        let mut pose = ActorPose::new(Vec3::new(0.0, 0.25, 0.0), 0.0);
        let mut last = pose.position.z;

        for i in 0..200 {
            advance(&mut pose, 1.0 / 60.0, &params, i as f64 / 60.0);
            assert!(pose.position.z <= last);
            last = pose.position.z;
        }
        assert_eq!(last, -3.0);
    }

    #[test]
    fn test_bob_stays_within_amplitude() {
        let params = landing_page_motion();
        let mut pose = ActorPose::new(Vec3::new(0.0, 0.25, 0.0), 0.0);

        for i in 0..500 {
            advance(&mut pose, 0.01, &params, i as f64 * 0.01);
            assert!((pose.position.y - 0.25).abs() <= 0.03 + 1e-6);
        }
    }

    #[test]
    fn test_progress_mapping_scenario() {
        let rig = map_progress(0.5, RigRange::new(8.0, 4.0), RigRange::new(3.0, 2.0));
        assert_eq!(rig.distance_behind, 6.0);
        assert_eq!(rig.height_above, 2.5);
    }

    #[test]
    fn test_progress_mapping_clamps() {
        let distance = RigRange::new(8.0, 4.0);
        let height = RigRange::new(3.0, 2.0);

        assert_eq!(map_progress(-0.5, distance, height), map_progress(0.0, distance, height));
        assert_eq!(map_progress(1.5, distance, height), map_progress(1.0, distance, height));
    }
}
