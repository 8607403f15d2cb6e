use crate::core::camera_rig::CameraPose;

/// Anything the host renderer can read a camera pose from once per frame.
pub trait CameraPoseSource {
    /// Current pose, or `None` while the scene is not mounted.
    fn camera_pose(&self) -> Option<CameraPose>;

    /// View matrix as column arrays for direct upload.
    fn view_matrix(&self) -> Option<[[f32; 4]; 4]> {
        self.camera_pose()
            .map(|pose| pose.view_matrix().to_cols_array_2d())
    }
}
