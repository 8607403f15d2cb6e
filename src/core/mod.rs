pub mod camera_rig;
pub mod clock;
pub mod motion;
pub mod progress;
pub mod rig;
pub mod timer;
