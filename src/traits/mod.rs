pub mod camera;
pub mod frame;

pub use camera::*;
pub use frame::*;
