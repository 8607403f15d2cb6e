use crate::frame::FrameInfo;

/// Frame timing and iteration abstraction
pub trait FrameSource: Iterator<Item = FrameInfo> {
    /// Delta of the most recently yielded frame, in seconds
    fn delta_time(&self) -> f32;

    /// Number of frames yielded so far
    fn frame_count(&self) -> u64;
}
