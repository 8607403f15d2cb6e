use crate::core::clock::Clock;
use crate::traits::FrameSource;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Deterministic frame source at a fixed rate, for simulation and tests.
///
/// Yields `total` frames; `time` is the clock value after the frame's delta.
#[derive(Debug, Clone)]
pub struct FixedRateFrames {
    delta: f32,
    total: u64,
    frame_number: u64,
}

impl FixedRateFrames {
    pub fn new(fps: f32, total: u64) -> Self {
        Self {
            delta: if fps > 0.0 { 1.0 / fps } else { 0.0 },
            total,
            frame_number: 0,
        }
    }

    /// Enough frames to cover `seconds` at `fps`.
    pub fn for_duration(fps: f32, seconds: f32) -> Self {
        let total = (fps * seconds).round().max(0.0) as u64;
        Self::new(fps, total)
    }
}

impl Iterator for FixedRateFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.frame_number >= self.total {
            return None;
        }
        self.frame_number += 1;
        let time = self.frame_number as f32 * self.delta;
        Some(FrameInfo::new(self.frame_number - 1, time, self.delta))
    }
}

impl FrameSource for FixedRateFrames {
    fn delta_time(&self) -> f32 {
        self.delta
    }

    fn frame_count(&self) -> u64 {
        self.frame_number
    }
}

/// Wall-clock frame source, bounded by a duration in seconds.
#[derive(Debug)]
pub struct RealtimeFrames {
    clock: Clock,
    duration: f32,
    frame_number: u64,
    last_delta: f32,
}

impl RealtimeFrames {
    pub fn new(clock: Clock, duration: f32) -> Self {
        Self {
            clock,
            duration,
            frame_number: 0,
            last_delta: 0.0,
        }
    }
}

impl Iterator for RealtimeFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let delta = self.clock.tick();
        let time = self.clock.elapsed();
        if time > self.duration {
            return None;
        }

        let info = FrameInfo::new(self.frame_number, time, delta);
        self.frame_number += 1;
        self.last_delta = delta;
        Some(info)
    }
}

impl FrameSource for RealtimeFrames {
    fn delta_time(&self) -> f32 {
        self.last_delta
    }

    fn frame_count(&self) -> u64 {
        self.frame_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rate_yields_requested_frames() {
        let frames: Vec<_> = FixedRateFrames::new(60.0, 3).collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].number, 0);
        assert_eq!(frames[2].number, 2);
        assert!(frames.iter().all(|f| f.delta == 1.0 / 60.0));
        assert!((frames[2].time - 0.05).abs() < 1e-6);
    }

    #[test]
    fn for_duration_rounds_frame_count() {
        assert_eq!(FixedRateFrames::for_duration(30.0, 2.0).count(), 60);
        assert_eq!(FixedRateFrames::for_duration(120.0, 0.5).count(), 60);
    }

    #[test]
    fn zero_fps_yields_zero_deltas() {
        let mut frames = FixedRateFrames::new(0.0, 2);
        assert_eq!(frames.next().map(|f| f.delta), Some(0.0));
    }

    #[test]
    fn frame_source_counts() {
        let mut frames = FixedRateFrames::new(30.0, 5);
        frames.next();
        frames.next();
        assert_eq!(frames.frame_count(), 2);
        assert_eq!(frames.delta_time(), 1.0 / 30.0);
    }
}
