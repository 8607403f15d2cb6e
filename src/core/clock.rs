use std::time::{Duration, Instant};

/// Wall-clock frame timer for hosts driving `tick` in real time.
///
/// Deltas are capped at `max_delta` so a stall (debugger, window drag) does
/// not fling the actor down the path in one frame.
#[derive(Debug)]
pub struct Clock {
    started: Instant,
    last_tick: Instant,
    max_delta: Duration,
}

impl Clock {
    pub fn new(max_delta: Duration) -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_tick: now,
            max_delta,
        }
    }

    /// Seconds since the previous call, capped.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).min(self.max_delta);
        self.last_tick = now;
        delta.as_secs_f32()
    }

    /// Seconds since the clock was created, uncapped.
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}
