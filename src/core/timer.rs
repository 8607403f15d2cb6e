/// Minimum interval between fires, accumulated from frame deltas.
///
/// Used to keep per-frame diagnostics from flooding the log.
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    min_interval: f32,
    time_since_last: f32,
}

impl Throttled {
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            // first call fires
            time_since_last: min_interval,
        }
    }

    /// Returns true when at least `min_interval` seconds have accumulated.
    pub fn try_tick(&mut self, delta: f32) -> bool {
        self.time_since_last += delta;

        if self.time_since_last >= self.min_interval {
            self.time_since_last = 0.0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttled_enforces_minimum() {
        let mut timer = Throttled::new(0.1);

        assert!(timer.try_tick(0.05));
        assert!(!timer.try_tick(0.05));
        assert!(timer.try_tick(0.06));
    }

    #[test]
    fn throttled_at_frame_rate() {
        let mut timer = Throttled::new(1.0);
        let fired = (0..120).filter(|_| timer.try_tick(1.0 / 60.0)).count();
        // immediate fire plus one per second
        assert!((2..=3).contains(&fired));
    }
}
