//! # Simulation Clock
//!
//! A pausable clock owned by the simulation context. The frame driver feeds
//! it the wall-clock time elapsed since the previous frame; the clock turns
//! that into the `(time, delta)` pair the update consumes.

use std::time::Duration;

/// Time values for one frame
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Simulation time at this frame, in seconds
    pub time: f32,
    /// Simulation time elapsed since the previous frame
    pub delta: f32,
}

#[derive(Clone, Debug, Default)]
pub struct SimClock {
    time: f64,
    paused: bool,
    frame: u64,
}

impl SimClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `elapsed` wall-clock time. While paused the simulation time
    /// stays frozen and the delta is zero; after resuming it continues from
    /// the frozen value.
    pub fn advance(&mut self, elapsed: Duration) -> FrameTime {
        self.frame += 1;
        if self.paused {
            return FrameTime {
                time: self.time as f32,
                delta: 0.0,
            };
        }
        let previous = self.time;
        self.time += elapsed.as_secs_f64();
        FrameTime {
            time: self.time as f32,
            delta: (self.time - previous) as f32,
        }
    }

    #[must_use]
    pub fn time(&self) -> f32 {
        self.time as f32
    }

    /// Frames advanced so far, paused or not
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_elapsed_time() {
        let mut clock = SimClock::new();
        let t = clock.advance(Duration::from_millis(500));
        assert!((t.time - 0.5).abs() < 1e-6);
        assert!((t.delta - 0.5).abs() < 1e-6);
        let t = clock.advance(Duration::from_millis(250));
        assert!((t.time - 0.75).abs() < 1e-6);
        assert!((t.delta - 0.25).abs() < 1e-6);
    }

    #[test]
    fn pause_freezes_time_and_resume_continues() {
        let mut clock = SimClock::new();
        clock.advance(Duration::from_secs(1));
        clock.toggle_pause();
        assert!(clock.is_paused());
        let t = clock.advance(Duration::from_secs(5));
        assert_eq!(t.delta, 0.0);
        assert!((t.time - 1.0).abs() < 1e-6);

        clock.resume();
        let t = clock.advance(Duration::from_millis(100));
        assert!((t.time - 1.1).abs() < 1e-6);
        assert!((t.delta - 0.1).abs() < 1e-6);
        assert_eq!(clock.frame(), 3);
    }
}
