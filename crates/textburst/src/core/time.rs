/// Fixed timestep accumulator, in milliseconds.
///
/// The simulation damps velocity by a fixed factor per tick, so tick rate is
/// part of the physics. Driving `step` through this keeps a 60 Hz feel on
/// displays that refresh faster or slower than that.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f64,
    /// Accumulated time from variable frame deltas.
    accumulator: f64,
    /// Timestamp of the previous frame, if any.
    last_frame: Option<f64>,
}

impl FixedTimestep {
    /// Maximum ticks run for a single frame.
    pub const MAX_STEPS: u32 = 10;

    pub fn new(dt_ms: f64) -> Self {
        Self {
            dt: dt_ms,
            accumulator: 0.0,
            last_frame: None,
        }
    }

    /// A timestep running `hz` ticks per second.
    pub fn per_second(hz: f64) -> Self {
        Self::new(1000.0 / hz)
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f64) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        // Cap to prevent spiral of death (a backgrounded tab resumes with a huge delta)
        self.accumulator = self.accumulator.min(self.dt * Self::MAX_STEPS as f64);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f64 * self.dt;
        steps
    }

    /// Feed a monotonic frame timestamp. The first frame always runs one step.
    pub fn advance_to(&mut self, now: f64) -> u32 {
        match self.last_frame.replace(now) {
            Some(prev) => self.accumulate(now - prev),
            None => 1,
        }
    }

    /// Forget the previous frame timestamp and any partial tick.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_frame = None;
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::per_second(60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1000.0 / 60.0;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(FRAME);
        let steps = ts.accumulate(FRAME);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(FRAME);
        assert_eq!(ts.accumulate(8.0), 0);
        assert_eq!(ts.accumulate(10.0), 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(FRAME);
        let steps = ts.accumulate(1000.0);
        assert_eq!(steps, FixedTimestep::MAX_STEPS);
    }

    #[test]
    fn first_frame_runs_one_step() {
        let mut ts = FixedTimestep::default();
        assert_eq!(ts.advance_to(5_000.0), 1);
        // 120 Hz display: every other frame produces a tick
        assert_eq!(ts.advance_to(5_008.0), 0);
        assert_eq!(ts.advance_to(5_017.0), 1);
    }

    #[test]
    fn clock_going_backwards_runs_nothing() {
        let mut ts = FixedTimestep::default();
        ts.advance_to(100.0);
        assert_eq!(ts.advance_to(50.0), 0);
    }

    #[test]
    fn reset_restarts_frame_tracking() {
        let mut ts = FixedTimestep::default();
        ts.advance_to(0.0);
        ts.accumulate(10.0);
        ts.reset();
        assert_eq!(ts.advance_to(10_000.0), 1);
        // The partial tick was discarded too
        assert_eq!(ts.advance_to(10_010.0), 0);
    }
}
