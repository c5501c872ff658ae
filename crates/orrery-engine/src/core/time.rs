/// Fixed timestep accumulator.
/// Turns variable frame time into whole simulation ticks plus the fraction
/// of a tick left over, which the scene builder uses to interpolate.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// The fixed delta time per tick, seconds.
    dt: f64,
    /// Upper bound on ticks per frame.
    max_steps: u32,
    /// Accumulated time not yet consumed by a tick.
    accumulator: f64,
}

impl FixedTimestep {
    pub fn new(dt: f64, max_steps: u32) -> Self {
        Self {
            dt,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of ticks to run.
    /// Negative or non-finite frame times count as zero.
    pub fn accumulate(&mut self, frame_dt: f64) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }
        // Cap to prevent spiral of death
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f64);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f64 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between ticks, in [0, 1).
    pub fn alpha(&self) -> f64 {
        (self.accumulator / self.dt).clamp(0.0, 1.0 - f64::EPSILON)
    }

    /// Drop any partially accumulated time.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(0.5, 10);
        assert_eq!(ts.accumulate(0.5), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0, 10);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn caps_at_max_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0, 4);
        assert_eq!(ts.accumulate(1.0), 4);
    }

    #[test]
    fn alpha_is_fraction_of_tick() {
        let mut ts = FixedTimestep::new(0.25, 10);
        ts.accumulate(0.125);
        assert!((ts.alpha() - 0.5).abs() < 1e-12, "alpha was {}", ts.alpha());
        ts.reset();
        assert_eq!(ts.alpha(), 0.0);
    }

    #[test]
    fn negative_frame_time_ignored() {
        let mut ts = FixedTimestep::new(1.0 / 60.0, 10);
        assert_eq!(ts.accumulate(-3.0), 0);
        assert_eq!(ts.accumulate(f64::NAN), 0);
        assert_eq!(ts.alpha(), 0.0);
    }
}
