/// Fixed-step accumulator that also tracks continuous elapsed time.
#[derive(Debug, Clone)]
pub struct MotionClock {
    tick_rate: f64,
    max_frame_delta: f64,
    accumulator: f64,
    elapsed: f64,
    ticks: u64,
}

impl MotionClock {
    /// `tick_rate` in Hz; frame deltas longer than `max_frame_delta` seconds are clamped.
    pub fn new(tick_rate: f64, max_frame_delta: f64) -> Self {
        Self {
            tick_rate: tick_rate.max(1.0),
            max_frame_delta: max_frame_delta.max(0.0),
            accumulator: 0.0,
            elapsed: 0.0,
            ticks: 0,
        }
    }

    pub fn step_seconds(&self) -> f64 {
        1.0 / self.tick_rate
    }

    /// Add a frame delta and return how many whole ticks are due.
    pub fn advance(&mut self, dt: f64) -> u32 {
        let dt = dt.clamp(0.0, self.max_frame_delta);
        self.elapsed += dt;
        self.accumulator += dt;

        let step = self.step_seconds();
        let mut due = 0;
        while self.accumulator >= step {
            self.accumulator -= step;
            due += 1;
        }
        self.ticks += due as u64;
        due
    }

    /// Seconds since the clock started, excluding clamped time.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_second_at_sixty_hz() {
        let mut clock = MotionClock::new(60.0, 0.1);
        let mut total = 0;
        for _ in 0..60 {
            total += clock.advance(1.0 / 60.0 + 1e-9);
        }
        assert_eq!(total, 60);
        assert!((clock.elapsed() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn short_frames_accumulate() {
        let mut clock = MotionClock::new(60.0, 0.1);
        assert_eq!(clock.advance(0.01), 0);
        assert_eq!(clock.advance(0.01), 1);
        assert_eq!(clock.ticks(), 1);
    }

    #[test]
    fn long_stalls_are_clamped() {
        let mut clock = MotionClock::new(8.0, 0.5);
        let due = clock.advance(5.0);
        assert_eq!(due, 4);
        assert_eq!(clock.elapsed(), 0.5);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut clock = MotionClock::new(60.0, 0.1);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.elapsed(), 0.0);
    }
}
