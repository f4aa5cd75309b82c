use std::time::Instant;

/// Receives the ticks produced by [`Ticker::advance`].
pub trait TickHandler {
    /// Fixed-step simulation tick; `step` is in seconds.
    fn update(&mut self, step: f32, now: Instant);

    /// Called once per advance after all pending updates.
    fn render(&mut self, elapsed: f32, now: Instant);
}

/// Fixed-step update scheduler.
///
/// The host calls [`advance`](Self::advance) once per presented frame with
/// the frame timestamp. Elapsed time accumulates and is drained in `step`
/// sized update ticks; one render tick follows.
///
/// Elapsed time is clamped to one second so that a stall (debugger, hidden
/// tab) does not trigger a burst of catch-up updates.
#[derive(Debug, Clone)]
pub struct Ticker {
    step: f32,
    skipped_time: f32,
    total_time: f32,
    last: Option<Instant>,
    running: bool,
}

impl Ticker {
    const MAX_ELAPSED: f32 = 1.0;

    /// Creates a stopped ticker at 60 updates per second.
    pub fn new() -> Self {
        Self {
            step: 1.0 / 60.0,
            skipped_time: 0.0,
            total_time: 0.0,
            last: None,
            running: false,
        }
    }

    /// Sets the update rate. Non-positive or non-finite rates are ignored.
    pub fn fps(&mut self, fps: f32) -> &mut Self {
        if fps > 0.0 && fps.is_finite() {
            self.step = 1.0 / fps;
        } else {
            log::warn!("ignoring ticker rate {fps}; keeping {} fps", 1.0 / self.step);
        }
        self
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    #[inline]
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts ticking with `now` as the baseline. No-op when already running.
    pub fn start(&mut self, now: Instant) -> &mut Self {
        if !self.running {
            self.last = Some(now);
            self.running = true;
        }
        self
    }

    pub fn stop(&mut self) -> &mut Self {
        self.running = false;
        self
    }

    /// Drops accumulated, not yet simulated time.
    pub fn clear(&mut self) -> &mut Self {
        self.skipped_time = 0.0;
        self
    }

    /// Runs pending update ticks and one render tick. Returns the number of updates.
    pub fn advance(&mut self, now: Instant, handler: &mut impl TickHandler) -> u32 {
        if !self.running {
            return 0;
        }

        let last = self.last.unwrap_or(now);
        let elapsed = now
            .saturating_duration_since(last)
            .as_secs_f32()
            .min(Self::MAX_ELAPSED);

        self.skipped_time += elapsed;
        self.total_time += elapsed;

        let mut updates = 0;
        while self.skipped_time >= self.step {
            self.skipped_time -= self.step;
            handler.update(self.step, now);
            updates += 1;
        }

        handler.render(elapsed, now);
        self.last = Some(now);
        updates
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Default)]
    struct Counter {
        updates: u32,
        renders: u32,
    }

    impl TickHandler for Counter {
        fn update(&mut self, _step: f32, _now: Instant) {
            self.updates += 1;
        }

        fn render(&mut self, _elapsed: f32, _now: Instant) {
            self.renders += 1;
        }
    }

    #[test]
    fn stopped_ticker_does_nothing() {
        let mut t = Ticker::new();
        let mut c = Counter::default();
        assert_eq!(t.advance(Instant::now(), &mut c), 0);
        assert_eq!(c.renders, 0);
    }

    #[test]
    fn accumulates_fixed_steps() {
        let t0 = Instant::now();
        let mut t = Ticker::new();
        t.fps(4.0).start(t0);
        let mut c = Counter::default();

        assert_eq!(t.advance(t0 + Duration::from_millis(600), &mut c), 2);
        assert_eq!(t.advance(t0 + Duration::from_millis(1600), &mut c), 4);
        assert_eq!(c.renders, 2);
    }

    #[test]
    fn long_stall_is_clamped() {
        let t0 = Instant::now();
        let mut t = Ticker::new();
        t.fps(4.0).start(t0);
        let mut c = Counter::default();

        assert_eq!(t.advance(t0 + Duration::from_secs(5), &mut c), 4);
        assert_eq!(t.total_time(), 1.0);
    }

    #[test]
    fn non_positive_rates_keep_the_previous_step() {
        let t0 = Instant::now();
        let mut t = Ticker::new();
        t.fps(4.0).fps(-30.0).fps(0.0).fps(f32::NAN).start(t0);
        assert_eq!(t.step(), 0.25);

        let mut c = Counter::default();
        assert_eq!(t.advance(t0 + Duration::from_millis(500), &mut c), 2);
        assert_eq!(c.renders, 1);
    }
}
