/// Fixed-timestep accumulator.
///
/// Decouples simulation rate from presentation: the caller feeds wall-clock
/// time in, gets back how many whole ticks to run.

use std::time::Duration;

#[derive(Clone, Debug)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
    /// Most ticks run for one `advance`; any backlog past this is dropped.
    max_catch_up: u32,
}

impl FixedStep {
    pub fn new(step: Duration, max_catch_up: u32) -> Self {
        Self {
            step: step.max(Duration::from_millis(1)),
            accumulator: Duration::ZERO,
            max_catch_up: max_catch_up.max(1),
        }
    }

    pub fn from_rate(ticks_per_second: u32, max_catch_up: u32) -> Self {
        Self::new(Duration::from_secs(1) / ticks_per_second.max(1), max_catch_up)
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add `elapsed` and return the number of ticks now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= self.step {
            if ticks == self.max_catch_up {
                log::debug!("dropping {:?} of simulation backlog", self.accumulator);
                self.accumulator = Duration::ZERO;
                break;
            }
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.step.saturating_sub(self.accumulator)
    }
}
