use std::time::Duration;

/// Simulation time. It only moves when the loop runs a fixed step, so every
/// system in a tick reads the same `now_ms`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickClock {
    tick: u64,
    elapsed: Duration,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at_ms(now_ms: u64) -> Self {
        Self {
            tick: 0,
            elapsed: Duration::from_millis(now_ms),
        }
    }

    pub fn advance(&mut self, fixed_dt: Duration) {
        self.tick = self.tick.saturating_add(1);
        self.elapsed = self.elapsed.saturating_add(fixed_dt);
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}
