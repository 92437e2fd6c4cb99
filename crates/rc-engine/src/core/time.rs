use std::time::{Duration, Instant};

/// Variable-timestep frame clock with a best-effort rate cap.
/// Reports the wall time between iterations; the simulation consumes it
/// directly (no fixed-step re-simulation).
pub struct FrameClock {
    /// Target period per tick.
    period: Duration,
    /// Start of the previous tick.
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            period: Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1))),
            last: None,
        }
    }

    /// Mark the start of a tick. Returns seconds elapsed since the previous
    /// tick, or 0.0 on the first call.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }

    /// Time left in the current tick before the target period elapses.
    /// Zero when the tick has overrun or no tick has started.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last {
            Some(last) => self.period.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// The target tick period.
    pub fn period(&self) -> Duration {
        self.period
    }
}
