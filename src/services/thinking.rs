use std::time::Duration;

use rand::Rng;

/// Artificial "thinking" pause applied before every reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThinkingDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self { min_ms: 500, max_ms: 1500 }
    }
}

impl ThinkingDelay {
    pub const NONE: ThinkingDelay = ThinkingDelay { min_ms: 0, max_ms: 0 };

    /// Uniform in `[min_ms, max_ms)`; a fixed `min_ms` when the range is empty.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rng.random_range(self.min_ms..self.max_ms))
    }
}
