use crate::{config::number_var, error::CampResult};
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub capacity: u32,
    pub window: Duration,
}

impl RateLimitConfig {
    pub fn new() -> CampResult<Self> {
        let capacity = number_var("CAMP_RATE_LIMIT_CAPACITY", 10)?;
        let window = number_var("CAMP_RATE_LIMIT_WINDOW_SECS", 60)?;

        Ok(Self {
            capacity: u32::try_from(capacity).unwrap_or(u32::MAX).max(1),
            window: Duration::from_secs(window.max(1)),
        })
    }

    ///tokens handed back per second
    pub fn refill_per_sec(&self) -> f64 {
        f64::from(self.capacity) / self.window.as_secs_f64()
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            window: Duration::from_secs(60),
        }
    }
}
