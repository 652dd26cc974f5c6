use std::time::{Duration, Instant};

/// Wall-clock budget for one search call, as an explicit (start, budget)
/// pair captured at call entry.
///
/// The check is advisory: the loop consults it once per iteration, so a
/// slow successor callback can overrun the budget by its own duration.
/// `starting_at` exists so tests can inject a start instant in the past
/// instead of faking a clock.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    started_at: Instant,
    budget: Duration,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self::starting_at(Instant::now(), budget)
    }

    pub fn starting_at(started_at: Instant, budget: Duration) -> Self {
        Self { started_at, budget }
    }

    pub fn expired(&self) -> bool {
        self.started_at.elapsed() >= self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_is_expired_immediately() {
        let d = Deadline::after(Duration::ZERO);
        assert!(d.expired());
    }

    #[test]
    fn generous_budget_is_not_expired() {
        let d = Deadline::after(Duration::from_secs(3600));
        assert!(!d.expired());
    }

    #[test]
    fn injected_start_in_the_past_expires() {
        let long_ago = Instant::now() - Duration::from_secs(10);
        let d = Deadline::starting_at(long_ago, Duration::from_secs(1));
        assert!(d.expired());
        assert!(d.elapsed() >= Duration::from_secs(10));
    }
}
