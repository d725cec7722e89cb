use chrono::{DateTime, Utc};
use portfolio_shared_contracts::time::TimeService;

/// System clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[tracing::instrument(level = "trace", skip(self))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_follows_system_clock() {
        let before = Utc::now();
        let now = TimeServiceImpl.now();
        let after = Utc::now();
        assert!(before <= now && now <= after);
    }
}
