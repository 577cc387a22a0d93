use craftpulse_config::PollerSettings;
use tokio::time::Duration;

/// Exponential backoff schedule shared by every automatic retry site.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn from_settings(settings: &PollerSettings) -> Self {
        Self {
            max_attempts: settings.retry_max_attempts.max(1),
            base_delay: Duration::from_secs(settings.retry_base_delay_secs),
            max_delay: Duration::from_secs(settings.retry_max_delay_secs),
        }
    }

    /// Delay before retrying after the given 0-based failed attempt:
    /// base doubled per attempt, capped at `max_delay`.
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 5,
            base_delay: Duration::from_secs(5),
            max_delay: Duration::from_secs(30),
        }
    }

    #[test]
    fn delay_doubles_per_attempt() {
        let policy = policy();
        assert_eq!(policy.delay(0), Duration::from_secs(5));
        assert_eq!(policy.delay(1), Duration::from_secs(10));
        assert_eq!(policy.delay(2), Duration::from_secs(20));
    }

    #[test]
    fn delay_is_capped() {
        let policy = policy();
        assert_eq!(policy.delay(3), Duration::from_secs(30));
        assert_eq!(policy.delay(30), Duration::from_secs(30));
    }

    #[test]
    fn settings_enforce_at_least_one_attempt() {
        let settings = PollerSettings {
            enabled: true,
            interval_secs: 30,
            retry_max_attempts: 0,
            retry_base_delay_secs: 5,
            retry_max_delay_secs: 30,
            debounce_secs: 10,
        };
        assert_eq!(RetryPolicy::from_settings(&settings).max_attempts, 1);
    }
}
