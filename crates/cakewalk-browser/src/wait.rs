use std::time::Duration;

/// Default deadline for locator polling.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default pause between locator attempts.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Polling policy for element locators.
///
/// Locators retry until `timeout` elapses, pausing `poll_interval` between
/// attempts. This is the only timeout policy the suite defines; navigation
/// and CDP I/O timeouts belong to chromiumoxide.
#[derive(Debug, Clone, Copy)]
pub struct WaitConfig {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl WaitConfig {
    /// Policy with a caller-chosen deadline and the default poll interval.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wait_config() {
        let wait = WaitConfig::default();
        assert_eq!(wait.timeout, Duration::from_secs(10));
        assert_eq!(wait.poll_interval, Duration::from_millis(250));
    }

    #[test]
    fn test_with_timeout_keeps_poll_interval() {
        let wait = WaitConfig::with_timeout(Duration::from_secs(3));
        assert_eq!(wait.timeout, Duration::from_secs(3));
        assert_eq!(wait.poll_interval, DEFAULT_POLL_INTERVAL);
    }
}
