use std::time::Duration;

/// Configures HTTP timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,
    /// Total number of attempts, including the first one.
    pub max_attempts: u32,
    /// Fixed delay between attempts in milliseconds.
    pub retry_delay_ms: u64,
}

impl ClientOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Attempt limit clamped so at least one request is always made.
    pub fn attempt_limit(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            max_attempts: 3,
            retry_delay_ms: 1_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClientOptions;
    use std::time::Duration;

    #[test]
    fn defaults_match_backend_client_constants() {
        let opts = ClientOptions::default();
        assert_eq!(opts.timeout(), Duration::from_secs(10));
        assert_eq!(opts.attempt_limit(), 3);
        assert_eq!(opts.retry_delay(), Duration::from_secs(1));
    }

    #[test]
    fn zero_attempts_still_sends_once() {
        let opts = ClientOptions {
            max_attempts: 0,
            ..ClientOptions::default()
        };
        assert_eq!(opts.attempt_limit(), 1);
    }
}
