use std::time::Duration;

/// How long a message stays visible.
pub const MESSAGE_TTL: Duration = Duration::from_secs(5 * 60);

/// How often the background sweep runs.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Timing knobs for a [`Board`](super::Board).
///
/// ```rust
/// use bulletin::board::BoardConfig;
/// use std::time::Duration;
///
/// let config = BoardConfig::default()
///     .with_sweep_interval(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Lifetime of each message from the moment it is posted (default: 5 minutes)
    pub ttl: Duration,
    /// Period of the background sweep (default: 60 seconds)
    pub sweep_interval: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            ttl: MESSAGE_TTL,
            sweep_interval: SWEEP_INTERVAL,
        }
    }
}

impl BoardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.sweep_interval, Duration::from_secs(60));
    }

    #[test]
    fn builder_chaining() {
        let config = BoardConfig::new()
            .with_ttl(Duration::from_secs(10))
            .with_sweep_interval(Duration::from_secs(2));
        assert_eq!(config.ttl, Duration::from_secs(10));
        assert_eq!(config.sweep_interval, Duration::from_secs(2));
    }
}
