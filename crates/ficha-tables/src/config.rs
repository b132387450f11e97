//! Configuration for a table roller.

/// Configuration for a [`crate::TableRoller`].
#[derive(Debug, Clone)]
pub struct TablesConfig {
    /// RNG seed for reproducible rolls.
    pub seed: u64,
    /// How many results the history keeps (at least 1).
    pub history_limit: usize,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            history_limit: 10,
        }
    }
}

impl TablesConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the history length (raised to 1 if lower).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = TablesConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.history_limit, 10);
    }

    #[test]
    fn builder_methods() {
        let cfg = TablesConfig::default().with_seed(123).with_history_limit(3);
        assert_eq!(cfg.seed, 123);
        assert_eq!(cfg.history_limit, 3);
    }

    #[test]
    fn history_limit_at_least_one() {
        assert_eq!(TablesConfig::default().with_history_limit(0).history_limit, 1);
    }
}
