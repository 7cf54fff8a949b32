//! Registry configuration

/// Channel configuration options
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Send confirmation events to an attached event receiver
    pub emit_confirmations: bool,

    /// Number of subscriber slots to pre-allocate
    pub initial_capacity: usize,

    /// Trace every individual delivery at debug level
    pub log_deliveries: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            emit_confirmations: true,
            initial_capacity: 8,
            log_deliveries: true,
        }
    }
}

impl RegistryConfig {
    /// Disable confirmation events
    pub fn disable_confirmations(mut self) -> Self {
        self.emit_confirmations = false;
        self
    }

    /// Set the number of pre-allocated subscriber slots
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Enable or disable per-delivery tracing
    pub fn log_deliveries(mut self, enabled: bool) -> Self {
        self.log_deliveries = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();

        assert!(config.emit_confirmations);
        assert_eq!(config.initial_capacity, 8);
        assert!(config.log_deliveries);
    }

    #[test]
    fn test_builder_chaining() {
        let config = RegistryConfig::default()
            .disable_confirmations()
            .initial_capacity(64)
            .log_deliveries(false);

        assert!(!config.emit_confirmations);
        assert_eq!(config.initial_capacity, 64);
        assert!(!config.log_deliveries);
    }
}
