use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub business_rules: BusinessRules,
}

/// Artificial latency of each mock collaborator, in milliseconds.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    pub search_latency_ms: u64,
    pub seat_map_latency_ms: u64,
    pub booking_latency_ms: u64,
    pub history_latency_ms: u64,
    pub cancellation_latency_ms: u64,
}

impl SimulationConfig {
    /// All latencies zero. Used by tests and scripted runs.
    pub fn instant() -> Self {
        Self {
            search_latency_ms: 0,
            seat_map_latency_ms: 0,
            booking_latency_ms: 0,
            history_latency_ms: 0,
            cancellation_latency_ms: 0,
        }
    }

    pub fn search_latency(&self) -> Duration {
        Duration::from_millis(self.search_latency_ms)
    }

    pub fn seat_map_latency(&self) -> Duration {
        Duration::from_millis(self.seat_map_latency_ms)
    }

    pub fn booking_latency(&self) -> Duration {
        Duration::from_millis(self.booking_latency_ms)
    }

    pub fn history_latency(&self) -> Duration {
        Duration::from_millis(self.history_latency_ms)
    }

    pub fn cancellation_latency(&self) -> Duration {
        Duration::from_millis(self.cancellation_latency_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            search_latency_ms: 1500,
            seat_map_latency_ms: 1000,
            booking_latency_ms: 2000,
            history_latency_ms: 800,
            cancellation_latency_ms: 1500,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BusinessRules {
    pub tax_rate: f64,
    pub confirmation_timeout_seconds: u64,
    pub require_seat_per_passenger: bool,
    pub default_max_price: i32,
}

impl BusinessRules {
    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_secs(self.confirmation_timeout_seconds)
    }
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            tax_rate: 0.15,
            confirmation_timeout_seconds: 30,
            require_seat_per_passenger: true,
            default_max_price: 10_000,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `ONWARD__BUSINESS_RULES__TAX_RATE=0.2`
            .add_source(config::Environment::with_prefix("ONWARD").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.simulation.booking_latency(), Duration::from_millis(2000));
        assert_eq!(config.business_rules.tax_rate, 0.15);
        assert_eq!(config.business_rules.confirmation_timeout(), Duration::from_secs(30));
        assert!(config.business_rules.require_seat_per_passenger);
        assert_eq!(config.business_rules.default_max_price, 10_000);
    }

    #[test]
    fn test_partial_source_falls_back_to_defaults() {
        let source = config::Config::builder()
            .add_source(config::File::from_str(
                "[business_rules]\ntax_rate = 0.2\n\n[simulation]\nsearch_latency_ms = 5\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: Config = source.try_deserialize().unwrap();

        assert_eq!(config.business_rules.tax_rate, 0.2);
        assert_eq!(config.business_rules.confirmation_timeout_seconds, 30);
        assert_eq!(config.simulation.search_latency_ms, 5);
        assert_eq!(config.simulation.seat_map_latency_ms, 1000);
    }
}
