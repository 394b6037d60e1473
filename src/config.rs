//! Network configuration
//!
//! ```yaml
//! inbound_travel_time: zero    # or reverse_sum
//! strict_routes: false
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// How a cumulative travel time query answers when the first station comes
/// after the second one on the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InboundTravelTime {
    /// Inbound queries report 0.
    #[default]
    Zero,
    /// Inbound queries sum the same segments walked in reverse.
    ReverseSum,
}

/// Behaviour switches for a [`TransportNetwork`](crate::network::TransportNetwork)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Answer policy for inbound cumulative travel time queries
    pub inbound_travel_time: InboundTravelTime,

    /// Reject lines and routes that break the structural descriptor rules
    /// instead of assuming callers only submit well formed ones
    pub strict_routes: bool,
}

impl NetworkConfig {
    /// Parse a configuration from YAML. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn with_inbound_travel_time(mut self, policy: InboundTravelTime) -> Self {
        self.inbound_travel_time = policy;
        self
    }

    pub fn with_strict_routes(mut self, strict: bool) -> Self {
        self.strict_routes = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NetworkConfig::default();
        assert_eq!(config.inbound_travel_time, InboundTravelTime::Zero);
        assert!(!config.strict_routes);
    }

    #[test]
    fn test_from_yaml() {
        let config = NetworkConfig::from_yaml_str(
            "inbound_travel_time: reverse_sum\nstrict_routes: true\n",
        )
        .unwrap();
        assert_eq!(config.inbound_travel_time, InboundTravelTime::ReverseSum);
        assert!(config.strict_routes);
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = NetworkConfig::from_yaml_str("strict_routes: true").unwrap();
        assert_eq!(config.inbound_travel_time, InboundTravelTime::Zero);
        assert!(config.strict_routes);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_policy() {
        let result = NetworkConfig::from_yaml_str("inbound_travel_time: sideways");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_builder_methods() {
        let config = NetworkConfig::default()
            .with_inbound_travel_time(InboundTravelTime::ReverseSum)
            .with_strict_routes(true);
        assert_eq!(config.inbound_travel_time, InboundTravelTime::ReverseSum);
        assert!(config.strict_routes);
    }
}
