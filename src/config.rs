//! RouteKit configuration
//!
//! Settings are read from a TOML file:
//!
//! ```toml
//! [matching]
//! max_distance_km = 50.0
//! max_detour_percentage = 30.0
//! min_match_distance_km = 10.0
//!
//! [relay]
//! max_segment_km = 15.0
//! kinds = ["warehouse", "partner_shop"]
//!
//! [logging]
//! level = "info"
//! file = "routekit.log"
//! ```
//!
//! Every key is optional and falls back to its default.

use std::fs;
use std::path::Path;

use log::LevelFilter;

use crate::geodesy::{GeoError, GeoResult};
use crate::matching::{MatchingCriteria, RelayKind, DEFAULT_RELAY_KINDS};

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RouteKitConfig {
    /// Maximum pickup-to-delivery distance for matching, in kilometers
    pub max_distance_km: f64,
    /// Maximum accepted detour in percent
    pub max_detour_percentage: f64,
    /// Pickup and delivery must lie this close to a route's departure and arrival
    pub min_match_distance_km: f64,
    /// Maximum distance from each end of a delivery to a relay point
    pub relay_max_segment_km: f64,
    /// Relay point kinds accepted for handovers
    pub relay_kinds: Vec<RelayKind>,
    /// Default log level when no file logger is used
    pub log_level: LevelFilter,
    /// Optional log file path
    pub log_file: Option<String>,
}

impl Default for RouteKitConfig {
    fn default() -> Self {
        let criteria = MatchingCriteria::default();
        RouteKitConfig {
            max_distance_km: criteria.max_distance_km,
            max_detour_percentage: criteria.max_detour_percentage,
            min_match_distance_km: 10.0,
            relay_max_segment_km: 15.0,
            relay_kinds: DEFAULT_RELAY_KINDS.to_vec(),
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl RouteKitConfig {
    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| GeoError::Config(format!("Failed to parse TOML: {}", e)))?;

        let mut config = RouteKitConfig::default();

        if let Some(v) = Self::positive_number(&toml_value, "matching", "max_distance_km")? {
            config.max_distance_km = v;
        }
        if let Some(v) = Self::positive_number(&toml_value, "matching", "max_detour_percentage")? {
            config.max_detour_percentage = v;
        }
        if let Some(v) = Self::positive_number(&toml_value, "matching", "min_match_distance_km")? {
            config.min_match_distance_km = v;
        }
        if let Some(v) = Self::positive_number(&toml_value, "relay", "max_segment_km")? {
            config.relay_max_segment_km = v;
        }
        if let Some(kinds) = Self::relay_kinds(&toml_value)? {
            config.relay_kinds = kinds;
        }

        if let Some(level) = Self::string(&toml_value, "logging", "level")? {
            config.log_level = level.parse::<LevelFilter>()
                .map_err(|_| GeoError::Config(format!("Unknown log level: {}", level)))?;
        }
        config.log_file = Self::string(&toml_value, "logging", "file")?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> GeoResult<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_str(&contents)
    }

    /// Matching thresholds derived from this configuration
    pub fn matching_criteria(&self) -> MatchingCriteria {
        MatchingCriteria::from(self)
    }

    /// Look up `[table] key`, accepting integers or floats that are > 0
    fn positive_number(root: &toml::Value, table: &str, key: &str) -> GeoResult<Option<f64>> {
        let value = match root.get(table).and_then(|t| t.get(key)) {
            Some(v) => v,
            None => return Ok(None),
        };

        let number = match value {
            toml::Value::Float(f) => *f,
            toml::Value::Integer(i) => *i as f64,
            _ => return Err(GeoError::Config(format!("{}.{} must be a number", table, key))),
        };

        if number <= 0.0 || !number.is_finite() {
            return Err(GeoError::Config(format!("{}.{} must be positive, got {}", table, key, number)));
        }
        Ok(Some(number))
    }

    /// Look up `[relay] kinds`, an array of relay kind names
    fn relay_kinds(root: &toml::Value) -> GeoResult<Option<Vec<RelayKind>>> {
        let value = match root.get("relay").and_then(|t| t.get("kinds")) {
            Some(v) => v,
            None => return Ok(None),
        };
        let items = value.as_array()
            .ok_or_else(|| GeoError::Config("relay.kinds must be an array of strings".to_string()))?;

        items.iter()
            .map(|item| {
                let name = item.as_str()
                    .ok_or_else(|| GeoError::Config("relay.kinds must be an array of strings".to_string()))?;
                name.parse::<RelayKind>()
                    .map_err(|_| GeoError::Config(format!("Unknown relay kind: {}", name)))
            })
            .collect::<GeoResult<Vec<_>>>()
            .map(Some)
    }

    fn string(root: &toml::Value, table: &str, key: &str) -> GeoResult<Option<String>> {
        match root.get(table).and_then(|t| t.get(key)) {
            Some(toml::Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(GeoError::Config(format!("{}.{} must be a string", table, key))),
            None => Ok(None),
        }
    }
}

impl From<&RouteKitConfig> for MatchingCriteria {
    fn from(config: &RouteKitConfig) -> Self {
        MatchingCriteria {
            max_distance_km: config.max_distance_km,
            max_detour_percentage: config.max_detour_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RouteKitConfig::from_str("").unwrap();
        assert_eq!(config, RouteKitConfig::default());
        assert_eq!(config.max_detour_percentage, 30.0);
        assert_eq!(config.relay_max_segment_km, 15.0);
        assert_eq!(config.min_match_distance_km, 10.0);
        assert_eq!(config.relay_kinds, DEFAULT_RELAY_KINDS.to_vec());
    }

    #[test]
    fn test_full_config() {
        let content = r#"
            [matching]
            max_distance_km = 80
            max_detour_percentage = 12.5
            min_match_distance_km = 4

            [relay]
            max_segment_km = 7.5
            kinds = ["locker", "pickup_point"]

            [logging]
            level = "debug"
            file = "routes.log"
        "#;
        let config = RouteKitConfig::from_str(content).unwrap();
        assert_eq!(config.max_distance_km, 80.0);
        assert_eq!(config.max_detour_percentage, 12.5);
        assert_eq!(config.min_match_distance_km, 4.0);
        assert_eq!(config.relay_max_segment_km, 7.5);
        assert_eq!(config.relay_kinds, vec![RelayKind::Locker, RelayKind::PickupPoint]);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file.as_deref(), Some("routes.log"));

        let criteria = config.matching_criteria();
        assert_eq!(criteria.max_detour_percentage, 12.5);
    }

    #[test]
    fn test_invalid_values() {
        for content in [
            "[matching]\nmax_detour_percentage = \"high\"",
            "[matching]\nmax_detour_percentage = -3",
            "[relay]\nmax_segment_km = 0",
            "[matching]\nmin_match_distance_km = -1.0",
            "[logging]\nlevel = \"loud\"",
            "[relay]\nkinds = \"locker\"",
            "[relay]\nkinds = [\"depot\"]",
            "[logging]\nfile = 3",
            "not toml at all [",
        ] {
            assert!(matches!(RouteKitConfig::from_str(content), Err(GeoError::Config(_))), "{}", content);
        }
    }
}
