//! Runtime configuration.

use serde::{Deserialize, Serialize};

use crate::error::ClinicResult;

/// How the doctors page reacts to a specialty change.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Re-render the full list and only report the matching count.
    #[default]
    Notice,
    /// Render only the matching doctors.
    Apply,
}

/// Clinic front-end configuration. Every field has a default, so an empty
/// JSON object is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClinicConfig {
    /// Delay before a booking confirmation is hidden again
    pub hide_delay_ms: u32,
    /// Prefix of appointment reference ids
    pub appointment_prefix: String,
    /// Prefix of test order reference ids
    pub test_prefix: String,
    /// Largest numeric suffix of a generated reference id (inclusive)
    pub max_reference_number: u32,
    /// Page the "View Details" link points at
    pub doctor_detail_page: String,
    /// Text shown in the selected-doctor field when nothing is selected
    pub doctor_placeholder: String,
    pub filter_mode: FilterMode,
    /// `log` level name used by the browser console logger
    pub log_level: String,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: 5000,
            appointment_prefix: "CC".into(),
            test_prefix: "LAB".into(),
            max_reference_number: 9999,
            doctor_detail_page: "doctors.html".into(),
            doctor_placeholder: "Please select a doctor above".into(),
            filter_mode: FilterMode::Notice,
            log_level: "debug".into(),
        }
    }
}

impl ClinicConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ClinicResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an optional page-supplied configuration. Absent or invalid JSON
    /// yields the defaults; an invalid one is logged.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Parsed `log_level`, falling back to `Debug` for unknown names.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = ClinicConfig::from_json("{}").unwrap();
        assert_eq!(config, ClinicConfig::default());
        assert_eq!(config.hide_delay_ms, 5000);
        assert_eq!(config.filter_mode, FilterMode::Notice);
    }

    #[test]
    fn test_partial_override() {
        let config =
            ClinicConfig::from_json(r#"{"hide_delay_ms": 250, "filter_mode": "apply"}"#).unwrap();
        assert_eq!(config.hide_delay_ms, 250);
        assert_eq!(config.filter_mode, FilterMode::Apply);
        assert_eq!(config.appointment_prefix, "CC");
    }

    #[test]
    fn test_malformed_json() {
        let err = ClinicConfig::from_json("{hide_delay_ms").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_or_default() {
        assert_eq!(ClinicConfig::from_json_or_default(None), ClinicConfig::default());
        assert_eq!(
            ClinicConfig::from_json_or_default(Some("{hide_delay_ms")),
            ClinicConfig::default()
        );
        assert_eq!(
            ClinicConfig::from_json_or_default(Some(r#"{"test_prefix": "T"}"#)).test_prefix,
            "T"
        );
    }

    #[test]
    fn test_log_level() {
        let mut config = ClinicConfig::default();
        config.log_level = "warn".into();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.log_level = "loud".into();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
