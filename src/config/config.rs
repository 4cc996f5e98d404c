use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse store config: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    #[error("Store config validation failed: {message}")]
    Validation { message: String },
}

/// When subscribers are invoked after a dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyPolicy {
    /// Notify after every successful dispatch.
    #[default]
    Always,
    /// Notify only when the reducer produced a state unequal to the
    /// previous one.
    OnChange,
}

/// Settings for a [`Store`](crate::Store).
///
/// Deserializable so it can sit in an application's own TOML config:
///
/// ```toml
/// name = "counter"
/// notify = "on_change"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Name recorded on every dispatch span.
    #[serde(default = "default_name")]
    pub name: String,
    /// Notification policy (default: always).
    #[serde(default)]
    pub notify: NotifyPolicy,
}

fn default_name() -> String {
    "store".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            notify: NotifyPolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Replace the store name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the notification policy.
    pub fn with_notify(mut self, notify: NotifyPolicy) -> Self {
        self.notify = notify;
        self
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: StoreConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse { source: e })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The name is not empty or whitespace
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "store name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_uses_defaults() {
        let config = StoreConfig::from_toml_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.name, "store");
        assert_eq!(config.notify, NotifyPolicy::Always);
    }

    #[test]
    fn parses_all_fields() {
        let config = StoreConfig::from_toml_str(
            r#"
            name = "counter"
            notify = "on_change"
            "#,
        )
        .unwrap();
        assert_eq!(config.name, "counter");
        assert_eq!(config.notify, NotifyPolicy::OnChange);
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = StoreConfig::from_toml_str(r#"notify = "sometimes""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rejects_blank_name() {
        let err = StoreConfig::from_toml_str(r#"name = "  ""#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn serialized_config_parses_back() {
        let config = StoreConfig::default()
            .with_name("counter")
            .with_notify(NotifyPolicy::OnChange);

        let text = toml::to_string(&config).unwrap();
        assert!(text.contains(r#"notify = "on_change""#));
        assert_eq!(StoreConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = StoreConfig::default()
            .with_name("ui")
            .with_notify(NotifyPolicy::OnChange);
        assert_eq!(config.name, "ui");
        assert_eq!(config.notify, NotifyPolicy::OnChange);
        assert!(config.validate().is_ok());
    }
}
