//! Reader configuration

use serde::{Deserialize, Serialize};

pub use crate::smc::key::KeyPolicy;

/// How a successful reading is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Signature: 0x...` followed by `<name>: [ .. ]`
    #[default]
    Text,
    /// One JSON object per reading
    Json,
}

/// Settings for one key read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub key_policy: KeyPolicy,
    pub format: OutputFormat,
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_policy(mut self, policy: KeyPolicy) -> Self {
        self.key_policy = policy;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert_eq!(config.key_policy, KeyPolicy::Strict);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_builder() {
        let config = ReaderConfig::new().with_key_policy(KeyPolicy::Lenient).with_format(OutputFormat::Json);
        assert_eq!(config.key_policy, KeyPolicy::Lenient);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ReaderConfig = serde_json::from_str(r#"{"key_policy":"lenient"}"#).unwrap();
        assert_eq!(config.key_policy, KeyPolicy::Lenient);
        assert_eq!(config.format, OutputFormat::Text);
    }
}
