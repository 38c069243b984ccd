//! User-level configuration for mindgauge
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/mindgauge/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactConfig {
    /// Where the complete-data results email goes
    pub admin_email: Option<String>,

    /// Sender address on composed emails
    pub from_address: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeliveryConfig {
    /// Artificial delay before the simulated send, in milliseconds
    pub simulate_delay_ms: Option<u64>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/mindgauge/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = UserConfig::default();

        // Load user config
        if let Some(user_config) = Self::user_config_path()
            .filter(|p| p.exists())
            .and_then(|p| std::fs::read_to_string(&p).ok())
            .and_then(|content| toml::from_str::<UserConfig>(&content).ok())
        {
            config.merge(user_config);
        }

        // Environment variables override everything
        if let Ok(email) = std::env::var("MINDGAUGE_ADMIN_EMAIL") {
            config.contact.admin_email = Some(email);
        }
        if let Ok(addr) = std::env::var("MINDGAUGE_FROM_ADDRESS") {
            config.contact.from_address = Some(addr);
        }
        if let Ok(ms) = std::env::var("MINDGAUGE_DELIVERY_DELAY_MS") {
            if let Ok(ms) = ms.parse() {
                config.delivery.simulate_delay_ms = Some(ms);
            }
        }

        Ok(config)
    }

    /// Get the user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mindgauge").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        if other.contact.admin_email.is_some() {
            self.contact.admin_email = other.contact.admin_email;
        }
        if other.contact.from_address.is_some() {
            self.contact.from_address = other.contact.from_address;
        }
        if other.delivery.simulate_delay_ms.is_some() {
            self.delivery.simulate_delay_ms = other.delivery.simulate_delay_ms;
        }
    }

    /// Admin recipient for complete-data result emails
    pub fn admin_email(&self) -> &str {
        self.contact
            .admin_email
            .as_deref()
            .unwrap_or("admin@mindgauge.example")
    }

    /// Sender address for composed emails
    pub fn from_address(&self) -> &str {
        self.contact
            .from_address
            .as_deref()
            .unwrap_or("noreply@mindgauge.example")
    }

    /// Artificial delay applied before the simulated send
    pub fn delivery_delay(&self) -> Duration {
        Duration::from_millis(self.delivery.simulate_delay_ms.unwrap_or(2000))
    }

    /// Initialize user config directory and create example config
    pub fn init_user_config() -> Result<PathBuf> {
        let config_path = Self::user_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if !config_path.exists() {
            let example = r#"# Mindgauge User Configuration

[contact]
# Where the complete-data results email goes
# admin_email = "admin@mindgauge.example"

# Sender address on composed emails
# from_address = "noreply@mindgauge.example"

[delivery]
# Artificial delay before the simulated send, in milliseconds
# simulate_delay_ms = 2000
"#;
            std::fs::write(&config_path, example)?;
        }

        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UserConfig::default();
        assert_eq!(config.admin_email(), "admin@mindgauge.example");
        assert_eq!(config.from_address(), "noreply@mindgauge.example");
        assert_eq!(config.delivery_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_toml_parsing() {
        let toml_str = r#"
[contact]
admin_email = "clinic@example.com"
from_address = "results@example.com"

[delivery]
simulate_delay_ms = 250
"#;
        let config: UserConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.admin_email(), "clinic@example.com");
        assert_eq!(config.from_address(), "results@example.com");
        assert_eq!(config.delivery_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_toml_parsing_minimal() {
        let config: UserConfig = toml::from_str("").unwrap();
        assert_eq!(config.admin_email(), "admin@mindgauge.example");
    }

    #[test]
    fn test_invalid_toml_does_not_crash() {
        let bad_toml = "this is [[ not valid toml {{{}}}";
        let result = toml::from_str::<UserConfig>(bad_toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_overrides_set_fields() {
        let mut base = UserConfig::default();
        let other = UserConfig {
            contact: ContactConfig {
                admin_email: Some("clinic@example.com".to_string()),
                from_address: None,
            },
            delivery: DeliveryConfig {
                simulate_delay_ms: Some(0),
            },
        };
        base.merge(other);
        assert_eq!(base.admin_email(), "clinic@example.com");
        // Unset fields keep their defaults
        assert_eq!(base.from_address(), "noreply@mindgauge.example");
        assert_eq!(base.delivery_delay(), Duration::ZERO);
    }

    #[test]
    fn test_user_config_path_returns_some() {
        // On most systems, config_dir() should return a valid path
        if let Some(p) = UserConfig::user_config_path() {
            assert!(p.ends_with("mindgauge/config.toml"));
        }
    }
}
