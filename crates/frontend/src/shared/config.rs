//! Client configuration.
//!
//! The defaults are embedded as TOML and parsed once. `HOMECARE_API_BASE`
//! set at build time overrides the API origin derived from the window.

use contracts::system::policy::PolicyConfig;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub schedule: ScheduleConfig,
    pub policy: PolicySection,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Backend port on the page's host
    pub port: u16,
    /// Absolute origin; empty means "derive from window.location"
    #[serde(default)]
    pub base: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ListConfig {
    pub page_size: usize,
    /// Debounce of the keyword input, ms
    pub search_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    pub first_hour: u32,
    pub last_hour: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PolicySection {
    pub root_username: String,
    pub protected_marker: String,
}

impl PolicySection {
    pub fn to_policy(&self) -> PolicyConfig {
        PolicyConfig {
            root_username: self.root_username.clone(),
            protected_marker: self.protected_marker.clone(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 8080

[list]
page_size = 10
search_debounce_ms = 300

[schedule]
first_hour = 6
last_hour = 20

[policy]
root_username = "root"
protected_marker = "test"
"#;

pub fn load_config() -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    if let Some(base) = option_env!("HOMECARE_API_BASE") {
        config.api.base = base.trim_end_matches('/').to_string();
    }
    if config.list.page_size == 0 {
        anyhow::bail!("list.page_size must be positive");
    }
    if config.schedule.first_hour > config.schedule.last_hour {
        anyhow::bail!("schedule.first_hour must not exceed schedule.last_hour");
    }
    Ok(config)
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Invalid embedded configuration, falling back to defaults: {}", e);
        AppConfig {
            api: ApiConfig {
                port: 8080,
                base: String::new(),
            },
            list: ListConfig {
                page_size: 10,
                search_debounce_ms: 300,
            },
            schedule: ScheduleConfig {
                first_hour: contracts::domain::a002_reservation::schedule::FIRST_SLOT_HOUR,
                last_hour: contracts::domain::a002_reservation::schedule::LAST_SLOT_HOUR,
            },
            policy: PolicySection {
                root_username: "root".to_string(),
                protected_marker: "test".to_string(),
            },
        }
    }
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.list.page_size, 10);
        assert_eq!(config.schedule.first_hour, 6);
        assert_eq!(config.schedule.last_hour, 20);
        assert_eq!(config.policy.to_policy(), PolicyConfig::default());
    }
}
