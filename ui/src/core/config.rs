//! Application configuration handed down the component tree as context.

use api::ClientConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Location of the analysis service.
    pub service: ClientConfig,
}

impl AppConfig {
    pub fn with_service_url(base_url: impl Into<String>) -> Self {
        Self {
            service: ClientConfig::new(base_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        let config = AppConfig::default();
        assert_eq!(config.service.analyze_url(), "http://localhost:8000/analyze");
    }

    #[test]
    fn service_url_override() {
        let config = AppConfig::with_service_url("https://labs.example.org/");
        assert_eq!(config.service.health_url(), "https://labs.example.org/health");
    }

    #[test]
    fn reads_from_json() {
        let config: AppConfig =
            serde_json::from_str(r#"{"service":{"base_url":"http://10.0.0.4:8000"}}"#).unwrap();
        assert_eq!(config, AppConfig::with_service_url("http://10.0.0.4:8000"));
    }
}
