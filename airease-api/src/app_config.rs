use airease_supplier::AmadeusConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub search: SearchConfig,
    pub provider: ProviderConfig,
    #[serde(default)]
    pub amadeus: AmadeusConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_visibility_limit")]
    pub visibility_limit: usize,
}

fn default_visibility_limit() -> usize {
    airease_core::DEFAULT_VISIBILITY_LIMIT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            visibility_limit: default_visibility_limit(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Mock,
    Amadeus,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    /// Fixed seed for a reproducible mock catalog
    pub seed: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. AIREASE_PROVIDER__KIND=amadeus
            .add_source(config::Environment::with_prefix("AIREASE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_sections() {
        let s = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [server]
                port = 9000

                [auth]
                jwt_secret = "s"

                [provider]
                kind = "amadeus"
                seed = 7
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let cfg: Config = s.try_deserialize().unwrap();

        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.provider.kind, ProviderKind::Amadeus);
        assert_eq!(cfg.provider.seed, Some(7));
        assert_eq!(cfg.search.visibility_limit, 3);
        assert_eq!(cfg.amadeus.timeout_seconds, 30);
    }
}
