use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_port() -> u16 {
    8080
}

fn default_environment() -> String {
    "dev".to_string()
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let mut config: Config = config.try_deserialize()?;

        // The bare ENVIRONMENT variable wins over the APP__ source.
        if let Ok(environment) = env::var("ENVIRONMENT") {
            config.environment = environment;
        }

        crate::error::set_production_mode(config.is_production());

        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "prod"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_defaults_to_dev() {
        let config = Config {
            port: 8080,
            environment: default_environment(),
        };
        assert!(!config.is_production());
    }

    #[test]
    fn prod_environment_is_production() {
        let config = Config {
            port: 8080,
            environment: "prod".to_string(),
        };
        assert!(config.is_production());
    }
}
