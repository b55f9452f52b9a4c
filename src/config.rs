//! Layered runtime configuration.
//!
//! Merge order (later overrides earlier):
//! 1. Compiled defaults
//! 2. `./techtrends.toml`
//! 3. `TECHTRENDS_*` environment variables

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "techtrends.toml";
pub const ENV_PREFIX: &str = "TECHTRENDS_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7111,
            database_path: PathBuf::from("database.db"),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_match_reference_deployment() {
        Jail::expect_with(|_jail| {
            let cfg = Config::load()?;
            assert_eq!(cfg, Config::default());
            assert_eq!(cfg.bind_addr(), "0.0.0.0:7111");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_toml() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                port = 8000
                database_path = "/tmp/blog.db"
                "#,
            )?;
            jail.set_env("TECHTRENDS_PORT", "9000");
            jail.set_env("TECHTRENDS_LOGLEVEL", "debug");

            let cfg = Config::load()?;
            assert_eq!(cfg.port, 9000);
            assert_eq!(cfg.database_path, PathBuf::from("/tmp/blog.db"));
            assert_eq!(cfg.loglevel, "debug");
            assert_eq!(cfg.host, "0.0.0.0");
            Ok(())
        });
    }
}
