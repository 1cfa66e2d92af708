use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOST must be an IP address, got {value:?}")]
    InvalidHost {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("PORT must be a number between 1 and 65535, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("PORT must not be 0")]
    ZeroPort,
    #[error("FRONTEND_DIST must not be empty")]
    EmptyFrontendDist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    // 'development' for dev, anything else counts as production
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("development") {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub frontend_dist: PathBuf,
    pub environment: Environment,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .map_err(|source| ConfigError::InvalidHost { value, source })?,
            None => DEFAULT_HOST,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        if port == 0 {
            return Err(ConfigError::ZeroPort);
        }

        let frontend_dist = match lookup("FRONTEND_DIST") {
            Some(value) if value.trim().is_empty() => return Err(ConfigError::EmptyFrontendDist),
            Some(value) => PathBuf::from(value.trim()),
            None => PathBuf::from(DEFAULT_FRONTEND_DIST),
        };

        let environment = lookup("ENVIRONMENT")
            .map(|value| Environment::parse(&value))
            .unwrap_or(Environment::Development);

        Ok(Self {
            host,
            port,
            frontend_dist,
            environment,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.frontend_dist.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.frontend_dist, PathBuf::from("../frontend/dist"));
        assert_eq!(config.index_file(), PathBuf::from("../frontend/dist/index.html"));
        assert!(config.environment.is_development());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("FRONTEND_DIST", "/srv/coralguard"),
            ("ENVIRONMENT", "production"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.frontend_dist, PathBuf::from("/srv/coralguard"));
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn rejects_bad_ports() {
        assert!(matches!(config_from(&[("PORT", "http")]), Err(ConfigError::InvalidPort { .. })));
        assert!(matches!(config_from(&[("PORT", "70000")]), Err(ConfigError::InvalidPort { .. })));
        assert!(matches!(config_from(&[("PORT", "-1")]), Err(ConfigError::InvalidPort { .. })));
        assert!(matches!(config_from(&[("PORT", "0")]), Err(ConfigError::ZeroPort)));
    }

    #[test]
    fn rejects_bad_host_and_empty_dist() {
        assert!(matches!(config_from(&[("HOST", "localhost:80")]), Err(ConfigError::InvalidHost { .. })));
        assert!(matches!(config_from(&[("FRONTEND_DIST", "  ")]), Err(ConfigError::EmptyFrontendDist)));
    }

    #[test]
    fn unknown_environment_counts_as_production() {
        let config = config_from(&[("ENVIRONMENT", "staging")]).unwrap();
        assert!(!config.environment.is_development());
        let config = config_from(&[("ENVIRONMENT", "Development")]).unwrap();
        assert!(config.environment.is_development());
    }
}
