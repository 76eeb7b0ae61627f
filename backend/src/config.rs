use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use tracing::warn;

const DEFAULT_PORT: u16 = 8001;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Empty means any origin may call the API
    pub allowed_origins: Vec<HeaderValue>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `CORS_ORIGINS` (comma separated). Unparseable
    /// values are logged and replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid HOST {:?}", raw);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Ignoring invalid PORT {:?}", raw);
                defaults.port
            }),
            None => defaults.port,
        };

        let allowed_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .filter_map(|origin| match origin.parse::<HeaderValue>() {
                        Ok(value) => Some(value),
                        Err(_) => {
                            warn!("Ignoring invalid CORS origin {:?}", origin);
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self { host, port, allowed_origins }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8001");
        assert!(config.allowed_origins.is_empty());
    }

    #[test]
    fn test_overrides_and_invalid_values() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "not-a-port"),
            ("CORS_ORIGINS", "http://127.0.0.1:8080, https://food.example ,"),
        ]);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8001");
        assert_eq!(config.allowed_origins.len(), 2);
        assert_eq!(config.allowed_origins[1], "https://food.example");
    }
}
