/// Environment variable names
pub mod env_vars {
    pub const PORT: &str = "NOTES_SERVICE_PORT";
    /// Generic fallback used by most hosting platforms
    pub const FALLBACK_PORT: &str = "PORT";
    pub const HOST: &str = "NOTES_SERVICE_HOST";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 3002;
    pub const HOST: &str = "127.0.0.1";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup(env_vars::PORT)
            .or_else(|| lookup(env_vars::FALLBACK_PORT))
            .and_then(|raw| match raw.trim().parse::<u16>() {
                Ok(port) => Some(port),
                Err(e) => {
                    log::warn!("Ignoring invalid port {:?}: {}", raw, e);
                    None
                }
            })
            .unwrap_or(defaults::PORT);

        let host = lookup(env_vars::HOST)
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| defaults::HOST.to_string());

        Self { host, port }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr(), "127.0.0.1:3002");
    }

    #[test]
    fn test_port_precedence() {
        let config = Config::from_lookup(lookup(&[("PORT", "8000")]));
        assert_eq!(config.port, 8000);

        let config = Config::from_lookup(lookup(&[("PORT", "8000"), ("NOTES_SERVICE_PORT", "9000")]));
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = Config::from_lookup(lookup(&[("NOTES_SERVICE_PORT", "not-a-port")]));
        assert_eq!(config.port, defaults::PORT);
    }

    #[test]
    fn test_host_override() {
        let config = Config::from_lookup(lookup(&[("NOTES_SERVICE_HOST", "0.0.0.0")]));
        assert_eq!(config.bind_addr(), "0.0.0.0:3002");
    }
}
