//! Environment-sourced configuration.
//!
//! Every knob has a documented default so the server starts with no
//! environment at all (pointing at a local API).

use std::env;
use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

/// Default upstream API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default HTTP transport bind port.
pub const DEFAULT_HTTP_PORT: u16 = 3737;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    #[diagnostic(code(taskdeck::config::invalid_value))]
    InvalidValue { var: &'static str, value: String },
}

/// Which MCP transport(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    #[default]
    Stdio,
    Http,
    Both,
}

impl std::str::FromStr for Transport {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "stdio" => Ok(Transport::Stdio),
            "http" => Ok(Transport::Http),
            "both" => Ok(Transport::Both),
            other => Err(ConfigError::InvalidValue {
                var: "TASKDECK_TRANSPORT",
                value: other.to_string(),
            }),
        }
    }
}

/// Server configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream REST API base URL.
    pub api_url: String,
    /// Timeout applied to every upstream HTTP call.
    pub api_timeout: Duration,
    /// EnvFilter default when RUST_LOG is unset.
    pub log_level: String,
    /// MCP server name reported during initialize.
    pub server_name: String,
    /// MCP server version reported during initialize.
    pub server_version: String,
    pub transport: Transport,
    pub http_host: String,
    pub http_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: "info".to_string(),
            server_name: "taskdeck-mcp".to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
            transport: Transport::Stdio,
            http_host: "127.0.0.1".to_string(),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

impl Config {
    /// Load configuration from `TASKDECK_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| env::var(var).ok())
    }

    /// Resolution over an arbitrary variable lookup. Tests pass a map
    /// here instead of mutating the process environment.
    fn from_vars(vars: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(url) = vars("TASKDECK_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = vars("TASKDECK_API_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| ConfigError::InvalidValue {
                var: "TASKDECK_API_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
            config.api_timeout = Duration::from_secs(secs);
        }
        if let Some(level) = vars("TASKDECK_LOG") {
            config.log_level = level;
        }
        if let Some(name) = vars("TASKDECK_SERVER_NAME") {
            config.server_name = name;
        }
        if let Some(version) = vars("TASKDECK_SERVER_VERSION") {
            config.server_version = version;
        }
        if let Some(transport) = vars("TASKDECK_TRANSPORT") {
            config.transport = transport.parse()?;
        }
        if let Some(host) = vars("TASKDECK_HTTP_HOST") {
            config.http_host = host;
        }
        if let Some(port) = vars("TASKDECK_HTTP_PORT") {
            config.http_port = port.parse().map_err(|_| ConfigError::InvalidValue {
                var: "TASKDECK_HTTP_PORT",
                value: port.clone(),
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.api_timeout, Duration::from_secs(30));
        assert_eq!(config.transport, Transport::Stdio);
        assert_eq!(config.http_port, 3737);
    }

    #[test]
    fn transport_parses_known_values() {
        assert_eq!("stdio".parse::<Transport>().unwrap(), Transport::Stdio);
        assert_eq!("http".parse::<Transport>().unwrap(), Transport::Http);
        assert_eq!("both".parse::<Transport>().unwrap(), Transport::Both);
    }

    #[test]
    fn transport_rejects_unknown_value() {
        let err = "websocket".parse::<Transport>().unwrap_err();
        assert!(err.to_string().contains("websocket"));
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_vars(vars(&[
            ("TASKDECK_API_URL", "https://tasks.example.com/"),
            ("TASKDECK_API_TIMEOUT_SECS", "5"),
            ("TASKDECK_TRANSPORT", "http"),
            ("TASKDECK_HTTP_HOST", "0.0.0.0"),
            ("TASKDECK_HTTP_PORT", "8080"),
        ]))
        .unwrap();
        // trailing slash is trimmed so path joins stay single-slashed
        assert_eq!(config.api_url, "https://tasks.example.com");
        assert_eq!(config.api_timeout, Duration::from_secs(5));
        assert_eq!(config.transport, Transport::Http);
        assert_eq!(config.http_host, "0.0.0.0");
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn unset_variables_fall_back_to_defaults() {
        let config = Config::from_vars(|_| None).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.transport, Transport::Stdio);
        assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
    }

    #[test]
    fn partial_overrides_keep_remaining_defaults() {
        let config =
            Config::from_vars(vars(&[("TASKDECK_SERVER_NAME", "taskdeck-staging")])).unwrap();
        assert_eq!(config.server_name, "taskdeck-staging");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        let err = Config::from_vars(vars(&[("TASKDECK_API_TIMEOUT_SECS", "soon")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { var, value } => {
                assert_eq!(var, "TASKDECK_API_TIMEOUT_SECS");
                assert_eq!(value, "soon");
            }
        }
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = Config::from_vars(vars(&[("TASKDECK_HTTP_PORT", "default")])).unwrap_err();
        match err {
            ConfigError::InvalidValue { var, value } => {
                assert_eq!(var, "TASKDECK_HTTP_PORT");
                assert_eq!(value, "default");
            }
        }
    }

    #[test]
    fn bad_transport_variable_fails_resolution() {
        let err = Config::from_vars(vars(&[("TASKDECK_TRANSPORT", "tcp")])).unwrap_err();
        assert!(err.to_string().contains("TASKDECK_TRANSPORT"));
        assert!(err.to_string().contains("tcp"));
    }
}
