//! Configuration resolution and constants.
//!
//! The service has a single real setting: the TCP port to listen on.
//! It is resolved with priority CLI flag > `PORT` environment variable >
//! default, and is immutable after process start - the resolved
//! `AppConfig` is passed into router construction rather than read from
//! process-wide state.

/// Default TCP port when neither the CLI flag nor `PORT` is set
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variable consulted for the listen port
pub const PORT_ENV_VAR: &str = "PORT";

/// Address the service binds to
pub const BIND_HOST: &str = "0.0.0.0";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "pulse=debug";

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to bind the listener on
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
}

impl AppConfig {
    /// Resolve configuration from an optional CLI override and the environment.
    pub fn resolve(cli_port: Option<u16>) -> Self {
        let port = cli_port
            .unwrap_or_else(|| resolve_port(std::env::var(PORT_ENV_VAR).ok().as_deref()));

        Self {
            host: BIND_HOST.to_string(),
            port,
        }
    }
}

/// Parse the listen port from a `PORT` environment value.
///
/// Valid ports are 1-65535. An absent, unparsable, or zero value falls
/// back to [`DEFAULT_PORT`] with a warning.
pub fn resolve_port(env_value: Option<&str>) -> u16 {
    match env_value {
        None => DEFAULT_PORT,
        Some(raw) => match raw.trim().parse::<u16>() {
            Ok(port) if port > 0 => port,
            _ => {
                tracing::warn!(value = %raw, default = DEFAULT_PORT, "Invalid PORT value, using default");
                DEFAULT_PORT
            }
        },
    }
}
