//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. The destination base is fixed for the process lifetime; it is
//! injected into the resolver at startup rather than read as a global.
//!
//! ## Required Variables
//!
//! - `DESTINATION_BASE` - Origin of the second-stage landing surface,
//!   e.g. `https://landing.example.com`
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CLICK_QUEUE_CAPACITY` - Click audit buffer size (default: 10000, min: 100)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the second-stage landing surface. Fixed at startup and
    /// shared read-only by all requests.
    pub destination_base: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Click audit event buffer size.
    pub click_queue_capacity: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DESTINATION_BASE` is missing.
    pub fn from_env() -> Result<Self> {
        let destination_base =
            env::var("DESTINATION_BASE").context("DESTINATION_BASE must be set")?;
        let destination_base = destination_base.trim_end_matches('/').to_string();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let click_queue_capacity = env::var("CLICK_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        Ok(Self {
            destination_base,
            listen_addr,
            log_level,
            log_format,
            click_queue_capacity,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `destination_base` is not an absolute `http`/`https` URL with a host,
    ///   or carries a query or fragment
    /// - `click_queue_capacity` is out of range
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.destination_base).with_context(|| {
            format!(
                "DESTINATION_BASE is not a valid URL: '{}'",
                self.destination_base
            )
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => anyhow::bail!("DESTINATION_BASE must use http or https, got '{}'", other),
        }

        if url.host_str().is_none() {
            anyhow::bail!("DESTINATION_BASE must include a host");
        }

        if url.query().is_some() || url.fragment().is_some() {
            anyhow::bail!("DESTINATION_BASE must not carry a query or fragment");
        }

        if self.click_queue_capacity < 100 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY must be at least 100, got {}",
                self.click_queue_capacity
            );
        }

        if self.click_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.click_queue_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Destination base: {}", self.destination_base);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Click queue capacity: {}", self.click_queue_capacity);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            destination_base: "https://landing.example.com".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            click_queue_capacity: 10_000,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Scheme allow-list
        config.destination_base = "ftp://landing.example.com".to_string();
        assert!(config.validate().is_err());

        config.destination_base = "http://landing.example.com".to_string();
        assert!(config.validate().is_ok());

        // Not a URL at all
        config.destination_base = "landing.example.com".to_string();
        assert!(config.validate().is_err());

        // Query and fragment are rejected
        config.destination_base = "https://landing.example.com?x=1".to_string();
        assert!(config.validate().is_err());

        config.destination_base = "https://landing.example.com#frag".to_string();
        assert!(config.validate().is_err());

        config.destination_base = "https://landing.example.com".to_string();

        // Queue capacity bounds
        config.click_queue_capacity = 50;
        assert!(config.validate().is_err());

        config.click_queue_capacity = 2_000_000;
        assert!(config.validate().is_err());

        config.click_queue_capacity = 10_000;

        // Log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_destination_base() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DESTINATION_BASE");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DESTINATION_BASE", "https://landing.example.com");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("CLICK_QUEUE_CAPACITY");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.destination_base, "https://landing.example.com");
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.click_queue_capacity, 10_000);

        // Cleanup
        unsafe {
            env::remove_var("DESTINATION_BASE");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_trims_trailing_slash() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DESTINATION_BASE", "https://landing.example.com/");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.destination_base, "https://landing.example.com");

        // Cleanup
        unsafe {
            env::remove_var("DESTINATION_BASE");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_reads_queue_capacity() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DESTINATION_BASE", "https://landing.example.com");
            env::set_var("CLICK_QUEUE_CAPACITY", "500");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.click_queue_capacity, 500);

        // Cleanup
        unsafe {
            env::remove_var("DESTINATION_BASE");
            env::remove_var("CLICK_QUEUE_CAPACITY");
        }
    }
}
