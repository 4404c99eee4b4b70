//! Runtime settings, read from the environment (and `.env` via `dotenvy`).
//!
//! | Variable            | Default                                   |
//! |---------------------|-------------------------------------------|
//! | `PORT`              | `3000`                                    |
//! | `CORS_ORIGINS`      | production origin + local dev origins     |
//! | `ADMIN_RESET_KEY`   | unset (reset endpoint refuses every call) |
//! | `MAX_FILE_SIZE`     | 10 MiB                                    |
//! | `FINGERPRINT_PATH`  | unset (in-memory index)                   |
//! | `ALERT_WEBHOOK_URL` | unset (alerts are only logged)            |

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

pub const DEFAULT_ORIGINS: [&str; 4] = [
    "https://finance-ai-project-eight.vercel.app",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8080",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub admin_reset_key: Option<String>,
    pub max_file_size: usize,
    pub fingerprint_path: Option<PathBuf>,
    pub alert_webhook_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect(),
            admin_reset_key: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            fingerprint_path: None,
            alert_webhook_url: None,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    ///
    /// Unparseable numbers fall back to their default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let cors_origins = var("CORS_ORIGINS")
            .map(|raw| split_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or(defaults.cors_origins);

        Self {
            port: parse_or(var("PORT"), "PORT", defaults.port),
            cors_origins,
            admin_reset_key: var("ADMIN_RESET_KEY"),
            max_file_size: parse_or(var("MAX_FILE_SIZE"), "MAX_FILE_SIZE", defaults.max_file_size),
            fingerprint_path: var("FINGERPRINT_PATH").map(PathBuf::from),
            alert_webhook_url: var("ALERT_WEBHOOK_URL"),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Upload limit in whole MiB, as shown in error messages.
    pub fn max_file_size_mb(&self) -> usize {
        self.max_file_size / (1024 * 1024)
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.trim_end_matches('/').to_string())
        .collect()
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(raw: Option<String>, name: &str, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("⚠️ Invalid {}={:?}, using {}", name, value, default);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(vars: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.max_file_size_mb(), 10);
        assert!(settings.cors_origins.contains(&"http://localhost:3000".to_string()));
        assert!(settings.admin_reset_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("PORT", "8000"),
            ("CORS_ORIGINS", "https://a.example, https://b.example/ ,"),
            ("ADMIN_RESET_KEY", "secret"),
            ("MAX_FILE_SIZE", "2048"),
            ("FINGERPRINT_PATH", "/tmp/fp.json"),
        ]);
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(settings.admin_reset_key.as_deref(), Some("secret"));
        assert_eq!(settings.max_file_size, 2048);
        assert_eq!(settings.fingerprint_path, Some(PathBuf::from("/tmp/fp.json")));
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let settings = settings_from(&[("PORT", "http"), ("MAX_FILE_SIZE", "-1"), ("ADMIN_RESET_KEY", "  ")]);
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.max_file_size, DEFAULT_MAX_FILE_SIZE);
        assert!(settings.admin_reset_key.is_none());
    }
}
