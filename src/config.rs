//! Configuration module

use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Simulated audit latency in milliseconds
    pub audit_delay_ms: u64,

    /// Maximum number of mounted pages
    pub max_sessions: usize,

    /// Seconds a page may sit untouched before it is unmounted
    pub session_ttl_secs: u64,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            audit_delay_ms: 2500,
            max_sessions: 1024,
            session_ttl_secs: 30 * 60,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            audit_delay_ms: env::var("AUDIT_DELAY_MS")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(defaults.audit_delay_ms),

            max_sessions: env::var("MAX_SESSIONS")
                .ok()
                .and_then(|m| m.parse().ok())
                .filter(|m| *m > 0)
                .unwrap_or(defaults.max_sessions),

            session_ttl_secs: env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .filter(|t| *t > 0)
                .unwrap_or(defaults.session_ttl_secs),

            environment: env::var("ENVIRONMENT")
                .unwrap_or(defaults.environment),
        }
    }

    pub fn audit_delay(&self) -> Duration {
        Duration::from_millis(self.audit_delay_ms)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// How often idle pages are swept: a tenth of the TTL, at least 1s
    pub fn sweep_period(&self) -> Duration {
        Duration::from_secs((self.session_ttl_secs / 10).max(1))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
