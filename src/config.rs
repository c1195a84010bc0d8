use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

use crate::core::services::ServiceSettings;

pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub jwt_secret: String,
    pub session_ttl_secs: u64,
    pub invite_ttl_hours: i64,
    pub invite_max_uses: u32,
    pub currency_code: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("jwt_secret", &"<redacted>")
            .field("session_ttl_secs", &self.session_ttl_secs)
            .field("invite_ttl_hours", &self.invite_ttl_hours)
            .field("invite_max_uses", &self.invite_max_uses)
            .field("currency_code", &self.currency_code)
            .finish()
    }
}

fn parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: parsed("PORT", 3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "secret".to_string()), // Use a secure secret in production
            session_ttl_secs: parsed("SESSION_TTL_SECS", 3600),
            invite_ttl_hours: parsed("INVITE_TTL_HOURS", 72),
            invite_max_uses: parsed("INVITE_MAX_USES", 5),
            currency_code: env::var("CURRENCY_CODE").unwrap_or_else(|_| "USD".to_string()),
        }
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            invite_ttl_hours: self.invite_ttl_hours,
            invite_max_uses: self.invite_max_uses,
            currency_code: self.currency_code.clone(),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
