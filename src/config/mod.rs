// src/config/mod.rs
// All runtime settings come from the environment (.env supported).

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct ReflectConfig {
    // ── Gemini Configuration
    /// Absence is not fatal at startup; every chat request checks it
    /// and fails with a configuration error when unset.
    pub gemini_api_key: Option<String>,
    pub model: String,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── Logging Configuration
    pub log_level: String,
}

/// Parse an env var, trimming whitespace and inline comments.
/// A missing or unparsable value falls back to the default.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            clean_val.parse::<T>().unwrap_or(default)
        }
        Err(_) => default,
    }
}

impl ReflectConfig {
    pub fn from_env() -> Self {
        // Load .env first if present; missing file is fine.
        dotenvy::dotenv().ok();

        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            model: env_var_or("REFLECT_MODEL", "gemini-1.5-flash".to_string()),
            host: env_var_or("REFLECT_HOST", "0.0.0.0".to_string()),
            port: env_var_or("REFLECT_PORT", 8080),
            log_level: env_var_or("REFLECT_LOG", "info".to_string()),
        }
    }
}

pub static CONFIG: Lazy<ReflectConfig> = Lazy::new(ReflectConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_or_missing_uses_default() {
        let v: u16 = env_var_or("REFLECT_TEST_MISSING_VAR", 8080);
        assert_eq!(v, 8080);
    }

    #[test]
    fn test_env_var_or_strips_comment() {
        // SAFETY: test-only env mutation, unique key
        unsafe { std::env::set_var("REFLECT_TEST_COMMENT_VAR", "9090 # dev port") };
        let v: u16 = env_var_or("REFLECT_TEST_COMMENT_VAR", 8080);
        assert_eq!(v, 9090);
    }

    #[test]
    fn test_env_var_or_unparsable_uses_default() {
        unsafe { std::env::set_var("REFLECT_TEST_BAD_VAR", "not-a-port") };
        let v: u16 = env_var_or("REFLECT_TEST_BAD_VAR", 8080);
        assert_eq!(v, 8080);
    }
}
