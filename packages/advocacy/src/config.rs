use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domains::gallery::ModerationPolicy;

/// Session configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Fallback tracing filter when RUST_LOG is unset
    pub log_filter: String,
    pub admin_email: String,
    pub require_uploader_email: bool,
    pub moderation_policy: ModerationPolicy,
    pub chat_typing_delay_min: Duration,
    pub chat_typing_delay_max: Duration,
    /// Seed for default chat responses; None selects round robin
    pub chat_seed: Option<u64>,
    pub petition_initial_signatures: u64,
    pub petition_goal: u64,
    /// Pending count above which review reminders go out as high priority
    pub pending_alert_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info,advocacy_core=debug".to_string(),
            admin_email: "admin@fathersrights.org".to_string(),
            require_uploader_email: false,
            moderation_policy: ModerationPolicy::Strict,
            chat_typing_delay_min: Duration::from_millis(1000),
            chat_typing_delay_max: Duration::from_millis(2000),
            chat_seed: None,
            petition_initial_signatures: 48_742,
            petition_goal: 100_000,
            pending_alert_threshold: 5,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        let chat_typing_delay_min = Duration::from_millis(parse_var(
            "CHAT_TYPING_DELAY_MIN_MS",
            defaults.chat_typing_delay_min.as_millis() as u64,
        )?);
        let chat_typing_delay_max = Duration::from_millis(parse_var(
            "CHAT_TYPING_DELAY_MAX_MS",
            defaults.chat_typing_delay_max.as_millis() as u64,
        )?);
        if chat_typing_delay_max < chat_typing_delay_min {
            anyhow::bail!(
                "CHAT_TYPING_DELAY_MAX_MS ({:?}) must not be below CHAT_TYPING_DELAY_MIN_MS ({:?})",
                chat_typing_delay_max,
                chat_typing_delay_min
            );
        }

        Ok(Self {
            log_filter: env::var("ADVOCACY_LOG").unwrap_or(defaults.log_filter),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            require_uploader_email: parse_var(
                "REQUIRE_UPLOADER_EMAIL",
                defaults.require_uploader_email,
            )?,
            moderation_policy: parse_var("MODERATION_POLICY", defaults.moderation_policy)?,
            chat_typing_delay_min,
            chat_typing_delay_max,
            chat_seed: env::var("CHAT_SEED")
                .ok()
                .map(|s| s.parse())
                .transpose()
                .context("CHAT_SEED must be a valid u64")?,
            petition_initial_signatures: parse_var(
                "PETITION_INITIAL_SIGNATURES",
                defaults.petition_initial_signatures,
            )?,
            petition_goal: parse_var("PETITION_GOAL", defaults.petition_goal)?,
            pending_alert_threshold: parse_var(
                "PENDING_ALERT_THRESHOLD",
                defaults.pending_alert_threshold,
            )?,
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("{} has an invalid value: {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_live_site() {
        let config = Config::default();
        assert_eq!(config.admin_email, "admin@fathersrights.org");
        assert_eq!(config.petition_initial_signatures, 48_742);
        assert_eq!(config.moderation_policy, ModerationPolicy::Strict);
        assert!(config.chat_typing_delay_min <= config.chat_typing_delay_max);
    }

    #[test]
    fn test_parse_var_falls_back_when_unset() {
        let value: u64 = parse_var("ADVOCACY_TEST_SURELY_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_var_reports_bad_values() {
        env::set_var("ADVOCACY_TEST_BAD_NUMBER", "many");
        let err = parse_var::<u64>("ADVOCACY_TEST_BAD_NUMBER", 1).unwrap_err();
        assert!(err.to_string().contains("ADVOCACY_TEST_BAD_NUMBER"));
        env::remove_var("ADVOCACY_TEST_BAD_NUMBER");
    }
}
