use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::domains::pricing::ZeroPricePolicy;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub zero_price_policy: ZeroPricePolicy,
    pub max_body_bytes: usize,
    pub max_input_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            zero_price_policy: ZeroPricePolicy::TreatAsMissing,
            max_body_bytes: 64 * 1024,
            max_input_chars: 4096,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        let accept_zero_price = parse_flag(env::var("ACCEPT_ZERO_PRICE").ok().as_deref())
            .context("ACCEPT_ZERO_PRICE must be true or false")?;

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .context("PORT must be a valid number")?,
            zero_price_policy: if accept_zero_price {
                ZeroPricePolicy::Accept
            } else {
                ZeroPricePolicy::TreatAsMissing
            },
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| defaults.max_body_bytes.to_string())
                .parse()
                .context("MAX_BODY_BYTES must be a valid number")?,
            max_input_chars: env::var("MAX_INPUT_CHARS")
                .unwrap_or_else(|_| defaults.max_input_chars.to_string())
                .parse()
                .context("MAX_INPUT_CHARS must be a valid number")?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: Option<&str>) -> Result<bool> {
    let Some(value) = value.map(str::trim) else {
        return Ok(false);
    };
    let is = |word: &str| value.eq_ignore_ascii_case(word);
    if value.is_empty() || value == "0" || is("false") || is("no") {
        Ok(false)
    } else if value == "1" || is("true") || is("yes") {
        Ok(true)
    } else {
        Err(anyhow::anyhow!("invalid boolean flag: {}", value))
    }
}
