//! Runtime configuration, read once at startup from the environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use actix_web::http::Uri;
use anyhow::{anyhow, bail, Context, Result};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-sonnet-4-6";
const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: AllowedOrigins,
    pub max_body_bytes: usize,
}

#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub system_prompt: String,
    /// Whole-request timeout for provider calls; `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

// Hand-written so the credential never ends up in logs.
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl FromStr for AllowedOrigins {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let origins: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.iter().any(|origin| origin == "*") {
            if origins.len() > 1 {
                bail!("'*' cannot be combined with explicit origins");
            }
            return Ok(AllowedOrigins::Any);
        }
        if origins.is_empty() {
            bail!("no origins given");
        }
        let origins = origins
            .iter()
            .map(|origin| normalize_origin(origin))
            .collect::<Result<_>>()?;
        Ok(AllowedOrigins::List(origins))
    }
}

// Browsers send `scheme://host[:port]`, so anything beyond that can never match.
fn normalize_origin(origin: &str) -> Result<String> {
    let uri: Uri = origin
        .parse()
        .with_context(|| format!("'{origin}' is not a valid origin"))?;

    if uri.scheme_str().is_none() || uri.host().is_none() {
        bail!("'{origin}' must include a scheme and host");
    }
    if !matches!(uri.path(), "" | "/") || uri.query().is_some() {
        bail!("'{origin}' must not include a path or query");
    }

    Ok(origin.trim_end_matches('/').to_string())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("ANTHROPIC_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow!("ANTHROPIC_API_KEY must be set"))?;

        let max_tokens = parse_or(&lookup, "MAX_TOKENS", DEFAULT_MAX_TOKENS)?;
        if max_tokens == 0 {
            bail!("MAX_TOKENS must be greater than zero");
        }

        let timeout = match lookup("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(
                raw.trim()
                    .parse()
                    .with_context(|| format!("invalid PROVIDER_TIMEOUT_SECS: {raw}"))?,
            )),
            None => None,
        };

        let provider = ProviderConfig {
            api_key,
            base_url: lookup("ANTHROPIC_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: lookup("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens,
            system_prompt: lookup("SYSTEM_PROMPT")
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            timeout,
        };

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            allowed_origins: parse_or(&lookup, "CORS_ALLOWED_ORIGINS", AllowedOrigins::Any)?,
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
        };

        Ok(Self { server, provider })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("invalid {key} '{raw}': {e}")),
        None => Ok(default),
    }
}
