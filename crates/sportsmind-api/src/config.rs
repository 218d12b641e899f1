use std::env;
use std::net::SocketAddr;

use eyre::{WrapErr, bail};

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// S3 bucket holding the documents. `None` selects the in-memory store.
    pub bucket: Option<String>,
    pub region: Option<String>,
    /// Local listen address. `None` runs under the Lambda runtime.
    pub bind: Option<SocketAddr>,
    /// Write the bundled catalog into an empty store on startup.
    pub seed_catalog: bool,
    /// Allowed CORS origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket: None,
            region: None,
            bind: None,
            seed_catalog: true,
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind = var("SPORTSMIND_BIND")
            .map(|raw| {
                raw.parse::<SocketAddr>()
                    .wrap_err_with(|| format!("SPORTSMIND_BIND is not a socket address: {raw}"))
            })
            .transpose()?;

        let seed_catalog = match var("SPORTSMIND_SEED_CATALOG") {
            None => true,
            Some(raw) => parse_flag(&raw).wrap_err("SPORTSMIND_SEED_CATALOG must be true or false")?,
        };

        let cors_origins = var("SPORTSMIND_CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            bucket: var("SPORTSMIND_BUCKET"),
            region: var("AWS_REGION"),
            bind,
            seed_catalog,
            cors_origins,
        })
    }
}

fn parse_flag(raw: &str) -> eyre::Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognized flag value: {other}"),
    }
}
