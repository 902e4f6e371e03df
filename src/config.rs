use std::env;
use std::fs;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8087;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error("cannot read {var} from {path}: {source}")]
    Read {
        var: &'static str,
        path: String,
        source: std::io::Error,
    },
}

/// Connection material for the marketplace, loaded once at startup.
#[derive(Debug, Clone)]
pub struct MarketSettings {
    pub url: String,
    /// PEM bundle with the client certificate chain and private key.
    pub identity_pem: Option<Vec<u8>>,
    /// Extra root certificate used to verify the marketplace.
    pub ca_pem: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub market: MarketSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| {
                ConfigError::Invalid {
                    var: "PORT",
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        let url = lookup("MARKET_URL")
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::Missing("MARKET_URL"))?;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Invalid {
                var: "MARKET_URL",
                reason: format!("'{}' is not an http(s) URL", url),
            });
        }

        Ok(Self {
            host,
            port,
            market: MarketSettings {
                url,
                identity_pem: read_pem(&lookup, "MARKET_IDENTITY_PEM")?,
                ca_pem: read_pem(&lookup, "MARKET_CA_PEM")?,
            },
        })
    }
}

fn read_pem<F>(lookup: &F, var: &'static str) -> Result<Option<Vec<u8>>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(path) = lookup(var) else {
        return Ok(None);
    };
    fs::read(&path)
        .map(Some)
        .map_err(|source| ConfigError::Read { var, path, source })
}
