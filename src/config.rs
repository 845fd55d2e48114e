use std::env;
use std::time::Duration;

use url::Url;

use crate::errors::Error;
use crate::exchange::{BINANCE_API_HOST, BITGET_API_HOST};

pub const BINANCE_URL_VAR: &str = "COIN_PRICE_BINANCE_URL";
pub const BITGET_URL_VAR: &str = "COIN_PRICE_BITGET_URL";
pub const TIMEOUT_VAR: &str = "COIN_PRICE_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub binance_url: Url,
    pub bitget_url: Url,
    /// `None` when requests should never time out.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, Error> {
        let binance_url = parse_url(BINANCE_URL_VAR, lookup(BINANCE_URL_VAR), BINANCE_API_HOST)?;
        let bitget_url = parse_url(BITGET_URL_VAR, lookup(BITGET_URL_VAR), BITGET_API_HOST)?;

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::InvalidConfig(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    TIMEOUT_VAR, raw
                ))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let timeout = match timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(Config {
            binance_url,
            bitget_url,
            timeout,
        })
    }
}

fn parse_url(key: &str, value: Option<String>, default: &str) -> Result<Url, Error> {
    let raw = value.unwrap_or_else(|| default.to_owned());
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::InvalidConfig(format!("{}: {} ({:?})", key, e, raw)))?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidConfig(format!("{}: {:?} is not a base url", key, raw)));
    }
    Ok(url)
}
