pub mod binance;
pub mod bitget;

mod api_error;
mod parse_util;
mod url_util;

use std::fmt;

use url::Url;

use crate::{errors::Error, http::HttpClient, symbol::Symbol};

pub use url_util::{BINANCE_API_HOST, BITGET_API_HOST};

/// Exchanges a price can be fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exchange {
    Binance,
    Bitget,
}

impl Exchange {
    /// Every exchange, in the order they are offered to the user.
    pub const ALL: [Exchange; 2] = [Exchange::Binance, Exchange::Bitget];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Binance => "Binance",
            Self::Bitget => "Bitget",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fetches spot USDT prices, one request per call.
pub struct PriceFetcher<C> {
    client: C,
    binance_url: Url,
    bitget_url: Url,
}

impl<C: HttpClient> PriceFetcher<C> {
    pub fn new(client: C, binance_url: Url, bitget_url: Url) -> Self {
        PriceFetcher {
            client,
            binance_url,
            bitget_url,
        }
    }

    pub async fn fetch_price(&self, exchange: Exchange, symbol: &Symbol) -> Result<f64, Error> {
        match exchange {
            Exchange::Binance => {
                binance::get_ticker_price(&self.client, &self.binance_url, symbol).await
            }
            Exchange::Bitget => bitget::get_last_price(&self.client, &self.bitget_url, symbol).await,
        }
    }
}
