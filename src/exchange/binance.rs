use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use super::{api_error::check_api_error, parse_util::parse_price, url_util::create_ticker_url};
use crate::{errors::Error, http::HttpClient, symbol::Symbol};

const TICKER_PRICE_ENDPOINT: &str = "/api/v3/ticker/price";

/// See: https://binance-docs.github.io/apidocs/spot/en/#symbol-price-ticker
#[derive(Deserialize, Debug)]
struct TickerPrice {
    price: String,
}

/// Fetch the latest USDT price of `symbol` from Binance spot.
pub async fn get_ticker_price<C: HttpClient + ?Sized>(
    client: &C,
    base: &Url,
    symbol: &Symbol,
) -> Result<f64, Error> {
    let url = create_ticker_url(base, TICKER_PRICE_ENDPOINT, symbol)?;
    let resp = client.get(url).await?;
    parse_ticker_price(resp.status, &resp.body)
}

pub fn parse_ticker_price(status: StatusCode, body: &[u8]) -> Result<f64, Error> {
    if status != StatusCode::OK {
        debug!("binance returned {}", status);
        return Err(check_api_error(body));
    }
    let ticker: TickerPrice = serde_json::from_slice(body)
        .map_err(|e| Error::MalformedResponse(e.to_string()))?;
    parse_price(&ticker.price)
}
