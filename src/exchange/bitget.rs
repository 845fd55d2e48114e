use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use super::{api_error::check_api_error, parse_util::parse_price, url_util::create_ticker_url};
use crate::{errors::Error, http::HttpClient, symbol::Symbol};

const TICKERS_ENDPOINT: &str = "/api/v2/spot/market/tickers";

#[derive(Deserialize, Debug)]
struct Ticker {
    #[serde(rename = "lastPr", alias = "lastpr")]
    last_price: String,
}

/// See: https://www.bitget.com/api-doc/spot/market/Get-Tickers
#[derive(Deserialize, Debug)]
struct TickersResponse {
    data: Vec<Ticker>,
}

/// Fetch the last traded USDT price of `symbol` from Bitget spot.
pub async fn get_last_price<C: HttpClient + ?Sized>(
    client: &C,
    base: &Url,
    symbol: &Symbol,
) -> Result<f64, Error> {
    let url = create_ticker_url(base, TICKERS_ENDPOINT, symbol)?;
    let resp = client.get(url).await?;
    parse_tickers(resp.status, &resp.body)
}

pub fn parse_tickers(status: StatusCode, body: &[u8]) -> Result<f64, Error> {
    if status != StatusCode::OK {
        debug!("bitget returned {}", status);
        return Err(check_api_error(body));
    }
    let resp: TickersResponse = serde_json::from_slice(body)
        .map_err(|e| Error::MalformedResponse(e.to_string()))?;
    let ticker = resp.data.first().ok_or(Error::EmptyPriceData)?;
    parse_price(&ticker.last_price)
}

#[cfg(test)]
mod tests {
    use super::parse_tickers;
    use crate::errors::Error;
    use reqwest::StatusCode;

    #[test]
    fn test_parse_tickers() {
        let body = br#"{"data":[{"lastpr":"123.45"}]}"#;
        assert_eq!(parse_tickers(StatusCode::OK, body).unwrap(), 123.45);

        // Live responses spell the field `lastPr` and carry more entries/fields.
        let body = br#"{"code":"00000","msg":"success","data":[{"symbol":"BTCUSDT","lastPr":"67000.5","high24h":"68000"},{"symbol":"X","lastPr":"1"}]}"#;
        assert_eq!(parse_tickers(StatusCode::OK, body).unwrap(), 67000.5);
    }

    #[test]
    fn test_parse_tickers_empty_data() {
        let res = parse_tickers(StatusCode::OK, br#"{"data":[]}"#);
        assert!(matches!(res, Err(Error::EmptyPriceData)));
    }

    #[test]
    fn test_parse_tickers_bad_status() {
        let body = br#"{"code":"40034","msg":"Invalid symbol","data":null}"#;
        let res = parse_tickers(StatusCode::NOT_FOUND, body);
        assert!(matches!(res, Err(Error::ApiError(msg)) if msg == "Invalid symbol"));

        let res = parse_tickers(StatusCode::INTERNAL_SERVER_ERROR, b"");
        assert!(matches!(res, Err(Error::ResponseParseError)));
    }

    #[test]
    fn test_parse_tickers_malformed() {
        for body in [&b"{}"[..], br#"{"data":null}"#, br#"{"data":[{"lastPr":""}]}"#] {
            assert!(matches!(
                parse_tickers(StatusCode::OK, body),
                Err(Error::MalformedResponse(_))
            ));
        }
    }
}
