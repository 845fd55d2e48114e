use url::Url;

use crate::errors::Error;
use crate::symbol::Symbol;

pub const BINANCE_API_HOST: &str = "https://api.binance.com";
pub const BITGET_API_HOST: &str = "https://api.bitget.com";

/// Appends `endpoint` to the path of `base`, keeping any prefix already there,
/// and sets the `symbol` query parameter to the symbol's USDT market,
/// e.g. `?symbol=BTCUSDT`.
pub(crate) fn create_ticker_url(base: &Url, endpoint: &str, symbol: &Symbol) -> Result<Url, Error> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    let mut url = base.join(endpoint.trim_start_matches('/'))?;
    url.query_pairs_mut()
        .append_pair("symbol", &symbol.api_string());
    Ok(url)
}
