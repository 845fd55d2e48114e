use log::info;

use coin_price::{
    app::App, config::Config, exchange::PriceFetcher, http::ReqwestClient,
    prompt::TerminalPrompter, Error,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    init_logger();

    let config = Config::from_env()?;
    info!(
        "binance: {}, bitget: {}, timeout: {:?}",
        config.binance_url, config.bitget_url, config.timeout
    );

    let client = ReqwestClient::new(config.timeout)?;
    let fetcher = PriceFetcher::new(client, config.binance_url, config.bitget_url);
    let mut app = App::new(TerminalPrompter, fetcher, std::io::stdout());
    app.run().await
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
