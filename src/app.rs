use std::io::Write;

use log::warn;

use crate::{
    display::display_price,
    errors::Error,
    exchange::PriceFetcher,
    http::HttpClient,
    prompt::Prompter,
};

/// The prompt, fetch and display cycle.
pub struct App<P, C, W> {
    prompter: P,
    fetcher: PriceFetcher<C>,
    out: W,
}

impl<P: Prompter, C: HttpClient, W: Write> App<P, C, W> {
    pub fn new(prompter: P, fetcher: PriceFetcher<C>, out: W) -> Self {
        App {
            prompter,
            fetcher,
            out,
        }
    }

    /// Loops until a prompt is aborted, which is reported and ends the run
    /// normally. Fetch failures never end the loop.
    pub async fn run(&mut self) -> Result<(), Error> {
        loop {
            match self.run_once().await {
                Ok(()) => {}
                Err(Error::Prompt(msg)) => {
                    writeln!(self.out, "Prompt failed {}", msg)?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One iteration. A failed fetch is printed and then displayed as an
    /// unavailable price.
    pub async fn run_once(&mut self) -> Result<(), Error> {
        let symbol = self.prompter.read_symbol()?;
        let exchange = self.prompter.select_exchange()?;

        let price = match self.fetcher.fetch_price(exchange, &symbol).await {
            Ok(price) => price,
            Err(e) => {
                warn!("fetching {} from {} failed: {:?}", symbol, exchange, e);
                writeln!(self.out, "Error: {}", e)?;
                0.0
            }
        };

        display_price(&mut self.out, &symbol, price)?;
        self.out.flush()?;
        Ok(())
    }
}
