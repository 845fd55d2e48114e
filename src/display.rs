use std::io::{self, Write};

use crate::symbol::Symbol;

/// Renders the console line for a price. Anything not above zero is shown
/// as unavailable.
pub fn format_price(symbol: &Symbol, price: f64) -> String {
    if price <= 0.0 || !price.is_finite() {
        return format!("Price for {} is unavailable or invalid.", symbol);
    }
    format!("📈  {} -> ${:.6}", symbol.pair(), price)
}

pub fn display_price<W: Write>(out: &mut W, symbol: &Symbol, price: f64) -> io::Result<()> {
    writeln!(out, "{}", format_price(symbol, price))
}
