use std::fmt;

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::errors::ValidationError;

/// Quote asset every symbol is priced against.
pub const QUOTE_ASSET: &str = "USDT";

/// Checks that `input` is non-empty and made only of uppercase letters.
/// Any letter in the Unicode `Lu` category is accepted, not just ASCII.
/// Uppercase-looking symbols such as `Ⓐ` or `Ⅻ` are not letters.
pub fn validate(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if !input.chars().all(is_uppercase_letter) {
        return Err(ValidationError::InvalidCharacter);
    }
    Ok(())
}

fn is_uppercase_letter(c: char) -> bool {
    get_general_category(c) == GeneralCategory::UppercaseLetter
}

/// A validated base asset ticker, e.g. `BTC`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(input: &str) -> Result<Self, ValidationError> {
        validate(input)?;
        Ok(Symbol(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Market name as the exchanges expect it, e.g. `BTCUSDT`.
    pub(crate) fn api_string(&self) -> String {
        format!("{}{}", self.0, QUOTE_ASSET)
    }

    /// Human readable pair, e.g. `BTC-USDT`.
    pub fn pair(&self) -> String {
        format!("{}-{}", self.0, QUOTE_ASSET)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{validate, Symbol};
    use crate::errors::ValidationError;

    #[test]
    fn test_validate_accepts_uppercase() {
        assert_eq!(validate("BTC"), Ok(()));
        assert_eq!(validate("X"), Ok(()));
        assert_eq!(validate("ÄÖÜ"), Ok(()));
        assert_eq!(validate("ΣΩ"), Ok(()));
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate(""), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_validate_invalid_characters() {
        for input in [
            "btc", "Btc", "BTC1", "BTC-USDT", " BTC", "BTC ", "ETH!", "σ", "Ⓐ", "ⅩⅠ", "BTCⓍ", "🄰",
        ] {
            assert_eq!(
                validate(input),
                Err(ValidationError::InvalidCharacter),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_symbol_strings() {
        let symbol = Symbol::new("ETH").unwrap();
        assert_eq!(symbol.as_str(), "ETH");
        assert_eq!(symbol.api_string(), "ETHUSDT");
        assert_eq!(symbol.pair(), "ETH-USDT");
        assert_eq!(symbol.to_string(), "ETH");
        assert!(Symbol::new("eth").is_err());
    }
}
