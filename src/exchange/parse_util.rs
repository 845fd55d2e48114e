use crate::errors::Error;

/// Parses a string-encoded decimal price such as `"67890.12000000"`.
pub(crate) fn parse_price(s: &str) -> Result<f64, Error> {
    let price = s
        .parse::<f64>()
        .map_err(|_| Error::MalformedResponse(format!("could not parse price {:?}", s)))?;
    if !price.is_finite() {
        return Err(Error::MalformedResponse(format!("price {:?} is not finite", s)));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::parse_price;
    use crate::errors::Error;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("25700.51000000").unwrap(), 25700.51);
        assert_eq!(parse_price("0.00064000").unwrap(), 0.00064);
        assert_eq!(parse_price("50000").unwrap(), 50000.0);
        assert_eq!(parse_price("0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        for s in ["", "abc", "1.2.3", "inf", "NaN", " 123 ", "123\n"] {
            assert!(
                matches!(parse_price(s), Err(Error::MalformedResponse(_))),
                "{s:?}"
            );
        }
    }
}
