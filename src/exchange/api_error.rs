use serde::Deserialize;

use crate::errors::Error;

/// Error envelope both providers return with a failure status.
#[derive(Deserialize, Debug)]
struct ErrorResponse {
    msg: String,
}

/// Turns the body of a non-200 response into an error.
pub(crate) fn check_api_error(body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(resp) => Error::ApiError(resp.msg),
        Err(_) => Error::ResponseParseError,
    }
}

#[cfg(test)]
mod tests {
    use super::check_api_error;
    use crate::errors::Error;

    #[test]
    fn test_check_api_error_message() {
        let err = check_api_error(br#"{"code":-1121,"msg":"Invalid symbol."}"#);
        assert!(matches!(&err, Error::ApiError(msg) if msg == "Invalid symbol."));
        assert_eq!(err.to_string(), "Invalid symbol.");
    }

    #[test]
    fn test_check_api_error_unparseable() {
        for body in [&b"<html>Bad Gateway</html>"[..], b"", br#"{"code":40034}"#] {
            let err = check_api_error(body);
            assert!(matches!(err, Error::ResponseParseError));
            assert_eq!(err.to_string(), "failed to parse error response");
        }
    }
}
