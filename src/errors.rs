/// Reasons a typed symbol is rejected by the prompt.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("input is empty")]
    EmptyInput,

    #[error("only capital letters are allowed")]
    InvalidCharacter,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InvalidSymbol(#[from] ValidationError),

    #[error("{0}")]
    ApiError(String),

    #[error("failed to parse error response")]
    ResponseParseError,

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("no price data in response")]
    EmptyPriceData,

    #[error("API request error: {0}")]
    ApiRequestError(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Prompt(String),

    #[error("IO error")]
    IOError(#[from] std::io::Error),
}
