use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use url::Url;

use crate::errors::Error;

/// Status and raw body of a finished GET request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: Url) -> Result<HttpResponse, Error>;
}

/// Unauthenticated client backed by `reqwest`.
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// `None` leaves requests without a timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(ReqwestClient {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: Url) -> Result<HttpResponse, Error> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.bytes().await.map_err(Error::ApiRequestError)?;
        debug!("status {} ({} bytes)", status, body.len());

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
