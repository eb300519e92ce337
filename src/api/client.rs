//! HTTP client for the trading backend.

use super::types::ErrorBody;
use super::{
    Backend, BalanceResponse, Endpoint, OpenTradesResponse, PriceResponse, TopUpRequest,
    TradeRequest,
};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::state::HistoryEntry;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Builder for creating an API client.
pub struct ApiClientBuilder {
    config: ApiConfig,
    identity_token: String,
}

impl ApiClientBuilder {
    /// Create a new builder with default config and an empty identity.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
            identity_token: String::new(),
        }
    }

    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the opaque identity token sent with every request.
    pub fn identity_token(mut self, token: impl Into<String>) -> Self {
        self.identity_token = token.into();
        self
    }

    /// Build the API client.
    pub fn build(self) -> Result<ApiClient> {
        ApiClient::new(self.config, &self.identity_token)
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Backend client over HTTP.
///
/// The identity token is installed as a default `Authorization` header, so
/// every request carries it verbatim.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: ApiConfig, identity_token: &str) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::config(format!("invalid base_url '{}': {e}", config.base_url)))?;
        // Endpoint paths are joined relative to the base, so a prefix like
        // `/tl` must end in a slash to survive the join.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut authorization = HeaderValue::from_str(identity_token)
            .map_err(|_| Error::auth("identity token is not a valid header value"))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("tradepulse/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            http: builder.build()?,
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint against the base URL.
    pub fn url(&self, endpoint: Endpoint) -> Result<Url> {
        self.base_url
            .join(endpoint.path().trim_start_matches('/'))
            .map_err(|e| Error::config(format!("cannot build URL for {endpoint}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        let response = self.http.get(self.url(endpoint)?).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::endpoint(endpoint.path(), status.as_u16()));
        }
        Ok(response.json::<T>().await?)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, endpoint: Endpoint, body: &B) -> Result<()> {
        let response = self
            .http
            .post(self.url(endpoint)?)
            .json(body)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejection(response).await)
        }
    }
}

/// Turn a non-success mutation response into a trade error, keeping the
/// backend's `{"error": ...}` reason when it sent one.
async fn rejection(response: Response) -> Error {
    let status = response.status().as_u16();
    let reason = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .map(|body| body.error);
    Error::trade(status, reason)
}

#[async_trait]
impl Backend for ApiClient {
    async fn fetch_balance(&self) -> Result<BalanceResponse> {
        self.get_json(Endpoint::Balance).await
    }

    async fn fetch_price(&self) -> Result<PriceResponse> {
        self.get_json(Endpoint::Price).await
    }

    async fn fetch_open_trades(&self) -> Result<OpenTradesResponse> {
        self.get_json(Endpoint::OpenTrades).await
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>> {
        self.get_json(Endpoint::History).await
    }

    async fn place_trade(&self, request: &TradeRequest) -> Result<()> {
        self.post_json(Endpoint::Trade, request).await
    }

    async fn add_balance(&self, request: &TopUpRequest) -> Result<()> {
        self.post_json(Endpoint::AddBalance, request).await
    }
}
