use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;

use crate::{
    data::{Listing, ListingsPage},
    Error, Result,
};

mod proxy;
mod query;

pub use proxy::ProxyConfig;
pub use query::ListingsQuery;

pub const BASE_URL: &str = "https://csfloat.com/api/v1";

/// Environment variable holding the API key, see [`ClientBuilder::from_env`]
pub const API_KEY_ENV: &str = "CSFLOAT_API_KEY";
/// Environment variable holding an optional proxy used for both schemes
pub const PROXY_ENV: &str = "CSFLOAT_PROXY";

#[derive(Debug, Clone)]
pub struct Client {
    req_client: reqwest::Client,
    token: HeaderValue,
    base_url: String,
}

/// The rate limit state the API reported alongside a `429` response
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimit {
    pub remaining: usize,
    pub limit: usize,
    pub resets_at: chrono::DateTime<chrono::Utc>,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap<HeaderValue>) -> Option<Self> {
        fn header<T: std::str::FromStr>(headers: &HeaderMap<HeaderValue>, name: &str) -> Option<T> {
            let parsed = headers
                .get(name)
                .and_then(|raw| raw.to_str().ok())
                .and_then(|raw| raw.parse().ok());

            if parsed.is_none() {
                tracing::warn!("Missing or invalid '{}' Header", name);
            }

            parsed
        }

        let remaining = header(headers, "x-ratelimit-remaining")?;
        let limit = header(headers, "x-ratelimit-limit")?;
        let resets: i64 = header(headers, "x-ratelimit-reset")?;

        let resets_at = chrono::DateTime::from_timestamp(resets, 0)?;

        Some(RateLimit {
            remaining,
            limit,
            resets_at,
        })
    }
}

#[derive(Debug, serde::Serialize)]
struct BuyRequest {
    total_price: u64,
    contract_ids: Vec<String>,
}

impl Client {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Loads the active listings matching the query, in the order the API returned them
    pub async fn get_listings(&self, query: &ListingsQuery) -> Result<Vec<Listing>> {
        self.get_listings_page(query).await.map(|page| page.listings)
    }

    /// Like [`Client::get_listings`], but also returns the cursor for the next page
    #[tracing::instrument(skip(self))]
    pub async fn get_listings_page(&self, query: &ListingsQuery) -> Result<ListingsPage> {
        let resp = self
            .req_client
            .get(self.url("/listings"))
            .query(query)
            .header(AUTHORIZATION, self.token.clone())
            .send()
            .await?;

        let mut body = response_json(resp).await?;

        if query.debug {
            emit(&body, &mut std::io::stdout().lock());
        }

        let cursor = body
            .get("cursor")
            .and_then(Value::as_str)
            .map(str::to_owned);

        let data = match body.get_mut("data").map(Value::take) {
            Some(Value::Array(data)) => data,
            Some(other) => return Err(Error::UnexpectedShape(other)),
            None => return Err(Error::UnexpectedShape(body)),
        };

        let listings = data
            .into_iter()
            .map(Listing::from_value)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(listings = listings.len(), ?cursor, "Loaded Listings");

        Ok(ListingsPage { listings, cursor })
    }

    /// Loads a single listing by its id
    #[tracing::instrument(skip(self))]
    pub async fn get_listing(&self, id: &str) -> Result<Listing> {
        let resp = self
            .req_client
            .get(self.url(&format!("/listings/{id}")))
            .header(AUTHORIZATION, self.token.clone())
            .send()
            .await?;

        Listing::from_value(response_json(resp).await?)
    }

    /// Buys the given listings. `total_price` has to match the sum of their prices in cents.
    ///
    /// The confirmation is returned as the API sent it.
    #[tracing::instrument(skip(self, contract_ids, debug))]
    pub async fn buy_listings<I, S>(&self, total_price: u64, contract_ids: I, debug: bool) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let contract_ids: Vec<String> = contract_ids.into_iter().map(Into::into).collect();
        if contract_ids.is_empty() {
            return Err(Error::InvalidParameter(
                "contract_ids must contain at least one listing".to_string(),
            ));
        }

        tracing::debug!(?contract_ids, "Buying Listings");

        let resp = self
            .req_client
            .post(self.url("/listings/buy"))
            .header(AUTHORIZATION, self.token.clone())
            .json(&BuyRequest {
                total_price,
                contract_ids,
            })
            .send()
            .await?;

        let body = response_json(resp).await?;

        if debug {
            emit(&body, &mut std::io::stdout().lock());
        }

        Ok(body)
    }
}

/// Writes a raw response body, pretty printed
fn emit(body: &Value, out: &mut impl std::io::Write) {
    if let Err(e) = writeln!(out, "{body:#}") {
        tracing::warn!("Writing debug output: {:?}", e);
    }
}

async fn response_json(resp: reqwest::Response) -> Result<Value> {
    let status = resp.status();

    if status.is_success() {
        return Ok(resp.json().await?);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        if let Some(rate_limit) = RateLimit::from_headers(resp.headers()) {
            tracing::error!(?rate_limit, "Reached RateLimit");
            return Err(Error::RateLimited(rate_limit));
        }
    }

    let body = resp.text().await.unwrap_or_default();
    tracing::error!(%status, %body, "Error Response");

    Err(Error::Status { status, body })
}

/// Configures a [`Client`]
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    proxy: Option<ProxyConfig>,
    http_client: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            proxy: None,
            http_client: None,
        }
    }

    /// Reads the API key from `CSFLOAT_API_KEY` and an optional proxy from `CSFLOAT_PROXY`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|e| Error::Config(format!("reading {API_KEY_ENV}: {e}")))?;

        let builder = Self::new(api_key);
        Ok(match std::env::var(PROXY_ENV) {
            Ok(proxy) if !proxy.is_empty() => builder.proxy(proxy),
            _ => builder,
        })
    }

    pub fn proxy(mut self, proxy: impl Into<ProxyConfig>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Takes proxies as a `{"http": .., "https": ..}` mapping, failing on any other scheme
    pub fn proxy_map(self, proxies: std::collections::HashMap<String, String>) -> Result<Self> {
        Ok(self.proxy(ProxyConfig::try_from(proxies)?))
    }

    /// Use an existing client instead of creating a new one, to share its connection pool
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut token = HeaderValue::from_str(&self.api_key)
            .map_err(|e| Error::Config(format!("API key is not a valid header value: {e}")))?;
        token.set_sensitive(true);

        let req_client = match (self.http_client, self.proxy) {
            (Some(_), Some(_)) => {
                return Err(Error::Config(
                    "a proxy can't be applied to an existing http client".to_string(),
                ))
            }
            (Some(client), None) => client,
            (None, proxy) => {
                let mut builder = reqwest::Client::builder();
                if let Some(proxy) = proxy {
                    builder = proxy.apply(builder)?;
                }
                builder.build()?
            }
        };

        Ok(Client {
            req_client,
            token,
            base_url: self.base_url,
        })
    }
}
