use crate::config;
use crate::error::FetchError;
use crate::models::{Quote, QuoteRequest, QuoteResponse, SecurityQuote};
use anyhow::{Context, Result};
use futures::future::join_all;
use reqwest::{header, Client};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

// -----------------------------------------------
// CREDENTIALS
// -----------------------------------------------

pub struct DhanCredentials {
    pub access_token: String,
    pub client_id: String,
}

impl DhanCredentials {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            access_token: std::env::var("DHAN_ACCESS_TOKEN")
                .context("DHAN_ACCESS_TOKEN is not set")?,
            client_id: std::env::var("DHAN_CLIENT_ID").context("DHAN_CLIENT_ID is not set")?,
        })
    }
}

// -----------------------------------------------
// QUOTE GATEWAY CLIENT
// -----------------------------------------------

pub struct DhanClient {
    client: Client,
    quote_url: String,
}

impl DhanClient {
    pub fn new(credentials: &DhanCredentials) -> Result<Self> {
        Ok(Self {
            client: build_client(credentials)?,
            quote_url: config::dhan_quote_url(),
        })
    }

    /// Fetch the quote for a single security.
    ///
    /// One id per call, matching the upstream usage pattern. Every failure
    /// (transport, timeout, bad status, malformed body, or the id missing
    /// from the response map) comes back as a `FetchError` so callers can
    /// treat the security as absent.
    pub async fn fetch_quote(&self, security_id: u32) -> Result<Quote, FetchError> {
        let body: QuoteRequest = HashMap::from([(config::NSE_SEGMENT, vec![security_id])]);

        let res = self.client.post(&self.quote_url).json(&body).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = res.text().await?;
        let envelope: QuoteResponse = serde_json::from_str(&text)?;

        envelope
            .data
            .get(config::NSE_SEGMENT)
            .and_then(|segment| segment.get(&security_id.to_string()))
            .cloned()
            .ok_or(FetchError::Missing(security_id))
    }

    /// Fetch quotes for a whole universe with bounded concurrency.
    ///
    /// Failures are logged and dropped per security; the rest of the
    /// universe is unaffected.
    pub async fn fetch_universe(
        self: Arc<Self>,
        universe: &'static [(&'static str, u32)],
    ) -> Vec<SecurityQuote> {
        let semaphore = Arc::new(Semaphore::new(config::MAX_CONCURRENT_FETCHES));
        let mut handles = Vec::with_capacity(universe.len());

        for &(symbol, security_id) in universe {
            let client = Arc::clone(&self);
            let sem = Arc::clone(&semaphore);

            handles.push(tokio::spawn(async move {
                let _permit = sem.acquire_owned().await.ok()?;

                match client.fetch_quote(security_id).await {
                    Ok(quote) => {
                        debug!(symbol, security_id, "quote fetched");
                        Some(SecurityQuote {
                            symbol: symbol.to_string(),
                            security_id,
                            quote,
                        })
                    }
                    Err(err) => {
                        warn!(symbol, security_id, error = %err, "quote fetch failed, skipping");
                        None
                    }
                }
            }));
        }

        let mut rows = Vec::with_capacity(universe.len());
        for joined in join_all(handles).await {
            match joined {
                Ok(Some(row)) => rows.push(row),
                Ok(None) => {}
                Err(err) => warn!(error = %err, "quote fetch task aborted"),
            }
        }

        rows
    }
}

// -----------------------------------------------
// HTTP CLIENT BUILDER
// -----------------------------------------------
fn build_client(credentials: &DhanCredentials) -> Result<Client> {
    let mut headers = header::HeaderMap::new();

    headers.insert(
        "access-token",
        header::HeaderValue::from_str(&credentials.access_token)?,
    );
    headers.insert(
        "client-id",
        header::HeaderValue::from_str(&credentials.client_id)?,
    );
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );

    Ok(Client::builder()
        .default_headers(headers)
        .timeout(config::HTTP_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?)
}
