use crate::{FetchResponse, Fetcher};
use anyhow::Context;

/// [`Fetcher`] backed by a blocking `reqwest` client.
///
/// No timeout is configured: a stalled server blocks the caller.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(None)
            .build()
            .context("build HTTP client")?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str) -> anyhow::Result<FetchResponse> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("GET {url}"))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .with_context(|| format!("read body of {url}"))?;
        tracing::debug!(url, status, len = body.len(), "response");
        Ok(FetchResponse::new(status, body.to_vec()))
    }
}
