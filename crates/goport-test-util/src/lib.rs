//! Shared test utilities for the goport workspace.
//!
//! [`StubFetcher`] answers GETs from a fixed URL table so the resolution pipeline can be
//! tested without a network. Unknown URLs get a GitHub-style 404.

use goport_fetch::{FetchResponse, Fetcher};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Clone, Debug)]
enum Canned {
    Response(FetchResponse),
    TransportError(String),
}

/// In-memory [`Fetcher`] with a request log.
#[derive(Debug, Default)]
pub struct StubFetcher {
    routes: BTreeMap<String, Canned>,
    requests: RefCell<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 at `url`.
    pub fn ok(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(
            url.to_string(),
            Canned::Response(FetchResponse::new(200, body)),
        );
        self
    }

    /// Serve an arbitrary status at `url`.
    pub fn status(mut self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(
            url.to_string(),
            Canned::Response(FetchResponse::new(status, body)),
        );
        self
    }

    /// Fail the request itself, as a DNS or connection error would.
    pub fn transport_error(mut self, url: &str, message: &str) -> Self {
        self.routes
            .insert(url.to_string(), Canned::TransportError(message.to_string()));
        self
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests.borrow().iter().filter(|u| *u == url).count()
    }
}

impl Fetcher for StubFetcher {
    fn get(&self, url: &str) -> anyhow::Result<FetchResponse> {
        self.requests.borrow_mut().push(url.to_string());
        match self.routes.get(url) {
            Some(Canned::Response(response)) => Ok(response.clone()),
            Some(Canned::TransportError(message)) => anyhow::bail!("{message}"),
            None => Ok(FetchResponse::new(404, "404: Not Found")),
        }
    }
}

/// Path of the shared fixtures directory (repo root / tests / fixtures).
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("fixtures")
}

/// Read a fixture file as bytes.
pub fn fixture(name: &str) -> Vec<u8> {
    let path = fixtures_dir().join(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("read fixture {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_urls_are_404() {
        let stub = StubFetcher::new();
        let response = stub.get("https://example.org/nothing").expect("stub never fails");
        assert_eq!(response.status, 404);
    }

    #[test]
    fn records_requests_in_order() {
        let stub = StubFetcher::new().ok("https://a", "a");
        stub.get("https://a").expect("ok");
        stub.get("https://b").expect("ok");
        stub.get("https://a").expect("ok");
        assert_eq!(stub.requests(), vec!["https://a", "https://b", "https://a"]);
        assert_eq!(stub.request_count("https://a"), 2);
    }

    #[test]
    fn transport_errors_surface_as_err() {
        let stub = StubFetcher::new().transport_error("https://down", "connection refused");
        let err = stub.get("https://down").expect_err("should fail");
        assert!(err.to_string().contains("connection refused"));
    }
}
