//! Network access for goport.
//!
//! Every outbound request in the workspace goes through [`Fetcher`], so resolution logic can
//! be exercised against canned responses. [`HttpFetcher`] is the production implementation.

#![forbid(unsafe_code)]

mod http;

pub use http::HttpFetcher;

/// Status and full body of one GET.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Blocking HTTP GET.
///
/// An `Err` means the request itself failed (DNS, TLS, connection). Any HTTP status,
/// including 404 and 5xx, is returned as `Ok` for the caller to judge.
pub trait Fetcher {
    fn get(&self, url: &str) -> anyhow::Result<FetchResponse>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn get(&self, url: &str) -> anyhow::Result<FetchResponse> {
        (**self).get(url)
    }
}
