//! In-memory [`Fetcher`] for tests.
//!
//! Routes are keyed by `host + path`; query strings are ignored so tests
//! don't have to repeat the exact request parameters. Unknown routes fail
//! like an unreachable host.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use url::Url;

use crate::app::{Result, TilawahError};
use crate::fetcher::Fetcher;

#[derive(Debug, Clone)]
enum MockRoute {
    Body(Vec<u8>),
    Status(u16),
}

#[derive(Debug, Default)]
pub struct MockFetcher {
    routes: HashMap<String, MockRoute>,
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `route` (e.g. `"primary.test/api/v4/chapters/1"`).
    pub fn with_json(mut self, route: &str, body: serde_json::Value) -> Self {
        self.routes
            .insert(route.to_string(), MockRoute::Body(body.to_string().into_bytes()));
        self
    }

    pub fn with_raw(mut self, route: &str, body: &str) -> Self {
        self.routes
            .insert(route.to_string(), MockRoute::Body(body.as_bytes().to_vec()));
        self
    }

    /// Answer `route` with a non-success status.
    pub fn with_status(mut self, route: &str, status: u16) -> Self {
        self.routes.insert(route.to_string(), MockRoute::Status(status));
        self
    }

    /// Full URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_called(&self, route: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|url| Self::route_key_str(url).as_deref() == Some(route))
    }

    fn route_key(url: &Url) -> String {
        format!("{}{}", url.host_str().unwrap_or_default(), url.path())
    }

    fn route_key_str(url: &str) -> Option<String> {
        Url::parse(url).ok().map(|u| Self::route_key(&u))
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(url.to_string());

        match self.routes.get(&Self::route_key(url)) {
            Some(MockRoute::Body(body)) => Ok(body.clone()),
            Some(MockRoute::Status(status)) => Err(TilawahError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(TilawahError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("no route for {url}"),
            ))),
        }
    }
}
