pub mod http_fetcher;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;

#[async_trait]
pub trait Fetcher {
    /// GET `url` and return the body of a successful (2xx) response.
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}

/// Fetch `url` and decode the body into a typed wire record.
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &(dyn Fetcher + Send + Sync),
    url: &Url,
) -> Result<T> {
    tracing::debug!("GET {}", url);
    let body = fetcher.fetch(url).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Join path segments onto an API base URL, keeping the base's own path.
pub fn endpoint(base: &str, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Ok(Url::parse(&joined)?)
}
