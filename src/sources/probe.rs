use serde::Serialize;

use crate::config::SourceConfig;
use crate::fetcher::{endpoint, Fetcher};

/// Reachability of the two Quran APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceHealth {
    pub primary: bool,
    pub secondary: bool,
}

/// Request chapter 1 from both APIs concurrently.
pub async fn probe(fetcher: &(dyn Fetcher + Send + Sync), sources: &SourceConfig) -> SourceHealth {
    let (primary, secondary) = futures::future::join(
        reachable(fetcher, &sources.primary_base_url, "chapters/1"),
        reachable(fetcher, &sources.secondary_base_url, "surah/1"),
    )
    .await;

    SourceHealth { primary, secondary }
}

async fn reachable(fetcher: &(dyn Fetcher + Send + Sync), base: &str, path: &str) -> bool {
    let url = match endpoint(base, path) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Invalid API base {}: {}", base, e);
            return false;
        }
    };

    match fetcher.fetch(&url).await {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!("Probe of {} failed: {}", url, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::mock::MockFetcher;
    use crate::sources::fixtures::source_config;

    #[tokio::test]
    async fn test_probe_reports_each_api() {
        let fetcher = MockFetcher::new()
            .with_raw("primary.test/api/v4/chapters/1", "{}")
            .with_status("secondary.test/v1/surah/1", 503);

        let health = probe(&fetcher, &source_config()).await;
        assert_eq!(
            health,
            SourceHealth {
                primary: true,
                secondary: false
            }
        );
    }

    #[tokio::test]
    async fn test_probe_with_bad_base_url() {
        let mut sources = source_config();
        sources.primary_base_url = "::not a url::".into();

        let health = probe(&MockFetcher::new(), &sources).await;
        assert!(!health.primary);
        assert!(!health.secondary);
    }
}
