use std::sync::Arc;

use crate::app::Result;
use crate::catalog::ChapterCatalog;
use crate::config::Config;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::prayer::PrayerClient;
use crate::resolver::ChapterResolver;
use crate::sources::{probe, SourceHealth};

pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub resolver: ChapterResolver,
    pub catalog: ChapterCatalog,
    pub prayer: PrayerClient,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.http)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Self {
        let resolver = ChapterResolver::from_config(fetcher.clone(), &config);
        let catalog = ChapterCatalog::new(fetcher.clone(), config.sources.clone());
        let prayer = PrayerClient::new(fetcher.clone(), config.prayer.clone());

        Self {
            config,
            fetcher,
            resolver,
            catalog,
            prayer,
        }
    }

    pub async fn probe(&self) -> SourceHealth {
        probe(self.fetcher.as_ref(), &self.config.sources).await
    }
}
