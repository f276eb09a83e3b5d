//! Daily prayer timings by city.

use std::sync::Arc;

use chrono::NaiveTime;
use serde::Deserialize;
use url::Url;

use crate::app::Result;
use crate::config::PrayerConfig;
use crate::domain::{Prayer, PrayerSchedule, UpcomingPrayer};
use crate::fetcher::{endpoint, fetch_json, Fetcher};

#[derive(Debug, Deserialize)]
struct TimingsEnvelope {
    data: TimingsData,
}

#[derive(Debug, Deserialize)]
struct TimingsData {
    timings: PrayerSchedule,
}

pub struct PrayerClient {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    config: PrayerConfig,
}

impl PrayerClient {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, config: PrayerConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn default_city(&self) -> &str {
        &self.config.city
    }

    /// Timings for `city`, or [`PrayerSchedule::default`] on any failure.
    pub async fn timings(&self, city: &str) -> PrayerSchedule {
        match self.fetch_timings(city).await {
            Ok(schedule) => schedule,
            Err(e) => {
                tracing::warn!("Prayer times unavailable for {}: {}", city, e);
                PrayerSchedule::default()
            }
        }
    }

    fn timings_url(&self, city: &str) -> Result<Url> {
        let mut url = endpoint(&self.config.base_url, "timingsByCity")?;
        url.query_pairs_mut()
            .append_pair("city", city)
            .append_pair("country", &self.config.country)
            .append_pair("method", &self.config.method.to_string());
        Ok(url)
    }

    async fn fetch_timings(&self, city: &str) -> Result<PrayerSchedule> {
        let url = self.timings_url(city)?;
        let envelope: TimingsEnvelope = fetch_json(self.fetcher.as_ref(), &url).await?;
        Ok(envelope.data.timings)
    }
}

/// The first prayer later than `now`, wrapping to tomorrow's Fajr after
/// Isha. Timings that don't parse are skipped.
pub fn next_prayer(schedule: &PrayerSchedule, now: NaiveTime) -> UpcomingPrayer {
    let upcoming = schedule.entries().find(|(_, time)| {
        PrayerSchedule::parse_time(time).is_some_and(|at| at > now)
    });

    match upcoming {
        Some((prayer, time)) => UpcomingPrayer {
            prayer,
            time: time.to_string(),
            tomorrow: false,
        },
        None => UpcomingPrayer {
            prayer: Prayer::Fajr,
            time: schedule.fajr.clone(),
            tomorrow: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::mock::MockFetcher;
    use serde_json::json;

    fn config() -> PrayerConfig {
        PrayerConfig {
            base_url: "http://prayer.test/v1".into(),
            ..PrayerConfig::default()
        }
    }

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_timings_url() {
        let client = PrayerClient::new(Arc::new(MockFetcher::new()), config());
        let url = client.timings_url("Banda Aceh").unwrap();

        assert_eq!(url.path(), "/v1/timingsByCity");
        assert_eq!(url.query(), Some("city=Banda+Aceh&country=Indonesia&method=2"));
    }

    #[tokio::test]
    async fn test_timings_parses_api_payload() {
        let fetcher = MockFetcher::new().with_json(
            "prayer.test/v1/timingsByCity",
            json!({
                "code": 200,
                "status": "OK",
                "data": {
                    "timings": {
                        "Fajr": "04:35",
                        "Sunrise": "05:52",
                        "Dhuhr": "11:55",
                        "Asr": "15:15",
                        "Sunset": "17:56",
                        "Maghrib": "17:56",
                        "Isha": "19:07",
                        "Imsak": "04:25",
                        "Midnight": "23:55"
                    }
                }
            }),
        );
        let client = PrayerClient::new(Arc::new(fetcher), config());

        let schedule = client.timings("Jakarta").await;
        assert_eq!(schedule.fajr, "04:35");
        assert_eq!(schedule.maghrib, "17:56");
        assert_eq!(schedule.isha, "19:07");
    }

    #[tokio::test]
    async fn test_unknown_city_gets_default_schedule() {
        let fetcher = MockFetcher::new().with_status("prayer.test/v1/timingsByCity", 400);
        let client = PrayerClient::new(Arc::new(fetcher), config());

        let schedule = client.timings("Atlantis").await;
        assert_eq!(schedule, PrayerSchedule::default());
        assert_eq!(schedule.fajr, "05:30");
        assert_eq!(schedule.dhuhr, "12:15");
        assert_eq!(schedule.asr, "15:30");
        assert_eq!(schedule.maghrib, "18:45");
        assert_eq!(schedule.isha, "20:00");
    }

    #[tokio::test]
    async fn test_incomplete_payload_gets_default_schedule() {
        let fetcher = MockFetcher::new().with_json(
            "prayer.test/v1/timingsByCity",
            json!({ "data": { "timings": { "Fajr": "04:35" } } }),
        );
        let client = PrayerClient::new(Arc::new(fetcher), config());

        assert_eq!(client.timings("Jakarta").await, PrayerSchedule::default());
    }

    #[test]
    fn test_next_prayer_during_the_day() {
        let schedule = PrayerSchedule::default();

        let next = next_prayer(&schedule, at(4, 0));
        assert_eq!(next.prayer, Prayer::Fajr);
        assert!(!next.tomorrow);

        let next = next_prayer(&schedule, at(13, 0));
        assert_eq!(next.prayer, Prayer::Asr);
        assert_eq!(next.time, "15:30");

        // A prayer at exactly `now` has already started
        let next = next_prayer(&schedule, at(18, 45));
        assert_eq!(next.prayer, Prayer::Isha);
    }

    #[test]
    fn test_next_prayer_wraps_after_isha() {
        let next = next_prayer(&PrayerSchedule::default(), at(21, 30));
        assert_eq!(
            next,
            UpcomingPrayer {
                prayer: Prayer::Fajr,
                time: "05:30".into(),
                tomorrow: true,
            }
        );
    }

    #[test]
    fn test_next_prayer_skips_unparseable_times() {
        let schedule = PrayerSchedule {
            asr: "--:--".into(),
            ..PrayerSchedule::default()
        };

        let next = next_prayer(&schedule, at(13, 0));
        assert_eq!(next.prayer, Prayer::Maghrib);
    }
}
