use serde::{Deserialize, Serialize};

/// Prayer-time lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrayerConfig {
    /// Timings API (aladhan v1)
    pub base_url: String,

    /// City used when none is given on the command line
    pub city: String,

    pub country: String,

    /// Calculation method id understood by the timings API (2 = ISNA)
    pub method: u8,
}

impl Default for PrayerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.aladhan.com/v1".to_string(),
            city: "Jakarta".to_string(),
            country: "Indonesia".to_string(),
            method: 2,
        }
    }
}
