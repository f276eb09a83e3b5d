use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// The five daily prayers in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Indonesian display name
    pub fn local_name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Subuh",
            Prayer::Dhuhr => "Dzuhur",
            Prayer::Asr => "Ashar",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isya",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        };
        f.write_str(key)
    }
}

/// Daily prayer timings as `HH:MM` strings, keyed the way the timings API
/// names them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrayerSchedule {
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

impl Default for PrayerSchedule {
    /// Schedule shown whenever the timings lookup fails.
    fn default() -> Self {
        Self {
            fajr: "05:30".into(),
            dhuhr: "12:15".into(),
            asr: "15:30".into(),
            maghrib: "18:45".into(),
            isha: "20:00".into(),
        }
    }
}

impl PrayerSchedule {
    pub fn time_of(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (Prayer, &str)> {
        Prayer::ALL.into_iter().map(move |p| (p, self.time_of(p)))
    }

    /// Parse a timing such as `"04:31"` or `"04:31 (WIB)"`.
    pub fn parse_time(value: &str) -> Option<NaiveTime> {
        let clock = value.split_whitespace().next()?;
        NaiveTime::parse_from_str(clock, "%H:%M").ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingPrayer {
    pub prayer: Prayer,
    pub time: String,
    /// The next prayer falls on the following day
    pub tomorrow: bool,
}
