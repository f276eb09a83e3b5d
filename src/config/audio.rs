use serde::{Deserialize, Serialize};

/// Recitation audio host. Files are addressed purely by URL template and
/// are never checked for reachability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub host: String,
    pub reciter: String,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            host: "https://everyayah.com/data".to_string(),
            reciter: "Alafasy_128kbps".to_string(),
        }
    }
}

impl AudioConfig {
    /// `<host>/<reciter>/<chapter:03><verse:03>.mp3`
    pub fn verse_url(&self, chapter: u16, verse: u16) -> String {
        format!(
            "{}/{}/{:03}{:03}.mp3",
            self.host.trim_end_matches('/'),
            self.reciter.trim_matches('/'),
            chapter,
            verse
        )
    }
}
