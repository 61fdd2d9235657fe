use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Countdown length in seconds.
    #[serde(default = "default_timer_seconds")]
    pub timer_seconds: u32,
    /// How long a mismatched pair stays visible before hiding again.
    #[serde(default = "default_mismatch_delay_ms")]
    pub mismatch_delay_ms: u64,
    /// Pause between the deciding flip and the end-of-game notice.
    #[serde(default = "default_notify_delay_ms")]
    pub notify_delay_ms: u64,
    /// Catalogs smaller than this are rejected at session start.
    #[serde(default = "default_min_catalog_size")]
    pub min_catalog_size: usize,
}

fn default_timer_seconds() -> u32 {
    90
}

fn default_mismatch_delay_ms() -> u64 {
    1000
}

fn default_notify_delay_ms() -> u64 {
    300
}

fn default_min_catalog_size() -> usize {
    2
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timer_seconds: default_timer_seconds(),
            mismatch_delay_ms: default_mismatch_delay_ms(),
            notify_delay_ms: default_notify_delay_ms(),
            min_catalog_size: default_min_catalog_size(),
        }
    }
}
