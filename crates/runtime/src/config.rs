//! Runtime configuration sourced from defaults and environment variables.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use game_core::GameConfig;

const APP_NAME: &str = "story";

/// Runtime configuration.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Capacity of the presentation request channel.
    pub request_buffer: usize,
    /// How long a suspension waits for an answer; `None` waits forever.
    pub response_timeout: Option<Duration>,
    /// Save directory override; see [`RuntimeConfig::save_dir`].
    pub save_dir: Option<PathBuf>,
    /// Fixed seed for reproducible playback.
    pub rng_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            request_buffer: 8,
            response_timeout: Some(Duration::from_secs(300)),
            save_dir: None,
            rng_seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Reads overrides from `STORY_*` environment variables.
    ///
    /// Unparseable values are ignored and keep their defaults.
    /// `STORY_RESPONSE_TIMEOUT_SECS=0` disables the response timeout.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("STORY_REQUEST_BUFFER") {
            config.request_buffer = capacity.max(1);
        }

        if let Some(secs) = read_env::<u64>("STORY_RESPONSE_TIMEOUT_SECS") {
            config.response_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Some(dir) = env::var("STORY_SAVE_DIR").ok().filter(|dir| !dir.trim().is_empty()) {
            config.save_dir = Some(PathBuf::from(dir));
        }

        if let Some(seed) = read_env::<u64>("STORY_RNG_SEED") {
            config.rng_seed = Some(seed);
        }

        config
    }

    /// Directory holding save slots and settings.
    ///
    /// Falls back to the platform data directory, then `./save_data`.
    pub fn save_dir(&self) -> PathBuf {
        self.save_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", APP_NAME)
                .map(|dirs| dirs.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("./save_data"))
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
