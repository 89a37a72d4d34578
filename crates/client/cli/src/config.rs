//! CLI-specific configuration for the terminal shell.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use brawler_core::GameConfig;

use crate::message::MessageLog;

/// Terminal shell configuration.
///
/// Gameplay tuning lives in [`GameConfig`] and the roster file; this only
/// covers how the shell drives and presents a session.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `config.toml` / `roster.ron` overrides.
    pub data_dir: Option<PathBuf>,
    /// Period of the tick loop.
    pub tick: Duration,
    /// How long a continuous key stays held without a repeat, for terminals
    /// that do not report key releases. Must outlast the OS key-repeat delay.
    pub hold: Duration,
    pub session_id: Option<String>,
    /// Number of narration lines kept in the message panel.
    pub message_capacity: usize,
}

impl CliConfig {
    pub const DEFAULT_HOLD_MS: u64 = 500;
    pub const DEFAULT_MESSAGE_CAPACITY: usize = 8;

    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BRAWLER_DATA_DIR` - Content override directory (default: embedded content)
    /// - `BRAWLER_TICK_MS` - Tick period in milliseconds (default: 16)
    /// - `BRAWLER_HOLD_MS` - Synthetic key-release timeout (default: 500)
    /// - `BRAWLER_SESSION_ID` - Log directory name (default: timestamp)
    /// - `BRAWLER_MESSAGE_CAPACITY` - Message panel lines (default: 8, at most 64)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("BRAWLER_DATA_DIR").filter(|dir| !dir.is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(ms) = parse::<u64>(&lookup, "BRAWLER_TICK_MS") {
            config.tick = Duration::from_millis(ms.max(1));
        }
        if let Some(ms) = parse::<u64>(&lookup, "BRAWLER_HOLD_MS") {
            config.hold = Duration::from_millis(ms);
        }
        if let Some(id) = lookup("BRAWLER_SESSION_ID").filter(|id| !id.is_empty()) {
            config.session_id = Some(id);
        }
        if let Some(capacity) = parse::<usize>(&lookup, "BRAWLER_MESSAGE_CAPACITY") {
            config.message_capacity = capacity.clamp(1, MessageLog::MAX_CAPACITY);
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            tick: Duration::from_millis(GameConfig::TICK_INTERVAL_MS),
            hold: Duration::from_millis(Self::DEFAULT_HOLD_MS),
            session_id: None,
            message_capacity: Self::DEFAULT_MESSAGE_CAPACITY,
        }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment variable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.tick, Duration::from_millis(16));
        assert_eq!(config.hold, Duration::from_millis(500));
        assert_eq!(config.message_capacity, 8);
        assert!(config.data_dir.is_none());
        assert!(config.session_id.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("BRAWLER_DATA_DIR", "/srv/brawler"),
            ("BRAWLER_TICK_MS", "33"),
            ("BRAWLER_HOLD_MS", "400"),
            ("BRAWLER_SESSION_ID", "demo"),
            ("BRAWLER_MESSAGE_CAPACITY", "3"),
        ]);
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/brawler")));
        assert_eq!(config.tick, Duration::from_millis(33));
        assert_eq!(config.hold, Duration::from_millis(400));
        assert_eq!(config.session_id.as_deref(), Some("demo"));
        assert_eq!(config.message_capacity, 3);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[
            ("BRAWLER_TICK_MS", "fast"),
            ("BRAWLER_MESSAGE_CAPACITY", "0"),
            ("BRAWLER_DATA_DIR", ""),
        ]);
        assert_eq!(config.tick, Duration::from_millis(16));
        assert_eq!(config.message_capacity, 1);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn oversized_message_capacity_is_clamped() {
        let config = config_from(&[("BRAWLER_MESSAGE_CAPACITY", "65535")]);
        assert_eq!(config.message_capacity, MessageLog::MAX_CAPACITY);

        let config = config_from(&[("BRAWLER_MESSAGE_CAPACITY", "100000")]);
        assert_eq!(config.message_capacity, MessageLog::MAX_CAPACITY);
    }

    #[test]
    fn default_hold_outlasts_key_repeat_delay() {
        assert!(CliConfig::default().hold >= Duration::from_millis(500));
    }
}
