//! Site configuration parsed from an optional inline JSON block.
//!
//! DESIGN
//! ======
//! Every field is optional in the raw document and falls back to the
//! constants in [`crate::consts`], so a page without a config block behaves
//! exactly like the built-in defaults. Parse or validation failures are
//! reported as [`ConfigError`]; [`SiteConfig::load`] logs them and keeps the
//! defaults instead of refusing to start.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{BOT_REPLY_DELAY_MS, CANNED_REPLIES, SCROLL_THRESHOLD_PX, SECTION_LOOKAHEAD_PX};

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config block is not valid JSON or has mistyped fields.
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    /// `log_level` does not name a `log` level.
    #[error("invalid log_level: {0}")]
    InvalidLogLevel(String),
    /// `replies` was present but empty.
    #[error("replies must contain at least one entry")]
    NoReplies,
    /// A pixel distance was negative or not finite.
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidDistance { field: &'static str, value: f64 },
}

/// Typed site configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub scroll_threshold_px: f64,
    pub section_lookahead_px: f64,
    pub reply_delay_ms: u32,
    pub replies: Vec<String>,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            section_lookahead_px: SECTION_LOOKAHEAD_PX,
            reply_delay_ms: BOT_REPLY_DELAY_MS,
            replies: CANNED_REPLIES.iter().map(|r| (*r).to_owned()).collect(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

/// Wire shape of the config block; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    scroll_threshold_px: Option<f64>,
    section_lookahead_px: Option<f64>,
    reply_delay_ms: Option<u32>,
    replies: Option<Vec<String>>,
    log_level: Option<String>,
}

impl SiteConfig {
    /// Build typed config from a JSON document.
    ///
    /// Recognized keys (all optional):
    /// - `scroll_threshold_px`: default 20
    /// - `section_lookahead_px`: default 150
    /// - `reply_delay_ms`: default 800
    /// - `replies`: the five built-in canned replies
    /// - `log_level`: `error`, `warn`, `info` (default), `debug`, `trace`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed or a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(raw)?;
        let defaults = Self::default();

        let scroll_threshold_px = parse_distance("scroll_threshold_px", raw.scroll_threshold_px)?
            .unwrap_or(defaults.scroll_threshold_px);
        let section_lookahead_px = parse_distance("section_lookahead_px", raw.section_lookahead_px)?
            .unwrap_or(defaults.section_lookahead_px);

        let replies = match raw.replies {
            Some(replies) if replies.is_empty() => return Err(ConfigError::NoReplies),
            Some(replies) => replies,
            None => defaults.replies,
        };

        let log_level = match raw.log_level.as_deref() {
            Some(level) => parse_log_level(level)?,
            None => defaults.log_level,
        };

        Ok(Self {
            scroll_threshold_px,
            section_lookahead_px,
            reply_delay_ms: raw.reply_delay_ms.unwrap_or(defaults.reply_delay_ms),
            replies,
            log_level,
        })
    }

    /// Load config from an optional JSON block, falling back to defaults.
    ///
    /// Failures are logged, never fatal.
    pub fn load(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("site config ignored, using defaults: {e}");
                Self::default()
            }
        }
    }
}

fn parse_distance(field: &'static str, value: Option<f64>) -> Result<Option<f64>, ConfigError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(ConfigError::InvalidDistance { field, value: v }),
        other => Ok(other),
    }
}

fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    raw.trim()
        .parse::<log::Level>()
        .map_err(|_| ConfigError::InvalidLogLevel(raw.to_owned()))
}
