//! Workout configuration.
//!
//! Holds the three tunable values of a workout and the rules for turning raw
//! setting input (as typed by a user) into them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default work phase length in seconds.
pub const DEFAULT_WORK_SECONDS: u32 = 45;

/// Default rest phase length in seconds.
pub const DEFAULT_REST_SECONDS: u32 = 15;

/// Default number of work/rest intervals.
pub const DEFAULT_INTERVALS: u32 = 8;

// ============================================================================
// IntervalConfig
// ============================================================================

/// Configuration for an interval workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalConfig {
    /// Work phase length in seconds
    pub work_duration: u32,
    /// Rest phase length in seconds
    pub rest_duration: u32,
    /// Total number of work/rest intervals
    pub interval_count: u32,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            work_duration: DEFAULT_WORK_SECONDS,
            rest_duration: DEFAULT_REST_SECONDS,
            interval_count: DEFAULT_INTERVALS,
        }
    }
}

impl IntervalConfig {
    /// Returns the configuration with the specified work duration.
    pub fn with_work_duration(mut self, seconds: u32) -> Self {
        self.work_duration = seconds;
        self
    }

    /// Returns the configuration with the specified rest duration.
    pub fn with_rest_duration(mut self, seconds: u32) -> Self {
        self.rest_duration = seconds;
        self
    }

    /// Returns the configuration with the specified interval count.
    pub fn with_interval_count(mut self, count: u32) -> Self {
        self.interval_count = count;
        self
    }

    /// Writes a single field, leaving the others untouched.
    pub fn set(&mut self, field: ConfigField, value: u32) {
        match field {
            ConfigField::WorkDuration => self.work_duration = value,
            ConfigField::RestDuration => self.rest_duration = value,
            ConfigField::IntervalCount => self.interval_count = value,
        }
    }
}

// ============================================================================
// ConfigField
// ============================================================================

/// Names one field of [`IntervalConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigField {
    WorkDuration,
    RestDuration,
    IntervalCount,
}

impl ConfigField {
    /// Returns the canonical name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigField::WorkDuration => "workDuration",
            ConfigField::RestDuration => "restDuration",
            ConfigField::IntervalCount => "intervalCount",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigField {
    type Err = String;

    /// Accepts the canonical names plus the short and legacy aliases
    /// (`workoutTime`, `breakTime`, `intervals`), ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" | "workduration" | "workouttime" => Ok(ConfigField::WorkDuration),
            "rest" | "restduration" | "break" | "breaktime" => Ok(ConfigField::RestDuration),
            "intervals" | "intervalcount" | "rounds" => Ok(ConfigField::IntervalCount),
            other => Err(format!("unknown setting '{}'", other)),
        }
    }
}

// ============================================================================
// SettingPolicy
// ============================================================================

/// How raw setting input is turned into a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingPolicy {
    /// Parse-or-zero: never fails, see [`coerce_lenient`].
    #[default]
    Lenient,
    /// Only plain non-negative integers are accepted, see [`parse_strict`].
    Strict,
}

impl SettingPolicy {
    /// Parses raw input under this policy. `None` means the input is rejected.
    pub fn parse(&self, raw: &str) -> Option<u32> {
        match self {
            SettingPolicy::Lenient => Some(coerce_lenient(raw)),
            SettingPolicy::Strict => parse_strict(raw),
        }
    }
}

/// Coerces arbitrary input into a non-negative integer.
///
/// Leading whitespace is skipped and an optional sign is read, followed by the
/// leading run of digits; anything after it is ignored. Input without digits
/// yields 0, negative values clamp to 0 and oversized values saturate.
pub fn coerce_lenient(raw: &str) -> u32 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if negative || len == 0 {
        return 0;
    }

    rest[..len].bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    })
}

/// Parses input that must be a plain non-negative integer fitting in `u32`.
pub fn parse_strict(raw: &str) -> Option<u32> {
    let s = raw.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// ============================================================================
// Tests
// ============================================================================
