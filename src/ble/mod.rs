// Simulated BLE proximity signal
// No hardware involved: the settings screen picks a level, the map screen
// reads it back and shows the suggested zone.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Simulated received-signal strength. Resets to `High` each process start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RssiLevel {
    High,
    Medium,
    Low,
    None,
}

impl RssiLevel {
    pub fn to_string(&self) -> String {
        match self {
            RssiLevel::High => "high".to_string(),
            RssiLevel::Medium => "medium".to_string(),
            RssiLevel::Low => "low".to_string(),
            RssiLevel::None => "none".to_string(),
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "high" => RssiLevel::High,
            "medium" => RssiLevel::Medium,
            "low" => RssiLevel::Low,
            "none" => RssiLevel::None,
            _ => RssiLevel::High,
        }
    }
}

impl Default for RssiLevel {
    fn default() -> Self {
        RssiLevel::High
    }
}

/// Zone the tracked device is closest to at the given signal strength. The
/// map places the signal marker near the A zones when strong, B when medium,
/// D when weak.
pub fn suggested_zone(level: RssiLevel) -> Option<&'static str> {
    match level {
        RssiLevel::High => Some("A1"),
        RssiLevel::Medium => Some("B2"),
        RssiLevel::Low => Some("D2"),
        RssiLevel::None => None,
    }
}

/// Thread-safe holder for the current signal level, managed by Tauri.
pub struct SignalState {
    level: Arc<Mutex<RssiLevel>>,
}

impl SignalState {
    pub fn new() -> Self {
        Self {
            level: Arc::new(Mutex::new(RssiLevel::default())),
        }
    }

    pub fn get(&self) -> RssiLevel {
        *self.level.lock().unwrap()
    }

    pub fn set(&self, level: RssiLevel) {
        *self.level.lock().unwrap() = level;
    }
}

impl Default for SignalState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_high() {
        let state = SignalState::new();
        assert_eq!(state.get(), RssiLevel::High);
    }

    #[test]
    fn test_set_replaces_level() {
        let state = SignalState::new();
        state.set(RssiLevel::Low);
        assert_eq!(state.get(), RssiLevel::Low);
        state.set(RssiLevel::None);
        assert_eq!(state.get(), RssiLevel::None);
    }

    #[test]
    fn test_string_round_trip() {
        for level in [
            RssiLevel::High,
            RssiLevel::Medium,
            RssiLevel::Low,
            RssiLevel::None,
        ] {
            assert_eq!(RssiLevel::from_string(&level.to_string()), level);
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&RssiLevel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let parsed: RssiLevel = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, RssiLevel::None);
    }

    #[test]
    fn test_suggested_zone_mapping() {
        assert_eq!(suggested_zone(RssiLevel::High), Some("A1"));
        assert_eq!(suggested_zone(RssiLevel::Medium), Some("B2"));
        assert_eq!(suggested_zone(RssiLevel::Low), Some("D2"));
        assert_eq!(suggested_zone(RssiLevel::None), None);
    }
}
