//! Run configuration
//!
//! Carries the fixed menus the reference UI offers (the runner itself accepts
//! any positive values) and a JSON load/save pair that falls back to defaults
//! on any failure.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::sim::ShapeKind;

/// Trial counts offered by the reference UI
pub const TRIAL_CHOICES: [u64; 6] = [10, 100, 200, 500, 1000, 2500];

/// Shape sizes (needle length / circle diameter) offered by the reference UI
pub const SIZE_CHOICES: [f64; 10] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

/// Configuration for one experiment run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Needle or circle
    pub shape_kind: ShapeKind,
    /// Needle length or circle diameter
    pub size: f64,
    /// Number of trials to run
    pub total_trials: u64,
    /// RNG seed; `None` means the caller picks one (e.g. from the clock)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    /// The reference UI's initial selections
    fn default() -> Self {
        Self {
            shape_kind: ShapeKind::Needle,
            size: SIZE_CHOICES[0],
            total_trials: TRIAL_CHOICES[0],
            seed: None,
        }
    }
}

impl SimConfig {
    /// Check the values a runner would reject at `start`
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.size.is_finite() {
            return Err(SimError::SizeNotFinite { size: self.size });
        }
        if self.size <= 0.0 {
            return Err(SimError::SizeNotPositive { size: self.size });
        }
        if self.total_trials == 0 {
            return Err(SimError::TrialsIsZero);
        }
        Ok(())
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<SimConfig>(&json) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("bad config at {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no config at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save as pretty-printed JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).expect("config serializes");
        std::fs::write(path, json)?;
        log::info!("config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.shape_kind, ShapeKind::Needle);
        assert_eq!(config.total_trials, 10);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SimConfig::default();
        config.size = 0.0;
        assert!(config.validate().is_err());

        config.size = 0.5;
        config.total_trials = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimConfig {
            shape_kind: ShapeKind::Circle,
            size: 0.7,
            total_trials: 2500,
            seed: Some(42),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.shape_kind, ShapeKind::Circle);
        assert_eq!(back.size, 0.7);
        assert_eq!(back.total_trials, 2500);
        assert_eq!(back.seed, Some(42));
    }
}
