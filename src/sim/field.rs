//! The ruled field shapes are dropped onto
//!
//! A square region with a family of evenly spaced vertical lines. The line
//! spacing is the distance unit everything else (shape size, the classical
//! crossing probability) is expressed in.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_MAX, FIELD_MIN, LINE_COUNT, LINE_SPACING};

/// A bounded 2D field ruled with vertical lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Lower-left corner
    pub min: DVec2,
    /// Upper-right corner
    pub max: DVec2,
    /// X positions of the vertical lines, ascending
    lines: Vec<f64>,
}

impl Default for Field {
    /// The reference field: `[0,5] x [0,5]` with lines at x = 0..=5
    fn default() -> Self {
        let lines = (0..LINE_COUNT)
            .map(|i| FIELD_MIN + i as f64 * LINE_SPACING)
            .collect();
        Self {
            min: DVec2::splat(FIELD_MIN),
            max: DVec2::splat(FIELD_MAX),
            lines,
        }
    }
}

impl Field {
    /// The vertical line positions, ascending
    pub fn line_positions(&self) -> &[f64] {
        &self.lines
    }

    /// Spacing between adjacent lines (constant across the field)
    pub fn line_spacing(&self) -> f64 {
        LINE_SPACING
    }

    /// Draw a point uniformly from the field bounds
    pub fn sample_point(&self, rng: &mut impl Rng) -> DVec2 {
        DVec2::new(
            rng.random_range(self.min.x..self.max.x),
            rng.random_range(self.min.y..self.max.y),
        )
    }
}
