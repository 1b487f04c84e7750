//! Needle and circle geometry plus the vertical-line crossing test
//!
//! Shapes are immutable once constructed. A needle crosses a vertical line
//! exactly when the line's x coordinate falls within the needle's x extent
//! (only the horizontal projection matters against vertical lines); a circle
//! crosses when the line is within one radius of its center. Both checks use
//! closed intervals: tangency counts as a crossing, which the classical
//! probability law requires at the boundary.

use std::f64::consts::PI;

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::sim::field::Field;

/// Which shape a trial drops onto the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShapeKind {
    #[default]
    Needle,
    Circle,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Needle => "needle",
            ShapeKind::Circle => "circle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "needle" => Some(ShapeKind::Needle),
            "circle" => Some(ShapeKind::Circle),
            _ => None,
        }
    }
}

/// A line segment with a center, an orientation, and endpoints derived once
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Needle {
    pub center: DVec2,
    /// Orientation in radians, `[0, pi)`
    pub angle: f64,
    pub half_length: f64,
    pub start: DVec2,
    pub end: DVec2,
}

impl Needle {
    /// Build a needle of the given total length around `center`
    pub fn new(center: DVec2, angle: f64, length: f64) -> Self {
        let half_length = length / 2.0;
        let offset = half_length * DVec2::new(angle.cos(), angle.sin());
        Self {
            center,
            angle,
            half_length,
            start: center + offset,
            end: center - offset,
        }
    }

    /// True if any line position falls within the needle's x extent (inclusive)
    pub fn crosses(&self, line_positions: &[f64]) -> bool {
        let lo = self.start.x.min(self.end.x);
        let hi = self.start.x.max(self.end.x);
        line_positions.iter().any(|&p| lo <= p && p <= hi)
    }
}

/// A circle dropped onto the field
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

impl Circle {
    /// Build a circle of the given diameter around `center`
    pub fn new(center: DVec2, diameter: f64) -> Self {
        Self {
            center,
            radius: diameter / 2.0,
        }
    }

    /// True if any line position is within one radius of the center (inclusive)
    pub fn crosses(&self, line_positions: &[f64]) -> bool {
        line_positions
            .iter()
            .any(|&p| self.center.x - self.radius <= p && p <= self.center.x + self.radius)
    }
}

/// A placed shape, ready for the crossing test and for rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Shape {
    Needle(Needle),
    Circle(Circle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Needle(_) => ShapeKind::Needle,
            Shape::Circle(_) => ShapeKind::Circle,
        }
    }

    /// Crossing test against an ascending family of vertical line positions
    pub fn crosses(&self, line_positions: &[f64]) -> bool {
        match self {
            Shape::Needle(n) => n.crosses(line_positions),
            Shape::Circle(c) => c.crosses(line_positions),
        }
    }
}

/// Draw a randomly placed shape of the given size inside the field
///
/// `size` is the needle length or circle diameter. Needle orientation is
/// uniform over `[0, pi)`; centers are uniform over the field bounds. Pure in
/// its random draws: consuming from `rng` is the only side effect.
pub fn generate(
    kind: ShapeKind,
    size: f64,
    field: &Field,
    rng: &mut impl Rng,
) -> Result<Shape, SimError> {
    if !size.is_finite() {
        return Err(SimError::SizeNotFinite { size });
    }
    if size <= 0.0 {
        return Err(SimError::SizeNotPositive { size });
    }

    let shape = match kind {
        ShapeKind::Needle => {
            let angle = rng.random_range(0.0..PI);
            let center = field.sample_point(rng);
            Shape::Needle(Needle::new(center, angle, size))
        }
        ShapeKind::Circle => {
            let center = field.sample_point(rng);
            Shape::Circle(Circle::new(center, size))
        }
    };
    Ok(shape)
}
