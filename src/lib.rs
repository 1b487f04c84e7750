//! Buffon - a deterministic Monte-Carlo core for the needle/circle experiment
//!
//! Core modules:
//! - `sim`: Deterministic simulation (field geometry, shape sampling, trial runner)
//! - `config`: Run configuration with the fixed UI menus and JSON load/save
//! - `poisson`: Poisson density curve sampling
//! - `error`: Argument/state error taxonomy
//!
//! The presentation layer is deliberately absent: each completed trial yields
//! a renderable record and any front end can drive the runner from a timer.

pub mod config;
pub mod error;
pub mod poisson;
pub mod sim;

pub use config::SimConfig;
pub use error::SimError;
pub use sim::{Field, Shape, ShapeKind, TrialRecord, TrialRunner};

/// Experiment constants
pub mod consts {
    /// Lower bound of the square field (both axes)
    pub const FIELD_MIN: f64 = 0.0;
    /// Upper bound of the square field (both axes)
    pub const FIELD_MAX: f64 = 5.0;
    /// Number of vertical grid lines
    pub const LINE_COUNT: usize = 6;
    /// Distance between adjacent grid lines, in the same units as shape size
    pub const LINE_SPACING: f64 = 1.0;
}
