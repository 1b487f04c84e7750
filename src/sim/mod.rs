//! Deterministic simulation module
//!
//! All experiment logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, always injected by the caller
//! - One trial per external tick, no internal scheduling
//! - No rendering or platform dependencies

pub mod field;
pub mod runner;
pub mod shape;

pub use field::Field;
pub use runner::{RunPhase, TrialRecord, TrialRunner};
pub use shape::{Circle, Needle, Shape, ShapeKind, generate};
