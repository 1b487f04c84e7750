//! Tick-driven trial runner
//!
//! One trial is generated and tested per external scheduling tick. The runner
//! owns its counters and a seeded RNG; the tick interval itself is a
//! presentation concern and never appears here. State guards replace the
//! reference UI's button enable/disable logic:
//!
//! - `step` in `Idle` is an error (nothing is configured yet)
//! - `step` in `Paused` or `Finished` is a silent no-op, since an external
//!   timer may legitimately keep firing
//! - `pause`/`resume`/`cancel` outside their source states are errors
//! - `start` is valid from every phase and doubles as restart

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::sim::field::Field;
use crate::sim::shape::{Shape, ShapeKind, generate};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RunPhase {
    /// No run configured; configuration inputs are live
    #[default]
    Idle,
    /// Trials advance one per tick
    Running,
    /// Run suspended; ticks are ignored until `resume`
    Paused,
    /// All requested trials completed
    Finished,
}

impl RunPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunPhase::Idle => "idle",
            RunPhase::Running => "running",
            RunPhase::Paused => "paused",
            RunPhase::Finished => "finished",
        }
    }
}

/// One completed trial, ready for a presentation layer to draw
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrialRecord {
    /// The placed shape (kind + geometry)
    pub shape: Shape,
    /// Whether it crossed a grid line (color-codes the rendering)
    pub crossed: bool,
}

impl TrialRecord {
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }
}

/// The trial state machine with running statistics
///
/// Counters are monotone non-decreasing within a run and reset only by
/// `start`. Matching the reference behavior, `cancel` leaves them at their
/// last values so the final statistics stay readable.
#[derive(Debug, Clone)]
pub struct TrialRunner {
    /// Run seed for reproducibility
    seed: u64,
    rng: Pcg32,
    field: Field,
    phase: RunPhase,
    shape_kind: ShapeKind,
    size: f64,
    total_trials: u64,
    plotted_count: u64,
    crossing_count: u64,
}

impl TrialRunner {
    /// Create an idle runner over the default ruled field
    pub fn new(seed: u64) -> Self {
        Self::with_field(seed, Field::default())
    }

    /// Create an idle runner over a custom field
    pub fn with_field(seed: u64, field: Field) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            field,
            phase: RunPhase::Idle,
            shape_kind: ShapeKind::default(),
            size: 0.0,
            total_trials: 0,
            plotted_count: 0,
            crossing_count: 0,
        }
    }

    /// Begin a run, resetting both counters
    ///
    /// Valid from any phase; the runner accepts any positive `total_trials`,
    /// not just the reference UI's menu values. The RNG stream continues
    /// across restarts so back-to-back runs differ.
    pub fn start(
        &mut self,
        shape_kind: ShapeKind,
        size: f64,
        total_trials: u64,
    ) -> Result<(), SimError> {
        if !size.is_finite() {
            return Err(SimError::SizeNotFinite { size });
        }
        if size <= 0.0 {
            return Err(SimError::SizeNotPositive { size });
        }
        if total_trials == 0 {
            return Err(SimError::TrialsIsZero);
        }

        self.shape_kind = shape_kind;
        self.size = size;
        self.total_trials = total_trials;
        self.plotted_count = 0;
        self.crossing_count = 0;
        self.phase = RunPhase::Running;
        log::info!(
            "run started: {} trials, {} size {}",
            total_trials,
            shape_kind.as_str(),
            size
        );
        Ok(())
    }

    /// Advance one trial; call once per scheduling tick
    ///
    /// Returns the trial record while `Running`, `None` while `Paused` or
    /// `Finished`, and an error in `Idle`.
    pub fn step(&mut self) -> Result<Option<TrialRecord>, SimError> {
        match self.phase {
            RunPhase::Idle => {
                return Err(SimError::InvalidState {
                    op: "step",
                    phase: self.phase,
                });
            }
            RunPhase::Paused | RunPhase::Finished => return Ok(None),
            RunPhase::Running => {}
        }

        let shape = generate(self.shape_kind, self.size, &self.field, &mut self.rng)?;
        let crossed = shape.crosses(self.field.line_positions());

        self.plotted_count += 1;
        if crossed {
            self.crossing_count += 1;
        }

        if self.plotted_count == self.total_trials {
            self.phase = RunPhase::Finished;
            log::info!(
                "run finished: {}/{} crossing ({:.2}%)",
                self.crossing_count,
                self.plotted_count,
                self.crossing_rate() * 100.0
            );
        }

        Ok(Some(TrialRecord { shape, crossed }))
    }

    /// Suspend a running run
    pub fn pause(&mut self) -> Result<(), SimError> {
        match self.phase {
            RunPhase::Running => {
                self.phase = RunPhase::Paused;
                Ok(())
            }
            phase => Err(SimError::InvalidState { op: "pause", phase }),
        }
    }

    /// Resume a paused run
    pub fn resume(&mut self) -> Result<(), SimError> {
        match self.phase {
            RunPhase::Paused => {
                self.phase = RunPhase::Running;
                Ok(())
            }
            phase => Err(SimError::InvalidState { op: "resume", phase }),
        }
    }

    /// Abandon the current run and return to `Idle`
    ///
    /// Counters keep their last values; only a fresh `start` resets them.
    pub fn cancel(&mut self) -> Result<(), SimError> {
        match self.phase {
            RunPhase::Running | RunPhase::Paused => {
                self.phase = RunPhase::Idle;
                log::info!(
                    "run cancelled after {} of {} trials",
                    self.plotted_count,
                    self.total_trials
                );
                Ok(())
            }
            phase => Err(SimError::InvalidState { op: "cancel", phase }),
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == RunPhase::Finished
    }

    pub fn plotted_count(&self) -> u64 {
        self.plotted_count
    }

    pub fn crossing_count(&self) -> u64 {
        self.crossing_count
    }

    /// Fraction of plotted shapes that crossed a line; `0.0` before any trial
    pub fn crossing_rate(&self) -> f64 {
        if self.plotted_count == 0 {
            0.0
        } else {
            self.crossing_count as f64 / self.plotted_count as f64
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn field(&self) -> &Field {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_counts_are_monotone() {
        let mut runner = TrialRunner::new(12345);
        runner.start(ShapeKind::Needle, 0.5, 50).unwrap();

        let mut last_crossing = 0;
        for n in 1..=50u64 {
            let record = runner.step().unwrap();
            assert!(record.is_some());
            assert_eq!(runner.plotted_count(), n);
            assert!(runner.crossing_count() >= last_crossing);
            assert!(runner.crossing_count() <= runner.plotted_count());
            last_crossing = runner.crossing_count();
        }
    }

    #[test]
    fn test_run_terminates_and_stays_finished() {
        let mut runner = TrialRunner::new(99);
        runner.start(ShapeKind::Circle, 0.3, 10).unwrap();

        for _ in 0..10 {
            runner.step().unwrap();
        }
        assert!(runner.is_finished());
        assert_eq!(runner.plotted_count(), 10);

        // Extra ticks after Finished must not advance anything
        assert!(runner.step().unwrap().is_none());
        assert_eq!(runner.plotted_count(), 10);
    }

    #[test]
    fn test_hundred_needle_scenario() {
        let mut runner = TrialRunner::new(2024);
        runner.start(ShapeKind::Needle, 1.0, 100).unwrap();
        for _ in 0..100 {
            runner.step().unwrap();
        }
        assert_eq!(runner.plotted_count(), 100);
        assert_eq!(runner.phase(), RunPhase::Finished);
        let rate = runner.crossing_rate();
        assert!((0.0..=1.0).contains(&rate));
    }

    #[test]
    fn test_pause_blocks_ticks() {
        let mut runner = TrialRunner::new(7);
        runner.start(ShapeKind::Needle, 0.5, 100).unwrap();
        for _ in 0..5 {
            runner.step().unwrap();
        }
        runner.pause().unwrap();
        assert_eq!(runner.phase(), RunPhase::Paused);

        // The external timer may keep firing while paused
        for _ in 0..10 {
            assert!(runner.step().unwrap().is_none());
        }
        assert_eq!(runner.plotted_count(), 5);

        runner.resume().unwrap();
        runner.step().unwrap();
        assert_eq!(runner.plotted_count(), 6);
    }

    #[test]
    fn test_cancel_keeps_counters() {
        let mut runner = TrialRunner::new(3);
        runner.start(ShapeKind::Needle, 0.5, 100).unwrap();
        for _ in 0..20 {
            runner.step().unwrap();
        }
        let plotted = runner.plotted_count();
        let crossing = runner.crossing_count();

        runner.cancel().unwrap();
        assert_eq!(runner.phase(), RunPhase::Idle);
        assert_eq!(runner.plotted_count(), plotted);
        assert_eq!(runner.crossing_count(), crossing);

        // No further trials until a fresh start
        assert!(matches!(
            runner.step(),
            Err(SimError::InvalidState { op: "step", .. })
        ));
    }

    #[test]
    fn test_start_resets_counters() {
        let mut runner = TrialRunner::new(11);
        runner.start(ShapeKind::Circle, 0.4, 10).unwrap();
        for _ in 0..10 {
            runner.step().unwrap();
        }
        assert!(runner.is_finished());

        // Restart from Finished
        runner.start(ShapeKind::Needle, 0.2, 5).unwrap();
        assert_eq!(runner.phase(), RunPhase::Running);
        assert_eq!(runner.plotted_count(), 0);
        assert_eq!(runner.crossing_count(), 0);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut runner = TrialRunner::new(5);
        assert!(runner.pause().is_err());
        assert!(runner.resume().is_err());
        assert!(runner.cancel().is_err());

        runner.start(ShapeKind::Needle, 0.5, 10).unwrap();
        assert!(runner.resume().is_err()); // not paused
        runner.pause().unwrap();
        assert!(runner.pause().is_err()); // already paused
    }

    #[test]
    fn test_start_rejects_bad_arguments() {
        let mut runner = TrialRunner::new(1);
        assert!(matches!(
            runner.start(ShapeKind::Needle, 0.0, 10),
            Err(SimError::SizeNotPositive { .. })
        ));
        assert!(matches!(
            runner.start(ShapeKind::Needle, 0.5, 0),
            Err(SimError::TrialsIsZero)
        ));
        assert_eq!(runner.phase(), RunPhase::Idle);
    }

    #[test]
    fn test_determinism() {
        // Two runners with the same seed produce identical trial sequences
        let mut a = TrialRunner::new(424242);
        let mut b = TrialRunner::new(424242);
        a.start(ShapeKind::Needle, 0.7, 200).unwrap();
        b.start(ShapeKind::Needle, 0.7, 200).unwrap();

        for _ in 0..200 {
            let ra = a.step().unwrap().unwrap();
            let rb = b.step().unwrap().unwrap();
            assert_eq!(ra.crossed, rb.crossed);
        }
        assert_eq!(a.crossing_count(), b.crossing_count());
    }
}
