//! Input simulator
//!
//! The public surface driven by the CLI: one-shot taps, held-key
//! reconciliation, interpolated pointer moves and button clicks. All
//! operations are synchronous blocking calls into the injection backend;
//! concurrent use of one simulator must be serialized by the caller.

mod hold;
mod motion;

pub use hold::KeyHoldTracker;
pub use motion::{MotionPlan, DEFAULT_STEP_SIZE};

use crate::backend::{InjectResult, InjectionBackend, KeyCode, PointerButton, ScreenPoint};
use crate::keymap;

/// Button mask bits, matching the reference wire convention.
pub const BUTTON_PRIMARY: u8 = 1;
pub const BUTTON_OTHER: u8 = 2;
pub const BUTTON_SECONDARY: u8 = 4;

/// Keyboard/mouse input simulator over one injection backend.
pub struct Simulator<B: InjectionBackend> {
    backend: B,
    tracker: KeyHoldTracker,
    step_size: i32,
}

impl<B: InjectionBackend> Simulator<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            tracker: KeyHoldTracker::new(),
            step_size: DEFAULT_STEP_SIZE,
        }
    }

    pub fn with_step_size(mut self, step_size: i32) -> Self {
        self.step_size = step_size;
        self
    }

    /// Keys currently held by the simulator.
    pub fn held_keys(&self) -> &[KeyCode] {
        self.tracker.held()
    }

    /// Press and immediately release one key.
    pub fn tap_once(&mut self, code: KeyCode) -> InjectResult<()> {
        self.tracker.tap_once(&mut self.backend, code)
    }

    /// Reconcile the held-key set against a newly requested one.
    ///
    /// See [`KeyHoldTracker::reconcile`] for the release/press contract.
    pub fn reconcile(&mut self, requested: &[KeyCode]) -> InjectResult<()> {
        self.tracker.reconcile(&mut self.backend, requested)
    }

    /// Move the pointer by a displacement, interpolated into small steps.
    ///
    /// The target is resolved from the current pointer location plus the
    /// displacement, offset by display-0's origin. Bounds are re-queried on
    /// every call; they are cheap and may change under a multi-monitor setup.
    pub fn move_relative(&mut self, dx: i32, dy: i32) -> InjectResult<()> {
        let from = self.backend.pointer_location()?;
        let bounds = self.backend.display_bounds(0)?;

        let to = ScreenPoint::new(from.x + dx + bounds.x, from.y + dy + bounds.y);
        let plan = MotionPlan::new(from, to, self.step_size);
        tracing::debug!(
            "pointer move ({}, {}) -> ({}, {}) in {} points",
            from.x,
            from.y,
            to.x,
            to.y,
            plan.len()
        );

        for point in plan {
            self.backend.pointer_move(point)?;
        }
        Ok(())
    }

    /// Move the pointer by a displacement given as fractions of display-0.
    ///
    /// `(0.5, 0.5)` moves half a screen right and down. Resolves the fraction
    /// against freshly queried bounds and goes through [`Self::move_relative`],
    /// which queries them again.
    pub fn move_normalized(&mut self, fx: f64, fy: f64) -> InjectResult<()> {
        let bounds = self.backend.display_bounds(0)?;
        self.move_relative(
            (fx * bounds.width as f64) as i32,
            (fy * bounds.height as f64) as i32,
        )
    }

    /// Click one button at the current pointer location.
    ///
    /// The mask follows the reference convention (bit 0 primary, bit 1 other,
    /// bit 2 secondary); when several bits are set, primary wins over other
    /// wins over secondary. The location is queried independently for the
    /// down and the up event.
    pub fn click(&mut self, mask: u8) -> InjectResult<()> {
        let Some(button) = button_from_mask(mask) else {
            tracing::warn!("click mask {:#x} selects no button", mask);
            return Ok(());
        };

        let at = self.backend.pointer_location()?;
        self.backend.button_down(button, at)?;
        let at = self.backend.pointer_location()?;
        self.backend.button_up(button, at)
    }

    /// The static key table, for UI population.
    pub fn key_table(&self) -> &'static [(KeyCode, &'static str)] {
        keymap::KEY_TABLE
    }
}

fn button_from_mask(mask: u8) -> Option<PointerButton> {
    if mask & BUTTON_PRIMARY != 0 {
        Some(PointerButton::Primary)
    } else if mask & BUTTON_OTHER != 0 {
        Some(PointerButton::Other)
    } else if mask & BUTTON_SECONDARY != 0 {
        Some(PointerButton::Secondary)
    } else {
        None
    }
}
