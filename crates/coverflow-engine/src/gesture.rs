#![forbid(unsafe_code)]

//! Gesture interpretation: raw input deltas to carousel steps.
//!
//! Three independent interpreters translate host input into discrete
//! [`StepDirection`]s for the controller. They never compute geometry; the
//! engine facade applies the resulting steps to [`CarouselState`] and owns
//! all the state that crosses events.
//!
//! [`CarouselState`]: crate::controller::CarouselState
//!
//! # State Machine
//!
//! - **Wheel**: stateless. One event can yield several steps.
//! - **Keypress**: stateless. Arrow keys map to steps — in the inverted
//!   direction the engine has always shipped with (see below).
//! - **Touch drag**: [`TouchTracker`] caches the drag-start pointer x and the
//!   offset committed at that moment. Each move event yields at most one
//!   step, no matter how far past the threshold the finger traveled.
//!
//! # Invariants
//!
//! 1. `TouchTracker` is a per-engine field, never shared: multiple engine
//!    instances on one page must not see each other's drags.
//! 2. A move event without a preceding start is ignored.
//! 3. One step maximum per move event; there is no multi-step catch-up.
//! 4. Wheel step count is `ceil(|delta| / 120)`, bounded only by the panel
//!    list edges downstream.
//!
//! # Failure Modes
//!
//! - Non-finite wheel deltas are dropped.
//! - A zero-pixel move computes no direction and therefore no step.
//!
//! # Compatibility
//!
//! The key mapping is intentionally inverted relative to naive arrow
//! semantics: `Right` steps to the *previous* panel and `Left` to the *next*.
//! Hosts observe and depend on this, so it is preserved verbatim and pinned
//! by a regression test. Do not "fix" it.

use coverflow_core::KeyCode;

/// One wheel notch in delta units.
pub const WHEEL_STEP_UNIT: f64 = 120.0;

/// Direction of a single carousel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Toward higher indices.
    Next,
    /// Toward lower indices.
    Previous,
}

/// Interpret a wheel delta as a bounded burst of steps.
///
/// Negative deltas travel toward higher indices. Returns `None` for zero or
/// non-finite deltas.
#[must_use]
pub fn wheel_steps(delta: f64) -> Option<(StepDirection, usize)> {
    if !delta.is_finite() || delta == 0.0 {
        return None;
    }
    let count = (delta.abs() / WHEEL_STEP_UNIT).ceil() as usize;
    let direction = if delta < 0.0 {
        StepDirection::Next
    } else {
        StepDirection::Previous
    };
    Some((direction, count))
}

/// Map a key code to a step.
///
/// See the module-level compatibility note: the mapping is inverted on
/// purpose.
#[must_use]
pub fn key_step(code: KeyCode) -> Option<StepDirection> {
    match code {
        KeyCode::Right => Some(StepDirection::Previous),
        KeyCode::Left => Some(StepDirection::Next),
        _ => None,
    }
}

/// Per-instance drag cache.
///
/// Armed by `begin` on drag start; `interpret_move` reads it on every move.
/// Contents are stale but harmless between drags — the next `begin`
/// overwrites everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchTracker {
    armed: bool,
    last_x: f64,
    committed_offset: f64,
}

impl TouchTracker {
    /// Record the drag-start pointer x and the offset committed at that
    /// moment.
    pub fn begin(&mut self, x: f64, committed_offset: f64) {
        self.armed = true;
        self.last_x = x;
        self.committed_offset = committed_offset;
    }

    /// Interpret a move to `x`, yielding at most one step.
    ///
    /// The accumulated travel is `committed_offset − (x − start_x)`; once its
    /// magnitude reaches `threshold` (one base width), a single step fires in
    /// the direction of the finger delta.
    #[must_use]
    pub fn interpret_move(&self, x: f64, threshold: f64) -> Option<StepDirection> {
        if !self.armed {
            return None;
        }
        let moved = x - self.last_x;
        if moved == 0.0 || !moved.is_finite() {
            return None;
        }
        let total_move = self.committed_offset - moved;
        if total_move.abs() < threshold {
            return None;
        }
        if moved > 0.0 {
            Some(StepDirection::Previous)
        } else {
            Some(StepDirection::Next)
        }
    }

    /// Refresh the cached offset after a step committed new state.
    pub fn commit_offset(&mut self, offset: f64) {
        self.committed_offset = offset;
    }

    /// Whether a drag start has been recorded.
    #[inline]
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }
}
