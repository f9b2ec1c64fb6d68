#![forbid(unsafe_code)]

//! Carousel state: the single source of truth for positioning.
//!
//! [`CarouselState`] owns the canonical `{active index, pixel offset}` pair.
//! Every mutation goes through the operations here; gesture interpreters and
//! the engine facade never touch the fields directly, which is what keeps the
//! index/offset invariant intact.
//!
//! # Invariants
//!
//! 1. `active` always denotes the centered panel: after any successful
//!    operation, `offset == base_width × (center − active)` where
//!    `center = len / 2`.
//! 2. `active < len` for every non-empty panel set; operations on invalid
//!    indices are no-ops, never clamps to the nearest edge.
//! 3. `next()` at the last panel and `previous()` at the first are hard
//!    stops: index and offset are left untouched (no wraparound).
//!
//! # Failure Modes
//!
//! - Recenter without an explicit active index updates nothing but the
//!   viewport: the offset is deliberately NOT re-derived against the new
//!   width. This matches the engine's long-standing observable behavior and
//!   is pinned by a regression test; hosts that want re-derivation pass the
//!   current index explicitly.

use coverflow_core::Size;

#[cfg(feature = "state-persistence")]
use serde::{Deserialize, Serialize};

use crate::style::base_width;

/// Canonical carousel state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "state-persistence", derive(Serialize, Deserialize))]
pub struct CarouselState {
    /// Index of the currently centered panel.
    pub active: usize,
    /// Shared pixel translation realizing the centered position.
    pub offset: f64,
}

impl CarouselState {
    /// Create state centered on the middle panel of a `len`-panel set.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            active: Self::center(len),
            offset: 0.0,
        }
    }

    /// The default center index for a `len`-panel set.
    #[inline]
    #[must_use]
    pub const fn center(len: usize) -> usize {
        len / 2
    }

    /// Jump straight to `index`.
    ///
    /// A no-op returning `false` when `index` is out of `[0, len-1]`.
    /// Otherwise sets the active index and re-derives the offset against the
    /// given viewport, returning whether anything changed.
    pub fn jump_to(
        &mut self,
        index: usize,
        viewport: Size,
        side_count: usize,
        len: usize,
    ) -> bool {
        if index >= len {
            return false;
        }
        let slot = base_width(viewport.width, side_count);
        let distance = Self::center(len) as f64 - index as f64;
        let offset = slot * distance;
        if self.active == index && self.offset == offset {
            return false;
        }
        #[cfg(feature = "tracing")]
        let old = self.active;
        self.active = index;
        self.offset = offset;
        #[cfg(feature = "tracing")]
        Self::log_switch("jump", old, self.active);
        true
    }

    /// Move one panel toward higher indices.
    ///
    /// Hard stop at the last panel: no state changes, no clamping.
    pub fn next(&mut self, viewport: Size, side_count: usize, len: usize) -> bool {
        if self.active + 1 >= len {
            return false;
        }
        self.jump_to(self.active + 1, viewport, side_count, len)
    }

    /// Move one panel toward lower indices.
    ///
    /// Hard stop at the first panel.
    pub fn previous(&mut self, viewport: Size, side_count: usize, len: usize) -> bool {
        if self.active == 0 {
            return false;
        }
        self.jump_to(self.active - 1, viewport, side_count, len)
    }

    /// Reconcile after a measure: jump to `explicit_active` when it is valid
    /// for the (possibly new) panel count.
    ///
    /// Without a valid explicit index this leaves both fields untouched (see
    /// the module-level failure-modes note on offset staleness).
    pub fn recenter(
        &mut self,
        viewport: Size,
        side_count: usize,
        explicit_active: Option<usize>,
        len: usize,
    ) -> bool {
        match explicit_active {
            Some(index) if index < len => self.jump_to(index, viewport, side_count, len),
            _ => false,
        }
    }

    #[cfg(feature = "tracing")]
    fn log_switch(reason: &str, from: usize, to: usize) {
        tracing::debug!(message = "carousel.switch", reason, from, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VIEW: Size = Size::new(500.0, 300.0);

    // --- Construction tests ---

    #[test]
    fn new_state_centers_on_middle_panel() {
        assert_eq!(CarouselState::new(5).active, 2);
        assert_eq!(CarouselState::new(4).active, 2);
        assert_eq!(CarouselState::new(1).active, 0);
        assert_eq!(CarouselState::new(0).active, 0);
    }

    #[test]
    fn new_state_has_zero_offset() {
        assert_eq!(CarouselState::new(5).offset, 0.0);
    }

    // --- Jump tests ---

    #[test]
    fn jump_to_sets_index_and_offset() {
        // N=5, side_count=2, width=500 → base width 100.
        let mut st = CarouselState::new(5);
        assert!(st.jump_to(0, VIEW, 2, 5));
        assert_eq!(st.active, 0);
        assert_eq!(st.offset, 200.0); // 100 × (2 − 0)
    }

    #[test]
    fn jump_to_out_of_range_is_silent_no_op() {
        let mut st = CarouselState::new(5);
        let before = st;
        assert!(!st.jump_to(5, VIEW, 2, 5));
        assert!(!st.jump_to(100, VIEW, 2, 5));
        assert_eq!(st, before);
    }

    #[test]
    fn jump_to_same_index_same_offset_reports_unchanged() {
        let mut st = CarouselState::new(5);
        st.jump_to(2, VIEW, 2, 5);
        assert!(!st.jump_to(2, VIEW, 2, 5));
    }

    #[test]
    fn jump_to_same_index_new_width_rederives_offset() {
        let mut st = CarouselState::new(5);
        st.jump_to(1, VIEW, 2, 5);
        assert_eq!(st.offset, 100.0);
        // Same index, doubled viewport: offset follows the new base width.
        assert!(st.jump_to(1, Size::new(1000.0, 300.0), 2, 5));
        assert_eq!(st.offset, 200.0);
    }

    // --- Next/previous tests ---

    #[test]
    fn next_and_previous_walk_the_offset_formula() {
        let mut st = CarouselState::new(5);
        assert_eq!(st.active, 2);
        assert_eq!(st.offset, 0.0);

        assert!(st.next(VIEW, 2, 5));
        assert_eq!(st.active, 3);
        assert_eq!(st.offset, -100.0); // 100 × (2 − 3)

        assert!(st.previous(VIEW, 2, 5));
        assert!(st.previous(VIEW, 2, 5));
        assert_eq!(st.active, 1);
        assert_eq!(st.offset, 100.0); // 100 × (2 − 1)
    }

    #[test]
    fn next_at_last_panel_is_hard_stop() {
        let mut st = CarouselState::new(5);
        st.jump_to(4, VIEW, 2, 5);
        let before = st;
        assert!(!st.next(VIEW, 2, 5));
        assert_eq!(st, before);
    }

    #[test]
    fn previous_at_first_panel_is_hard_stop() {
        let mut st = CarouselState::new(5);
        st.jump_to(0, VIEW, 2, 5);
        let before = st;
        assert!(!st.previous(VIEW, 2, 5));
        assert_eq!(st, before);
    }

    #[test]
    fn next_on_empty_set_is_no_op() {
        let mut st = CarouselState::new(0);
        assert!(!st.next(VIEW, 2, 0));
        assert!(!st.previous(VIEW, 2, 0));
    }

    #[test]
    fn single_panel_never_moves() {
        let mut st = CarouselState::new(1);
        assert!(!st.next(VIEW, 2, 1));
        assert!(!st.previous(VIEW, 2, 1));
        assert_eq!(st.active, 0);
    }

    // --- Recenter tests ---

    #[test]
    fn recenter_with_valid_explicit_active_jumps() {
        let mut st = CarouselState::new(5);
        assert!(st.recenter(VIEW, 2, Some(4), 5));
        assert_eq!(st.active, 4);
        assert_eq!(st.offset, -200.0);
    }

    #[test]
    fn recenter_with_invalid_explicit_active_is_silent() {
        let mut st = CarouselState::new(5);
        let before = st;
        assert!(!st.recenter(VIEW, 2, Some(9), 5));
        assert_eq!(st, before);
    }

    #[test]
    fn recenter_without_explicit_active_keeps_offset() {
        let mut st = CarouselState::new(5);
        st.jump_to(1, VIEW, 2, 5);
        let before = st;
        // New width, no explicit index: offset intentionally stays stale.
        assert!(!st.recenter(Size::new(1000.0, 300.0), 2, None, 5));
        assert_eq!(st, before);
    }

    // --- Offset invariant ---

    proptest! {
        #[test]
        fn prop_active_stays_in_bounds(
            len in 1usize..12,
            ops in prop::collection::vec(0u8..3, 0..64),
            targets in prop::collection::vec(0usize..16, 0..64),
        ) {
            let mut st = CarouselState::new(len);
            for (op, target) in ops.iter().zip(targets.iter()) {
                match *op {
                    0 => {
                        st.next(VIEW, 2, len);
                    }
                    1 => {
                        st.previous(VIEW, 2, len);
                    }
                    _ => {
                        st.jump_to(*target, VIEW, 2, len);
                    }
                }
                prop_assert!(st.active < len);
            }
        }

        #[test]
        fn prop_offset_matches_formula_after_jump(
            len in 1usize..12,
            index in 0usize..12,
            side_count in 0usize..5,
            width in 1.0f64..2000.0,
        ) {
            let mut st = CarouselState::new(len);
            let view = Size::new(width, 300.0);
            if st.jump_to(index, view, side_count, len) || st.active == index {
                let slot = width / (2 * side_count + 1) as f64;
                let expected = slot * (CarouselState::center(len) as f64 - index as f64);
                prop_assert!((st.offset - expected).abs() < 1e-9);
            }
        }
    }

    // --- Persistence ---

    #[cfg(feature = "state-persistence")]
    #[test]
    fn state_round_trips_through_serde() {
        let mut st = CarouselState::new(5);
        st.jump_to(3, VIEW, 2, 5);
        let json = serde_json::to_string(&st).expect("serialize");
        let back: CarouselState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(st, back);
    }
}
