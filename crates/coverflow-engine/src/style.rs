#![forbid(unsafe_code)]

//! Per-panel style computation.
//!
//! [`compute_panel_style`] maps `{panel index, carousel state, viewport,
//! side count, panel count}` to a [`PanelStyle`] descriptor. It is the
//! geometry half of the engine: everything a render host needs to paint one
//! panel — width, translation, rotation, scale, stacking rank, opacity — is
//! derived here and nowhere else.
//!
//! # Invariants
//!
//! 1. Pure and deterministic: identical inputs always produce identical
//!    descriptors. No hidden state, no side effects.
//! 2. The opacity ladder is coarse by contract: exactly four discrete tiers
//!    past center, no interpolation.
//! 3. Stacking rank is monotonic with distance from the active panel.
//! 4. All panels share one translation baseline; left/right divergence is
//!    expressed only through rotation and stacking.
//!
//! # Failure Modes
//!
//! - Zero panel count: callers never ask for a style then; the base-width
//!   math still yields finite values for any `side_count`.
//! - Unmeasured viewport (width 0): all widths and translations degenerate
//!   to 0, which paints nothing visible but never faults.

use coverflow_core::Size;

use crate::controller::CarouselState;

/// Vertical-axis rotation applied to receding panels, in degrees.
pub const SIDE_ROTATION_DEG: f64 = 40.0;

/// Scale factor applied to the centered panel.
pub const ACTIVE_SCALE: f64 = 1.2;

/// Stacking base: a panel's z rank is this minus its depth.
const Z_BASE: i64 = 10;

/// Derived style descriptor for one panel.
///
/// Recomputed on every state change and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelStyle {
    /// Panel width in pixels (`viewport.width / (2 × side_count + 1)`).
    pub width: f64,
    /// Shared horizontal translation in pixels, even-length correction
    /// already folded in.
    pub translate_x: f64,
    /// Rotation around the vertical axis in degrees. Positive leans left of
    /// center, negative right, zero for the active panel.
    pub rotate_y: f64,
    /// Scale factor (1.2 for the active panel, 1.0 otherwise).
    pub scale: f64,
    /// Stacking rank; higher draws on top.
    pub z_index: i64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl PanelStyle {
    /// Render the transform as a CSS-like declarative string.
    ///
    /// The active panel yields `translateX(<x>px) scale(1.2)`; side panels
    /// yield `translateX(<x>px) rotateY(±40deg)`. Easing and timing stay
    /// with the render host.
    #[must_use]
    pub fn transform_css(&self) -> String {
        let mut out = format!("translateX({}px)", self.translate_x);
        if self.scale != 1.0 {
            out.push_str(&format!(" scale({})", self.scale));
        }
        if self.rotate_y != 0.0 {
            out.push_str(&format!(" rotateY({}deg)", self.rotate_y));
        }
        out
    }
}

/// Width of one panel slot for a given viewport and side count.
#[inline]
#[must_use]
pub fn base_width(viewport_width: f64, side_count: usize) -> f64 {
    viewport_width / (2 * side_count + 1) as f64
}

/// Horizontal centering correction for even-length panel sets.
///
/// Even-length sets have no true middle panel, so the whole row is nudged
/// left by a tenth of the viewport.
#[inline]
#[must_use]
pub fn centering_correction(len: usize, viewport_width: f64) -> f64 {
    if len > 0 && len % 2 == 0 {
        -viewport_width / 10.0
    } else {
        0.0
    }
}

/// Compute the style descriptor for the panel at `index`.
#[must_use]
pub fn compute_panel_style(
    index: usize,
    state: &CarouselState,
    viewport: Size,
    side_count: usize,
    len: usize,
) -> PanelStyle {
    let width = base_width(viewport.width, side_count);
    let translate_x = state.offset + centering_correction(len, viewport.width);

    let distance = (state.active as i64 - index as i64).abs();
    let depth = side_count as i64 - distance;

    // Coarse ladder; the centered check is primary (depth can coincide at
    // symmetric positions).
    let mut opacity = match depth {
        1 => 0.95,
        2 => 0.92,
        3 => 0.90,
        _ => 0.5,
    };
    if index == state.active {
        opacity = 1.0;
    }

    let (rotate_y, scale) = if index == state.active {
        (0.0, ACTIVE_SCALE)
    } else if index < state.active {
        (SIDE_ROTATION_DEG, 1.0)
    } else {
        (-SIDE_ROTATION_DEG, 1.0)
    };

    PanelStyle {
        width,
        translate_x,
        rotate_y,
        scale,
        z_index: Z_BASE - depth,
        opacity,
    }
}
