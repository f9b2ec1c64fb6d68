#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the standard event types the render host translates
//! its native input into before handing them to the engine. All events derive
//! `Clone` and `PartialEq` for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Pointer coordinates are client-space pixels (floats), matching what
//!   browser-like hosts report for touch and wheel input.
//! - `Modifiers` use bitflags for easy combination; the engine itself only
//!   inspects key codes, but hosts forward modifiers so downstream consumers
//!   can layer their own bindings on top.
//! - Wheel deltas follow the pre-scaled convention of the wire format the
//!   engine was written against: one notch is ±120 units.

use bitflags::bitflags;

/// Canonical input event.
///
/// Everything the engine can react to arrives as one of these variants. The
/// engine's `handle_event` dispatches them to the matching specific handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A wheel event (vertical scroll).
    Wheel(WheelEvent),

    /// A touch (or captured pointer) came down on the stage.
    TouchStart(TouchPoint),

    /// A touch moved while down.
    TouchMove(TouchPoint),

    /// The container was resized.
    Resize {
        /// New container width in pixels.
        width: f64,
        /// New container height in pixels.
        height: f64,
    },

    /// A panel was clicked.
    PanelClick {
        /// Index of the clicked panel.
        index: usize,
    },

    /// The host observed a panel's visual transition finishing.
    TransitionSettled {
        /// Index of the panel whose transition settled.
        index: usize,
    },
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Key codes for keyboard events.
///
/// Deliberately small: the engine reacts to the arrow keys and ignores the
/// rest, but hosts can forward anything representable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,
}

bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE = 0;
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Control key.
        const CTRL = 1 << 1;
        /// Alt/Option key.
        const ALT = 1 << 2;
        /// Super/Meta/Cmd key.
        const SUPER = 1 << 3;
    }
}

/// A wheel event carrying a vertical delta.
///
/// The delta is pre-scaled: ±120 per notch, with large trackpad flicks
/// producing proportionally larger magnitudes. Negative values travel toward
/// higher panel indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Vertical scroll delta in step units.
    pub delta: f64,
}

impl WheelEvent {
    /// Create a wheel event from a vertical delta.
    #[must_use]
    pub const fn new(delta: f64) -> Self {
        Self { delta }
    }
}

/// A touch position on the stage.
///
/// Only the horizontal coordinate participates in gesture math; `y` is
/// carried through for hosts that want it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    /// Client-space x coordinate in pixels.
    pub x: f64,
    /// Client-space y coordinate in pixels.
    pub y: f64,
}

impl TouchPoint {
    /// Create a touch point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for TouchPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
