#![forbid(unsafe_code)]

//! Core: input events, geometry, panels, and configuration for the coverflow
//! engine.
//!
//! # Role in the workspace
//! `coverflow-core` is the vocabulary layer. It owns the normalized event
//! types a render host feeds into the engine, the geometric primitives the
//! engine measures with, the panel descriptors it carries, and the
//! construction-time options it validates.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (keys, wheel, touch, resize, clicks,
//!   transition-settled signals).
//! - **Size**: the viewport primitive (float pixel dimensions).
//! - **Panel**: opaque panel content plus optional label and action.
//! - **Options**: recognized construction options with defaults and
//!   validation of the one required field.
//!
//! # How it fits in the system
//! The engine (`coverflow-engine`) consumes these types and derives per-panel
//! style descriptors from them. Rendering stays entirely on the host side, so
//! this crate is the clean bridge between host input and the deterministic
//! positioning engine.

pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod panel;

pub use config::Options;
pub use error::ConfigError;
pub use event::{Event, KeyCode, KeyEvent, Modifiers, TouchPoint, WheelEvent};
pub use geometry::Size;
pub use panel::{Panel, PanelAction};
