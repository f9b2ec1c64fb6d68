#![forbid(unsafe_code)]

//! Construction-time options.
//!
//! [`Options`] mirrors the recognized configuration surface of the engine.
//! All fields carry host-friendly defaults except `side_count`, which has no
//! sensible default and is validated at engine construction.
//!
//! # Invariants
//!
//! 1. `validate()` succeeds iff `side_count` is present.
//! 2. Defaults match the compatibility contract: navigation off, labels on,
//!    wheel on, clickable on.
//! 3. `active` and `container` are advisory until the engine adopts them on
//!    mount or reconcile; an out-of-range `active` is ignored, never an error.

use crate::error::ConfigError;
use crate::geometry::Size;

/// Recognized construction options.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Number of panels visible on each side of center. Required.
    pub side_count: Option<usize>,

    /// Whether prev/next navigation controls are exposed in the render plan.
    pub navigation: bool,

    /// Whether a text label is rendered under the derived style set.
    pub show_labels: bool,

    /// Whether wheel scrolling moves the carousel.
    pub enable_wheel: bool,

    /// Whether panel clicks dispatch (jump or activate).
    pub clickable: bool,

    /// Externally controlled active index, authoritative on mount/reconcile.
    pub active: Option<usize>,

    /// Explicit container size; when absent the host measures and supplies
    /// one via resize.
    pub container: Option<Size>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            side_count: None,
            navigation: false,
            show_labels: true,
            enable_wheel: true,
            clickable: true,
            active: None,
            container: None,
        }
    }
}

impl Options {
    /// Create options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of panels visible on each side of center.
    #[must_use]
    pub fn side_count(mut self, count: usize) -> Self {
        self.side_count = Some(count);
        self
    }

    /// Set whether navigation controls are exposed.
    #[must_use]
    pub fn navigation(mut self, enabled: bool) -> Self {
        self.navigation = enabled;
        self
    }

    /// Set whether labels are rendered.
    #[must_use]
    pub fn show_labels(mut self, enabled: bool) -> Self {
        self.show_labels = enabled;
        self
    }

    /// Set whether wheel scrolling is handled.
    #[must_use]
    pub fn enable_wheel(mut self, enabled: bool) -> Self {
        self.enable_wheel = enabled;
        self
    }

    /// Set whether panel clicks dispatch.
    #[must_use]
    pub fn clickable(mut self, enabled: bool) -> Self {
        self.clickable = enabled;
        self
    }

    /// Set the externally controlled active index.
    #[must_use]
    pub fn active(mut self, index: usize) -> Self {
        self.active = Some(index);
        self
    }

    /// Set an explicit container size.
    #[must_use]
    pub fn container(mut self, size: Size) -> Self {
        self.container = Some(size);
        self
    }

    /// Validate required fields, returning the side count.
    ///
    /// The only caller-bug condition in the engine: everything else is
    /// tolerated at runtime, but a missing `side_count` fails fast here.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        self.side_count.ok_or(ConfigError::MissingSideCount)
    }
}
