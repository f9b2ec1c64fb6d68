#![forbid(unsafe_code)]

//! Panel descriptors.
//!
//! A [`Panel`] is one item in the ordered carousel sequence. Its visual
//! content is opaque to the engine — the host keys panels by index and paints
//! them itself. The engine only carries what it needs for interaction: an
//! optional text label (rendered under the active style set when labels are
//! enabled) and an optional activation action.

use std::fmt;
use std::sync::Arc;

/// What happens when the active panel is activated.
#[derive(Clone)]
pub enum PanelAction {
    /// A navigable link. The engine never performs navigation itself; the
    /// click dispatch hands the URL back to the host.
    Link(String),

    /// An invocable callback, run synchronously inside the click handler.
    Invoke(Arc<dyn Fn() + Send + Sync>),
}

impl fmt::Debug for PanelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link(url) => f.debug_tuple("Link").field(url).finish(),
            Self::Invoke(_) => f.debug_tuple("Invoke").field(&"<callback>").finish(),
        }
    }
}

/// A single panel entry.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    label: Option<String>,
    action: Option<PanelAction>,
}

impl Panel {
    /// Create a new panel with no label and no action.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text label shown under the panel when labels are enabled.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the activation action.
    #[must_use]
    pub fn action(mut self, action: PanelAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Shorthand for a link action.
    #[must_use]
    pub fn link(self, url: impl Into<String>) -> Self {
        self.action(PanelAction::Link(url.into()))
    }

    /// Shorthand for a callback action.
    #[must_use]
    pub fn on_activate(self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.action(PanelAction::Invoke(Arc::new(callback)))
    }

    /// Get the panel label, if any.
    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the activation action, if any.
    #[must_use]
    pub fn activation(&self) -> Option<&PanelAction> {
        self.action.as_ref()
    }
}
