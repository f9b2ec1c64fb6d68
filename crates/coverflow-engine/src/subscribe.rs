#![forbid(unsafe_code)]

//! Host subscription contract.
//!
//! The engine never touches a windowing API. Instead it declares what it
//! needs notifications for — container resize, keypresses, per-panel
//! transition-end — and the render host binds those to its own event sources
//! on mount. Each binding hands back a [`Disposer`]; the engine stores them
//! and releases every one on teardown, so a page embedding many transient
//! engine instances never leaks handlers.
//!
//! # Invariants
//!
//! 1. A disposer runs its release closure at most once, whether disposed
//!    explicitly or by drop.
//! 2. Dropping the engine (or its [`Subscriptions`] registry) releases every
//!    outstanding binding.
//! 3. Binding the same kind twice replaces the previous binding, releasing
//!    it first.

use std::fmt;

/// Notification sources the engine needs from its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionKind {
    /// Container (or window) resize.
    Resize,
    /// Document-level keypresses.
    Keypress,
    /// Transition-end, fired once per panel element per transition kind.
    TransitionEnd,
}

/// All subscription kinds the engine requests on mount.
pub const SUBSCRIPTION_REQUESTS: [SubscriptionKind; 3] = [
    SubscriptionKind::Resize,
    SubscriptionKind::Keypress,
    SubscriptionKind::TransitionEnd,
];

/// A scoped handle releasing one host binding.
pub struct Disposer {
    release: Option<Box<dyn FnOnce()>>,
}

impl Disposer {
    /// Wrap a release closure supplied by the host.
    #[must_use]
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A disposer that releases nothing (useful for hosts with global
    /// delegation that needs no per-binding cleanup).
    #[must_use]
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Release the binding now.
    pub fn dispose(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Disposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposer")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// Registry of outstanding host bindings, owned by the engine.
#[derive(Debug, Default)]
pub struct Subscriptions {
    bound: Vec<(SubscriptionKind, Disposer)>,
}

impl Subscriptions {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a binding, replacing (and releasing) any previous binding of
    /// the same kind.
    pub fn bind(&mut self, kind: SubscriptionKind, disposer: Disposer) {
        if let Some(pos) = self.bound.iter().position(|(k, _)| *k == kind) {
            let (_, previous) = self.bound.remove(pos);
            previous.dispose();
        }
        self.bound.push((kind, disposer));
    }

    /// Whether a binding of `kind` is outstanding.
    #[must_use]
    pub fn is_bound(&self, kind: SubscriptionKind) -> bool {
        self.bound.iter().any(|(k, _)| *k == kind)
    }

    /// Release every outstanding binding.
    pub fn release_all(&mut self) {
        for (_, disposer) in self.bound.drain(..) {
            disposer.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_disposer(counter: &Rc<Cell<usize>>) -> Disposer {
        let counter = Rc::clone(counter);
        Disposer::new(move || counter.set(counter.get() + 1))
    }

    #[test]
    fn dispose_runs_release_once() {
        let count = Rc::new(Cell::new(0));
        let d = counting_disposer(&count);
        d.dispose();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn drop_also_releases() {
        let count = Rc::new(Cell::new(0));
        {
            let _d = counting_disposer(&count);
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn noop_disposer_is_silent() {
        Disposer::noop().dispose();
    }

    #[test]
    fn release_all_drains_everything() {
        let count = Rc::new(Cell::new(0));
        let mut subs = Subscriptions::new();
        subs.bind(SubscriptionKind::Resize, counting_disposer(&count));
        subs.bind(SubscriptionKind::Keypress, counting_disposer(&count));
        subs.bind(SubscriptionKind::TransitionEnd, counting_disposer(&count));
        subs.release_all();
        assert_eq!(count.get(), 3);
        assert!(!subs.is_bound(SubscriptionKind::Resize));
    }

    #[test]
    fn rebinding_releases_previous_binding() {
        let count = Rc::new(Cell::new(0));
        let mut subs = Subscriptions::new();
        subs.bind(SubscriptionKind::Resize, counting_disposer(&count));
        subs.bind(SubscriptionKind::Resize, counting_disposer(&count));
        assert_eq!(count.get(), 1);
        subs.release_all();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn dropping_registry_releases_bindings() {
        let count = Rc::new(Cell::new(0));
        {
            let mut subs = Subscriptions::new();
            subs.bind(SubscriptionKind::Keypress, counting_disposer(&count));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn requests_cover_all_sources() {
        assert_eq!(SUBSCRIPTION_REQUESTS.len(), 3);
        assert!(SUBSCRIPTION_REQUESTS.contains(&SubscriptionKind::Resize));
        assert!(SUBSCRIPTION_REQUESTS.contains(&SubscriptionKind::Keypress));
        assert!(SUBSCRIPTION_REQUESTS.contains(&SubscriptionKind::TransitionEnd));
    }
}
