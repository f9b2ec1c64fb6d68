#![forbid(unsafe_code)]

//! The engine facade.
//!
//! [`Coverflow`] ties the pieces together: it owns the canonical
//! [`CarouselState`], the viewport, the per-instance [`TouchTracker`], the
//! pointer-event lock, and the host subscription registry. Input handlers
//! validate, then mutate through the controller, then report an
//! [`EventOutcome`] the host uses to decide on repaint and native-event
//! suppression. Geometry is derived on demand via [`panel_styles`] /
//! [`render_plan`] and never cached.
//!
//! [`panel_styles`]: Coverflow::panel_styles
//! [`render_plan`]: Coverflow::render_plan
//!
//! # Ordering
//!
//! Everything is synchronous and single-threaded: within one input event,
//! state mutation fully completes and the host observes exactly one outcome
//! to repaint from. Operations either no-op or fully commit; nothing is
//! cancellable mid-flight.
//!
//! # Reentrancy
//!
//! The pointer-event lock is one unit of state per engine instance. A
//! dispatching panel click engages it; the host's transition-settled signal
//! releases it. The host fires that signal once per panel element per
//! transition kind, so release is idempotent and stray signals are ignored.

use coverflow_core::{
    ConfigError, Event, KeyEvent, Options, Panel, PanelAction, Size, WheelEvent,
};

use crate::controller::CarouselState;
use crate::gesture::{StepDirection, TouchTracker, key_step, wheel_steps};
use crate::style::{PanelStyle, base_width, compute_panel_style};
use crate::subscribe::{Disposer, SubscriptionKind, Subscriptions, SUBSCRIPTION_REQUESTS};

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// What the host should do after feeding the engine an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// State changed; repaint from fresh descriptors.
    pub changed: bool,
    /// The engine consumed the event; suppress the native default (e.g.
    /// native scroll for wheel events).
    pub consumed: bool,
}

impl EventOutcome {
    /// Nothing happened.
    pub const IGNORED: Self = Self {
        changed: false,
        consumed: false,
    };

    /// Consumed without a state change.
    pub const CONSUMED: Self = Self {
        changed: false,
        consumed: true,
    };

    /// Consumed with a state change.
    pub const CHANGED: Self = Self {
        changed: true,
        consumed: true,
    };
}

/// Result of a panel click.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickDispatch {
    /// The active panel carried a link; the host performs the navigation.
    Navigate(String),
    /// The active panel's callback ran.
    Invoked,
    /// A non-active panel was clicked; the carousel jumped to it.
    Jumped(usize),
    /// Nothing dispatched (not clickable, pointer locked, out of range, or
    /// the active panel has no action).
    Ignored,
}

/// One panel entry of a [`RenderPlan`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPlan {
    /// Panel index.
    pub index: usize,
    /// Derived style descriptor.
    pub style: PanelStyle,
    /// Label text, present only when labels are enabled and the panel has
    /// one.
    pub label: Option<String>,
    /// Whether this is the centered panel.
    pub active: bool,
}

/// Everything the host needs to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Container size the styles were derived against.
    pub container: Size,
    /// Whether prev/next navigation controls should be exposed.
    pub navigation: bool,
    /// Ordered panel entries.
    pub panels: Vec<PanelPlan>,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// A headless coverflow engine instance.
pub struct Coverflow {
    options: Options,
    side_count: usize,
    panels: Vec<Panel>,
    viewport: Size,
    state: CarouselState,
    touch: TouchTracker,
    pointer_locked: bool,
    subscriptions: Subscriptions,
    on_active_change: Option<Box<dyn FnMut(usize, usize)>>,
}

impl std::fmt::Debug for Coverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coverflow")
            .field("side_count", &self.side_count)
            .field("panels", &self.panels.len())
            .field("viewport", &self.viewport)
            .field("state", &self.state)
            .field("pointer_locked", &self.pointer_locked)
            .finish()
    }
}

impl Coverflow {
    /// Construct an engine from options and a panel set.
    ///
    /// Fails only on a missing `side_count`. If the options carry an
    /// explicit active index valid for the panel set, the engine mounts
    /// centered there; otherwise on the middle panel.
    pub fn new(options: Options, panels: Vec<Panel>) -> Result<Self, ConfigError> {
        let side_count = options.validate()?;
        let len = panels.len();
        let viewport = options.container.unwrap_or(Size::ZERO);
        let mut state = CarouselState::new(len);
        state.recenter(viewport, side_count, options.active, len);
        Ok(Self {
            options,
            side_count,
            panels,
            viewport,
            state,
            touch: TouchTracker::default(),
            pointer_locked: false,
            subscriptions: Subscriptions::new(),
            on_active_change: None,
        })
    }

    /// Register the active-change observer.
    ///
    /// Invoked synchronously with `(new, old)` just before a change of the
    /// active index is committed.
    pub fn on_active_change(&mut self, callback: impl FnMut(usize, usize) + 'static) {
        self.on_active_change = Some(Box::new(callback));
    }

    // --- Read accessors ---

    /// The currently centered panel index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.state.active
    }

    /// The shared pixel translation.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    /// The viewport the engine is laying out against.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Number of panels.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Whether pointer-event handling is currently disabled on the stage.
    #[must_use]
    pub fn is_pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    /// A copy of the canonical state (for persistence or inspection).
    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    // --- Geometry ---

    /// Derive the style descriptor for every panel, in order.
    #[must_use]
    pub fn panel_styles(&self) -> Vec<PanelStyle> {
        let len = self.panels.len();
        (0..len)
            .map(|i| compute_panel_style(i, &self.state, self.viewport, self.side_count, len))
            .collect()
    }

    /// Build the full frame description: styles, labels, navigation flag.
    #[must_use]
    pub fn render_plan(&self) -> RenderPlan {
        let len = self.panels.len();
        let panels = self
            .panels
            .iter()
            .enumerate()
            .map(|(i, panel)| PanelPlan {
                index: i,
                style: compute_panel_style(i, &self.state, self.viewport, self.side_count, len),
                label: if self.options.show_labels {
                    panel.label_text().map(str::to_owned)
                } else {
                    None
                },
                active: i == self.state.active,
            })
            .collect();
        RenderPlan {
            container: self.viewport,
            navigation: self.options.navigation,
            panels,
        }
    }

    // --- Programmatic operations ---

    /// Step to the next panel. Hard stop at the end.
    pub fn next(&mut self) -> bool {
        self.apply_step(StepDirection::Next)
    }

    /// Step to the previous panel. Hard stop at the start.
    pub fn previous(&mut self) -> bool {
        self.apply_step(StepDirection::Previous)
    }

    /// Jump straight to `index`. Silent no-op when out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.commit(|st, view, side, len| st.jump_to(index, view, side, len))
    }

    // --- Input handlers ---

    /// Dispatch a canonical event to the matching handler.
    pub fn handle_event(&mut self, event: &Event) -> EventOutcome {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Wheel(WheelEvent { delta }) => self.handle_wheel(*delta),
            Event::TouchStart(point) => self.handle_touch_start(point.x),
            Event::TouchMove(point) => self.handle_touch_move(point.x),
            Event::Resize { width, height } => self.handle_resize(*width, *height),
            Event::PanelClick { index } => {
                let dispatch = self.handle_panel_click(*index);
                EventOutcome {
                    changed: matches!(dispatch, ClickDispatch::Jumped(_)),
                    consumed: !matches!(dispatch, ClickDispatch::Ignored),
                }
            }
            Event::TransitionSettled { index } => self.handle_transition_settled(*index),
        }
    }

    /// Adopt a new container measurement and re-run the maybe-jump
    /// procedure.
    pub fn handle_resize(&mut self, width: f64, height: f64) -> EventOutcome {
        let changed = self.measure_and_maybe_jump(Size::new(width, height));
        EventOutcome {
            changed,
            consumed: false,
        }
    }

    /// Interpret a wheel delta as a burst of steps.
    ///
    /// A consumed outcome tells the host to suppress native scrolling.
    pub fn handle_wheel(&mut self, delta: f64) -> EventOutcome {
        if !self.options.enable_wheel {
            return EventOutcome::IGNORED;
        }
        let Some((direction, count)) = wheel_steps(delta) else {
            // Zero/non-finite deltas still belong to the carousel surface.
            return EventOutcome::CONSUMED;
        };
        let mut changed = false;
        for _ in 0..count {
            changed |= self.apply_step(direction);
        }
        EventOutcome {
            changed,
            consumed: true,
        }
    }

    /// Record the start of a touch drag.
    pub fn handle_touch_start(&mut self, x: f64) -> EventOutcome {
        self.touch.begin(x, self.state.offset);
        EventOutcome::IGNORED
    }

    /// Interpret a touch move, firing at most one step.
    pub fn handle_touch_move(&mut self, x: f64) -> EventOutcome {
        if !self.touch.is_armed() {
            return EventOutcome::IGNORED;
        }
        let threshold = base_width(self.viewport.width, self.side_count);
        let changed = match self.touch.interpret_move(x, threshold) {
            Some(direction) => self.apply_step(direction),
            None => false,
        };
        EventOutcome {
            changed,
            consumed: true,
        }
    }

    /// Interpret a keypress.
    ///
    /// The arrow mapping is inverted by compatibility contract: `Right`
    /// steps to the previous panel, `Left` to the next.
    pub fn handle_key(&mut self, key: KeyEvent) -> EventOutcome {
        let Some(direction) = key_step(key.code) else {
            return EventOutcome::IGNORED;
        };
        let changed = self.apply_step(direction);
        EventOutcome {
            changed,
            consumed: true,
        }
    }

    /// Dispatch a panel click.
    ///
    /// Clicking the active panel invokes its action and engages the
    /// pointer-event lock until the host signals the transition settled;
    /// clicking any other panel jumps to it (same lock). Gated entirely by
    /// the `clickable` option; clicks while locked are ignored.
    pub fn handle_panel_click(&mut self, index: usize) -> ClickDispatch {
        if !self.options.clickable || self.pointer_locked || index >= self.panels.len() {
            return ClickDispatch::Ignored;
        }
        if index == self.state.active {
            let action = match self.panels[index].activation() {
                Some(PanelAction::Link(url)) => ClickDispatch::Navigate(url.clone()),
                Some(PanelAction::Invoke(callback)) => {
                    let callback = std::sync::Arc::clone(callback);
                    callback();
                    ClickDispatch::Invoked
                }
                None => return ClickDispatch::Ignored,
            };
            self.pointer_locked = true;
            action
        } else {
            self.pointer_locked = true;
            let changed = self.commit(|st, view, side, len| st.jump_to(index, view, side, len));
            if changed {
                ClickDispatch::Jumped(index)
            } else {
                self.pointer_locked = false;
                ClickDispatch::Ignored
            }
        }
    }

    /// Receive a transition-settled signal from the render host.
    ///
    /// Releases the pointer-event lock. The host fires one signal per panel
    /// element, so redundant signals for the same logical transition are
    /// expected and harmless; a signal with no lock in flight is ignored.
    pub fn handle_transition_settled(&mut self, index: usize) -> EventOutcome {
        if self.pointer_locked {
            self.pointer_locked = false;
            return EventOutcome::CHANGED;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "carousel.settle_ignored", index);
        #[cfg(not(feature = "tracing"))]
        let _ = index;
        EventOutcome::IGNORED
    }

    // --- Reconcile ---

    /// Adopt a new configuration and panel set.
    ///
    /// Diff contract: a change in the externally supplied `active` index or
    /// in the panel count re-runs the measure-and-maybe-jump procedure; all
    /// other fields (`side_count`, `navigation`, `show_labels`,
    /// `enable_wheel`, `clickable`, `container`) are adopted silently and
    /// take effect on the next recompute.
    pub fn reconcile(
        &mut self,
        options: Options,
        panels: Vec<Panel>,
    ) -> Result<bool, ConfigError> {
        let side_count = options.validate()?;
        let rejump = options.active != self.options.active || panels.len() != self.panels.len();
        self.side_count = side_count;
        self.options = options;
        self.panels = panels;
        if rejump {
            Ok(self.measure_and_maybe_jump(self.viewport))
        } else {
            Ok(false)
        }
    }

    // --- Subscriptions ---

    /// The notification sources this engine needs bound on mount.
    #[must_use]
    pub fn subscription_requests(&self) -> &'static [SubscriptionKind] {
        &SUBSCRIPTION_REQUESTS
    }

    /// Store the disposer for one bound notification source.
    pub fn bind_subscription(&mut self, kind: SubscriptionKind, disposer: Disposer) {
        self.subscriptions.bind(kind, disposer);
    }

    /// Release every outstanding host binding.
    ///
    /// Also runs on drop; calling it early is idempotent.
    pub fn teardown(&mut self) {
        self.subscriptions.release_all();
    }

    // --- Internals ---

    /// Run one mutation against a staged copy of the state, notify the
    /// active-change observer just before committing, then commit.
    fn commit<F>(&mut self, mutate: F) -> bool
    where
        F: FnOnce(&mut CarouselState, Size, usize, usize) -> bool,
    {
        let old = self.state.active;
        let mut staged = self.state;
        let changed = mutate(&mut staged, self.viewport, self.side_count, self.panels.len());
        if changed {
            if staged.active != old
                && let Some(callback) = self.on_active_change.as_mut()
            {
                callback(staged.active, old);
            }
            self.state = staged;
        }
        changed
    }

    fn apply_step(&mut self, direction: StepDirection) -> bool {
        let changed = self.commit(|st, view, side, len| match direction {
            StepDirection::Next => st.next(view, side, len),
            StepDirection::Previous => st.previous(view, side, len),
        });
        if changed {
            // Keep the drag cache coherent with the freshly committed offset.
            self.touch.commit_offset(self.state.offset);
        }
        changed
    }

    fn measure_and_maybe_jump(&mut self, size: Size) -> bool {
        let viewport_changed = self.viewport != size;
        self.viewport = size;
        let explicit = self.options.active;
        let jumped = self.commit(|st, view, side, len| st.recenter(view, side, explicit, len));
        viewport_changed || jumped
    }
}
