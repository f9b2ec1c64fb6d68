#![forbid(unsafe_code)]

//! Headless coverflow positioning and interaction-state engine.
//!
//! # Role in the workspace
//! `coverflow-engine` computes per-panel geometry (offset, depth, rotation,
//! opacity, stacking order) from one piece of canonical state — active index
//! plus continuous pixel offset — and reconciles that state across four
//! independent input channels: programmatic index changes, container resize,
//! wheel scroll, and touch drag.
//!
//! # Primary responsibilities
//! - **CarouselState**: the single source of truth, mutated only through
//!   controller operations with hard-stop boundary semantics.
//! - **compute_panel_style**: pure, deterministic per-panel geometry.
//! - **Gesture interpretation**: wheel, touch-drag, and keypress adapters
//!   that translate raw deltas into controller calls.
//! - **Coverflow**: the facade a render host drives — input handlers in,
//!   style descriptors out, plus the subscription/teardown contract.
//!
//! # How it fits in the system
//! The engine paints nothing and performs no I/O. A render host feeds it
//! normalized `coverflow-core` events and repaints from `panel_styles()` /
//! `render_plan()` whenever a handler reports a change; CSS-like transform
//! strings carry the visual transition to the host's animation machinery.

pub mod controller;
pub mod engine;
pub mod gesture;
pub mod style;
pub mod subscribe;

pub use controller::CarouselState;
pub use engine::{ClickDispatch, Coverflow, EventOutcome, PanelPlan, RenderPlan};
pub use gesture::{StepDirection, TouchTracker, WHEEL_STEP_UNIT, key_step, wheel_steps};
pub use style::{
    ACTIVE_SCALE, PanelStyle, SIDE_ROTATION_DEG, base_width, centering_correction,
    compute_panel_style,
};
pub use subscribe::{Disposer, SubscriptionKind, Subscriptions, SUBSCRIPTION_REQUESTS};
