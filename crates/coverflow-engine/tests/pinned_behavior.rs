#![forbid(unsafe_code)]

//! Regression tests pinning externally observed compatibility behavior.
//!
//! Two behaviors look like bugs from the outside and are kept on purpose;
//! these tests exist so nobody "fixes" them accidentally.

use coverflow_core::{KeyCode, KeyEvent, Options, Panel, Size};
use coverflow_engine::Coverflow;

fn panels(n: usize) -> Vec<Panel> {
    (0..n).map(|_| Panel::new()).collect()
}

/// A container resize with no externally supplied active index must NOT
/// re-derive the offset against the new width. Hosts that depend on the
/// offset staying put across bare resizes get exactly that; re-derivation
/// requires supplying the active index explicitly.
#[test]
fn resize_without_explicit_active_keeps_offset() {
    let mut cf = Coverflow::new(
        Options::new()
            .side_count(2)
            .container(Size::new(500.0, 300.0)),
        panels(5),
    )
    .expect("valid options");
    cf.jump_to(1);
    assert_eq!(cf.offset(), 100.0);

    let outcome = cf.handle_resize(1000.0, 300.0);
    assert!(outcome.changed); // viewport changed, repaint needed
    assert_eq!(cf.viewport(), Size::new(1000.0, 300.0));
    // The offset is still derived from the old 100px base width, not the
    // new 200px one.
    assert_eq!(cf.offset(), 100.0);
    assert_eq!(cf.active_index(), 1);
}

/// Supplying the active index explicitly opts into re-derivation.
#[test]
fn resize_with_explicit_active_rederives() {
    let mut cf = Coverflow::new(
        Options::new()
            .side_count(2)
            .container(Size::new(500.0, 300.0))
            .active(1),
        panels(5),
    )
    .expect("valid options");
    assert_eq!(cf.offset(), 100.0);

    cf.handle_resize(1000.0, 300.0);
    assert_eq!(cf.offset(), 200.0);
}

/// The arrow-key mapping is inverted relative to naive arrow semantics and
/// is part of the observed contract: Right steps backward, Left forward.
#[test]
fn arrow_mapping_stays_inverted() {
    let mut cf = Coverflow::new(
        Options::new()
            .side_count(2)
            .container(Size::new(500.0, 300.0)),
        panels(5),
    )
    .expect("valid options");
    assert_eq!(cf.active_index(), 2);

    cf.handle_key(KeyEvent::new(KeyCode::Right));
    assert_eq!(cf.active_index(), 1);

    cf.handle_key(KeyEvent::new(KeyCode::Left));
    cf.handle_key(KeyEvent::new(KeyCode::Left));
    assert_eq!(cf.active_index(), 3);
}
