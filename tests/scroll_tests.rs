// Host-side tests for the navbar scroll state and reveal latch.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::scroll::*;

#[test]
fn navbar_threshold_is_strict() {
    let p = UiParams::default();
    assert!(!navbar_scrolled(0.0, &p));
    assert!(!navbar_scrolled(50.0, &p));
    assert!(navbar_scrolled(50.5, &p));
    assert!(navbar_scrolled(4000.0, &p));
}

#[test]
fn navbar_follows_scroll_up_and_down() {
    let p = UiParams::default();
    let states: Vec<bool> = [0.0, 60.0, 30.0]
        .iter()
        .map(|&y| navbar_scrolled(y, &p))
        .collect();
    assert_eq!(states, vec![false, true, false]);
}

#[test]
fn reveal_is_one_way() {
    let mut latch = RevealLatch::default();
    assert!(!latch.observe(false));
    assert!(!latch.is_active());

    // Crosses the visibility threshold
    assert!(latch.observe(true));
    assert!(latch.is_active());

    // Scrolls out of view and back in
    assert!(!latch.observe(false));
    assert!(latch.is_active());
    assert!(!latch.observe(true));
    assert!(latch.is_active());
}

#[test]
fn already_active_element_is_not_revealed_twice() {
    let mut latch = RevealLatch::new(true);
    assert!(!latch.observe(true));
    assert!(latch.is_active());
}

#[test]
fn preactivated_element_is_released_on_any_report() {
    // Markup already carries the active class: nothing to add, but the
    // element is settled whether or not it is visible yet
    for intersecting in [false, true] {
        let mut latch = RevealLatch::new(true);
        assert!(!latch.observe(intersecting));
        assert!(latch.is_active());
    }

    let mut hidden = RevealLatch::new(false);
    assert!(!hidden.observe(false));
    assert!(!hidden.is_active());
}
