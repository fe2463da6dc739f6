// Host-side tests for frame-loop start/stop bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn new_loop_runs_ticks_and_tracks_requests() {
    let mut gate = LoopGate::default();
    assert!(gate.is_running());
    gate.scheduled(Some(1));
    assert_eq!(gate.pending(), Some(1));

    assert!(gate.enter_tick());
    assert_eq!(gate.pending(), None);
    gate.scheduled(Some(2));
    assert_eq!(gate.pending(), Some(2));
}

#[test]
fn stop_hands_back_outstanding_request_once() {
    let mut gate = LoopGate::default();
    gate.scheduled(Some(7));
    assert_eq!(gate.stop(), Some(Some(7)));
    assert!(!gate.is_running());
    assert_eq!(gate.pending(), None);

    // A second teardown is a no-op
    assert_eq!(gate.stop(), None);
}

#[test]
fn stop_between_frames_without_request() {
    let mut gate = LoopGate::default();
    assert!(gate.enter_tick());
    assert_eq!(gate.stop(), Some(None));
}

#[test]
fn stopped_loop_skips_tick_and_ignores_late_requests() {
    let mut gate = LoopGate::default();
    gate.scheduled(Some(3));
    gate.stop();

    // A frame that was already queued still fires once
    assert!(!gate.enter_tick());
    gate.scheduled(Some(4));
    assert_eq!(gate.pending(), None);
    assert!(!gate.is_running());
}

#[test]
fn teardown_counts_only_running_loops() {
    let mut gates = vec![LoopGate::default(), LoopGate::default(), LoopGate::default()];
    gates[1].stop();
    let running = gates.iter().filter(|g| g.is_running()).count();
    assert_eq!(running, 2);
    for g in &mut gates {
        g.stop();
    }
    assert!(gates.iter().all(|g| !g.is_running()));
}
