// Host-side tests for the trail rate limiter and the frame-loop gate.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod pacing {
    include!("../src/pacing.rs");
}

use pacing::*;

#[test]
fn first_spawn_passes_with_a_good_draw() {
    let mut gate = TrailGate::default();
    assert!(gate.should_spawn(0.0, 0.9));
}

#[test]
fn no_two_spawns_within_100ms() {
    let mut gate = TrailGate::default();
    assert!(gate.should_spawn(1000.0, 0.99));
    // A flood of move events with winning draws inside the window: all refused.
    for dt in [1.0, 10.0, 50.0, 99.0, 100.0] {
        assert!(!gate.should_spawn(1000.0 + dt, 0.99), "dt={dt}");
    }
    assert!(gate.should_spawn(1101.0, 0.99));
}

#[test]
fn losing_draw_never_spawns() {
    let mut gate = TrailGate::default();
    assert!(!gate.should_spawn(1000.0, 0.8)); // threshold is exclusive
    assert!(!gate.should_spawn(2000.0, 0.1));
    // Refused draws must not reset the window.
    assert!(gate.should_spawn(2001.0, 0.95));
}

#[test]
fn refused_spawn_keeps_window_anchored_to_last_success() {
    let mut gate = TrailGate::default();
    assert!(gate.should_spawn(500.0, 0.9));
    assert!(!gate.should_spawn(550.0, 0.9)); // inside window
    // 601 is >100ms after the last *success* at 500.
    assert!(gate.should_spawn(601.0, 0.9));
}

#[test]
fn frame_gate_start_is_idempotent() {
    let gate = FrameGate::default();
    assert!(gate.try_start());
    assert!(gate.is_running());
    // A second start while running must not hand out another loop.
    assert!(!gate.try_start());
    assert!(!gate.try_start());
}

#[test]
fn frame_gate_hidden_then_shown_restarts_exactly_once() {
    let gate = FrameGate::default();
    assert!(gate.try_start());

    // Page hidden: the running loop stops once.
    assert!(gate.stop());
    assert!(!gate.is_running());
    // Redundant hide events are no-ops.
    assert!(!gate.stop());

    // Page shown: exactly one restart wins.
    assert!(gate.try_start());
    assert!(!gate.try_start());
    assert!(gate.is_running());
}
