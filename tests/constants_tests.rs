// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod motion_constants {
    include!("../src/motion/constants.rs");
}

use constants::*;
use motion_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_fractions() {
    assert!((0.0..=1.0).contains(&REVEAL_THRESHOLD));
    assert!((0.0..=1.0).contains(&PLAIN_REVEAL_THRESHOLD));
    assert!(THRESHOLD_SLACK > 0.0 && THRESHOLD_SLACK < 0.01);
    assert!(REVEAL_ROOT_MARGIN_BOTTOM_PX >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(BURST_COUNT_MIN <= BURST_COUNT_MAX);
    assert!(BURST_DISTANCE_MIN < BURST_DISTANCE_MAX);
    assert!(CONFETTI_DISTANCE_MIN < CONFETTI_DISTANCE_MAX);
    assert!(CONFETTI_SIZE_MIN_PX < CONFETTI_SIZE_MAX_PX);
    assert!(BURST_SIZE_MIN_REM < BURST_SIZE_MAX_REM);
    assert!(BURST_DURATION_MIN_MS < BURST_DURATION_MAX_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rain_runs_for_whole_intervals() {
    assert!(RAIN_INTERVAL_MS > 0 && CLASSIC_RAIN_INTERVAL_MS > 0);
    assert_eq!(RAIN_DURATION_MS % RAIN_INTERVAL_MS, 0);
    assert_eq!(CLASSIC_RAIN_DURATION_MS % CLASSIC_RAIN_INTERVAL_MS, 0);
    assert!(RAIN_START_Y < 0.0 && CLASSIC_RAIN_START_Y < 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn toast_timing_and_queries() {
    assert!(TOAST_VISIBLE_MS > TOAST_FADE_MS);
    assert!(TOAST_STYLE.contains("opacity:0"));
    assert!(TOAST_STYLE.contains(TOAST_HIDDEN_TRANSFORM));
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
    assert!(INTERACTIVE_SELECTOR.split(", ").any(|s| s == "button"));
    assert!(PROFILE_ATTR.starts_with("data-"));
}
