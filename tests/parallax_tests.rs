// Host-side tests for the hero parallax.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/motion/mod.rs"]
mod motion;

use motion::parallax::{layer_speed, parallax_offset, parallax_transform};
use motion::profile::{BURST, CLASSIC};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn speeds_cycle_through_three_layers() {
    let speeds: Vec<f32> = (0..6).map(layer_speed).collect();
    assert!(approx(speeds[0], 0.2));
    assert!(approx(speeds[1], 0.3));
    assert!(approx(speeds[2], 0.4));
    assert!(approx(speeds[3], speeds[0]));
    assert!(approx(speeds[5], speeds[2]));
}

#[test]
fn offset_scales_with_scroll_inside_the_hero() {
    assert_eq!(parallax_offset(0, 0.0, 800.0), Some(0.0));
    let offset = parallax_offset(1, 400.0, 800.0).unwrap();
    assert!(approx(offset, 120.0));
    // Exactly one viewport down still moves
    assert!(approx(parallax_offset(2, 800.0, 800.0).unwrap(), 320.0));
}

#[test]
fn past_the_hero_nothing_moves() {
    assert_eq!(parallax_offset(0, 800.5, 800.0), None);
    assert_eq!(parallax_offset(4, 5000.0, 800.0), None);
}

#[test]
fn transform_is_a_vertical_translate() {
    assert_eq!(parallax_transform(120.0), "translateY(120.0px)");
}

#[test]
fn only_the_classic_profile_has_floaters() {
    assert_eq!(CLASSIC.parallax, Some(".floating-paw"));
    assert_eq!(BURST.parallax, None);
}
