// Host-side tests for particle planning and inline styles.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/motion/mod.rs"]
mod motion;

use glam::Vec2;
use motion::particles::*;
use motion::presets::*;
use motion::style::{end_properties, start_style, transform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

#[test]
fn span_sampling_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    let span = Span::new(2.0, 5.0);
    for _ in 0..200 {
        assert!(span.contains(span.sample(&mut rng)));
    }
    assert_eq!(Span::fixed(4.0).sample(&mut rng), 4.0);
    // Inverted ranges collapse to the minimum instead of panicking
    assert_eq!(Span::new(3.0, 1.0).sample(&mut rng), 3.0);
}

#[test]
fn count_range_is_inclusive() {
    let mut rng = StdRng::seed_from_u64(5);
    let range = CountRange::between(8, 12);
    let mut seen = [false; 13];
    for _ in 0..500 {
        let n = range.sample(&mut rng);
        assert!((8..=12).contains(&n));
        seen[n] = true;
    }
    assert!(seen[8] && seen[12]);
    assert_eq!(CountRange::exactly(15).sample(&mut rng), 15);
}

#[test]
fn zero_jitter_gives_even_spacing() {
    let mut rng = StdRng::seed_from_u64(1);
    for i in 0..6 {
        let a = burst_angle(i, 6, 0.0, &mut rng);
        assert!((a - TAU * i as f32 / 6.0).abs() < 1e-6);
    }
}

#[test]
fn jitter_is_centred_on_even_spacing() {
    let mut rng = StdRng::seed_from_u64(9);
    for i in 0..12 {
        let even = TAU * i as f32 / 12.0;
        let a = burst_angle(i, 12, 0.5, &mut rng);
        assert!((a - even).abs() <= 0.25 + 1e-6);
    }
}

#[test]
fn full_burst_offset_subtracts_bias() {
    let radial = burst_offset(EmissionMode::RadialClick, 0.0, 100.0, 30.0);
    let burst = burst_offset(EmissionMode::FullBurst, 0.0, 100.0, 30.0);
    assert!((radial - Vec2::new(100.0, 0.0)).length() < 1e-4);
    assert!((burst - Vec2::new(100.0, -30.0)).length() < 1e-4);
}

#[test]
fn empty_palette_plans_nothing() {
    let mut rng = StdRng::seed_from_u64(2);
    let preset = BurstPreset {
        palette: Palette::Glyphs(&[]),
        ..PAW_BURST
    };
    assert!(plan_burst(&preset, Vec2::ZERO, 10, &mut rng).is_empty());
    let rain = RainPreset {
        palette: Palette::Swatches(&[]),
        ..KONAMI_RAIN
    };
    assert!(plan_drop(&rain, Vec2::new(800.0, 600.0), &mut rng).is_none());
}

#[test]
fn both_source_variants_are_preserved() {
    assert_eq!(CONFETTI.mode, EmissionMode::RadialClick);
    assert_eq!(PAW_STAMP.mode, EmissionMode::RadialClick);
    assert_eq!(PAW_BURST.mode, EmissionMode::FullBurst);
    assert!(PAW_BURST.jitter > CONFETTI.jitter);
    assert!(PAW_BURST.upward_bias > 0.0);
    assert_eq!(CONFETTI.upward_bias, 0.0);
    assert_ne!(CLASSIC_RAIN.duration_ms, KONAMI_RAIN.duration_ms);
    assert_ne!(CLASSIC_PAWS, BURST_GLYPHS);
}

#[test]
fn completion_events_match_driver() {
    assert_eq!(Driver::Keyframes.completion_event(), "animationend");
    assert_eq!(Driver::Transition.completion_event(), "transitionend");
}

fn sample_spec(preset: &BurstPreset) -> ParticleSpec {
    let mut rng = StdRng::seed_from_u64(11);
    plan_burst(preset, Vec2::new(10.0, 20.0), 1, &mut rng)[0]
}

#[test]
fn keyframe_style_exports_motion_variables() {
    let spec = sample_spec(&PAW_BURST);
    let css = start_style(&spec);
    assert!(css.starts_with("position:fixed;left:10.0px;top:20.0px;"));
    assert!(css.contains("--tx:"));
    assert!(css.contains("--ty:"));
    assert!(css.contains("--rot:"));
    assert!(css.contains("rem;"));
    assert!(css.contains(&format!("animation-duration:{}ms;", spec.duration_ms)));
    assert!(end_properties(&spec).is_empty());
}

#[test]
fn transition_style_ends_faded_and_shrunk() {
    let spec = sample_spec(&CONFETTI);
    let css = start_style(&spec);
    assert!(css.contains("border-radius:50%;"));
    assert!(css.contains("background:#"));
    assert!(css.contains("transition:transform 600ms"));

    let end = end_properties(&spec);
    assert_eq!(end.len(), 2);
    assert_eq!(end[1], ("opacity", "0".to_string()));
    assert!(end[0].1.ends_with("scale(0)"));
}

#[test]
fn transform_formats_offset_and_rotation() {
    let frame = Keyframe {
        offset: Vec2::new(12.0, -8.5),
        rotation_deg: 45.0,
        opacity: 0.0,
        scale: 1.0,
    };
    assert_eq!(transform(&frame), "translate(12.0px, -8.5px) rotate(45.0deg) scale(1)");
}
