use super::constants::*;
use super::particles::{
    BurstPreset, CountRange, Driver, EmissionMode, FadeOut, Palette, RainPreset, SizeUnit, Span,
};
use glam::Vec2;

// Plain paws are repeated so they come up more often than the animals
pub const CLASSIC_PAWS: &[&str] = &["🐾", "🐾", "🐾", "🐾", "🐾", "🦊", "🐺", "🐱", "🐻"];
pub const BURST_GLYPHS: &[&str] = &["🐾", "✨", "💜", "💖", "🌟", "🐺", "🦊"];
pub const CONFETTI_COLORS: &[&str] = &[
    "#ffc3d0", "#b48eed", "#a8edea", "#8ec5fc", "#ffecd2", "#f6d365", "#ff8fab",
];

const EASE_OUT_QUAD: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// A single paw dropped under the pointer.
pub const PAW_STAMP: BurstPreset = BurstPreset {
    name: "paw-stamp",
    mode: EmissionMode::RadialClick,
    palette: Palette::Glyphs(CLASSIC_PAWS),
    count: CountRange::exactly(1),
    jitter: 0.0,
    distance: Span::fixed(0.0),
    upward_bias: 0.0,
    rotation_deg: Span::around_zero(STAMP_ROTATION_DEG),
    size: Span::fixed(STAMP_SIZE_REM),
    size_unit: SizeUnit::Rem,
    duration_ms: Span::fixed(STAMP_DURATION_MS),
    anchor: Vec2::new(-STAMP_ANCHOR_PX, -STAMP_ANCHOR_PX),
    end_scale: 1.0,
    class_name: Some("paw-click-effect"),
    easing: "ease-out",
    driver: Driver::Keyframes,
};

/// Round colour swatches thrown out evenly and shrunk to nothing.
pub const CONFETTI: BurstPreset = BurstPreset {
    name: "confetti",
    mode: EmissionMode::RadialClick,
    palette: Palette::Swatches(CONFETTI_COLORS),
    count: CountRange::exactly(CONFETTI_COUNT),
    jitter: 0.0,
    distance: Span::new(CONFETTI_DISTANCE_MIN, CONFETTI_DISTANCE_MAX),
    upward_bias: 0.0,
    rotation_deg: Span::fixed(0.0),
    size: Span::new(CONFETTI_SIZE_MIN_PX, CONFETTI_SIZE_MAX_PX),
    size_unit: SizeUnit::Px,
    duration_ms: Span::fixed(CONFETTI_DURATION_MS),
    anchor: Vec2::ZERO,
    end_scale: 0.0,
    class_name: None,
    easing: EASE_OUT_QUAD,
    driver: Driver::Transition,
};

pub const PAW_BURST: BurstPreset = BurstPreset {
    name: "paw-burst",
    mode: EmissionMode::FullBurst,
    palette: Palette::Glyphs(BURST_GLYPHS),
    count: CountRange::between(BURST_COUNT_MIN, BURST_COUNT_MAX),
    jitter: BURST_JITTER,
    distance: Span::new(BURST_DISTANCE_MIN, BURST_DISTANCE_MAX),
    upward_bias: BURST_UPWARD_BIAS,
    rotation_deg: Span::around_zero(BURST_ROTATION_DEG),
    size: Span::new(BURST_SIZE_MIN_REM, BURST_SIZE_MAX_REM),
    size_unit: SizeUnit::Rem,
    duration_ms: Span::new(BURST_DURATION_MIN_MS, BURST_DURATION_MAX_MS),
    anchor: Vec2::ZERO,
    end_scale: 1.0,
    class_name: Some("paw-particle"),
    easing: "ease-out",
    driver: Driver::Keyframes,
};

pub const CLASSIC_RAIN: RainPreset = RainPreset {
    name: "classic-rain",
    palette: Palette::Glyphs(CLASSIC_PAWS),
    duration_ms: CLASSIC_RAIN_DURATION_MS,
    interval_ms: CLASSIC_RAIN_INTERVAL_MS,
    start_y: CLASSIC_RAIN_START_Y,
    drift: Span::fixed(0.0),
    fall_fraction: CLASSIC_RAIN_FALL_FRACTION,
    // Start sits above the viewport; cover that gap too
    fall_extra_px: -CLASSIC_RAIN_START_Y,
    rotation_deg: Span::fixed(0.0),
    size: Span::new(1.0, 3.0),
    size_unit: SizeUnit::Rem,
    fall_ms: Span::new(2000.0, 5000.0),
    opacity: CLASSIC_RAIN_OPACITY,
    fade: Some(FadeOut {
        after_ms: CLASSIC_RAIN_FADE_AFTER_MS,
        fade_ms: CLASSIC_RAIN_FADE_MS,
        remove_ms: CLASSIC_RAIN_REMOVE_MS,
    }),
    class_name: None,
    easing: "linear",
    driver: Driver::Transition,
};

pub const KONAMI_RAIN: RainPreset = RainPreset {
    name: "konami-rain",
    palette: Palette::Glyphs(BURST_GLYPHS),
    duration_ms: RAIN_DURATION_MS,
    interval_ms: RAIN_INTERVAL_MS,
    start_y: RAIN_START_Y,
    drift: Span::around_zero(RAIN_DRIFT_PX),
    fall_fraction: 1.0,
    fall_extra_px: RAIN_FALL_EXTRA_PX,
    rotation_deg: Span::new(0.0, 360.0),
    size: Span::new(1.5, 3.0),
    size_unit: SizeUnit::Rem,
    fall_ms: Span::new(1500.0, 2500.0),
    opacity: 1.0,
    fade: None,
    class_name: Some("paw-particle"),
    easing: "linear",
    driver: Driver::Keyframes,
};
