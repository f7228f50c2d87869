/// Reveal and particle tuning constants.
///
/// Durations are milliseconds, distances CSS pixels, angles radians unless a
/// name says otherwise.
// Visibility trigger
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN_BOTTOM_PX: f64 = 50.0;
pub const REVEAL_STAGGER_MS: u32 = 100;
// Observers report ratios a hair under the configured threshold on the crossing entry
pub const THRESHOLD_SLACK: f64 = 1e-3;

// Lighter reveal used by the burst profile: earlier trigger, no cascade
pub const PLAIN_REVEAL_THRESHOLD: f64 = 0.1;
pub const PLAIN_REVEAL_STAGGER_MS: u32 = 0;

// Extra time past a particle's own duration before the fallback removal runs
pub const FALLBACK_MARGIN_MS: u32 = 100;

// Pointer stamp (single paw under the cursor)
pub const STAMP_ANCHOR_PX: f32 = 15.0; // half the glyph box, centres the paw on the pointer
pub const STAMP_ROTATION_DEG: f32 = 20.0;
pub const STAMP_SIZE_REM: f32 = 1.5;
pub const STAMP_DURATION_MS: f32 = 800.0;

// Confetti swatches
pub const CONFETTI_COUNT: usize = 15;
pub const CONFETTI_DISTANCE_MIN: f32 = 40.0;
pub const CONFETTI_DISTANCE_MAX: f32 = 100.0;
pub const CONFETTI_SIZE_MIN_PX: f32 = 4.0;
pub const CONFETTI_SIZE_MAX_PX: f32 = 10.0;
pub const CONFETTI_DURATION_MS: f32 = 600.0;

// Paw burst
pub const BURST_COUNT_MIN: usize = 8;
pub const BURST_COUNT_MAX: usize = 12;
pub const BURST_JITTER: f32 = 0.5; // full width, so ±0.25 around the even spacing
pub const BURST_DISTANCE_MIN: f32 = 60.0;
pub const BURST_DISTANCE_MAX: f32 = 140.0;
pub const BURST_UPWARD_BIAS: f32 = 30.0;
pub const BURST_ROTATION_DEG: f32 = 180.0;
pub const BURST_SIZE_MIN_REM: f32 = 1.0;
pub const BURST_SIZE_MAX_REM: f32 = 2.0;
pub const BURST_DURATION_MIN_MS: f32 = 900.0;
pub const BURST_DURATION_MAX_MS: f32 = 1200.0;

// Konami rain, classic flavour
pub const CLASSIC_RAIN_DURATION_MS: u32 = 5000;
pub const CLASSIC_RAIN_INTERVAL_MS: u32 = 100;
pub const CLASSIC_RAIN_START_Y: f32 = -30.0;
pub const CLASSIC_RAIN_FALL_FRACTION: f32 = 1.1;
pub const CLASSIC_RAIN_OPACITY: f32 = 0.7;
// Drops fade on a fixed clock whatever their fall time
pub const CLASSIC_RAIN_FADE_AFTER_MS: u32 = 3000;
pub const CLASSIC_RAIN_FADE_MS: u32 = 500;
pub const CLASSIC_RAIN_REMOVE_MS: u32 = 3600;

// Konami rain, burst flavour
pub const RAIN_DURATION_MS: u32 = 3000;
pub const RAIN_INTERVAL_MS: u32 = 100;
pub const RAIN_START_Y: f32 = -20.0;
pub const RAIN_FALL_EXTRA_PX: f32 = 50.0;
pub const RAIN_DRIFT_PX: f32 = 50.0;

// Hero parallax: element i moves at BASE + (i % LAYERS) * STEP of the scroll
pub const PARALLAX_BASE_SPEED: f32 = 0.2;
pub const PARALLAX_SPEED_STEP: f32 = 0.1;
pub const PARALLAX_LAYERS: usize = 3;
