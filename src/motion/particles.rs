use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub const fn around_zero(half_width: f32) -> Self {
        Self {
            min: -half_width,
            max: half_width,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        if self.max > self.min {
            value >= self.min && value < self.max
        } else {
            value == self.min
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountRange {
    pub min: usize,
    pub max: usize,
}

impl CountRange {
    pub const fn exactly(n: usize) -> Self {
        Self { min: n, max: n }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        if self.max > self.min {
            rng.gen_range(self.min..=self.max)
        } else {
            self.min
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmissionMode {
    RadialClick,
    FullBurst,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Look {
    Glyph(&'static str),
    Swatch(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Glyphs(&'static [&'static str]),
    Swatches(&'static [&'static str]),
}

impl Palette {
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Look> {
        match self {
            Palette::Glyphs(set) => set.choose(rng).copied().map(Look::Glyph),
            Palette::Swatches(set) => set.choose(rng).copied().map(Look::Swatch),
        }
    }

    pub fn contains(&self, look: Look) -> bool {
        match (self, look) {
            (Palette::Glyphs(set), Look::Glyph(g)) => set.contains(&g),
            (Palette::Swatches(set), Look::Swatch(c)) => set.contains(&c),
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeUnit {
    Px,
    Rem,
}

impl SizeUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            SizeUnit::Px => "px",
            SizeUnit::Rem => "rem",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Driver {
    /// A stylesheet animation on the node's class reads `--tx/--ty/--rot`;
    /// completion arrives as `animationend`.
    Keyframes,
    /// Inline transition toward the end state, applied on the next frame;
    /// completion arrives as `transitionend`.
    Transition,
}

impl Driver {
    pub fn completion_event(self) -> &'static str {
        match self {
            Driver::Keyframes => "animationend",
            Driver::Transition => "transitionend",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstPreset {
    pub name: &'static str,
    pub mode: EmissionMode,
    pub palette: Palette,
    pub count: CountRange,
    pub jitter: f32,
    pub distance: Span,
    /// Subtracted from the y offset in `FullBurst` mode.
    pub upward_bias: f32,
    pub rotation_deg: Span,
    pub size: Span,
    pub size_unit: SizeUnit,
    pub duration_ms: Span,
    /// Added to the origin so the glyph box is centred on it.
    pub anchor: Vec2,
    pub end_scale: f32,
    pub class_name: Option<&'static str>,
    pub easing: &'static str,
    pub driver: Driver,
}

/// Timed fade in place of a completion signal. Opacity drops `after_ms`
/// after spawn over `fade_ms`; the node is removed at `remove_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeOut {
    pub after_ms: u32,
    pub fade_ms: u32,
    pub remove_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainPreset {
    pub name: &'static str,
    pub palette: Palette,
    pub duration_ms: u32,
    pub interval_ms: u32,
    pub start_y: f32,
    pub drift: Span,
    pub fall_fraction: f32,
    pub fall_extra_px: f32,
    pub rotation_deg: Span,
    pub size: Span,
    pub size_unit: SizeUnit,
    pub fall_ms: Span,
    pub opacity: f32,
    pub fade: Option<FadeOut>,
    pub class_name: Option<&'static str>,
    pub easing: &'static str,
    pub driver: Driver,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    pub look: Look,
    pub origin: Vec2,
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub size: f32,
    pub size_unit: SizeUnit,
    pub duration_ms: u32,
    pub start_opacity: f32,
    pub end_scale: f32,
    pub fade: Option<FadeOut>,
    pub class_name: Option<&'static str>,
    pub easing: &'static str,
    pub driver: Driver,
}

impl ParticleSpec {
    pub fn start(&self) -> Keyframe {
        Keyframe {
            offset: Vec2::ZERO,
            rotation_deg: 0.0,
            opacity: self.start_opacity,
            scale: 1.0,
        }
    }

    pub fn end(&self) -> Keyframe {
        Keyframe {
            offset: self.offset,
            rotation_deg: self.rotation_deg,
            opacity: 0.0,
            scale: self.end_scale,
        }
    }
}

/// Angle for particle `index` of `count`: even spacing plus centred jitter.
pub fn burst_angle<R: Rng + ?Sized>(index: usize, count: usize, jitter: f32, rng: &mut R) -> f32 {
    let even = if count == 0 {
        0.0
    } else {
        TAU * index as f32 / count as f32
    };
    if jitter > 0.0 {
        even + (rng.gen::<f32>() - 0.5) * jitter
    } else {
        even
    }
}

/// Polar target offset; `FullBurst` lifts it by the upward bias (screen y grows down).
pub fn burst_offset(mode: EmissionMode, angle: f32, distance: f32, upward_bias: f32) -> Vec2 {
    let polar = Vec2::new(angle.cos(), angle.sin()) * distance;
    match mode {
        EmissionMode::RadialClick => polar,
        EmissionMode::FullBurst => polar - Vec2::new(0.0, upward_bias),
    }
}

pub fn plan_burst<R: Rng + ?Sized>(
    preset: &BurstPreset,
    origin: Vec2,
    count: usize,
    rng: &mut R,
) -> SmallVec<[ParticleSpec; 16]> {
    let mut out = SmallVec::new();
    for i in 0..count {
        let angle = burst_angle(i, count, preset.jitter, rng);
        let distance = preset.distance.sample(rng);
        let Some(look) = preset.palette.pick(rng) else {
            break;
        };
        out.push(ParticleSpec {
            look,
            origin: origin + preset.anchor,
            offset: burst_offset(preset.mode, angle, distance, preset.upward_bias),
            rotation_deg: preset.rotation_deg.sample(rng),
            size: preset.size.sample(rng),
            size_unit: preset.size_unit,
            duration_ms: preset.duration_ms.sample(rng).max(0.0).round() as u32,
            start_opacity: 1.0,
            end_scale: preset.end_scale,
            fade: None,
            class_name: preset.class_name,
            easing: preset.easing,
            driver: preset.driver,
        });
    }
    out
}

pub fn plan_drop<R: Rng + ?Sized>(
    preset: &RainPreset,
    viewport: Vec2,
    rng: &mut R,
) -> Option<ParticleSpec> {
    let look = preset.palette.pick(rng)?;
    let x = Span::new(0.0, viewport.x.max(0.0)).sample(rng);
    let fall = viewport.y.max(0.0) * preset.fall_fraction + preset.fall_extra_px;
    Some(ParticleSpec {
        look,
        origin: Vec2::new(x, preset.start_y),
        offset: Vec2::new(preset.drift.sample(rng), fall),
        rotation_deg: preset.rotation_deg.sample(rng),
        size: preset.size.sample(rng),
        size_unit: preset.size_unit,
        duration_ms: preset.fall_ms.sample(rng).max(0.0).round() as u32,
        start_opacity: preset.opacity,
        end_scale: 1.0,
        fade: preset.fade,
        class_name: preset.class_name,
        easing: preset.easing,
        driver: preset.driver,
    })
}
