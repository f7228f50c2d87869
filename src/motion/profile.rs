use super::constants::{
    PLAIN_REVEAL_STAGGER_MS, PLAIN_REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN_BOTTOM_PX,
    REVEAL_STAGGER_MS, REVEAL_THRESHOLD,
};
use super::particles::{BurstPreset, RainPreset};
use super::presets::{CLASSIC_RAIN, CONFETTI, KONAMI_RAIN, PAW_BURST, PAW_STAMP};
use super::reveal::RevealOptions;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSetup {
    pub selector: &'static str,
    pub revealed_class: &'static str,
    pub options: RevealOptions,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FooterEgg {
    /// Every click shows the next message and throws a burst.
    Cycle {
        selector: &'static str,
        messages: &'static [&'static str],
        burst: BurstPreset,
        restore_ms: u32,
    },
    /// Every `clicks`-th click swaps in `message`, bursts, then restores `idle_text`.
    Unlock {
        selector: &'static str,
        clicks: u32,
        message: &'static str,
        idle_text: &'static str,
        burst: BurstPreset,
        restore_ms: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GalleryClick {
    Press { scale: f32, restore_ms: u32 },
    Burst(BurstPreset),
}

/// One complete flavour of page effects.
///
/// The site grew two parameter sets for the same effects; both are kept and
/// chosen per page with `data-fx-profile`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub container_id: &'static str,
    pub reveal: RevealSetup,
    pub pointer_stamp: Option<BurstPreset>,
    /// Secret toast after this many stamps.
    pub click_milestone: Option<(u32, &'static str)>,
    pub paw_burst: Option<BurstPreset>,
    pub gallery: GalleryClick,
    pub footer: FooterEgg,
    pub rain: RainPreset,
    pub konami_toast: Option<&'static str>,
    /// Hero elements that drift with the scroll.
    pub parallax: Option<&'static str>,
}

pub const FOOTER_MESSAGES: &[&str] = &[
    "OwO",
    "UwU",
    "*notices your website*",
    "What's this?",
    "(◕ᴗ◕✿)",
    "OwO *wags tail*",
    "🐺 Awoo!",
];

pub static CLASSIC: Profile = Profile {
    name: "classic",
    container_id: "paw-effects",
    reveal: RevealSetup {
        selector: "[data-reveal]",
        revealed_class: "revealed",
        options: RevealOptions {
            threshold: REVEAL_THRESHOLD,
            root_margin_bottom_px: REVEAL_ROOT_MARGIN_BOTTOM_PX,
            stagger_ms: REVEAL_STAGGER_MS,
        },
    },
    pointer_stamp: Some(PAW_STAMP),
    click_milestone: Some((10, "🐾 Du hast den geheimen Pfad gefunden! OwO")),
    paw_burst: None,
    gallery: GalleryClick::Press {
        scale: 0.95,
        restore_ms: 200,
    },
    footer: FooterEgg::Cycle {
        selector: ".footer-easter",
        messages: FOOTER_MESSAGES,
        burst: CONFETTI,
        restore_ms: 2000,
    },
    rain: CLASSIC_RAIN,
    konami_toast: Some("🎮 Konami Code aktiviert! 🐾✨ Awoo~!"),
    parallax: Some(".floating-paw"),
};

pub static BURST: Profile = Profile {
    name: "burst",
    container_id: "paw-burst",
    reveal: RevealSetup {
        selector: ".section-title, .about-card, .event-card, .gallery-item, .rule-card, .join-btn",
        revealed_class: "animate-in",
        options: RevealOptions {
            threshold: PLAIN_REVEAL_THRESHOLD,
            root_margin_bottom_px: REVEAL_ROOT_MARGIN_BOTTOM_PX,
            stagger_ms: PLAIN_REVEAL_STAGGER_MS,
        },
    },
    pointer_stamp: None,
    click_milestone: None,
    paw_burst: Some(PAW_BURST),
    gallery: GalleryClick::Burst(PAW_BURST),
    footer: FooterEgg::Unlock {
        selector: ".easter-egg",
        clicks: 3,
        message: "OwO What's this?! UwU 🐾✨",
        idle_text: "OwO",
        burst: PAW_BURST,
        restore_ms: 3000,
    },
    rain: KONAMI_RAIN,
    konami_toast: None,
    parallax: None,
};

impl Profile {
    pub fn select(attr: Option<&str>) -> &'static Profile {
        match attr.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("classic") => &CLASSIC,
            Some(v) if v.eq_ignore_ascii_case("burst") => &BURST,
            Some(other) => {
                log::warn!("[profile] unknown '{}', using burst", other);
                &BURST
            }
            None => &BURST,
        }
    }
}
