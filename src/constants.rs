// DOM-facing names and styling used by the web shell.

// Page configuration
pub const PROFILE_ATTR: &str = "data-fx-profile";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Clicks on these never stamp a paw
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, select, textarea";

pub const CLICKABLE_PAW_SELECTOR: &str = ".clickable-paw";
pub const PAW_CLICKED_CLASS: &str = "paw-clicked";
pub const PAW_CLICKED_MS: u32 = 500;
pub const GALLERY_SELECTOR: &str = ".gallery-item";

// Footer easter egg highlight while a message is showing
pub const EASTER_HIGHLIGHT_COLOR: &str = "var(--lavender)";
pub const EASTER_UNLOCK_COLOR: &str = "var(--accent)";
pub const EASTER_FONT_SIZE: &str = "1.2rem";

// Secret toast
pub const TOAST_VISIBLE_MS: u32 = 3000;
pub const TOAST_FADE_MS: u32 = 500;
pub const TOAST_HIDDEN_TRANSFORM: &str = "translateX(-50%) translateY(20px)";
pub const TOAST_SHOWN_TRANSFORM: &str = "translateX(-50%) translateY(0)";
pub const TOAST_STYLE: &str = "position:fixed;bottom:2rem;left:50%;\
transform:translateX(-50%) translateY(20px);\
background:linear-gradient(135deg, #b48eed, #ff8fab);color:#fff;\
padding:1rem 2rem;border-radius:50px;font-family:var(--font);font-weight:700;\
font-size:1rem;z-index:10000;opacity:0;\
transition:all 0.5s cubic-bezier(0.34, 1.56, 0.64, 1);\
box-shadow:0 8px 30px rgba(180, 142, 237, 0.4);pointer-events:none;";
