use super::constants::{PARALLAX_BASE_SPEED, PARALLAX_LAYERS, PARALLAX_SPEED_STEP};

pub fn layer_speed(index: usize) -> f32 {
    PARALLAX_BASE_SPEED + (index % PARALLAX_LAYERS) as f32 * PARALLAX_SPEED_STEP
}

/// Vertical shift for the `index`-th floating element. `None` once the page
/// has scrolled past the first viewport, so elements keep their last offset.
pub fn parallax_offset(index: usize, scroll_y: f32, viewport_height: f32) -> Option<f32> {
    if scroll_y > viewport_height {
        return None;
    }
    Some(scroll_y * layer_speed(index))
}

pub fn parallax_transform(offset_px: f32) -> String {
    format!("translateY({:.1}px)", offset_px)
}
