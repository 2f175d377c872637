/// Selector of the page's main scrolling region.
pub const SCROLL_HOST_SELECTOR: &str = "main";

/// Attribute carrying an element's parallax speed factor.
pub const PARALLAX_SPEED_ATTR: &str = "data-parallax-speed";

/// Vertical drift as a fraction of horizontal drift.
pub const VERTICAL_COUPLING: f64 = 0.35;

pub fn parallax_selector() -> String {
    format!("[{}]", PARALLAX_SPEED_ATTR)
}
