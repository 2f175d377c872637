use crate::config::VERTICAL_COUPLING;

/// Horizontal extent of an element's bounding box, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub width: f64,
}

impl Rect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Offset applied to a parallax element through its `transform` style.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

impl Translation {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The z term keeps the element on its own compositing layer.
    pub fn to_css(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.x, self.y)
    }
}

/// Signed distance of `rect`'s center from the viewport center, scaled by the
/// viewport half-width. Positive when the element sits left of center.
///
/// Returns `None` for a degenerate viewport (zero, negative or non-finite width).
/// The ratio itself is not clamped, elements far off-screen get large values.
pub fn distance_ratio(viewport_width: f64, rect: Rect) -> Option<f64> {
    if !viewport_width.is_finite() || viewport_width <= 0.0 {
        return None;
    }
    let viewport_center = viewport_width / 2.0;
    let ratio = (viewport_center - rect.center()) / viewport_center;
    ratio.is_finite().then_some(ratio)
}

pub fn parallax_offset(ratio: f64, speed: f64) -> Translation {
    let x = ratio * speed;
    Translation {
        x,
        y: x * VERTICAL_COUPLING,
    }
}

/// Parses a raw `data-parallax-speed` value. Absent, empty or garbage values
/// mean "no effect" and come back as 0.
pub fn parse_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn element_right_of_center_moves_left_and_up() {
        let ratio = distance_ratio(1000.0, Rect::new(800.0, 200.0)).unwrap();
        assert!((ratio - -0.8).abs() < EPS);

        let offset = parallax_offset(ratio, 60.0);
        assert!((offset.x - -48.0).abs() < EPS);
        assert!((offset.y - -16.8).abs() < EPS);
    }

    #[test]
    fn centered_element_has_no_offset() {
        let ratio = distance_ratio(1000.0, Rect::new(400.0, 200.0)).unwrap();
        for speed in [-100.0, -7.5, 1.0, 60.0, 100.0] {
            let offset = parallax_offset(ratio, speed);
            assert_eq!(offset.x, 0.0);
            assert_eq!(offset.y, 0.0);
        }
    }

    #[test]
    fn vertical_drift_is_fixed_fraction_of_horizontal() {
        let widths = [320.0, 1000.0, 1920.0];
        let rects = [Rect::new(-900.0, 50.0), Rect::new(10.0, 300.0), Rect::new(2500.0, 80.0)];
        for width in widths {
            for rect in rects {
                let ratio = distance_ratio(width, rect).unwrap();
                for speed in [-40.0, 25.0, 90.0] {
                    let offset = parallax_offset(ratio, speed);
                    assert!((offset.y - 0.35 * offset.x).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn ratio_is_not_clamped_far_outside_viewport() {
        let ratio = distance_ratio(1000.0, Rect::new(2900.0, 200.0)).unwrap();
        assert!((ratio - -5.0).abs() < EPS);
    }

    #[test]
    fn degenerate_viewport_yields_no_ratio() {
        assert_eq!(distance_ratio(0.0, Rect::new(10.0, 10.0)), None);
        assert_eq!(distance_ratio(-20.0, Rect::new(10.0, 10.0)), None);
        assert_eq!(distance_ratio(f64::NAN, Rect::new(10.0, 10.0)), None);
        assert_eq!(distance_ratio(1000.0, Rect::new(f64::INFINITY, 10.0)), None);
    }

    #[test]
    fn css_uses_translate3d_with_flat_z() {
        let css = Translation { x: -48.0, y: -16.8 }.to_css();
        assert_eq!(css, "translate3d(-48px, -16.8px, 0)");
    }

    #[test]
    fn speed_parsing() {
        assert_eq!(parse_speed(None), 0.0);
        assert_eq!(parse_speed(Some("")), 0.0);
        assert_eq!(parse_speed(Some("fast")), 0.0);
        assert_eq!(parse_speed(Some("NaN")), 0.0);
        assert_eq!(parse_speed(Some("inf")), 0.0);
        assert_eq!(parse_speed(Some("60")), 60.0);
        assert_eq!(parse_speed(Some(" -35 ")), -35.0);
        assert_eq!(parse_speed(Some("12.5")), 12.5);
    }
}
