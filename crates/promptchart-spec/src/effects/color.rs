use promptchart_common::Color;

/// Lighten (positive) or darken (negative) a `#rrggbb` color.
///
/// Any other format, including shorthand hex, `rgb()` and named colors,
/// comes back unchanged.
pub fn adjust_brightness(color: &str, percent: i32) -> String {
    match Color::from_hex(color) {
        Some(parsed) => parsed.brightened(percent).to_hex(),
        None => color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darkens_default_bar_color() {
        assert_eq!(adjust_brightness("#5470c6", -20), "#213d93");
    }

    #[test]
    fn lightens_and_clamps() {
        assert_eq!(adjust_brightness("#000000", 10), "#1a1a1a");
        assert_eq!(adjust_brightness("#f0f0f0", 50), "#ffffff");
        assert_eq!(adjust_brightness("#101010", -50), "#000000");
    }

    #[test]
    fn zero_percent_is_identity() {
        assert_eq!(adjust_brightness("#5470c6", 0), "#5470c6");
    }

    #[test]
    fn other_formats_pass_through() {
        for c in ["#fff", "red", "rgb(1, 2, 3)", "5470c6", "#5470c6ff", "#zzzzzz", ""] {
            assert_eq!(adjust_brightness(c, -20), c);
        }
    }

    #[test]
    fn channels_stay_in_range_for_any_percent() {
        for percent in [-1000, -101, -100, -37, 0, 37, 100, 101, 1000, i32::MIN, i32::MAX] {
            for color in ["#000000", "#ffffff", "#5470c6", "#7f7f7f"] {
                let out = adjust_brightness(color, percent);
                assert_eq!(out.len(), 7, "{color} {percent} -> {out}");
                assert!(promptchart_common::Color::from_hex(&out).is_some());
            }
        }
    }
}
