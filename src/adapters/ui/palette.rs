//! Segment colours, defined in HSL and converted to RGB for the terminal.

use crossterm::style::Color;

/// (hue°, saturation %, lightness %), cycled by segment index.
const WHEEL_HSL: [(f64, f64, f64); 12] = [
    (173.0, 80.0, 45.0),
    (190.0, 80.0, 50.0),
    (210.0, 70.0, 55.0),
    (230.0, 65.0, 60.0),
    (260.0, 60.0, 55.0),
    (290.0, 65.0, 55.0),
    (320.0, 70.0, 55.0),
    (350.0, 75.0, 55.0),
    (20.0, 80.0, 55.0),
    (45.0, 85.0, 55.0),
    (75.0, 75.0, 50.0),
    (120.0, 70.0, 45.0),
];

/// HSL (h in degrees, s/l in percent) to 8-bit RGB.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let s = s / 100.0;
    let l = l / 100.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_u8(r1), to_u8(g1), to_u8(b1))
}

pub fn segment_rgb(index: usize) -> (u8, u8, u8) {
    let (h, s, l) = WHEEL_HSL[index % WHEEL_HSL.len()];
    hsl_to_rgb(h, s, l)
}

pub fn segment_color(index: usize) -> Color {
    let (r, g, b) = segment_rgb(index);
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues_convert_exactly() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), (0, 0, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 100.0), (255, 255, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), (0, 0, 0));
    }

    #[test]
    fn palette_cycles_after_twelve() {
        assert_eq!(segment_rgb(0), segment_rgb(12));
        assert_ne!(segment_rgb(0), segment_rgb(1));
    }

    #[test]
    fn first_segment_is_teal() {
        let (r, g, b) = segment_rgb(0);
        assert!(g > r && b > r, "expected teal, got ({}, {}, {})", r, g, b);
    }
}
