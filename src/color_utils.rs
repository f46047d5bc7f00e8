// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use thiserror::Error;

pub const GRAY: u32 = 0xFF888888;
pub const BLACK: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length {0}, expected 6 or 8 digits")]
    InvalidLength(usize),
    #[error("invalid hex digits in '{0}'")]
    InvalidHex(String),
    #[error("unknown color mode '{0}'")]
    UnknownColorMode(String),
    #[error("unknown indicator mode '{0}'")]
    UnknownIndicatorMode(String),
}

pub fn alpha(color: u32) -> u8 {
    (color >> 24) as u8
}

pub fn red(color: u32) -> u8 {
    (color >> 16) as u8
}

pub fn green(color: u32) -> u8 {
    (color >> 8) as u8
}

pub fn blue(color: u32) -> u8 {
    color as u8
}

pub fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

// components outside of 0..=255 are saturated
pub fn argb_clamped(a: i32, r: i32, g: i32, b: i32) -> u32 {
    let clamp = |x: i32| x.clamp(0, 255) as u8;
    argb(clamp(a), clamp(r), clamp(g), clamp(b))
}

/// Format a packed color as `#AARRGGBB` or `#RRGGBB`
pub fn format_color(color: u32, include_alpha: bool) -> String {
    if include_alpha {
        format!("#{:08X}", color)
    } else {
        format!("#{:06X}", color & 0x00FFFFFF)
    }
}

/// Parse `#RRGGBB` or `#AARRGGBB`, the leading `#` is optional.
/// Colors without alpha are treated as opaque.
pub fn parse_color(text: &str) -> Result<u32, ColorParseError> {
    let hex = text.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(text.to_string()));
    }

    let value = u32::from_str_radix(hex, 16)
        .map_err(|_| ColorParseError::InvalidHex(text.to_string()))?;
    return match hex.len() {
        6 => Ok(0xFF000000 | value),
        8 => Ok(value),
        len => Err(ColorParseError::InvalidLength(len)),
    };
}

/// Each color channel replaced by `255 - value`, alpha is kept
pub fn inverse_color(color: u32) -> u32 {
    color ^ 0x00FFFFFF
}

fn round_half_up(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

/// `hue` in degrees, `saturation` and `value` in 0.0..=1.0
pub fn hsv_to_color(alpha: u8, hue: f32, saturation: f32, value: f32) -> u32 {
    let saturation = saturation.clamp(0.0, 1.0);
    let value = value.clamp(0.0, 1.0);

    let v = round_half_up(value * 255.0);
    if saturation <= 0.0 {
        return argb_clamped(alpha as i32, v, v, v);
    }

    let hue_sector = if hue < 0.0 || hue >= 360.0 {
        0.0
    } else {
        hue / 60.0
    };
    let sector = hue_sector.floor();
    let fraction = hue_sector - sector;

    let p = round_half_up((1.0 - saturation) * value * 255.0);
    let q = round_half_up((1.0 - saturation * fraction) * value * 255.0);
    let t = round_half_up((1.0 - saturation * (1.0 - fraction)) * value * 255.0);

    let (r, g, b) = match sector as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    argb_clamped(alpha as i32, r, g, b)
}

/// Returns `[hue, saturation, value]`, hue in degrees, the rest in 0.0..=1.0
pub fn color_to_hsv(color: u32) -> [f32; 3] {
    let r = red(color) as f32;
    let g = green(color) as f32;
    let b = blue(color) as f32;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let value = max / 255.0;
    if delta == 0.0 {
        return [0.0, 0.0, value];
    }

    let saturation = delta / max;
    let hue = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let mut hue = hue * 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }

    [hue, saturation, value]
}

/// `hue` in degrees, `saturation` and `lightness` in 0.0..=1.0
pub fn hsl_to_color(alpha: u8, hue: f32, saturation: f32, lightness: f32) -> u32 {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let m = lightness - 0.5 * chroma;
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());

    let (r, g, b) = match (hue / 60.0) as i32 {
        0 => (chroma + m, x + m, m),
        1 => (x + m, chroma + m, m),
        2 => (m, chroma + m, x + m),
        3 => (m, x + m, chroma + m),
        4 => (x + m, m, chroma + m),
        _ => (chroma + m, m, x + m),
    };

    argb_clamped(
        alpha as i32,
        round_half_up(r * 255.0),
        round_half_up(g * 255.0),
        round_half_up(b * 255.0),
    )
}

/// Returns `[hue, saturation, lightness]`, hue in degrees, the rest in 0.0..=1.0
pub fn color_to_hsl(color: u32) -> [f32; 3] {
    let r = red(color) as f32 / 255.0;
    let g = green(color) as f32 / 255.0;
    let b = blue(color) as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let lightness = (max + min) / 2.0;

    let (hue, saturation) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let hue = if max == r {
            ((g - b) / delta) % 6.0
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        (hue, delta / (1.0 - (2.0 * lightness - 1.0).abs()))
    };

    let mut hue = (hue * 60.0) % 360.0;
    if hue < 0.0 {
        hue += 360.0;
    }

    [
        hue.clamp(0.0, 360.0),
        saturation.clamp(0.0, 1.0),
        lightness.clamp(0.0, 1.0),
    ]
}

/// `cyan`, `magenta`, `yellow` and `key` are fractions of `scale`
pub fn cmyk_to_color(cyan: i32, magenta: i32, yellow: i32, key: i32, scale: i32) -> u32 {
    let scale = scale as f32;
    let key_factor = 1.0 - key as f32 / scale;
    let component = |x: i32| (255.0 * (1.0 - x as f32 / scale) * key_factor) as i32;
    argb_clamped(0xFF, component(cyan), component(magenta), component(yellow))
}

/// Returns `[cyan, magenta, yellow, key]` scaled to `0..=scale` and truncated
pub fn color_to_cmyk(color: u32, scale: i32) -> [i32; 4] {
    let r = red(color) as f32 / 255.0;
    let g = green(color) as f32 / 255.0;
    let b = blue(color) as f32 / 255.0;

    let key = 1.0 - r.max(g).max(b);
    let scale_f = scale as f32;
    if key >= 1.0 {
        // pure black, the other channels are undefined
        return [0, 0, 0, scale];
    }

    let component = |x: f32| ((1.0 - x - key) / (1.0 - key) * scale_f) as i32;
    [
        component(r),
        component(g),
        component(b),
        (key * scale_f) as i32,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_argb_packs_channels_in_order() {
        assert_eq!(argb(0x12, 0x34, 0x56, 0x78), 0x12345678);
        assert_eq!(argb(0xFF, 0xFF, 0x00, 0x00), 0xFFFF0000);
    }

    #[test]
    fn test_channel_accessors_unpack_argb() {
        let color = 0x80C0FF10;
        assert_eq!(alpha(color), 0x80);
        assert_eq!(red(color), 0xC0);
        assert_eq!(green(color), 0xFF);
        assert_eq!(blue(color), 0x10);
    }

    #[test]
    fn test_argb_clamped_saturates_out_of_range_components() {
        assert_eq!(argb_clamped(300, -5, 128, 256), 0xFF0080FF);
    }

    #[test]
    fn test_format_color_with_alpha_keeps_channel_order() {
        assert_eq!(format_color(0xFF0000FF, true), "#FF0000FF");
        assert_eq!(format_color(0x0A0B0C0D, true), "#0A0B0C0D");
    }

    #[test]
    fn test_format_color_without_alpha_drops_alpha_byte() {
        assert_eq!(format_color(0xFF0000FF, false), "#0000FF");
        assert_eq!(format_color(GRAY, false), "#888888");
    }

    #[test]
    fn test_parse_color_accepts_short_and_long_forms() {
        assert_eq!(parse_color("#888888"), Ok(GRAY));
        assert_eq!(parse_color("80ff0000"), Ok(0x80FF0000));
        assert_eq!(parse_color(" #aBcDeF "), Ok(0xFFABCDEF));
    }

    #[test]
    fn test_parse_color_rejects_invalid_input() {
        assert_eq!(parse_color("#"), Err(ColorParseError::Empty));
        assert_eq!(parse_color("#12345"), Err(ColorParseError::InvalidLength(5)));
        assert_eq!(
            parse_color("#12345G"),
            Err(ColorParseError::InvalidHex("#12345G".to_string()))
        );
        assert_eq!(
            parse_color("+1234567"),
            Err(ColorParseError::InvalidHex("+1234567".to_string()))
        );
    }

    #[test]
    fn test_inverse_color_keeps_alpha() {
        assert_eq!(inverse_color(0x80FF0000), 0x8000FFFF);
        assert_eq!(inverse_color(BLACK), WHITE);
        assert_eq!(inverse_color(GRAY), 0xFF777777);
    }

    #[test]
    fn test_inverse_color_twice_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let color: u32 = rng.random();
            assert_eq!(inverse_color(inverse_color(color)), color);
        }
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_color(0xFF, 0.0, 1.0, 1.0), 0xFFFF0000);
        assert_eq!(hsv_to_color(0xFF, 120.0, 1.0, 1.0), 0xFF00FF00);
        assert_eq!(hsv_to_color(0xFF, 240.0, 1.0, 1.0), 0xFF0000FF);
        assert_eq!(hsv_to_color(0xFF, 60.0, 1.0, 1.0), 0xFFFFFF00);
        assert_eq!(hsv_to_color(0x40, 300.0, 1.0, 1.0), 0x40FF00FF);
    }

    #[test]
    fn test_hsv_without_saturation_is_gray() {
        assert_eq!(hsv_to_color(0xFF, 200.0, 0.0, 1.0), WHITE);
        assert_eq!(hsv_to_color(0xFF, 200.0, 0.0, 0.0), BLACK);
    }

    #[test]
    fn test_hsv_full_circle_hue_wraps_to_red() {
        assert_eq!(hsv_to_color(0xFF, 360.0, 1.0, 1.0), 0xFFFF0000);
    }

    #[test]
    fn test_color_to_hsv_of_primaries() {
        assert_eq!(color_to_hsv(0xFFFF0000), [0.0, 1.0, 1.0]);
        assert_eq!(color_to_hsv(0xFF00FF00), [120.0, 1.0, 1.0]);
        assert_eq!(color_to_hsv(0xFF0000FF), [240.0, 1.0, 1.0]);
        assert_eq!(color_to_hsv(BLACK), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_color_to_hsv_magenta_hue_is_positive() {
        assert_eq!(color_to_hsv(0xFFFF00FF)[0], 300.0);
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_color(0xFF, 0.0, 1.0, 0.5), 0xFFFF0000);
        assert_eq!(hsl_to_color(0xFF, 120.0, 1.0, 0.5), 0xFF00FF00);
        assert_eq!(hsl_to_color(0xFF, 240.0, 1.0, 0.5), 0xFF0000FF);
        assert_eq!(hsl_to_color(0xFF, 0.0, 0.0, 1.0), WHITE);
        assert_eq!(hsl_to_color(0xFF, 0.0, 0.0, 0.0), BLACK);
    }

    #[test]
    fn test_color_to_hsl_of_primaries() {
        assert_eq!(color_to_hsl(0xFFFF0000), [0.0, 1.0, 0.5]);
        assert_eq!(color_to_hsl(0xFF0000FF), [240.0, 1.0, 0.5]);
        assert_eq!(color_to_hsl(WHITE), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_cmyk_to_color() {
        assert_eq!(cmyk_to_color(0, 0, 0, 0, 100), WHITE);
        assert_eq!(cmyk_to_color(0, 0, 0, 100, 100), BLACK);
        assert_eq!(cmyk_to_color(0, 100, 100, 0, 100), 0xFFFF0000);
        assert_eq!(cmyk_to_color(255, 0, 255, 0, 255), 0xFF00FF00);
    }

    #[test]
    fn test_color_to_cmyk() {
        assert_eq!(color_to_cmyk(0xFFFF0000, 100), [0, 100, 100, 0]);
        assert_eq!(color_to_cmyk(WHITE, 255), [0, 0, 0, 0]);
    }

    #[test]
    fn test_color_to_cmyk_of_black_has_only_key() {
        assert_eq!(color_to_cmyk(BLACK, 100), [0, 0, 0, 100]);
        assert_eq!(color_to_cmyk(BLACK, 255), [0, 0, 0, 255]);
    }
}
