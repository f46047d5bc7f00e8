// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::channel::Channel;
use crate::color_utils::{
    alpha, argb_clamped, blue, cmyk_to_color, color_to_cmyk, color_to_hsl, color_to_hsv, green,
    hsl_to_color, hsv_to_color, red, ColorParseError,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum ColorMode {
    #[default]
    #[serde(rename = "RGB")]
    Rgb,
    #[serde(rename = "ARGB")]
    Argb,
    #[serde(rename = "HSV")]
    Hsv,
    #[serde(rename = "AHSV")]
    Ahsv,
    #[serde(rename = "HSL")]
    Hsl,
    #[serde(rename = "CMYK")]
    Cmyk,
    #[serde(rename = "CMYK255")]
    Cmyk255,
}

pub const ALL_COLOR_MODES: [ColorMode; 7] = [
    ColorMode::Rgb,
    ColorMode::Argb,
    ColorMode::Hsv,
    ColorMode::Ahsv,
    ColorMode::Hsl,
    ColorMode::Cmyk,
    ColorMode::Cmyk255,
];

const PERCENT: i32 = 100;
const BYTE: i32 = 255;
const DEGREES: i32 = 360;

fn extract_alpha(color: u32) -> i32 {
    alpha(color) as i32
}

fn extract_red(color: u32) -> i32 {
    red(color) as i32
}

fn extract_green(color: u32) -> i32 {
    green(color) as i32
}

fn extract_blue(color: u32) -> i32 {
    blue(color) as i32
}

fn extract_hsv_hue(color: u32) -> i32 {
    color_to_hsv(color)[0] as i32
}

fn extract_hsv_saturation(color: u32) -> i32 {
    (color_to_hsv(color)[1] * PERCENT as f32) as i32
}

fn extract_hsv_value(color: u32) -> i32 {
    (color_to_hsv(color)[2] * PERCENT as f32) as i32
}

fn extract_hsl_hue(color: u32) -> i32 {
    color_to_hsl(color)[0] as i32
}

fn extract_hsl_saturation(color: u32) -> i32 {
    (color_to_hsl(color)[1] * PERCENT as f32) as i32
}

fn extract_hsl_lightness(color: u32) -> i32 {
    (color_to_hsl(color)[2] * PERCENT as f32) as i32
}

fn extract_cyan(color: u32) -> i32 {
    color_to_cmyk(color, PERCENT)[0]
}

fn extract_magenta(color: u32) -> i32 {
    color_to_cmyk(color, PERCENT)[1]
}

fn extract_yellow(color: u32) -> i32 {
    color_to_cmyk(color, PERCENT)[2]
}

fn extract_key(color: u32) -> i32 {
    color_to_cmyk(color, PERCENT)[3]
}

fn extract_cyan_255(color: u32) -> i32 {
    color_to_cmyk(color, BYTE)[0]
}

fn extract_magenta_255(color: u32) -> i32 {
    color_to_cmyk(color, BYTE)[1]
}

fn extract_yellow_255(color: u32) -> i32 {
    color_to_cmyk(color, BYTE)[2]
}

fn extract_key_255(color: u32) -> i32 {
    color_to_cmyk(color, BYTE)[3]
}

const RGB_CHANNELS: [Channel; 3] = [
    Channel::new("R", 0, BYTE, extract_red),
    Channel::new("G", 0, BYTE, extract_green),
    Channel::new("B", 0, BYTE, extract_blue),
];

const ARGB_CHANNELS: [Channel; 4] = [
    Channel::new("A", 0, BYTE, extract_alpha),
    Channel::new("R", 0, BYTE, extract_red),
    Channel::new("G", 0, BYTE, extract_green),
    Channel::new("B", 0, BYTE, extract_blue),
];

const HSV_CHANNELS: [Channel; 3] = [
    Channel::new("H", 0, DEGREES, extract_hsv_hue),
    Channel::new("S", 0, PERCENT, extract_hsv_saturation),
    Channel::new("V", 0, PERCENT, extract_hsv_value),
];

const AHSV_CHANNELS: [Channel; 4] = [
    Channel::new("A", 0, BYTE, extract_alpha),
    Channel::new("H", 0, DEGREES, extract_hsv_hue),
    Channel::new("S", 0, PERCENT, extract_hsv_saturation),
    Channel::new("V", 0, PERCENT, extract_hsv_value),
];

const HSL_CHANNELS: [Channel; 3] = [
    Channel::new("H", 0, DEGREES, extract_hsl_hue),
    Channel::new("S", 0, PERCENT, extract_hsl_saturation),
    Channel::new("L", 0, PERCENT, extract_hsl_lightness),
];

const CMYK_CHANNELS: [Channel; 4] = [
    Channel::new("C", 0, PERCENT, extract_cyan),
    Channel::new("M", 0, PERCENT, extract_magenta),
    Channel::new("Y", 0, PERCENT, extract_yellow),
    Channel::new("K", 0, PERCENT, extract_key),
];

const CMYK_255_CHANNELS: [Channel; 4] = [
    Channel::new("C", 0, BYTE, extract_cyan_255),
    Channel::new("M", 0, BYTE, extract_magenta_255),
    Channel::new("Y", 0, BYTE, extract_yellow_255),
    Channel::new("K", 0, BYTE, extract_key_255),
];

impl ColorMode {
    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Rgb => "RGB",
            ColorMode::Argb => "ARGB",
            ColorMode::Hsv => "HSV",
            ColorMode::Ahsv => "AHSV",
            ColorMode::Hsl => "HSL",
            ColorMode::Cmyk => "CMYK",
            ColorMode::Cmyk255 => "CMYK255",
        }
    }

    fn channel_definitions(&self) -> &'static [Channel] {
        match self {
            ColorMode::Rgb => &RGB_CHANNELS,
            ColorMode::Argb => &ARGB_CHANNELS,
            ColorMode::Hsv => &HSV_CHANNELS,
            ColorMode::Ahsv => &AHSV_CHANNELS,
            ColorMode::Hsl => &HSL_CHANNELS,
            ColorMode::Cmyk => &CMYK_CHANNELS,
            ColorMode::Cmyk255 => &CMYK_255_CHANNELS,
        }
    }

    /// Channels in slider order, each set to its minimum
    pub fn channels(&self) -> Vec<Channel> {
        self.channel_definitions().to_vec()
    }

    /// Channels in slider order, set to represent `color`
    pub fn channels_for(&self, color: u32) -> Vec<Channel> {
        self.channel_definitions()
            .iter()
            .map(|channel| channel.with_color(color))
            .collect()
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, ColorMode::Argb | ColorMode::Ahsv)
    }

    pub fn evaluate_color(&self, channels: &[Channel]) -> u32 {
        let values: Vec<i32> = channels.iter().map(Channel::progress).collect();
        self.evaluate_values(&values)
    }

    /// Values are clamped to the channel bounds before packing.
    /// Missing values are treated as the channel minimum, extra ones are ignored.
    pub fn evaluate_values(&self, values: &[i32]) -> u32 {
        let definitions = self.channel_definitions();
        if values.len() != definitions.len() {
            tracing::debug!(
                "{} expects {} channel values, got {}",
                self.name(),
                definitions.len(),
                values.len()
            );
        }

        let clamped: Vec<i32> = definitions
            .iter()
            .enumerate()
            .map(|(idx, channel)| channel.clamp(values.get(idx).copied().unwrap_or(channel.min())))
            .collect();

        let color = self.pack(&clamped);
        tracing::trace!("{} {:?} -> {:08X}", self.name(), clamped, color);
        return color;
    }

    /// Inverse of `evaluate_values`, exact for RGB and ARGB
    pub fn decompose(&self, color: u32) -> Vec<i32> {
        self.channel_definitions()
            .iter()
            .map(|channel| channel.extract(color))
            .collect()
    }

    // expects exactly one in-range value per channel
    fn pack(&self, v: &[i32]) -> u32 {
        let fraction = |x: i32| x as f32 / PERCENT as f32;
        match self {
            ColorMode::Rgb => argb_clamped(BYTE, v[0], v[1], v[2]),
            ColorMode::Argb => argb_clamped(v[0], v[1], v[2], v[3]),
            ColorMode::Hsv => hsv_to_color(0xFF, v[0] as f32, fraction(v[1]), fraction(v[2])),
            ColorMode::Ahsv => {
                hsv_to_color(v[0] as u8, v[1] as f32, fraction(v[2]), fraction(v[3]))
            }
            ColorMode::Hsl => hsl_to_color(0xFF, v[0] as f32, fraction(v[1]), fraction(v[2])),
            ColorMode::Cmyk => cmyk_to_color(v[0], v[1], v[2], v[3], PERCENT),
            ColorMode::Cmyk255 => cmyk_to_color(v[0], v[1], v[2], v[3], BYTE),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_COLOR_MODES
            .iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ColorParseError::UnknownColorMode(s.to_string()))
    }
}
