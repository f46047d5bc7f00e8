// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::channel::Channel;
use crate::color_mode::ColorMode;
use crate::color_utils::{format_color, ColorParseError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum IndicatorMode {
    #[default]
    Decimal,
    Hex,
}

impl FromStr for IndicatorMode {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" | "dec" => Ok(IndicatorMode::Decimal),
            "hex" => Ok(IndicatorMode::Hex),
            _ => Err(ColorParseError::UnknownIndicatorMode(s.to_string())),
        }
    }
}

/// Channel values separated by spaces, in slider order
pub fn format_decimal(channels: &[Channel]) -> String {
    channels
        .iter()
        .map(|channel| channel.progress().to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn format_indicator(
    indicator_mode: IndicatorMode,
    color_mode: ColorMode,
    color: u32,
    channels: &[Channel],
) -> String {
    match indicator_mode {
        IndicatorMode::Hex => format_color(color, color_mode.has_alpha()),
        IndicatorMode::Decimal => format_decimal(channels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_indicator_lists_channel_values() {
        let channels = ColorMode::Rgb.channels_for(0xFF102030);
        assert_eq!(
            format_indicator(IndicatorMode::Decimal, ColorMode::Rgb, 0xFF102030, &channels),
            "16 32 48"
        );
    }

    #[test]
    fn test_decimal_indicator_of_no_channels_is_empty() {
        assert_eq!(format_decimal(&[]), "");
    }

    #[test]
    fn test_hex_indicator_includes_alpha_only_for_alpha_modes() {
        let color = 0x80FF0000;

        let channels = ColorMode::Argb.channels_for(color);
        assert_eq!(
            format_indicator(IndicatorMode::Hex, ColorMode::Argb, color, &channels),
            "#80FF0000"
        );

        let channels = ColorMode::Rgb.channels_for(color);
        assert_eq!(
            format_indicator(IndicatorMode::Hex, ColorMode::Rgb, color, &channels),
            "#FF0000"
        );
    }

    #[test]
    fn test_indicator_mode_from_str() {
        assert_eq!("HEX".parse::<IndicatorMode>(), Ok(IndicatorMode::Hex));
        assert_eq!("dec".parse::<IndicatorMode>(), Ok(IndicatorMode::Decimal));
        assert!("octal".parse::<IndicatorMode>().is_err());
    }
}
