// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

pub mod app_arguments;
pub mod channel;
pub mod color_mode;
pub mod color_utils;
pub mod config;
pub mod config_updaters;
pub mod indicator;
pub mod json_config_updater;
pub mod picker;

pub use channel::Channel;
pub use color_mode::ColorMode;
pub use color_utils::{format_color, inverse_color, parse_color, ColorParseError};
pub use indicator::IndicatorMode;
pub use picker::{ButtonBarListener, ColorPicker};

/// Packs channel values of `color_mode` into a `0xAARRGGBB` color, clamping out of range values
pub fn evaluate_color(color_mode: ColorMode, channel_values: &[i32]) -> u32 {
    color_mode.evaluate_values(channel_values)
}
