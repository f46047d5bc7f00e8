// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use crate::channel::Channel;
use crate::color_mode::ColorMode;
use crate::color_utils::{inverse_color, GRAY};
use crate::indicator::{format_indicator, IndicatorMode};

pub const DEFAULT_COLOR: u32 = GRAY;
pub const DEFAULT_MODE: ColorMode = ColorMode::Rgb;
pub const DEFAULT_INDICATOR: IndicatorMode = IndicatorMode::Decimal;
pub const DEFAULT_TEXT_INDICATOR_STATE: bool = false;

pub trait ButtonBarListener {
    fn on_positive_button_click(&mut self, color: u32);
    fn on_negative_button_click(&mut self);
}

/// Slider state of a color picker and the color it currently shows
#[derive(Debug, Clone)]
pub struct ColorPicker {
    color_mode: ColorMode,
    channels: Vec<Channel>,
    current_color: u32,
    indicator_mode: IndicatorMode,
    show_text_indicator: bool,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ColorPicker {
    pub fn new(
        initial_color: u32,
        show_text_indicator: bool,
        color_mode: ColorMode,
        indicator_mode: IndicatorMode,
    ) -> Self {
        let channels = color_mode.channels_for(initial_color);
        // the shown color is what the sliders produce, which can differ for lossy modes
        let current_color = color_mode.evaluate_color(&channels);
        Self {
            color_mode,
            channels,
            current_color,
            indicator_mode,
            show_text_indicator,
        }
    }

    pub fn with_mode(initial_color: u32, color_mode: ColorMode) -> Self {
        Self::new(
            initial_color,
            DEFAULT_TEXT_INDICATOR_STATE,
            color_mode,
            DEFAULT_INDICATOR,
        )
    }

    pub fn with_defaults() -> Self {
        Self::with_mode(DEFAULT_COLOR, DEFAULT_MODE)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn current_color(&self) -> u32 {
        self.current_color
    }

    pub fn indicator_mode(&self) -> IndicatorMode {
        self.indicator_mode
    }

    pub fn is_show_text_indicator(&self) -> bool {
        self.show_text_indicator
    }

    /// Move one slider and recompute the color.
    /// Values are clamped to the channel range, unknown indices leave the state untouched.
    pub fn set_channel_progress(&mut self, channel_idx: usize, value: i32) -> u32 {
        let Some(channel) = self.channels.get_mut(channel_idx) else {
            tracing::warn!(
                "Channel index {} is out of range for {} mode",
                channel_idx,
                self.color_mode
            );
            return self.current_color;
        };

        if channel.set_progress(value) {
            tracing::debug!(
                "Value {} for channel {} was clamped to {}",
                value,
                channel.name(),
                channel.progress()
            );
        }

        self.on_progress_changed();
        return self.current_color;
    }

    /// Same as `set_channel_progress`, the name is matched case-insensitively
    pub fn set_channel_progress_by_name(&mut self, channel_name: &str, value: i32) -> Option<u32> {
        let channel_idx = self
            .channels
            .iter()
            .position(|channel| channel.name().eq_ignore_ascii_case(channel_name))?;
        Some(self.set_channel_progress(channel_idx, value))
    }

    fn on_progress_changed(&mut self) {
        self.current_color = self.color_mode.evaluate_color(&self.channels);
    }

    pub fn indicator_text(&self) -> String {
        format_indicator(
            self.indicator_mode,
            self.color_mode,
            self.current_color,
            &self.channels,
        )
    }

    /// Color for the indicator text so it stays readable over the preview
    pub fn text_color(&self) -> u32 {
        inverse_color(self.current_color)
    }

    pub fn confirm(&self, listener: &mut dyn ButtonBarListener) {
        listener.on_positive_button_click(self.current_color);
    }

    pub fn cancel(&self, listener: &mut dyn ButtonBarListener) {
        listener.on_negative_button_click();
    }
}
