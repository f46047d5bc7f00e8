// Copyright (C) Pavel Grebnev 2023-2024
// Distributed under the MIT License (license terms are at http://opensource.org/licenses/MIT).

use std::fmt;

/// One slider of a color mode.
///
/// `progress` always stays inside `min..=max`, every setter clamps.
#[derive(Clone, Copy)]
pub struct Channel {
    name: &'static str,
    min: i32,
    max: i32,
    extractor: fn(u32) -> i32,
    progress: i32,
}

impl Channel {
    pub const fn new(name: &'static str, min: i32, max: i32, extractor: fn(u32) -> i32) -> Self {
        Self {
            name,
            min,
            max,
            extractor,
            progress: min,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn progress(&self) -> i32 {
        self.progress
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// Returns true if the value had to be clamped
    pub fn set_progress(&mut self, value: i32) -> bool {
        self.progress = self.clamp(value);
        return self.progress != value;
    }

    pub fn extract(&self, color: u32) -> i32 {
        self.clamp((self.extractor)(color))
    }

    pub fn set_from_color(&mut self, color: u32) {
        self.progress = self.extract(color);
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.set_from_color(color);
        self
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.name)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("progress", &self.progress)
            .finish()
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.min == other.min
            && self.max == other.max
            && self.progress == other.progress
    }
}

impl Eq for Channel {}
