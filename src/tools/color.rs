use egui::Color32;

/// Largest channel value, reached at 100% on a slider
pub const CHANNEL_MAX: f32 = 255.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    pub const ALL: [ColorChannel; 3] = [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue];

    pub fn label(self) -> &'static str {
        match self {
            ColorChannel::Red => "R",
            ColorChannel::Green => "G",
            ColorChannel::Blue => "B",
        }
    }

    pub fn value(self, color: Color32) -> u8 {
        match self {
            ColorChannel::Red => color.r(),
            ColorChannel::Green => color.g(),
            ColorChannel::Blue => color.b(),
        }
    }

    /// `color` with this channel replaced by `value`
    pub fn with_value(self, color: Color32, value: u8) -> Color32 {
        let (r, g, b) = (color.r(), color.g(), color.b());
        match self {
            ColorChannel::Red => Color32::from_rgb(value, g, b),
            ColorChannel::Green => Color32::from_rgb(r, value, b),
            ColorChannel::Blue => Color32::from_rgb(r, g, value),
        }
    }
}

/// Map a 0-100 slider position to a 0-255 channel value (factor 2.55)
pub fn percent_to_channel(percent: f32) -> u8 {
    // Divide last: `2.55_f32` is slightly below 2.55 and would round 50% down.
    (percent.clamp(0.0, 100.0) * CHANNEL_MAX / 100.0).round() as u8
}

/// Slider position that corresponds to a channel value
pub fn channel_to_percent(value: u8) -> f32 {
    value as f32 * 100.0 / CHANNEL_MAX
}
