mod color_slider;

pub use color_slider::{ColorSlider, fill_fraction};
