mod central_panel;
mod glyph_prompt;
mod tools_panel;

pub use central_panel::central_panel;
pub use glyph_prompt::glyph_prompt_window;
pub use tools_panel::tools_panel;
