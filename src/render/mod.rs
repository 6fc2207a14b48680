pub mod status;
pub mod word;

pub use word::{RenderOptions, RenderedFrame, ScalePolicy, orp_index, render_word, scale_factor};
