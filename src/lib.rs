//! Terminal RSVP reader: words flashed one at a time in block glyphs,
//! anchored on their optimal recognition point.

pub mod app;
pub mod config;
pub mod event;
pub mod playback;
pub mod render;
pub mod source;
pub mod store;
pub mod text;
pub mod ui;
