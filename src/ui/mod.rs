pub mod compositor;
pub mod terminal;

pub use compositor::{Compositor, DisplayOptions, ReaderWidget};
pub use terminal::TerminalGuard;
