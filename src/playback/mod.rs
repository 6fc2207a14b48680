pub mod controller;
pub mod pacing;
pub mod state;
pub mod stats;

pub use controller::{Controller, Outcome, ReaderView, Screen, Signal, Termination};
pub use state::{Advance, PlaybackState};
