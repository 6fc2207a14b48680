use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use log::{info, warn};

use crate::playback::pacing::word_delay;
use crate::playback::state::{Advance, PlaybackState};
use crate::playback::stats::{SessionReport, SessionStats};
use crate::store::bookmarks::BookmarkStore;
use crate::text::Word;

/// Repaint interval while paused when no key arrives.
pub const PAUSE_POLL: Duration = Duration::from_millis(100);

/// Messages from the key listener to the display loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// Shared state changed; repaint if idle.
    Nudge,
    /// Stop now and save the position.
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Completed,
    Interrupted,
}

#[derive(Clone, Debug)]
pub struct Outcome {
    pub termination: Termination,
    pub index: usize,
    pub report: SessionReport,
}

/// Everything needed to paint one tick.
pub struct ReaderView<'a> {
    pub words: &'a [Word],
    pub index: usize,
    pub wpm: u32,
    pub paused: bool,
}

impl ReaderView<'_> {
    pub fn word(&self) -> &Word {
        &self.words[self.index]
    }

    pub fn remaining(&self) -> usize {
        self.words.len().saturating_sub(self.index + 1)
    }
}

/// The single writer to the terminal.
pub trait Screen {
    fn draw(&mut self, view: &ReaderView<'_>) -> Result<()>;
}

/// Where the reading position is persisted for this session.
pub struct BookmarkTarget {
    pub store: BookmarkStore,
    pub path: PathBuf,
}

enum Wake {
    Elapsed,
    Nudged,
    Quit,
}

pub struct Controller<'a, S: Screen> {
    words: &'a [Word],
    state: Arc<PlaybackState>,
    signals: Receiver<Signal>,
    screen: S,
    punct_pause: Duration,
    bookmark: Option<BookmarkTarget>,
}

impl<'a, S: Screen> Controller<'a, S> {
    pub fn new(
        words: &'a [Word],
        state: Arc<PlaybackState>,
        signals: Receiver<Signal>,
        screen: S,
        punct_pause: Duration,
    ) -> Self {
        Self {
            words,
            state,
            signals,
            screen,
            punct_pause,
            bookmark: None,
        }
    }

    pub fn with_bookmark(mut self, bookmark: Option<BookmarkTarget>) -> Self {
        self.bookmark = bookmark;
        self
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn run(&mut self) -> Result<Outcome> {
        let mut stats = SessionStats::start();

        loop {
            if self.state.is_paused() {
                stats.begin_pause(Instant::now());
                while self.state.is_paused() {
                    self.draw(self.state.index(), true)?;
                    if let Wake::Quit = self.wait(PAUSE_POLL, true) {
                        return Ok(self.finish(Termination::Interrupted, &mut stats));
                    }
                }
                stats.end_pause(Instant::now());
            }

            let index = self.state.index();
            self.draw(index, false)?;

            let delay = word_delay(&self.words[index], self.state.wpm(), self.punct_pause);
            if let Wake::Quit = self.wait(delay, false) {
                return Ok(self.finish(Termination::Interrupted, &mut stats));
            }

            match self.state.try_advance(index) {
                Advance::Moved => stats.record_word(),
                Advance::Finished => {
                    stats.record_word();
                    return Ok(self.finish(Termination::Completed, &mut stats));
                }
                Advance::Superseded => {}
            }
        }
    }

    fn draw(&mut self, index: usize, paused: bool) -> Result<()> {
        let view = ReaderView {
            words: self.words,
            index,
            wpm: self.state.wpm(),
            paused,
        };
        self.screen.draw(&view)
    }

    /// Block for up to `timeout`. Nudges cut the wait short only when
    /// `wake_on_nudge` is set; a quit always does.
    fn wait(&self, timeout: Duration, wake_on_nudge: bool) -> Wake {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Wake::Elapsed;
            }
            match self.signals.recv_timeout(remaining) {
                Ok(Signal::Quit) => return Wake::Quit,
                Ok(Signal::Nudge) if wake_on_nudge => return Wake::Nudged,
                Ok(Signal::Nudge) => {}
                Err(RecvTimeoutError::Timeout) => return Wake::Elapsed,
                Err(RecvTimeoutError::Disconnected) => {
                    thread::sleep(remaining);
                    return Wake::Elapsed;
                }
            }
        }
    }

    fn finish(&self, termination: Termination, stats: &mut SessionStats) -> Outcome {
        let index = self.state.index();
        if let Some(target) = &self.bookmark {
            let saved = match termination {
                Termination::Completed => 0,
                Termination::Interrupted => index,
            };
            if let Err(err) = target.store.save(&target.path, saved) {
                warn!("could not save bookmark for {}: {err:#}", target.path.display());
            }
        }

        let report = stats.finish(Instant::now());
        info!(
            "playback ended: {termination:?} at word {}/{} ({} read)",
            index + 1,
            self.words.len(),
            report.words_read
        );
        Outcome {
            termination,
            index,
            report,
        }
    }
}
