use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use crate::config::Config;
use crate::event;
use crate::playback::controller::{BookmarkTarget, Controller, Outcome, Termination};
use crate::playback::state::PlaybackState;
use crate::render::RenderOptions;
use crate::source::read_source;
use crate::store::bookmarks::BookmarkStore;
use crate::text::{longest_word_len, tokenize};
use crate::ui::{Compositor, DisplayOptions, TerminalGuard};

/// Load the input, play it in the terminal, then print the session report.
pub fn run(config: &Config, input: Option<&str>, resume: bool) -> Result<Outcome> {
    let source = read_source(input)?;
    let words = tokenize(&source.text)?;
    info!("loaded {:?}: {} words", source.kind, words.len());

    let bookmark = source.kind.bookmark_path().and_then(|path| {
        let Some(store) = BookmarkStore::new() else {
            warn!("no config directory; bookmarks disabled");
            return None;
        };
        Some(BookmarkTarget {
            store,
            path: path.clone(),
        })
    });

    let start = match &bookmark {
        Some(target) if resume => {
            let saved = target.store.load(&target.path);
            let stdin = io::stdin();
            let accepted = offer_resume(saved, words.len(), &mut stdin.lock(), &mut io::stdout())?;
            if accepted { saved } else { 0 }
        }
        _ => 0,
    };

    let state = Arc::new(PlaybackState::new(words.len(), start, config.wpm));
    let options = DisplayOptions {
        render: RenderOptions {
            focal: config.focal,
            scale_policy: config.scale_reference.policy(longest_word_len(&words)),
        },
        focal_color: config.focal_color().color(),
        context: config.context,
    };

    let mut guard = TerminalGuard::enter()?;
    let compositor = Compositor::new(guard.backend(), options)?;

    let (tx, rx) = mpsc::channel();
    // The listener blocks on the terminal; it is left to die with the process.
    let _listener = event::spawn_listener(Arc::clone(&state), tx);

    let mut controller = Controller::new(
        &words,
        state,
        rx,
        compositor,
        Duration::from_millis(config.punct_pause_ms),
    )
    .with_bookmark(bookmark);
    let outcome = controller.run();
    guard.restore();
    let outcome = outcome?;

    let mut stdout = io::stdout().lock();
    if outcome.termination == Termination::Interrupted {
        write!(stdout, "Interrupted. Position saved.\r\n")?;
    }
    write!(stdout, "{}", outcome.report)?;
    stdout.flush()?;
    Ok(outcome)
}

/// Ask whether to pick up at `saved`. Only asked for `0 < saved < total`;
/// otherwise playback starts from the top without a prompt.
pub fn offer_resume<R: BufRead, W: Write>(
    saved: usize,
    total: usize,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    if saved == 0 || saved >= total {
        return Ok(false);
    }
    let pct = saved as f64 / total as f64 * 100.0;
    write!(
        output,
        "Found bookmark at word {}/{} ({pct:.0}%). Resume? [Y/n] ",
        saved + 1,
        total
    )?;
    output.flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;
    Ok(accepts_resume(&response))
}

fn accepts_resume(response: &str) -> bool {
    let response = response.trim();
    response.is_empty() || response.eq_ignore_ascii_case("y")
}
