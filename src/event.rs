use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::playback::controller::Signal;
use crate::playback::state::{PlaybackState, WPM_STEP};

const READ_RETRY: Duration = Duration::from_millis(10);

/// A single reader keystroke, decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SpeedUp,
    SlowDown,
    Forward,
    Back,
    TogglePause,
    JumpTenth(u8),
    Quit,
}

impl Command {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Up => Some(Command::SpeedUp),
            KeyCode::Down => Some(Command::SlowDown),
            KeyCode::Right => Some(Command::Forward),
            KeyCode::Left => Some(Command::Back),
            KeyCode::Char(' ') => Some(Command::TogglePause),
            KeyCode::Char(c @ '0'..='9') => Some(Command::JumpTenth(c as u8 - b'0')),
            _ => None,
        }
    }

    /// Mutate the shared state and say what the display loop should do about it.
    pub fn apply(self, state: &PlaybackState) -> Signal {
        match self {
            Command::SpeedUp => {
                state.adjust_wpm(WPM_STEP);
            }
            Command::SlowDown => {
                state.adjust_wpm(-WPM_STEP);
            }
            Command::Forward => {
                state.step(1);
            }
            Command::Back => {
                state.step(-1);
            }
            Command::TogglePause => {
                state.toggle_pause();
            }
            Command::JumpTenth(digit) => {
                state.jump_to_tenth(digit);
            }
            Command::Quit => return Signal::Quit,
        }
        Signal::Nudge
    }
}

/// Read terminal events on a background thread until quit or the display
/// loop hangs up.
pub fn spawn_listener(state: Arc<PlaybackState>, tx: Sender<Signal>) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            let signal = match event::read() {
                Ok(Event::Key(key)) => match Command::from_key(key) {
                    Some(command) => command.apply(&state),
                    None => continue,
                },
                Ok(Event::Resize(_, _)) => Signal::Nudge,
                Ok(_) => continue,
                Err(err) => {
                    debug!("terminal read failed: {err}");
                    thread::sleep(READ_RETRY);
                    continue;
                }
            };
            if tx.send(signal).is_err() || signal == Signal::Quit {
                return;
            }
        }
    })
}
