use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};

pub const MIN_WPM: u32 = 10;
pub const MAX_WPM: u32 = 1000;
/// WPM change per speed key press.
pub const WPM_STEP: i32 = 25;

/// Result of the controller's end-of-tick advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Index moved from the observed word to the next one.
    Moved,
    /// The index changed under us during the tick; the listener's value stands.
    Superseded,
    /// The observed word was the last one and nobody moved away from it.
    Finished,
}

/// Playback state shared between the display loop and the key listener.
///
/// Each field is its own atomic. There is no cross-field consistency: a
/// reader may see a fresh index next to a stale wpm, which is fine because
/// every consumer uses the fields independently.
#[derive(Debug)]
pub struct PlaybackState {
    index: AtomicUsize,
    wpm: AtomicU32,
    paused: AtomicBool,
    total: usize,
}

pub fn clamp_wpm(wpm: u32) -> u32 {
    wpm.clamp(MIN_WPM, MAX_WPM)
}

impl PlaybackState {
    /// `total` must be at least 1; `start` is clamped into range.
    pub fn new(total: usize, start: usize, wpm: u32) -> Self {
        let total = total.max(1);
        Self {
            index: AtomicUsize::new(start.min(total - 1)),
            wpm: AtomicU32::new(clamp_wpm(wpm)),
            paused: AtomicBool::new(false),
            total,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn index(&self) -> usize {
        self.index.load(Ordering::Acquire)
    }

    pub fn wpm(&self) -> u32 {
        self.wpm.load(Ordering::Relaxed)
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    pub fn toggle_pause(&self) -> bool {
        !self.paused.fetch_xor(true, Ordering::AcqRel)
    }

    pub fn adjust_wpm(&self, delta: i32) -> u32 {
        let update = |wpm: u32| Some(clamp_wpm(wpm.saturating_add_signed(delta)));
        let prev = self
            .wpm
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, update)
            .unwrap_or_else(|current| current);
        clamp_wpm(prev.saturating_add_signed(delta))
    }

    /// Move the index by `delta` words, clamped to the document.
    pub fn step(&self, delta: isize) -> usize {
        let last = self.total - 1;
        let update = |index: usize| Some(index.saturating_add_signed(delta).min(last));
        let prev = self
            .index
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, update)
            .unwrap_or_else(|current| current);
        prev.saturating_add_signed(delta).min(last)
    }

    /// Jump to `digit * 10%` of the document.
    pub fn jump_to_tenth(&self, digit: u8) -> usize {
        let target = (self.total * digit.min(9) as usize * 10 / 100).min(self.total - 1);
        self.index.store(target, Ordering::Release);
        target
    }

    /// Advance past `observed` unless the index moved since it was read.
    pub fn try_advance(&self, observed: usize) -> Advance {
        let next = observed + 1;
        if next < self.total {
            match self
                .index
                .compare_exchange(observed, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => Advance::Moved,
                Err(_) => Advance::Superseded,
            }
        } else {
            match self
                .index
                .compare_exchange(observed, observed, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => Advance::Finished,
                Err(_) => Advance::Superseded,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_new_clamps_inputs() {
        let state = PlaybackState::new(5, 99, 5000);
        assert_eq!(state.index(), 4);
        assert_eq!(state.wpm(), MAX_WPM);
        assert!(!state.is_paused());

        let state = PlaybackState::new(5, 0, 1);
        assert_eq!(state.wpm(), MIN_WPM);
    }

    #[test]
    fn test_wpm_steps_clamp() {
        let state = PlaybackState::new(1, 0, 990);
        assert_eq!(state.adjust_wpm(WPM_STEP), 1000);
        assert_eq!(state.adjust_wpm(WPM_STEP), 1000);
        let state = PlaybackState::new(1, 0, 20);
        assert_eq!(state.adjust_wpm(-WPM_STEP), 10);
        assert_eq!(state.wpm(), 10);
        assert_eq!(state.adjust_wpm(WPM_STEP), 35);
    }

    #[test]
    fn test_step_clamps_to_document() {
        let state = PlaybackState::new(3, 0, 200);
        assert_eq!(state.step(-1), 0);
        assert_eq!(state.step(1), 1);
        assert_eq!(state.step(1), 2);
        assert_eq!(state.step(1), 2);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_toggle_pause() {
        let state = PlaybackState::new(3, 0, 200);
        assert!(state.toggle_pause());
        assert!(state.is_paused());
        assert!(!state.toggle_pause());
        assert!(!state.is_paused());
    }

    #[test]
    fn test_jump_to_tenth() {
        let state = PlaybackState::new(57, 30, 200);
        assert_eq!(state.jump_to_tenth(0), 0);
        assert_eq!(state.jump_to_tenth(5), 28);
        assert_eq!(state.jump_to_tenth(9), 57 * 90 / 100);

        let tiny = PlaybackState::new(1, 0, 200);
        assert_eq!(tiny.jump_to_tenth(9), 0);
    }

    #[test]
    fn test_advance_moves_when_untouched() {
        let state = PlaybackState::new(3, 0, 200);
        assert_eq!(state.try_advance(0), Advance::Moved);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn test_advance_never_clobbers_navigation() {
        let state = PlaybackState::new(10, 4, 200);
        let observed = state.index();
        // The listener rewinds while the controller is sleeping.
        state.step(-1);
        assert_eq!(state.try_advance(observed), Advance::Superseded);
        assert_eq!(state.index(), 3);
        assert_ne!(state.index(), observed + 1);
    }

    #[test]
    fn test_advance_on_last_word_finishes_without_leaving_range() {
        let state = PlaybackState::new(2, 1, 200);
        assert_eq!(state.try_advance(1), Advance::Finished);
        assert_eq!(state.index(), 1);

        let state = PlaybackState::new(2, 1, 200);
        state.step(-1);
        assert_eq!(state.try_advance(1), Advance::Superseded);
    }

    #[test]
    fn test_index_stays_in_range_under_concurrent_mutation() {
        let total = 50;
        let state = Arc::new(PlaybackState::new(total, 0, 200));

        let listener = {
            let state = Arc::clone(&state);
            thread::spawn(move || {
                for i in 0..5_000u32 {
                    match i % 4 {
                        0 => {
                            state.step(1);
                        }
                        1 => {
                            state.step(-1);
                        }
                        2 => {
                            state.jump_to_tenth((i % 10) as u8);
                        }
                        _ => {
                            state.step(3);
                        }
                    }
                    assert!(state.index() < total);
                }
            })
        };

        for _ in 0..5_000 {
            let observed = state.index();
            assert!(observed < total);
            if state.try_advance(observed) == Advance::Finished {
                state.jump_to_tenth(0);
            }
            assert!(state.index() < total);
        }

        listener.join().unwrap();
        assert!(state.index() < total);
    }
}
