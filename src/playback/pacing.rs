use std::time::Duration;

use crate::text::{Punctuation, Word};

/// Words at or under this length get the plain per-word delay.
const REFERENCE_WORD_LEN: usize = 5;
/// Extra delay per character beyond the reference length.
const PER_CHAR_STRETCH: f64 = 0.08;
/// Fixed breather after a sentence ends.
pub const SENTENCE_PAUSE: Duration = Duration::from_millis(150);

/// How long `word` stays on screen at `wpm`, pauses included.
pub fn word_delay(word: &Word, wpm: u32, punct_pause: Duration) -> Duration {
    let wpm = wpm.max(1) as f64;
    let mut millis = 60_000.0 / wpm;
    if word.len() > REFERENCE_WORD_LEN {
        millis *= 1.0 + (word.len() - REFERENCE_WORD_LEN) as f64 * PER_CHAR_STRETCH;
    }

    let mut delay = Duration::from_secs_f64(millis / 1000.0);
    match word.punctuation() {
        Punctuation::SentenceEnd => delay += SENTENCE_PAUSE,
        Punctuation::General => delay += punct_pause,
        Punctuation::None => {}
    }
    delay
}
