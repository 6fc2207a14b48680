use std::time::Duration;

/// Narrowest bar the progress line will draw, whatever the terminal width.
const MIN_BAR_WIDTH: usize = 10;

pub const RUNNING_HINTS: &str = "Space, \u{2191}\u{2193}, \u{2190}\u{2192}, 0-9 jump";
pub const PAUSED_HINTS: &str = "PAUSED (space, \u{2191}\u{2193}, \u{2190}\u{2192}, 0-9)";

/// Remaining reading time at `wpm`: `42s`, `3m 5s` or `2h 10m`.
pub fn format_time_remaining(remaining_words: usize, wpm: u32) -> String {
    if wpm == 0 {
        return String::new();
    }
    let seconds = remaining_words as u64 * 60 / wpm as u64;
    if seconds < 60 {
        return format!("{seconds}s");
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}m {}s", seconds % 60);
    }
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// `[████░░░░] 42%`, sized to `width` but never narrower than the minimum bar.
pub fn progress_bar(width: usize, current: usize, total: usize) -> String {
    let total = total.max(1);
    let current = current.min(total);
    let percent = format!(" {}%", current * 100 / total);
    let bar_width = width
        .saturating_sub(2 + percent.len())
        .max(MIN_BAR_WIDTH);

    let filled = bar_width * current / total;
    let mut bar = String::with_capacity(bar_width * 3 + percent.len() + 2);
    bar.push('[');
    bar.push_str(&"\u{2588}".repeat(filled));
    bar.push_str(&"\u{2591}".repeat(bar_width - filled));
    bar.push(']');
    bar.push_str(&percent);
    bar
}

pub fn status_line(wpm: u32, remaining_words: usize, paused: bool) -> String {
    let eta = format_time_remaining(remaining_words, wpm);
    if paused {
        format!("{wpm} WPM | {eta} left - {PAUSED_HINTS}")
    } else {
        format!("{wpm} WPM | {eta} left - {RUNNING_HINTS}")
    }
}

/// Whole-second duration in compact form: `7s`, `2m5s`, `1h2m3s`.
pub fn format_duration(duration: Duration) -> String {
    let secs = (duration.as_millis() + 500) / 1000;
    let (hours, minutes, seconds) = (secs / 3600, secs / 60 % 60, secs % 60);
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}
