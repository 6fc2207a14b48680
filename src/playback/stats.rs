use std::fmt;
use std::time::{Duration, Instant};

use crate::render::status::format_duration;

pub struct SessionStats {
    started_at: Instant,
    paused: Duration,
    pause_started: Option<Instant>,
    words_read: usize,
}

#[derive(Clone, Debug)]
pub struct SessionReport {
    pub words_read: usize,
    pub total: Duration,
    pub paused: Duration,
    pub active: Duration,
    pub actual_wpm: u32,
}

impl SessionStats {
    pub fn start() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(started_at: Instant) -> Self {
        Self {
            started_at,
            paused: Duration::ZERO,
            pause_started: None,
            words_read: 0,
        }
    }

    pub fn begin_pause(&mut self, at: Instant) {
        if self.pause_started.is_none() {
            self.pause_started = Some(at);
        }
    }

    pub fn end_pause(&mut self, at: Instant) {
        if let Some(started) = self.pause_started.take() {
            self.paused += at.saturating_duration_since(started);
        }
    }

    pub fn record_word(&mut self) {
        self.words_read += 1;
    }

    /// Close any open pause and compute the report as of `at`.
    pub fn finish(&mut self, at: Instant) -> SessionReport {
        self.end_pause(at);
        let total = at.saturating_duration_since(self.started_at);
        let active = total.saturating_sub(self.paused);
        let minutes = active.as_secs_f64() / 60.0;
        let actual_wpm = if minutes > 0.0 {
            (self.words_read as f64 / minutes) as u32
        } else {
            0
        };

        SessionReport {
            words_read: self.words_read,
            total,
            paused: self.paused,
            active,
            actual_wpm,
        }
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session Complete!\r\n")?;
        f.write_str(&"\u{2500}".repeat(17))?;
        f.write_str("\r\n")?;
        write!(f, "Words read:    {}\r\n", self.words_read)?;
        write!(f, "Total time:    {}\r\n", format_duration(self.total))?;
        write!(f, "Time paused:   {}\r\n", format_duration(self.paused))?;
        write!(f, "Active time:   {}\r\n", format_duration(self.active))?;
        write!(f, "Actual WPM:    {}\r\n", self.actual_wpm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_excludes_paused_time() {
        let t0 = Instant::now();
        let mut stats = SessionStats::started_at(t0);
        for _ in 0..100 {
            stats.record_word();
        }
        stats.begin_pause(t0 + Duration::from_secs(10));
        stats.end_pause(t0 + Duration::from_secs(40));

        let report = stats.finish(t0 + Duration::from_secs(70));
        assert_eq!(report.words_read, 100);
        assert_eq!(report.total, Duration::from_secs(70));
        assert_eq!(report.paused, Duration::from_secs(30));
        assert_eq!(report.active, Duration::from_secs(40));
        assert_eq!(report.actual_wpm, 150);
    }

    #[test]
    fn test_finish_closes_open_pause() {
        let t0 = Instant::now();
        let mut stats = SessionStats::started_at(t0);
        stats.begin_pause(t0 + Duration::from_secs(5));
        // A second begin while already paused keeps the first start.
        stats.begin_pause(t0 + Duration::from_secs(8));
        let report = stats.finish(t0 + Duration::from_secs(20));
        assert_eq!(report.paused, Duration::from_secs(15));
        assert_eq!(report.actual_wpm, 0);
    }

    #[test]
    fn test_zero_active_time_reports_zero_wpm() {
        let t0 = Instant::now();
        let mut stats = SessionStats::started_at(t0);
        stats.record_word();
        assert_eq!(stats.finish(t0).actual_wpm, 0);
    }

    #[test]
    fn test_report_display() {
        let report = SessionReport {
            words_read: 12,
            total: Duration::from_secs(125),
            paused: Duration::from_secs(5),
            active: Duration::from_secs(120),
            actual_wpm: 6,
        };
        let text = report.to_string();
        assert!(text.starts_with("Session Complete!\r\n"));
        assert!(text.contains("Words read:    12\r\n"));
        assert!(text.contains("Total time:    2m5s\r\n"));
        assert!(text.contains("Actual WPM:    6\r\n"));
    }
}
