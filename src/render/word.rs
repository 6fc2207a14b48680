use std::ops::Range;

use crate::text::glyph::{self, CHAR_WIDTH, FONT_HEIGHT};

/// Share of usable terminal height the glyph block aims to fill.
const TARGET_HEIGHT_RATIO: f64 = 0.5;
/// Columns and rows kept free around the block when sizing it.
const MARGIN: usize = 4;
const MIN_SCALE: f64 = 1.0;
const MAX_SCALE: f64 = 3.0;
/// Reference length used when the full document is not known up front.
pub const FIXED_REFERENCE_LEN: usize = 8;

/// How the session-wide scale is derived from the terminal width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalePolicy {
    /// Size so the longest word of the document (given in chars) fits.
    LongestWord(usize),
    /// Size against a fixed reference word of [`FIXED_REFERENCE_LEN`] chars.
    Fixed,
}

impl ScalePolicy {
    pub fn reference_len(self) -> usize {
        match self {
            ScalePolicy::LongestWord(len) => len.max(1),
            ScalePolicy::Fixed => FIXED_REFERENCE_LEN,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub focal: bool,
    pub scale_policy: ScalePolicy,
}

/// One word laid out for a `width` × `height` area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Every row to draw, blank vertical padding included.
    pub rows: Vec<String>,
    /// Column range of the focal character, shared by all glyph rows.
    pub highlight: Option<Range<usize>>,
    /// Number of blank rows above the glyph block.
    pub top_padding: usize,
    /// Integer magnification applied to the base glyphs.
    pub scale: usize,
}

impl RenderedFrame {
    pub fn glyph_rows(&self) -> &[String] {
        &self.rows[self.top_padding..]
    }

    /// Split a row into (before, focal, after) around the highlight.
    /// Padding rows and rows without a highlight come back whole in `before`.
    pub fn split_row(&self, row: usize) -> (&str, &str, &str) {
        let Some(line) = self.rows.get(row) else {
            return ("", "", "");
        };
        match &self.highlight {
            Some(range) if row >= self.top_padding => {
                let start = byte_offset(line, range.start);
                let end = byte_offset(line, range.end);
                (&line[..start], &line[start..end], &line[end..])
            }
            _ => (line.as_str(), "", ""),
        }
    }
}

fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

/// Optimal Recognition Point: the index of the character the eye should
/// fixate on. Drifts right as words grow.
pub fn orp_index(len: usize) -> usize {
    match len {
        0..=1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// Magnification for a word of `word_len` chars, always within [1.0, 3.0].
pub fn scale_factor(word_len: usize, width: usize, height: usize, policy: ScalePolicy) -> f64 {
    let max_width = width.saturating_sub(MARGIN) as f64;
    let max_height = height.saturating_sub(MARGIN) as f64;

    let height_scale = max_height * TARGET_HEIGHT_RATIO / FONT_HEIGHT as f64;
    let width_scale = max_width / (policy.reference_len() * CHAR_WIDTH) as f64;
    let base = height_scale.min(width_scale);

    let word_width = (word_len * CHAR_WIDTH) as f64;
    let scale = if word_width > 0.0 && word_width * base > max_width {
        max_width / word_width
    } else {
        base
    };

    scale.clamp(MIN_SCALE, MAX_SCALE)
}

pub fn render_word(word: &str, width: usize, height: usize, opts: RenderOptions) -> RenderedFrame {
    let mut chars: Vec<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
    if chars.is_empty() {
        chars.push(' ');
    }
    let word_len = if word.is_empty() { 0 } else { chars.len() };
    let orp = orp_index(word_len);

    let scale = scale_factor(chars.len(), width, height, opts.scale_policy);
    let factor = if scale > 1.0 {
        (scale.round() as usize).max(1)
    } else {
        1
    };

    let mut rows: Vec<String> = (0..FONT_HEIGHT)
        .map(|row| {
            let mut line = String::with_capacity(chars.len() * CHAR_WIDTH * 3);
            for &ch in &chars {
                glyph::push_row(&mut line, glyph::lookup(ch), row);
            }
            line
        })
        .collect();

    if factor > 1 {
        rows = magnify(&rows, factor);
    }

    let scaled_char_width = CHAR_WIDTH * factor;
    let row_width = chars.len() * scaled_char_width;
    let padding = if opts.focal {
        let orp_center = orp * scaled_char_width + scaled_char_width / 2;
        (width / 2).saturating_sub(orp_center)
    } else {
        width.saturating_sub(row_width) / 2
    };

    let visible_width = (padding + row_width).min(width);
    for line in &mut rows {
        let mut padded = " ".repeat(padding);
        padded.push_str(line);
        *line = padded.chars().take(width).collect();
    }

    let highlight = if opts.focal {
        let start = padding + orp * scaled_char_width;
        (start < visible_width).then(|| start..(start + scaled_char_width).min(visible_width))
    } else {
        None
    };

    rows.truncate(height);
    let top_padding = (height - rows.len()) / 2;
    let mut framed = vec![String::new(); top_padding];
    framed.append(&mut rows);

    RenderedFrame {
        rows: framed,
        highlight,
        top_padding,
        scale: factor,
    }
}

/// Nearest-neighbour integer magnification in both directions.
fn magnify(rows: &[String], factor: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(rows.len() * factor);
    for row in rows {
        let mut wide = String::with_capacity(row.len() * factor);
        for ch in row.chars() {
            for _ in 0..factor {
                wide.push(ch);
            }
        }
        for _ in 0..factor {
            out.push(wide.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focal(longest: usize) -> RenderOptions {
        RenderOptions {
            focal: true,
            scale_policy: ScalePolicy::LongestWord(longest),
        }
    }

    fn centered() -> RenderOptions {
        RenderOptions {
            focal: false,
            scale_policy: ScalePolicy::Fixed,
        }
    }

    #[test]
    fn test_orp_boundaries() {
        assert_eq!(orp_index(0), 0);
        assert_eq!(orp_index(1), 0);
        assert_eq!(orp_index(2), 1);
        assert_eq!(orp_index(5), 1);
        assert_eq!(orp_index(6), 2);
        assert_eq!(orp_index(9), 2);
        assert_eq!(orp_index(10), 3);
        assert_eq!(orp_index(13), 3);
        assert_eq!(orp_index(14), 4);
        assert_eq!(orp_index(40), 4);
    }

    #[test]
    fn test_scale_always_within_bounds() {
        for &(w, h) in &[(0, 0), (1, 1), (20, 5), (80, 24), (200, 60), (1000, 400)] {
            for len in [0, 1, 5, 13, 40] {
                for policy in [ScalePolicy::Fixed, ScalePolicy::LongestWord(len)] {
                    let s = scale_factor(len, w, h, policy);
                    assert!((1.0..=3.0).contains(&s), "{w}x{h} len {len}: {s}");
                }
            }
        }
    }

    #[test]
    fn test_scale_uses_smaller_of_height_and_width() {
        // height: (24-4)*0.5/5 = 2.0, width against "HELLO": 76/45 ≈ 1.69
        let s = scale_factor(5, 80, 24, ScalePolicy::LongestWord(5));
        assert!((s - 76.0 / 45.0).abs() < 1e-9);
        // Tall and wide terminal: capped at 3.0
        assert_eq!(scale_factor(3, 400, 200, ScalePolicy::LongestWord(3)), 3.0);
    }

    #[test]
    fn test_hello_orp_centered_on_column_40() {
        let frame = render_word("HELLO", 80, 24, focal(5));
        assert_eq!(frame.scale, 2);
        let range = frame.highlight.clone().unwrap();
        assert_eq!(range.len(), CHAR_WIDTH * 2);
        assert_eq!((range.start + range.end) / 2, 40);
        // The highlighted column is the E glyph.
        let (before, focal_part, _) = frame.split_row(frame.top_padding);
        assert_eq!(focal_part, "  ██████████████  ");
        assert_eq!(before.chars().count(), 31);
    }

    #[test]
    fn test_rows_never_exceed_terminal_width() {
        for width in [1, 9, 20, 45, 80] {
            for word in ["I", "HELLO", "extraordinarily", "pneumonoultramicroscopic"] {
                for opts in [focal(24), centered()] {
                    let frame = render_word(word, width, 24, opts);
                    for row in &frame.rows {
                        assert!(row.chars().count() <= width, "{word} at {width}");
                    }
                    if let Some(range) = &frame.highlight {
                        assert!(range.end <= width);
                        assert!(range.start < range.end);
                    }
                }
            }
        }
    }

    #[test]
    fn test_wide_word_is_left_aligned_and_truncated() {
        let frame = render_word("pneumonoultramicroscopic", 40, 24, centered());
        let first = &frame.glyph_rows()[0];
        assert_eq!(first.chars().count(), 40);
        // Padding clamps to zero, so the first glyph starts at column 0.
        assert!(first.starts_with(" ██████  "));
    }

    #[test]
    fn test_vertical_centering_and_height_limit() {
        let frame = render_word("hi", 80, 24, centered());
        let glyphs = frame.glyph_rows().len();
        assert_eq!(glyphs, FONT_HEIGHT * frame.scale);
        assert_eq!(frame.top_padding, (24 - glyphs) / 2);
        assert!(frame.rows[..frame.top_padding].iter().all(String::is_empty));

        let squat = render_word("hi", 80, 3, centered());
        assert_eq!(squat.rows.len(), 3);
        assert_eq!(squat.top_padding, 0);
    }

    #[test]
    fn test_centered_without_focal() {
        let frame = render_word("ab", 80, 10, centered());
        assert_eq!(frame.scale, 1);
        assert!(frame.highlight.is_none());
        let row = &frame.glyph_rows()[0];
        assert!(row.starts_with(&" ".repeat(31)));
        assert_eq!(row.chars().count(), 31 + 18);
    }

    #[test]
    fn test_empty_word_renders_single_blank_glyph() {
        let frame = render_word("", 80, 24, focal(5));
        assert!(
            frame
                .glyph_rows()
                .iter()
                .all(|row| row.chars().all(|c| c == ' '))
        );
        assert_eq!(frame.glyph_rows().len(), FONT_HEIGHT * frame.scale);
        let range = frame.highlight.unwrap();
        assert_eq!(range.len(), CHAR_WIDTH * frame.scale);
    }

    #[test]
    fn test_unsupported_chars_render_blank_columns() {
        let frame = render_word("@", 80, 10, centered());
        assert!(frame.glyph_rows()[0].trim().is_empty());
    }

    #[test]
    fn test_case_folding_keeps_one_column_per_char() {
        assert_eq!(
            render_word("hello", 80, 24, focal(5)),
            render_word("HELLO", 80, 24, focal(5))
        );
        // The non-ASCII char becomes a blank glyph but still takes its column.
        let frame = render_word("na\u{ef}ve", 80, 10, centered());
        assert_eq!(frame.glyph_rows()[0].chars().count(), 17 + 5 * CHAR_WIDTH);
    }

    #[test]
    fn test_magnify_replicates_both_axes() {
        let rows = vec!["ab".to_string()];
        assert_eq!(magnify(&rows, 3), vec!["aaabbb", "aaabbb", "aaabbb"]);
    }
}
