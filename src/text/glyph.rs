/// Rows per glyph.
pub const FONT_HEIGHT: usize = 5;
/// Columns per glyph row. Every glyph is exactly this wide.
pub const CHAR_WIDTH: usize = 9;

pub type Glyph = [&'static str; FONT_HEIGHT];

pub const BLANK: Glyph = [
    "         ",
    "         ",
    "         ",
    "         ",
    "         ",
];

const A: Glyph = [
    "  █████  ",
    " ██   ██ ",
    " ███████ ",
    " ██   ██ ",
    " ██   ██ ",
];
const B: Glyph = [
    " ██████  ",
    " ██   ██ ",
    " ██████  ",
    " ██   ██ ",
    " ██████  ",
];
const C: Glyph = [
    "  █████  ",
    " ██      ",
    " ██      ",
    " ██      ",
    "  █████  ",
];
const D: Glyph = [
    " ██████  ",
    " ██   ██ ",
    " ██   ██ ",
    " ██   ██ ",
    " ██████  ",
];
const E: Glyph = [
    " ███████ ",
    " ██      ",
    " █████   ",
    " ██      ",
    " ███████ ",
];
const F: Glyph = [
    " ███████ ",
    " ██      ",
    " █████   ",
    " ██      ",
    " ██      ",
];
const G: Glyph = [
    "  █████  ",
    " ██      ",
    " ██  ███ ",
    " ██   ██ ",
    "  █████  ",
];
const H: Glyph = [
    " ██   ██ ",
    " ██   ██ ",
    " ███████ ",
    " ██   ██ ",
    " ██   ██ ",
];
const I: Glyph = [
    " ███████ ",
    "   ██    ",
    "   ██    ",
    "   ██    ",
    " ███████ ",
];
const J: Glyph = [
    " ███████ ",
    "     ██  ",
    "     ██  ",
    " ██  ██  ",
    "  ████   ",
];
const K: Glyph = [
    " ██   ██ ",
    " ██  ██  ",
    " █████   ",
    " ██  ██  ",
    " ██   ██ ",
];
const L: Glyph = [
    " ██      ",
    " ██      ",
    " ██      ",
    " ██      ",
    " ███████ ",
];
const M: Glyph = [
    " ██   ██ ",
    " ███ ███ ",
    " ██ █ ██ ",
    " ██   ██ ",
    " ██   ██ ",
];
const N: Glyph = [
    " ██   ██ ",
    " ███  ██ ",
    " ██ █ ██ ",
    " ██  ███ ",
    " ██   ██ ",
];
const O: Glyph = [
    "  █████  ",
    " ██   ██ ",
    " ██   ██ ",
    " ██   ██ ",
    "  █████  ",
];
const P: Glyph = [
    " ██████  ",
    " ██   ██ ",
    " ██████  ",
    " ██      ",
    " ██      ",
];
const Q: Glyph = [
    "  █████  ",
    " ██   ██ ",
    " ██   ██ ",
    " ██  ██  ",
    "  ████ █ ",
];
const R: Glyph = [
    " ██████  ",
    " ██   ██ ",
    " ██████  ",
    " ██  ██  ",
    " ██   ██ ",
];
const S: Glyph = [
    "  █████  ",
    " ██      ",
    "  █████  ",
    "      ██ ",
    "  █████  ",
];
const T: Glyph = [
    " ███████ ",
    "   ██    ",
    "   ██    ",
    "   ██    ",
    "   ██    ",
];
const U: Glyph = [
    " ██   ██ ",
    " ██   ██ ",
    " ██   ██ ",
    " ██   ██ ",
    "  █████  ",
];
const V: Glyph = [
    " ██   ██ ",
    " ██   ██ ",
    " ██   ██ ",
    "  ██ ██  ",
    "   ███   ",
];
const W: Glyph = [
    " ██   ██ ",
    " ██   ██ ",
    " ██ █ ██ ",
    " ███ ███ ",
    " ██   ██ ",
];
const X: Glyph = [
    " ██   ██ ",
    "  ██ ██  ",
    "   ███   ",
    "  ██ ██  ",
    " ██   ██ ",
];
const Y: Glyph = [
    " ██   ██ ",
    "  ██ ██  ",
    "   ███   ",
    "   ██    ",
    "   ██    ",
];
const Z: Glyph = [
    " ███████ ",
    "     ██  ",
    "   ██    ",
    "  ██     ",
    " ███████ ",
];

const DIGIT_0: Glyph = [
    "  █████  ",
    " ██  ███ ",
    " ██ █ ██ ",
    " ███  ██ ",
    "  █████  ",
];
const DIGIT_1: Glyph = [
    "   ██    ",
    "  ███    ",
    "   ██    ",
    "   ██    ",
    " ███████ ",
];
const DIGIT_2: Glyph = [
    "  █████  ",
    " ██   ██ ",
    "    ██   ",
    "  ██     ",
    " ███████ ",
];
const DIGIT_3: Glyph = [
    "  █████  ",
    "      ██ ",
    "   ████  ",
    "      ██ ",
    "  █████  ",
];
const DIGIT_4: Glyph = [
    " ██   ██ ",
    " ██   ██ ",
    " ███████ ",
    "      ██ ",
    "      ██ ",
];
const DIGIT_5: Glyph = [
    " ███████ ",
    " ██      ",
    " ██████  ",
    "      ██ ",
    " ██████  ",
];
const DIGIT_6: Glyph = [
    "  █████  ",
    " ██      ",
    " ██████  ",
    " ██   ██ ",
    "  █████  ",
];
const DIGIT_7: Glyph = [
    " ███████ ",
    "     ██  ",
    "    ██   ",
    "   ██    ",
    "   ██    ",
];
const DIGIT_8: Glyph = [
    "  █████  ",
    " ██   ██ ",
    "  █████  ",
    " ██   ██ ",
    "  █████  ",
];
const DIGIT_9: Glyph = [
    "  █████  ",
    " ██   ██ ",
    "  ██████ ",
    "      ██ ",
    "  █████  ",
];

const PERIOD: Glyph = [
    "         ",
    "         ",
    "         ",
    "         ",
    "   ██    ",
];
const COMMA: Glyph = [
    "         ",
    "         ",
    "         ",
    "   ██    ",
    "  ██     ",
];
const EXCLAMATION: Glyph = [
    "   ██    ",
    "   ██    ",
    "   ██    ",
    "         ",
    "   ██    ",
];
const QUESTION: Glyph = [
    "  █████  ",
    " ██   ██ ",
    "    ██   ",
    "         ",
    "    ██   ",
];
const APOSTROPHE: Glyph = [
    "   ██    ",
    "  ██     ",
    "         ",
    "         ",
    "         ",
];
const QUOTE: Glyph = [
    " ██  ██  ",
    " ██  ██  ",
    "         ",
    "         ",
    "         ",
];
const HYPHEN: Glyph = [
    "         ",
    "         ",
    " ███████ ",
    "         ",
    "         ",
];

/// Look up the block glyph for `ch`. Letters match case-insensitively;
/// anything outside the supported alphabet resolves to [`BLANK`].
pub fn lookup(ch: char) -> &'static Glyph {
    match ch.to_ascii_uppercase() {
        'A' => &A,
        'B' => &B,
        'C' => &C,
        'D' => &D,
        'E' => &E,
        'F' => &F,
        'G' => &G,
        'H' => &H,
        'I' => &I,
        'J' => &J,
        'K' => &K,
        'L' => &L,
        'M' => &M,
        'N' => &N,
        'O' => &O,
        'P' => &P,
        'Q' => &Q,
        'R' => &R,
        'S' => &S,
        'T' => &T,
        'U' => &U,
        'V' => &V,
        'W' => &W,
        'X' => &X,
        'Y' => &Y,
        'Z' => &Z,
        '0' => &DIGIT_0,
        '1' => &DIGIT_1,
        '2' => &DIGIT_2,
        '3' => &DIGIT_3,
        '4' => &DIGIT_4,
        '5' => &DIGIT_5,
        '6' => &DIGIT_6,
        '7' => &DIGIT_7,
        '8' => &DIGIT_8,
        '9' => &DIGIT_9,
        '.' => &PERIOD,
        ',' => &COMMA,
        '!' => &EXCLAMATION,
        '?' => &QUESTION,
        '\'' => &APOSTROPHE,
        '"' => &QUOTE,
        '-' => &HYPHEN,
        _ => &BLANK,
    }
}

/// Append one glyph row to `out`, forcing it to exactly [`CHAR_WIDTH`] columns.
pub fn push_row(out: &mut String, glyph: &Glyph, row: usize) {
    let mut written = 0;
    if let Some(line) = glyph.get(row) {
        for ch in line.chars().take(CHAR_WIDTH) {
            out.push(ch);
            written += 1;
        }
    }
    for _ in written..CHAR_WIDTH {
        out.push(' ');
    }
}
