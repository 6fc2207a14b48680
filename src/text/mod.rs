pub mod glyph;
pub mod tokenizer;

pub use tokenizer::{Punctuation, Word, longest_word_len, tokenize};
