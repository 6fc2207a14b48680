use crate::source::SourceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Punctuation {
    None,
    General,
    SentenceEnd,
}

impl Punctuation {
    fn classify(last: Option<char>) -> Self {
        match last {
            Some('.' | '!' | '?') => Punctuation::SentenceEnd,
            Some(',' | ';' | ':' | '"' | '\'') => Punctuation::General,
            _ => Punctuation::None,
        }
    }
}

/// A whitespace-delimited token, exactly as it appeared in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    text: String,
    char_len: usize,
    punctuation: Punctuation,
}

impl Word {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            char_len: text.chars().count(),
            punctuation: Punctuation::classify(text.chars().last()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }

    pub fn punctuation(&self) -> Punctuation {
        self.punctuation
    }
}

pub fn tokenize(text: &str) -> Result<Vec<Word>, SourceError> {
    let words: Vec<Word> = text.split_whitespace().map(Word::new).collect();
    if words.is_empty() {
        return Err(SourceError::NoWords);
    }
    Ok(words)
}

/// Length of the longest word, never less than 1.
pub fn longest_word_len(words: &[Word]) -> usize {
    words.iter().map(Word::len).max().unwrap_or(0).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_preserves_case_and_punctuation() {
        let words = tokenize("Hello world. Testing one two.").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(texts, ["Hello", "world.", "Testing", "one", "two."]);
    }

    #[test]
    fn test_tokenize_collapses_mixed_whitespace() {
        let words = tokenize("  a\tb\n\nc \r\n d  ").unwrap();
        assert_eq!(words.len(), 4);
        assert!(words.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn test_tokenize_empty_is_error() {
        assert!(matches!(tokenize(""), Err(SourceError::NoWords)));
        assert!(matches!(tokenize(" \n\t "), Err(SourceError::NoWords)));
    }

    #[test]
    fn test_punctuation_classes() {
        assert_eq!(Word::new("end.").punctuation(), Punctuation::SentenceEnd);
        assert_eq!(Word::new("what?").punctuation(), Punctuation::SentenceEnd);
        assert_eq!(Word::new("wow!").punctuation(), Punctuation::SentenceEnd);
        assert_eq!(Word::new("list,").punctuation(), Punctuation::General);
        assert_eq!(Word::new("semi;").punctuation(), Punctuation::General);
        assert_eq!(Word::new("said\"").punctuation(), Punctuation::General);
        assert_eq!(Word::new("plain").punctuation(), Punctuation::None);
        assert_eq!(Word::new("mid.dle").punctuation(), Punctuation::None);
    }

    #[test]
    fn test_len_counts_chars_not_bytes() {
        let word = Word::new("naïve");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn test_longest_word_len() {
        let words = tokenize("a bb extraordinary c").unwrap();
        assert_eq!(longest_word_len(&words), 13);
        assert_eq!(longest_word_len(&[]), 1);
    }
}
