use unicode_segmentation::UnicodeSegmentation;

const MAX_LEN: usize = u8::MAX as usize;

/// Splits name text into words: on whitespace for anything containing
/// ASCII letters, and on unicode word boundaries for words without any
/// (e.g. Han characters, which are usually written without spaces).
///
/// Words without alphabetic characters are skipped.
pub struct Segments<'a> {
    text: &'a str,
    current_word: &'a str,
}

impl<'a> Segments<'a> {
    pub fn from_text(text: &'a str) -> Segments<'a> {
        Segments {
            text,
            current_word: "",
        }
    }
}

#[inline]
fn has_alpha(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        // If we're in the middle of a word that needs sub-segmentation by
        // unicode rules, handle that
        if !self.current_word.is_empty() {
            if let Some((start, subword)) = self
                .current_word
                .split_word_bound_indices()
                .find(|(_, subword)| has_alpha(subword))
            {
                self.current_word = &self.current_word[start + subword.len()..];
                return Some(subword);
            } else {
                self.current_word = "";
            }
        }

        // Otherwise, skip any leading whitespace
        self.text = self.text.trim_start();

        if self.text.is_empty() {
            return None;
        }

        let next_whitespace = self
            .text
            .find(char::is_whitespace)
            .unwrap_or(self.text.len());
        let word = &self.text[0..next_whitespace];
        self.text = &self.text[next_whitespace..];

        if word.len() > MAX_LEN || !has_alpha(word) {
            // Not a word, skip it by recursing
            self.next()
        } else if !word.chars().any(|c| c.is_ascii_alphabetic()) {
            // For completely non-ASCII words, likely Hangul or similar,
            // we defer to the unicode_segmentation library
            self.current_word = word;
            self.next()
        } else {
            Some(word)
        }
    }
}
