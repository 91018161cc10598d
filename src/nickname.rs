use std::borrow::Cow;

// Returns tuple (close_char, must_precede_whitespace)
#[inline]
fn expected_close_char_if_opens_nickname(c: char, follows_whitespace: bool) -> Option<(char, bool)> {
    match c {
        // Brackets open a nickname regardless of where they occur
        '(' => Some((')', false)),
        '[' => Some((']', false)),
        '<' => Some(('>', false)),
        '“' => Some(('”', false)),
        '«' => Some(('»', false)),
        // Quotes only count after whitespace; otherwise they might be
        // in-name punctuation, as in "O'Neil"
        '\'' if follows_whitespace => Some(('\'', true)),
        '"' if follows_whitespace => Some(('"', true)),
        '‘' if follows_whitespace => Some(('’', true)),
        _ => None,
    }
}

/// Removes nicknames written in brackets or quotes: "Robert 'Bob' Smith"
/// becomes "Robert Smith".
///
/// Optimized for the (by far most common) case where there is no nickname.
pub fn strip_nickname(input: &str) -> Cow<str> {
    let mut follows_space = false;

    for (start, c) in input.char_indices() {
        if let Some((close, needs_space)) = expected_close_char_if_opens_nickname(c, follows_space)
        {
            let search_from = start + c.len_utf8();
            let strip_from = if follows_space { start - 1 } else { start };

            return match input[search_from..].find(close) {
                Some(found_at) => {
                    let end = search_from + found_at + close.len_utf8();
                    let rest = &input[end..];
                    if !needs_space || rest.is_empty() || rest.starts_with(' ') {
                        Cow::Owned(input[..strip_from].to_string() + &strip_nickname(rest))
                    } else {
                        // The closing quote was in-name punctuation; keep
                        // everything and look for real nicknames further on
                        Cow::Owned(input[..search_from].to_string() + &strip_nickname(&input[search_from..]))
                    }
                }
                // An unclosed bracket swallows the rest of the string
                None if !needs_space => Cow::Borrowed(&input[..strip_from]),
                // An unmatched quote is left alone
                None => Cow::Owned(input[..search_from].to_string() + &strip_nickname(&input[search_from..])),
            };
        }

        follows_space = c == ' ';
    }

    Cow::Borrowed(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_nothing() {
        assert_eq!("Robert Roberts", strip_nickname("Robert Roberts"));
    }

    #[test]
    fn strip_parens() {
        assert_eq!("Robert Roberts", strip_nickname("Robert (Mr. Bob) Roberts"));
    }

    #[test]
    fn unmatched_parens() {
        assert_eq!("Robert", strip_nickname("Robert (Mr. Bob"));
    }

    #[test]
    fn strip_quotes() {
        assert_eq!("Robert Roberts", strip_nickname("Robert 'Bob' Roberts"));
        assert_eq!("Robert Roberts", strip_nickname("Robert \"Bob\" Roberts"));
    }

    #[test]
    fn unmatched_quote() {
        assert_eq!("Robert Mr. Bob' Roberts", strip_nickname("Robert Mr. Bob' Roberts"));
        assert_eq!("Robert 'Bob Roberts", strip_nickname("Robert 'Bob Roberts"));
    }

    #[test]
    fn unspaced_quotes() {
        assert_eq!("Ro'bert R'oberts", strip_nickname("Ro'bert R'oberts"));
    }

    #[test]
    fn trailing_nickname() {
        assert_eq!("Robert Roberts", strip_nickname("Robert Roberts (Bobby)"));
    }
}
