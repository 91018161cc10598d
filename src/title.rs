use phf::phf_set;

// Keys are lowercase, without trailing periods
static PREFIX_TITLES: phf::Set<&'static str> = phf_set! {
    "mr", "mrs", "ms", "mx", "miss", "mister", "madam", "madame", "mme", "mlle",
    "dr", "doctor", "prof", "professor", "rev", "reverend", "fr", "father",
    "sir", "dame", "lord", "lady", "hon", "honorable", "judge", "justice",
    "capt", "captain", "col", "colonel", "gen", "general", "lt", "sgt",
    "herr", "frau", "sra", "srta", "dott", "ing", "mgr",
};

static POSTFIX_TITLES: phf::Set<&'static str> = phf_set! {
    "jr", "jnr", "sr", "snr", "ii", "iii", "iv", "2nd", "3rd", "4th",
    "phd", "md", "esq", "dds", "mba", "msc", "bsc", "cpa",
    "junior", "senior", "filho", "neto",
};

#[inline]
fn key(word: &str) -> String {
    word.trim_end_matches('.').to_lowercase()
}

pub fn is_prefix_title(word: &str) -> bool {
    PREFIX_TITLES.contains(key(word).as_str())
}

pub fn is_postfix_title(word: &str) -> bool {
    POSTFIX_TITLES.contains(key(word).as_str())
}

/// Number of leading words which are titles (e.g. "Dr." and "Prof" in
/// "Prof Dr. Jane Doe").
pub fn find_prefix_len(words: &[&str]) -> usize {
    words.iter().take_while(|w| is_prefix_title(w)).count()
}

/// Index of the first of the trailing words which are all titles or
/// generational suffixes, or `words.len()` if there are none.
pub fn find_postfix_index(words: &[&str]) -> usize {
    words.len() - words.iter().rev().take_while(|w| is_postfix_title(w)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        assert_eq!(0, find_prefix_len(&["Jane", "Doe"]));
        assert_eq!(1, find_prefix_len(&["Dr.", "Jane", "Doe"]));
        assert_eq!(2, find_prefix_len(&["Prof", "Dr.", "Jane", "Doe"]));
    }

    #[test]
    fn postfixes() {
        assert_eq!(2, find_postfix_index(&["John", "Doe"]));
        assert_eq!(2, find_postfix_index(&["John", "Doe", "Jr."]));
        assert_eq!(2, find_postfix_index(&["John", "Doe", "III", "PhD"]));
    }

    #[test]
    fn case_insensitive() {
        assert!(is_prefix_title("MRS."));
        assert!(is_postfix_title("Esq"));
        assert!(!is_prefix_title("Maria"));
    }
}
