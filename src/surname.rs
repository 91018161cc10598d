use phf::phf_set;

static SURNAME_PREFIXES: phf::Set<&'static str> = phf_set! {
    "van", "von", "vander", "vanden", "der", "den", "de", "del", "della",
    "di", "da", "das", "dos", "du", "la", "le", "ter", "ten", "bin", "ibn",
    "al", "el", "abu", "ap", "st", "san", "santa", "mac",
};

const SINGLE_LETTER_CONJUNCTIONS: [&str; 4] = ["e", "y", "E", "Y"];

/// Index of the first surname word, given the words of a name which is in
/// given-name-first order (so the first word is never part of the surname,
/// unless it is the only word).
pub fn find_surname_index(words: &[&str]) -> usize {
    if words.len() < 2 {
        return words.len();
    }

    for (i, word) in words[0..words.len() - 1].iter().enumerate().skip(1) {
        let key = word.trim_end_matches('.').to_lowercase();
        if SURNAME_PREFIXES.contains(key.as_str()) {
            return i;
        }

        if i > 1 && SINGLE_LETTER_CONJUNCTIONS.contains(word) {
            // We found what looks like a conjunction in a Spanish or Portuguese
            // style surname (e.g. "Romero y Galdámez" or "Dato e Iradier"), so
            // the previous word was the start of the surname
            return i - 1;
        }
    }

    // Default case: just assume the last word is the surname
    words.len() - 1
}
