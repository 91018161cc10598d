use crate::case::capitalize;

// Applied strictly in order; later patterns see the output of earlier ones.
// A few rules are no-ops, kept so the table reads like the leet alphabet.
static LEET_RULES: [(&str, &str); 42] = [
    ("4", "A"),
    ("@", "a"),
    ("8", "B"),
    ("b", "b"),
    ("[", "C"),
    ("|>", "D"),
    ("c|", "d"),
    ("3", "E"),
    ("3", "e"),
    ("|=", "F"),
    ("(=", "f"),
    ("6", "G"),
    ("#", "H"),
    ("!", "i"),
    ("_|", "J"),
    ("_)", "j"),
    ("|<", "K"),
    ("I<", "k"),
    ("|_", "L"),
    ("1", "l"),
    (r"|\/|", "M"),
    (r"|\|", "N"),
    ("0", "O"),
    ("|*", "P"),
    ("O,", "Q,"),
    ("9", "q"),
    ("|^", "r"),
    ("$", "S"),
    ("5", "s"),
    ("7", "T"),
    ("-|-", "t"),
    ("|_|", "U"),
    ("(_)", "u"),
    (r"\/", "V"),
    ("VV", "W"),
    ("uu", "w"),
    ("><", "X"),
    ("}{", "x"),
    ("'|'", "Y"),
    ("`/", "y"),
    ("ZZ", "Z"),
    ("2", "z"),
];

/// Approximates leet-speak ("m4r!4" → "Maria"), also normalizing case to
/// capitalized.
///
/// ```
/// use name_gender::leet::decode_leet;
///
/// assert_eq!("Maria", decode_leet("m4r!4"));
/// assert_eq!("Bob", decode_leet("808"));
/// ```
pub fn decode_leet(text: &str) -> String {
    let mut decoded = text.to_string();
    for &(pattern, replacement) in LEET_RULES.iter() {
        if decoded.contains(pattern) {
            decoded = decoded.replace(pattern, replacement);
        }
    }
    capitalize(&decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits() {
        assert_eq!("Leet", decode_leet("1337"));
        assert_eq!("Anna", decode_leet("4nn4"));
        assert_eq!("Sofia", decode_leet("50f!4"));
    }

    #[test]
    fn multi_char_patterns() {
        assert_eq!("Mike", decode_leet(r"|\/|ike"));
        assert_eq!("Nina", decode_leet(r"|\|i|\|a"));
        assert_eq!("Kate", decode_leet("|<ate"));
    }

    #[test]
    fn order_matters() {
        // "_|" fires long before "|_|" gets a chance
        assert_eq!("|jma", decode_leet("|_|ma"));
        // "VV" is matched only after "\/" has produced the Vs
        assert_eq!("Walter", decode_leet(r"\/\/alter"));
    }

    #[test]
    fn plain_names_only_change_case() {
        assert_eq!("Maria", decode_leet("MARIA"));
        assert_eq!("John smith", decode_leet("John Smith"));
    }
}
