use crate::parse::{parse, NameParts};
use smallvec::SmallVec;

/// Which end of a name holds the given name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// "Given Family", as in most of Europe and the Americas.
    Direct,
    /// "Family Given", as in Hungary, China or Vietnam.
    Inverse,
}

impl NameParts {
    fn first_name(&self, order: Order) -> &str {
        match order {
            Order::Direct => &self.given,
            Order::Inverse => &self.surname,
        }
    }
}

/// Inserts an underscore before every uppercase character except the first:
/// "JohnSmith" becomes "John_Smith".
pub fn split_camel_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 4);
    for (i, c) in text.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            result.push('_');
        }
        result.push(c);
    }
    result
}

/// Reverses the order of the whitespace-separated words of a name.
///
/// ```
/// use name_gender::normalize::invert_name_parts;
///
/// assert_eq!("Vasilescu Bogdan", invert_name_parts("Bogdan  Vasilescu"));
/// ```
pub fn invert_name_parts(name: &str) -> String {
    name.split_whitespace().rev().collect::<SmallVec<[&str; 4]>>().join(" ")
}

fn replace_digits(name: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut in_digits = false;
    for c in name.chars() {
        if c.is_ascii_digit() {
            if !in_digits {
                result.push_str(replacement);
            }
            in_digits = true;
        } else {
            result.push(c);
            in_digits = false;
        }
    }
    result
}

fn pick_word(words: &[&str], order: Order) -> String {
    match order {
        Order::Direct => words[0].to_string(),
        Order::Inverse => words[words.len() - 1].to_string(),
    }
}

fn first_name_of(text: &str, order: Order, try_camel_case: bool) -> String {
    let first = parse(text).first_name(order).to_string();
    if first.trim() != text.trim() {
        return first;
    }

    // The parser couldn't split the name ("Ben Voigt" or "BenVoigt"), so
    // fall back on heuristics
    let words: SmallVec<[&str; 4]> = text.split_whitespace().collect();
    if words.len() == 2 {
        return pick_word(&words, order);
    }

    if try_camel_case {
        let uncamel = split_camel_case(text).replace('_', " ");
        if uncamel != text {
            return first_name_of(&uncamel, order, false);
        }
    }

    first
}

/// Guesses which part of a free-text name or username is the given name,
/// lowercased. Returns an empty string when nothing plausible is found.
///
/// ```
/// use name_gender::normalize::{extract_first_name, Order};
///
/// assert_eq!("john", extract_first_name("John Smith", Order::Direct));
/// assert_eq!("smith", extract_first_name("John Smith", Order::Inverse));
/// assert_eq!("john", extract_first_name("john.smith", Order::Direct));
/// assert_eq!("maria", extract_first_name("MariaSilva", Order::Direct));
/// assert_eq!("bogdan", extract_first_name("bogdan_vasilescu87", Order::Direct));
/// ```
pub fn extract_first_name(name: &str, order: Order) -> String {
    let dotless = name.replace('.', " ");

    let mut cleaned = replace_digits(&dotless, "");
    if cleaned.is_empty() {
        cleaned = replace_digits(&dotless, "_");
    }
    let cleaned = cleaned.replace('_', " ");

    let first = first_name_of(&cleaned, order, true);

    if first == "Mc" || first.chars().count() == 1 {
        String::new()
    } else {
        first.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case() {
        assert_eq!("John_Smith", split_camel_case("JohnSmith"));
        assert_eq!("A_B_C_Defgh", split_camel_case("ABCDefgh"));
        assert_eq!("john", split_camel_case("john"));
        assert_eq!("", split_camel_case(""));
    }

    #[test]
    fn inverted() {
        assert_eq!("Smith John", invert_name_parts("John Smith"));
        assert_eq!("Bogdan", invert_name_parts("Bogdan"));
        assert_eq!("", invert_name_parts("   "));
    }

    #[test]
    fn digits() {
        assert_eq!("jane", extract_first_name("jane1984", Order::Direct));
        assert_eq!("", extract_first_name("1984", Order::Direct));
        assert_eq!("", extract_first_name("", Order::Direct));
    }

    #[test]
    fn only_decimal_digits_are_dropped() {
        assert_eq!("ana½", replace_digits("ana12½", ""));
        assert_eq!("_Ⅻ_", replace_digits("7Ⅻ42", "_"));
    }

    #[test]
    fn separators() {
        assert_eq!("maria", extract_first_name("maria.silva", Order::Direct));
        assert_eq!("silva", extract_first_name("maria_silva", Order::Inverse));
    }

    #[test]
    fn single_letters_and_mc() {
        assert_eq!("", extract_first_name("J. Smith", Order::Direct));
        assert_eq!("", extract_first_name("McDonald", Order::Direct));
    }

    #[test]
    fn usernames() {
        assert_eq!("darklord", extract_first_name("darklord", Order::Direct));
        assert_eq!("john", extract_first_name("JohnSmith", Order::Direct));
        assert_eq!("", extract_first_name("xXdarklordXx", Order::Direct));
    }

    #[test]
    fn single_word_has_no_inverse_first_name() {
        assert_eq!("", extract_first_name("Ivanova", Order::Inverse));
        assert_eq!("", extract_first_name("JohnSmith", Order::Inverse));
    }

    #[test]
    fn titles() {
        assert_eq!("maria", extract_first_name("Dr. Maria Silva", Order::Direct));
        assert_eq!("jan", extract_first_name("Jan van Dijk", Order::Direct));
        assert_eq!("van dijk", extract_first_name("Jan van Dijk", Order::Inverse));
    }
}
