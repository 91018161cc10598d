use crate::gender::Gender;

static BLACKLIST: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/blacklist.rs"));
static MALE_WORDS: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/male_words.rs"));
static FEMALE_WORDS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/female_words.rs"));

static FEMALE_MARKERS: [&str; 1] = ["girl"];
static MALE_MARKERS: [&str; 2] = ["guy", "captain"];

/// Outcome of a first-name lookup that may refuse to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Found(Gender),
    /// The name is noise (a placeholder or reserved word, or too short to
    /// be a name) and nothing should be guessed from it.
    Blacklisted,
}

impl Resolution {
    pub fn gender(self) -> Option<Gender> {
        match self {
            Resolution::Found(gender) => Some(gender),
            Resolution::Blacklisted => None,
        }
    }
}

/// An honorific or other word that settles the gender of whoever it
/// describes ("Mr", "Miss", "wizard"). Matching is case-sensitive.
pub fn gendered_word(word: &str) -> Option<Gender> {
    if MALE_WORDS.contains(word) {
        Some(Gender::Male)
    } else if FEMALE_WORDS.contains(word) {
        Some(Gender::Female)
    } else {
        None
    }
}

fn has_marker(name: &str, markers: &[&str]) -> bool {
    markers
        .iter()
        .any(|marker| name.starts_with(marker) || name.ends_with(marker))
}

/// Cheap checks run before any table lookup.
///
/// ```
/// use name_gender::{initial::{initial_check, Resolution}, Gender};
///
/// assert_eq!(Some(Resolution::Blacklisted), initial_check("null"));
/// assert_eq!(Some(Resolution::Blacklisted), initial_check("j"));
/// assert_eq!(Some(Resolution::Found(Gender::Female)), initial_check("gamergirl"));
/// assert_eq!(None, initial_check("maria"));
/// ```
pub fn initial_check(first_name: &str) -> Option<Resolution> {
    if BLACKLIST.contains(first_name) || first_name.chars().count() < 2 {
        return Some(Resolution::Blacklisted);
    }

    if let Some(gender) = gendered_word(first_name) {
        Some(Resolution::Found(gender))
    } else if has_marker(first_name, &FEMALE_MARKERS) {
        Some(Resolution::Found(Gender::Female))
    } else if has_marker(first_name, &MALE_MARKERS) {
        Some(Resolution::Found(Gender::Male))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklist() {
        for name in ["The", "nil", "NULL", "linux", "me", "", "x", "é"] {
            assert_eq!(Some(Resolution::Blacklisted), initial_check(name), "{}", name);
        }
        // Case-sensitive
        assert_eq!(None, initial_check("Linux"));
    }

    #[test]
    fn words() {
        assert_eq!(Some(Resolution::Found(Gender::Male)), initial_check("Mr."));
        assert_eq!(Some(Resolution::Found(Gender::Female)), initial_check("grrrl"));
        assert_eq!(Some(Resolution::Found(Gender::Male)), initial_check("hillbilly"));
        assert_eq!(None, gendered_word("MISS"));
        assert_eq!(Some(Gender::Female), gendered_word("Mrs."));
    }

    #[test]
    fn markers() {
        assert_eq!(Some(Resolution::Found(Gender::Female)), initial_check("girlpower"));
        assert_eq!(Some(Resolution::Found(Gender::Male)), initial_check("niceguy"));
        assert_eq!(Some(Resolution::Found(Gender::Male)), initial_check("captainjack"));
        assert_eq!(None, initial_check("Guybrush"));
    }

    #[test]
    fn female_marker_wins() {
        assert_eq!(Some(Resolution::Found(Gender::Female)), initial_check("guygirl"));
    }

    #[test]
    fn resolution_gender() {
        assert_eq!(None, Resolution::Blacklisted.gender());
        assert_eq!(Some(Gender::Unisex), Resolution::Found(Gender::Unisex).gender());
    }
}
