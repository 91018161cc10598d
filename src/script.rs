use deunicode::deunicode_with_tofu;
use once_cell::sync::Lazy;
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Cyrillic,
    Greek,
    Other,
}

// Covers the Greek, Coptic, Cyrillic and Greek Extended blocks, which is
// where real-world names in either script live
const TABLE_LEN: usize = 0x2000;

static SCRIPT_BY_CHAR: Lazy<Box<[Script]>> = Lazy::new(|| {
    (0..TABLE_LEN as u32)
        .map(|u| char::from_u32(u).map(classify).unwrap_or(Script::Other))
        .collect()
});

fn classify(c: char) -> Script {
    match c as u32 {
        0x0400..=0x052F | 0x1C80..=0x1C8F | 0x1D2B | 0x1D78 | 0x2DE0..=0x2DFF => Script::Cyrillic,
        0xA640..=0xA69F | 0xFE2E..=0xFE2F => Script::Cyrillic,
        // Coptic letters share the Greek block but are a separate script
        0x03E2..=0x03EF => Script::Other,
        0x0370..=0x03FF | 0x1D26..=0x1D2A | 0x1D5D..=0x1D61 | 0x1D66..=0x1D6A | 0x1DBF => {
            Script::Greek
        }
        0x1F00..=0x1FFF => Script::Greek,
        _ => Script::Other,
    }
}

#[inline]
pub fn script_of(c: char) -> Script {
    SCRIPT_BY_CHAR
        .get(c as usize)
        .copied()
        .unwrap_or_else(|| classify(c))
}

fn only_script(text: &str, script: Script) -> bool {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .all(|c| script_of(c) == script)
}

/// True if every alphabetic character is Cyrillic (vacuously true for text
/// with no letters at all).
pub fn only_cyrillic(text: &str) -> bool {
    only_script(text, Script::Cyrillic)
}

/// True if every alphabetic character is Greek (vacuously true for text
/// with no letters at all).
pub fn only_greek(text: &str) -> bool {
    only_script(text, Script::Greek)
}

/// Transliterates names written purely in Cyrillic or purely in Greek to
/// the Latin alphabet, leaving anything else untouched.
///
/// ```
/// use name_gender::script::detect_and_transliterate;
///
/// assert_eq!("Giorgos", detect_and_transliterate("Γιώργος"));
/// assert_eq!("Ivan Petrov", detect_and_transliterate("Иван Петров"));
/// assert_eq!("José", detect_and_transliterate("José"));
/// ```
pub fn detect_and_transliterate(name: &str) -> Cow<str> {
    if name.is_ascii() || !name.chars().any(char::is_alphabetic) {
        Cow::Borrowed(name)
    } else if only_cyrillic(name) || only_greek(name) {
        Cow::Owned(fold(name).into_owned())
    } else {
        Cow::Borrowed(name)
    }
}

/// Strips diacritics and transliterates to plain ASCII.
///
/// Characters with no ASCII approximation are dropped.
pub fn fold(text: &str) -> Cow<str> {
    if text.is_ascii() {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(deunicode_with_tofu(text, ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(Script::Cyrillic, script_of('Ж'));
        assert_eq!(Script::Cyrillic, script_of('ё'));
        assert_eq!(Script::Greek, script_of('Ω'));
        assert_eq!(Script::Greek, script_of('ώ'));
        assert_eq!(Script::Greek, script_of('ἄ'));
        assert_eq!(Script::Other, script_of('a'));
        assert_eq!(Script::Other, script_of('ß'));
        assert_eq!(Script::Other, script_of('鄭'));
    }

    #[test]
    fn pure_scripts() {
        assert!(only_cyrillic("Мария Иванова"));
        assert!(!only_cyrillic("Мария Ivanova"));
        assert!(only_greek("Γιώργος"));
        assert!(!only_greek("Γιώργος Smith"));
        assert!(only_cyrillic("Иван-2"));
    }

    #[test]
    fn mixed_scripts_unchanged() {
        assert_eq!("Иван Smith", detect_and_transliterate("Иван Smith"));
        assert_eq!("Ngô Bảo Châu", detect_and_transliterate("Ngô Bảo Châu"));
    }

    #[test]
    fn fold_is_idempotent() {
        for name in ["José", "Łukasz", "Ørjan", "ivan", "Zoë", "Γιώργος"] {
            let once = fold(name).into_owned();
            assert_eq!(once, fold(&once));
            assert!(once.is_ascii());
        }
        assert_eq!("Jose", fold("José"));
        assert_eq!("Lukasz", fold("Łukasz"));
    }
}
