#[inline]
fn push_titlecase(c: char, out: &mut String) {
    let mapped = unicode_case_mapping::to_titlecase(c);
    if mapped[0] == 0 {
        // No titlecase mapping
        out.push(c);
    } else {
        out.extend(
            mapped
                .iter()
                .take_while(|&&u| u > 0)
                .filter_map(|&u| char::from_u32(u)),
        );
    }
}

/// Uppercases (strictly, titlecases) the first character and lowercases
/// the rest, so "mARIA" and "MARIA" both become "Maria".
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    let mut result = String::with_capacity(text.len());

    if let Some(first) = chars.next() {
        push_titlecase(first, &mut result);
    }
    for c in chars {
        result.extend(c.to_lowercase());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalization() {
        assert_eq!("", capitalize(""));
        assert_eq!("A", capitalize("a"));
        assert_eq!("Maria", capitalize("mARIA"));
        assert_eq!("Maria", capitalize("MARIA"));
        assert_eq!("Élodie", capitalize("élodie"));
        assert_eq!("ǅemal", capitalize("ǆemal"));
        assert_eq!("1st", capitalize("1ST"));
    }
}
