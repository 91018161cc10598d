use crate::gender::Gender;
use phf::phf_map;

/// Surname endings that mark one gender in a country's naming tradition.
#[derive(Debug)]
pub struct SuffixRule {
    pub include: &'static [&'static str],
    pub exclude: &'static [&'static str],
}

#[derive(Debug)]
pub struct SuffixRuleSet {
    pub male: SuffixRule,
    pub female: SuffixRule,
}

// "in"/"yn" are left out of the male endings because of usernames like
// "B-Rain" and "Earwin"
static RUSSIAN: SuffixRuleSet = SuffixRuleSet {
    male: SuffixRule {
        include: &[
            "ov", "ev", "sky", "skiy", "iy", "uy", "oy", "skij", "ij", "uj", "oj", "off",
        ],
        exclude: &[
            "Liubov", "Ljubov", "Lyubov", "boy", "Boy", "toy", "Toy", "dev", "Dev",
        ],
    },
    female: SuffixRule {
        include: &["ova", "eva", "skaya", "aya", "eya", "oya", "iaya"],
        exclude: &[],
    },
};

static MACEDONIAN: SuffixRuleSet = SuffixRuleSet {
    male: SuffixRule {
        include: &["ov", "ev", "ski", "evsk"],
        exclude: &[
            "Iakov", "Jakov", "Yakov", "dev", "Dev", "Lev", "boy", "Boy", "toy", "Toy",
        ],
    },
    female: SuffixRule {
        include: &["ova", "eva", "ska", "evska"],
        exclude: &[],
    },
};

// No "-ska": it would match "Polska"
static POLISH: SuffixRuleSet = SuffixRuleSet {
    male: SuffixRule {
        include: &["ski", "sky", "cki", "cky"],
        exclude: &[],
    },
    female: SuffixRule {
        include: &["cka"],
        exclude: &[],
    },
};

static CZECH: SuffixRuleSet = SuffixRuleSet {
    male: SuffixRule {
        include: &["ov", "sky", "ny"],
        exclude: &[],
    },
    female: SuffixRule {
        include: &["ova", "ska", "na"],
        exclude: &[],
    },
};

// Only the Russian-derived forms of the Latvian male "-s", which can't
// otherwise be told apart from an English plural
static LATVIAN: SuffixRuleSet = SuffixRuleSet {
    male: SuffixRule {
        include: &["š", "ovs", "ins"],
        exclude: &[],
    },
    female: SuffixRule {
        include: &["ina"],
        exclude: &[],
    },
};

static LITHUANIAN: SuffixRuleSet = SuffixRuleSet {
    male: SuffixRule {
        include: &[
            "aitis", "utis", "ytis", "enas", "unas", "inis", "ynis", "onis", "ius", "elis",
        ],
        exclude: &[],
    },
    female: SuffixRule {
        include: &["iene", "aite", "yte", "ute", "te"],
        exclude: &[],
    },
};

static RULES_BY_COUNTRY: phf::Map<&'static str, &'static SuffixRuleSet> = phf_map! {
    "Russia" => &RUSSIAN,
    "Belarus" => &RUSSIAN,
    "Ukraine" => &RUSSIAN,
    "Turkmenistan" => &RUSSIAN,
    "Kyrgyzstan" => &RUSSIAN,
    "Tajikistan" => &RUSSIAN,
    "Kazakhstan" => &RUSSIAN,
    "Uzbekistan" => &RUSSIAN,
    "Azerbaijan" => &RUSSIAN,
    "Bulgaria" => &RUSSIAN,
    "Macedonia (FYROM)" => &MACEDONIAN,
    "Poland" => &POLISH,
    "Czech Republic" => &CZECH,
    "Latvia" => &LATVIAN,
    "Lithuania" => &LITHUANIAN,
};

pub fn rules_for(country: &str) -> Option<&'static SuffixRuleSet> {
    RULES_BY_COUNTRY.get(country).copied()
}

impl SuffixRuleSet {
    fn rule(&self, gender: Gender) -> Option<&SuffixRule> {
        match gender {
            Gender::Male => Some(&self.male),
            Gender::Female => Some(&self.female),
            _ => None,
        }
    }
}

impl SuffixRule {
    /// Whether `full_name` carries one of the included endings and none of
    /// the excluded ones.
    pub fn matches(&self, full_name: &str) -> bool {
        self.include.iter().any(|suffix| full_name.ends_with(suffix))
            && !self.exclude.iter().any(|suffix| full_name.ends_with(suffix))
    }
}

/// Returns `gender` if the country's rules for it match the end of
/// `full_name`. Only `Male` and `Female` have rules.
pub fn match_suffix(full_name: &str, country: &str, gender: Gender) -> Option<Gender> {
    let rule = rules_for(country)?.rule(gender)?;
    if rule.matches(full_name) {
        Some(gender)
    } else {
        None
    }
}

/// Infers gender from a surname ending, trying the male rules first.
///
/// ```
/// use name_gender::{suffix::resolve_by_suffix, Gender};
///
/// assert_eq!(Some(Gender::Female), resolve_by_suffix("Anna Ivanova", "Russia"));
/// assert_eq!(Some(Gender::Male), resolve_by_suffix("Ivan Ivanov", "Russia"));
/// assert_eq!(None, resolve_by_suffix("Ivan Ivanov", "Portugal"));
/// ```
pub fn resolve_by_suffix(full_name: &str, country: &str) -> Option<Gender> {
    match_suffix(full_name, country, Gender::Male)
        .or_else(|| match_suffix(full_name, country, Gender::Female))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn russian() {
        assert_eq!(Some(Gender::Female), resolve_by_suffix("Ivanova", "Russia"));
        assert_eq!(Some(Gender::Male), resolve_by_suffix("Dostoevsky", "Russia"));
        assert_eq!(Some(Gender::Female), resolve_by_suffix("Tolstaya", "Ukraine"));
        assert_eq!(None, resolve_by_suffix("Bogdan", "Russia"));
    }

    #[test]
    fn exclusions() {
        assert_eq!(None, resolve_by_suffix("Lyubov", "Russia"));
        assert_eq!(None, resolve_by_suffix("webdev", "Belarus"));
        assert_eq!(None, resolve_by_suffix("Lev", "Macedonia (FYROM)"));
        assert_eq!(Some(Gender::Male), resolve_by_suffix("Lev", "Russia"));
    }

    #[test]
    fn polish_and_czech() {
        assert_eq!(Some(Gender::Male), resolve_by_suffix("Kowalski", "Poland"));
        assert_eq!(Some(Gender::Female), resolve_by_suffix("Kowalska", "Czech Republic"));
        assert_eq!(None, resolve_by_suffix("Polska", "Poland"));
    }

    #[test]
    fn non_ascii_endings() {
        assert_eq!(Some(Gender::Male), resolve_by_suffix("Kalniņš", "Latvia"));
        assert_eq!(Some(Gender::Female), resolve_by_suffix("Kazlauskiene", "Lithuania"));
    }

    #[test]
    fn only_binary_genders_have_rules() {
        assert_eq!(None, match_suffix("Ivanov", "Russia", Gender::Unisex));
        assert_eq!(Some(Gender::Male), match_suffix("Ivanov", "Russia", Gender::Male));
        assert_eq!(None, match_suffix("Ivanov", "Russia", Gender::Female));
    }

    #[test]
    fn unknown_country() {
        assert!(rules_for("Narnia").is_none());
        assert!(rules_for("Bulgaria").is_some());
    }
}
