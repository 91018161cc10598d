use crate::config::Options;
use crate::country::{dictionary_column, normalise_country_name};
use crate::gender::Gender;
use ahash::AHashMap;
use std::fmt;
use std::str::FromStr;

/// How confidently a global dictionary sub-entry assigns its gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderClass {
    /// `M`
    Male,
    /// `1M`
    ProbablyMale,
    /// `?M`
    MaleLeaning,
    /// `F`
    Female,
    /// `1F`
    ProbablyFemale,
    /// `?F`
    FemaleLeaning,
    /// `?`
    Unisex,
}

impl GenderClass {
    /// The verdict a sub-entry gives on its own.
    pub fn gender(self) -> Gender {
        match self {
            GenderClass::Male => Gender::Male,
            GenderClass::ProbablyMale | GenderClass::MaleLeaning => Gender::MostlyMale,
            GenderClass::Female => Gender::Female,
            GenderClass::ProbablyFemale | GenderClass::FemaleLeaning => Gender::MostlyFemale,
            GenderClass::Unisex => Gender::Unisex,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GenderClass::Male => "M",
            GenderClass::ProbablyMale => "1M",
            GenderClass::MaleLeaning => "?M",
            GenderClass::Female => "F",
            GenderClass::ProbablyFemale => "1F",
            GenderClass::FemaleLeaning => "?F",
            GenderClass::Unisex => "?",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGenderClassError(String);

impl fmt::Display for ParseGenderClassError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown gender class label {:?}", self.0)
    }
}

impl std::error::Error for ParseGenderClassError {}

impl FromStr for GenderClass {
    type Err = ParseGenderClassError;

    fn from_str(label: &str) -> Result<GenderClass, ParseGenderClassError> {
        match label {
            "M" => Ok(GenderClass::Male),
            "1M" => Ok(GenderClass::ProbablyMale),
            "?M" => Ok(GenderClass::MaleLeaning),
            "F" => Ok(GenderClass::Female),
            "1F" => Ok(GenderClass::ProbablyFemale),
            "?F" => Ok(GenderClass::FemaleLeaning),
            "?" => Ok(GenderClass::Unisex),
            _ => Err(ParseGenderClassError(label.to_string())),
        }
    }
}

impl fmt::Display for GenderClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes one frequency code: a single hex digit, optionally padded with
/// whitespace. Anything else (blank, longer, not hex) means no data.
fn magnitude(code: &str) -> Option<u32> {
    let mut chars = code.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(16),
        _ => None,
    }
}

/// All the ways a first name is classified in the global dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalNameEntry {
    sub_entries: Vec<(GenderClass, String)>,
}

impl GlobalNameEntry {
    pub fn new() -> GlobalNameEntry {
        GlobalNameEntry::default()
    }

    /// Adds a classification. `codes` holds one character per dictionary
    /// column, in column order; they're decoded lazily at lookup time.
    pub fn push(&mut self, class: GenderClass, codes: impl Into<String>) {
        self.sub_entries.push((class, codes.into()));
    }

    pub fn sub_entries(&self) -> impl Iterator<Item = (GenderClass, &str)> {
        self.sub_entries
            .iter()
            .map(|(class, codes)| (*class, codes.as_str()))
    }

    fn codes(codes: &str) -> impl Iterator<Item = u32> + '_ {
        codes.chars().filter_map(|c| c.to_digit(16))
    }

    fn code_at(codes: &str, column: usize) -> Option<u32> {
        let (start, c) = codes.char_indices().nth(column)?;
        magnitude(&codes[start..start + c.len_utf8()])
    }

    /// Verdict from the codes of every country, summed per gender.
    pub fn overall(&self, options: &Options) -> Gender {
        let (mut male, mut female) = (0i64, 0i64);
        for (class, codes) in &self.sub_entries {
            let total: i64 = GlobalNameEntry::codes(codes).map(i64::from).sum();
            match class.gender() {
                Gender::Male | Gender::MostlyMale => male += total,
                Gender::Female | Gender::MostlyFemale => female += total,
                Gender::Unisex => {}
            }
        }

        let threshold = i64::from(options.magnitude_threshold);
        let lead = male - female;
        if lead > threshold {
            Gender::Male
        } else if lead > 0 {
            Gender::MostlyMale
        } else if -lead > threshold {
            Gender::Female
        } else if lead < 0 {
            Gender::MostlyFemale
        } else {
            Gender::Unisex
        }
    }

    /// Verdict for a single dictionary column: only decisive when exactly
    /// one sub-entry has data there.
    pub fn in_column(&self, column: usize) -> Option<Gender> {
        let mut with_data = self
            .sub_entries
            .iter()
            .filter(|(_, codes)| GlobalNameEntry::code_at(codes, column).is_some());

        match (with_data.next(), with_data.next()) {
            (Some((class, _)), None) => Some(class.gender()),
            _ => None,
        }
    }
}

/// First names from many countries, keyed by lowercase name, with per-country
/// frequency codes.
#[derive(Debug, Clone, Default)]
pub struct GlobalDictionary {
    entries: AHashMap<String, GlobalNameEntry>,
}

impl GlobalDictionary {
    pub fn new() -> GlobalDictionary {
        GlobalDictionary::default()
    }

    pub fn insert(&mut self, name: &str, entry: GlobalNameEntry) {
        self.entries.insert(name.to_lowercase(), entry);
    }

    pub fn entry_mut(&mut self, name: &str) -> &mut GlobalNameEntry {
        self.entries.entry(name.to_lowercase()).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&GlobalNameEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks a first name up. With `strict`, only the named country's column
    /// counts, and the country has to be one the dictionary has a column
    /// for (after mapping it onto its region, if any); otherwise the verdict
    /// aggregates every country. The result is not simplified.
    pub fn lookup(
        &self,
        first_name: &str,
        country: Option<&str>,
        strict: bool,
        options: &Options,
    ) -> Option<Gender> {
        let lowercase = first_name.to_lowercase();
        let entry = self.get(&lowercase)?;

        if strict {
            let column = dictionary_column(normalise_country_name(country?))?;
            entry.in_column(column)
        } else {
            Some(entry.overall(options))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One code per column; `codes(&[(38, 'A')])` puts 0xA in the Russia column
    fn codes(values: &[(usize, char)]) -> String {
        let mut codes = vec![' '; crate::country::DICTIONARY_COLUMNS];
        for &(column, value) in values {
            codes[column] = value;
        }
        codes.into_iter().collect()
    }

    fn dictionary() -> GlobalDictionary {
        let mut dictionary = GlobalDictionary::new();

        let andrea = dictionary.entry_mut("Andrea");
        andrea.push(GenderClass::Male, codes(&[(3, 'D')]));
        andrea.push(GenderClass::Female, codes(&[(2, '8'), (12, '7'), (3, '2')]));

        let mut sasha = GlobalNameEntry::new();
        sasha.push(GenderClass::MaleLeaning, codes(&[(38, '6'), (41, '4')]));
        dictionary.insert("sasha", sasha);

        let kim = dictionary.entry_mut("kim");
        kim.push(GenderClass::Unisex, codes(&[(52, 'F')]));

        dictionary
    }

    #[test]
    fn labels() {
        for label in ["M", "1M", "?M", "F", "1F", "?F", "?"] {
            assert_eq!(label, label.parse::<GenderClass>().unwrap().as_str());
        }
        assert!("X".parse::<GenderClass>().is_err());
        assert!("=".parse::<GenderClass>().is_err());
    }

    #[test]
    fn magnitudes() {
        assert_eq!(Some(0xF), magnitude("F"));
        assert_eq!(Some(3), magnitude(" 3"));
        assert_eq!(None, magnitude(" "));
        assert_eq!(None, magnitude("12"));
        assert_eq!(None, magnitude("g"));
    }

    #[test]
    fn overall() {
        let options = Options::default();
        let dictionary = dictionary();

        // 13 male against 17 female, well inside the threshold
        assert_eq!(
            Some(Gender::MostlyFemale),
            dictionary.lookup("andrea", None, false, &options)
        );
        assert_eq!(
            Some(Gender::MostlyMale),
            dictionary.lookup("Sasha", Some("Narnia"), false, &options)
        );
        assert_eq!(Some(Gender::Unisex), dictionary.lookup("kim", None, false, &options));
        assert_eq!(None, dictionary.lookup("zebulon", None, false, &options));

        let options = Options {
            magnitude_threshold: 3,
            ..Options::default()
        };
        assert_eq!(
            Some(Gender::Female),
            dictionary.lookup("andrea", None, false, &options)
        );
    }

    #[test]
    fn lead_equal_to_threshold_is_mostly() {
        let dictionary = dictionary();
        let at = |threshold| Options {
            magnitude_threshold: threshold,
            ..Options::default()
        };

        // Sasha leads by 10, Andrea trails by 4
        assert_eq!(
            Some(Gender::MostlyMale),
            dictionary.lookup("sasha", None, false, &at(10))
        );
        assert_eq!(Some(Gender::Male), dictionary.lookup("sasha", None, false, &at(9)));
        assert_eq!(
            Some(Gender::MostlyFemale),
            dictionary.lookup("andrea", None, false, &at(4))
        );
    }

    #[test]
    fn strict() {
        let options = Options::default();
        let dictionary = dictionary();

        assert_eq!(
            Some(Gender::Female),
            dictionary.lookup("andrea", Some("USA"), true, &options)
        );
        // Both sub-entries have Italian data
        assert_eq!(None, dictionary.lookup("andrea", Some("Italy"), true, &options));
        assert_eq!(None, dictionary.lookup("andrea", Some("Japan"), true, &options));
        assert_eq!(None, dictionary.lookup("andrea", Some("Narnia"), true, &options));
        assert_eq!(None, dictionary.lookup("andrea", None, true, &options));
        assert_eq!(
            Some(Gender::MostlyMale),
            dictionary.lookup("sasha", Some("Ukraine"), true, &options)
        );
    }

    #[test]
    fn strict_through_region() {
        let options = Options::default();
        let dictionary = dictionary();
        assert_eq!(
            Some(Gender::Unisex),
            dictionary.lookup("kim", Some("South Korea"), true, &options)
        );
    }

    #[test]
    fn blank_codes_are_unisex_overall() {
        let options = Options::default();
        let mut dictionary = GlobalDictionary::new();
        dictionary.entry_mut("ash").push(GenderClass::Male, codes(&[]));
        assert_eq!(Some(Gender::Unisex), dictionary.lookup("ash", None, false, &options));
        assert_eq!(None, dictionary.lookup("ash", Some("UK"), true, &options));
    }
}
