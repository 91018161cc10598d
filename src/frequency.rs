use crate::config::Options;
use crate::gender::Gender;
use crate::script::fold;
use ahash::AHashMap;

/// Occurrence counts of first names among men and women of one country.
///
/// Keys are lowercase. Every name is also reachable through its
/// diacritic-folded spelling ("jose" as well as "josé"), with the same count,
/// unless the folded spelling is a name in its own right.
#[derive(Debug, Clone, Default)]
pub struct NameFrequencyTable {
    male: AHashMap<String, u64>,
    female: AHashMap<String, u64>,
}

fn with_folded_variants(mut counts: AHashMap<String, u64>) -> AHashMap<String, u64> {
    // Sorted so that when two spellings fold together, the winner doesn't
    // depend on hash order
    let mut names: Vec<(String, u64)> = counts
        .iter()
        .filter(|(name, _)| !name.is_ascii())
        .map(|(name, &count)| (name.clone(), count))
        .collect();
    names.sort();

    for (name, count) in names {
        let folded = fold(&name).to_lowercase();
        if !folded.is_empty() {
            counts.entry(folded).or_insert(count);
        }
    }

    counts
}

impl NameFrequencyTable {
    pub fn new(male: AHashMap<String, u64>, female: AHashMap<String, u64>) -> NameFrequencyTable {
        NameFrequencyTable {
            male: with_folded_variants(male),
            female: with_folded_variants(female),
        }
    }

    /// Builds a table from (name, count) pairs, lowercasing names and
    /// summing the counts of repeats.
    pub fn from_counts<M, F, S>(male: M, female: F) -> NameFrequencyTable
    where
        M: IntoIterator<Item = (S, u64)>,
        F: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        fn collect<I, S>(pairs: I) -> AHashMap<String, u64>
        where
            I: IntoIterator<Item = (S, u64)>,
            S: AsRef<str>,
        {
            let mut counts = AHashMap::new();
            for (name, count) in pairs {
                *counts.entry(name.as_ref().to_lowercase()).or_insert(0) += count;
            }
            counts
        }

        NameFrequencyTable::new(collect(male), collect(female))
    }

    #[inline]
    pub fn male_count(&self, name: &str) -> u64 {
        self.male.get(name).copied().unwrap_or(0)
    }

    #[inline]
    pub fn female_count(&self, name: &str) -> u64 {
        self.female.get(name).copied().unwrap_or(0)
    }

    /// Summed (male, female) counts over a set of spellings of one name.
    pub fn counts<'a, I>(&self, names: I) -> (u64, u64)
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().fold((0, 0), |(male, female), name| {
            (male + self.male_count(name), female + self.female_count(name))
        })
    }

    pub fn len(&self) -> usize {
        self.male.len() + self.female.len()
    }

    pub fn is_empty(&self) -> bool {
        self.male.is_empty() && self.female.is_empty()
    }
}

/// Turns male/female occurrence counts into a verdict.
///
/// One-sided evidence is decisive; otherwise the majority only wins (as a
/// "mostly" verdict) when the minority is under `ambiguity_threshold` of it.
///
/// ```
/// use name_gender::{frequency::decide, Gender, Options};
///
/// let options = Options::default();
/// assert_eq!(Some(Gender::Male), decide(12, 0, &options));
/// assert_eq!(Some(Gender::MostlyFemale), decide(3, 100, &options));
/// assert_eq!(Some(Gender::Unisex), decide(60, 100, &options));
/// assert_eq!(None, decide(0, 0, &options));
/// ```
pub fn decide(male: u64, female: u64, options: &Options) -> Option<Gender> {
    match (male, female) {
        (0, 0) => None,
        (_, 0) => Some(Gender::Male),
        (0, _) => Some(Gender::Female),
        (1, 1) if options.single_sample_tie => Some(Gender::Unisex),
        _ => {
            let (larger, smaller, winner) = if male > female {
                (male, female, Gender::MostlyMale)
            } else {
                (female, male, Gender::MostlyFemale)
            };

            if (smaller as f64) / (larger as f64) < options.ambiguity_threshold {
                Some(winner)
            } else {
                Some(Gender::Unisex)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folded_variants() {
        let table = NameFrequencyTable::from_counts(
            vec![("José", 40), ("Jose", 10)],
            vec![("Zoë", 7)],
        );
        assert_eq!(40, table.male_count("josé"));
        // An existing undecorated spelling keeps its own count
        assert_eq!(10, table.male_count("jose"));
        assert_eq!(7, table.female_count("zoë"));
        assert_eq!(7, table.female_count("zoe"));
        assert_eq!(0, table.female_count("jose"));
    }

    #[test]
    fn repeated_names_are_summed() {
        let table = NameFrequencyTable::from_counts(vec![("Anna", 2), ("anna", 3)], vec![]);
        assert_eq!(5, table.male_count("anna"));
    }

    #[test]
    fn counts_over_variants() {
        let table = NameFrequencyTable::from_counts(
            vec![("robert", 100), ("bob", 5)],
            vec![("roberta", 20), ("bobbie", 1)],
        );
        assert_eq!((105, 20), table.counts(["bob", "robert", "roberta"]));
        assert_eq!((0, 0), table.counts(["missing"]));
    }

    #[test]
    fn single_samples_tie() {
        let options = Options::default();
        assert_eq!(Some(Gender::Unisex), decide(1, 1, &options));

        let options = Options {
            single_sample_tie: false,
            ..Options::default()
        };
        assert_eq!(Some(Gender::Unisex), decide(1, 1, &options));
    }

    #[test]
    fn threshold_is_exclusive() {
        let options = Options::default();
        assert_eq!(Some(Gender::Unisex), decide(10, 5, &options));
        assert_eq!(Some(Gender::MostlyMale), decide(11, 5, &options));
        assert_eq!(Some(Gender::Unisex), decide(7, 7, &options));
    }

    #[test]
    fn symmetric_under_swap() {
        let options = Options::default();
        for male in 0..12 {
            for female in 0..12 {
                assert_eq!(
                    decide(male, female, &options).map(Gender::swapped),
                    decide(female, male, &options),
                    "{} / {}",
                    male,
                    female
                );
            }
        }
    }
}
