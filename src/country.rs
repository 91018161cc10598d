use ahash::AHashMap;

// Column order of the per-country frequency codes in the global dictionary
static COLUMN_BY_COUNTRY: phf::Map<&'static str, usize> =
    include!(concat!(env!("OUT_DIR"), "/column_by_country.rs"));

static REGION_BY_COUNTRY: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/region_by_country.rs"));

// Countries where names are commonly written family name first
static INVERSE_ORDER: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/inverse_order.rs"));

// Countries where usernames like "jvdberg" glue a given name to a "van der"
static DUTCH_SPHERE: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/dutch_sphere.rs"));

/// Number of per-country columns in the global dictionary.
pub const DICTIONARY_COLUMNS: usize = 55;

/// Maps countries the global dictionary only covers as part of a region
/// (e.g. "Egypt") onto that region ("Arabia/Persia").
///
/// ```
/// use name_gender::country::normalise_country_name;
///
/// assert_eq!("Arabia/Persia", normalise_country_name("Egypt"));
/// assert_eq!("Korea", normalise_country_name("South Korea"));
/// assert_eq!("Portugal", normalise_country_name("Portugal"));
/// ```
pub fn normalise_country_name(country: &str) -> &str {
    REGION_BY_COUNTRY.get(country).copied().unwrap_or(country)
}

/// The global dictionary column of an already-normalised country name.
pub fn dictionary_column(country: &str) -> Option<usize> {
    COLUMN_BY_COUNTRY.get(country).copied()
}

pub fn is_inverse_order(country: &str) -> bool {
    INVERSE_ORDER.contains(country)
}

pub fn is_dutch_sphere(country: &str) -> bool {
    DUTCH_SPHERE.contains(country)
}

/// Each country's share of the population whose names are being resolved,
/// used to weigh conflicting per-country verdicts against each other.
#[derive(Debug, Clone, Default)]
pub struct PopulationWeights {
    weights: AHashMap<String, f64>,
}

impl PopulationWeights {
    /// Normalizes raw population counts so the weights sum to one. Returns
    /// `None` unless the counts are finite, non-negative and sum to more
    /// than zero.
    pub fn from_counts<I, S>(counts: I) -> Option<PopulationWeights>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut weights = AHashMap::new();
        for (country, count) in counts {
            if !count.is_finite() || count < 0.0 {
                return None;
            }
            *weights.entry(country.into()).or_insert(0.0) += count;
        }

        let total: f64 = weights.values().sum();
        if total <= 0.0 {
            return None;
        }
        for weight in weights.values_mut() {
            *weight /= total;
        }

        Some(PopulationWeights { weights })
    }

    /// Countries missing from the weights carry no weight.
    #[inline]
    pub fn weight(&self, country: &str) -> f64 {
        self.weights.get(country).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns() {
        assert_eq!(Some(0), dictionary_column("UK"));
        assert_eq!(Some(5), dictionary_column("Portugal"));
        assert_eq!(Some(38), dictionary_column("Russia"));
        assert_eq!(Some(DICTIONARY_COLUMNS - 1), dictionary_column("other countries"));
        assert_eq!(None, dictionary_column("Egypt"));
        assert_eq!(Some(47), dictionary_column(normalise_country_name("Egypt")));
        assert_eq!(COLUMN_BY_COUNTRY.len(), DICTIONARY_COLUMNS);
    }

    #[test]
    fn regions() {
        assert_eq!("India/Sri Lanka", normalise_country_name("Pakistan"));
        assert_eq!("Arabia/Persia", normalise_country_name("Iran"));
        assert_eq!("Narnia", normalise_country_name("Narnia"));
    }

    #[test]
    fn name_order() {
        assert!(is_inverse_order("Hungary"));
        assert!(is_inverse_order("Russia"));
        assert!(!is_inverse_order("Portugal"));
        assert!(is_dutch_sphere("The Netherlands"));
        assert!(!is_dutch_sphere("Germany"));
    }

    #[test]
    fn weights_are_normalized() {
        let weights =
            PopulationWeights::from_counts(vec![("USA", 300.0), ("UK", 60.0), ("Malta", 40.0)])
                .unwrap();
        assert!((weights.weight("USA") - 0.75).abs() < 1e-9);
        assert!((weights.weight("Malta") - 0.1).abs() < 1e-9);
        assert_eq!(0.0, weights.weight("Narnia"));
    }

    #[test]
    fn degenerate_weights() {
        assert!(PopulationWeights::from_counts(Vec::<(String, f64)>::new()).is_none());
        assert!(PopulationWeights::from_counts(vec![("USA", 0.0)]).is_none());
        assert!(PopulationWeights::from_counts(vec![("USA", -1.0)]).is_none());
    }
}
