use crate::country::PopulationWeights;
use crate::diminutive::DiminutiveIndex;
use crate::dictionary::GlobalDictionary;
use crate::frequency::NameFrequencyTable;
use std::collections::BTreeMap;

/// The read-only data a [`Resolver`](crate::Resolver) consults.
///
/// Frequency tables are kept in country-name order, which is the order
/// cross-country arbitration visits them in.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    frequencies: BTreeMap<String, NameFrequencyTable>,
    diminutives: DiminutiveIndex,
    dictionary: GlobalDictionary,
    weights: PopulationWeights,
}

impl Tables {
    pub fn builder() -> TablesBuilder {
        TablesBuilder::default()
    }

    pub fn frequency_table(&self, country: &str) -> Option<&NameFrequencyTable> {
        self.frequencies.get(country)
    }

    /// Every country with a frequency table, alphabetically.
    pub fn frequency_tables(&self) -> impl Iterator<Item = (&str, &NameFrequencyTable)> {
        self.frequencies
            .iter()
            .map(|(country, table)| (country.as_str(), table))
    }

    pub fn diminutives(&self) -> &DiminutiveIndex {
        &self.diminutives
    }

    pub fn dictionary(&self) -> &GlobalDictionary {
        &self.dictionary
    }

    pub fn weights(&self) -> &PopulationWeights {
        &self.weights
    }
}

#[derive(Debug, Default)]
pub struct TablesBuilder {
    tables: Tables,
}

impl TablesBuilder {
    /// Replaces any table already given for `country`.
    pub fn frequency_table(mut self, country: &str, table: NameFrequencyTable) -> TablesBuilder {
        self.tables.frequencies.insert(country.to_string(), table);
        self
    }

    pub fn diminutives(mut self, diminutives: DiminutiveIndex) -> TablesBuilder {
        self.tables.diminutives = diminutives;
        self
    }

    pub fn dictionary(mut self, dictionary: GlobalDictionary) -> TablesBuilder {
        self.tables.dictionary = dictionary;
        self
    }

    pub fn weights(mut self, weights: PopulationWeights) -> TablesBuilder {
        self.tables.weights = weights;
        self
    }

    pub fn build(self) -> Tables {
        self.tables
    }
}
