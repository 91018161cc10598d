//! Reads a name lists directory into [`Tables`].
//!
//! The directory holds:
//!
//! * `<Stem>MaleUTF8.csv` and `<Stem>FemaleUTF8.csv` per country, one name
//!   per row with an optional occurrence count (`name;count`)
//! * `diminutives.csv`, rows of `canonical;diminutive;diminutive...`
//! * `countryStats.csv`, rows of `country;population`
//! * `gender_dict.json`, the global dictionary as
//!   `{ "name": [["M", "<codes>"], ...], ... }`

use crate::country::PopulationWeights;
use crate::diminutive::DiminutiveIndex;
use crate::dictionary::{GenderClass, GlobalDictionary};
use crate::frequency::NameFrequencyTable;
use crate::tables::{Tables, TablesBuilder};
use log::{info, warn};
use ahash::AHashMap;
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Countries with frequency tables, and the file stem their lists use.
pub static COUNTRY_STEMS: [(&str, &str); 30] = [
    ("Afghanistan", "Afghanistan"),
    ("Albania", "Albania"),
    ("Australia", "Australia"),
    ("Belgium", "Belgium"),
    ("Brazil", "Brazil"),
    ("Canada", "Canada"),
    ("Czech", "Czech"),
    ("Finland", "Finland"),
    ("Greece", "Greece"),
    ("Hungary", "Hungary"),
    ("India", "India"),
    ("Iran", "Iran"),
    ("Ireland", "Ireland"),
    ("Israel", "Israel"),
    ("Italy", "Italy"),
    ("Japan", "Japan"),
    ("Latvia", "Latvia"),
    ("Norway", "Norway"),
    ("Poland", "Poland"),
    ("Romania", "Romania"),
    ("Russia", "Russia"),
    ("Slovenia", "Slovenia"),
    ("Somalia", "Somalia"),
    ("Spain", "Spain"),
    ("Sweden", "Sweden"),
    ("Turkey", "Turkey"),
    ("UK", "UK"),
    ("Ukraine", "Ukraine"),
    ("USA", "USA"),
    // Frisian lists stand in for the whole country
    ("The Netherlands", "Frisia"),
];

pub const DIMINUTIVES_FILE: &str = "diminutives.csv";
pub const COUNTRY_STATS_FILE: &str = "countryStats.csv";
pub const DICTIONARY_FILE: &str = "gender_dict.json";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse `{}`", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse `{}`", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("invalid count `{value}` at `{}` line {line}", path.display())]
    InvalidCount {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error("invalid population `{value}` at `{}` line {line}", path.display())]
    InvalidWeight {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error("no usable population counts in `{}`", path.display())]
    EmptyWeights { path: PathBuf },
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// Non-blank records of a `;`-separated file, with the line each starts on
fn rows(text: &str, path: &Path) -> Result<Vec<(usize, StringRecord)>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let line = record.position().map_or(0, |pos| pos.line() as usize);
        rows.push((line, record));
    }
    Ok(rows)
}

/// Reads one gendered name list. Names are lowercased. A name with no
/// count counts once, however many times it's listed.
pub fn load_name_list(path: &Path) -> Result<AHashMap<String, u64>, LoadError> {
    let text = read(path)?;
    let mut counts: AHashMap<String, u64> = AHashMap::new();

    for (line, cells) in rows(&text, path)? {
        let name = cells[0].to_lowercase();
        let count = match cells.get(1).map(str::trim) {
            Some(value) if !value.is_empty() => {
                value.parse::<u64>().map_err(|_| LoadError::InvalidCount {
                    path: path.to_path_buf(),
                    line,
                    value: value.to_string(),
                })?
            }
            _ if counts.contains_key(&name) => 0,
            _ => 1,
        };
        *counts.entry(name).or_insert(0) += count;
    }

    Ok(counts)
}

/// Reads a country's male and female lists. `Ok(None)` when either file is
/// missing.
pub fn load_frequency_table(dir: &Path, stem: &str) -> Result<Option<NameFrequencyTable>, LoadError> {
    let male_path = dir.join(format!("{}MaleUTF8.csv", stem));
    let female_path = dir.join(format!("{}FemaleUTF8.csv", stem));

    for path in [&male_path, &female_path] {
        if !path.is_file() {
            warn!("skipping {}: `{}` not found", stem, path.display());
            return Ok(None);
        }
    }

    let male = load_name_list(&male_path)?;
    let female = load_name_list(&female_path)?;
    Ok(Some(NameFrequencyTable::new(male, female)))
}

pub fn load_diminutives(path: &Path) -> Result<DiminutiveIndex, LoadError> {
    let text = read(path)?;
    let mut index = DiminutiveIndex::new();
    for (_, cells) in rows(&text, path)? {
        index.insert(&cells[0], cells.iter().skip(1));
    }
    Ok(index)
}

pub fn load_population_weights(path: &Path) -> Result<PopulationWeights, LoadError> {
    let text = read(path)?;
    let mut counts = Vec::new();

    for (line, cells) in rows(&text, path)? {
        let value = cells.get(1).map(str::trim).unwrap_or("");
        let count = value
            .parse::<f64>()
            .ok()
            .filter(|count| count.is_finite() && *count >= 0.0)
            .ok_or_else(|| LoadError::InvalidWeight {
                path: path.to_path_buf(),
                line,
                value: value.to_string(),
            })?;
        counts.push((cells[0].to_string(), count));
    }

    PopulationWeights::from_counts(counts).ok_or_else(|| LoadError::EmptyWeights {
        path: path.to_path_buf(),
    })
}

/// Parses the global dictionary. Sub-entries with unrecognized class
/// labels are dropped.
pub fn parse_global_dictionary(json: &str, path: &Path) -> Result<GlobalDictionary, LoadError> {
    let raw: AHashMap<String, Vec<(String, String)>> =
        serde_json::from_str(json).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut dictionary = GlobalDictionary::new();
    for (name, sub_entries) in raw {
        let entry = dictionary.entry_mut(&name);
        for (label, codes) in sub_entries {
            match label.parse::<GenderClass>() {
                Ok(class) => entry.push(class, codes),
                Err(e) => warn!("{:?} in `{}`: {}", name, path.display(), e),
            }
        }
    }

    Ok(dictionary)
}

pub fn load_global_dictionary(path: &Path) -> Result<GlobalDictionary, LoadError> {
    parse_global_dictionary(&read(path)?, path)
}

/// Loads every table from a name lists directory.
pub fn load_dir(dir: &Path) -> Result<Tables, LoadError> {
    let mut builder: TablesBuilder = Tables::builder();

    for &(country, stem) in COUNTRY_STEMS.iter() {
        if let Some(table) = load_frequency_table(dir, stem)? {
            builder = builder.frequency_table(country, table);
        }
    }

    let diminutives = load_diminutives(&dir.join(DIMINUTIVES_FILE))?;
    let weights = load_population_weights(&dir.join(COUNTRY_STATS_FILE))?;
    let dictionary = load_global_dictionary(&dir.join(DICTIONARY_FILE))?;

    info!(
        "loaded `{}`: {} diminutives, {} dictionary names, {} population weights",
        dir.display(),
        diminutives.len(),
        dictionary.len(),
        weights.len()
    );

    let tables = builder
        .diminutives(diminutives)
        .weights(weights)
        .dictionary(dictionary)
        .build();
    info!(
        "{} countries with frequency tables",
        tables.frequency_tables().count()
    );
    Ok(tables)
}
