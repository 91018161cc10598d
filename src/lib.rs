//! Infers the likely gender of a person from a free-text name or username,
//! optionally knowing their country.
//!
//! Resolution is statistical: it combines per-country first-name frequency
//! tables, surname morphology, a large multi-country dictionary of first
//! names and a handful of username heuristics, and returns `None`
//! (unknown) whenever none of them is confident.
//!
//! ```
//! use name_gender::{Gender, NameFrequencyTable, Options, Resolver, Tables};
//!
//! let portugal = NameFrequencyTable::from_counts(
//!     vec![("joão", 900), ("maria", 2)],
//!     vec![("maria", 1500), ("ana", 700)],
//! );
//! let tables = Tables::builder().frequency_table("Portugal", portugal).build();
//! let resolver = Resolver::new(tables, Options::default());
//!
//! assert_eq!(Some(Gender::Female), resolver.resolve_gender("Maria Silva", Some("Portugal")));
//! assert_eq!(Some(Gender::Male), resolver.resolve_gender("Joao Santos", Some("Portugal")));
//! assert_eq!(Some(Gender::Female), resolver.resolve_gender("Ivanova", Some("Russia")));
//! assert_eq!(None, resolver.resolve_gender("null", Some("Portugal")));
//! ```

mod arbitrate;
mod case;
pub mod config;
pub mod country;
mod decomposition;
pub mod dictionary;
pub mod diminutive;
pub mod frequency;
pub mod gender;
pub mod initial;
pub mod leet;
pub mod load;
mod nickname;
pub mod normalize;
pub mod parse;
mod resolve;
pub mod script;
mod segment;
pub mod suffix;
mod surname;
pub mod tables;
mod title;

pub use config::Options;
pub use country::PopulationWeights;
pub use dictionary::{GenderClass, GlobalDictionary, GlobalNameEntry};
pub use diminutive::DiminutiveIndex;
pub use frequency::NameFrequencyTable;
pub use gender::{simplify, Gender};
pub use initial::Resolution;
pub use load::LoadError;
pub use tables::{Tables, TablesBuilder};

/// Resolves names against a fixed set of [`Tables`].
///
/// Resolution never mutates anything, so one resolver can be shared by
/// reference across threads.
#[derive(Debug, Clone)]
pub struct Resolver {
    tables: Tables,
    options: Options,
}

impl Resolver {
    pub fn new(tables: Tables, options: Options) -> Resolver {
        Resolver { tables, options }
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn resolver_is_shareable() {
        assert_send_sync::<Resolver>();
    }
}
