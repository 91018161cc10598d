use ahash::AHashMap;
use std::collections::{btree_set, BTreeSet};

/// Maps nicknames and diminutives ("bob", "sasha") to the canonical names
/// they can stand for ("robert"; "alexander", "alexandra").
#[derive(Debug, Clone, Default)]
pub struct DiminutiveIndex {
    names_by_diminutive: AHashMap<String, BTreeSet<String>>,
}

impl DiminutiveIndex {
    pub fn new() -> DiminutiveIndex {
        DiminutiveIndex::default()
    }

    /// Records that each of `diminutives` can stand for `canonical`.
    /// Everything is stored lowercased.
    pub fn insert<I, S>(&mut self, canonical: &str, diminutives: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let canonical = canonical.trim().to_lowercase();
        if canonical.is_empty() {
            return;
        }

        for diminutive in diminutives {
            let diminutive = diminutive.as_ref().trim().to_lowercase();
            if diminutive.is_empty() {
                continue;
            }
            self.names_by_diminutive
                .entry(diminutive)
                .or_default()
                .insert(canonical.clone());
        }
    }

    pub fn canonical_names(&self, diminutive: &str) -> Option<&BTreeSet<String>> {
        self.names_by_diminutive.get(diminutive)
    }

    pub fn len(&self) -> usize {
        self.names_by_diminutive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names_by_diminutive.is_empty()
    }

    /// The name itself, followed by every distinct canonical name it can be
    /// a diminutive of.
    pub fn variants<'a>(&'a self, name: &'a str) -> NameVariants<'a> {
        NameVariants {
            name,
            yielded_name: false,
            canonical: self.names_by_diminutive.get(name).map(|names| names.iter()),
        }
    }
}

pub struct NameVariants<'a> {
    name: &'a str,
    yielded_name: bool,
    canonical: Option<btree_set::Iter<'a, String>>,
}

impl<'a> NameVariants<'a> {
    /// Just the name, with no diminutive expansion
    pub fn only(name: &'a str) -> NameVariants<'a> {
        NameVariants {
            name,
            yielded_name: false,
            canonical: None,
        }
    }
}

impl<'a> Iterator for NameVariants<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if !self.yielded_name {
            self.yielded_name = true;
            return Some(self.name);
        }

        // A diminutive can list itself among its canonical names
        let name = self.name;
        self.canonical
            .as_mut()?
            .map(String::as_str)
            .find(|&canonical| canonical != name)
    }
}
