use crate::country::{is_dutch_sphere, is_inverse_order};
use crate::diminutive::NameVariants;
use crate::frequency::{decide, NameFrequencyTable};
use crate::gender::{format_output, Gender};
use crate::initial::{gendered_word, initial_check, Resolution};
use crate::leet::decode_leet;
use crate::normalize::{extract_first_name, invert_name_parts, Order};
use crate::script::{detect_and_transliterate, fold};
use crate::suffix::resolve_by_suffix;
use crate::Resolver;
use log::{debug, trace};
use smallvec::SmallVec;

fn stage<F>(label: &'static str, name: &str, attempt: F) -> Option<Resolution>
where
    F: FnOnce() -> Option<Resolution>,
{
    trace!("{:?}: trying {}", name, label);
    let resolution = attempt();
    if let Some(resolution) = resolution {
        debug!("{:?}: {} gave {:?}", name, label, resolution);
    }
    resolution
}

fn without_last_char(name: &str) -> String {
    match name.char_indices().last() {
        Some((i, _)) => name[..i].to_lowercase(),
        None => String::new(),
    }
}

fn without_first_char(name: &str) -> String {
    let mut chars = name.chars();
    chars.next();
    chars.as_str().to_lowercase()
}

impl Resolver {
    pub(crate) fn frequency_in(
        &self,
        table: &NameFrequencyTable,
        first_name: &str,
        expand_diminutives: bool,
    ) -> Option<Gender> {
        let (male, female) = if expand_diminutives {
            table.counts(self.tables.diminutives().variants(first_name))
        } else {
            table.counts(NameVariants::only(first_name))
        };
        decide(male, female, &self.options)
    }

    /// Frequency verdict for `first_name` (lowercase) in one country's
    /// tables, unsimplified. `None` if there is no table for the country.
    pub fn frequency_lookup(
        &self,
        first_name: &str,
        country: &str,
        expand_diminutives: bool,
    ) -> Option<Gender> {
        let table = self.tables.frequency_table(country)?;
        self.frequency_in(table, first_name, expand_diminutives)
    }

    /// [`frequency_lookup`](Resolver::frequency_lookup), simplified as
    /// configured.
    pub fn country_lookup(
        &self,
        first_name: &str,
        country: &str,
        expand_diminutives: bool,
    ) -> Option<Gender> {
        format_output(
            self.frequency_lookup(first_name, country, expand_diminutives),
            self.options.simplify,
        )
    }

    /// Global dictionary verdict, simplified as configured.
    pub fn global_lookup(
        &self,
        first_name: &str,
        country: Option<&str>,
        strict: bool,
    ) -> Option<Gender> {
        let gender = self
            .tables
            .dictionary()
            .lookup(first_name, country, strict, &self.options);
        format_output(gender, self.options.simplify)
    }

    pub fn suffix_lookup(&self, full_name: &str, country: &str) -> Option<Gender> {
        resolve_by_suffix(full_name, country)
    }

    pub fn initial_check(&self, first_name: &str) -> Option<Resolution> {
        initial_check(first_name)
    }

    /// Resolves an already-extracted first name within one country: the
    /// initial check, then the country's frequency tables, then its column
    /// of the global dictionary.
    pub fn resolve_first_name(
        &self,
        first_name: &str,
        country: &str,
        expand_diminutives: bool,
    ) -> Option<Resolution> {
        initial_check(first_name)
            .or_else(|| {
                self.country_lookup(first_name, country, expand_diminutives)
                    .map(Resolution::Found)
            })
            .or_else(|| {
                self.global_lookup(first_name, Some(country), true)
                    .map(Resolution::Found)
            })
    }

    /// Infers the gender of whoever goes by `name`, which may be a full
    /// name in either order, a username or anything in between.
    ///
    /// `None` means unknown: either nothing matched, or the name is one the
    /// resolver refuses to guess for.
    pub fn resolve_gender(&self, name: &str, country: Option<&str>) -> Option<Gender> {
        let name = detect_and_transliterate(name);
        self.cascade(&name, country).and_then(Resolution::gender)
    }

    fn cascade(&self, name: &str, country: Option<&str>) -> Option<Resolution> {
        let first_word = name.split_whitespace().next()?;
        if let Some(gender) = gendered_word(first_word) {
            debug!("{:?}: leading word {:?} gave {:?}", name, first_word, gender);
            return Some(Resolution::Found(gender));
        }

        let first_name = extract_first_name(name, Order::Direct);
        let single_token = name.split_whitespace().nth(1).is_none();

        country
            .and_then(|country| self.cascade_in_country(name, &first_name, country, single_token))
            .or_else(|| {
                stage("cross-country arbitration", name, || {
                    self.resolve_overall(&first_name, true)
                })
            })
            .or_else(|| {
                stage("folded cross-country arbitration", name, || {
                    self.resolve_overall(&extract_first_name(&fold(name), Order::Direct), true)
                })
            })
            .or_else(|| {
                if !single_token {
                    return None;
                }
                stage("cross-country without last character", name, || {
                    self.resolve_overall(&without_last_char(name), true)
                })
                .or_else(|| {
                    stage("cross-country without first character", name, || {
                        self.resolve_overall(&without_first_char(name), true)
                    })
                })
            })
    }

    fn cascade_in_country(
        &self,
        name: &str,
        first_name: &str,
        country: &str,
        single_token: bool,
    ) -> Option<Resolution> {
        stage("surname suffix", name, || {
            self.suffix_lookup(name, country).map(Resolution::Found)
        })
        .or_else(|| {
            stage("first name", name, || {
                self.resolve_first_name(first_name, country, true)
            })
        })
        .or_else(|| {
            if !is_inverse_order(country) {
                return None;
            }
            stage("inverted surname suffix", name, || {
                self.suffix_lookup(&invert_name_parts(name), country)
                    .map(Resolution::Found)
            })
            .or_else(|| {
                stage("inverted first name", name, || {
                    self.resolve_first_name(&extract_first_name(name, Order::Inverse), country, true)
                })
            })
        })
        .or_else(|| {
            if !single_token {
                return None;
            }
            stage("username", name, || self.resolve_username(name, country))
        })
        .or_else(|| {
            stage("leet", name, || {
                let decoded = decode_leet(name);
                self.resolve_first_name(&extract_first_name(&decoded, Order::Direct), country, true)
            })
        })
        .or_else(|| {
            stage("folded first name", name, || {
                self.resolve_first_name(&extract_first_name(&fold(name), Order::Direct), country, true)
            })
        })
    }

    // Single-token names: "jvandijk" and "bogdanv"-style usernames
    fn resolve_username(&self, name: &str, country: &str) -> Option<Resolution> {
        if is_dutch_sphere(country) {
            if let Some(gender) = self.resolve_dutch_prefix(name, country) {
                return Some(Resolution::Found(gender));
            }
        }

        self.resolve_first_name(&without_last_char(name), country, true)
            .or_else(|| self.resolve_first_name(&without_first_char(name), country, true))
    }

    // Given names glued to a "van"/"vd" surname, as in "pietvandijk"
    fn resolve_dutch_prefix(&self, name: &str, country: &str) -> Option<Gender> {
        let verdicts: SmallVec<[Gender; 4]> = name
            .match_indices('v')
            .filter_map(|(i, _)| {
                self.resolve_first_name(&name[..i].to_lowercase(), country, true)
                    .and_then(Resolution::gender)
            })
            .collect();

        verdicts
            .iter()
            .copied()
            .find(|&gender| gender != Gender::Unisex)
            .or_else(|| verdicts.first().copied())
    }
}
