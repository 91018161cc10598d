use crate::gender::Gender;
use crate::initial::{initial_check, Resolution};
use crate::Resolver;
use log::trace;
use smallvec::SmallVec;

/// Population-weighted votes per (simplified) verdict, in the order each
/// verdict was first seen.
#[derive(Debug, Default)]
struct Tally {
    votes: SmallVec<[(Gender, f64); 3]>,
}

impl Tally {
    fn add(&mut self, gender: Gender, weight: f64) {
        match self.votes.iter_mut().find(|(g, _)| *g == gender) {
            Some((_, total)) => *total += weight,
            None => self.votes.push((gender, weight)),
        }
    }

    // Strictly greater, so ties go to the verdict seen first
    fn winner(&self) -> Option<Gender> {
        let mut best: Option<(Gender, f64)> = None;
        for &(gender, total) in &self.votes {
            if best.map_or(true, |(_, best_total)| total > best_total) {
                best = Some((gender, total));
            }
        }
        best.map(|(gender, _)| gender)
    }
}

impl Resolver {
    /// Resolves a first name with no country to go on: every country's
    /// frequency tables vote, each with its population weight, and the
    /// heaviest verdict wins. Countries are visited alphabetically.
    ///
    /// When no country knows the name, the global dictionary's aggregate
    /// over all its countries decides.
    pub fn resolve_overall(&self, first_name: &str, expand_diminutives: bool) -> Option<Resolution> {
        if let Some(resolution) = initial_check(first_name) {
            return Some(resolution);
        }

        let mut tally = Tally::default();
        for (country, table) in self.tables.frequency_tables() {
            if let Some(gender) = self.frequency_in(table, first_name, expand_diminutives) {
                let weight = self.tables.weights().weight(country);
                trace!("{:?}: {} votes {:?} with {}", first_name, country, gender, weight);
                tally.add(gender.simplified(), weight);
            }
        }

        tally
            .winner()
            .or_else(|| self.global_lookup(first_name, None, false))
            .map(Resolution::Found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heaviest_wins() {
        let mut tally = Tally::default();
        tally.add(Gender::Male, 0.1);
        tally.add(Gender::Female, 0.3);
        tally.add(Gender::Male, 0.15);
        assert_eq!(Some(Gender::Female), tally.winner());
    }

    #[test]
    fn ties_go_to_first_seen() {
        let mut tally = Tally::default();
        tally.add(Gender::Unisex, 0.25);
        tally.add(Gender::Male, 0.25);
        assert_eq!(Some(Gender::Unisex), tally.winner());
    }

    #[test]
    fn zero_weight_still_counts() {
        let mut tally = Tally::default();
        tally.add(Gender::Female, 0.0);
        assert_eq!(Some(Gender::Female), tally.winner());
        assert_eq!(None, Tally::default().winner());
    }
}
