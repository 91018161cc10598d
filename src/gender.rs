use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A gender verdict.
///
/// "Unknown" is never a variant: every lookup returns `Option<Gender>`, and
/// `None` means there was no evidence either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    MostlyMale,
    MostlyFemale,
    Unisex,
}

impl Gender {
    /// Collapses "mostly" verdicts onto their base gender.
    ///
    /// ```
    /// use name_gender::Gender;
    ///
    /// assert_eq!(Gender::Male, Gender::MostlyMale.simplified());
    /// assert_eq!(Gender::Unisex, Gender::Unisex.simplified());
    /// ```
    #[inline]
    pub fn simplified(self) -> Gender {
        match self {
            Gender::MostlyMale => Gender::Male,
            Gender::MostlyFemale => Gender::Female,
            other => other,
        }
    }

    /// The same verdict with male and female exchanged.
    #[inline]
    pub fn swapped(self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
            Gender::MostlyMale => Gender::MostlyFemale,
            Gender::MostlyFemale => Gender::MostlyMale,
            Gender::Unisex => Gender::Unisex,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::MostlyMale => "mostly male",
            Gender::MostlyFemale => "mostly female",
            Gender::Unisex => "unisex",
        }
    }
}

/// Applies [`Gender::simplified`] through an optional verdict.
#[inline]
pub fn simplify(gender: Option<Gender>) -> Option<Gender> {
    gender.map(Gender::simplified)
}

#[inline]
pub(crate) fn format_output(gender: Option<Gender>, simplified: bool) -> Option<Gender> {
    if simplified {
        simplify(gender)
    } else {
        gender
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGenderError(String);

impl fmt::Display for ParseGenderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unrecognized gender: {:?}", self.0)
    }
}

impl std::error::Error for ParseGenderError {}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Gender, ParseGenderError> {
        match s.trim().to_ascii_lowercase().replace('_', " ").as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "mostly male" => Ok(Gender::MostlyMale),
            "mostly female" => Ok(Gender::MostlyFemale),
            "unisex" => Ok(Gender::Unisex),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}
