use serde::{Deserialize, Serialize};

/// Tunable constants of the resolution cascade.
///
/// The defaults were tuned against a hand-labeled sample of developer names
/// and usernames; change them only with a labeled benchmark to compare
/// against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// A frequency-table verdict goes to the majority gender only when the
    /// minority count is below this fraction of the majority count.
    pub ambiguity_threshold: f64,
    /// Margin (in summed magnitude codes) by which one gender must lead in
    /// the global dictionary to be reported without a "mostly" qualifier.
    pub magnitude_threshold: u32,
    /// Report a single male and a single female observation as unisex
    /// without consulting the ratio.
    pub single_sample_tie: bool,
    /// Collapse "mostly male"/"mostly female" verdicts to male/female.
    pub simplify: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            ambiguity_threshold: 0.5,
            magnitude_threshold: 256,
            single_sample_tie: true,
            simplify: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json() {
        let options: Options = serde_json::from_str(r#"{ "simplify": false }"#).unwrap();
        assert!(!options.simplify);
        assert_eq!(256, options.magnitude_threshold);
        assert_eq!(0.5, options.ambiguity_threshold);
    }
}
