use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::term::TermFrequency;

/// Default size of a document profile (top-N terms retained).
pub const DEFAULT_TOP_TERM_COUNT: usize = 100;
/// Default number of result pairs reported.
pub const DEFAULT_TOP_PAIR_COUNT: usize = 10;
/// Default stop-word set, already in normalized (uppercase) form.
pub const DEFAULT_STOP_WORDS: [&str; 6] = ["A", "AND", "AN", "OF", "IN", "THE"];

/// Fixed parameters of one pipeline run.
/// Passed explicitly into the profiler instead of living as hidden globals,
/// so tests can vary the term budget and the stop-word set.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProfileConfig {
    /// Size of the per-document profile (N)
    pub top_term_count: usize,
    /// Number of result pairs (K)
    pub top_pair_count: usize,
    /// Terms excluded from frequency counting, normalized form
    pub stop_words: HashSet<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        ProfileConfig {
            top_term_count: DEFAULT_TOP_TERM_COUNT,
            top_pair_count: DEFAULT_TOP_PAIR_COUNT,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Profile struct
/// The normalized frequency profile of one document: its top-N terms, each
/// weighted by relative frequency (raw count divided by the document's total
/// word count). Immutable once built.
///
/// Weights are fractions of the true total word count (stop-words included
/// in the denominator), so every retained weight lies in (0, 1] and the
/// retained weights sum to at most 1.0.
///
/// # Examples
/// ```
/// use lexsim::analyzer::profile::{Profile, ProfileConfig};
///
/// let profile = Profile::build("THE CAT SAT ON THE MAT", &ProfileConfig::default());
/// assert_eq!(profile.weight("CAT"), Some(1.0 / 6.0));
/// assert_eq!(profile.weight("THE"), None);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Profile {
    #[serde(with = "indexmap::map::serde_seq")]
    weights: IndexMap<String, f64>,
    total_word_count: u64,
}

/// Implementation for deriving a profile
impl Profile {
    /// Profile a document text in one step: tokenize, count, select, normalize.
    pub fn build(text: &str, config: &ProfileConfig) -> Self {
        let freq = TermFrequency::from_text(text, &config.stop_words);
        Self::from_frequency(&freq, config.top_term_count)
    }

    /// Derive a profile from an already-counted frequency table.
    /// Takes the `top_term_count` highest-count terms (ties broken by
    /// ascending term text) and divides each count by the total word count.
    /// A zero-word document yields an empty profile; no division happens.
    pub fn from_frequency(freq: &TermFrequency, top_term_count: usize) -> Self {
        let total = freq.total_word_count();
        if total == 0 {
            return Profile::default();
        }
        let mut ranked = freq.sorted_count_vector();
        ranked.truncate(top_term_count);
        let weights = ranked
            .into_iter()
            .map(|(term, count)| (term, count as f64 / total as f64))
            .collect();
        Profile {
            weights,
            total_word_count: total,
        }
    }
}

/// Implementation for reading a profile
impl Profile {
    /// Relative-frequency weight of one term, `None` when the term was not
    /// retained in the profile
    #[inline]
    pub fn weight(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    /// Number of retained terms (≤ top_term_count)
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The document's total word count, stop-words included.
    /// Multiplying a weight by this recovers the raw term count.
    #[inline]
    pub fn total_word_count(&self) -> u64 {
        self.total_word_count
    }

    /// Iterate retained terms with their weights, in rank order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, &w)| (term.as_str(), w))
    }
}

/// Similarity between two profiles
impl Profile {
    /// Sparse dot product over shared vocabulary:
    /// Σ weight_self(t) × weight_other(t) for every term t present in both
    /// profiles. Terms present in only one profile contribute zero. No
    /// magnitude normalization is applied.
    ///
    /// Iterates the smaller profile and probes the larger, so a pair costs
    /// O(min(|self|, |other|)) lookups.
    pub fn dot(&self, other: &Profile) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .weights
            .iter()
            .filter_map(|(term, w)| large.weights.get(term).map(|v| w * v))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_a_weights_use_true_totals() {
        let config = ProfileConfig::default();
        let x = Profile::build("THE CAT SAT ON THE MAT", &config);
        assert_eq!(x.len(), 4);
        assert_eq!(x.total_word_count(), 6);
        for term in ["CAT", "SAT", "ON", "MAT"] {
            assert_eq!(x.weight(term), Some(1.0 / 6.0));
        }
    }

    #[test]
    fn profile_size_is_bounded() {
        let config = ProfileConfig {
            top_term_count: 3,
            ..ProfileConfig::default()
        };
        let profile = Profile::build("one two three four five six", &config);
        assert_eq!(profile.len(), 3);
    }

    #[test]
    fn truncation_keeps_highest_counts_with_lexicographic_ties() {
        let config = ProfileConfig {
            top_term_count: 2,
            stop_words: HashSet::new(),
            ..ProfileConfig::default()
        };
        // BETA appears twice; ALPHA and GAMMA tie at one, ALPHA wins the slot.
        let profile = Profile::build("beta gamma beta alpha", &config);
        assert_eq!(profile.weight("BETA"), Some(0.5));
        assert_eq!(profile.weight("ALPHA"), Some(0.25));
        assert_eq!(profile.weight("GAMMA"), None);
    }

    #[test]
    fn weights_are_positive_and_bounded() {
        let profile = Profile::build("word word word", &ProfileConfig::default());
        assert_eq!(profile.weight("WORD"), Some(1.0));
        for (_, w) in profile.iter() {
            assert!(w > 0.0 && w <= 1.0);
        }
    }

    #[test]
    fn retained_weights_sum_to_at_most_one() {
        let config = ProfileConfig {
            top_term_count: 2,
            ..ProfileConfig::default()
        };
        let profile = Profile::build("a b c d e f g b c", &config);
        let sum: f64 = profile.iter().map(|(_, w)| w).sum();
        assert!(sum <= 1.0 + f64::EPSILON);
    }

    #[test]
    fn zero_word_document_yields_empty_profile() {
        let profile = Profile::build("", &ProfileConfig::default());
        assert!(profile.is_empty());
        assert_eq!(profile.total_word_count(), 0);
    }

    #[test]
    fn all_stop_word_document_keeps_total_but_no_weights() {
        let profile = Profile::build("the a an of in and", &ProfileConfig::default());
        assert!(profile.is_empty());
        assert_eq!(profile.total_word_count(), 6);
    }

    #[test]
    fn dot_of_disjoint_profiles_is_exactly_zero() {
        let config = ProfileConfig::default();
        let x = Profile::build("apple banana cherry", &config);
        let y = Profile::build("xray yankee zulu", &config);
        assert_eq!(x.dot(&y), 0.0);
    }

    #[test]
    fn dot_matches_scenario_a() {
        let config = ProfileConfig::default();
        let x = Profile::build("THE CAT SAT ON THE MAT", &config);
        let y = Profile::build("A CAT SAT ON A HAT", &config);
        // CAT, SAT, ON shared at 1/6 each: 3 * (1/36)
        assert!((x.dot(&y) - 3.0 / 36.0).abs() < 1e-12);
    }

    #[test]
    fn dot_is_commutative() {
        let config = ProfileConfig::default();
        let x = Profile::build("red green blue red", &config);
        let y = Profile::build("green blue yellow", &config);
        assert_eq!(x.dot(&y), y.dot(&x));
    }
}
