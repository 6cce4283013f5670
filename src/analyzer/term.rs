use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Normalize a raw word token.
/// Strips every character that is not an ASCII letter or digit and uppercases
/// the remainder. Returns `None` when nothing survives the stripping; such
/// tokens are discarded entirely and never counted.
///
/// # Examples
/// ```
/// use lexsim::analyzer::term::normalize_word;
/// assert_eq!(normalize_word("cat,"), Some("CAT".to_string()));
/// assert_eq!(normalize_word("--"), None);
/// ```
#[inline]
pub fn normalize_word(raw: &str) -> Option<String> {
    let term: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if term.is_empty() {
        None
    } else {
        Some(term)
    }
}

/// TermFrequency struct
/// Manages the frequency of term occurrences within one document.
/// Counts the number of times each normalized term appears, plus the
/// document's total word count.
///
/// The total word count includes stop-words (they are real words of the
/// document, only excluded from the frequency map), so relative-frequency
/// weights derived from this struct are fractions of the true document
/// length.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use lexsim::analyzer::term::TermFrequency;
///
/// let stop_words: HashSet<String> = ["THE".to_string()].into_iter().collect();
/// let freq = TermFrequency::from_text("the cat sat", &stop_words);
/// assert_eq!(freq.term_count("CAT"), 1);
/// assert_eq!(freq.term_count("THE"), 0);
/// assert_eq!(freq.total_word_count(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u32>,
    total_word_count: u64,
}

/// Implementation for accumulating terms
impl TermFrequency {
    /// Create a new empty TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_word_count: 0,
        }
    }

    /// Tokenize a document and count it in one pass.
    /// Splits on whitespace, normalizes each token with [`normalize_word`],
    /// and filters the stop-word set. Stop-words bump the total word count
    /// but never enter the frequency map; empty tokens count toward neither.
    pub fn from_text(text: &str, stop_words: &HashSet<String>) -> Self {
        let mut freq = TermFrequency::new();
        for raw in text.split_whitespace() {
            if let Some(term) = normalize_word(raw) {
                freq.total_word_count += 1;
                if !stop_words.contains(term.as_str()) {
                    *freq.term_count.entry(term).or_insert(0) += 1;
                }
            }
        }
        freq
    }

    /// Add an already-normalized term
    ///
    /// # Arguments
    /// * `term` - the term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_word_count += 1;
        self
    }
}

/// Implementation for reading statistics back out
impl TermFrequency {
    /// Occurrence count of one term
    ///
    /// # Arguments
    /// * `term` - the term to look up
    ///
    /// # Returns
    /// * `u32` - the term's count, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total number of words counted, stop-words included
    #[inline]
    pub fn total_word_count(&self) -> u64 {
        self.total_word_count
    }

    /// Number of distinct counted terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    /// Check whether a term was counted
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Terms sorted for top-N selection (descending count, ascending term
    /// text on ties). The secondary key makes the ordering total, so the
    /// same document always yields the same vector.
    ///
    /// # Returns
    /// * `Vec<(String, u32)>` - terms with their counts, ranked
    #[inline]
    pub fn sorted_count_vector(&self) -> Vec<(String, u32)> {
        let mut term_list: Vec<(String, u32)> = self
            .term_count
            .iter()
            .map(|(term, &count)| (term.clone(), count))
            .collect();

        term_list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        term_list
    }
}
