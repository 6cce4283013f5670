use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Error;

use super::profile::{Profile, ProfileConfig};

/// One document of the corpus: its stable name plus the derived profile.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DocumentProfile {
    /// Stable name the document is reported under (path string for on-disk
    /// corpora)
    pub name: String,
    /// The document's frequency profile
    pub profile: Profile,
}

/// Corpus struct
/// An ordered collection of profiled documents. Order is significant: the
/// similarity matrix and result pairs refer to documents by position.
///
/// # Examples
/// ```
/// use lexsim::analyzer::corpus::Corpus;
/// use lexsim::analyzer::profile::ProfileConfig;
///
/// let config = ProfileConfig::default();
/// let mut corpus = Corpus::new();
/// corpus.add_document("x", "the cat sat on the mat", &config);
/// corpus.add_document("y", "a cat sat on a hat", &config);
/// assert_eq!(corpus.len(), 2);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<DocumentProfile>,
}

/// Implementation for building a corpus
impl Corpus {
    /// Create a new empty corpus
    pub fn new() -> Self {
        Corpus {
            documents: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Corpus {
            documents: Vec::with_capacity(capacity),
        }
    }

    /// Profile an in-memory document and append it
    ///
    /// # Arguments
    /// * `name` - stable name the document is reported under
    /// * `text` - raw document text
    /// * `config` - run parameters (term budget, stop-words)
    pub fn add_document(&mut self, name: impl Into<String>, text: &str, config: &ProfileConfig) -> &mut Self {
        self.documents.push(DocumentProfile {
            name: name.into(),
            profile: Profile::build(text, config),
        });
        self
    }

    /// Read and profile a set of files, one document per path.
    ///
    /// Documents are profiled in parallel and land in input order; each
    /// profile is fully materialized before this returns. Duplicate paths
    /// are profiled once, at their first position. A file that cannot be
    /// read is skipped and reported in the returned failure list; the
    /// remaining documents are unaffected.
    pub fn from_paths<P>(paths: &[P], config: &ProfileConfig) -> (Self, Vec<Error>)
    where
        P: AsRef<Path> + Sync,
    {
        let mut seen: HashSet<&Path> = HashSet::new();
        let unique: Vec<&Path> = paths
            .iter()
            .map(|p| p.as_ref())
            .filter(|p| seen.insert(*p))
            .collect();

        let profiled: Vec<(String, Result<Profile, Error>)> = unique
            .par_iter()
            .map(|path| {
                let name = path.display().to_string();
                let profile = fs::read_to_string(path)
                    .map(|text| Profile::build(&text, config))
                    .map_err(|source| Error::ReadDocument {
                        path: path.to_path_buf(),
                        source,
                    });
                (name, profile)
            })
            .collect();

        let mut corpus = Corpus::with_capacity(profiled.len());
        let mut failures = Vec::new();
        for (name, profile) in profiled {
            match profile {
                Ok(profile) => corpus.documents.push(DocumentProfile { name, profile }),
                Err(err) => failures.push(err),
            }
        }
        info!(
            documents = corpus.len(),
            failures = failures.len(),
            "profiled corpus"
        );
        (corpus, failures)
    }
}

/// Implementation for reading a corpus
impl Corpus {
    /// Number of documents
    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document at a position
    #[inline]
    pub fn get(&self, index: usize) -> Option<&DocumentProfile> {
        self.documents.get(index)
    }

    /// All documents, in corpus order
    #[inline]
    pub fn documents(&self) -> &[DocumentProfile] {
        &self.documents
    }
}
