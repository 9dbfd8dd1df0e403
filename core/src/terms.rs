use crate::error::CorpusError;
use crate::tokenizer::{normalize_term, terms};
use crate::vector::Vector;
use crate::vocabulary::Vocabulary;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Bag of words for a single document or query: term -> occurrence count.
///
/// Built once and never mutated. Documents carry the path they were read
/// from; queries are unnamed.
#[derive(Debug, Clone, Default)]
pub struct DocumentTermModel {
    path: Option<PathBuf>,
    counts: HashMap<String, u64>,
}

impl DocumentTermModel {
    /// Read a whole UTF-8 file and count its terms.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CorpusError::Io { path: path.to_path_buf(), source })?;
        let mut model = Self::from_text(&text);
        model.path = Some(path.to_path_buf());
        Ok(model)
    }

    /// Tokenize and count free text.
    pub fn from_text(text: &str) -> Self {
        Self::count_normalized(terms(text))
    }

    /// Count words that were already split by the caller (shell arguments of
    /// a query). Words are normalized but not tokenized again.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self::count_normalized(words.iter().map(|w| normalize_term(w.as_ref())).filter(|w| !w.is_empty()))
    }

    fn count_normalized(terms: impl IntoIterator<Item = String>) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for term in terms {
            *counts.entry(term).or_insert(0) += 1;
        }
        Self { path: None, counts }
    }

    pub fn path(&self) -> Option<&Path> { self.path.as_deref() }

    pub fn count(&self, term: &str) -> u64 { self.counts.get(term).copied().unwrap_or(0) }

    pub fn contains(&self, term: &str) -> bool { self.counts.contains_key(term) }

    /// Distinct terms seen in this document.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ { self.counts.keys().map(String::as_str) }

    /// Slot `i` holds the count of the vocabulary's `i`-th term.
    pub fn to_tf_vector(&self, vocabulary: &Vocabulary) -> Vector {
        let mut v = Vector::zeros(vocabulary.len());
        for (term, &count) in &self.counts {
            if let Some(id) = vocabulary.id(term) {
                v.set(id, count as f64);
            }
        }
        v
    }
}
