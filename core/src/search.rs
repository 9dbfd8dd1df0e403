use crate::error::SearchError;
use crate::index::Corpus;
use crate::terms::DocumentTermModel;
use serde::Serialize;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Default number of ranked results kept per query.
pub const DEFAULT_LIMIT: usize = 10;

/// One ranked hit: a document and its cosine similarity to the query.
///
/// Ordering puts the most similar document first; equal similarities are
/// ordered by ascending path.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    path: PathBuf,
    similarity: f64,
}

impl SearchResult {
    /// Returns `None` for a negative or NaN similarity.
    pub fn new(path: impl Into<PathBuf>, similarity: f64) -> Option<Self> {
        if similarity.is_nan() || similarity < 0.0 {
            return None;
        }
        Some(Self { path: path.into(), similarity })
    }

    pub fn path(&self) -> &Path { &self.path }

    pub fn similarity(&self) -> f64 { self.similarity }
}

impl Ord for SearchResult {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .similarity
            .total_cmp(&self.similarity)
            .then_with(|| self.path.cmp(&other.path))
    }
}

impl PartialOrd for SearchResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl PartialEq for SearchResult {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for SearchResult {}

/// Holds the ranked results of the most recent query against a [`Corpus`].
///
/// Each [`query`](Self::query) replaces the stored results. Readers only get
/// a borrowed slice. Not meant to be shared between threads; create one
/// session per caller and share the corpus instead.
#[derive(Debug)]
pub struct SearchSession<'c> {
    corpus: &'c Corpus,
    limit: usize,
    results: Vec<SearchResult>,
}

impl<'c> SearchSession<'c> {
    pub fn new(corpus: &'c Corpus) -> Self {
        Self::with_limit(corpus, DEFAULT_LIMIT)
    }

    /// `limit` is clamped to `1..=100`.
    pub fn with_limit(corpus: &'c Corpus, limit: usize) -> Self {
        Self { corpus, limit: limit.clamp(1, 100), results: Vec::new() }
    }

    pub fn corpus(&self) -> &'c Corpus { self.corpus }

    pub fn limit(&self) -> usize { self.limit }

    /// Rank every corpus document by cosine similarity to `raw_terms`.
    ///
    /// Terms are already split by the caller and only normalized here. At
    /// most `limit` results are kept, and the list stops at the first zero
    /// similarity. The previous results are discarded even when this query
    /// finds nothing.
    pub fn query<S: AsRef<str>>(&mut self, raw_terms: &[S]) -> Result<&[SearchResult], SearchError> {
        if raw_terms.is_empty() {
            return Err(SearchError::InvalidArgument("query needs at least one term".into()));
        }
        self.results.clear();

        let model = DocumentTermModel::from_words(raw_terms);
        let query = self.corpus.tfidf_vector_for(&model);

        let mut scored = Vec::with_capacity(self.corpus.num_documents());
        for doc in self.corpus.documents() {
            let similarity = query.cosine_similarity(doc.tfidf())?;
            // Non-negative vectors give a non-negative cosine.
            if let Some(result) = SearchResult::new(doc.path(), similarity.max(0.0)) {
                scored.push(result);
            }
        }
        scored.sort_unstable();

        self.results = scored
            .into_iter()
            .take(self.limit)
            .take_while(|r| r.similarity != 0.0)
            .collect();
        tracing::debug!(terms = raw_terms.len(), hits = self.results.len(), "query ranked");
        Ok(&self.results)
    }

    /// Result at zero-based rank `index` of the last query.
    pub fn result_at(&self, index: usize) -> Result<&SearchResult, SearchError> {
        if self.results.is_empty() {
            return Err(SearchError::NoResultsYet);
        }
        self.results
            .get(index)
            .ok_or(SearchError::IndexOutOfRange { index, len: self.results.len() })
    }

    pub fn list_results(&self) -> Result<&[SearchResult], SearchError> {
        if self.results.is_empty() {
            return Err(SearchError::NoResultsYet);
        }
        Ok(&self.results)
    }

    pub fn is_empty(&self) -> bool { self.results.is_empty() }
}
