use crate::error::{CorpusError, VectorError};
use crate::stopwords::StopWords;
use crate::terms::DocumentTermModel;
use crate::vector::Vector;
use crate::vocabulary::Vocabulary;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// A corpus document with its precomputed TF-IDF vector.
#[derive(Debug, Clone)]
pub struct IndexedDocument {
    path: PathBuf,
    terms: DocumentTermModel,
    tfidf: Vector,
}

impl IndexedDocument {
    /// Absolute path of the source file.
    pub fn path(&self) -> &Path { &self.path }
    pub fn terms(&self) -> &DocumentTermModel { &self.terms }
    pub fn tfidf(&self) -> &Vector { &self.tfidf }
}

#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    pub num_docs: usize,
    pub vocabulary_size: usize,
    pub stop_words: usize,
}

/// Read-only vector space index over a directory of text files.
///
/// Holds the vocabulary, one IDF weight per vocabulary term and every
/// document's TF-IDF vector. Built once; safe to share between threads.
#[derive(Debug, Clone)]
pub struct Corpus {
    vocabulary: Vocabulary,
    idf: Vector,
    documents: Vec<IndexedDocument>, // sorted by path
    stop_words: usize,
}

impl Corpus {
    /// Index every regular file below `dir`, recursively.
    ///
    /// The stop word file is skipped when it lives inside `dir`. Any I/O
    /// error is fatal: there is no partial corpus.
    pub fn build<P: AsRef<Path>>(dir: P, stop_words: &StopWords) -> Result<Self, CorpusError> {
        let start = Instant::now();
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(CorpusError::NotADirectory(dir.to_path_buf()));
        }

        let files = collect_files(dir, stop_words.source())?;
        let mut docs = Vec::with_capacity(files.len());
        for path in files {
            let model = DocumentTermModel::from_path(&path)?;
            tracing::debug!(path = %path.display(), terms = model.terms().count(), "read document");
            docs.push((path, model));
        }

        let corpus = Self::index(docs, stop_words)?;
        let elapsed = start.elapsed();
        tracing::info!(
            dir = %dir.display(),
            num_docs = corpus.num_documents(),
            vocabulary = corpus.vocabulary_size(),
            took_s = elapsed.as_secs_f64(),
            "corpus indexed"
        );
        Ok(corpus)
    }

    /// Index documents already held in memory, as `(path, text)` pairs.
    pub fn from_texts<I, P, S>(docs: I, stop_words: &StopWords) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<PathBuf>,
        S: AsRef<str>,
    {
        let docs = docs
            .into_iter()
            .map(|(p, text)| (p.into(), DocumentTermModel::from_text(text.as_ref())))
            .collect();
        Self::index(docs, stop_words)
    }

    fn index(mut docs: Vec<(PathBuf, DocumentTermModel)>, stop_words: &StopWords) -> Result<Self, CorpusError> {
        docs.sort_by(|a, b| a.0.cmp(&b.0));

        // Every document has been read at this point; vocabulary and IDF need
        // the whole corpus.
        let mut df: HashMap<&str, usize> = HashMap::new();
        let mut terms: BTreeSet<String> = BTreeSet::new();
        for (_, model) in &docs {
            for term in model.terms() {
                if stop_words.contains(term) { continue; }
                *df.entry(term).or_insert(0) += 1;
                if !terms.contains(term) {
                    terms.insert(term.to_string());
                }
            }
        }
        let vocabulary = Vocabulary::from(terms);

        let n = docs.len() as f64;
        let mut idf = Vector::zeros(vocabulary.len());
        for (id, term) in vocabulary.iter().enumerate() {
            let df_t = df.get(term).copied().unwrap_or(0);
            if df_t == 0 {
                return Err(CorpusError::ZeroDocumentFrequency(term.to_string()));
            }
            idf.set(id, (n / df_t as f64).ln());
        }
        drop(df);

        if docs.len() < 2 && !vocabulary.is_empty() {
            tracing::warn!(num_docs = docs.len(), "corpus has fewer than two documents; every IDF is 0 and no query will match");
        }

        let mut documents = Vec::with_capacity(docs.len());
        for (path, terms) in docs {
            let tfidf = weigh(&terms.to_tf_vector(&vocabulary), &idf);
            documents.push(IndexedDocument { path, terms, tfidf });
        }

        Ok(Self { vocabulary, idf, documents, stop_words: stop_words.len() })
    }

    pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }

    pub fn vocabulary_size(&self) -> usize { self.vocabulary.len() }

    pub fn num_documents(&self) -> usize { self.documents.len() }

    /// Documents in ascending path order.
    pub fn documents(&self) -> &[IndexedDocument] { &self.documents }

    /// `ln(N / df)` for a vocabulary term.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.id(term).map(|id| self.idf[id])
    }

    /// Precomputed TF-IDF vector of the document at `path`.
    pub fn tfidf_vector(&self, path: &Path) -> Option<&Vector> {
        self.documents
            .binary_search_by(|d| d.path.as_path().cmp(path))
            .ok()
            .map(|i| &self.documents[i].tfidf)
    }

    /// Project any term model (typically a query) onto the vocabulary and
    /// weight it with the corpus IDF values.
    pub fn tfidf_vector_for(&self, model: &DocumentTermModel) -> Vector {
        weigh(&model.to_tf_vector(&self.vocabulary), &self.idf)
    }

    /// Weight a TF vector built against this corpus' vocabulary.
    pub fn tfidf_from_tf(&self, tf: &Vector) -> Result<Vector, VectorError> {
        if tf.len() != self.idf.len() {
            return Err(VectorError::DimensionMismatch { op: "weight", left: tf.len(), right: self.idf.len() });
        }
        Ok(weigh(tf, &self.idf))
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            num_docs: self.num_documents(),
            vocabulary_size: self.vocabulary_size(),
            stop_words: self.stop_words,
        }
    }
}

/// `tf[i] * idf[i]`, with an exact 0.0 wherever the term is absent.
fn weigh(tf: &Vector, idf: &Vector) -> Vector {
    assert_eq!(tf.len(), idf.len(), "TF vector not built against this vocabulary");
    let mut out = Vector::zeros(tf.len());
    for (i, (&t, &w)) in tf.as_slice().iter().zip(idf.as_slice()).enumerate() {
        if t != 0.0 {
            out.set(i, t * w);
        }
    }
    out
}

fn collect_files(dir: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>, CorpusError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry?;
        let p = entry.path();
        if !p.is_file() { continue; }
        let abs = std::path::absolute(p).map_err(|source| CorpusError::Io { path: p.to_path_buf(), source })?;
        if let Some(exclude) = exclude {
            if fs::canonicalize(&abs).ok().as_deref() == Some(exclude) {
                tracing::debug!(path = %abs.display(), "skipping stop word list");
                continue;
            }
        }
        files.push(abs);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_docs() -> Corpus {
        Corpus::from_texts(
            [("/c/doc1.txt", "cat dog cat"), ("/c/doc2.txt", "dog bird")],
            &StopWords::empty(),
        )
        .unwrap()
    }

    #[test]
    fn builds_vocabulary_and_idf() {
        let c = two_docs();
        assert_eq!(c.vocabulary().iter().collect::<Vec<_>>(), vec!["bird", "cat", "dog"]);
        assert_eq!(c.idf("dog"), Some(0.0));
        assert!((c.idf("cat").unwrap() - 2f64.ln()).abs() < 1e-12);
        assert_eq!(c.idf("fish"), None);
    }

    #[test]
    fn precomputes_tfidf_vectors() {
        let c = two_docs();
        let ln2 = 2f64.ln();
        let d1 = c.tfidf_vector(Path::new("/c/doc1.txt")).unwrap();
        assert_eq!(d1.as_slice(), &[0.0, 2.0 * ln2, 0.0]);
        let d2 = c.tfidf_vector(Path::new("/c/doc2.txt")).unwrap();
        assert_eq!(d2.as_slice(), &[ln2, 0.0, 0.0]);
    }

    #[test]
    fn stop_words_are_not_in_vocabulary() {
        let sw = StopWords::parse("The\nand\n");
        let c = Corpus::from_texts([("a", "the cat and the dog"), ("b", "a bird")], &sw).unwrap();
        assert!(!c.vocabulary().contains("the"));
        assert!(!c.vocabulary().contains("and"));
        assert_eq!(c.vocabulary_size(), 4);
        assert_eq!(c.stats().stop_words, 2);
    }

    #[test]
    fn query_projection_uses_corpus_idf() {
        let c = two_docs();
        let q = DocumentTermModel::from_words(&["CAT", "fish"]);
        let v = c.tfidf_vector_for(&q);
        assert_eq!(v.as_slice(), &[0.0, 2f64.ln(), 0.0]);
    }

    #[test]
    fn tfidf_from_tf_checks_dimension() {
        let c = two_docs();
        let err = c.tfidf_from_tf(&Vector::zeros(2)).unwrap_err();
        assert!(matches!(err, VectorError::DimensionMismatch { left: 2, right: 3, .. }));
    }

    #[test]
    fn single_document_flattens_to_zero() {
        let c = Corpus::from_texts([("only", "cat dog")], &StopWords::empty()).unwrap();
        assert_eq!(c.vocabulary_size(), 2);
        assert_eq!(c.documents()[0].tfidf().magnitude(), 0.0);
    }

    #[test]
    fn empty_corpus() {
        let c = Corpus::from_texts(Vec::<(String, String)>::new(), &StopWords::empty()).unwrap();
        assert_eq!(c.num_documents(), 0);
        assert!(c.vocabulary().is_empty());
    }
}
