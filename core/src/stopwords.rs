use crate::error::CorpusError;
use crate::tokenizer::normalize_term;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Words excluded from the vocabulary.
///
/// Loaded once by the caller and handed to [`Corpus::build`](crate::Corpus::build).
/// When loaded from a file the canonical path is remembered so that a stop
/// word list living inside the corpus directory is not indexed as a document.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
    source: Option<PathBuf>,
}

impl StopWords {
    pub fn empty() -> Self { Self::default() }

    /// One word per line; surrounding whitespace and blank lines are ignored.
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(normalize_term)
            .collect();
        Self { words, source: None }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let err = |source| CorpusError::StopWords { path: path.to_path_buf(), source };
        let text = fs::read_to_string(path).map_err(err)?;
        let source = fs::canonicalize(path).map_err(err)?;
        let mut stop_words = Self::parse(&text);
        stop_words.source = Some(source);
        tracing::debug!(path = %path.display(), count = stop_words.len(), "loaded stop words");
        Ok(stop_words)
    }

    pub fn contains(&self, term: &str) -> bool { self.words.contains(term) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Canonical path of the file these words were loaded from.
    pub fn source(&self) -> Option<&Path> { self.source.as_deref() }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter.into_iter().map(|w| normalize_term(w.as_ref().trim())).collect();
        Self { words, source: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        let sw = StopWords::parse("  The \nAND\n\n  i  \n");
        assert_eq!(sw.len(), 3);
        assert!(sw.contains("the"));
        assert!(sw.contains("and"));
        assert!(sw.contains("i"));
        assert!(sw.source().is_none());
    }

    #[test]
    fn load_missing_file_fails() {
        let err = StopWords::load("/definitely/not/here/stop.txt").unwrap_err();
        assert!(matches!(err, CorpusError::StopWords { .. }));
    }
}
