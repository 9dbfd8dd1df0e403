use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("cannot {op} vectors of different size ({left} vs {right})")]
    DimensionMismatch { op: &'static str, left: usize, right: usize },
}

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("{0} isn't a directory or doesn't exist")]
    NotADirectory(PathBuf),

    #[error("cannot read stop words from {path}: {source}")]
    StopWords { path: PathBuf, source: io::Error },

    #[error("cannot read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("cannot walk corpus directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Every vocabulary term comes from some document, so this means the
    /// vocabulary and the document models disagree on normalization.
    #[error("term {0:?} is in the vocabulary but no document contains it")]
    ZeroDocumentFrequency(String),

    #[error(transparent)]
    Vector(#[from] VectorError),
}

#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no results yet, run a 'query' command first")]
    NoResultsYet,

    #[error("there is no search result with index {index} (results: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Vector(#[from] VectorError),
}
