//! Vector space model document search: vocabulary construction with stop
//! word filtering, TF-IDF weighting and cosine similarity ranking.

pub mod error;
pub mod index;
pub mod search;
pub mod stopwords;
pub mod terms;
pub mod tokenizer;
pub mod vector;
pub mod vocabulary;

pub use error::{CorpusError, SearchError, VectorError};
pub use index::{Corpus, CorpusStats, IndexedDocument};
pub use search::{SearchResult, SearchSession, DEFAULT_LIMIT};
pub use stopwords::StopWords;
pub use terms::DocumentTermModel;
pub use vector::Vector;
pub use vocabulary::{TermId, Vocabulary};
