use std::collections::{BTreeSet, HashMap};

/// Position of a term inside the [`Vocabulary`], and so the slot it occupies
/// in every vector built against it.
pub type TermId = usize;

/// Fixed, ordered set of corpus terms.
///
/// Terms are enumerated in lexicographic order. The order never changes after
/// construction, so slot `i` of every TF or TF-IDF vector refers to the same
/// term for the lifetime of the corpus.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    ids: HashMap<String, TermId>,
}

impl Vocabulary {
    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn id(&self, term: &str) -> Option<TermId> { self.ids.get(term).copied() }

    pub fn term(&self, id: TermId) -> Option<&str> { self.terms.get(id).map(String::as_str) }

    pub fn contains(&self, term: &str) -> bool { self.ids.contains_key(term) }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ { self.terms.iter().map(String::as_str) }
}

impl From<BTreeSet<String>> for Vocabulary {
    fn from(set: BTreeSet<String>) -> Self {
        let terms: Vec<String> = set.into_iter().collect();
        let ids = terms.iter().enumerate().map(|(i, t)| (t.clone(), i)).collect();
        Self { terms, ids }
    }
}

impl FromIterator<String> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        iter.into_iter().collect::<BTreeSet<_>>().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_and_orders() {
        let v: Vocabulary = ["dog", "cat", "bird", "cat"].iter().map(|s| s.to_string()).collect();
        assert_eq!(v.len(), 3);
        assert_eq!(v.iter().collect::<Vec<_>>(), vec!["bird", "cat", "dog"]);
        assert_eq!(v.id("cat"), Some(1));
        assert_eq!(v.term(2), Some("dog"));
        assert_eq!(v.id("fish"), None);
    }
}
