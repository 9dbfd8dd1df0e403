use docsearch_core::tokenizer::{normalize_term, terms, tokenize};

#[test]
fn it_splits_on_digits_and_punctuation() {
    let toks: Vec<&str> = tokenize("Running2runners' RUN! The café's menu.").collect();
    assert_eq!(toks, vec!["Running", "runners", "RUN", "The", "café", "s", "menu"]);
}

#[test]
fn it_normalizes_case_and_composition() {
    assert_eq!(normalize_term("ČOVJEK"), "čovjek");
    assert_eq!(normalize_term("Cafe\u{301}"), "café");
    let words = terms("Dobar DAN, dobar dan!");
    assert_eq!(words, vec!["dobar", "dan", "dobar", "dan"]);
}

#[test]
fn it_is_restartable() {
    let text = "one two three";
    assert_eq!(tokenize(text).count(), 3);
    assert_eq!(tokenize(text).count(), 3);
}
