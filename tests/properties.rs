//! Property tests over randomly generated corpora.
//!
//! - Every non-stop word occurrence is findable at its (line, position)
//! - Posting frequency always equals the recorded occurrence count
//! - Prefix search of an indexed word contains that word's exact result
//! - Stop words are never found
//! - The same text under two ids yields identical postings

use proptest::prelude::*;
use lexidex::analysis::filters::stopword::DEFAULT_STOP_WORDS;
use lexidex::analysis::tokenizer::AlphanumericTokenizer;
use lexidex::core::config::Config;
use lexidex::core::database::Database;
use lexidex::core::types::DocId;
use lexidex::search::results::ExactResult;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Words, with stop words mixed in often enough to matter
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::string::string_regex("[a-zA-Z0-9]{1,6}").unwrap(),
        1 => prop::sample::select(DEFAULT_STOP_WORDS).prop_map(str::to_string),
    ]
}

/// A line of words joined by assorted separators
fn line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (word_strategy(), prop::sample::select(vec![" ", ", ", "-", ".  ", "\t"])),
        0..8,
    )
    .prop_map(|parts| parts.into_iter().map(|(w, sep)| format!("{}{}", w, sep)).collect())
}

fn document_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 1..6)
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(document_strategy(), 1..4)
}

fn build(corpus: &[Vec<String>]) -> Database {
    let mut writer = Database::writer(Config::default()).unwrap();
    for (i, lines) in corpus.iter().enumerate() {
        writer.add_lines(&format!("doc{}", i), lines.iter().cloned()).unwrap();
    }
    writer.finish()
}

fn is_stop_word(word: &str) -> bool {
    DEFAULT_STOP_WORDS.contains(&word)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_every_occurrence_is_findable(corpus in corpus_strategy()) {
        let db = build(&corpus);

        for (doc, lines) in corpus.iter().enumerate() {
            for (i, line) in lines.iter().enumerate() {
                for token in AlphanumericTokenizer.tokens(line, i as u32 + 1) {
                    if is_stop_word(&token.text) {
                        continue;
                    }
                    let result = db.exact_search(&token.text).unwrap();
                    let hits = result.hits().expect("indexed word must be found");
                    let doc_hits = hits.document(DocId(doc as u64)).expect("document listed");

                    prop_assert!(doc_hits.frequency >= 1);
                    prop_assert!(doc_hits.occurrences.iter()
                        .any(|o| o.line == token.line && o.position == token.position));
                }
            }
        }
    }

    #[test]
    fn prop_frequency_equals_occurrence_count(corpus in corpus_strategy()) {
        let db = build(&corpus);

        for word in db.index().terms() {
            let list = db.index().lookup(word).unwrap();
            prop_assert!(!list.is_empty());
            for posting in list.iter() {
                prop_assert_eq!(posting.frequency as usize, posting.occurrences.len());
            }
            let ids: Vec<DocId> = list.iter().map(|p| p.doc_id).collect();
            let mut sorted = ids.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(ids, sorted);
        }
    }

    #[test]
    fn prop_prefix_contains_exact(corpus in corpus_strategy()) {
        let db = build(&corpus);

        for word in db.index().terms() {
            let exact = db.exact_search(word).unwrap();
            let prefix = db.prefix_search(word).unwrap();
            prop_assert_eq!(prefix.words().first().copied(), Some(word));
            prop_assert_eq!(prefix.get(word), exact.hits());
        }
    }

    #[test]
    fn prop_stop_words_never_found(corpus in corpus_strategy()) {
        let db = build(&corpus);
        for word in DEFAULT_STOP_WORDS {
            prop_assert_eq!(db.exact_search(word).unwrap(), ExactResult::NotFound);
            prop_assert!(!db.trie().contains(word));
        }
    }

    #[test]
    fn prop_trie_and_index_share_vocabulary(corpus in corpus_strategy()) {
        let db = build(&corpus);
        prop_assert_eq!(db.trie().word_count(), db.index().len());

        let all: Vec<String> = db.trie().enumerate("").unwrap().collect();
        let mut terms: Vec<&str> = db.index().terms().collect();
        terms.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
        prop_assert_eq!(all, terms);
    }

    #[test]
    fn prop_duplicate_documents_have_identical_postings(doc in document_strategy()) {
        let db = build(&[doc.clone(), doc]);

        for word in db.index().terms() {
            let list = db.index().lookup(word).unwrap();
            let first = list.get(DocId(0)).unwrap();
            let second = list.get(DocId(1)).unwrap();
            prop_assert_eq!(first.frequency, second.frequency);
            prop_assert_eq!(&first.occurrences, &second.occurrences);
        }
    }
}
