pub mod core;
pub mod storage;
pub mod analysis;
pub mod index;
pub mod search;
pub mod writer;
pub mod parallel;
pub mod cli;

/*
┌───────────────────────────────────── LEXIDEX LAYOUT ─────────────────────────────────────┐
│                                                                                          │
│   INGESTION (mutable, single writer)          QUERY (frozen, &self only)                 │
│                                                                                          │
│   ┌──────────────────────────────┐            ┌──────────────────────────────┐           │
│   │ struct IndexWriter           │  finish()  │ struct Database              │           │
│   │ • config: Config             │ ─────────▶ │ • index: InvertedIndex       │           │
│   │ • analyzer: Analyzer         │            │ • trie: PrefixTrie           │           │
│   │ • index / trie / documents   │            │ • documents: DocumentStore   │           │
│   │ • stats: IndexStats          │            │ • stats: IndexStats          │           │
│   └──────────────────────────────┘            └──────────────┬───────────────┘           │
│          ▲                                                   │ search_engine()           │
│          │ AnalyzedDocument                                  ▼                           │
│   ┌──────┴───────────────────────┐            ┌──────────────────────────────┐           │
│   │ ParallelIndexer (rayon)      │            │ SearchEngine<'a>             │           │
│   │ • read + tokenize per file   │            │ • exact_search → ExactResult │           │
│   └──────────────────────────────┘            │ • prefix_search→ PrefixResult│           │
│                                               └──────────────────────────────┘           │
│                                                                                          │
│   Analyzer = AlphanumericTokenizer ─▶ StopWordFilter                                     │
│   Token { text, line, position, offset, length }    positions count stop words too       │
│                                                                                          │
│   InvertedIndex: HashMap<String, PostingList>                                            │
│     PostingList.postings: Vec<Posting>          sorted by doc_id                         │
│     Posting { doc_id, frequency, occurrences: Vec<Occurrence { line, position }> }       │
│                                                                                          │
│   PrefixTrie: arena Vec<TrieNode>, node 0 = root                                         │
│     TrieNode { children: BTreeMap<u8, NodeId>, is_word_end }                             │
│                                                                                          │
└──────────────────────────────────────────────────────────────────────────────────────────┘
*/
