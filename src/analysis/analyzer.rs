use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{AlphanumericTokenizer, Tokenizer};
use crate::core::config::Config;

/// Text analysis pipeline
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
}

impl Analyzer {
    pub fn new(tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Every token of the line, before filtering
    pub fn tokens<'a>(&self, line: &'a str, line_number: u32) -> Box<dyn Iterator<Item = Token> + 'a> {
        self.tokenizer.tokenize(line, line_number)
    }

    /// Tokens of the line that survive every filter. Positions still count
    /// the filtered-out ones.
    pub fn analyze_line<'a>(&'a self, line: &'a str, line_number: u32) -> impl Iterator<Item = Token> + 'a {
        self.tokens(line, line_number)
            .filter(move |token| self.accepts_token(token))
    }

    pub fn accepts(&self, term: &str) -> bool {
        self.filters.iter().all(|f| f.accepts(term))
    }

    pub fn accepts_token(&self, token: &Token) -> bool {
        self.filters.iter().all(|f| f.accepts_token(token))
    }

    /// Alphanumeric runs with the English stop words removed
    pub fn standard_english() -> Self {
        Analyzer::new(Box::new(AlphanumericTokenizer))
            .add_filter(Box::new(StopWordFilter::english()))
    }

    pub fn from_config(config: &Config) -> Self {
        Analyzer::new(Box::new(AlphanumericTokenizer))
            .add_filter(Box::new(StopWordFilter::new(config.stop_words.clone())))
    }
}

impl Clone for Analyzer {
    fn clone(&self) -> Self {
        Analyzer {
            tokenizer: self.tokenizer.clone_box(),
            filters: self.filters.iter().map(|f| f.clone_box()).collect(),
        }
    }
}
