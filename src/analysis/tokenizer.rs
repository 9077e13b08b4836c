use std::str::CharIndices;
use crate::analysis::token::Token;

pub trait Tokenizer: Send + Sync {
    /// Lazily split one line into tokens, numbering positions from 1
    fn tokenize<'a>(&self, line: &'a str, line_number: u32) -> Box<dyn Iterator<Item = Token> + 'a>;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Splits on every non-alphanumeric character and lowercases each run
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphanumericTokenizer;

impl AlphanumericTokenizer {
    pub fn tokens<'a>(&self, line: &'a str, line_number: u32) -> LineTokens<'a> {
        LineTokens {
            line,
            chars: line.char_indices(),
            line_number,
            position: 0,
        }
    }
}

impl Tokenizer for AlphanumericTokenizer {
    fn tokenize<'a>(&self, line: &'a str, line_number: u32) -> Box<dyn Iterator<Item = Token> + 'a> {
        Box::new(self.tokens(line, line_number))
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(*self)
    }
}

/// Lazy token stream over a single line
pub struct LineTokens<'a> {
    line: &'a str,
    chars: CharIndices<'a>,
    line_number: u32,
    position: u32,
}

impl<'a> LineTokens<'a> {
    fn emit(&mut self, text: String, start: usize, end: usize) -> Token {
        self.position += 1;
        Token::new(text, self.line_number, self.position, start, end - start)
    }
}

impl<'a> Iterator for LineTokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut start: Option<usize> = None;
        let mut text = String::new();

        loop {
            match self.chars.next() {
                Some((i, c)) if c.is_alphanumeric() => {
                    start.get_or_insert(i);
                    push_lowercase(&mut text, c);
                }
                Some((i, _)) => {
                    if let Some(s) = start {
                        return Some(self.emit(text, s, i));
                    }
                }
                None => {
                    // Last run of the line, no trailing separator
                    let end = self.line.len();
                    return start.map(|s| self.emit(text, s, end));
                }
            }
        }
    }
}

/// Per-character lowercasing. `str::to_lowercase` is context sensitive
/// (final sigma) and would disagree with what the tokenizer emits.
fn push_lowercase(out: &mut String, c: char) {
    out.extend(c.to_lowercase());
}

/// Lowercase a query term exactly as `LineTokens` lowercases words
pub fn normalize_term(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        push_lowercase(&mut out, c);
    }
    out
}
