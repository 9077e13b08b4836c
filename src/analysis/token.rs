use serde::{Serialize, Deserialize};

/// Token representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,      // Normalized (lowercased) word
    pub line: u32,         // 1-based line number
    pub position: u32,     // 1-based word position within the line
    pub offset: usize,     // Byte offset in original line
    pub length: usize,     // Length in original line, in bytes
}

impl Token {
    pub fn new(text: String, line: u32, position: u32, offset: usize, length: usize) -> Self {
        Token {
            text,
            line,
            position,
            offset,
            length,
        }
    }
}
