use std::collections::BTreeMap;

pub type NodeId = usize;

const ROOT: NodeId = 0;

/// Trie node: byte-keyed children plus a word-end marker
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    pub children: BTreeMap<u8, NodeId>,
    pub is_word_end: bool,
}

/// Byte-keyed prefix trie over the indexed vocabulary.
///
/// Nodes live in a single arena and refer to children by index. The root
/// (node 0) spells the empty string.
#[derive(Debug, Clone)]
pub struct PrefixTrie {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
        }
    }

    /// Insert `word`, returning `true` if it was not already a word.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut current = ROOT;
        for &byte in word.as_bytes() {
            current = match self.nodes[current].children.get(&byte) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(byte, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[current];
        if node.is_word_end {
            return false;
        }
        node.is_word_end = true;
        self.word_count += 1;
        true
    }

    /// Walk `prefix` from the root; `None` if some byte has no child
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix.as_bytes().iter().try_fold(ROOT, |node, byte| {
            self.nodes[node].children.get(byte).copied()
        })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| self.nodes[node].is_word_end)
    }

    /// Every word beginning with `prefix`, depth-first in ascending byte
    /// order. The prefix itself comes first when it is a word.
    /// `None` means no indexed word has this prefix.
    pub fn enumerate(&self, prefix: &str) -> Option<PrefixWords<'_>> {
        let start = self.find(prefix)?;
        Some(PrefixWords {
            trie: self,
            buffer: prefix.as_bytes().to_vec(),
            stack: vec![Frame { node: start, parent_len: prefix.len(), byte: None }],
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

struct Frame {
    node: NodeId,
    parent_len: usize,  // Buffer length before this node's byte
    byte: Option<u8>,
}

/// Lazy depth-first enumeration below a prefix node
pub struct PrefixWords<'a> {
    trie: &'a PrefixTrie,
    buffer: Vec<u8>,
    stack: Vec<Frame>,
}

impl<'a> Iterator for PrefixWords<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(frame) = self.stack.pop() {
            self.buffer.truncate(frame.parent_len);
            if let Some(byte) = frame.byte {
                self.buffer.push(byte);
            }

            let trie = self.trie;
            let node = &trie.nodes[frame.node];
            let len = self.buffer.len();
            // Reverse push so the smallest byte is popped first
            for (&byte, &child) in node.children.iter().rev() {
                self.stack.push(Frame { node: child, parent_len: len, byte: Some(byte) });
            }

            if node.is_word_end {
                // Word-end paths always spell a whole inserted &str
                return Some(String::from_utf8_lossy(&self.buffer).into_owned());
            }
        }
        None
    }
}
