use std::collections::HashMap;

use super::tree::HuffmanNode;
use super::{BitString, FrequencyTable, HuffmanTree, Symbol};

/// Code word of every symbol of a tree, in depth-first order (left first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    code_words: Vec<(Symbol, BitString)>,
    positions: HashMap<Symbol, usize>,
}

impl CodeTable {
    pub fn new(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable {
            code_words: Vec::new(),
            positions: HashMap::new(),
        };
        match tree.root() {
            // a lone leaf still needs one bit to be decodable
            HuffmanNode::Leaf { symbol, .. } => {
                table.insert(*symbol, BitString::new().with(false));
            }
            root => table.fill(root),
        }
        table
    }

    fn fill(&mut self, root: &HuffmanNode) {
        let mut stack = vec![(root, BitString::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, .. } => self.insert(*symbol, path),
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((right.as_ref(), path.with(true)));
                    stack.push((left.as_ref(), path.with(false)));
                }
            }
        }
    }

    fn insert(&mut self, symbol: Symbol, code_word: BitString) {
        self.positions.insert(symbol, self.code_words.len());
        self.code_words.push((symbol, code_word));
    }

    pub fn get(&self, symbol: Symbol) -> Option<&BitString> {
        self.positions
            .get(&symbol)
            .map(|&position| &self.code_words[position].1)
    }

    pub fn len(&self) -> usize {
        self.code_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &BitString)> {
        self.code_words
            .iter()
            .map(|(symbol, code_word)| (*symbol, code_word))
    }

    /// Sum of frequency times code word length over all symbols of `frequencies`.
    /// Symbols without a code word contribute nothing.
    pub fn expected_length(&self, frequencies: &FrequencyTable) -> usize {
        frequencies
            .iter()
            .filter_map(|sf| self.get(sf.symbol).map(|code| code.len() * sf.frequency))
            .sum()
    }

    pub fn is_prefix_free(&self) -> bool {
        self.code_words.iter().enumerate().all(|(i, (_, code))| {
            self.code_words
                .iter()
                .enumerate()
                .all(|(j, (_, other))| i == j || !other.starts_with(code))
        })
    }
}

impl From<&HuffmanTree> for CodeTable {
    fn from(tree: &HuffmanTree) -> Self {
        Self::new(tree)
    }
}
