//! Textual tree representation: one `<path> -> '<symbol>'` line per leaf.
//!
//! Line breaks, tabs, NUL and backslashes are escaped inside the quotes
//! (`\n`, `\r`, `\t`, `\0`, `\\`) so every leaf stays on a single line.

use std::collections::HashSet;

use super::{BitString, CodeTable, Symbol};
use crate::{error::Error, Result};

const SEPARATOR: &str = " -> ";
const QUOTE: char = '\'';

pub fn serialize(code_table: &CodeTable) -> String {
    let mut representation = String::new();
    for (symbol, path) in code_table.iter() {
        representation.push_str(&format!(
            "{}{}{}{}{}\n",
            path,
            SEPARATOR,
            QUOTE,
            escape_symbol(symbol),
            QUOTE
        ));
    }
    representation
}

pub fn deserialize(representation: &str) -> Result<PrefixTrie> {
    let mut trie = PrefixTrie::default();
    let mut seen_symbols = HashSet::new();
    for line in representation.lines().filter(|line| !line.is_empty()) {
        let (path, symbol) = parse_line(line)?;
        if !seen_symbols.insert(symbol) {
            return Err(Error::DuplicateSymbolInTreeRepresentation(symbol));
        }
        trie.insert(&path, symbol)?;
    }
    if trie.root.is_leaf() {
        return Err(Error::EmptyTreeRepresentation);
    }
    Ok(trie)
}

fn parse_line(line: &str) -> Result<(BitString, Symbol)> {
    let (path, quoted_symbol) = line
        .split_once(SEPARATOR)
        .ok_or_else(|| Error::MissingSeparatorInTreeLine(line.to_owned()))?;
    let path: BitString = path
        .parse()
        .map_err(|_| Error::InvalidPathInTreeLine(line.to_owned()))?;
    if path.is_empty() {
        return Err(Error::InvalidPathInTreeLine(line.to_owned()));
    }
    let symbol = unescape_symbol(quoted_symbol)
        .ok_or_else(|| Error::InvalidSymbolInTreeLine(line.to_owned()))?;
    Ok((path, symbol))
}

fn escape_symbol(symbol: Symbol) -> String {
    match symbol {
        '\n' => "\\n".to_owned(),
        '\r' => "\\r".to_owned(),
        '\t' => "\\t".to_owned(),
        '\0' => "\\0".to_owned(),
        '\\' => "\\\\".to_owned(),
        other => other.to_string(),
    }
}

fn unescape_symbol(quoted: &str) -> Option<Symbol> {
    let inner = quoted.strip_prefix(QUOTE)?.strip_suffix(QUOTE)?;
    let mut chars = inner.chars();
    let symbol = match chars.next()? {
        '\\' => match chars.next()? {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '0' => '\0',
            '\\' => '\\',
            _ => return None,
        },
        other => other,
    };
    chars.next().is_none().then_some(symbol)
}

/// Decoding side of a prefix code: a binary trie whose terminal nodes hold
/// the symbols.
#[derive(Debug, Default)]
pub struct PrefixTrie {
    root: TrieNode,
}

#[derive(Debug, Default)]
pub struct TrieNode {
    symbol: Option<Symbol>,
    children: [Option<Box<TrieNode>>; 2],
}

impl TrieNode {
    pub fn symbol(&self) -> Option<Symbol> {
        self.symbol
    }

    pub fn child(&self, bit: bool) -> Option<&TrieNode> {
        self.children[bit as usize].as_deref()
    }

    fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

impl PrefixTrie {
    pub fn from_code_table(code_table: &CodeTable) -> Result<PrefixTrie> {
        let mut trie = PrefixTrie::default();
        for (symbol, path) in code_table.iter() {
            trie.insert(path, symbol)?;
        }
        Ok(trie)
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    fn insert(&mut self, path: &BitString, symbol: Symbol) -> Result<()> {
        let conflict = || Error::ConflictingPathsInTreeRepresentation(path.to_string());
        let mut node = &mut self.root;
        for bit in path.iter() {
            if node.symbol.is_some() {
                return Err(conflict());
            }
            node = node.children[bit as usize]
                .get_or_insert_with(Box::default)
                .as_mut();
        }
        if node.symbol.is_some() || !node.is_leaf() {
            return Err(conflict());
        }
        node.symbol = Some(symbol);
        Ok(())
    }
}
