use super::{BitString, PrefixTrie};
use crate::{error::Error, Result};

pub struct HuffmanDecoder<'a> {
    trie: &'a PrefixTrie,
}

impl<'a> HuffmanDecoder<'a> {
    pub fn new(trie: &'a PrefixTrie) -> Self {
        Self { trie }
    }

    /// Walks the trie once per code word, restarting at the root after
    /// every emitted symbol. The stream has to end on a code word boundary.
    pub fn decode(&self, encoded: &BitString) -> Result<String> {
        let root = self.trie.root();
        let mut decoded = String::new();
        let mut current = root;
        let mut inside_code_word = false;
        for (position, bit) in encoded.iter().enumerate() {
            current = current
                .child(bit)
                .ok_or(Error::MissingChildInTree(position))?;
            match current.symbol() {
                Some(symbol) => {
                    decoded.push(symbol);
                    current = root;
                    inside_code_word = false;
                }
                None => inside_code_word = true,
            }
        }
        if inside_code_word {
            return Err(Error::StreamEndsInsideCode(encoded.len()));
        }
        Ok(decoded)
    }
}
