use super::{BitString, CodeTable, Symbol};
use crate::{error::Error, Result};

pub struct HuffmanEncoder<'a> {
    code_table: &'a CodeTable,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(code_table: &'a CodeTable) -> Self {
        Self { code_table }
    }

    pub fn encode<I>(&self, symbols: I) -> Result<BitString>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut encoded = BitString::new();
        for symbol in symbols {
            let code_word = self
                .code_table
                .get(symbol)
                .ok_or(Error::SymbolNotPresentInCodeTable(symbol))?;
            encoded.append(code_word);
        }
        Ok(encoded)
    }
}

/// Size of the encoded bits relative to eight bits per input symbol, in
/// percent with two decimal places.
pub fn compression_ratio(encoded_bits: usize, original_length: usize) -> f64 {
    if original_length == 0 {
        return 0.0;
    }
    let ratio = encoded_bits as f64 / (original_length as f64 * 8.0) * 100.0;
    (ratio * 100.0).round() / 100.0
}
