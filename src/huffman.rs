pub mod bit_string;
pub mod code;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod tree;
pub mod tree_codec;

pub use bit_string::BitString;
pub use code::CodeTable;
pub use frequency::FrequencyTable;
pub use tree::HuffmanTree;
pub use tree_codec::PrefixTrie;

pub type Symbol = char;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: usize,
}

impl SymbolFrequency {
    pub fn new(symbol: Symbol, frequency: usize) -> Self {
        Self { symbol, frequency }
    }
}

impl From<(Symbol, usize)> for SymbolFrequency {
    fn from(value: (Symbol, usize)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
        }
    }
}
