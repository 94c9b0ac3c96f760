use crate::error::Error;
use crate::huffman::{
    decoder::HuffmanDecoder,
    encoder::{compression_ratio, HuffmanEncoder},
    tree_codec, BitString, CodeTable, FrequencyTable, HuffmanTree,
};
use crate::{logger, Result};

#[derive(Debug, Clone)]
pub struct Compression {
    pub encoded_bits: String,
    pub frequency_table: FrequencyTable,
    pub compression_ratio: f64,
    pub tree_representation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decompression {
    pub original_text: String,
}

pub fn compress(text: &str) -> Result<Compression> {
    if text.is_empty() {
        return Err(Error::NoTextProvided);
    }
    let frequency_table = FrequencyTable::count(text);
    let tree = HuffmanTree::new(&frequency_table)?;
    log::debug!("Huffman tree\n{}", tree);
    let code_table = CodeTable::new(&tree);
    logger::log_code_table(&frequency_table, &code_table);
    let encoded = HuffmanEncoder::new(&code_table).encode(text.chars())?;
    let ratio = compression_ratio(encoded.len(), frequency_table.total());
    log::debug!(
        "Encoded {} symbols ({} distinct) into {} bits, ratio {}%",
        frequency_table.total(),
        frequency_table.len(),
        encoded.len(),
        ratio
    );
    Ok(Compression {
        encoded_bits: encoded.to_string(),
        tree_representation: tree_codec::serialize(&code_table),
        frequency_table,
        compression_ratio: ratio,
    })
}

pub fn decompress(encoded_bits: &str, tree_representation: &str) -> Result<Decompression> {
    if encoded_bits.is_empty() || tree_representation.is_empty() {
        return Err(Error::InvalidInputForDecompression);
    }
    let encoded: BitString = encoded_bits.parse()?;
    decompress_bits(&encoded, tree_representation)
}

/// Same as [`decompress`] for bits that are already parsed, e.g. read from an archive.
pub fn decompress_bits(encoded: &BitString, tree_representation: &str) -> Result<Decompression> {
    if encoded.is_empty() || tree_representation.is_empty() {
        return Err(Error::InvalidInputForDecompression);
    }
    let trie = tree_codec::deserialize(tree_representation)?;
    let original_text = HuffmanDecoder::new(&trie).decode(encoded)?;
    log::debug!(
        "Decoded {} bits into {} symbols",
        encoded.len(),
        original_text.chars().count()
    );
    Ok(Decompression { original_text })
}
