use huffman_text_codec::huffman::{CodeTable, FrequencyTable, HuffmanTree};
use huffman_text_codec::{compress, decompress, Error};

fn main() -> Result<(), Error> {
    let text = "this is an example of a huffman tree";

    let frequencies = FrequencyTable::count(text);
    let tree = HuffmanTree::new(&frequencies)?;
    println!("huffman tree\n{}", tree);

    let code_table = CodeTable::new(&tree);
    println!("code table");
    for (symbol, code_word) in code_table.iter() {
        println!(
            "{:?} x{} -> {}",
            symbol,
            frequencies.get(symbol).unwrap_or(0),
            code_word
        );
    }

    let compression = compress(text)?;
    println!("encoded sequence\n{}", compression.encoded_bits);
    println!("compression ratio\n{}%", compression.compression_ratio);
    println!("tree representation\n{}", compression.tree_representation);

    let decompression = decompress(
        &compression.encoded_bits,
        &compression.tree_representation,
    )?;
    println!("decoded sequence\n{}", decompression.original_text);
    Ok(())
}
