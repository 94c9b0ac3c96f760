use std::path::PathBuf;

pub use batch::{Mode, ARCHIVE_EXTENSION};
pub use cli::CLIParser;
pub use codec::{compress, decompress, decompress_bits, Compression, Decompression};
pub use error::{Error, ErrorKind};

pub mod archive;
mod batch;
pub mod binary_stream;
mod cli;
pub mod codec;
mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    mode: Mode,
    input_files: Vec<PathBuf>,
    output_directory: PathBuf,
    number_of_threads: usize,
}

/// Compresses or decompresses every input file, returning the written files.
pub fn process_files(arguments: &Arguments) -> Result<Vec<PathBuf>> {
    batch::process_files(arguments)
}
