use std::fmt::Display;

use crate::huffman::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyInput,
    Parse,
    Structural,
    MalformedTree,
    TruncatedStream,
    Lookup,
    Io,
}

#[derive(Debug)]
pub enum Error {
    NoTextProvided,
    InvalidInputForDecompression,
    EmptyFrequencyTable,
    EmptyTreeRepresentation,
    MissingSeparatorInTreeLine(String),
    InvalidPathInTreeLine(String),
    InvalidSymbolInTreeLine(String),
    InvalidBitInEncodedStream(char, usize),
    ConflictingPathsInTreeRepresentation(String),
    DuplicateSymbolInTreeRepresentation(Symbol),
    MissingChildInTree(usize),
    StreamEndsInsideCode(usize),
    SymbolNotPresentInCodeTable(Symbol),
    MalformedArchive(&'static str),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadInputFile(String, std::io::Error),
    FailedToWriteOutputFile(String, std::io::Error),
    InputFileIsNotValidUtf8(String),
    MissingArchiveExtension(String),
    OutputFileClaimedByMultipleInputs(String),
    FailedToProcessFiles(usize),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoTextProvided
            | Self::InvalidInputForDecompression
            | Self::EmptyFrequencyTable
            | Self::EmptyTreeRepresentation => ErrorKind::EmptyInput,
            Self::MissingSeparatorInTreeLine(_)
            | Self::InvalidPathInTreeLine(_)
            | Self::InvalidSymbolInTreeLine(_)
            | Self::InvalidBitInEncodedStream(_, _)
            | Self::MalformedArchive(_) => ErrorKind::Parse,
            Self::ConflictingPathsInTreeRepresentation(_)
            | Self::DuplicateSymbolInTreeRepresentation(_) => ErrorKind::Structural,
            Self::MissingChildInTree(_) => ErrorKind::MalformedTree,
            Self::StreamEndsInsideCode(_) => ErrorKind::TruncatedStream,
            Self::SymbolNotPresentInCodeTable(_) => ErrorKind::Lookup,
            Self::UnableToOpenInputFileForReading(_, _)
            | Self::UnableToOpenOutputFileForWriting(_, _)
            | Self::FailedToReadInputFile(_, _)
            | Self::FailedToWriteOutputFile(_, _)
            | Self::InputFileIsNotValidUtf8(_)
            | Self::MissingArchiveExtension(_)
            | Self::OutputFileClaimedByMultipleInputs(_)
            | Self::FailedToProcessFiles(_) => ErrorKind::Io,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTextProvided => write!(f, "No text provided"),
            Self::InvalidInputForDecompression => {
                write!(f, "Invalid input for decompression")
            }
            Self::EmptyFrequencyTable => {
                write!(f, "Can't build a Huffman tree from an empty frequency table")
            }
            Self::EmptyTreeRepresentation => {
                write!(f, "Tree representation does not contain any leaf")
            }
            Self::MissingSeparatorInTreeLine(line) => {
                write!(f, "Tree line '{}' lacks the ' -> ' separator", line)
            }
            Self::InvalidPathInTreeLine(line) => {
                write!(
                    f,
                    "Tree line '{}' has a path that is empty or not made of 0 and 1",
                    line
                )
            }
            Self::InvalidSymbolInTreeLine(line) => {
                write!(
                    f,
                    "Tree line '{}' does not hold exactly one quoted symbol",
                    line
                )
            }
            Self::InvalidBitInEncodedStream(found, position) => {
                write!(
                    f,
                    "Encoded stream contains '{}' at position {}. Expected '0' or '1'.",
                    found, position
                )
            }
            Self::ConflictingPathsInTreeRepresentation(path) => {
                write!(
                    f,
                    "Path '{}' conflicts with another path of the tree representation",
                    path
                )
            }
            Self::DuplicateSymbolInTreeRepresentation(symbol) => {
                write!(
                    f,
                    "Symbol {:?} appears more than once in the tree representation",
                    symbol
                )
            }
            Self::MissingChildInTree(position) => {
                write!(
                    f,
                    "Bit at position {} leads to a branch that does not exist in the tree",
                    position
                )
            }
            Self::StreamEndsInsideCode(length) => {
                write!(
                    f,
                    "Encoded stream of {} bits ends in the middle of a code word",
                    length
                )
            }
            Self::SymbolNotPresentInCodeTable(symbol) => {
                write!(f, "Symbol {:?} not present in code table", symbol)
            }
            Self::MalformedArchive(reason) => write!(f, "Malformed archive: {}", reason),
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(path, error) => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
            Self::FailedToWriteOutputFile(path, error) => {
                write!(f, "Failed to write output file '{}': {}", path, error)
            }
            Self::InputFileIsNotValidUtf8(path) => {
                write!(f, "Input file '{}' is not valid UTF-8 text", path)
            }
            Self::MissingArchiveExtension(path) => {
                write!(f, "Input file '{}' does not have the .huff extension", path)
            }
            Self::OutputFileClaimedByMultipleInputs(path) => {
                write!(
                    f,
                    "Output file '{}' would be written by more than one input file",
                    path
                )
            }
            Self::FailedToProcessFiles(count) => {
                write!(f, "{} file(s) could not be processed", count)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::{Error, ErrorKind};

    #[test]
    fn test_caller_visible_messages() {
        assert_eq!(Error::NoTextProvided.to_string(), "No text provided");
        assert_eq!(
            Error::InvalidInputForDecompression.to_string(),
            "Invalid input for decompression"
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Error::NoTextProvided.kind(), ErrorKind::EmptyInput);
        assert_eq!(
            Error::MissingSeparatorInTreeLine("0 'a'".to_owned()).kind(),
            ErrorKind::Parse
        );
        assert_eq!(
            Error::ConflictingPathsInTreeRepresentation("00".to_owned()).kind(),
            ErrorKind::Structural
        );
        assert_eq!(Error::MissingChildInTree(3).kind(), ErrorKind::MalformedTree);
        assert_eq!(
            Error::StreamEndsInsideCode(5).kind(),
            ErrorKind::TruncatedStream
        );
        assert_eq!(
            Error::SymbolNotPresentInCodeTable('x').kind(),
            ErrorKind::Lookup
        );
        assert_eq!(
            Error::OutputFileClaimedByMultipleInputs("x.txt.huff".to_owned()).kind(),
            ErrorKind::Io
        );
    }
}
