//! Binary container for a compression result.
//!
//! Layout, integers in big endian:
//! `HUF1` | u32 tree length | tree representation (UTF-8) | u64 bit count | packed bits

use std::io::{self, Write};

use crate::binary_stream::{BitReader, BitWriter};
use crate::codec::Compression;
use crate::error::Error;
use crate::huffman::BitString;
use crate::Result;

const MAGIC: &[u8; 4] = b"HUF1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    pub tree_representation: String,
    pub encoded_bits: BitString,
}

impl Archive {
    pub fn write_to<T: Write>(&self, writer: &mut T) -> io::Result<()> {
        let tree_length = u32::try_from(self.tree_representation.len())
            .map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))?;
        writer.write_all(MAGIC)?;
        writer.write_all(&tree_length.to_be_bytes())?;
        writer.write_all(self.tree_representation.as_bytes())?;
        writer.write_all(&(self.encoded_bits.len() as u64).to_be_bytes())?;
        let mut bit_writer = BitWriter::new(writer);
        bit_writer.write_bits(self.encoded_bits.iter())?;
        bit_writer.flush()
    }

    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Archive> {
        let mut cursor = ByteCursor { bytes };
        if cursor.take(MAGIC.len())? != MAGIC {
            return Err(Error::MalformedArchive("unknown file signature"));
        }
        let tree_length = u32::from_be_bytes(cursor.take_array()?) as usize;
        let tree_representation = std::str::from_utf8(cursor.take(tree_length)?)
            .map_err(|_| Error::MalformedArchive("tree representation is not valid UTF-8"))?
            .to_owned();
        let bit_count = usize::try_from(u64::from_be_bytes(cursor.take_array()?))
            .map_err(|_| Error::MalformedArchive("bit count out of range"))?;
        let packed_bits = cursor.take(bit_count.div_ceil(8))?;
        let used_bits_in_last_byte = bit_count % 8;
        if used_bits_in_last_byte != 0
            && packed_bits
                .last()
                .is_some_and(|byte| *byte & (0xFF_u8 >> used_bits_in_last_byte) != 0)
        {
            return Err(Error::MalformedArchive("non-zero padding"));
        }
        if !cursor.bytes.is_empty() {
            return Err(Error::MalformedArchive("trailing bytes after encoded bits"));
        }
        Ok(Archive {
            tree_representation,
            encoded_bits: BitReader::new(packed_bits, bit_count).collect(),
        })
    }
}

impl TryFrom<&Compression> for Archive {
    type Error = Error;

    fn try_from(compression: &Compression) -> Result<Self> {
        Ok(Archive {
            tree_representation: compression.tree_representation.clone(),
            encoded_bits: compression.encoded_bits.parse()?,
        })
    }
}

struct ByteCursor<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    fn take(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.bytes.len() < count {
            return Err(Error::MalformedArchive("unexpected end of data"));
        }
        let (head, tail) = self.bytes.split_at(count);
        self.bytes = tail;
        Ok(head)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut array = [0; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }
}
