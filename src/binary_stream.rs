use std::io;
use std::io::Write;

/// State for writing individual bits to a Writer
pub struct BitWriter<'a, T: Write> {
    /// the underlying output stream
    writer: &'a mut T,
    /// buffer of individual bits not yet written
    buffer: u8,
    /// how many bits are waiting to be written
    buffer_space_used: u8,
}

impl<'a, T: Write> BitWriter<'a, T> {
    pub fn new(writer: &'a mut T) -> BitWriter<'a, T> {
        BitWriter {
            writer,
            buffer: 0,
            buffer_space_used: 0,
        }
    }

    /// write a single bit, most significant bit of each byte first
    pub fn write_bit(&mut self, bit: bool) -> Result<(), io::Error> {
        if bit {
            self.buffer |= 0b10000000_u8 >> self.buffer_space_used;
        }
        self.buffer_space_used += 1;
        if self.buffer_space_used == 8 {
            self.writer.write_all(&[self.buffer])?;
            self.buffer_space_used = 0;
            self.buffer = 0; // depended upon in flush()
        }
        Ok(())
    }

    /// write a non-byte-aligned sequence of bits
    ///
    /// returns the number of bits taken from the iterator, but does not
    /// guarantee that all of them reached the underlying stream, use
    /// flush to write any remaining bits.
    pub fn write_bits<I>(&mut self, bits: I) -> Result<usize, io::Error>
    where
        I: IntoIterator<Item = bool>,
    {
        let mut count = 0;
        for bit in bits {
            self.write_bit(bit)?;
            count += 1;
        }
        Ok(count)
    }
}

impl<T: Write> Write for BitWriter<'_, T> {
    /// Writes whole bytes, which are not aligned to the underlying
    /// stream if single bits are still buffered
    fn write(&mut self, buf: &[u8]) -> Result<usize, io::Error> {
        if self.buffer_space_used == 0 {
            return self.writer.write(buf);
        }
        for &byte in buf {
            for bit_index in 0..8 {
                self.write_bit(byte & (0b10000000_u8 >> bit_index) > 0)?;
            }
        }
        Ok(buf.len())
    }

    /// Flush all bits and the underlying writer;
    ///
    /// If there are non-byte-aligned bits still
    /// in the buffer, they will be written to the output
    /// with 0 padding to the next byte;
    fn flush(&mut self) -> Result<(), io::Error> {
        if self.buffer_space_used != 0 {
            self.writer.write_all(&[self.buffer])?;
            self.buffer = 0;
            self.buffer_space_used = 0;
        }
        self.writer.flush()
    }
}

/// Reads the first `bit_count` bits of a byte slice, most significant bit first
pub struct BitReader<'a> {
    bytes: &'a [u8],
    position: usize,
    bit_count: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8], bit_count: usize) -> BitReader<'a> {
        BitReader {
            bytes,
            position: 0,
            bit_count: bit_count.min(bytes.len() * 8),
        }
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.position >= self.bit_count {
            return None;
        }
        let byte = self.bytes[self.position / 8];
        let bit = byte & (0b10000000_u8 >> (self.position % 8)) > 0;
        self.position += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bit_count - self.position;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod test {
    use super::{BitReader, BitWriter};
    use std::io::Write;

    #[test]
    fn byte_mode_test() {
        let mut my_output: Vec<u8> = vec![];
        let mut writer = BitWriter::new(&mut my_output);
        let input: &[u8] = &[72, 65, 76, 76, 79];
        writer.write_all(input).expect("should not fail");
        writer.flush().expect("flushing should not fail");
        assert_eq!(my_output, input);
    }

    #[test]
    fn bit_mode_test() {
        let mut my_output: Vec<u8> = vec![];
        let mut writer = BitWriter::new(&mut my_output);
        // write 0b11000011 0b11110000
        writer.write_bits([true; 2]).expect("ERR");
        writer.write_bits([false; 4]).expect("ERR");
        writer.write_bits([true; 2]).expect("ERR");
        writer.write_bits([true; 4]).expect("ERR");
        writer.flush().expect("ERR");
        assert_eq!(my_output, [195, 15 << 4]);
    }

    #[test]
    fn mixed_mode_test() {
        let mut my_output: Vec<u8> = vec![];
        let mut writer = BitWriter::new(&mut my_output);
        // 0b111
        writer.write_bits([true; 3]).expect("ERR");
        // 0b11100000 00100000 01010000 100
        writer.write_all(&[1, 2, 4 | 128]).expect("ERR");
        writer.flush().expect("ERR");
        assert_eq!(my_output, [224, 32, 80, 128]);
    }

    #[test]
    fn reader_stops_at_bit_count() {
        let bits: Vec<bool> = BitReader::new(&[0b10110000, 0xFF], 4).collect();
        assert_eq!(bits, [true, false, true, true]);
    }

    #[test]
    fn reader_never_reads_past_the_slice() {
        let reader = BitReader::new(&[0xFF], 100);
        assert_eq!(reader.count(), 8);
    }

    #[test]
    fn writer_and_reader_agree() {
        let bits = [true, false, false, true, true, true, false, true, false, true, true];
        let mut output: Vec<u8> = vec![];
        let mut writer = BitWriter::new(&mut output);
        writer.write_bits(bits).expect("ERR");
        writer.flush().expect("ERR");
        assert_eq!(output.len(), 2);
        let read: Vec<bool> = BitReader::new(&output, bits.len()).collect();
        assert_eq!(read, bits);
    }
}
