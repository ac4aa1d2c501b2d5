use std::io::{self, Cursor};

use bitstream_io::{BigEndian, BitRead, BitWrite};
use thiserror::Error;


const MAX_WIDTH: u32 = 32;


#[derive(Debug, Error)]
pub enum BitstreamError {
    #[error("Unexpected end of input")]
    EndOfInput,

    #[error("Bit width {0} is outside of 1..=32")]
    InvalidWidth(u32),

    #[error("Value {value} does not fit into {bits} bits")]
    ValueOverflow { value: u32, bits: u32 },

    #[error(transparent)]
    Io(#[from] io::Error),
}


/// MSB-first cursor over a byte slice.
///
/// Reads are all-or-nothing: the remaining length is checked before the
/// underlying reader is touched, so a failed read never consumes bits.
pub struct BitReader<'a> {
    reader: bitstream_io::BitReader<Cursor<&'a [u8]>, BigEndian>,
    total_bits: usize,
    consumed: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        let reader = bitstream_io::BitReader::endian(Cursor::new(buf), BigEndian);

        Self {
            reader,
            total_bits: buf.len() * 8,
            consumed: 0,
        }
    }

    /// Reads the next `bits` bits, the first one ending up as the most
    /// significant bit of the result.
    pub fn read_bits(&mut self, bits: u32) -> Result<u32, BitstreamError> {
        if bits == 0 || bits > MAX_WIDTH {
            return Err(BitstreamError::InvalidWidth(bits));
        }

        let width = bits as usize;
        if self.remaining_bits() < width {
            return Err(BitstreamError::EndOfInput);
        }

        let value = self.reader.read_var::<u32>(bits)?;
        self.consumed += width;

        Ok(value)
    }

    pub fn read_bit(&mut self) -> Result<bool, BitstreamError> {
        Ok(self.read_bits(1)? == 1)
    }

    pub fn position(&self) -> usize {
        self.consumed
    }

    pub fn remaining_bits(&self) -> usize {
        self.total_bits - self.consumed
    }
}


/// MSB-first writer producing a byte-aligned buffer.
pub struct BitWriter {
    writer: bitstream_io::BitWriter<Vec<u8>, BigEndian>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_bits(&mut self, bits: u32, value: u32) -> Result<(), BitstreamError> {
        if bits == 0 || bits > MAX_WIDTH {
            return Err(BitstreamError::InvalidWidth(bits));
        }

        if bits < MAX_WIDTH && value >> bits != 0 {
            return Err(BitstreamError::ValueOverflow { value, bits });
        }

        self.writer.write_var::<u32>(bits, value)?;

        Ok(())
    }

    /// Pads the last byte with zero bits and returns the written bytes.
    pub fn finish(mut self) -> Result<Vec<u8>, BitstreamError> {
        self.writer.byte_align()?;
        Ok(self.writer.into_writer())
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self {
            writer: bitstream_io::BitWriter::endian(Vec::new(), BigEndian),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_msb_first_across_byte_boundaries() {
        let mut reader = BitReader::new(&[0b1010_1100, 0b0101_0011]);

        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        assert_eq!(reader.read_bits(7).unwrap(), 0b011_0001);
        assert!(!reader.read_bit().unwrap());
        assert_eq!(reader.read_bits(5).unwrap(), 0b10011);
        assert_eq!(reader.position(), 16);
        assert_eq!(reader.remaining_bits(), 0);
    }

    #[test]
    fn reads_full_width_values() {
        let mut reader = BitReader::new(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(reader.read_bits(32).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn failed_read_does_not_consume() {
        let mut reader = BitReader::new(&[0xFF]);

        assert_eq!(reader.read_bits(5).unwrap(), 0b11111);
        assert!(matches!(reader.read_bits(4), Err(BitstreamError::EndOfInput)));
        assert_eq!(reader.position(), 5);
        assert_eq!(reader.read_bits(3).unwrap(), 0b111);
    }

    #[test]
    fn empty_input_is_end_of_input() {
        let mut reader = BitReader::new(&[]);
        assert!(matches!(reader.read_bits(1), Err(BitstreamError::EndOfInput)));
    }

    #[test]
    fn rejects_invalid_widths() {
        let mut reader = BitReader::new(&[0; 8]);

        assert!(matches!(reader.read_bits(0), Err(BitstreamError::InvalidWidth(0))));
        assert!(matches!(reader.read_bits(33), Err(BitstreamError::InvalidWidth(33))));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn writer_pads_to_byte_boundary() {
        let mut writer = BitWriter::new();
        writer.write_bits(5, 2).unwrap();
        writer.write_bits(4, 3).unwrap();
        writer.write_bits(4, 2).unwrap();

        assert_eq!(writer.finish().unwrap(), vec![0x11, 0x90]);
    }

    #[test]
    fn writer_rejects_values_wider_than_field() {
        let mut writer = BitWriter::new();

        assert!(matches!(
            writer.write_bits(4, 16),
            Err(BitstreamError::ValueOverflow { value: 16, bits: 4 })
        ));
        assert!(writer.write_bits(32, u32::MAX).is_ok());
    }
}
