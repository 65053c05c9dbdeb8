// bitstream.rs

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::error::{CodecError, Result};

/// MSB-first bit accumulator backed by a growing byte buffer.
pub struct BitStream {
    writer: BitWriter<Vec<u8>, BigEndian>,
    bit_len: usize,
}

impl Default for BitStream {
    fn default() -> Self {
        Self::new()
    }
}

impl BitStream {
    pub fn new() -> Self {
        Self {
            writer: BitWriter::endian(Vec::new(), BigEndian),
            bit_len: 0,
        }
    }

    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.writer.write_bit(bit)?;
        self.bit_len += 1;
        Ok(())
    }

    pub fn write_bits(&mut self, bits: &[bool]) -> Result<()> {
        for &bit in bits {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Number of bits written so far, padding excluded.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Pads with zero bits up to the next byte boundary.
    ///
    /// Returns the number of padding bits (0-7) together with the packed bytes.
    pub fn flush_with_padding(mut self) -> Result<(u8, Vec<u8>)> {
        let padding = ((8 - self.bit_len % 8) % 8) as u8;
        self.writer.byte_align()?;
        Ok((padding, self.writer.into_writer()))
    }
}

/// Expands `bytes` back into bits in the order they were written.
///
/// With `skip_header_byte`, byte 0 is taken as the padding count: it is not
/// part of the returned bits, and that many bits are dropped from the end.
pub fn read_bits(bytes: &[u8], skip_header_byte: bool) -> Result<Vec<bool>> {
    let (padding, body) = if skip_header_byte {
        let (&header, body) = bytes
            .split_first()
            .ok_or_else(|| CodecError::header("missing padding byte"))?;
        (header, body)
    } else {
        (0, bytes)
    };

    let available = body.len() * 8;
    if padding > 7 || usize::from(padding) > available {
        return Err(CodecError::MalformedPadding {
            declared: padding,
            available,
        });
    }

    let total = available - usize::from(padding);
    let mut reader = BitReader::endian(Cursor::new(body), BigEndian);
    let mut bits = Vec::with_capacity(total);
    for _ in 0..total {
        bits.push(reader.read_bit()?);
    }
    Ok(bits)
}
