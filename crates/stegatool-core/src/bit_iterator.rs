use std::io::{ErrorKind, Read, Result};
use std::slice;

use bitstream_io::{BitWrite, BitWriter, LittleEndian};

/// Iterates over the bits of a byte source.
///
/// Bytes are consumed in order, the bits of each byte from the least significant (bit 0)
/// to the most significant (bit 7). Every item is either `0` or `1`.
pub struct BitIterator<I> {
    bit: u8,
    byte: Option<u8>,
    iter: I,
}

impl<I> BitIterator<I> {
    pub fn new(s: I) -> Self {
        BitIterator {
            bit: 8,
            byte: None,
            iter: s,
        }
    }
}

impl<I> BitIterator<I>
where
    I: Read,
{
    fn next_byte(&mut self) -> Option<u8> {
        let mut b = 0;
        loop {
            return match self.iter.read(slice::from_mut(&mut b)) {
                Ok(0) => None,
                Ok(..) => Some(b),
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => None,
            };
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Read,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bit == 8 {
            self.byte = self.next_byte();
            self.bit = 0;
        }
        let b = self.byte?;
        let bit = (b >> self.bit) & 1;
        self.bit += 1;

        Some(bit)
    }
}

/// Turns a message into its bit stream, `message.len() * 8` bits long.
pub fn pack(message: &[u8]) -> BitIterator<&[u8]> {
    BitIterator::new(message)
}

/// Collects `bits` back into bytes, the inverse of [`pack`].
///
/// There is no way to tell the length of the original message from the bits alone,
/// so the caller decides on `byte_count`. Bits beyond `byte_count * 8` are not consumed,
/// missing bits leave the trailing bytes zero.
pub fn unpack<I>(bits: I, byte_count: usize) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = u8>,
{
    let mut buf = vec![0; byte_count];
    unpack_into(&mut buf, bits)?;

    Ok(buf)
}

/// Writes up to `buf.len() * 8` bits into `buf` and returns the number of bytes touched.
///
/// A trailing partial byte is padded with zero bits and counts as touched.
pub fn unpack_into<I>(buf: &mut [u8], bits: I) -> Result<usize>
where
    I: IntoIterator<Item = u8>,
{
    let bits_to_take = buf.len() << 3;
    let mut bit_buffer = BitWriter::endian(&mut *buf, LittleEndian);

    let mut bit_read = 0;
    for bit in bits.into_iter().take(bits_to_take) {
        bit_buffer.write_bit(bit == 1)?;
        bit_read += 1;
    }

    if !bit_buffer.byte_aligned() {
        bit_buffer.byte_align()?;
    }

    Ok((bit_read + 7) >> 3)
}
