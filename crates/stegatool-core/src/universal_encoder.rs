use std::io::{Result, Write};

use crate::bit_iterator::BitIterator;
use crate::lsb::HideAlgorithm;

/// generic stegano encoder, hides the written bytes bit by bit in the carrier items
///
/// Every written bit consumes exactly one carrier item, carrier items that are not
/// needed for the written data are never touched.
pub struct Encoder<I, A> {
    pub input: I,
    pub algorithm: A,
}

impl<I, A> Encoder<I, A> {
    pub fn new(input: I, algorithm: A) -> Self {
        Encoder { input, algorithm }
    }
}

impl<'a, I, A> Write for Encoder<I, A>
where
    I: Iterator<Item = &'a mut u8>,
    A: HideAlgorithm<u8>,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let mut bit_written = 0;
        for (bit, carrier) in BitIterator::new(buf).zip(self.input.by_ref()) {
            *carrier = self.algorithm.encode(*carrier, bit == 1);
            bit_written += 1;
        }

        Ok(bit_written >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
