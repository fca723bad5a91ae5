use std::io::{Read, Result};

use crate::bit_iterator::unpack_into;
use crate::lsb::UnveilAlgorithm;

/// generic stegano decoder, collects one bit per carrier item
pub struct Decoder<I, A> {
    pub input: I,
    pub algorithm: A,
}

impl<I, A> Decoder<I, A> {
    pub fn new(input: I, algorithm: A) -> Self {
        Decoder { input, algorithm }
    }
}

impl<'a, I, A> Read for Decoder<I, A>
where
    I: Iterator<Item = &'a u8>,
    A: UnveilAlgorithm<u8>,
{
    /// fills `buf` with up to `buf.len() * 8` bits, a partial last byte is zero padded
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let algorithm = &self.algorithm;
        let bits = self
            .input
            .by_ref()
            .map(|carrier| u8::from(algorithm.decode(*carrier)));

        unpack_into(buf, bits)
    }
}
