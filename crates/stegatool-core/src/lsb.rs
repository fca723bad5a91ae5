/// generic hiding algorithm, used for specific ones like LSB
pub trait HideAlgorithm<T> {
    /// encodes one bit onto a carrier T e.g. a color channel `u8`
    fn encode(&self, carrier: T, bit: bool) -> T;
}

/// generic unveil algorithm
pub trait UnveilAlgorithm<T> {
    fn decode(&self, carrier: T) -> bool;
}

/// default 1 bit hiding strategy, replaces the least significant bit only
#[derive(Debug, Default, Clone, Copy)]
pub struct LsbAlgorithm;

impl HideAlgorithm<u8> for LsbAlgorithm {
    #[inline(always)]
    fn encode(&self, carrier: u8, bit: bool) -> u8 {
        (carrier & (u8::MAX - 1)) | u8::from(bit)
    }
}

impl UnveilAlgorithm<u8> for LsbAlgorithm {
    #[inline(always)]
    fn decode(&self, carrier: u8) -> bool {
        (carrier & 0x1) > 0
    }
}
