use std::fmt;

use zeroize::Zeroize;

use super::{Key, Tag16, Tag32, bits, checked_nonce, init, verify_tag};
use crate::Error;
use crate::mid::{State128X2, duplex};

/// AEGIS-MAC over AEGIS-128X2.
///
/// The tags are not interchangeable with [`Aegis128X2`](crate::Aegis128X2) tags over
/// the same bytes passed as associated data.
#[derive(Clone)]
pub struct AegisMac128X2 {
    key: Key,
}

impl Drop for AegisMac128X2 {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl fmt::Debug for AegisMac128X2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AegisMac128X2 {{ key: [REDACTED] }}")
    }
}

impl AegisMac128X2 {
    pub fn new(key: &Key) -> Self {
        Self { key: *key }
    }

    pub fn sum16(&self, nonce: &[u8], data: &[u8]) -> Tag16 {
        self.sum_with(nonce, data, State128X2::finalize_mac16)
    }

    pub fn sum32(&self, nonce: &[u8], data: &[u8]) -> Tag32 {
        self.sum_with(nonce, data, State128X2::finalize_mac32)
    }

    /// Recomputes the tag over `data` and compares it in constant time.
    pub fn verify16(&self, nonce: &[u8], data: &[u8], tag: &Tag16) -> Result<(), Error> {
        verify_tag(self.sum16(nonce, data), tag)
    }

    pub fn verify32(&self, nonce: &[u8], data: &[u8], tag: &Tag32) -> Result<(), Error> {
        verify_tag(self.sum32(nonce, data), tag)
    }

    fn sum_with<T>(
        &self,
        nonce: &[u8],
        data: &[u8],
        finalize: impl FnOnce(State128X2, u64) -> T,
    ) -> T {
        let nonce = checked_nonce(nonce);
        let data_len_bits = bits(data.len());

        let mut state = init(&self.key, nonce);
        duplex::absorb_padded(&mut state, data);
        finalize(state, data_len_bits)
    }
}
