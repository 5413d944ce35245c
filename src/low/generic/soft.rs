//! Portable single-block backend.
//!
//! The round itself comes from the `aes` crate, which uses a constant-time
//! fixsliced implementation and switches to AES-NI/ARMv8 when it detects them at
//! runtime.

use std::ops::{BitAnd, BitXor, BitXorAssign};

use hybrid_array::Array;
use hybrid_array::sizes::U16;

use crate::low::IAesBlock;

#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct AesBlock(u128);

pub type AesBlock2 = super::polyfill_x2::AesBlock2<AesBlock>;

impl From<AesBlock> for Array<u8, U16> {
    #[inline(always)]
    fn from(val: AesBlock) -> Self {
        Array(val.0.to_le_bytes())
    }
}

impl IAesBlock for AesBlock {
    type Size = U16;

    #[inline(always)]
    fn aes(self, key: Self) -> Self {
        let mut block = aes::Block::clone_from_slice(&self.0.to_le_bytes());
        let round_key = aes::Block::clone_from_slice(&key.0.to_le_bytes());
        aes::hazmat::cipher_round(&mut block, &round_key);

        let mut out = [0; 16];
        out.copy_from_slice(&block);
        Self(u128::from_le_bytes(out))
    }

    #[inline(always)]
    fn from_block(a: &Array<u8, Self::Size>) -> Self {
        Self(u128::from_le_bytes(a.0))
    }
}

impl BitXor for AesBlock {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for AesBlock {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl BitAnd for AesBlock {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}
