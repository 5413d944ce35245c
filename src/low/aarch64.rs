use std::arch::aarch64::*;
use std::ops::{BitAnd, BitXor, BitXorAssign};

use hybrid_array::Array;
use hybrid_array::sizes::U16;

use super::IAesBlock;

pub type AesBlock2 = super::generic::polyfill_x2::AesBlock2<AesBlock>;

#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct AesBlock(uint8x16_t);

impl Default for AesBlock {
    #[inline(always)]
    fn default() -> Self {
        // Safety: we require target_feature = "neon".
        Self(unsafe { vmovq_n_u8(0) })
    }
}

impl From<AesBlock> for Array<u8, U16> {
    #[inline(always)]
    fn from(val: AesBlock) -> Self {
        let mut out: Array<u8, U16> = Array([0; 16]);
        // Safety: the output holds 16 bytes.
        unsafe { vst1q_u8(out.as_mut_ptr(), val.0) }
        out
    }
}

impl IAesBlock for AesBlock {
    type Size = U16;

    #[inline(always)]
    fn aes(self, key: Self) -> Self {
        // AESE xors its key before SubBytes, so feed it zero and add the real key after MixColumns.
        // Safety: we require target_feature = "aes".
        Self(unsafe { vaesmcq_u8(vaeseq_u8(self.0, vmovq_n_u8(0))) }) ^ key
    }

    #[inline(always)]
    fn from_block(a: &Array<u8, Self::Size>) -> Self {
        // Safety: the input holds 16 bytes.
        AesBlock(unsafe { vld1q_u8(a.as_ptr()) })
    }
}

impl BitXor for AesBlock {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        // Safety: we require target_feature = "neon".
        Self(unsafe { veorq_u8(self.0, rhs.0) })
    }
}

impl BitXorAssign for AesBlock {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl BitAnd for AesBlock {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        // Safety: we require target_feature = "neon".
        Self(unsafe { vandq_u8(self.0, rhs.0) })
    }
}
