use std::arch::x86_64::*;
use std::ops::{BitAnd, BitXor, BitXorAssign};

use hybrid_array::Array;
use hybrid_array::sizes::U32;

use crate::low::{IAesBlock, IAesBlock2};

use super::AesBlock;

/// Both instances of a lane in one ymm register, so every AES round of the
/// update is a single `vaesenc`.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct AesBlock2(__m256i);

impl Default for AesBlock2 {
    #[inline(always)]
    fn default() -> Self {
        // Safety: we require target_feature = "avx2".
        Self(unsafe { _mm256_setzero_si256() })
    }
}

impl From<AesBlock> for AesBlock2 {
    #[inline(always)]
    fn from(a: AesBlock) -> Self {
        // Safety: we require target_feature = "avx2".
        Self(unsafe { _mm256_broadcastsi128_si256(a.0) })
    }
}

impl From<AesBlock2> for Array<u8, U32> {
    #[inline(always)]
    fn from(val: AesBlock2) -> Self {
        let mut out: Array<u8, U32> = Array([0; 32]);
        // Safety: the output holds 32 bytes and storeu has no alignment requirement.
        unsafe { _mm256_storeu_si256(out.as_mut_ptr().cast(), val.0) }
        out
    }
}

impl IAesBlock for AesBlock2 {
    type Size = U32;

    #[inline(always)]
    fn aes(self, key: Self) -> Self {
        // Safety: we require target_feature = "vaes".
        Self(unsafe { _mm256_aesenc_epi128(self.0, key.0) })
    }

    #[inline(always)]
    fn from_block(a: &Array<u8, Self::Size>) -> Self {
        // Safety: the input holds 32 bytes and loadu has no alignment requirement.
        Self(unsafe { _mm256_loadu_si256(a.as_ptr().cast()) })
    }
}

impl IAesBlock2 for AesBlock2 {
    type Half = AesBlock;

    #[inline(always)]
    fn from_halves([a, b]: [AesBlock; 2]) -> Self {
        // Safety: we require target_feature = "avx2".
        Self(unsafe { _mm256_setr_m128i(a.0, b.0) })
    }

    #[inline(always)]
    fn halves(self) -> [AesBlock; 2] {
        // Safety: we require target_feature = "avx2".
        let a = AesBlock(unsafe { _mm256_extracti128_si256::<0>(self.0) });
        // Safety: we require target_feature = "avx2".
        let b = AesBlock(unsafe { _mm256_extracti128_si256::<1>(self.0) });
        [a, b]
    }

    #[inline(always)]
    fn first(self) -> AesBlock {
        // Safety: we require target_feature = "avx2".
        AesBlock(unsafe { _mm256_castsi256_si128(self.0) })
    }
}

impl BitXor for AesBlock2 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        // Safety: we require target_feature = "avx2".
        Self(unsafe { _mm256_xor_si256(self.0, rhs.0) })
    }
}

impl BitXorAssign for AesBlock2 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl BitAnd for AesBlock2 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        // Safety: we require target_feature = "avx2".
        Self(unsafe { _mm256_and_si256(self.0, rhs.0) })
    }
}
