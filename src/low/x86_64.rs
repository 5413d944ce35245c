use std::arch::x86_64::*;
use std::ops::{BitAnd, BitXor, BitXorAssign};

use hybrid_array::Array;
use hybrid_array::sizes::U16;

use crate::low::IAesBlock;

cfg_if::cfg_if! {
    if #[cfg(all(target_feature = "avx2", target_feature = "vaes"))] {
        mod avx2_x2;
        pub use avx2_x2::AesBlock2;
    } else {
        pub type AesBlock2 = super::generic::polyfill_x2::AesBlock2<AesBlock>;
    }
}

#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct AesBlock(pub(super) __m128i);

impl Default for AesBlock {
    #[inline(always)]
    fn default() -> Self {
        // Safety: we require target_feature = "sse2".
        Self(unsafe { _mm_setzero_si128() })
    }
}

impl From<AesBlock> for Array<u8, U16> {
    #[inline(always)]
    fn from(val: AesBlock) -> Self {
        let mut out: Array<u8, U16> = Array([0; 16]);
        // Safety: the output holds 16 bytes and storeu has no alignment requirement.
        unsafe { _mm_storeu_si128(out.as_mut_ptr().cast(), val.0) }
        out
    }
}

impl IAesBlock for AesBlock {
    type Size = U16;

    #[inline(always)]
    fn aes(self, key: Self) -> Self {
        // Safety: we require target_feature = "aes".
        Self(unsafe { _mm_aesenc_si128(self.0, key.0) })
    }

    #[inline(always)]
    fn from_block(a: &Array<u8, Self::Size>) -> Self {
        // Safety: the input holds 16 bytes and loadu has no alignment requirement.
        Self(unsafe { _mm_loadu_si128(a.as_ptr().cast()) })
    }
}

impl BitXor for AesBlock {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        // Safety: we require target_feature = "sse2".
        Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
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
        // Safety: we require target_feature = "sse2".
        Self(unsafe { _mm_and_si128(self.0, rhs.0) })
    }
}
