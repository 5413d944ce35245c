use std::ops::{BitAnd, BitXor, BitXorAssign};

use hybrid_array::Array;
use hybrid_array::sizes::{U16, U32};

use crate::low::{IAesBlock, IAesBlock2};

/// A lane built from two independent single-block registers, for targets
/// without 256-bit AES instructions.
#[derive(Clone, Copy, Default)]
#[repr(C)]
pub struct AesBlock2<B>(B, B);

impl<B: IAesBlock<Size = U16>> From<B> for AesBlock2<B> {
    #[inline(always)]
    fn from(a: B) -> Self {
        Self(a, a)
    }
}

impl<B: IAesBlock<Size = U16>> From<AesBlock2<B>> for Array<u8, U32> {
    #[inline(always)]
    fn from(val: AesBlock2<B>) -> Self {
        let a: Array<u8, U16> = val.0.into();
        let b: Array<u8, U16> = val.1.into();
        a.concat(b)
    }
}

impl<B: IAesBlock<Size = U16>> IAesBlock for AesBlock2<B> {
    type Size = U32;

    #[inline(always)]
    fn aes(self, key: Self) -> Self {
        let Self(m0, m1) = self;
        let Self(k0, k1) = key;

        Self(m0.aes(k0), m1.aes(k1))
    }

    #[inline(always)]
    fn from_block(a: &Array<u8, Self::Size>) -> Self {
        let (a0, a1) = a.split_ref::<U16>();
        Self(B::from_block(a0), B::from_block(a1))
    }
}

impl<B: IAesBlock<Size = U16>> IAesBlock2 for AesBlock2<B> {
    type Half = B;

    #[inline(always)]
    fn from_halves([a, b]: [B; 2]) -> Self {
        Self(a, b)
    }

    #[inline(always)]
    fn halves(self) -> [B; 2] {
        [self.0, self.1]
    }
}

impl<B: IAesBlock<Size = U16>> BitXor for AesBlock2<B> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        let Self(l0, l1) = self;
        let Self(r0, r1) = rhs;
        Self(l0 ^ r0, l1 ^ r1)
    }
}

impl<B: IAesBlock<Size = U16>> BitXorAssign for AesBlock2<B> {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl<B: IAesBlock<Size = U16>> BitAnd for AesBlock2<B> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        let Self(l0, l1) = self;
        let Self(r0, r1) = rhs;
        Self(l0 & r0, l1 & r1)
    }
}
