use hybrid_array::Array;
use hybrid_array::sizes::{U16, U32, U64};

use crate::low::{IAesBlock, IAesBlock2};

/// Splits a 64 byte block into the two message halves of an update.
#[inline(always)]
pub fn split_blocks<B: IAesBlock2>(a: &Array<u8, U64>) -> (B, B) {
    let (a0, a1) = a.split_ref::<U32>();
    (B::from_block(a0), B::from_block(a1))
}

#[inline(always)]
pub fn write_blocks<B: IAesBlock2>(a: B, b: B, out: &mut Array<u8, U64>) {
    let (p0, p1) = out.split_ref_mut::<U32>();
    *p0 = a.into();
    *p1 = b.into();
}

#[inline(always)]
pub fn join_halves<H: IAesBlock<Size = U16>>(a: H, b: H) -> [u8; 32] {
    let a: Array<u8, U16> = a.into();
    let b: Array<u8, U16> = b.into();
    let mut ab = [0; 32];
    ab[..16].copy_from_slice(&a);
    ab[16..].copy_from_slice(&b);
    ab
}

/// `LE64(x) || LE64(y)` as one block.
#[inline(always)]
pub fn concatu64<H: IAesBlock<Size = U16>>(x: u64, y: u64) -> H {
    let mut u: Array<u8, U16> = Array([0; 16]);
    u[..8].copy_from_slice(&x.to_le_bytes());
    u[8..].copy_from_slice(&y.to_le_bytes());
    H::from_block(&u)
}
