use std::ops::{BitAnd, BitXor, BitXorAssign};

use hybrid_array::sizes::{U16, U32};
use hybrid_array::{Array, ArraySize};

mod generic;

#[cfg(any(
    test,
    feature = "force-soft",
    not(any(
        all(target_arch = "x86_64", target_feature = "aes"),
        all(target_arch = "aarch64", target_feature = "aes"),
    ))
))]
pub use generic::soft;

/// A vector of AES blocks that can be pushed through one AES round at a time.
pub trait IAesBlock:
    Default
    + Copy
    + BitXor<Output = Self>
    + BitXorAssign
    + BitAnd<Output = Self>
    + Into<Array<u8, Self::Size>>
{
    type Size: ArraySize;

    /// SubBytes, ShiftRows and MixColumns on `self`, then XOR with `key`.
    fn aes(self, key: Self) -> Self;

    fn from_block(a: &Array<u8, Self::Size>) -> Self;
}

/// One state lane: a block for instance 0 in the low half and a block for
/// instance 1 in the high half.
pub trait IAesBlock2: IAesBlock<Size = U32> + From<Self::Half> {
    type Half: IAesBlock<Size = U16>;

    fn from_halves(halves: [Self::Half; 2]) -> Self;
    fn halves(self) -> [Self::Half; 2];

    #[inline(always)]
    fn first(self) -> Self::Half {
        self.halves()[0]
    }

    #[inline(always)]
    fn reduce_xor(self) -> Self::Half {
        let [a, b] = self.halves();
        a ^ b
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "force-soft")] {
        pub use soft::{AesBlock, AesBlock2};
    } else if #[cfg(all(target_arch = "x86_64", target_feature = "aes"))] {
        mod x86_64;
        pub use x86_64::{AesBlock, AesBlock2};
    } else if #[cfg(all(target_arch = "aarch64", target_feature = "aes"))] {
        mod aarch64;
        pub use aarch64::{AesBlock, AesBlock2};
    } else {
        pub use soft::{AesBlock, AesBlock2};
    }
}
