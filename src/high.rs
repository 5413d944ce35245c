mod aegis128x2;
mod mac;

pub use aegis128x2::Aegis128X2;
pub use mac::AegisMac128X2;

use hybrid_array::Array;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::Error;
use crate::mid::State128X2;

pub const KEY_SIZE: usize = 16;
pub const NONCE_SIZE: usize = 16;
pub const TAG16_SIZE: usize = 16;
pub const TAG32_SIZE: usize = 32;

/// Bytes added by [`Aegis128X2::seal`].
pub const OVERHEAD: usize = TAG16_SIZE;

pub type Key = [u8; KEY_SIZE];
pub type Tag16 = [u8; TAG16_SIZE];
pub type Tag32 = [u8; TAG32_SIZE];

#[inline]
fn checked_nonce(nonce: &[u8]) -> &[u8; NONCE_SIZE] {
    let Ok(nonce) = <&[u8; NONCE_SIZE]>::try_from(nonce) else {
        panic!("nonce is incorrect size");
    };
    nonce
}

#[inline]
fn try_bits(bytes: usize) -> Option<u64> {
    u64::try_from(bytes).ok().and_then(|b| b.checked_mul(8))
}

/// P_MAX, A_MAX and the MAC input limit are all 2^61 - 1 bytes (2^64 - 8 bits).
#[inline]
fn bits(bytes: usize) -> u64 {
    let Some(bits) = try_bits(bytes) else {
        panic!("input longer than 2^61 - 1 bytes");
    };
    bits
}

#[inline]
fn init(key: &Key, nonce: &[u8; NONCE_SIZE]) -> State128X2 {
    State128X2::new(&Array(*key), &Array(*nonce))
}

/// Constant-time tag comparison. `expected` is wiped whatever the outcome.
fn verify_tag<const N: usize>(mut expected: [u8; N], tag: &[u8; N]) -> Result<(), Error> {
    let matches: bool = expected[..].ct_eq(&tag[..]).into();
    expected.zeroize();
    if matches { Ok(()) } else { Err(Error::TagMismatch) }
}

/// Appends `data` to `dst` and hands back the appended region.
#[inline]
fn append<'a>(dst: &'a mut Vec<u8>, data: &[u8]) -> &'a mut [u8] {
    let start = dst.len();
    dst.extend_from_slice(data);
    &mut dst[start..]
}
