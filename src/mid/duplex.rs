//! Feeding byte strings of any length through the 64 byte block operations.

use hybrid_array::Array;
use hybrid_array::sizes::U64;

use super::State128X2;
use crate::low::IAesBlock2;

/// `Absorb` every block of `ZeroPad(data, R)`. Empty input absorbs nothing.
pub fn absorb_padded<B: IAesBlock2>(state: &mut State128X2<B>, data: &[u8]) {
    // ad_blocks = Split(ZeroPad(ad, R), R)
    // for ai in ad_blocks:
    //     Absorb(ai)
    let (chunks, tail) = Array::<u8, U64>::slice_as_chunks(data);
    for chunk in chunks {
        state.absorb(chunk);
    }
    if !tail.is_empty() {
        let mut chunk = Array::<u8, U64>::default();
        chunk[..tail.len()].copy_from_slice(tail);
        state.absorb(&chunk);
    }
}

/// Replaces the plaintext in `buf` with ciphertext of the same length.
pub fn encrypt_in_place<B: IAesBlock2>(state: &mut State128X2<B>, buf: &mut [u8]) {
    // msg_blocks = Split(ZeroPad(msg, R), R)
    // for xi in msg_blocks:
    //     ct = ct || Enc(xi)
    // ct = Truncate(ct, |msg|)
    let (chunks, tail) = Array::<u8, U64>::slice_as_chunks_mut(buf);
    for chunk in chunks {
        state.encrypt_block(chunk);
    }
    if !tail.is_empty() {
        let len = tail.len();
        let mut chunk = Array::<u8, U64>::default();
        chunk[..len].copy_from_slice(tail);
        state.encrypt_block(&mut chunk);
        tail.copy_from_slice(&chunk[..len]);
    }
}

/// Replaces the ciphertext in `buf` with the candidate plaintext. The caller
/// still has to check the tag before releasing it.
pub fn decrypt_in_place<B: IAesBlock2>(state: &mut State128X2<B>, buf: &mut [u8]) {
    // ct_blocks = Split(ct, R)
    // cn = Tail(ct, |ct| mod R)
    let (chunks, tail) = Array::<u8, U64>::slice_as_chunks_mut(buf);

    // for ci in ct_blocks:
    //     msg = msg || Dec(ci)
    for chunk in chunks {
        state.decrypt_block(chunk);
    }

    // if cn is not empty:
    //     msg = msg || DecPartial(cn)
    if !tail.is_empty() {
        let len = tail.len();
        let mut chunk = Array::<u8, U64>::default();
        chunk[..len].copy_from_slice(tail);
        state.decrypt_partial_block(&mut chunk, len);
        tail.copy_from_slice(&chunk[..len]);
    }
}
