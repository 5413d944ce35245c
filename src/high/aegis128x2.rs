use std::fmt;

use aead::consts::{U0, U16};
use aead::{AeadCore, AeadInPlace, KeyInit, KeySizeUser, Nonce, Tag};
use zeroize::Zeroize;

use super::{
    Key, NONCE_SIZE, OVERHEAD, TAG16_SIZE, Tag16, Tag32, append, bits, checked_nonce, init,
    try_bits, verify_tag,
};
use crate::Error;
use crate::mid::{State128X2, duplex};

/// AEGIS-128X2 authenticated encryption under a fixed key.
///
/// Every method takes the nonce as a slice and panics unless it is exactly
/// [`NONCE_SIZE`](crate::NONCE_SIZE) bytes long. Each call is independent, so one
/// value can be shared between threads.
#[derive(Clone)]
pub struct Aegis128X2 {
    key: Key,
}

impl Drop for Aegis128X2 {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl fmt::Debug for Aegis128X2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aegis128X2 {{ key: [REDACTED] }}")
    }
}

impl Aegis128X2 {
    pub fn new(key: &Key) -> Self {
        Self { key: *key }
    }

    pub const fn nonce_size(&self) -> usize {
        NONCE_SIZE
    }

    /// Ciphertext expansion of [`seal`](Self::seal).
    pub const fn overhead(&self) -> usize {
        OVERHEAD
    }

    /// Appends `ciphertext || tag16` to `dst`, keeping whatever `dst` already held.
    pub fn seal(&self, dst: &mut Vec<u8>, nonce: &[u8], plaintext: &[u8], ad: &[u8]) {
        dst.reserve(plaintext.len() + OVERHEAD);
        let tag = self.seal_detached16(dst, nonce, plaintext, ad);
        dst.extend_from_slice(&tag);
    }

    /// Appends the ciphertext to `dst` and returns the 16 byte tag.
    pub fn seal_detached16(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        plaintext: &[u8],
        ad: &[u8],
    ) -> Tag16 {
        let nonce = checked_nonce(nonce);
        let buffer = append(dst, plaintext);
        self.seal_with(nonce, ad, buffer, State128X2::finalize16)
    }

    /// Appends the ciphertext to `dst` and returns the 32 byte tag.
    pub fn seal_detached32(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        plaintext: &[u8],
        ad: &[u8],
    ) -> Tag32 {
        let nonce = checked_nonce(nonce);
        let buffer = append(dst, plaintext);
        self.seal_with(nonce, ad, buffer, State128X2::finalize32)
    }

    pub fn seal_in_place_detached16(&self, nonce: &[u8], ad: &[u8], buffer: &mut [u8]) -> Tag16 {
        self.seal_with(checked_nonce(nonce), ad, buffer, State128X2::finalize16)
    }

    pub fn seal_in_place_detached32(&self, nonce: &[u8], ad: &[u8], buffer: &mut [u8]) -> Tag32 {
        self.seal_with(checked_nonce(nonce), ad, buffer, State128X2::finalize32)
    }

    /// Opens `ciphertext || tag16` and appends the plaintext to `dst`.
    ///
    /// On failure `dst` is left at its original length.
    pub fn open(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        ad: &[u8],
    ) -> Result<(), Error> {
        checked_nonce(nonce);
        let Some((ciphertext, tag)) = ciphertext.split_last_chunk::<TAG16_SIZE>() else {
            return Err(Error::CiphertextTooSmall);
        };
        self.open_detached16(dst, nonce, ciphertext, ad, tag)
    }

    /// On failure the plaintext written so far is zeroed and `dst` is left at
    /// its original length.
    pub fn open_detached16(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        ad: &[u8],
        tag: &Tag16,
    ) -> Result<(), Error> {
        let nonce = checked_nonce(nonce);
        let start = dst.len();
        let buffer = append(dst, ciphertext);
        let res = self.open_with(nonce, ad, buffer, tag, State128X2::finalize16);
        if res.is_err() {
            dst.truncate(start);
        }
        res
    }

    pub fn open_detached32(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        ad: &[u8],
        tag: &Tag32,
    ) -> Result<(), Error> {
        let nonce = checked_nonce(nonce);
        let start = dst.len();
        let buffer = append(dst, ciphertext);
        let res = self.open_with(nonce, ad, buffer, tag, State128X2::finalize32);
        if res.is_err() {
            dst.truncate(start);
        }
        res
    }

    /// Decrypts `buffer` in place. If the tag does not match, the whole buffer
    /// is zeroed.
    pub fn open_in_place_detached16(
        &self,
        nonce: &[u8],
        ad: &[u8],
        buffer: &mut [u8],
        tag: &Tag16,
    ) -> Result<(), Error> {
        self.open_with(checked_nonce(nonce), ad, buffer, tag, State128X2::finalize16)
    }

    pub fn open_in_place_detached32(
        &self,
        nonce: &[u8],
        ad: &[u8],
        buffer: &mut [u8],
        tag: &Tag32,
    ) -> Result<(), Error> {
        self.open_with(checked_nonce(nonce), ad, buffer, tag, State128X2::finalize32)
    }

    fn seal_with<T>(
        &self,
        nonce: &[u8; NONCE_SIZE],
        ad: &[u8],
        buffer: &mut [u8],
        finalize: impl FnOnce(State128X2, u64, u64) -> T,
    ) -> T {
        let msg_len_bits = bits(buffer.len());
        let ad_len_bits = bits(ad.len());

        // Init(key, nonce)
        let mut state = init(&self.key, nonce);

        duplex::absorb_padded(&mut state, ad);
        duplex::encrypt_in_place(&mut state, buffer);

        // tag = Finalize(|ad|, |msg|)
        finalize(state, ad_len_bits, msg_len_bits)
    }

    fn open_with<const N: usize>(
        &self,
        nonce: &[u8; NONCE_SIZE],
        ad: &[u8],
        buffer: &mut [u8],
        tag: &[u8; N],
        finalize: impl FnOnce(State128X2, u64, u64) -> [u8; N],
    ) -> Result<(), Error> {
        let msg_len_bits = bits(buffer.len());
        let ad_len_bits = bits(ad.len());

        // Init(key, nonce)
        let mut state = init(&self.key, nonce);

        duplex::absorb_padded(&mut state, ad);
        duplex::decrypt_in_place(&mut state, buffer);

        // expected_tag = Finalize(|ad|, |msg|)
        let expected_tag = finalize(state, ad_len_bits, msg_len_bits);

        // if CtEq(tag, expected_tag) is False:
        //     erase msg
        //     erase expected_tag
        //     return "verification failed" error
        // else:
        //     return msg
        verify_tag(expected_tag, tag).inspect_err(|_| buffer.zeroize())
    }
}

impl KeySizeUser for Aegis128X2 {
    type KeySize = U16;
}

impl KeyInit for Aegis128X2 {
    fn new(key: &aead::Key<Self>) -> Self {
        Self { key: (*key).into() }
    }
}

impl AeadCore for Aegis128X2 {
    type NonceSize = U16;
    type TagSize = U16;
    type CiphertextOverhead = U0;
}

impl AeadInPlace for Aegis128X2 {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        try_bits(buffer.len()).ok_or(aead::Error)?;
        try_bits(associated_data.len()).ok_or(aead::Error)?;

        let tag = self.seal_in_place_detached16(nonce, associated_data, buffer);
        Ok(tag.into())
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        try_bits(buffer.len()).ok_or(aead::Error)?;
        try_bits(associated_data.len()).ok_or(aead::Error)?;

        let tag: Tag16 = (*tag).into();
        Ok(self.open_in_place_detached16(nonce, associated_data, buffer, &tag)?)
    }
}
