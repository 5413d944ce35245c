//! AEGIS-128X2: the AEGIS-128L permutation run as two lockstep instances, one per
//! 128-bit half of every 256-bit lane.
//!
//! [`Aegis128X2`] provides authenticated encryption with a 16 byte tag appended to the
//! ciphertext, plus detached 16 and 32 byte tag variants. [`AegisMac128X2`] computes
//! AEGIS-MAC tags.
//!
//! ```
//! use aegis128x2::Aegis128X2;
//!
//! let aead = Aegis128X2::new(&[7; 16]);
//! let nonce = [9; 16];
//!
//! let mut sealed = Vec::new();
//! aead.seal(&mut sealed, &nonce, b"attack at dawn", b"header");
//!
//! let mut opened = Vec::new();
//! aead.open(&mut opened, &nonce, &sealed, b"header").unwrap();
//! assert_eq!(opened, b"attack at dawn");
//! ```
//!
//! Passing a nonce that is not exactly [`NONCE_SIZE`] bytes panics. Authentication
//! failures are reported as [`Error`] and never expose the unauthenticated plaintext.

mod error;
mod high;
mod low;
mod mid;

pub use error::Error;
pub use high::{
    Aegis128X2, AegisMac128X2, KEY_SIZE, Key, NONCE_SIZE, OVERHEAD, TAG16_SIZE, TAG32_SIZE,
    Tag16, Tag32,
};

// *  C0: an AES block built from the following bytes in hexadecimal
// format: { 0x00, 0x01, 0x01, 0x02, 0x03, 0x05, 0x08, 0x0d, 0x15,
// 0x22, 0x37, 0x59, 0x90, 0xe9, 0x79, 0x62 }.
const C0: hybrid_array::Array<u8, hybrid_array::sizes::U16> = hybrid_array::Array([
    0x00, 0x01, 0x01, 0x02, 0x03, 0x05, 0x08, 0x0d, 0x15, 0x22, 0x37, 0x59, 0x90, 0xe9, 0x79, 0x62,
]);

// *  C1: an AES block built from the following bytes in hexadecimal
// format: { 0xdb, 0x3d, 0x18, 0x55, 0x6d, 0xc2, 0x2f, 0xf1, 0x20,
// 0x11, 0x31, 0x42, 0x73, 0xb5, 0x28, 0xdd }.
const C1: hybrid_array::Array<u8, hybrid_array::sizes::U16> = hybrid_array::Array([
    0xdb, 0x3d, 0x18, 0x55, 0x6d, 0xc2, 0x2f, 0xf1, 0x20, 0x11, 0x31, 0x42, 0x73, 0xb5, 0x28, 0xdd,
]);
