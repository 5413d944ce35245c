/// A recoverable failure from opening a sealed message or verifying a MAC.
///
/// Misuse such as a nonce of the wrong length is not reported here; it panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input is shorter than the tag it should end with.
    #[error("ciphertext too small")]
    CiphertextTooSmall,
    /// Authentication failed. Any plaintext produced has already been zeroed.
    #[error("tag mismatch")]
    TagMismatch,
}

impl From<Error> for aead::Error {
    fn from(_: Error) -> Self {
        aead::Error
    }
}
