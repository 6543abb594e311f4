//! Error types for the slice-based entry points.

use thiserror::Error;

/// Errors produced when caller-supplied buffers do not have the exact size
/// the cipher requires.
///
/// The array-typed API cannot fail; only the slice entry points
/// ([`crate::try_encrypt_block`], [`crate::try_decrypt_block`],
/// `TryFrom<&[u8]>` for [`crate::Aes128Key`] and
/// [`crate::RoundKeys::from_bytes`]) return this error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CipherError {
    /// A buffer had the wrong length; nothing was read from the tables.
    #[error("invalid {what} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Which buffer was rejected (`"key"`, `"block"` or `"key schedule"`).
        what: &'static str,
        /// Required length in bytes.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

impl CipherError {
    pub(crate) fn invalid_length(what: &'static str, expected: usize, actual: usize) -> Self {
        tracing::debug!(what, expected, actual, "rejecting buffer of invalid length");
        Self::InvalidLength {
            what,
            expected,
            actual,
        }
    }
}
