//! Key types and the AES-128 key schedule.

use core::fmt;

use crate::block::{Block, BLOCK_SIZE};
use crate::error::CipherError;
use crate::sbox::{sbox, RCON};

/// Size of an AES-128 cipher key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of rounds for AES-128.
pub const ROUNDS: usize = 10;

/// Size of the expanded key schedule in bytes (11 round keys).
pub const SCHEDULE_SIZE: usize = BLOCK_SIZE * (ROUNDS + 1);

const KEY_WORDS: usize = KEY_SIZE / 4;
const SCHEDULE_WORDS: usize = SCHEDULE_SIZE / 4;

/// AES-128 key wrapper.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Aes128Key([u8; KEY_SIZE]);

impl Aes128Key {
    /// Raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = CipherError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; KEY_SIZE]>::try_from(bytes)
            .map(Self)
            .map_err(|_| CipherError::invalid_length("key", KEY_SIZE, bytes.len()))
    }
}

impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aes128Key([REDACTED])")
    }
}

/// Expanded round keys for AES-128.
///
/// Round key 0 is the cipher key itself; round keys 1..=10 are derived by
/// [`expand_key`]. Each round key uses the same column-major layout as a
/// [`Block`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RoundKeys([Block; ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    ///
    /// # Panics
    ///
    /// Panics if `round > 10`.
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Returns the schedule as 176 contiguous bytes, round key 0 first.
    pub fn to_bytes(&self) -> [u8; SCHEDULE_SIZE] {
        let mut out = [0u8; SCHEDULE_SIZE];
        for (dst, round_key) in out.chunks_exact_mut(BLOCK_SIZE).zip(self.0.iter()) {
            dst.copy_from_slice(round_key);
        }
        out
    }

    /// Rebuilds a schedule from its 176-byte contiguous form.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidLength`] unless `bytes` is exactly
    /// [`SCHEDULE_SIZE`] bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CipherError> {
        if bytes.len() != SCHEDULE_SIZE {
            return Err(CipherError::invalid_length(
                "key schedule",
                SCHEDULE_SIZE,
                bytes.len(),
            ));
        }
        let mut round_keys = [[0u8; BLOCK_SIZE]; ROUNDS + 1];
        for (round_key, src) in round_keys.iter_mut().zip(bytes.chunks_exact(BLOCK_SIZE)) {
            round_key.copy_from_slice(src);
        }
        Ok(Self(round_keys))
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundKeys([REDACTED; {}])", ROUNDS + 1)
    }
}

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a 128-bit key into 11 round keys.
///
/// Words 0..4 are the key; every later word `w[i]` is `w[i - 4] ^ temp`
/// where `temp = w[i - 1]`, passed through RotWord, SubWord and the round
/// constant whenever `i` starts a new round key.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in KEY_WORDS..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % KEY_WORDS == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / KEY_WORDS]) << 24);
        }
        w[i] = w[i - KEY_WORDS] ^ temp;
    }

    let mut round_keys = [[0u8; BLOCK_SIZE]; ROUNDS + 1];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
    }

    tracing::trace!(round_keys = ROUNDS + 1, "expanded AES-128 key schedule");
    RoundKeys(round_keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn key_from_hex(s: &str) -> Aes128Key {
        let bytes = hex::decode(s).expect("valid hex");
        Aes128Key::try_from(bytes.as_slice()).expect("16-byte key")
    }

    #[test]
    fn expansion_matches_fips197_appendix_a1() {
        let rks = expand_key(&key_from_hex("2b7e151628aed2a6abf7158809cf4f3c"));
        assert_eq!(hex::encode(rks.get(0)), "2b7e151628aed2a6abf7158809cf4f3c");
        assert_eq!(hex::encode(rks.get(1)), "a0fafe1788542cb123a339392a6c7605");
        assert_eq!(hex::encode(rks.get(2)), "f2c295f27a96b9435935807a7359f67f");
        assert_eq!(hex::encode(rks.get(10)), "d014f9a8c9ee2589e13f0cc8b6630ca6");
    }

    #[test]
    fn expansion_matches_fips197_appendix_c1() {
        let rks = expand_key(&key_from_hex("000102030405060708090a0b0c0d0e0f"));
        assert_eq!(hex::encode(rks.get(1)), "d6aa74fdd2af72fadaa678f1d6ab76fe");
        assert_eq!(hex::encode(rks.get(10)), "13111d7fe3944a17f307a78b4d2b30c5");
    }

    #[test]
    fn expansion_is_deterministic_and_starts_with_key() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for _ in 0..50 {
            let mut key_bytes = [0u8; KEY_SIZE];
            rng.fill_bytes(&mut key_bytes);
            let key = Aes128Key::from(key_bytes);
            let first = expand_key(&key);
            let second = expand_key(&key);
            assert_eq!(first.to_bytes(), second.to_bytes());
            assert_eq!(&first.to_bytes()[..KEY_SIZE], &key_bytes);
        }
    }

    #[test]
    fn contiguous_schedule_matches_round_keys() {
        let rks = expand_key(&Aes128Key::from([0x42u8; KEY_SIZE]));
        let bytes = rks.to_bytes();
        assert_eq!(bytes.len(), SCHEDULE_SIZE);
        for round in 0..=ROUNDS {
            let offset = round * BLOCK_SIZE;
            assert_eq!(&bytes[offset..offset + BLOCK_SIZE], rks.get(round));
        }
        assert_eq!(RoundKeys::from_bytes(&bytes), Ok(rks));
    }

    #[test]
    fn from_bytes_rejects_wrong_length() {
        let err = RoundKeys::from_bytes(&[0u8; SCHEDULE_SIZE - 1]).unwrap_err();
        assert_eq!(
            err,
            CipherError::InvalidLength {
                what: "key schedule",
                expected: SCHEDULE_SIZE,
                actual: SCHEDULE_SIZE - 1,
            }
        );
    }

    #[test]
    fn key_from_slice_rejects_wrong_length() {
        for len in [0usize, 15, 17, 24, 32] {
            let bytes = vec![0u8; len];
            let err = Aes128Key::try_from(bytes.as_slice()).unwrap_err();
            assert_eq!(
                err,
                CipherError::InvalidLength {
                    what: "key",
                    expected: KEY_SIZE,
                    actual: len,
                }
            );
        }
    }

    #[test]
    fn debug_output_hides_key_material() {
        let key = Aes128Key::from([0xabu8; KEY_SIZE]);
        let rks = expand_key(&key);
        assert_eq!(format!("{key:?}"), "Aes128Key([REDACTED])");
        assert!(!format!("{rks:?}").contains("171"));
        assert!(format!("{rks:?}").contains("REDACTED"));
    }
}
