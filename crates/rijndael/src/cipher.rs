//! AES-128 block encryption and decryption pipelines.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::CipherError;
use crate::key::{expand_key, Aes128Key, RoundKeys, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// A key whose schedule has been expanded once and can encrypt or decrypt
/// any number of blocks.
///
/// The value is read-only after construction, so it can be copied or shared
/// between threads freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` and prepares it for block operations.
    pub fn new(key: &Aes128Key) -> Self {
        Self::from_round_keys(expand_key(key))
    }

    /// Wraps an already expanded schedule.
    pub fn from_round_keys(round_keys: RoundKeys) -> Self {
        Self { round_keys }
    }

    /// The expanded schedule backing this key.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts a single block, leaving `block` untouched.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        let mut state = *block;
        self.encrypt_block_in_place(&mut state);
        state
    }

    /// Decrypts a single block, leaving `block` untouched.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        let mut state = *block;
        self.decrypt_block_in_place(&mut state);
        state
    }

    /// Encrypts `state` in place.
    pub fn encrypt_block_in_place(&self, state: &mut Block) {
        let rks = &self.round_keys;

        add_round_key(state, rks.get(0));

        for round in 1..ROUNDS {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            add_round_key(state, rks.get(round));
        }

        // The last round has no MixColumns.
        sub_bytes(state);
        shift_rows(state);
        add_round_key(state, rks.get(ROUNDS));
    }

    /// Decrypts `state` in place.
    pub fn decrypt_block_in_place(&self, state: &mut Block) {
        let rks = &self.round_keys;

        add_round_key(state, rks.get(ROUNDS));
        inv_shift_rows(state);
        inv_sub_bytes(state);

        for round in (1..ROUNDS).rev() {
            add_round_key(state, rks.get(round));
            inv_mix_columns(state);
            inv_shift_rows(state);
            inv_sub_bytes(state);
        }

        add_round_key(state, rks.get(0));
    }
}

impl From<&Aes128Key> for Aes128 {
    fn from(key: &Aes128Key) -> Self {
        Self::new(key)
    }
}

/// Encrypts a single 16-byte block, expanding `key` for this call only.
///
/// Use [`Aes128`] to reuse one schedule across many blocks.
pub fn encrypt_block(block: &Block, key: &Aes128Key) -> Block {
    Aes128::new(key).encrypt_block(block)
}

/// Decrypts a single 16-byte block, expanding `key` for this call only.
pub fn decrypt_block(block: &Block, key: &Aes128Key) -> Block {
    Aes128::new(key).decrypt_block(block)
}

/// Encrypts a block supplied as a slice.
///
/// # Errors
///
/// Returns [`CipherError::InvalidLength`] if `block` or `key` is not exactly
/// 16 bytes. The check happens before any round work.
pub fn try_encrypt_block(block: &[u8], key: &[u8]) -> Result<Block, CipherError> {
    let (block, key) = checked_inputs(block, key)?;
    Ok(encrypt_block(&block, &key))
}

/// Decrypts a block supplied as a slice.
///
/// # Errors
///
/// Returns [`CipherError::InvalidLength`] if `block` or `key` is not exactly
/// 16 bytes. The check happens before any round work.
pub fn try_decrypt_block(block: &[u8], key: &[u8]) -> Result<Block, CipherError> {
    let (block, key) = checked_inputs(block, key)?;
    Ok(decrypt_block(&block, &key))
}

fn checked_inputs(block: &[u8], key: &[u8]) -> Result<(Block, Aes128Key), CipherError> {
    let key = Aes128Key::try_from(key)?;
    let block = Block::try_from(block)
        .map_err(|_| CipherError::invalid_length("block", BLOCK_SIZE, block.len()))?;
    Ok((block, key))
}
