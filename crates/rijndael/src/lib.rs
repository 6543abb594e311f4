//! AES-128 block cipher following FIPS-197.
//!
//! The crate provides:
//! - GF(2^8) arithmetic and the standard substitution tables.
//! - The AES-128 key schedule (11 round keys, 176 bytes).
//! - Single-block encryption and decryption, either with a fresh schedule per
//!   call ([`encrypt_block`], [`decrypt_block`]) or with a prepared key
//!   ([`Aes128`]) that expands the schedule once.
//! - The individual round steps, for step-level testing.
//!
//! Modes of operation, padding and 192/256-bit keys are out of scope. The
//! implementation uses table lookups and aims for clarity and exactness rather
//! than constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
pub mod sbox;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt_block, encrypt_block, try_decrypt_block, try_encrypt_block, Aes128,
};
pub use crate::error::CipherError;
pub use crate::key::{expand_key, Aes128Key, RoundKeys, KEY_SIZE, ROUNDS, SCHEDULE_SIZE};
