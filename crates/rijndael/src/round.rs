//! AES round transformations and their inverses.
//!
//! Every step works in place on a column-major [`Block`]: byte `column * 4 + row`.

use crate::block::{xor_in_place, Block};
use crate::gf;
use crate::sbox::{inv_sbox, sbox};

/// MixColumns matrix; each row is the previous one rotated right.
const MIX: [[u8; 4]; 4] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];

/// InvMixColumns matrix, the inverse of [`MIX`] over GF(2^8).
const INV_MIX: [[u8; 4]; 4] = [
    [14, 11, 13, 9],
    [9, 14, 11, 13],
    [13, 9, 14, 11],
    [11, 13, 9, 14],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[col * 4 + row] = src[((col + row) % 4) * 4 + row];
        }
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[((col + row) % 4) * 4 + row] = src[col * 4 + row];
        }
    }
}

fn multiply_columns(state: &mut Block, matrix: &[[u8; 4]; 4]) {
    for column in state.chunks_exact_mut(4) {
        let input = [column[0], column[1], column[2], column[3]];
        for (out, coeffs) in column.iter_mut().zip(matrix.iter()) {
            *out = coeffs
                .iter()
                .zip(input.iter())
                .fold(0, |acc, (&c, &b)| acc ^ gf::mul(b, c));
        }
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    multiply_columns(state, &MIX);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    multiply_columns(state, &INV_MIX);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
