//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.
//!
//! Addition is XOR. Multiplication by a constant is built from repeated
//! doubling ([`xtime`]) and XOR, so no lookup tables are needed here.

/// Low byte of the reduction polynomial (0x11B).
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by 2 (`x`) in GF(2^8).
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies `byte` by `factor` in GF(2^8).
///
/// Walks the bits of `factor`, accumulating `byte · 2^i` for every set bit.
/// For the MixColumns coefficients this is exactly the xtime/XOR expansion,
/// e.g. `mul(x, 14) == xtime(xtime(xtime(x))) ^ xtime(xtime(x)) ^ xtime(x)`.
#[inline]
pub const fn mul(byte: u8, factor: u8) -> u8 {
    let mut acc = 0u8;
    let mut power = byte;
    let mut bits = factor;
    while bits != 0 {
        if bits & 1 != 0 {
            acc ^= power;
        }
        power = xtime(power);
        bits >>= 1;
    }
    acc
}
