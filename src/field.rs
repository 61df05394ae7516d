//! Scalar arithmetic in GF(2^61 - 1).
//!
//! Values are plain `u64`. A fully reduced element lies in `[0, P)`;
//! intermediate results are allowed to drift up to about 2^62 between
//! reductions, which is what makes the Horner loop cheap: adding a 56-bit
//! message block to a partially reduced accumulator can never overflow,
//! so plain `+` is the field addition.
//!
//! Three multiplication routines are provided. All accept operands below
//! 2^62, return the same residue class mod P, and end with one partial
//! reduction so the result is again in `[0, 2^61 + 6]`:
//!
//! - [`mul_wide`]: 64x64->128 via `u128`, for hosts with a wide multiplier.
//! - [`mul_split`]: schoolbook on 32-bit halves, only 32x32->64 products.
//! - [`mul_karatsuba`]: base-2^31 Karatsuba, three small products per
//!   multiply, for hosts where multiplications dominate.

use crate::params::P;

/// Partial reduction: maps any `u64` into `[0, 2^61 + 6]`.
///
/// Uses 2^61 = 1 (mod P): the value is split at bit 61 and the top bits
/// (at most 7 after the shift) are folded back onto the low bits.
#[inline(always)]
pub const fn reduce(x: u64) -> u64 {
    (x & P) + (x >> 61)
}

/// Full reduction: maps any `u64` into `[0, P - 1]`, i.e. `x mod P`.
#[inline(always)]
pub const fn reduce_full(x: u64) -> u64 {
    let x = reduce(x);
    if x >= P { x - P } else { x }
}

/// One conditional subtraction: maps `[0, 2P]` into `[0, P]`.
///
/// Note the closed upper end: table entries are kept in `[0, P]`, where
/// the value P is an alias of zero.
#[inline(always)]
pub(crate) const fn reduce_mini(x: u64) -> u64 {
    if x > P { x - P } else { x }
}

/// `x * y mod P` through a 128-bit product.
///
/// Operands below 2^62; result partially reduced.
#[inline(always)]
pub fn mul_wide(x: u64, y: u64) -> u64 {
    let z = (x as u128) * (y as u128);
    // Fold the 124-bit product by 61-bit limbs: 2^61 = 1, 2^122 = 1.
    let lo = (z as u64) & P;
    let mid = ((z >> 61) as u64) & P;
    let hi = (z >> 122) as u64;
    reduce(lo + mid + hi)
}

/// `x * y mod P` using only 32x32->64 multiplications.
///
/// The four partial products are assembled into the 32-bit limbs
/// `m3:m2:m1:m0` of the full product, then folded with 2^64 = 8 and
/// 2^96 = 2^35 (mod P):
///
/// ```text
/// result = m0 + low29(m1)*2^32 + (m1 >> 29) + 8*m2 + 8*m3*2^32
/// ```
///
/// Operands below 2^62 keep `m3` under 2^28, so every carry fits.
pub fn mul_split(x: u64, y: u64) -> u64 {
    let xl = x as u32;
    let xh = (x >> 32) as u32;
    let yl = y as u32;
    let yh = (y >> 32) as u32;

    let t = (xl as u64) * (yl as u64);
    let m0 = t as u32;
    let mut m1 = (t >> 32) as u32;

    let t = (xh as u64) * (yh as u64);
    let mut m2 = t as u32;
    let mut m3 = (t >> 32) as u32;

    // Cross products: each below 2^62, so their u64 sum cannot overflow.
    let t = (xh as u64) * (yl as u64) + (xl as u64) * (yh as u64);
    let (s, c) = m1.overflowing_add(t as u32);
    m1 = s;
    let th = (t >> 32) as u32 + c as u32;
    let (s, c) = m2.overflowing_add(th);
    m2 = s;
    m3 += c as u32;

    // Fold into [r1:r0].
    let mut r1 = m1 & 0x1fff_ffff;
    let (r0, c) = m0.overflowing_add(m1 >> 29);
    r1 += c as u32;
    let (r0, c) = r0.overflowing_add(m2 << 3);
    r1 += c as u32;
    r1 += m2 >> 29;
    r1 += m3 << 3;

    reduce(((r1 as u64) << 32) | r0 as u64)
}

/// `x * y mod P` as a base-2^31 Karatsuba multiply.
///
/// Splitting at bit 31 makes 2^62 = 2 (mod P) the only high-limb weight,
/// and keeps the three products inside 64 bits. The middle term is
/// re-split at bit 30 so that `mid * 2^31` folds to
/// `(mid >> 30) + low30(mid) * 2^31` without any intermediate carry.
pub fn mul_karatsuba(x: u64, y: u64) -> u64 {
    const LOW31: u64 = (1 << 31) - 1;
    const LOW30: u64 = (1 << 30) - 1;

    let xl = x & LOW31;
    let xh = x >> 31;
    let yl = y & LOW31;
    let yh = y >> 31;

    let lo = xl * yl;
    let hi = xh * yh;
    // (xl + xh) and (yl + yh) fit in 32 bits, their product in 64.
    let mid = (xl + xh) * (yl + yh) - lo - hi;

    // x*y = lo + mid*2^31 + hi*2^62, with 2^61 = 1 and 2^62 = 2.
    let folded = lo + (mid >> 30) + ((mid & LOW30) << 31) + (hi << 1);
    reduce(folded)
}
