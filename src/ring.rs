use crate::Interval;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num::bigint::Sign::{self, *};
use num::{BigInt, One, Signed, ToPrimitive, Zero};
use std::str::FromStr;

/// Integers up to this magnitude convert to `f64` exactly
const EXACT_LIMIT: u64 = 1 << f64::MANTISSA_DIGITS;

/// The operations a number type must provide to serve as numerator and
/// denominator of a [`Quotient`](crate::Quotient)
///
/// The ring need not be closed under division: `/` is whatever truncating
/// or exact division the type offers, and is only used by
/// [`Quotient::normalize`](crate::Quotient::normalize) (to divide out a
/// gcd, which is exact) and by the heuristic in
/// [`Quotient::to_double`](crate::Quotient::to_double).
///
/// Implemented here for [`BigInt`], [`i64`] and [`i32`]. The machine integers
/// are only sound while no intermediate product overflows, which for
/// unreduced quotients is sooner than you might expect.
pub trait Ring:
    Clone
    + fmt::Debug
    + fmt::Display
    + FromStr
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + From<i32>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Greatest common divisor, non-negative
    fn gcd(&self, other: &Self) -> Self;

    /// [`Minus`], [`NoSign`] for zero, or [`Plus`]
    ///
    /// Every sign decision in [`Quotient`](crate::Quotient) multiplies these,
    /// so it must be exact even where [`Ring::to_double`] is not.
    fn sign(&self) -> Sign;

    /// Magnitude, never negative
    fn abs(&self) -> Self;

    /// Nearest `f64`, which may be infinite for large values
    fn to_double(&self) -> f64;

    /// A `(lower, upper)` pair of `f64` guaranteed to bound this value
    fn to_interval(&self) -> (f64, f64);

    /// A mantissa and a power of two exponent, `m * 2^e` approximates the
    /// value with `m` finite even when [`Ring::to_double`] is not
    fn to_scaled_double(&self) -> (f64, i64) {
        (self.to_double(), 0)
    }

    /// Whether this value is usable at all
    ///
    /// Defaults to `true`. A type with NaN-like states should override it.
    fn is_valid(&self) -> bool {
        true
    }

    /// Whether this value is finite
    ///
    /// Defaults to `true`, as it is for every integer type. A type with
    /// infinities should override it.
    fn is_finite(&self) -> bool {
        true
    }

    /// Read a literal from the start of `input`, returning the value and
    /// the unconsumed text
    ///
    /// The default grammar is an optional sign followed by ASCII digits.
    fn scan(input: &str) -> Option<(Self, &str)> {
        let start = usize::from(input.starts_with(|c: char| c == '+' || c == '-'));
        let digits = input[start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            return None;
        }
        let (literal, rest) = input.split_at(start + digits);
        let n = literal.parse().ok()?;
        Some((n, rest))
    }
}

/// `n` multiplied by the unit `sign`
pub(crate) fn signed<NT: Ring>(n: NT, sign: Sign) -> NT {
    match sign {
        Plus => n,
        Minus => -n,
        NoSign => NT::zero(),
    }
}

impl Ring for BigInt {
    fn gcd(&self, other: &Self) -> Self {
        num::Integer::gcd(self, other)
    }

    fn sign(&self) -> Sign {
        BigInt::sign(self)
    }

    fn abs(&self) -> Self {
        Signed::abs(self)
    }

    fn to_double(&self) -> f64 {
        // Rounds to nearest and saturates to infinity
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }

    fn to_interval(&self) -> (f64, f64) {
        let d = Ring::to_double(self);
        if self.bits() <= u64::from(f64::MANTISSA_DIGITS) {
            (d, d)
        } else {
            Interval::around(d).bounds()
        }
    }

    fn to_scaled_double(&self) -> (f64, i64) {
        let shift = self.bits().saturating_sub(64);
        let top = self.magnitude() >> shift;
        let m = top.to_f64().unwrap_or(f64::NAN);
        let exp = i64::try_from(shift).unwrap_or(i64::MAX);
        match BigInt::sign(self) {
            Minus => (-m, exp),
            _ => (m, exp),
        }
    }
}

macro_rules! machine_ring {
    ($t:ty) => {
        impl Ring for $t {
            fn gcd(&self, other: &Self) -> Self {
                num::Integer::gcd(self, other)
            }

            fn sign(&self) -> Sign {
                use std::cmp::Ordering::*;
                match self.cmp(&0) {
                    Less => Minus,
                    Equal => NoSign,
                    Greater => Plus,
                }
            }

            fn abs(&self) -> Self {
                Signed::abs(self)
            }

            fn to_double(&self) -> f64 {
                *self as f64
            }

            fn to_interval(&self) -> (f64, f64) {
                let d = *self as f64;
                if u64::from(self.unsigned_abs()) <= EXACT_LIMIT {
                    (d, d)
                } else {
                    Interval::around(d).bounds()
                }
            }
        }
    };
}

machine_ring!(i64);
machine_ring!(i32);
