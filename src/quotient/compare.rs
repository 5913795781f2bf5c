use crate::ring::{signed, Ring};
use crate::Quotient;
use core::cmp::Ordering::{self, *};
use num::bigint::Sign::NoSign;

/// Three-way comparison of two quotients by value
///
/// Makes no assumption about the sign of either denominator. The true sign
/// of each value is the product of the signs of its parts, which settles
/// every case except two nonzero values of the same sign. Those are
/// compared by cross-multiplication, after multiplying both sides by the
/// product of the denominator signs so that the inequality still points the
/// right way.
///
/// # Example
///
/// ```
/// use quotient::{quotient_cmp, Quotient};
/// use std::cmp::Ordering;
/// let a = Quotient::new(1_i64, -3).unwrap();
/// let b = Quotient::new(-1_i64, 2).unwrap();
/// assert_eq!(quotient_cmp(&a, &b), Ordering::Greater);
/// ```
pub fn quotient_cmp<NT: Ring>(x: &Quotient<NT>, y: &Quotient<NT>) -> Ordering {
    let xsign = x.num.sign() * x.den.sign();
    let ysign = y.num.sign() * y.den.sign();
    if xsign == NoSign {
        return NoSign.cmp(&ysign);
    }
    if ysign == NoSign {
        return xsign.cmp(&NoSign);
    }
    if xsign != ysign {
        return xsign.cmp(&ysign);
    }
    let msign = x.den.sign() * y.den.sign();
    let left = signed(x.num.clone() * y.den.clone(), msign);
    let right = signed(y.num.clone() * x.den.clone(), msign);
    if left < right {
        Less
    } else if right < left {
        Greater
    } else {
        Equal
    }
}

impl<NT: Ring> PartialOrd for Quotient<NT> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(quotient_cmp(self, other))
    }
}

impl<NT: Ring + Eq> Eq for Quotient<NT> {}

impl<NT: Ring + Eq> Ord for Quotient<NT> {
    fn cmp(&self, other: &Self) -> Ordering {
        quotient_cmp(self, other)
    }
}

impl<NT: Ring> PartialOrd<NT> for Quotient<NT> {
    fn partial_cmp(&self, other: &NT) -> Option<Ordering> {
        Some(quotient_cmp(self, &Quotient::from(other.clone())))
    }
}
