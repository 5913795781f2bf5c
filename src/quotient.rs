use crate::{Problem, Ring};
use num::bigint::Sign;
use num::{BigInt, One, Zero};

mod compare;
mod convert;
mod format;

pub use compare::quotient_cmp;

/// Ratio of two values of a [`Ring`]
///
/// The numerator and denominator are kept exactly as arithmetic produced
/// them. Nothing is reduced automatically and the denominator may be
/// negative, so `1/-2`, `-1/2` and `-3/6` are different representations of
/// the same value, and compare equal.
///
/// Because no operator reduces its result, every addition or multiplication
/// of two quotients multiplies the denominators and the operands grow with
/// each step of a long computation. Callers that chain many operations
/// should call [`Quotient::normalize`] from time to time to keep them small.
///
/// # Examples
///
/// Construction and exact arithmetic
/// ```
/// use num::BigInt;
/// use quotient::Quotient;
/// let third = Quotient::new(BigInt::from(1), BigInt::from(3)).unwrap();
/// let sum = third.clone() + &third + third;
/// assert_eq!(sum.denominator(), &BigInt::from(27));
/// assert_eq!(sum, Quotient::from_int(1));
/// ```
///
/// Denominators of either sign
/// ```
/// use quotient::Quotient;
/// let a = Quotient::new(1_i64, -2).unwrap();
/// let b = Quotient::new(-1_i64, 2).unwrap();
/// assert_eq!(a, b);
/// assert!(a < Quotient::from_int(0));
/// ```
///
/// Explicit reduction
/// ```
/// use quotient::Quotient;
/// let mut q = Quotient::new(12_i64, -18).unwrap();
/// q.normalize();
/// assert_eq!((q.numerator(), q.denominator()), (&2, &-3));
/// ```
#[derive(Clone, Debug)]
pub struct Quotient<NT> {
    num: NT,
    den: NT,
}

// Move a field out, leaving zero behind until it is reassigned
fn take<NT: Ring>(n: &mut NT) -> NT {
    std::mem::replace(n, NT::zero())
}

impl<NT: Ring> Quotient<NT> {
    /// The Quotient `num / den`, kept exactly as given
    pub fn new(num: NT, den: NT) -> Result<Self, Problem> {
        if den.is_zero() {
            return Err(Problem::ZeroDenominator);
        }
        Ok(Self { num, den })
    }

    /// The Quotient `n / 1` for a machine integer `n`
    pub fn from_int(n: i32) -> Self {
        Self::from(NT::from(n))
    }

    /// The numerator as currently stored, not necessarily in lowest terms
    pub fn numerator(&self) -> &NT {
        &self.num
    }

    /// The denominator as currently stored, possibly negative
    pub fn denominator(&self) -> &NT {
        &self.den
    }

    /// Numerator and denominator, by value
    pub fn into_parts(self) -> (NT, NT) {
        (self.num, self.den)
    }

    /// Reduce toward lowest terms
    ///
    /// Quotients equal to one or minus one become exactly `1/1` or `-1/1`
    /// without computing a gcd. Otherwise both parts are divided by their
    /// gcd, and the sign of the denominator is left as it was.
    ///
    /// # Example
    ///
    /// ```
    /// use quotient::Quotient;
    /// let mut q = Quotient::new(-7_i64, 7).unwrap();
    /// q.normalize();
    /// assert_eq!((q.numerator(), q.denominator()), (&-1, &1));
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        if self.num == self.den {
            self.num = NT::one();
            self.den = NT::one();
            return self;
        }
        if -self.num.clone() == self.den {
            self.num = -NT::one();
            self.den = NT::one();
            return self;
        }
        let divisor = self.num.gcd(&self.den);
        if !divisor.is_one() {
            self.num = take(&mut self.num) / divisor.clone();
            self.den = take(&mut self.den) / divisor;
        }
        self
    }

    /// This Quotient after [`Quotient::normalize`]
    pub fn reduced(mut self) -> Self {
        self.normalize();
        self
    }

    /// The [`Sign`] of the value, whatever the signs of its parts
    pub fn sign(&self) -> Sign {
        self.num.sign() * self.den.sign()
    }

    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den.abs(),
        }
    }

    /// Truncating ring division of numerator by denominator
    ///
    /// For integer rings this is the integer part, rounded toward zero.
    ///
    /// ```
    /// use quotient::Quotient;
    /// let q = Quotient::new(-22_i64, 7).unwrap();
    /// assert_eq!(q.truncate(), -3);
    /// ```
    pub fn truncate(&self) -> NT {
        self.num.clone() / self.den.clone()
    }

    /// One divided by this Quotient
    pub fn checked_recip(&self) -> Result<Self, Problem> {
        if self.num.is_zero() {
            return Err(Problem::DivisionByZero);
        }
        Ok(Self {
            num: self.den.clone(),
            den: self.num.clone(),
        })
    }

    /// Division which reports a zero divisor rather than panicking
    pub fn checked_div(&self, other: &Self) -> Result<Self, Problem> {
        if other.num.is_zero() {
            return Err(Problem::DivisionByZero);
        }
        Ok(self / other)
    }

    /// Division by a ring value which reports a zero divisor rather than
    /// panicking
    pub fn checked_div_ring(&self, other: &NT) -> Result<Self, Problem> {
        if other.is_zero() {
            return Err(Problem::DivisionByZero);
        }
        Ok(self.clone() / other.clone())
    }
}

impl<NT: Ring> Default for Quotient<NT> {
    fn default() -> Self {
        Self {
            num: NT::zero(),
            den: NT::one(),
        }
    }
}

impl<NT: Ring> From<NT> for Quotient<NT> {
    fn from(num: NT) -> Self {
        Self {
            num,
            den: NT::one(),
        }
    }
}

impl<NT: Ring> Zero for Quotient<NT> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl<NT: Ring> One for Quotient<NT> {
    fn one() -> Self {
        Self::from(NT::one())
    }
}

use core::ops::*;

impl<NT: Ring> AddAssign<&Quotient<NT>> for Quotient<NT> {
    fn add_assign(&mut self, other: &Self) {
        let a = take(&mut self.num);
        let b = take(&mut self.den);
        self.num = a * other.den.clone() + other.num.clone() * b.clone();
        self.den = b * other.den.clone();
    }
}

impl<NT: Ring> SubAssign<&Quotient<NT>> for Quotient<NT> {
    fn sub_assign(&mut self, other: &Self) {
        let a = take(&mut self.num);
        let b = take(&mut self.den);
        self.num = a * other.den.clone() - other.num.clone() * b.clone();
        self.den = b * other.den.clone();
    }
}

impl<NT: Ring> MulAssign<&Quotient<NT>> for Quotient<NT> {
    fn mul_assign(&mut self, other: &Self) {
        self.num = take(&mut self.num) * other.num.clone();
        self.den = take(&mut self.den) * other.den.clone();
    }
}

impl<NT: Ring> DivAssign<&Quotient<NT>> for Quotient<NT> {
    fn div_assign(&mut self, other: &Self) {
        assert!(!other.num.is_zero(), "attempt to divide a Quotient by zero");
        self.num = take(&mut self.num) * other.den.clone();
        self.den = take(&mut self.den) * other.num.clone();
    }
}

impl<NT: Ring> AddAssign<NT> for Quotient<NT> {
    fn add_assign(&mut self, other: NT) {
        self.num = take(&mut self.num) + other * self.den.clone();
    }
}

impl<NT: Ring> SubAssign<NT> for Quotient<NT> {
    fn sub_assign(&mut self, other: NT) {
        self.num = take(&mut self.num) - other * self.den.clone();
    }
}

impl<NT: Ring> MulAssign<NT> for Quotient<NT> {
    fn mul_assign(&mut self, other: NT) {
        self.num = take(&mut self.num) * other;
    }
}

impl<NT: Ring> DivAssign<NT> for Quotient<NT> {
    fn div_assign(&mut self, other: NT) {
        assert!(!other.is_zero(), "attempt to divide a Quotient by zero");
        self.den = take(&mut self.den) * other;
    }
}

// Every other form of each operator is built from the two above
macro_rules! forward_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<NT: Ring> $OpAssign for Quotient<NT> {
            fn $op_assign(&mut self, other: Self) {
                self.$op_assign(&other);
            }
        }

        impl<NT: Ring> $Op for Quotient<NT> {
            type Output = Self;

            fn $op(mut self, other: Self) -> Self {
                self.$op_assign(&other);
                self
            }
        }

        impl<NT: Ring> $Op<&Quotient<NT>> for Quotient<NT> {
            type Output = Self;

            fn $op(mut self, other: &Self) -> Self {
                self.$op_assign(other);
                self
            }
        }

        impl<NT: Ring> $Op<&Quotient<NT>> for &Quotient<NT> {
            type Output = Quotient<NT>;

            fn $op(self, other: &Quotient<NT>) -> Quotient<NT> {
                let mut answer = self.clone();
                answer.$op_assign(other);
                answer
            }
        }

        impl<NT: Ring> $Op<NT> for Quotient<NT> {
            type Output = Self;

            fn $op(mut self, other: NT) -> Self {
                self.$op_assign(other);
                self
            }
        }

        impl<NT: Ring> $OpAssign<&NT> for Quotient<NT> {
            fn $op_assign(&mut self, other: &NT) {
                self.$op_assign(other.clone());
            }
        }

        impl<NT: Ring> $Op<&NT> for Quotient<NT> {
            type Output = Self;

            fn $op(mut self, other: &NT) -> Self {
                self.$op_assign(other.clone());
                self
            }
        }
    };
}

forward_op!(Add, add, AddAssign, add_assign);
forward_op!(Sub, sub, SubAssign, sub_assign);
forward_op!(Mul, mul, MulAssign, mul_assign);
forward_op!(Div, div, DivAssign, div_assign);

impl<NT: Ring> Quotient<NT> {
    // n - self
    fn subtracted_from(self, n: NT) -> Self {
        Self {
            num: n * self.den.clone() - self.num,
            den: self.den,
        }
    }

    // n / self
    fn dividing(self, n: NT) -> Self {
        assert!(!self.num.is_zero(), "attempt to divide a Quotient by zero");
        Self {
            num: n * self.den,
            den: self.num,
        }
    }
}

// A ring value on the left. Coherence rules out a blanket impl over every
// `NT`, so each ring provided here gets its own.
macro_rules! ring_on_left {
    ($t:ty) => {
        impl Add<Quotient<$t>> for $t {
            type Output = Quotient<$t>;

            fn add(self, other: Quotient<$t>) -> Quotient<$t> {
                other + self
            }
        }

        impl Sub<Quotient<$t>> for $t {
            type Output = Quotient<$t>;

            fn sub(self, other: Quotient<$t>) -> Quotient<$t> {
                other.subtracted_from(self)
            }
        }

        impl Mul<Quotient<$t>> for $t {
            type Output = Quotient<$t>;

            fn mul(self, other: Quotient<$t>) -> Quotient<$t> {
                other * self
            }
        }

        impl Div<Quotient<$t>> for $t {
            type Output = Quotient<$t>;

            fn div(self, other: Quotient<$t>) -> Quotient<$t> {
                other.dividing(self)
            }
        }

        impl PartialEq<Quotient<$t>> for $t {
            fn eq(&self, other: &Quotient<$t>) -> bool {
                other == self
            }
        }

        impl PartialOrd<Quotient<$t>> for $t {
            fn partial_cmp(&self, other: &Quotient<$t>) -> Option<core::cmp::Ordering> {
                Some(quotient_cmp(&Quotient::from(self.clone()), other))
            }
        }
    };
}

ring_on_left!(BigInt);
ring_on_left!(i64);
ring_on_left!(i32);

impl<NT: Ring> Neg for Quotient<NT> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            num: -self.num,
            ..self
        }
    }
}

impl<NT: Ring> Neg for &Quotient<NT> {
    type Output = Quotient<NT>;

    fn neg(self) -> Quotient<NT> {
        Quotient {
            num: -self.num.clone(),
            den: self.den.clone(),
        }
    }
}

impl<NT: Ring> PartialEq for Quotient<NT> {
    fn eq(&self, other: &Self) -> bool {
        self.num.clone() * other.den.clone() == other.num.clone() * self.den.clone()
    }
}

impl<NT: Ring> PartialEq<NT> for Quotient<NT> {
    fn eq(&self, other: &NT) -> bool {
        self.den.clone() * other.clone() == self.num
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Quotient<i64> {
        Quotient::new(n, d).unwrap()
    }

    fn parts(q: &Quotient<i64>) -> (i64, i64) {
        (*q.numerator(), *q.denominator())
    }

    #[test]
    fn construct() {
        assert_eq!(parts(&Quotient::default()), (0, 1));
        assert_eq!(parts(&Quotient::from(5)), (5, 1));
        assert_eq!(parts(&Quotient::from_int(-5)), (-5, 1));
        assert_eq!(parts(&q(6, -4)), (6, -4));
        let big = Quotient::new(BigInt::from(10), BigInt::from(-15)).unwrap();
        assert_eq!(big.clone().into_parts(), (BigInt::from(10), BigInt::from(-15)));
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(Quotient::new(1_i64, 0).unwrap_err(), Problem::ZeroDenominator);
        let err = Quotient::new(BigInt::from(3), BigInt::zero()).unwrap_err();
        assert_eq!(err, Problem::ZeroDenominator);
    }

    #[test]
    fn sign_robust_equality() {
        assert_eq!(q(1, -2), q(-1, 2));
        assert_ne!(q(1, -2), q(1, 2));
        assert_ne!(q(-1, 2), q(1, 2));
        assert_eq!(q(-3, -6), q(1, 2));
        assert_eq!(q(0, -7), q(0, 3));
        assert_eq!(q(-8, -4), 2);
        assert_ne!(q(8, -4), 2);
    }

    #[test]
    fn normalize_special_cases() {
        assert_eq!(parts(q(9, 9).normalize()), (1, 1));
        assert_eq!(parts(q(-9, -9).normalize()), (1, 1));
        assert_eq!(parts(q(9, -9).normalize()), (-1, 1));
        assert_eq!(parts(q(-9, 9).normalize()), (-1, 1));
    }

    #[test]
    fn normalize_keeps_denominator_sign() {
        assert_eq!(parts(q(6, -4).normalize()), (3, -2));
        assert_eq!(parts(q(-6, -4).normalize()), (-3, -2));
        assert_eq!(parts(q(5, 3).normalize()), (5, 3));
        assert_eq!(parts(q(0, -8).normalize()), (0, -1));
        assert_eq!(parts(&q(40, 60).reduced()), (2, 3));
    }

    #[test]
    fn unreduced_arithmetic() {
        let half = q(1, 2);
        let third = q(1, 3);
        assert_eq!(parts(&(half.clone() + third.clone())), (5, 6));
        assert_eq!(parts(&(half.clone() - third.clone())), (1, 6));
        assert_eq!(parts(&(half.clone() * half.clone())), (1, 4));
        assert_eq!(parts(&(half.clone() / third.clone())), (3, 2));
        assert_eq!(parts(&(half.clone() + half.clone())), (4, 4));
        assert_eq!(parts(&-half.clone()), (-1, 2));
        assert_eq!(parts(&-&third), (-1, 3));
        assert_eq!(parts(&(&half + &third)), (5, 6));
        assert_eq!(parts(&(half - &third)), (1, 6));
    }

    #[test]
    fn ring_arithmetic() {
        let q = q(3, -4);
        assert_eq!(parts(&(q.clone() + 2)), (-5, -4));
        assert_eq!(parts(&(q.clone() - 2)), (11, -4));
        assert_eq!(parts(&(q.clone() * 2)), (6, -4));
        assert_eq!(parts(&(q / 2)), (3, -8));
    }

    #[test]
    fn compound() {
        let mut acc = Quotient::<BigInt>::zero();
        for d in 1..=6 {
            acc += Quotient::new(BigInt::one(), BigInt::from(d)).unwrap();
        }
        assert_eq!(acc, Quotient::new(BigInt::from(49), BigInt::from(20)).unwrap());
        assert_eq!(acc.denominator(), &BigInt::from(720));
        acc -= BigInt::from(2);
        acc *= BigInt::from(20);
        assert_eq!(acc, BigInt::from(9));
        acc /= Quotient::from_int(3);
        assert_eq!(acc, BigInt::from(3));
        acc /= BigInt::from(-3);
        assert!(acc == BigInt::from(-1));
        assert!(acc.clone().reduced().denominator().is_one());
    }

    #[test]
    fn sign_and_abs() {
        assert_eq!(q(3, -4).sign(), Sign::Minus);
        assert_eq!(q(-3, -4).sign(), Sign::Plus);
        assert_eq!(q(0, -4).sign(), Sign::NoSign);
        assert_eq!(parts(&q(-3, -4).abs()), (3, 4));
        assert!(q(0, 5).is_zero());
        assert!(Quotient::<i64>::one().is_one());
    }

    #[test]
    fn truncation() {
        assert_eq!(q(22, 7).truncate(), 3);
        assert_eq!(q(22, -7).truncate(), -3);
        assert_eq!(q(6, 7).truncate(), 0);
    }

    #[test]
    fn divide_by_zero() {
        let zero = q(0, -5);
        assert_eq!(q(1, 2).checked_div(&zero).unwrap_err(), Problem::DivisionByZero);
        assert_eq!(q(1, 2).checked_div_ring(&0).unwrap_err(), Problem::DivisionByZero);
        assert_eq!(zero.checked_recip().unwrap_err(), Problem::DivisionByZero);
        assert_eq!(parts(&q(1, 2).checked_div(&q(-3, 4)).unwrap()), (4, -6));
        assert_eq!(parts(&q(1, 2).checked_div_ring(&5).unwrap()), (1, 10));
        assert_eq!(parts(&q(-2, 3).checked_recip().unwrap()), (3, -2));
    }

    #[test]
    #[should_panic(expected = "divide a Quotient by zero")]
    fn divide_operator_panics() {
        let _ = q(1, 2) / q(0, 3);
    }

    #[test]
    fn ring_on_the_left() {
        let x = q(1, -3);
        assert_eq!(parts(&(2_i64 + x.clone())), (-5, -3));
        assert_eq!(parts(&(2_i64 - x.clone())), (-7, -3));
        assert_eq!(parts(&(2_i64 * x.clone())), (2, -3));
        assert_eq!(parts(&(2_i64 / x.clone())), (-6, 1));
        assert_eq!(2_i64 - x.clone(), x.clone() * -1 + 2);
        assert!(-1_i64 < x);
        assert!(0_i64 > x);
        assert!(0_i64 >= x);
        assert!(-1_i64 <= x);
        assert!(4_i64 == q(-8, -2));
        assert!(4_i64 != q(8, -2));

        let third = Quotient::new(BigInt::one(), BigInt::from(3)).unwrap();
        let nine = BigInt::from(3) / third.clone();
        assert_eq!(nine, BigInt::from(9));
        assert_eq!(BigInt::from(1) - third.clone(), Quotient::new(BigInt::from(2), BigInt::from(3)).unwrap());
        assert!(BigInt::zero() < third);
        assert_eq!(parts32(&(5_i32 - Quotient::new(1_i32, 2).unwrap())), (9, 2));
    }

    fn parts32(q: &Quotient<i32>) -> (i32, i32) {
        (*q.numerator(), *q.denominator())
    }

    #[test]
    fn borrowed_ring_operand() {
        let two = 2_i64;
        let mut acc = q(1, 2);
        acc += &two;
        assert_eq!(parts(&acc), (5, 2));
        acc -= &two;
        acc *= &two;
        assert_eq!(parts(&acc), (2, 2));
        acc /= &two;
        assert_eq!(parts(&acc), (2, 4));
        assert_eq!(parts(&(q(1, 3) + &two)), (7, 3));
        assert_eq!(parts(&(q(1, 3) - &two)), (-5, 3));
        assert_eq!(parts(&(q(1, 3) * &two)), (2, 3));
        assert_eq!(parts(&(q(1, 3) / &two)), (1, 6));
        let big = BigInt::from(4);
        let r = Quotient::new(BigInt::one(), BigInt::from(2)).unwrap() * &big;
        assert_eq!(r, big / BigInt::from(2));
    }

    #[test]
    #[should_panic(expected = "divide a Quotient by zero")]
    fn ring_divided_by_zero_panics() {
        let _ = 1_i64 / q(0, 7);
    }

    #[test]
    #[should_panic(expected = "divide a Quotient by zero")]
    fn divide_by_ring_zero_panics() {
        let mut half = q(1, 2);
        half /= 0;
    }
}
