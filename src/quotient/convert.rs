use crate::{Interval, Quotient, Ring};

/// Past this magnitude consecutive integers are not distinct as `f64`
const INTEGER_LIMIT: f64 = (1_u64 << f64::MANTISSA_DIGITS) as f64;

impl<NT: Ring> Quotient<NT> {
    /// An `f64` approximation of the value
    ///
    /// Numerator and denominator are converted separately and divided,
    /// which is accurate to a couple of ulps whenever both conversions are
    /// finite. If either part is too large for an `f64` but the value
    /// itself is not, the truncated quotient is used when it is already
    /// beyond integer precision, large denominators are handled through the
    /// reciprocal, and otherwise the ring's scaled mantissas are divided.
    /// This is not correctly rounded.
    ///
    /// # Example
    ///
    /// ```
    /// use quotient::Quotient;
    /// let third = Quotient::new(1_i64, 3).unwrap();
    /// assert_eq!(third.to_double(), 1.0 / 3.0);
    /// ```
    pub fn to_double(&self) -> f64 {
        if self.num.is_zero() {
            return 0.0;
        }
        let nd = self.num.to_double();
        if self.den.is_one() {
            return nd;
        }
        let dd = self.den.to_double();
        if nd.is_finite() && dd.is_finite() {
            return nd / dd;
        }

        let num = self.num.abs();
        let den = self.den.abs();
        if num > den {
            let whole = self.truncate().to_double();
            if whole.abs() >= INTEGER_LIMIT {
                return whole;
            }
        }
        if num < den {
            let recip = Self {
                num: self.den.clone(),
                den: self.num.clone(),
            };
            return 1.0 / recip.to_double();
        }
        self.scaled_ratio()
    }

    // Divide the mantissas and put the exponents back afterwards
    fn scaled_ratio(&self) -> f64 {
        let (nm, ne) = self.num.to_scaled_double();
        let (dm, de) = self.den.to_scaled_double();
        ldexp(nm / dm, ne.saturating_sub(de))
    }

    /// A `(lower, upper)` pair of `f64` which certainly bounds the value
    ///
    /// Suitable as a filter: if the bounds settle a sign or comparison
    /// there is no need for exact arithmetic.
    ///
    /// # Example
    ///
    /// ```
    /// use quotient::Quotient;
    /// let (lo, hi) = Quotient::new(-2_i64, 3).unwrap().to_interval();
    /// assert!(lo < -2.0 / 3.0 && -2.0 / 3.0 < hi);
    /// ```
    pub fn to_interval(&self) -> (f64, f64) {
        let num = Interval::from(self.num.to_interval());
        let den = Interval::from(self.den.to_interval());
        (num / den).bounds()
    }

    /// Both parts are valid values of the ring
    pub fn is_valid(&self) -> bool {
        self.num.is_valid() && self.den.is_valid()
    }

    /// Both parts are finite values of the ring
    pub fn is_finite(&self) -> bool {
        self.num.is_finite() && self.den.is_finite()
    }
}

/// `x * 2^exp` without overflowing on the way there
fn ldexp(mut x: f64, mut exp: i64) -> f64 {
    const STEP: i64 = 1000;
    while exp != 0 && x != 0.0 && x.is_finite() {
        let step = exp.clamp(-STEP, STEP);
        x *= 2_f64.powi(step as i32);
        exp -= step;
    }
    x
}
