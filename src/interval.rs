use core::ops::Div;

/// Closed interval of `f64` with outward rounding
///
/// Every operation rounds its lower bound toward negative infinity and its
/// upper bound toward positive infinity, so an exact value contained in the
/// operands has its exact result contained in the answer. The bounds may be
/// conservative, never wrong.
///
/// # Example
///
/// ```
/// use quotient::Interval;
/// let third = Interval::point(1.0) / Interval::point(3.0);
/// assert!(third.inf() < third.sup());
/// assert!(third.contains(1.0 / 3.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    inf: f64,
    sup: f64,
}

impl Interval {
    /// The whole real line, the answer when nothing better is known
    pub const ENTIRE: Self = Self {
        inf: f64::NEG_INFINITY,
        sup: f64::INFINITY,
    };

    /// The interval `[inf, sup]`
    ///
    /// NaN bounds, or bounds in the wrong order, give [`Interval::ENTIRE`]
    pub fn new(inf: f64, sup: f64) -> Self {
        if inf <= sup {
            Self { inf, sup }
        } else {
            Self::ENTIRE
        }
    }

    /// The degenerate interval holding exactly `x`
    pub fn point(x: f64) -> Self {
        Self::new(x, x)
    }

    /// An interval one ulp either side of `x`
    ///
    /// Suitable for any value whose nearest `f64` is `x`.
    pub fn around(x: f64) -> Self {
        Self::new(x.next_down(), x.next_up())
    }

    pub fn inf(&self) -> f64 {
        self.inf
    }

    pub fn sup(&self) -> f64 {
        self.sup
    }

    pub fn contains(&self, x: f64) -> bool {
        self.inf <= x && x <= self.sup
    }

    pub fn contains_zero(&self) -> bool {
        self.contains(0.0)
    }

    /// The bounds as a `(lower, upper)` pair
    pub fn bounds(&self) -> (f64, f64) {
        (self.inf, self.sup)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((inf, sup): (f64, f64)) -> Self {
        Self::new(inf, sup)
    }
}

impl Div for Interval {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        if other.contains_zero() {
            return Self::ENTIRE;
        }
        // With a divisor of fixed sign the extremes are at the corners
        let corners = [
            self.inf / other.inf,
            self.inf / other.sup,
            self.sup / other.inf,
            self.sup / other.sup,
        ];
        if corners.iter().any(|c| c.is_nan()) {
            return Self::ENTIRE;
        }
        let lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Each corner is within half an ulp of the exact quotient
        Self {
            inf: lo.next_down(),
            sup: hi.next_up(),
        }
    }
}
