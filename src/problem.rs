// We need to refer to these types in the documentation
#[allow(unused_imports)]
use crate::{Quotient, Ring};

/// Problems when making, dividing or parsing a [`Quotient`]

#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Problem {
    /// Tried to make a quotient whose denominator is zero, also arises when
    /// parsing text such as `3/0`
    ZeroDenominator,
    /// Tried to divide by a quotient or [`Ring`] value equal to zero
    DivisionByZero,
    /// When parsing, no numerator in the ring's literal grammar was found
    BadNumerator,
    /// When parsing, a `/` was consumed but no denominator followed it
    BadDenominator,
    /// When parsing a whole string, something other than whitespace followed
    /// the quotient
    TrailingInput,
}

use std::fmt;

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for Problem {}
