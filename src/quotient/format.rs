use crate::{Problem, Quotient, Ring};
use core::fmt;

/// Always `numerator/denominator`, exactly as stored
impl<NT: Ring> fmt::Display for Quotient<NT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl<NT: Ring> Quotient<NT> {
    /// Read a quotient from the start of `input`
    ///
    /// The text is `num/den` or just `num`, where each part uses the ring's
    /// own literal grammar, with whitespace allowed before the numerator and
    /// around the `/`. Returns the value and whatever text follows it.
    ///
    /// # Example
    ///
    /// ```
    /// use quotient::Quotient;
    /// let (q, rest) = Quotient::<i64>::read("  -5 / 3, 7").unwrap();
    /// assert_eq!(q, Quotient::new(-5, 3).unwrap());
    /// assert_eq!(rest, ", 7");
    /// let (q, rest) = Quotient::<i64>::read(&rest[1..]).unwrap();
    /// assert_eq!(q.to_string(), "7/1");
    /// assert!(rest.is_empty());
    /// ```
    pub fn read(input: &str) -> Result<(Self, &str), Problem> {
        let (num, rest) = NT::scan(input.trim_start()).ok_or(Problem::BadNumerator)?;
        match rest.trim_start().strip_prefix('/') {
            Some(tail) => {
                let (den, rest) = NT::scan(tail.trim_start()).ok_or(Problem::BadDenominator)?;
                Ok((Self::new(num, den)?, rest))
            }
            None => Ok((Self::from(num), rest)),
        }
    }

    /// Replace this quotient with one read from `input`, returning the
    /// unconsumed text
    ///
    /// On failure the quotient is left exactly as it was.
    pub fn read_into<'a>(&mut self, input: &'a str) -> Result<&'a str, Problem> {
        let (value, rest) = Self::read(input)?;
        *self = value;
        Ok(rest)
    }
}

impl<NT: Ring> std::str::FromStr for Quotient<NT> {
    type Err = Problem;

    fn from_str(s: &str) -> Result<Self, Problem> {
        let (value, rest) = Self::read(s)?;
        if rest.trim().is_empty() {
            Ok(value)
        } else {
            Err(Problem::TrailingInput)
        }
    }
}
