mod interval;
pub use crate::interval::Interval;

mod problem;
pub use crate::problem::Problem;

mod quotient;
pub use crate::quotient::{quotient_cmp, Quotient};

mod ring;
pub use crate::ring::Ring;
