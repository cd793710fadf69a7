use std::fmt;

use ordered_float::OrderedFloat;

/// A numeric value. Equality is total, so `nan` equals itself and every
/// value stays reflexively equal.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Number(OrderedFloat<f64>);

impl Number {
    pub fn new(n: f64) -> Self {
        Self(OrderedFloat(n))
    }

    pub fn to_f64(self) -> f64 {
        self.0.into_inner()
    }

    pub fn print<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        let n = self.to_f64();
        if n.is_nan() {
            out.write_str("nan")
        } else if n.is_infinite() {
            out.write_str(if n > 0.0 { "inf" } else { "-inf" })
        } else if n == 0.0 {
            // Don't print negative zero as "-0".
            out.write_char('0')
        } else {
            write!(out, "{n}")
        }
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::new(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::new(f64::from(n))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}
