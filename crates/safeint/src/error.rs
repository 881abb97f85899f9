// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Errors reported by the checked operations of `Safe<T>`.

use std::fmt::Display;

/// The operator whose native evaluation would have been undefined or would
/// have overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    Neg,
    Abs,
    Increment,
    Decrement,
}

impl Operator {
    /// The operator as it is spelled in source, e.g. `"operator+"`.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "operator+",
            Self::Sub => "operator-",
            Self::Mul => "operator*",
            Self::Div => "operator/",
            Self::Rem => "operator%",
            Self::Shl => "operator<<",
            Self::Shr => "operator>>",
            Self::Neg => "unary operator-",
            Self::Abs => "abs",
            Self::Increment => "operator++",
            Self::Decrement => "operator--",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A checked operation was rejected because its result is not
/// representable in the operand type, or is undefined (zero divisor,
/// out-of-range shift amount).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeError {
    /// The rejected operator.
    pub op: Operator,
}

impl RangeError {
    #[inline]
    pub const fn new(op: Operator) -> Self {
        Self { op }
    }

    /// The rejected operator.
    #[inline]
    pub const fn operator(&self) -> Operator {
        self.op
    }
}

impl From<Operator> for RangeError {
    fn from(op: Operator) -> Self {
        Self::new(op)
    }
}

impl Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "overflow with {}", self.op)
    }
}

impl std::error::Error for RangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(RangeError::new(Operator::Add).to_string(), "overflow with operator+");
        assert_eq!(RangeError::new(Operator::Shl).to_string(), "overflow with operator<<");
        assert_eq!(
            RangeError::new(Operator::Neg).to_string(),
            "overflow with unary operator-"
        );
        assert_eq!(
            RangeError::from(Operator::Decrement).to_string(),
            "overflow with operator--"
        );
    }

    #[test]
    fn test_operator_accessor() {
        let err = RangeError::from(Operator::Rem);
        assert_eq!(err.operator(), Operator::Rem);
        assert_eq!(err.op, Operator::Rem);
    }

    #[test]
    fn test_is_std_error() {
        fn boxed(e: RangeError) -> Box<dyn std::error::Error + Send + Sync> {
            Box::new(e)
        }
        let err = boxed(RangeError::new(Operator::Div));
        assert_eq!(err.to_string(), "overflow with operator/");
    }
}
