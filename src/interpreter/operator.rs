use crate::{error::EvalError, interpreter::evaluator::EvalResult};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Applies the operator as `lhs OP rhs`.
    ///
    /// Arithmetic follows IEEE-754 double precision, except that a zero
    /// right-hand side of a division is rejected rather than producing an
    /// infinity or NaN.
    ///
    /// # Parameters
    /// - `lhs`: The operand pushed first.
    /// - `rhs`: The operand pushed last, taken from the top of the stack.
    /// - `column`: Column of the operator for error reporting.
    ///
    /// # Example
    /// ```
    /// use rpn::{error::EvalError, interpreter::operator::Operator};
    ///
    /// assert_eq!(Operator::Sub.apply(10.0, 4.0, 5).unwrap(), 6.0);
    /// assert_eq!(Operator::Div.apply(1.0, 0.0, 5),
    ///            Err(EvalError::DivisionByZero { column: 5 }));
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64, column: usize) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div => {
                if rhs == 0.0 {
                    return Err(EvalError::DivisionByZero { column });
                }
                Ok(lhs / rhs)
            },
        }
    }

    /// The symbol this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
