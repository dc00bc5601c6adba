use crate::interpreter::operator::Operator;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating one expression.
pub enum EvalError {
    /// A token that is not an operator could not be parsed as a number.
    InvalidOperand {
        /// The offending token text.
        token:  String,
        /// The 1-based column where the token starts.
        column: usize,
    },
    /// An operator was applied with fewer than two values on the stack.
    StackUnderflow {
        /// The operator that was applied.
        operator:  Operator,
        /// The number of values that were available.
        available: usize,
        /// The 1-based column of the operator.
        column:    usize,
    },
    /// The right-hand operand of a division was zero.
    DivisionByZero {
        /// The 1-based column of the `/` operator.
        column: usize,
    },
    /// Nothing was left on the stack once all tokens were consumed.
    EmptyExpression,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperand { token, column } => {
                write!(f, "Invalid operand '{token}' at column {column}.")
            },
            Self::StackUnderflow { operator,
                                   available,
                                   column, } => write!(f,
                                                       "Operator '{operator}' at column {column} needs two operands but found {available}."),
            Self::DivisionByZero { column } => write!(f, "Division by zero at column {column}."),
            Self::EmptyExpression => write!(f, "Empty expression."),
        }
    }
}

impl std::error::Error for EvalError {}
