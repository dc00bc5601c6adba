use log::{debug, trace, warn};

use crate::{
    error::EvalError,
    interpreter::lexer::{Token, tokenize},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a postfix expression.
///
/// Tokens are read left to right. Operands are pushed onto a stack created for
/// this call; an operator pops the right-hand operand, then the left-hand one,
/// and pushes `left OP right`. The expression's value is the bottom of the
/// stack once every token has been consumed.
///
/// More than one value left over is tolerated: the bottom value is returned
/// and the surplus is logged as a warning.
///
/// # Errors
/// - [`EvalError::InvalidOperand`] if a word is neither an operator nor a
///   number.
/// - [`EvalError::StackUnderflow`] if an operator finds fewer than two values.
/// - [`EvalError::DivisionByZero`] if `/` has a zero right-hand side.
/// - [`EvalError::EmptyExpression`] if nothing is left on the stack.
///
/// # Examples
/// ```
/// use rpn::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("5 1 2 + 4 * + 3 -"), Ok(14.0));
/// assert_eq!(evaluate("   "), Err(EvalError::EmptyExpression));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for (token, column) in tokenize(expression) {
        match token {
            Token::Operand(word) => stack.push(parse_operand(word, column)?),
            Token::Operator(operator) => {
                let available = stack.len();
                let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::StackUnderflow { operator,
                                                           available,
                                                           column });
                };
                let value = operator.apply(lhs, rhs, column)?;
                trace!("{lhs} {operator} {rhs} = {value}");
                stack.push(value);
            },
        }
    }

    match stack.as_slice() {
        [] => Err(EvalError::EmptyExpression),
        [value] => Ok(*value),
        [value, rest @ ..] => {
            warn!("'{expression}' left {} unused value(s) on the stack; using the first one",
                  rest.len());
            Ok(*value)
        },
    }
}

/// Parses an operand word as an `f64`.
///
/// # Parameters
/// - `word`: The token text.
/// - `column`: Column of the token for error reporting.
fn parse_operand(word: &str, column: usize) -> EvalResult<f64> {
    word.parse().map_err(|e| {
                    debug!("operand '{word}' at column {column} rejected: {e}");
                    EvalError::InvalidOperand { token: word.to_string(),
                                                column }
                })
}
