/// The evaluator module runs the stack machine over a token stream.
///
/// Operands are pushed onto a fresh stack, operators pop their two operands
/// and push the result. Whatever sits at the bottom of the stack once the
/// input is exhausted is the value of the expression.
///
/// # Responsibilities
/// - Converts operand words into `f64` values.
/// - Applies operators in postfix order, right-hand operand on top.
/// - Reports evaluation errors with the column that caused them.
pub mod evaluator;
/// The lexer module tokenizes a single expression.
///
/// The lexer splits an expression on whitespace and classifies each word as
/// either one of the four operator symbols or an operand word.
pub mod lexer;
/// The operator module defines the four arithmetic operators.
pub mod operator;
