/// Evaluation errors.
///
/// Defines every way a single postfix expression can fail to evaluate. These
/// errors are scoped to one line: the runner reports them and moves on.
pub mod eval_error;
/// Run errors.
///
/// Errors that stop a whole run, such as an input file that cannot be opened
/// or an output stream that refuses writes.
pub mod run_error;

pub use eval_error::EvalError;
pub use run_error::RunError;
