use logos::Logos;

use crate::interpreter::operator::Operator;

/// Represents a lexical token of a postfix expression.
///
/// Separators (see [`is_separator`]) split tokens and are otherwise ignored.
/// A word made up of a single operator symbol is an operator; every other word
/// is an operand and is left for the evaluator to parse, so `-3` lexes as one
/// operand and `3+` as one (invalid) operand.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[\s\x1C-\x1F]+")]
pub enum Token<'src> {
    /// One of `+`, `-`, `*` or `/`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// Any other run of non-separator characters.
    #[regex(r"[^\s\x1C-\x1F]+", |lex| lex.slice(), priority = 1)]
    Operand(&'src str),
}

/// Returns `true` for characters that separate tokens.
///
/// These are the Unicode `White_Space` characters plus the four ASCII
/// information separators `U+001C..=U+001F`.
///
/// # Example
/// ```
/// use rpn::interpreter::lexer::is_separator;
///
/// assert!(is_separator(' '));
/// assert!(is_separator('\u{a0}'));
/// assert!(is_separator('\u{1f}'));
/// assert!(!is_separator('+'));
/// ```
#[must_use]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Splits an expression into tokens paired with their 1-based byte column.
///
/// # Example
/// ```
/// use rpn::interpreter::{
///     lexer::{Token, tokenize},
///     operator::Operator,
/// };
///
/// let tokens: Vec<_> = tokenize("3 4 +").collect();
/// assert_eq!(tokens,
///            vec![(Token::Operand("3"), 1),
///                 (Token::Operand("4"), 3),
///                 (Token::Operator(Operator::Add), 5)]);
/// ```
pub fn tokenize(expression: &str) -> impl Iterator<Item = (Token<'_>, usize)> {
    let mut lexer = Token::lexer(expression);

    std::iter::from_fn(move || {
        let token = lexer.next()?;
        let column = lexer.span().start + 1;
        // Every non-separator run matches `Operand`, so the lexer has no error path.
        Some((token.unwrap_or_else(|()| Token::Operand(lexer.slice())), column))
    })
}
