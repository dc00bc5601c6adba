use std::{
    io::{self, BufRead, BufReader, Read, Write},
    path::Path,
};

use log::{debug, info};

use crate::{
    error::RunError,
    interpreter::{evaluator::evaluate, lexer::is_separator},
};

/// Counts of what a run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines that were handed to the evaluator.
    pub evaluated: usize,
    /// Lines whose evaluation failed.
    pub failed:    usize,
}

/// Evaluates every line of `source` and writes one record per line to `out`.
///
/// Leading and trailing separators are trimmed from each line before
/// evaluation. A successful line is written as `<line> = <value>`; a failing
/// one as
/// `Error on line <n> ('<line>'): <reason>`. Evaluation failures never stop
/// the run.
///
/// # Errors
/// Returns [`RunError::Read`] if a line cannot be read (for example because it
/// is not valid UTF-8) and [`RunError::Write`] if `out` rejects a write.
///
/// # Example
/// ```
/// use rpn::run;
///
/// let mut out = Vec::new();
/// let summary = run("2 3 +\n4 0 /\n".as_bytes(), &mut out).unwrap();
///
/// assert_eq!(summary.evaluated, 2);
/// assert_eq!(summary.failed, 1);
/// assert_eq!(String::from_utf8(out).unwrap(),
///            "2 3 + = 5\nError on line 2 ('4 0 /'): Division by zero at column 5.\n");
/// ```
pub fn run<R: BufRead, W: Write>(source: R, out: &mut W) -> Result<Summary, RunError> {
    let mut summary = Summary::default();

    for (index, line) in source.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| RunError::Read { line: number,
                                                            source })?;
        let expression = line.trim_matches(is_separator);

        summary.evaluated += 1;
        let written = match evaluate(expression) {
            Ok(value) => writeln!(out, "{expression} = {value}"),
            Err(e) => {
                summary.failed += 1;
                debug!("line {number} failed: {e:?}");
                writeln!(out, "Error on line {number} ('{expression}'): {e}")
            },
        };
        written.map_err(|source| RunError::Write { source })?;
    }

    out.flush().map_err(|source| RunError::Write { source })?;
    info!("evaluated {} line(s), {} failed", summary.evaluated, summary.failed);

    Ok(summary)
}

/// Opens `path` with `open` and runs every line of it through [`run`].
///
/// The opener decides where the bytes come from; the binary passes
/// `File::open`, tests can hand in anything that implements [`Read`]. The
/// reader is dropped before this function returns, on success and on error.
///
/// # Errors
/// Returns [`RunError::FileAccess`] if `open` fails, and any error from
/// [`run`].
///
/// # Example
/// ```
/// use std::{fs::File, path::Path};
///
/// use rpn::{error::RunError, run_path};
///
/// let mut out = Vec::new();
/// let result = run_path(Path::new("no/such/file.rpn"), |p| File::open(p), &mut out);
///
/// assert!(matches!(result, Err(RunError::FileAccess { .. })));
/// ```
pub fn run_path<R, F, W>(path: &Path, open: F, out: &mut W) -> Result<Summary, RunError>
    where R: Read,
          F: FnOnce(&Path) -> io::Result<R>,
          W: Write
{
    let reader = open(path).map_err(|source| RunError::FileAccess { path: path.to_path_buf(),
                                                                    source })?;
    debug!("reading expressions from '{}'", path.display());

    run(BufReader::new(reader), out)
}
