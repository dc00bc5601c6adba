use std::{
    ffi::OsString,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use log::error;

use crate::runner::run_path;

/// Exit status for a completed run, including runs where some lines failed.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when the input could not be opened, read, or the output
/// could not be written.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status for command line usage errors.
pub const EXIT_USAGE: u8 = 2;

/// rpn evaluates a file of postfix arithmetic expressions, one per line, and
/// prints each expression next to its value.
#[derive(Parser, Debug)]
#[command(name = "rpn", version, about, long_about = None)]
pub struct Args {
    /// File containing reverse polish notation, one expression per line.
    pub file: PathBuf,
}

/// Runs the program for the given command line.
///
/// `args` includes the program name, as [`std::env::args_os`] does. `open`
/// opens the input file and `out` receives the results and any top-level error
/// message. Help, version and usage errors are printed by clap.
///
/// Returns the process exit status: [`EXIT_SUCCESS`] once every line has been
/// processed, [`EXIT_FAILURE`] if the run was aborted and clap's own status
/// ([`EXIT_USAGE`] for usage errors) if the arguments were rejected.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use rpn::cli::{EXIT_SUCCESS, main_with};
///
/// let mut out = Vec::new();
/// let status = main_with(["rpn", "sums.rpn"], |_| Ok(Cursor::new("3 4 +\n")), &mut out);
///
/// assert_eq!(status, EXIT_SUCCESS);
/// assert_eq!(out, b"3 4 + = 7\n");
/// ```
pub fn main_with<I, T, R, F, W>(args: I, open: F, out: &mut W) -> u8
    where I: IntoIterator<Item = T>,
          T: Into<OsString> + Clone,
          R: Read,
          F: FnOnce(&Path) -> io::Result<R>,
          W: Write
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(e) => {
            if let Err(print_error) = e.print() {
                error!("failed to print usage: {print_error}");
            }
            return u8::try_from(e.exit_code()).unwrap_or(EXIT_USAGE);
        },
    };

    match run_path(&args.file, open, out) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            if let Err(write_error) = writeln!(out, "Error: {e}") {
                error!("failed to report '{e}': {write_error}");
            }
            EXIT_FAILURE
        },
    }
}
