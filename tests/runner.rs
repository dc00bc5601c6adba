use std::{
    io::{self, Cursor, Write},
    path::Path,
};

use rpn::{Summary, error::RunError, run, run_path};

fn run_str(src: &str) -> (Summary, String) {
    let mut out = Vec::new();
    let summary = run(src.as_bytes(), &mut out).unwrap_or_else(|e| panic!("Run failed: {e}"));
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn failing_line_does_not_stop_the_run() {
    let (summary, output) = run_str("2 3 +\n4 0 /\n");

    assert_eq!(summary,
               Summary { evaluated: 2,
                         failed:    1, });
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "2 3 + = 5");
    assert!(lines[1].starts_with("Error on line 2 ('4 0 /')"), "{}", lines[1]);
}

#[test]
fn one_record_per_line_in_order() {
    let (summary, output) = run_str("1 1 +\n\n2 2 +\nx\n3 3 +");

    assert_eq!(summary.evaluated, 5);
    assert_eq!(summary.failed, 2);
    assert_eq!(output,
               "1 1 + = 2\n\
                Error on line 2 (''): Empty expression.\n\
                2 2 + = 4\n\
                Error on line 4 ('x'): Invalid operand 'x' at column 1.\n\
                3 3 + = 6\n");
}

#[test]
fn lines_are_trimmed_before_display() {
    let (_, output) = run_str("   7 2 *   \r\n");
    assert_eq!(output, "7 2 * = 14\n");
}

#[test]
fn unicode_whitespace_is_trimmed_and_split() {
    let (summary, output) = run_str("\u{a0}3\u{a0}4 +\u{2003}\n\u{1f}5\u{1c}\u{1c}2 -\u{1e}\n");

    assert_eq!(summary.failed, 0);
    assert_eq!(output, "3\u{a0}4 + = 7\n5\u{1c}\u{1c}2 - = 3\n");
}

#[test]
fn results_render_without_exponents() {
    let (_, output) = run_str("1e20 1 *\n1 8 /\n1 0.5 -\n");
    assert_eq!(output, "1e20 1 * = 100000000000000000000\n1 8 / = 0.125\n1 0.5 - = 0.5\n");
}

#[test]
fn empty_source_writes_nothing() {
    let (summary, output) = run_str("");
    assert_eq!(summary, Summary::default());
    assert!(output.is_empty());
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let mut out = Vec::new();
    let result = run(&b"1 2 +\n\xff\xfe\n3 4 +\n"[..], &mut out);

    assert!(matches!(result, Err(RunError::Read { line: 2, .. })), "{result:?}");
    assert_eq!(out, b"1 2 + = 3\n");
}

struct RejectingWriter;

impl Write for RejectingWriter {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_is_reported() {
    let result = run("1 2 +\n".as_bytes(), &mut RejectingWriter);
    assert!(matches!(result, Err(RunError::Write { .. })), "{result:?}");
}

#[test]
fn run_path_uses_the_given_opener() {
    let mut out = Vec::new();
    let mut requested = None;

    let summary = run_path(Path::new("in-memory.rpn"),
                           |p| {
                               requested = Some(p.to_path_buf());
                               Ok(Cursor::new("6 3 /\n"))
                           },
                           &mut out).unwrap();

    assert_eq!(requested.as_deref(), Some(Path::new("in-memory.rpn")));
    assert_eq!(summary.evaluated, 1);
    assert_eq!(out, b"6 3 / = 2\n");
}

#[test]
fn missing_file_is_a_file_access_error() {
    let mut out = Vec::new();
    let result = run_path(Path::new("tests/fixtures/does-not-exist.rpn"),
                          |p| std::fs::File::open(p),
                          &mut out);

    let Err(e) = result else {
        panic!("Opening a missing file succeeded");
    };
    assert!(matches!(e, RunError::FileAccess { .. }), "{e:?}");
    assert_eq!(e.to_string(), "File 'tests/fixtures/does-not-exist.rpn' not found.");
    assert!(std::error::Error::source(&e).is_some());
    assert!(out.is_empty());
}

#[test]
fn unreadable_file_is_a_file_access_error() {
    let mut out = Vec::new();
    let result = run_path(Path::new("locked.rpn"),
                          |_| -> io::Result<Cursor<Vec<u8>>> {
                              Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
                          },
                          &mut out);

    let Err(e) = result else {
        panic!("Opening a locked file succeeded");
    };
    assert_eq!(e.to_string(), "File 'locked.rpn' could not be opened: denied.");
}
