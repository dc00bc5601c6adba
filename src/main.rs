use std::{fs::File, io, path::Path, process::ExitCode};

use env_logger::Env;
use rpn::cli::main_with;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).format_timestamp(None)
                                                                           .init();

    let mut out = io::stdout().lock();
    ExitCode::from(main_with(std::env::args_os(), |path: &Path| File::open(path), &mut out))
}
