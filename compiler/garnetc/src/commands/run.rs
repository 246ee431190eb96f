//! The `run` command: evaluate a file as the main program.

use std::path::Path;

use super::build_interpreter;

/// Run `path` with `args` as `ARGV`. On error, print the message and the
/// backtrace to stderr and exit with status 1.
pub fn run_file(path: &str, args: &[String], load_path: Vec<String>) {
    let mut interpreter = build_interpreter(path, load_path, args);
    if let Err(err) = interpreter.run_file(Path::new(path)) {
        eprintln!("{path}: {err}");
        eprint!("{}", err.backtrace_string());
        std::process::exit(1);
    }
}
