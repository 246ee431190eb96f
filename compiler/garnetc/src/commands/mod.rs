//! Command handlers for the Garnet CLI.
//!
//! Each submodule implements one command. Interpreter construction and
//! error reporting shared between them live here.

mod irb;
mod run;

pub use irb::{format_result, repl, run_irb, IRB_UNIT};
pub use run::run_file;

use garnet_eval::{Interpreter, InterpreterBuilder};

/// Interpreter with the driver's configuration: stdout output, the given
/// unit name, load path and `ARGV`.
fn build_interpreter(file: &str, load_path: Vec<String>, argv: &[String]) -> Interpreter {
    tracing::debug!(file, ?load_path, "building interpreter");
    InterpreterBuilder::new()
        .file(file)
        .load_path(load_path)
        .argv(argv.iter().cloned())
        .build()
}
