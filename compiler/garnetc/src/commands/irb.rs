//! The `irb` command: read a line, evaluate it, print the result.

use std::io::{self, BufRead, Write};

use garnet_eval::{EvalResult, Interpreter, Value};

use super::build_interpreter;

/// Unit name of code entered interactively.
pub const IRB_UNIT: &str = "(garnet irb)";

const PROMPT: &str = "> ";

/// Input line that ends the session.
const QUIT: &str = "quit";

/// Run the interactive loop on stdin/stdout until `quit` or end of input.
pub fn run_irb(load_path: Vec<String>) {
    let mut interpreter = build_interpreter(IRB_UNIT, load_path, &[]);
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = repl(&mut interpreter, stdin.lock(), stdout.lock()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Evaluate each line of `input` in `interpreter`, writing prompts and
/// results to `output`. Each line is a separate program; bindings persist.
pub fn repl(
    interpreter: &mut Interpreter,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        output.write_all(PROMPT.as_bytes())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
        let source = line.trim();
        if source == QUIT {
            return Ok(());
        }
        if source.is_empty() {
            continue;
        }

        let result = interpreter.run(source);
        writeln!(output, "{}", format_result(&result))?;
    }
}

/// `=> value` for results (`=> nil` for nil), ` => message` for errors.
pub fn format_result(result: &EvalResult) -> String {
    match result {
        Ok(Value::Nil) => "=> nil".to_string(),
        Ok(value) => format!("=> {value}"),
        Err(err) => format!(" => {err}"),
    }
}
