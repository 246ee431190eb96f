// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Interactive loop behavior with in-memory input and output.

use std::io::Cursor;

use garnet_eval::{buffer_handler, Interpreter, InterpreterBuilder, SharedPrintHandler, Value};
use garnetc::commands::{format_result, repl, IRB_UNIT};
use pretty_assertions::assert_eq;

fn session(input: &str) -> (String, SharedPrintHandler, Interpreter) {
    let handler = buffer_handler();
    let mut interp = InterpreterBuilder::new()
        .file(IRB_UNIT)
        .print_handler(handler.clone())
        .build();
    let mut output = Vec::new();
    repl(&mut interp, Cursor::new(input.to_string()), &mut output).unwrap();
    (String::from_utf8(output).unwrap(), handler, interp)
}

#[test]
fn prints_results_and_stops_at_quit() {
    let (output, _, _) = session("x = 40.succ\nx.succ\nquit\n:never\n");
    assert_eq!(output, "> => 41\n> => 42\n> ");
}

#[test]
fn nil_results_print_as_nil() {
    let (output, handler, _) = session("puts 'hi'\n");
    assert_eq!(output, "> => nil\n> \n");
    assert_eq!(handler.get_output(), "hi\n");
}

#[test]
fn errors_print_with_leading_space_and_session_continues() {
    let (output, _, interp) = session("nope\n:still_here\n");
    assert_eq!(
        output,
        ">  => NameError: undefined local variable or method `nope' for main:Object\n> => still_here\n> \n"
    );
    assert_eq!(interp.call_depth(), 0);
}

#[test]
fn blank_lines_only_reprompt() {
    let (output, _, _) = session("\n   \nquit\n");
    assert_eq!(output, "> > > ");
}

#[test]
fn file_constant_is_irb_unit() {
    let (output, _, interp) = session("__FILE__\n");
    assert_eq!(output, "> => (garnet irb)\n> \n");
    assert_eq!(interp.current_file(), IRB_UNIT);
}

#[test]
fn format_result_forms() {
    assert_eq!(format_result(&Ok(Value::Nil)), "=> nil");
    assert_eq!(format_result(&Ok(Value::string(""))), "=> ");
    assert_eq!(format_result(&Ok(Value::Integer(3))), "=> 3");
    let err = garnet_eval::errors::runtime_error("Boom");
    assert_eq!(format_result(&Err(err)), " => Boom");
}
