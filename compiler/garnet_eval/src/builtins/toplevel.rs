//! The top-level receiver `main` and its singleton methods.

use std::rc::Rc;

use crate::errors::{self, EvalResult};
use crate::value::{ArrayPtr, ClassTable, Method, ObjectValue};
use crate::{Interpreter, Value};

use super::{check_arity, check_arity_range, conversion_name, string_arg, Builtin};

/// Label `main` reports for `to_s` and `inspect`.
const MAIN_LABEL: &str = "main";

/// Message of a `raise` without arguments.
const UNHANDLED_EXCEPTION: &str = "unhandled exception";

const SINGLETON_METHODS: &[(&str, Builtin)] = &[
    ("to_s", to_s),
    ("puts", puts),
    ("require", require),
    ("load", load),
    ("raise", raise),
];

/// Create `main`: an `Object` carrying the top-level singleton methods.
pub(crate) fn main_object(classes: &ClassTable) -> Value {
    let main = ObjectValue::labeled(Rc::clone(classes.object()), MAIN_LABEL);
    for &(name, body) in SINGLETON_METHODS {
        main.define_singleton_method(Rc::new(Method::public(name, body)));
    }
    Value::Object(Rc::new(main))
}

fn to_s(interp: &mut Interpreter, _: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::string(MAIN_LABEL))
}

/// Print each argument on its own line; arrays print one element per line.
fn puts(interp: &mut Interpreter, _: &Value, args: &[Value]) -> EvalResult {
    if args.is_empty() {
        interp.println("");
        return Ok(Value::Nil);
    }

    let mut lines = Vec::new();
    for arg in args {
        collect_lines(arg, &mut lines, &mut Vec::new());
    }
    for line in &lines {
        interp.println(line);
    }
    Ok(Value::Nil)
}

/// Flatten `value` into output lines. A nested reference to an array
/// already being printed prints `[...]`.
fn collect_lines(value: &Value, lines: &mut Vec<String>, seen: &mut Vec<ArrayPtr>) {
    let Value::Array(items) = value else {
        lines.push(value.to_s());
        return;
    };

    let ptr = Rc::as_ptr(items);
    if seen.contains(&ptr) {
        lines.push("[...]".to_string());
        return;
    }

    let items = items.borrow();
    if items.is_empty() && seen.is_empty() {
        lines.push(String::new());
        return;
    }
    seen.push(ptr);
    for item in items.iter() {
        collect_lines(item, lines, seen);
    }
    seen.pop();
}

fn require(interp: &mut Interpreter, _: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 1)?;
    let name = string_arg(interp, &args[0])?;
    interp.require(&name)
}

fn load(interp: &mut Interpreter, _: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 1)?;
    let path = string_arg(interp, &args[0])?;
    interp.load(&path)
}

/// `raise`, `raise "message"`, `raise SomeClass` or re-raise an error value.
///
/// Strings and classes become runtime errors whose string form is the
/// message or class name, which is what `rescue` compares against.
fn raise(interp: &mut Interpreter, _: &Value, args: &[Value]) -> EvalResult {
    check_arity_range(interp, args, 0, 1)?;
    let err = match args.first() {
        None => errors::runtime_error(UNHANDLED_EXCEPTION),
        Some(Value::Str(message)) => errors::runtime_error(&**message),
        Some(Value::Class(class)) => errors::runtime_error(class.borrow().name.as_str()),
        Some(Value::Error(err)) => (**err).clone(),
        Some(other) => errors::type_error(&conversion_name(other), "Exception"),
    };
    tracing::debug!(error = %err, "raise");
    Err(interp.attach_backtrace(err))
}
