//! `Array` methods. Arrays are shared: mutation is visible through every
//! reference, which is how `$:` and `$LOAD_PATH` stay one list.

use std::rc::Rc;

use crate::errors::{EvalError, EvalResult};
use crate::value::{ArrayRef, ClassRef};
use crate::{Interpreter, Value};

use super::{check_arity, check_arity_range, define, receiver_error, string_arg};

pub(super) fn install(array: &ClassRef) {
    define(array, "push", push);
    define(array, "<<", append);
    define(array, "unshift", unshift);
    define(array, "length", length);
    define(array, "size", length);
    define(array, "first", first);
    define(array, "last", last);
    define(array, "include?", include);
    define(array, "empty?", is_empty);
    define(array, "join", join);
    define(array, "to_s", inspect);
    define(array, "inspect", inspect);
}

fn items(interp: &Interpreter, receiver: &Value) -> Result<ArrayRef, EvalError> {
    match receiver {
        Value::Array(items) => Ok(Rc::clone(items)),
        other => Err(receiver_error(interp, other, "Array")),
    }
}

/// Append every argument; returns the receiver.
fn push(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    items(interp, receiver)?.borrow_mut().extend_from_slice(args);
    Ok(receiver.clone())
}

fn append(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 1)?;
    items(interp, receiver)?.borrow_mut().push(args[0].clone());
    Ok(receiver.clone())
}

/// Prepend the arguments, keeping their order.
fn unshift(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    items(interp, receiver)?
        .borrow_mut()
        .splice(0..0, args.iter().cloned());
    Ok(receiver.clone())
}

fn length(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    let len = items(interp, receiver)?.borrow().len();
    Ok(Value::Integer(i64::try_from(len).unwrap_or(i64::MAX)))
}

fn first(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    let first = items(interp, receiver)?.borrow().first().cloned();
    Ok(first.unwrap_or(Value::Nil))
}

fn last(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    let last = items(interp, receiver)?.borrow().last().cloned();
    Ok(last.unwrap_or(Value::Nil))
}

fn include(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 1)?;
    let found = items(interp, receiver)?
        .borrow()
        .iter()
        .any(|item| item.equals(&args[0]));
    Ok(Value::boolean(found))
}

fn is_empty(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    let empty = items(interp, receiver)?.borrow().is_empty();
    Ok(Value::boolean(empty))
}

/// `join(sep = "")`: string forms of the elements, separated by `sep`.
fn join(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity_range(interp, args, 0, 1)?;
    let separator = match args.first() {
        Some(sep) => string_arg(interp, sep)?,
        None => Rc::from(""),
    };
    let joined = items(interp, receiver)?
        .borrow()
        .iter()
        .map(Value::to_s)
        .collect::<Vec<_>>()
        .join(&separator);
    Ok(Value::string(joined))
}

fn inspect(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::string(receiver.inspect()))
}
