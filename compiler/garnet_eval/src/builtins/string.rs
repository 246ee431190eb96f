//! `String` methods. Strings are immutable; transformations return new values.

use std::rc::Rc;

use crate::errors::{EvalError, EvalResult};
use crate::value::ClassRef;
use crate::{Interpreter, Value};

use super::{check_arity, define, receiver_error};

pub(super) fn install(string: &ClassRef) {
    define(string, "length", length);
    define(string, "size", length);
    define(string, "upcase", upcase);
    define(string, "downcase", downcase);
    define(string, "to_sym", to_sym);
    define(string, "to_s", to_s);
    define(string, "inspect", inspect);
    define(string, "empty?", is_empty);
}

fn text(interp: &Interpreter, receiver: &Value) -> Result<Rc<str>, EvalError> {
    match receiver {
        Value::Str(s) => Ok(Rc::clone(s)),
        other => Err(receiver_error(interp, other, "String")),
    }
}

/// Length in characters, not bytes.
fn length(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    let count = text(interp, receiver)?.chars().count();
    Ok(Value::Integer(i64::try_from(count).unwrap_or(i64::MAX)))
}

fn upcase(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::string(text(interp, receiver)?.to_uppercase()))
}

fn downcase(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::string(text(interp, receiver)?.to_lowercase()))
}

fn to_sym(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    let name = text(interp, receiver)?;
    Ok(interp.symbol(&name))
}

fn to_s(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    text(interp, receiver)?;
    Ok(receiver.clone())
}

fn inspect(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::string(receiver.inspect()))
}

fn is_empty(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::boolean(text(interp, receiver)?.is_empty()))
}
