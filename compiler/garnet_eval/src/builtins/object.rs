//! `Kernel` methods, reachable from every object through `Object`.

use crate::errors::EvalResult;
use crate::value::ClassRef;
use crate::{Interpreter, Value};

use super::{check_arity, define, name_arg};

pub(super) fn install(kernel: &ClassRef) {
    define(kernel, "to_s", to_s);
    define(kernel, "inspect", inspect);
    define(kernel, "class", class);
    define(kernel, "respond_to?", respond_to);
    define(kernel, "nil?", is_nil);
    define(kernel, "equal?", equal);
    define(kernel, "frozen?", frozen);
}

pub(super) fn install_boolean(class: &ClassRef) {
    define(class, "to_s", to_s);
    define(class, "inspect", inspect);
}

fn to_s(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::string(receiver.to_s()))
}

fn inspect(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::string(receiver.inspect()))
}

fn class(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::Class(receiver.class_of(interp.classes())))
}

fn respond_to(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 1)?;
    let name = name_arg(interp, &args[0])?;
    Ok(Value::boolean(receiver.responds_to(&name, interp.classes())))
}

fn is_nil(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::boolean(receiver.is_nil()))
}

fn equal(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 1)?;
    Ok(Value::boolean(receiver.same(&args[0])))
}

/// Immediates and symbols are frozen; everything else is mutable.
fn frozen(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::boolean(matches!(
        receiver,
        Value::Nil
            | Value::True
            | Value::False
            | Value::Integer(_)
            | Value::Float(_)
            | Value::Symbol(_)
    )))
}
