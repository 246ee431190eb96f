//! `Symbol` methods.

use crate::errors::EvalResult;
use crate::value::ClassRef;
use crate::{Interpreter, Value};

use super::{check_arity, define, receiver_error};

pub(super) fn install(symbol: &ClassRef) {
    define(symbol, "to_s", to_s);
    define(symbol, "to_sym", to_sym);
    define(symbol, "inspect", inspect);
}

fn to_s(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    match receiver {
        Value::Symbol(sym) => Ok(Value::string(&sym.name)),
        other => Err(receiver_error(interp, other, "Symbol")),
    }
}

/// Symbols are interned, so the receiver is already canonical.
fn to_sym(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(receiver.clone())
}

fn inspect(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::string(receiver.inspect()))
}
