//! `Integer` and `Float` methods.

use crate::errors::{self, EvalResult};
use crate::value::ClassRef;
use crate::{Interpreter, Value};

use super::{check_arity, define, receiver_error};

pub(super) fn install_integer(integer: &ClassRef) {
    define(integer, "to_s", to_s);
    define(integer, "to_f", to_f);
    define(integer, "succ", succ);
    define(integer, "zero?", is_zero);
}

pub(super) fn install_float(float: &ClassRef) {
    define(float, "to_s", to_s);
    define(float, "to_i", to_i);
}

fn to_s(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::string(receiver.to_s()))
}

#[expect(clippy::cast_precision_loss, reason = "Integer#to_f rounds like Ruby")]
fn to_f(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    match receiver {
        Value::Integer(n) => Ok(Value::Float(*n as f64)),
        other => Err(receiver_error(interp, other, "Integer")),
    }
}

fn succ(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    match receiver {
        Value::Integer(n) => n
            .checked_add(1)
            .map(Value::Integer)
            .ok_or_else(|| interp.attach_backtrace(errors::runtime_error("integer overflow"))),
        other => Err(receiver_error(interp, other, "Integer")),
    }
}

fn is_zero(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    match receiver {
        Value::Integer(n) => Ok(Value::boolean(*n == 0)),
        other => Err(receiver_error(interp, other, "Integer")),
    }
}

/// Truncates toward zero; NaN and infinities cannot be converted.
#[expect(
    clippy::cast_possible_truncation,
    reason = "finite floats saturate at the i64 range"
)]
fn to_i(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    match receiver {
        Value::Float(x) if x.is_finite() => Ok(Value::Integer(x.trunc() as i64)),
        Value::Float(x) => Err(interp.attach_backtrace(errors::runtime_error(format!(
            "FloatDomainError: {}",
            Value::Float(*x)
        )))),
        other => Err(receiver_error(interp, other, "Float")),
    }
}
