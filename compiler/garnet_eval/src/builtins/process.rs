//! `Process` class methods.

use crate::errors::EvalResult;
use crate::value::ClassRef;
use crate::{Interpreter, Value};

use super::{check_arity, define_singleton};

pub(super) fn install(process: &ClassRef) {
    define_singleton(process, "pid", pid);
}

fn pid(interp: &mut Interpreter, _: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    Ok(Value::Integer(i64::from(std::process::id())))
}
