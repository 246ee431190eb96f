//! Methods of class values, installed as instance methods of `Class`.

use rustc_hash::FxHashSet;

use crate::errors::{self, EvalResult};
use crate::value::{ClassData, ClassRef};
use crate::{Interpreter, Value};

use super::{check_arity, define, receiver_error};

pub(super) fn install(class: &ClassRef) {
    define(class, "new", new);
    define(class, "name", name);
    define(class, "to_s", name);
    define(class, "superclass", superclass);
    define(class, "ancestors", ancestors);
    define(class, "instance_methods", instance_methods);
}

fn receiver_class(interp: &Interpreter, receiver: &Value) -> Result<ClassRef, errors::EvalError> {
    match receiver {
        Value::Class(class) => Ok(ClassRef::clone(class)),
        other => Err(receiver_error(interp, other, "Class")),
    }
}

fn new(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    let class = receiver_class(interp, receiver)?;
    let factory = class.borrow().factory();
    match factory {
        Some(factory) => Ok(factory(&class)),
        None => Err(interp.attach_backtrace(errors::no_method_error(
            "new",
            &receiver.inspect(),
            "Class",
        ))),
    }
}

fn name(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    let class = receiver_class(interp, receiver)?;
    let name = Value::string(&class.borrow().name);
    Ok(name)
}

fn superclass(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    let class = receiver_class(interp, receiver)?;
    let superclass = class.borrow().superclass.clone();
    Ok(superclass.map_or(Value::Nil, Value::Class))
}

fn ancestors(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    let class = receiver_class(interp, receiver)?;
    let mut chain = Vec::new();
    for ancestor in ClassData::ancestors(&class) {
        let includes = ancestor.borrow().includes.clone();
        chain.push(Value::Class(ancestor));
        chain.extend(includes.into_iter().map(Value::Class));
    }
    Ok(Value::array(chain))
}

/// Public instance methods of the class and its ancestors, as sorted symbols.
fn instance_methods(interp: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 0)?;
    let class = receiver_class(interp, receiver)?;

    let mut names = FxHashSet::default();
    for ancestor in ClassData::ancestors(&class) {
        let data = ancestor.borrow();
        names.extend(data.public_method_names().cloned());
        for module in &data.includes {
            names.extend(module.borrow().public_method_names().cloned());
        }
    }

    let mut names: Vec<String> = names.into_iter().collect();
    names.sort();
    Ok(Value::array(
        names.iter().map(|name| interp.symbol(name)).collect(),
    ))
}
