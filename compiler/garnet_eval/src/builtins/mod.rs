//! Builtin classes and the startup object space.
//!
//! Every builtin method is a plain `fn` with the `Method` body signature,
//! installed once when the interpreter is built. Methods receive their
//! arguments already evaluated; arity and argument types are checked here
//! and reported as `ArgumentError`/`TypeError`.
//!
//! # Module Structure
//!
//! - `object.rs`: `Kernel` methods shared by every object
//! - `class.rs`: methods of class values (`new`, `name`, ...)
//! - `array.rs`, `string.rs`, `numeric.rs`, `symbol.rs`: value classes
//! - `toplevel.rs`: singleton methods of the top-level receiver `main`
//! - `file.rs`, `process.rs`: class-level utilities

mod array;
mod class;
mod file;
mod numeric;
mod object;
mod process;
mod string;
mod symbol;
mod toplevel;

use std::rc::Rc;

use crate::environment::Environment;
use crate::errors::{self, EvalError, EvalResult};
use crate::value::{ClassData, ClassRef, ClassTable, Method, ObjectValue};
use crate::{Interpreter, Value};

pub(crate) use toplevel::main_object;

/// Signature shared by every builtin method.
type Builtin = fn(&mut Interpreter, &Value, &[Value]) -> EvalResult;

/// Builtin error classes, all under `StandardError`. `NoMethodError` is
/// created separately under `NameError`.
const ERROR_CLASSES: &[&str] = &[
    "ParseError",
    "NameError",
    "LoadError",
    "ArgumentError",
    "TypeError",
    "RuntimeError",
];

/// Subclasses of `Object` for builtin value types, with their factories.
const VALUE_CLASSES: &[(&str, Option<crate::value::Factory>)] = &[
    ("Array", Some(new_array)),
    ("String", Some(new_string)),
    ("Integer", None),
    ("Float", None),
    ("Symbol", None),
    ("TrueClass", None),
    ("FalseClass", None),
    ("NilClass", None),
    ("Method", None),
    ("File", None),
];

/// Object-space names bound to builtin classes at startup.
const GLOBAL_CLASS_NAMES: &[&str] = &[
    "Object",
    "Kernel",
    "File",
    "Process",
    "Array",
    "String",
    "Integer",
    "Float",
    "Symbol",
    "StandardError",
    "ParseError",
    "NameError",
    "NoMethodError",
    "LoadError",
    "ArgumentError",
    "TypeError",
    "RuntimeError",
];

/// Build the class hierarchy and install every builtin method.
pub(crate) fn core_classes() -> ClassTable {
    let basic_object = ClassData::new("BasicObject", None).into_ref();
    let kernel = ClassData::new("Kernel", None).into_ref();

    let mut object = ClassData::new("Object", Some(Rc::clone(&basic_object))).with_factory(new_object);
    object.include(Rc::clone(&kernel));
    let object = object.into_ref();

    let module = subclass("Module", &object);
    let class = subclass("Class", &module);

    let mut table = ClassTable::new(Rc::clone(&object), Rc::clone(&class));
    table.insert(basic_object);
    table.insert(Rc::clone(&kernel));
    table.insert(module);

    for &(name, factory) in VALUE_CLASSES {
        let mut data = ClassData::new(name, Some(Rc::clone(&object)));
        if let Some(factory) = factory {
            data = data.with_factory(factory);
        }
        table.insert(data.into_ref());
    }
    table.insert(ClassData::new("Process", None).into_ref());

    let standard_error = subclass("StandardError", &object);
    for name in ERROR_CLASSES {
        table.insert(subclass(name, &standard_error));
    }
    if let Some(name_error) = table.get("NameError") {
        table.insert(subclass("NoMethodError", &name_error));
    }
    table.insert(standard_error);

    for (alias, name) in [("True", "TrueClass"), ("False", "FalseClass"), ("Nil", "NilClass")] {
        if let Some(target) = table.get(name) {
            table.alias(alias, &target);
        }
    }

    object::install(&kernel);
    class::install(&class);
    let installers: [(&str, fn(&ClassRef)); 8] = [
        ("Array", array::install),
        ("String", string::install),
        ("Integer", numeric::install_integer),
        ("Float", numeric::install_float),
        ("Symbol", symbol::install),
        ("TrueClass", object::install_boolean),
        ("FalseClass", object::install_boolean),
        ("File", file::install),
    ];
    for (name, install) in installers {
        if let Some(target) = table.get(name) {
            install(&target);
        }
    }
    if let Some(process) = table.get("Process") {
        process::install(&process);
    }

    table
}

/// Bind `main` and the builtin class names into object space.
pub(crate) fn populate_object_space(env: &mut Environment, main: &Value) {
    env.set_object("main", main.clone());
    for name in GLOBAL_CLASS_NAMES {
        if let Some(class) = env.classes().get(name) {
            env.set_object(*name, Value::Class(class));
        }
    }
}

fn subclass(name: &str, superclass: &ClassRef) -> ClassRef {
    ClassData::new(name, Some(Rc::clone(superclass))).into_ref()
}

// Factories

fn new_object(class: &ClassRef) -> Value {
    Value::Object(Rc::new(ObjectValue::new(Rc::clone(class))))
}

fn new_array(_: &ClassRef) -> Value {
    Value::array(Vec::new())
}

fn new_string(_: &ClassRef) -> Value {
    Value::string("")
}

// Installation helpers

fn define(class: &ClassRef, name: &str, body: Builtin) {
    class
        .borrow_mut()
        .define_method(Rc::new(Method::public(name, body)));
}

fn define_singleton(class: &ClassRef, name: &str, body: Builtin) {
    class
        .borrow_mut()
        .define_singleton_method(Rc::new(Method::public(name, body)));
}

// Argument checking

fn check_arity(interp: &Interpreter, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(interp.attach_backtrace(errors::wrong_arg_count(args.len(), expected)))
    }
}

fn check_arity_range(
    interp: &Interpreter,
    args: &[Value],
    min: usize,
    max: usize,
) -> Result<(), EvalError> {
    if (min..=max).contains(&args.len()) {
        Ok(())
    } else {
        Err(interp.attach_backtrace(errors::wrong_arg_count(
            args.len(),
            format!("{min}..{max}"),
        )))
    }
}

/// The argument as a string, or a `TypeError`.
fn string_arg(interp: &Interpreter, value: &Value) -> Result<Rc<str>, EvalError> {
    match value {
        Value::Str(s) => Ok(Rc::clone(s)),
        other => Err(interp.attach_backtrace(errors::type_error(&conversion_name(other), "String"))),
    }
}

/// A symbol or string argument naming a method.
fn name_arg(interp: &Interpreter, value: &Value) -> Result<String, EvalError> {
    match value {
        Value::Symbol(sym) => Ok(sym.name.clone()),
        Value::Str(s) => Ok(s.to_string()),
        other => Err(interp.attach_backtrace(errors::type_error(&conversion_name(other), "Symbol"))),
    }
}

/// How a value is named in conversion errors: `nil`, `true` and `false`
/// by value, everything else by class.
fn conversion_name(value: &Value) -> String {
    match value {
        Value::Nil => "nil".to_string(),
        Value::True => "true".to_string(),
        Value::False => "false".to_string(),
        other => other.class_name(),
    }
}

/// Receiver of the wrong class, possible only when an embedder calls a
/// `Method` directly.
fn receiver_error(interp: &Interpreter, receiver: &Value, expected: &str) -> EvalError {
    interp.attach_backtrace(errors::type_error(&receiver.class_name(), expected))
}
