//! Runtime values and the object model.
//!
//! Every value can report its string form, the class it is an instance of,
//! and whether it responds to a method, without failing. Primitive values
//! carry no class pointer; their class is resolved by name through the
//! `ClassTable`, so the value graph never points back at classes it does
//! not own.
//!
//! # Module Structure
//!
//! - `mod.rs`: `Value` and the capability contract
//! - `class.rs`: `ClassData`, `ClassRef` and the `ClassTable`
//! - `method.rs`: `Method` and `Visibility`

mod class;
mod method;

use std::cell::RefCell;
use std::fmt::{self, Write as _};
use std::rc::Rc;

pub use class::{ClassData, ClassRef, ClassTable, Factory, MethodTable};
pub use method::{Method, NativeFn, Visibility};

use crate::errors::{cannot_define_method, EvalError};

/// Shared, mutable array storage.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// Array identity, for cycle detection.
pub(crate) type ArrayPtr = *const RefCell<Vec<Value>>;

/// A runtime value.
///
/// Cloning is cheap: every heap variant is reference counted.
#[derive(Clone)]
pub enum Value {
    Nil,
    True,
    False,
    Integer(i64),
    Float(f64),
    Str(Rc<str>),
    /// Interned; two symbols with the same name share one allocation.
    Symbol(Rc<SymbolValue>),
    Array(ArrayRef),
    Object(Rc<ObjectValue>),
    Class(ClassRef),
    Method(Rc<Method>),
    Error(Rc<EvalError>),
}

/// Payload of an interned symbol.
#[derive(Debug, PartialEq, Eq)]
pub struct SymbolValue {
    pub name: String,
}

/// An instance produced by a class factory.
pub struct ObjectValue {
    pub class: ClassRef,
    /// Fixed string form; `main` uses this.
    label: Option<String>,
    singleton_methods: RefCell<MethodTable>,
}

impl ObjectValue {
    pub fn new(class: ClassRef) -> Self {
        ObjectValue {
            class,
            label: None,
            singleton_methods: RefCell::new(MethodTable::default()),
        }
    }

    /// An object whose `to_s` and `inspect` are `label`.
    pub fn labeled(class: ClassRef, label: impl Into<String>) -> Self {
        ObjectValue {
            label: Some(label.into()),
            ..ObjectValue::new(class)
        }
    }

    pub fn define_singleton_method(&self, method: Rc<Method>) {
        self.singleton_methods
            .borrow_mut()
            .insert(method.name.clone(), method);
    }

    pub fn singleton_method(&self, name: &str) -> Option<Rc<Method>> {
        self.singleton_methods.borrow().get(name).cloned()
    }
}

impl Value {
    #[inline]
    pub fn boolean(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }

    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Rc::from(s.as_ref()))
    }

    pub fn array(values: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(values)))
    }

    pub fn class(class: ClassRef) -> Self {
        Value::Class(class)
    }

    pub fn error(err: EvalError) -> Self {
        Value::Error(Rc::new(err))
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Name of this value's class.
    pub fn class_name(&self) -> String {
        match self {
            Value::Nil => "NilClass".to_string(),
            Value::True => "TrueClass".to_string(),
            Value::False => "FalseClass".to_string(),
            Value::Integer(_) => "Integer".to_string(),
            Value::Float(_) => "Float".to_string(),
            Value::Str(_) => "String".to_string(),
            Value::Symbol(_) => "Symbol".to_string(),
            Value::Array(_) => "Array".to_string(),
            Value::Object(obj) => obj.class.borrow().name.clone(),
            Value::Class(_) => "Class".to_string(),
            Value::Method(_) => "Method".to_string(),
            Value::Error(err) => err.class_name().to_string(),
        }
    }

    /// The class this value is an instance of.
    pub fn class_of(&self, classes: &ClassTable) -> ClassRef {
        match self {
            Value::Object(obj) => Rc::clone(&obj.class),
            other => classes.resolve(&other.class_name()),
        }
    }

    /// Look up a method by name.
    ///
    /// Order: the receiver's singleton methods, then its class, the class's
    /// included modules, and on up the superclass chain. Class values look at
    /// their own singleton chain before the methods of `Class`.
    pub fn find_method(&self, name: &str, classes: &ClassTable) -> Option<Rc<Method>> {
        match self {
            Value::Object(obj) => obj
                .singleton_method(name)
                .or_else(|| ClassData::lookup_instance_method(&obj.class, name)),
            Value::Class(class) => ClassData::lookup_singleton_method(class, name)
                .or_else(|| ClassData::lookup_instance_method(classes.class(), name)),
            other => ClassData::lookup_instance_method(&other.class_of(classes), name),
        }
    }

    /// Whether a public method named `name` is reachable.
    pub fn responds_to(&self, name: &str, classes: &ClassTable) -> bool {
        self.find_method(name, classes)
            .is_some_and(|m| m.visibility == Visibility::Public)
    }

    /// Install a method.
    ///
    /// On a class the method becomes an instance method; on a plain object it
    /// becomes a singleton method. Other values cannot hold methods.
    pub fn add_method(&self, method: Rc<Method>) -> Result<(), EvalError> {
        match self {
            Value::Class(class) => {
                class.borrow_mut().define_method(method);
                Ok(())
            }
            Value::Object(obj) => {
                obj.define_singleton_method(method);
                Ok(())
            }
            other => Err(cannot_define_method(&other.class_name())),
        }
    }

    /// Identity comparison (`equal?`).
    pub fn same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil)
            | (Value::True, Value::True)
            | (Value::False, Value::False) => true,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => Rc::ptr_eq(a, b),
            (Value::Symbol(a), Value::Symbol(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Method(a), Value::Method(b)) => Rc::ptr_eq(a, b),
            (Value::Error(a), Value::Error(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Value equality as used by `include?`: strings, numbers and arrays by
    /// content, everything else by identity.
    ///
    /// Arrays that contain themselves compare equal when the recursion
    /// reaches a pair of arrays already being compared.
    pub fn equals(&self, other: &Value) -> bool {
        self.equals_with(other, &mut Vec::new())
    }

    #[expect(
        clippy::float_cmp,
        reason = "Ruby compares floats exactly"
    )]
    fn equals_with(&self, other: &Value, seen: &mut Vec<(ArrayPtr, ArrayPtr)>) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Integer(a), Value::Float(b)) | (Value::Float(b), Value::Integer(a)) => {
                #[expect(clippy::cast_precision_loss, reason = "mixed numeric comparison")]
                let a = *a as f64;
                a == *b
            }
            (Value::Array(a), Value::Array(b)) => {
                let pair = (Rc::as_ptr(a), Rc::as_ptr(b));
                if Rc::ptr_eq(a, b) || seen.contains(&pair) {
                    return true;
                }
                seen.push(pair);
                let (a, b) = (a.borrow(), b.borrow());
                let equal = a.len() == b.len()
                    && a.iter().zip(b.iter()).all(|(x, y)| x.equals_with(y, seen));
                seen.pop();
                equal
            }
            _ => self.same(other),
        }
    }

    /// String form (`to_s`).
    pub fn to_s(&self) -> String {
        match self {
            Value::Nil => String::new(),
            Value::True => "true".to_string(),
            Value::False => "false".to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(x) => format_float(*x),
            Value::Str(s) => s.to_string(),
            Value::Symbol(sym) => sym.name.clone(),
            Value::Array(_) => self.inspect(),
            Value::Object(obj) => match &obj.label {
                Some(label) => label.clone(),
                None => format!("#<{}>", obj.class.borrow().name),
            },
            Value::Class(class) => class.borrow().name.clone(),
            Value::Method(method) => format!("#<Method: {}>", method.name),
            Value::Error(err) => err.to_s(),
        }
    }

    /// Developer-facing form (`inspect`).
    pub fn inspect(&self) -> String {
        let mut out = String::new();
        self.inspect_into(&mut out, &mut Vec::new());
        out
    }

    /// `seen` holds the arrays currently being printed, so a self-containing
    /// array prints `[...]` instead of recursing forever.
    fn inspect_into(&self, out: &mut String, seen: &mut Vec<ArrayPtr>) {
        match self {
            Value::Nil => out.push_str("nil"),
            Value::Str(s) => {
                let _ = write!(out, "{:?}", &**s);
            }
            Value::Symbol(sym) => {
                out.push(':');
                out.push_str(&sym.name);
            }
            Value::Array(items) => {
                let ptr = Rc::as_ptr(items);
                if seen.contains(&ptr) {
                    out.push_str("[...]");
                    return;
                }
                seen.push(ptr);
                out.push('[');
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.inspect_into(out, seen);
                }
                out.push(']');
                seen.pop();
            }
            Value::Error(err) => {
                let _ = write!(out, "#<{}: {}>", err.class_name(), err);
            }
            other => out.push_str(&other.to_s()),
        }
    }
}

/// Floats always show a fractional part or an exponent (`2.0`, `1e20`).
fn format_float(x: f64) -> String {
    format!("{x:?}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_s())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}
