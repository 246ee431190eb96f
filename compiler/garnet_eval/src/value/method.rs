//! Callable methods.

use std::fmt;
use std::rc::Rc;

use crate::{EvalResult, Interpreter, Value};

/// Body of a method: interpreter, receiver, evaluated arguments.
pub type NativeFn = Rc<dyn Fn(&mut Interpreter, &Value, &[Value]) -> EvalResult>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Public,
    /// Callable only without an explicit receiver.
    Private,
}

/// A named callable installed in a method table.
pub struct Method {
    pub name: String,
    pub visibility: Visibility,
    body: NativeFn,
}

impl Method {
    pub fn new(
        name: impl Into<String>,
        visibility: Visibility,
        body: impl Fn(&mut Interpreter, &Value, &[Value]) -> EvalResult + 'static,
    ) -> Self {
        Method {
            name: name.into(),
            visibility,
            body: Rc::new(body),
        }
    }

    pub fn public(
        name: impl Into<String>,
        body: impl Fn(&mut Interpreter, &Value, &[Value]) -> EvalResult + 'static,
    ) -> Self {
        Self::new(name, Visibility::Public, body)
    }

    pub fn private(
        name: impl Into<String>,
        body: impl Fn(&mut Interpreter, &Value, &[Value]) -> EvalResult + 'static,
    ) -> Self {
        Self::new(name, Visibility::Private, body)
    }

    /// Invoke the body. Frame bookkeeping is the caller's job.
    pub fn call(&self, interpreter: &mut Interpreter, receiver: &Value, args: &[Value]) -> EvalResult {
        (self.body)(interpreter, receiver, args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}
