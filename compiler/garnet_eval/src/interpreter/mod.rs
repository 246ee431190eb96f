//! Tree-walking interpreter.
//!
//! Statements are evaluated in order against a receiver ("context"). The
//! value of a sequence is the value of its last statement; the first error
//! ends the sequence and propagates to the nearest rescue or call boundary.
//!
//! # Module Structure
//!
//! - `mod.rs`: `Interpreter` state, program entry and node evaluation
//! - `builder.rs`: `InterpreterBuilder`
//! - `scope_guard.rs`: RAII guards for call frames and the current unit
//! - `loader.rs`: `require` and `load`

mod builder;
mod loader;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::{FrameGuard, UnitGuard};

use std::path::Path;
use std::rc::Rc;

use garnet_ir::{Begin, CallExpression, IfBlock, Node};
use garnet_stack::ensure_sufficient_stack;

use crate::diagnostics::CallStack;
use crate::environment::Environment;
use crate::errors::{self, EvalError, EvalResult};
use crate::print_handler::SharedPrintHandler;
use crate::value::{ClassTable, Method, Visibility};
use crate::Value;

/// Label of the frame pushed by program entry.
const MAIN_FRAME: &str = "main";

/// The evaluator and everything it mutates.
///
/// Single-threaded; independent runs use independent interpreters.
pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) call_stack: CallStack,
    /// Name of the unit being evaluated; `__FILE__` reads it.
    pub(crate) current_file: String,
    /// The top-level receiver.
    pub(crate) main: Value,
    pub(crate) print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Create an interpreter with default configuration.
    pub fn new(file: impl Into<String>) -> Self {
        InterpreterBuilder::new().file(file).build()
    }

    /// Parse and evaluate `source` with `main` as the receiver.
    ///
    /// Parse failures become a `ParseError` tagged with the current unit name.
    pub fn run(&mut self, source: &str) -> EvalResult {
        let nodes = garnet_parse::parse_source(source).map_err(|err| {
            tracing::debug!(unit = %self.current_file, %err, "parse failed");
            self.attach_backtrace(errors::parse_error(&self.current_file, &err))
        })?;

        let main = self.main.clone();
        let mut frame = self.frame(MAIN_FRAME);
        frame.eval_statements(&nodes, &main)
    }

    /// Read `path` and run it with `path` as the current unit.
    pub fn run_file(&mut self, path: &Path) -> EvalResult {
        let name = path.display().to_string();
        let source = std::fs::read_to_string(path)
            .map_err(|err| self.attach_backtrace(errors::load_read_error(&name, &err)))?;
        self.enter_unit(name).run(&source)
    }

    /// Evaluate `nodes` in order against `context`; an empty sequence is `nil`.
    pub fn eval_statements(&mut self, nodes: &[Node], context: &Value) -> EvalResult {
        let mut result = Value::Nil;
        for node in nodes {
            result = self.eval_node(node, context)?;
        }
        Ok(result)
    }

    /// Evaluate one node.
    ///
    /// Uses `ensure_sufficient_stack` so nesting depth is bounded by memory
    /// rather than the initial thread stack.
    pub fn eval_node(&mut self, node: &Node, context: &Value) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_node_inner(node, context))
    }

    fn eval_node_inner(&mut self, node: &Node, context: &Value) -> EvalResult {
        tracing::trace!(kind = node.kind_name(), "eval");
        match node {
            Node::SimpleString(s) | Node::InterpolatedString(s) => Ok(Value::string(s)),
            Node::ConstantInt(n) => Ok(Value::Integer(*n)),
            Node::ConstantFloat(x) => Ok(Value::Float(*x)),
            Node::Boolean(b) => Ok(Value::boolean(*b)),
            Node::GlobalVariable(name) => Ok(self.env.global(name).unwrap_or(Value::Nil)),
            Node::Symbol(name) => Ok(self.env.intern(name)),
            Node::BareReference(name) => self.eval_bare_reference(name, context),
            Node::FileNameConstReference => Ok(Value::string(&self.current_file)),
            Node::FuncDecl(decl) => self.eval_func_decl(&decl.name),
            Node::CallExpression(call) => self.eval_call(call, context),
            Node::Assignment(assign) => {
                let value = self.eval_node(&assign.rhs, context)?;
                match &*assign.lhs {
                    Node::BareReference(name) => self.env.set_object(name.as_str(), value.clone()),
                    Node::GlobalVariable(name) => self.env.set_global(name.as_str(), value.clone()),
                    other => panic!("cannot assign to a {} node", other.kind_name()),
                }
                Ok(value)
            }
            Node::IfBlock(block) => self.eval_if(block, context),
            Node::Begin(begin) => self.eval_begin(begin, context),
            Node::ClassDecl(_) | Node::Return(_) => {
                panic!("evaluation of {} nodes is not implemented", node.kind_name())
            }
        }
    }

    /// `nil` and `self` are fixed; every other name comes from object space.
    fn eval_bare_reference(&mut self, name: &str, context: &Value) -> EvalResult {
        match name {
            "nil" => return Ok(Value::Nil),
            "self" => return Ok(context.clone()),
            _ => {}
        }
        match self.env.object(name) {
            Some(value) => Ok(value),
            None => Err(self.attach_backtrace(errors::name_error(
                name,
                &context.to_s(),
                &context.class_name(),
            ))),
        }
    }

    /// Method bodies are not evaluated: the declaration installs a private
    /// method on `Kernel` that returns `nil`.
    fn eval_func_decl(&mut self, name: &str) -> EvalResult {
        tracing::warn!(method = name, "method body discarded; installing a no-op");
        let method = Rc::new(Method::private(name, |_, _, _| Ok(Value::Nil)));
        let kernel = self.get("Kernel")?;
        kernel
            .add_method(Rc::clone(&method))
            .map_err(|err| self.attach_backtrace(err))?;
        Ok(Value::Method(method))
    }

    #[tracing::instrument(level = "debug", skip(self, call, context), fields(method = %call.func))]
    fn eval_call(&mut self, call: &CallExpression, context: &Value) -> EvalResult {
        let receiver = match &call.target {
            Some(target) => self.eval_node(target, context)?,
            None => context.clone(),
        };

        if receiver.is_nil() {
            return Err(self.attach_backtrace(errors::no_method_error(&call.func, "nil", "NilClass")));
        }

        let Some(method) = receiver.find_method(&call.func, self.env.classes()) else {
            return Err(self.attach_backtrace(errors::name_error(
                &call.func,
                &receiver.to_s(),
                &receiver.class_name(),
            )));
        };

        if method.visibility == Visibility::Private && call.target.is_some() {
            return Err(self.attach_backtrace(errors::private_method_error(
                &call.func,
                &receiver.to_s(),
                &receiver.class_name(),
            )));
        }

        let args = call
            .args
            .iter()
            .map(|arg| self.eval_node(arg, context))
            .collect::<Result<Vec<_>, _>>()?;

        let mut frame = self.frame(call.func.as_str());
        method.call(&mut frame, &receiver, &args)
    }

    /// Truthiness is decided from the condition's shape; the condition
    /// itself is never evaluated.
    fn eval_if(&mut self, block: &IfBlock, context: &Value) -> EvalResult {
        if is_truthy(&block.condition) {
            self.eval_statements(&block.body, context)
        } else {
            self.eval_statements(&block.else_body, context)
        }
    }

    /// Clauses are tried in order; the first whose body succeeds wins.
    fn eval_begin(&mut self, begin: &Begin, context: &Value) -> EvalResult {
        let mut failure = match self.eval_statements(&begin.body, context) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        let raised = failure.to_s();
        for clause in begin.rescue.iter().filter(|c| c.exception_class == raised) {
            tracing::debug!(class = %clause.exception_class, "rescuing");
            match self.eval_statements(&clause.body, context) {
                Ok(value) => return Ok(value),
                Err(err) => failure = err,
            }
        }

        Err(failure)
    }

    /// Attach the current call stack to `err` unless it already has one.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        err.with_backtrace(self.call_stack.capture())
    }

    /// Write one line through the print handler.
    pub fn println(&self, line: &str) {
        self.print_handler.println(line);
    }

    // Accessors

    /// Resolve `name` in object space, then globals.
    pub fn get(&self, name: &str) -> Result<Value, EvalError> {
        self.env
            .get(name)
            .ok_or_else(|| self.attach_backtrace(errors::undefined(name)))
    }

    /// Like `get`, without an error.
    pub fn must_get(&self, name: &str) -> Option<Value> {
        self.env.get(name)
    }

    /// Bind `name` in object space.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.env.set_object(name, value);
    }

    /// Canonical symbol for `name`.
    pub fn symbol(&mut self, name: &str) -> Value {
        self.env.intern(name)
    }

    /// Interned symbol names, sorted.
    pub fn symbols(&self) -> Vec<String> {
        self.env.symbol_names()
    }

    /// Global names (without `$`), sorted.
    pub fn globals(&self) -> Vec<String> {
        self.env.global_names()
    }

    pub fn global(&self, name: &str) -> Option<Value> {
        self.env.global(name)
    }

    pub fn set_global(&mut self, name: impl Into<String>, value: Value) {
        self.env.set_global(name, value);
    }

    pub fn classes(&self) -> &ClassTable {
        self.env.classes()
    }

    pub fn current_file(&self) -> &str {
        &self.current_file
    }

    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }
}

/// `Boolean(b)` is `b`, a bare `nil` is false, anything else is true.
fn is_truthy(condition: &Node) -> bool {
    match condition {
        Node::Boolean(b) => *b,
        Node::BareReference(name) => name != "nil",
        _ => true,
    }
}

#[cfg(test)]
mod tests;
