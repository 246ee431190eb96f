//! Garnet Eval - tree-walking evaluator and object model.
//!
//! This crate runs parsed Garnet programs: a small Ruby-like language where
//! every value is an object, classes are open, and program units are pulled
//! in at run time with `require`.
//!
//! # Architecture
//!
//! - `Interpreter`: owns all state and evaluates nodes against a receiver
//! - `Environment`: object space, globals, interned symbols, class table
//! - `CallStack`: method frames, captured into error backtraces
//! - `Value`: runtime values; classes and methods are values too
//! - builtin classes installed at construction (`Kernel`, `Array`, `File`, ...)
//!
//! Errors are values: an `EvalError` is the `Err` side of every evaluation
//! and can also be held as `Value::Error`.
//!
//! ```text
//! let mut interpreter = Interpreter::new("-");
//! let value = interpreter.run("x = :sym; x.to_s")?;
//! assert_eq!(value.to_s(), "sym");
//! ```

mod builtins;
pub mod diagnostics;
pub mod environment;
pub mod errors;
pub mod interpreter;
pub mod print_handler;
pub mod value;

pub use diagnostics::{CallStack, EvalBacktrace};
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{FrameGuard, Interpreter, InterpreterBuilder, UnitGuard};
pub use print_handler::{buffer_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler};
pub use value::{
    ArrayRef, ClassData, ClassRef, ClassTable, Method, ObjectValue, SymbolValue, Value, Visibility,
};
