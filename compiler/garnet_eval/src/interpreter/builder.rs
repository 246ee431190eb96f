//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use crate::builtins;
use crate::diagnostics::CallStack;
use crate::environment::Environment;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::Value;

use super::Interpreter;

/// Unit name used when none is configured.
const DEFAULT_FILE: &str = "-";

/// Builder for creating Interpreter instances.
///
/// ```text
/// let mut interpreter = InterpreterBuilder::new()
///     .file("(garnet irb)")
///     .load_path(["/home/me/.garnet"])
///     .print_handler(buffer_handler())
///     .build();
/// ```
pub struct InterpreterBuilder {
    file: String,
    load_path: Vec<String>,
    argv: Vec<String>,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            file: DEFAULT_FILE.to_string(),
            load_path: Vec::new(),
            argv: Vec::new(),
            print_handler: None,
        }
    }

    /// Set the initial unit name (`__FILE__` and `$0`).
    #[must_use]
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Set the initial `$LOAD_PATH` directories, searched in order.
    #[must_use]
    pub fn load_path<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.load_path = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the values exposed as `ARGV`.
    #[must_use]
    pub fn argv<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.argv = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the print handler used by `puts`. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Build the interpreter with the builtin classes, object space and
    /// globals in place.
    pub fn build(self) -> Interpreter {
        let classes = builtins::core_classes();
        let mut env = Environment::new(classes);
        let main = builtins::main_object(env.classes());

        builtins::populate_object_space(&mut env, &main);
        env.set_object(
            "ARGV",
            Value::array(self.argv.into_iter().map(Value::string).collect()),
        );

        let load_path = Value::array(self.load_path.into_iter().map(Value::string).collect());
        env.set_global("LOAD_PATH", load_path.clone());
        env.set_global(":", load_path);

        let loaded_features = Value::array(Vec::new());
        env.set_global("LOADED_FEATURES", loaded_features.clone());
        env.set_global("\"", loaded_features);

        let program_name = Value::string(&self.file);
        env.set_global("PROGRAM_NAME", program_name.clone());
        env.set_global("0", program_name);

        Interpreter {
            env,
            call_stack: CallStack::new(),
            current_file: self.file,
            main,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
