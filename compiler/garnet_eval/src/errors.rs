//! Language-level errors and their centralized constructors.
//!
//! An `EvalError` travels two ways: as the `Err` side of `EvalResult`, and
//! as `Value::Error` so rescue clauses can inspect it. Rescue matching
//! compares the clause's class name with [`EvalError::to_s`], which is the
//! class name for builtin kinds and the message for `raise`d errors.
//!
//! Construct errors through the factory functions below rather than by
//! building `EvalErrorKind` directly.

use std::fmt::Display;

use garnet_parse::ParseError;

use crate::diagnostics::EvalBacktrace;
use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
///
/// `Display` produces the human-readable message printed by the driver.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("parse error")]
    Parse { file: String, detail: String },

    #[error("NameError: undefined local variable or method `{name}' for {receiver}:{class}")]
    Name {
        name: String,
        receiver: String,
        class: String,
    },

    /// Failed `Interpreter::get`.
    #[error("'{name}' is undefined")]
    Undefined { name: String },

    #[error("NoMethodError: undefined method `{method}' for {receiver}:{class}")]
    NoMethod {
        method: String,
        receiver: String,
        class: String,
    },

    #[error("NoMethodError: private method `{method}' called for {receiver}:{class}")]
    PrivateCall {
        method: String,
        receiver: String,
        class: String,
    },

    #[error("LoadError: cannot load such file -- {name}")]
    Load { name: String },

    /// A unit was found but could not be read.
    #[error("LoadError: cannot read {name} -- {detail}")]
    LoadRead { name: String, detail: String },

    #[error("ArgumentError: wrong number of arguments (given {given}, expected {expected})")]
    Argument { given: usize, expected: String },

    #[error("TypeError: no implicit conversion of {given} into {expected}")]
    Type { given: String, expected: String },

    #[error("TypeError: can't define singleton method for {class}")]
    CannotDefine { class: String },

    #[error("{message}")]
    Runtime { message: String },
}

impl EvalErrorKind {
    /// Name of the class this kind of error is an instance of.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "ParseError",
            Self::Name { .. } | Self::Undefined { .. } => "NameError",
            Self::NoMethod { .. } | Self::PrivateCall { .. } => "NoMethodError",
            Self::Load { .. } | Self::LoadRead { .. } => "LoadError",
            Self::Argument { .. } => "ArgumentError",
            Self::Type { .. } | Self::CannotDefine { .. } => "TypeError",
            Self::Runtime { .. } => "RuntimeError",
        }
    }
}

/// A language-level error: a Rust error and a Ruby-visible value at once.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Call stack at the error site, innermost frame first.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            backtrace: None,
        }
    }

    /// String form used for rescue matching.
    pub fn to_s(&self) -> String {
        match &self.kind {
            EvalErrorKind::Runtime { message } => message.clone(),
            other => other.class_name().to_string(),
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    /// Attach a backtrace unless one is already present.
    ///
    /// The first capture wins, so errors keep the stack of the site that
    /// raised them as they propagate outward.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        if self.backtrace.is_none() && !backtrace.is_empty() {
            self.backtrace = Some(backtrace);
        }
        self
    }

    /// Rendered backtrace, or an empty string.
    pub fn backtrace_string(&self) -> String {
        self.backtrace
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

// Parse Errors

/// A unit failed to parse.
#[cold]
pub fn parse_error(file: &str, err: &ParseError) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Parse {
        file: file.to_string(),
        detail: err.to_string(),
    })
}

// Name Resolution Errors

/// Unresolved bare name or method.
#[cold]
pub fn name_error(name: &str, receiver: &str, class: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Name {
        name: name.to_string(),
        receiver: receiver.to_string(),
        class: class.to_string(),
    })
}

/// Name absent from both object space and globals.
#[cold]
pub fn undefined(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Undefined {
        name: name.to_string(),
    })
}

// Method Call Errors

#[cold]
pub fn no_method_error(method: &str, receiver: &str, class: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoMethod {
        method: method.to_string(),
        receiver: receiver.to_string(),
        class: class.to_string(),
    })
}

/// Private method reached through an explicit receiver.
#[cold]
pub fn private_method_error(method: &str, receiver: &str, class: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::PrivateCall {
        method: method.to_string(),
        receiver: receiver.to_string(),
        class: class.to_string(),
    })
}

/// `expected` is rendered as-is, so ranges like `0..1` work too.
#[cold]
pub fn wrong_arg_count(given: usize, expected: impl Display) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Argument {
        given,
        expected: expected.to_string(),
    })
}

#[cold]
pub fn type_error(given: &str, expected: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Type {
        given: given.to_string(),
        expected: expected.to_string(),
    })
}

/// Methods can only be installed on classes and plain objects.
#[cold]
pub fn cannot_define_method(class: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CannotDefine {
        class: class.to_string(),
    })
}

// Loader Errors

#[cold]
pub fn load_error(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Load {
        name: name.to_string(),
    })
}

#[cold]
pub fn load_read_error(name: &str, err: &std::io::Error) -> EvalError {
    EvalError::from_kind(EvalErrorKind::LoadRead {
        name: name.to_string(),
        detail: err.to_string(),
    })
}

// Raised Errors

/// Error raised by program code; its string form is `message`.
#[cold]
pub fn runtime_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Runtime {
        message: message.into(),
    })
}
