//! Diagnostic infrastructure for the evaluator.
//!
//! This module provides:
//! - `CallStack`, the live list of active frame labels
//! - `EvalBacktrace`, a snapshot of that list attached to errors
//!
//! Frames are pushed when a method is invoked or a program unit starts
//! running, and popped on every exit path by `FrameGuard`.

use std::fmt;

/// Live call stack for the interpreter.
///
/// The last element is the innermost frame.
///
/// ```text
/// stack.push("require");
/// // ... evaluate the loaded unit ...
/// stack.pop();
/// ```
#[derive(Clone, Debug, Default)]
pub struct CallStack {
    frames: Vec<String>,
}

impl CallStack {
    /// Create an empty call stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a frame; it becomes the innermost one.
    pub fn push(&mut self, label: impl Into<String>) {
        self.frames.push(label.into());
    }

    /// Pop the innermost frame.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the stack is empty. In release mode,
    /// this is a no-op on an empty stack.
    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    /// Current call depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Snapshot the stack, innermost frame first.
    pub fn capture(&self) -> EvalBacktrace {
        EvalBacktrace::new(self.frames.iter().rev().cloned().collect())
    }

    /// Render the stack as a backtrace string; empty when no frame is active.
    pub fn render(&self) -> String {
        self.capture().to_string()
    }
}

/// A captured call stack, innermost frame first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<String>,
}

impl EvalBacktrace {
    /// Create a backtrace from frame labels, innermost first.
    pub fn new(frames: Vec<String>) -> Self {
        Self { frames }
    }

    /// Check if the backtrace is empty.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, name) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {name}")?;
        }
        Ok(())
    }
}
