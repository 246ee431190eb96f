//! RAII guards for interpreter state that must be restored on every exit path.
//!
//! Both guards hold `&mut Interpreter` and implement `Deref`/`DerefMut`, so
//! evaluation continues through the guard and the cleanup in `Drop` runs on
//! success, on error and during unwinding.
//!
//! ```text
//! let mut frame = interpreter.frame("require");
//! frame.run(source)?;
//! // frame popped here
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Pops one call-stack frame on drop.
pub struct FrameGuard<'a> {
    interpreter: &'a mut Interpreter,
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.interpreter.call_stack.pop();
    }
}

impl Deref for FrameGuard<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for FrameGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

/// Restores the previous current-unit name on drop.
pub struct UnitGuard<'a> {
    interpreter: &'a mut Interpreter,
    previous: String,
}

impl Drop for UnitGuard<'_> {
    fn drop(&mut self) {
        tracing::debug!(restored = %self.previous, "leaving unit");
        self.interpreter.current_file = std::mem::take(&mut self.previous);
    }
}

impl Deref for UnitGuard<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for UnitGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a frame labeled `label`; it is popped when the guard drops.
    pub fn frame(&mut self, label: impl Into<String>) -> FrameGuard<'_> {
        self.call_stack.push(label);
        FrameGuard { interpreter: self }
    }

    /// Make `file` the current unit until the guard drops.
    pub fn enter_unit(&mut self, file: impl Into<String>) -> UnitGuard<'_> {
        let file = file.into();
        tracing::debug!(unit = %file, "entering unit");
        let previous = std::mem::replace(&mut self.current_file, file);
        UnitGuard {
            interpreter: self,
            previous,
        }
    }
}
