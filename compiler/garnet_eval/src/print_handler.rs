//! Destination of `puts` output.
//!
//! The driver prints to stdout. Tests install a buffer and read back what
//! the program printed with `get_output`.

use std::cell::RefCell;
use std::rc::Rc;

/// Output sink, dispatched by variant.
pub enum PrintHandlerImpl {
    /// Lines go to the process's stdout.
    Stdout,
    /// Lines accumulate in memory.
    Buffer(RefCell<String>),
}

impl PrintHandlerImpl {
    /// Emit `line` followed by a newline.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Buffer(buffer) => {
                let mut buffer = buffer.borrow_mut();
                buffer.push_str(line);
                buffer.push('\n');
            }
        }
    }

    /// Everything printed so far; always empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer(buffer) => buffer.borrow().clone(),
        }
    }
}

/// Handle shared between the interpreter and whoever inspects its output.
pub type SharedPrintHandler = Rc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Rc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Rc::new(PrintHandlerImpl::Buffer(RefCell::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_collects_lines_in_order() {
        let handler = buffer_handler();
        handler.println("first");
        handler.println("");
        handler.println("third");
        assert_eq!(handler.get_output(), "first\n\nthird\n");
    }

    #[test]
    fn clones_share_one_buffer() {
        let handler = buffer_handler();
        let writer = Rc::clone(&handler);
        writer.println("shared");
        assert_eq!(handler.get_output(), "shared\n");
    }

    #[test]
    fn stdout_keeps_nothing() {
        assert_eq!(stdout_handler().get_output(), "");
    }
}
