//! Environment state: object space, globals, interned symbols and classes.
//!
//! Object space and globals are disjoint: `x` and `$x` never alias. Global
//! names are stored without the `$`.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::value::{ClassTable, SymbolValue, Value};

/// All mutable name bindings of one interpreter.
pub struct Environment {
    object_space: FxHashMap<String, Value>,
    globals: FxHashMap<String, Value>,
    symbols: FxHashMap<String, Rc<SymbolValue>>,
    classes: ClassTable,
}

impl Environment {
    pub fn new(classes: ClassTable) -> Self {
        Environment {
            object_space: FxHashMap::default(),
            globals: FxHashMap::default(),
            symbols: FxHashMap::default(),
            classes,
        }
    }

    /// Look up a bare name.
    #[inline]
    pub fn object(&self, name: &str) -> Option<Value> {
        self.object_space.get(name).cloned()
    }

    pub fn set_object(&mut self, name: impl Into<String>, value: Value) {
        self.object_space.insert(name.into(), value);
    }

    /// Look up a global by its name without `$`.
    #[inline]
    pub fn global(&self, name: &str) -> Option<Value> {
        self.globals.get(name).cloned()
    }

    pub fn set_global(&mut self, name: impl Into<String>, value: Value) {
        self.globals.insert(name.into(), value);
    }

    /// Object space first, then globals.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.object(name).or_else(|| self.global(name))
    }

    /// Return the canonical symbol for `name`, creating it on first use.
    pub fn intern(&mut self, name: &str) -> Value {
        if let Some(symbol) = self.symbols.get(name) {
            return Value::Symbol(Rc::clone(symbol));
        }
        let symbol = Rc::new(SymbolValue {
            name: name.to_string(),
        });
        self.symbols.insert(name.to_string(), Rc::clone(&symbol));
        Value::Symbol(symbol)
    }

    /// Interned symbol names, sorted.
    pub fn symbol_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.symbols.keys().cloned().collect();
        names.sort();
        names
    }

    /// Global names (without `$`), sorted.
    pub fn global_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.globals.keys().cloned().collect();
        names.sort();
        names
    }

    #[inline]
    pub fn classes(&self) -> &ClassTable {
        &self.classes
    }
}

#[cfg(test)]
mod tests;
