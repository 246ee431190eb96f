//! Classes: shared, mutable method tables with single inheritance.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::{Method, Value, Visibility};

/// Method name to method.
pub type MethodTable = FxHashMap<String, Rc<Method>>;

/// Shared reference to a class. Classes live as long as the interpreter.
pub type ClassRef = Rc<RefCell<ClassData>>;

/// Produces a fresh instance for `Class#new`.
pub type Factory = fn(&ClassRef) -> Value;

/// A class or module.
pub struct ClassData {
    pub name: String,
    pub superclass: Option<ClassRef>,
    /// Modules mixed in with `include`, searched after the class's own methods.
    pub includes: Vec<ClassRef>,
    methods: MethodTable,
    singleton_methods: MethodTable,
    /// `None` means instances cannot be created with `new`.
    factory: Option<Factory>,
}

impl ClassData {
    pub fn new(name: impl Into<String>, superclass: Option<ClassRef>) -> Self {
        ClassData {
            name: name.into(),
            superclass,
            includes: Vec::new(),
            methods: MethodTable::default(),
            singleton_methods: MethodTable::default(),
            factory: None,
        }
    }

    /// Wrap into a shared reference.
    pub fn into_ref(self) -> ClassRef {
        Rc::new(RefCell::new(self))
    }

    #[must_use]
    pub fn with_factory(mut self, factory: Factory) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn factory(&self) -> Option<Factory> {
        self.factory
    }

    pub fn include(&mut self, module: ClassRef) {
        self.includes.push(module);
    }

    /// Install or replace an instance method.
    pub fn define_method(&mut self, method: Rc<Method>) {
        self.methods.insert(method.name.clone(), method);
    }

    /// Install or replace a class-level method.
    pub fn define_singleton_method(&mut self, method: Rc<Method>) {
        self.singleton_methods.insert(method.name.clone(), method);
    }

    /// Names of this class's own public instance methods, unordered.
    pub fn public_method_names(&self) -> impl Iterator<Item = &String> {
        self.methods
            .values()
            .filter(|m| m.visibility == Visibility::Public)
            .map(|m| &m.name)
    }

    /// Search `class`, its included modules, then its ancestors.
    ///
    /// Never cached: methods added later are visible to the next lookup.
    pub fn lookup_instance_method(class: &ClassRef, name: &str) -> Option<Rc<Method>> {
        let mut current = Some(Rc::clone(class));
        while let Some(class) = current {
            let data = class.borrow();
            if let Some(method) = data.methods.get(name) {
                return Some(Rc::clone(method));
            }
            for module in &data.includes {
                if let Some(method) = Self::lookup_instance_method(module, name) {
                    return Some(method);
                }
            }
            current = data.superclass.clone();
        }
        None
    }

    /// Search class-level methods of `class` and its ancestors.
    pub fn lookup_singleton_method(class: &ClassRef, name: &str) -> Option<Rc<Method>> {
        let mut current = Some(Rc::clone(class));
        while let Some(class) = current {
            let data = class.borrow();
            if let Some(method) = data.singleton_methods.get(name) {
                return Some(Rc::clone(method));
            }
            current = data.superclass.clone();
        }
        None
    }

    /// `class` followed by its superclasses, nearest first.
    pub fn ancestors(class: &ClassRef) -> Vec<ClassRef> {
        let mut chain = Vec::new();
        let mut current = Some(Rc::clone(class));
        while let Some(class) = current {
            current = class.borrow().superclass.clone();
            chain.push(class);
        }
        chain
    }
}

/// The builtin class table, populated once at interpreter construction.
pub struct ClassTable {
    by_name: FxHashMap<String, ClassRef>,
    object: ClassRef,
    class: ClassRef,
}

impl ClassTable {
    /// `object` and `class` are the roots every lookup falls back to.
    pub fn new(object: ClassRef, class: ClassRef) -> Self {
        let mut table = ClassTable {
            by_name: FxHashMap::default(),
            object: Rc::clone(&object),
            class: Rc::clone(&class),
        };
        table.insert(object);
        table.insert(class);
        table
    }

    /// Register a class under its own name.
    pub fn insert(&mut self, class: ClassRef) {
        let name = class.borrow().name.clone();
        self.by_name.insert(name, class);
    }

    /// Register a class under an additional name.
    pub fn alias(&mut self, alias: impl Into<String>, class: &ClassRef) {
        self.by_name.insert(alias.into(), Rc::clone(class));
    }

    pub fn get(&self, name: &str) -> Option<ClassRef> {
        self.by_name.get(name).cloned()
    }

    /// Like `get`, falling back to `Object` for unknown names.
    pub fn resolve(&self, name: &str) -> ClassRef {
        self.get(name).unwrap_or_else(|| Rc::clone(&self.object))
    }

    pub fn object(&self) -> &ClassRef {
        &self.object
    }

    /// The class of class values.
    pub fn class(&self) -> &ClassRef {
        &self.class
    }
}
