//! Syntax-tree vocabulary.
//!
//! The tree is an ordinary owned tree: program units are small and the
//! evaluator walks each node once per evaluation, so there is no arena.
//! Statement sequences are `Vec<Node>`.

use std::fmt;

/// A sequence of statements.
pub type Nodes = Vec<Node>;

/// A syntax node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// `'text'`
    SimpleString(String),
    /// `"text"`; `#{}` sequences are kept as written
    InterpolatedString(String),
    ConstantInt(i64),
    ConstantFloat(f64),
    Boolean(bool),
    /// `$name`, stored without the `$`
    GlobalVariable(String),
    /// `:name`, stored without the colon
    Symbol(String),
    /// An unqualified name: local, constant, `nil` or `self`
    BareReference(String),
    /// `__FILE__`
    FileNameConstReference,
    FuncDecl(FuncDecl),
    CallExpression(CallExpression),
    Assignment(Assignment),
    IfBlock(IfBlock),
    Begin(Begin),
    ClassDecl(ClassDecl),
    /// `return` with an optional value
    Return(Option<Box<Node>>),
}

impl Node {
    /// Short name of the node kind, for logs and fault messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::SimpleString(_) => "SimpleString",
            Node::InterpolatedString(_) => "InterpolatedString",
            Node::ConstantInt(_) => "ConstantInt",
            Node::ConstantFloat(_) => "ConstantFloat",
            Node::Boolean(_) => "Boolean",
            Node::GlobalVariable(_) => "GlobalVariable",
            Node::Symbol(_) => "Symbol",
            Node::BareReference(_) => "BareReference",
            Node::FileNameConstReference => "FileNameConstReference",
            Node::FuncDecl(_) => "FuncDecl",
            Node::CallExpression(_) => "CallExpression",
            Node::Assignment(_) => "Assignment",
            Node::IfBlock(_) => "IfBlock",
            Node::Begin(_) => "Begin",
            Node::ClassDecl(_) => "ClassDecl",
            Node::Return(_) => "Return",
        }
    }

    /// Bare reference shorthand, used heavily by the parser tests.
    pub fn bare(name: impl Into<String>) -> Self {
        Node::BareReference(name.into())
    }
}

/// `def name(params) ... end`
#[derive(Clone, Debug, PartialEq)]
pub struct FuncDecl {
    pub name: String,
    pub params: Vec<String>,
    pub body: Nodes,
}

/// `target.func(args)` or `func(args)`
#[derive(Clone, Debug, PartialEq)]
pub struct CallExpression {
    /// Explicit receiver; `None` means the current context.
    pub target: Option<Box<Node>>,
    pub func: String,
    pub args: Nodes,
}

impl CallExpression {
    /// Call on the implicit receiver.
    pub fn implicit(func: impl Into<String>, args: Nodes) -> Self {
        CallExpression {
            target: None,
            func: func.into(),
            args,
        }
    }

    /// Call on an explicit receiver.
    pub fn on(target: Node, func: impl Into<String>, args: Nodes) -> Self {
        CallExpression {
            target: Some(Box::new(target)),
            func: func.into(),
            args,
        }
    }
}

/// `lhs = rhs`
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub lhs: Box<Node>,
    pub rhs: Box<Node>,
}

/// `if condition ... else ... end`
#[derive(Clone, Debug, PartialEq)]
pub struct IfBlock {
    pub condition: Box<Node>,
    pub body: Nodes,
    /// Empty when there is no `else`; `elsif` nests another `IfBlock` here.
    pub else_body: Nodes,
}

/// `begin ... rescue Name ... end`
#[derive(Clone, Debug, PartialEq)]
pub struct Begin {
    pub body: Nodes,
    pub rescue: Vec<Rescue>,
}

/// One `rescue ClassName` clause.
#[derive(Clone, Debug, PartialEq)]
pub struct Rescue {
    /// Declared exception class name, compared textually.
    pub exception_class: String,
    pub body: Nodes,
}

/// `class Name < Super ... end`
#[derive(Clone, Debug, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    pub superclass: Option<String>,
    pub body: Nodes,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::SimpleString(s) => write!(f, "'{s}'"),
            Node::InterpolatedString(s) => write!(f, "\"{s}\""),
            Node::ConstantInt(n) => write!(f, "{n}"),
            Node::ConstantFloat(x) => write!(f, "{x:?}"),
            Node::Boolean(b) => write!(f, "{b}"),
            Node::GlobalVariable(name) => write!(f, "${name}"),
            Node::Symbol(name) => write!(f, ":{name}"),
            Node::BareReference(name) => f.write_str(name),
            Node::FileNameConstReference => f.write_str("__FILE__"),
            Node::CallExpression(call) => {
                if let Some(target) = &call.target {
                    write!(f, "{target}.")?;
                }
                write!(f, "{}(", call.func)?;
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Node::Assignment(a) => write!(f, "{} = {}", a.lhs, a.rhs),
            Node::FuncDecl(d) => write!(f, "def {}", d.name),
            Node::IfBlock(b) => write!(f, "if {}", b.condition),
            Node::Begin(_) => f.write_str("begin"),
            Node::ClassDecl(c) => write!(f, "class {}", c.name),
            Node::Return(_) => f.write_str("return"),
        }
    }
}

#[cfg(test)]
mod tests;
