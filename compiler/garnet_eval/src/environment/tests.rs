use super::*;
use crate::value::ClassData;
use pretty_assertions::assert_eq;

fn empty_env() -> Environment {
    let object = ClassData::new("Object", None).into_ref();
    let class = ClassData::new("Class", Some(Rc::clone(&object))).into_ref();
    Environment::new(ClassTable::new(object, class))
}

#[test]
fn object_space_and_globals_are_disjoint() {
    let mut env = empty_env();
    env.set_object("x", Value::Integer(1));
    env.set_global("x", Value::Integer(2));

    assert!(matches!(env.object("x"), Some(Value::Integer(1))));
    assert!(matches!(env.global("x"), Some(Value::Integer(2))));
}

#[test]
fn get_prefers_object_space() {
    let mut env = empty_env();
    env.set_global("only_global", Value::True);
    env.set_global("both", Value::False);
    env.set_object("both", Value::Nil);

    assert!(matches!(env.get("only_global"), Some(Value::True)));
    assert!(matches!(env.get("both"), Some(Value::Nil)));
    assert!(env.get("neither").is_none());
}

#[test]
fn symbols_are_interned() {
    let mut env = empty_env();
    let (Value::Symbol(a), Value::Symbol(b), Value::Symbol(c)) =
        (env.intern("foo"), env.intern("foo"), env.intern("bar"))
    else {
        panic!("intern must return symbols");
    };

    assert!(Rc::ptr_eq(&a, &b));
    assert!(!Rc::ptr_eq(&a, &c));
    assert_eq!(env.symbol_names(), vec!["bar".to_string(), "foo".to_string()]);
}

#[test]
fn class_table_lookup() {
    let env = empty_env();
    assert!(env.classes().get("Object").is_some());
    assert!(env.classes().get("Nope").is_none());
    assert_eq!(env.classes().resolve("Nope").borrow().name, "Object");
}
