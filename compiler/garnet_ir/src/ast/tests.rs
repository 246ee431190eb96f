use super::*;
use pretty_assertions::assert_eq;

#[test]
fn call_display_with_target() {
    let call = Node::CallExpression(CallExpression::on(
        Node::GlobalVariable("LOAD_PATH".into()),
        "push",
        vec![Node::SimpleString("/a".into())],
    ));
    assert_eq!(call.to_string(), "$LOAD_PATH.push('/a')");
}

#[test]
fn call_display_implicit_receiver() {
    let call = Node::CallExpression(CallExpression::implicit(
        "puts",
        vec![Node::ConstantInt(1), Node::Symbol("ok".into())],
    ));
    assert_eq!(call.to_string(), "puts(1, :ok)");
}

#[test]
fn assignment_display() {
    let node = Node::Assignment(Assignment {
        lhs: Box::new(Node::bare("x")),
        rhs: Box::new(Node::ConstantFloat(1.0)),
    });
    assert_eq!(node.to_string(), "x = 1.0");
}

#[test]
fn kind_names() {
    assert_eq!(Node::FileNameConstReference.kind_name(), "FileNameConstReference");
    assert_eq!(Node::Return(None).kind_name(), "Return");
    assert_eq!(
        Node::ClassDecl(ClassDecl {
            name: "Foo".into(),
            superclass: None,
            body: vec![],
        })
        .kind_name(),
        "ClassDecl"
    );
}
