use super::*;
use crate::print_handler::buffer_handler;
use crate::InterpreterBuilder;
use pretty_assertions::assert_eq;

fn eval_string(source: &str) -> Option<String> {
    let mut interp = InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build();
    match interp.run(source) {
        Ok(Value::Str(s)) => Some(s.to_string()),
        _ => None,
    }
}

#[test]
fn base_name_strips_directories_and_suffixes() {
    assert_eq!(base_name("/a/b/foo.rb", None), "foo.rb");
    assert_eq!(base_name("/a/b/foo.rb", Some(".rb")), "foo");
    assert_eq!(base_name("/a/b/foo.tar.gz", Some(".*")), "foo.tar");
    assert_eq!(base_name("/a/b/.hidden", Some(".*")), ".hidden");
    assert_eq!(base_name("foo.rb", Some("foo.rb")), "foo.rb");
    assert_eq!(base_name("/a/b/", None), "b");
    assert_eq!(base_name("/", None), "/");
    assert_eq!(base_name("", None), "");
}

#[test]
fn dir_name_drops_last_component() {
    assert_eq!(dir_name("/a/b/foo.rb"), "/a/b");
    assert_eq!(dir_name("a/b/"), "a");
    assert_eq!(dir_name("foo.rb"), ".");
    assert_eq!(dir_name("/foo.rb"), "/");
    assert_eq!(dir_name("//"), "/");
    assert_eq!(dir_name(""), ".");
}

#[test]
fn normalize_resolves_dots_lexically() {
    assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
    assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
}

#[test]
fn join_merges_separators() {
    assert_eq!(eval_string("File.join('a', 'b', 'c.rb')").as_deref(), Some("a/b/c.rb"));
    assert_eq!(eval_string("File.join('a/', '/b')").as_deref(), Some("a/b"));
    assert_eq!(eval_string("File.join('/', 'b')").as_deref(), Some("/b"));
    assert_eq!(eval_string("File.join()").as_deref(), Some(""));
}

#[test]
fn basename_and_dirname_through_interpreter() {
    assert_eq!(
        eval_string("File.basename('/lib/util.rb', '.rb')").as_deref(),
        Some("util")
    );
    assert_eq!(eval_string("File.dirname('/lib/util.rb')").as_deref(), Some("/lib"));
}

#[test]
fn expand_path_against_base_directory() {
    assert_eq!(
        eval_string("File.expand_path('../lib/./util.rb', '/srv/app')").as_deref(),
        Some("/srv/lib/util.rb")
    );
    assert_eq!(
        eval_string("File.expand_path('/etc/../tmp')").as_deref(),
        Some("/tmp")
    );
}

#[test]
fn exist_checks_the_file_system() {
    let dir = tempfile::tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"));
    let present = dir.path().join("present.rb");
    std::fs::write(&present, "1").unwrap_or_else(|err| panic!("write: {err}"));

    let mut interp = InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build();
    interp.set("present", Value::string(present.display().to_string()));
    interp.set(
        "absent",
        Value::string(dir.path().join("absent.rb").display().to_string()),
    );

    assert!(matches!(interp.run("File.exist?(present)"), Ok(Value::True)));
    assert!(matches!(interp.run("File.exist?(absent)"), Ok(Value::False)));
}
