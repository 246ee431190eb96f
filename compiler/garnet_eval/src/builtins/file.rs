//! `File` class methods. Paths are plain strings with `/` separators; only
//! `exist?` and `expand_path` touch the file system.

use std::path::{Component, Path, PathBuf};

use crate::errors::{self, EvalError, EvalResult};
use crate::value::ClassRef;
use crate::{Interpreter, Value};

use super::{check_arity, check_arity_range, define_singleton, string_arg};

const SEPARATOR: char = '/';

/// `basename` suffix that strips any extension.
const ANY_EXTENSION: &str = ".*";

pub(super) fn install(file: &ClassRef) {
    define_singleton(file, "join", join);
    define_singleton(file, "basename", basename);
    define_singleton(file, "dirname", dirname);
    define_singleton(file, "exist?", exist);
    define_singleton(file, "expand_path", expand_path);
}

/// Join parts with exactly one separator between them.
fn join(interp: &mut Interpreter, _: &Value, args: &[Value]) -> EvalResult {
    let mut joined = String::new();
    for (i, arg) in args.iter().enumerate() {
        let part = string_arg(interp, arg)?;
        if i == 0 {
            joined.push_str(&part);
            continue;
        }
        while joined.ends_with(SEPARATOR) {
            joined.pop();
        }
        joined.push(SEPARATOR);
        joined.push_str(part.trim_start_matches(SEPARATOR));
    }
    Ok(Value::string(joined))
}

fn basename(interp: &mut Interpreter, _: &Value, args: &[Value]) -> EvalResult {
    check_arity_range(interp, args, 1, 2)?;
    let path = string_arg(interp, &args[0])?;
    let suffix = match args.get(1) {
        Some(suffix) => Some(string_arg(interp, suffix)?),
        None => None,
    };
    Ok(Value::string(base_name(&path, suffix.as_deref())))
}

fn dirname(interp: &mut Interpreter, _: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 1)?;
    let path = string_arg(interp, &args[0])?;
    Ok(Value::string(dir_name(&path)))
}

fn exist(interp: &mut Interpreter, _: &Value, args: &[Value]) -> EvalResult {
    check_arity(interp, args, 1)?;
    let path = string_arg(interp, &args[0])?;
    Ok(Value::boolean(Path::new(&*path).exists()))
}

/// Absolute, normalized form of `path`, relative to `dir` or the current
/// directory. `..` and `.` are resolved lexically; symlinks are kept.
fn expand_path(interp: &mut Interpreter, _: &Value, args: &[Value]) -> EvalResult {
    check_arity_range(interp, args, 1, 2)?;
    let path = string_arg(interp, &args[0])?;
    let cwd = std::env::current_dir().map_err(|err| {
        interp.attach_backtrace(errors::runtime_error(format!(
            "Errno::ENOENT: current directory: {err}"
        )))
    })?;
    let base = match args.get(1) {
        Some(dir) => cwd.join(expand_home(interp, &string_arg(interp, dir)?)?),
        None => cwd,
    };
    let expanded = normalize(&base.join(expand_home(interp, &path)?));
    Ok(Value::string(expanded.display().to_string()))
}

fn base_name(path: &str, suffix: Option<&str>) -> String {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return if path.is_empty() { String::new() } else { SEPARATOR.to_string() };
    }
    let base = trimmed.rsplit(SEPARATOR).next().unwrap_or(trimmed);
    let stripped = match suffix {
        Some(ANY_EXTENSION) => match base.rfind('.') {
            Some(dot) if dot > 0 => &base[..dot],
            _ => base,
        },
        Some(suffix) if base != suffix => base.strip_suffix(suffix).unwrap_or(base),
        _ => base,
    };
    stripped.to_string()
}

fn dir_name(path: &str) -> String {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return if path.is_empty() { ".".to_string() } else { SEPARATOR.to_string() };
    }
    match trimmed.rfind(SEPARATOR) {
        None => ".".to_string(),
        Some(idx) => {
            let dir = trimmed[..idx].trim_end_matches(SEPARATOR);
            if dir.is_empty() {
                SEPARATOR.to_string()
            } else {
                dir.to_string()
            }
        }
    }
}

/// Replace a leading `~` with `$HOME`.
fn expand_home(interp: &Interpreter, path: &str) -> Result<PathBuf, EvalError> {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(SEPARATOR) => rest,
        _ => return Ok(PathBuf::from(path)),
    };
    let Some(home) = std::env::var_os("HOME") else {
        return Err(interp.attach_backtrace(errors::runtime_error(
            "ArgumentError: couldn't find HOME environment",
        )));
    };
    Ok(PathBuf::from(home).join(rest.trim_start_matches(SEPARATOR)))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests;
