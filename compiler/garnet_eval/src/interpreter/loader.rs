//! Source loading: `require` and `load`.
//!
//! `require(name)` searches each `$LOAD_PATH` directory in order for
//! `<dir>/<name>.rb`. The first regular file that opens wins; directories
//! and files that cannot be opened are skipped. A unit is evaluated at most once:
//! its canonical path is recorded in `$LOADED_FEATURES` and a later
//! `require` resolving to it returns `false`.
//!
//! While a unit runs it is the current unit (`__FILE__`); the previous
//! name is restored by `UnitGuard` on every exit path.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use garnet_stack::ensure_sufficient_stack;

use crate::errors::{self, EvalResult};
use crate::value::ArrayRef;
use crate::Value;

use super::Interpreter;

/// Units that exist only for compatibility and are never loaded.
const BUILTIN_FEATURES: &[&str] = &["rubygems"];

/// Source file extension appended to `require` names.
const SOURCE_EXTENSION: &str = "rb";

impl Interpreter {
    /// Load `name` from the load path unless it was loaded before.
    ///
    /// Returns `true` when the unit was evaluated, `false` for builtin
    /// features and units already loaded.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn require(&mut self, name: &str) -> EvalResult {
        if BUILTIN_FEATURES.contains(&name) {
            tracing::debug!("builtin feature, nothing to load");
            return Ok(Value::False);
        }

        let Some((path, mut file)) = self.find_unit(name) else {
            tracing::debug!("not found on load path");
            return Err(self.attach_backtrace(errors::load_error(name)));
        };

        let feature = canonical_name(&path);
        if self.is_loaded(&feature) {
            tracing::debug!(%feature, "already loaded");
            return Ok(Value::False);
        }

        let mut source = String::new();
        file.read_to_string(&mut source)
            .map_err(|err| self.attach_backtrace(errors::load_read_error(name, &err)))?;

        // Recorded before evaluation so a unit that requires itself stops here.
        self.mark_loaded(&feature);
        let unit = path.display().to_string();
        if let Err(err) = self.eval_unit(&unit, &source) {
            self.unmark_loaded(&feature);
            return Err(err);
        }
        Ok(Value::True)
    }

    /// Evaluate the file at `path` unconditionally: no search, no duplicate check.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn load(&mut self, path: &str) -> EvalResult {
        let Ok(source) = std::fs::read_to_string(path) else {
            return Err(self.attach_backtrace(errors::load_error(path)));
        };
        self.eval_unit(path, &source)?;
        Ok(Value::True)
    }

    /// Run `source` as the unit named `unit`.
    fn eval_unit(&mut self, unit: &str, source: &str) -> EvalResult {
        ensure_sufficient_stack(|| self.enter_unit(unit).run(source))
    }

    /// First `<dir>/<name>.rb` on the load path that can be opened.
    fn find_unit(&self, name: &str) -> Option<(PathBuf, File)> {
        let file_name = format!("{name}.{SOURCE_EXTENSION}");
        self.load_path().into_iter().find_map(|dir| {
            let path = Path::new(&dir).join(&file_name);
            match File::open(&path) {
                Ok(file) if file.metadata().is_ok_and(|meta| meta.is_file()) => {
                    tracing::debug!(path = %path.display(), "found");
                    Some((path, file))
                }
                Ok(_) => {
                    tracing::trace!(path = %path.display(), "skipped: not a regular file");
                    None
                }
                Err(err) => {
                    tracing::trace!(path = %path.display(), %err, "skipped");
                    None
                }
            }
        })
    }

    /// String entries of `$LOAD_PATH`, in order.
    pub fn load_path(&self) -> Vec<String> {
        match self.env.global("LOAD_PATH") {
            Some(Value::Array(dirs)) => dirs
                .borrow()
                .iter()
                .filter_map(|dir| match dir {
                    Value::Str(s) => Some(s.to_string()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn loaded_features(&self) -> Option<ArrayRef> {
        self.global_array("LOADED_FEATURES")
    }

    fn global_array(&self, name: &str) -> Option<ArrayRef> {
        match self.env.global(name) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        }
    }

    fn is_loaded(&self, feature: &str) -> bool {
        self.loaded_features().is_some_and(|features| {
            features
                .borrow()
                .iter()
                .any(|f| matches!(f, Value::Str(s) if &**s == feature))
        })
    }

    fn mark_loaded(&self, feature: &str) {
        if let Some(features) = self.loaded_features() {
            features.borrow_mut().push(Value::string(feature));
        }
    }

    fn unmark_loaded(&self, feature: &str) {
        if let Some(features) = self.loaded_features() {
            features
                .borrow_mut()
                .retain(|f| !matches!(f, Value::Str(s) if &**s == feature));
        }
    }
}

/// Key under which a unit is recorded in `$LOADED_FEATURES`.
fn canonical_name(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
