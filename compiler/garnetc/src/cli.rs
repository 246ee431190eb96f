//! Command-line arguments.

use std::path::Path;

/// Per-user directory appended to the load path when it exists.
const USER_LIB_DIR: &str = ".garnet";

/// What the driver was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive loop; the default with no command.
    Irb,
    /// Run a file; remaining arguments become `ARGV`.
    Run { file: String, args: Vec<String> },
    Help,
    Version,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// `-I` directories, in the order given.
    pub include_dirs: Vec<String>,
    pub command: Command,
}

impl Options {
    /// Initial load path: `-I` directories, then the user directory under
    /// `home` if it is a directory.
    pub fn load_path(&self, home: Option<&Path>) -> Vec<String> {
        let mut dirs = self.include_dirs.clone();
        if let Some(user_dir) = home.map(|home| home.join(USER_LIB_DIR)) {
            if user_dir.is_dir() {
                dirs.push(user_dir.display().to_string());
            }
        }
        dirs
    }
}

/// Parse arguments (without the program name).
///
/// Options go before the command; everything after `run <file>` belongs to
/// the script.
pub fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut include_dirs = Vec::new();
    let mut rest = args.iter();

    while let Some(arg) = rest.next() {
        let command = match arg.as_str() {
            "-I" => {
                let Some(dir) = rest.next() else {
                    return Err("-I requires a directory".to_string());
                };
                include_dirs.push(dir.clone());
                continue;
            }
            "irb" => Command::Irb,
            "run" => {
                let Some(file) = rest.next() else {
                    return Err("run requires a file".to_string());
                };
                Command::Run {
                    file: file.clone(),
                    args: rest.by_ref().cloned().collect(),
                }
            }
            "help" | "--help" | "-h" => Command::Help,
            "version" | "--version" | "-v" => Command::Version,
            other => {
                if let Some(dir) = other.strip_prefix("-I") {
                    include_dirs.push(dir.to_string());
                    continue;
                }
                return Err(format!("unknown command '{other}'"));
            }
        };
        return Ok(Options {
            include_dirs,
            command,
        });
    }

    Ok(Options {
        include_dirs,
        command: Command::Irb,
    })
}
