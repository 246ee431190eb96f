//! Garnet CLI.

use garnetc::cli::{parse_args, Command};
use garnetc::commands::{run_file, run_irb};

fn main() {
    garnetc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let home = std::env::var_os("HOME").map(std::path::PathBuf::from);
    let load_path = options.load_path(home.as_deref());

    match options.command {
        Command::Irb => run_irb(load_path),
        Command::Run { file, args } => run_file(&file, &args, load_path),
        Command::Help => print_usage(),
        Command::Version => println!("Garnet {}", env!("CARGO_PKG_VERSION")),
    }
}

fn print_usage() {
    println!("Garnet interpreter");
    println!();
    println!("Usage: garnet [options] [command]");
    println!();
    println!("Commands:");
    println!("  irb                       Interactive session (default)");
    println!("  run <file.rb> [args...]   Run a program; args become ARGV");
    println!("  help                      Show this help message");
    println!("  version                   Show version information");
    println!();
    println!("Options:");
    println!("  -I <dir>                  Add a directory to the load path (repeatable)");
    println!();
    println!("Environment:");
    println!("  HOME                      $HOME/.garnet is searched when it exists");
    println!("  GARNET_LOG, RUST_LOG      Tracing filter, e.g. GARNET_LOG=garnet_eval=debug");
    println!();
    println!("Examples:");
    println!("  garnet");
    println!("  garnet run main.rb --verbose");
    println!("  garnet -I lib run main.rb");
}
