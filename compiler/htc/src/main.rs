//! ht CLI
//!
//! Runs statement trees produced by the ht parser.

use ht_eval::ScopingMode;
use htc::commands::{run_file, RunOptions};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            let mut options = RunOptions::default();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--isolated-scopes" {
                    options.scoping = ScopingMode::Isolated;
                } else if arg.starts_with('-') {
                    eprintln!("error: unknown option '{arg}'");
                    std::process::exit(1);
                } else if file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: htc run <program.json> [--isolated-scopes]");
                std::process::exit(1);
            };

            htc::init_tracing();
            run_file(path, &options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("htc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("htc - ht program runner");
    println!();
    println!("Usage: htc <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <program.json>   Evaluate a parsed program");
    println!("  help                 Show this message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --isolated-scopes    Blocks cannot see variables of enclosing scopes");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>    Enable evaluator logging on stderr");
    println!("  HT_LOG_TREE=1        Render logged spans as a tree");
}
