//! Fluent CLI
//!
//! Tree-walking interpreter for the Fluent language.

use fluentc::commands::{lex_file, parse_file, run_file};

fn main() {
    fluentc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: fluent run <file.fl>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: fluent lex <file.fl>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: fluent parse <file.fl>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Fluent {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare source path runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("fl"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Fluent interpreter");
    println!();
    println!("Usage: fluent <command> [args]");
    println!();
    println!("Commands:");
    println!("  run <file.fl>     Run a Fluent program");
    println!("  lex <file.fl>     Tokenize and display tokens");
    println!("  parse <file.fl>   Parse and display the AST");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Examples:");
    println!("  fluent run main.fl");
    println!("  fluent main.fl                  # same as run");
    println!("  RUST_LOG=debug fluent main.fl   # trace the pipeline");
}
