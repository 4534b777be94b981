//! ltok CLI
//!
//! Splits one line of text into fields and prints them as
//! `args[<index>] = <token>` entries.

use ltok::SeparatorSet;
use ltokc::commands::{run_demo, split_line};

fn main() {
    ltokc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "split" => {
            let mut seps = SeparatorSet::whitespace();
            let mut line: Option<&str> = None;

            for arg in args.iter().skip(2) {
                if let Some(chars) = arg.strip_prefix("--sep=") {
                    seps = SeparatorSet::from_bytes(chars.as_bytes());
                } else if line.is_none() {
                    line = Some(arg.as_str());
                }
            }

            let Some(line) = line else {
                eprintln!("Usage: ltok split [--sep=<chars>] <line>");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --sep=<chars>   Separator bytes (default: space, tab, newline)");
                std::process::exit(1);
            };

            std::process::exit(split_line(line, seps));
        }
        "demo" => {
            std::process::exit(run_demo());
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        other => {
            eprintln!("error: unknown command `{other}`");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Usage: ltok <command> [args]");
    println!();
    println!("Commands:");
    println!("  split [--sep=<chars>] <line>   Split <line> and print its fields");
    println!("  demo                           Split the fixed example line");
    println!("  help                           Show this help");
}
