//! DTP CLI
//!
//! Explains the warnings the text processing pipeline recorded for a project.

use dtpc::commands::{explain_code, parse_errors_options, run_errors};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "errors" => {
            let options = parse_errors_options(&args[2..]);
            let (Some(project), Some(mappings)) = (&options.project, &options.mappings) else {
                eprintln!("Usage: dtp errors <project.json> --mappings=<mappings.json> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --mappings=<path>     Mapping tables the project was processed with");
                eprintln!("  --emit=<mode>         Output: terminal (default), log");
                eprintln!("  --color=<mode>        Colors: auto (default), always, never");
                eprintln!("  --include-comments    Also explain warnings on comment sentences");
                eprintln!("  -t, --time            Log how long explaining took");
                eprintln!("  -v, --verbose         Debug logging");
                std::process::exit(1);
            };

            dtpc::init_tracing(options.verbose);

            match run_errors(project, mappings, &options) {
                Ok(summary) if summary.has_failures() => std::process::exit(1),
                Ok(_) => {}
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: dtp explain <code>");
                eprintln!("Example: dtp explain E3001");
                std::process::exit(1);
            }
            explain_code(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("dtp {}", env!("CARGO_PKG_VERSION"));
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
    println!("DTP - datasheet text processor diagnostics");
    println!();
    println!("Usage: dtp <command> [options]");
    println!();
    println!("Commands:");
    println!("  errors <project.json> --mappings=<file>   Explain recorded warnings");
    println!("  explain <code>                            Describe a diagnostic code");
    println!("  help                                      Show this message");
    println!("  version                                   Show version information");
}
