//! Kiln CLI
//!
//! Runs, decodes, or checks programs in the JSON exchange format.

use kilnc::commands::{check_file, parse_file, run_file};
use kilnc::{CliOptions, CommandError};

fn main() {
    kilnc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" | "parse" | "check" => {
            let options = match CliOptions::parse(&args[2..]) {
                Ok(options) => options,
                Err(err) => usage_error(command, &err),
            };
            let Some(path) = options.path.as_deref() else {
                usage_error(command, &CommandError::Usage("missing file path".to_string()));
            };

            let outcome = match command.as_str() {
                "run" => run_file(path, &options.config).map(|value| println!("{value}")),
                "parse" => parse_file(path).map(|program| println!("{program}")),
                _ => check_file(path, &options.config).map(|summary| println!("{summary}")),
            };
            if let Err(err) = outcome {
                report(&err);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Kiln {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare payload path runs it with default settings.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            {
                match CliOptions::parse(&args[2..]) {
                    Ok(options) => match run_file(command, &options.config) {
                        Ok(value) => println!("{value}"),
                        Err(err) => report(&err),
                    },
                    Err(err) => usage_error("run", &err),
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn report(err: &CommandError) -> ! {
    eprintln!("error: {err}");
    if let Some(backtrace) = err.backtrace() {
        eprint!("{backtrace}");
    }
    std::process::exit(1);
}

fn usage_error(command: &str, err: &CommandError) -> ! {
    eprintln!("error: {err}");
    eprintln!("Usage: kiln {command} <file.json> [options]");
    std::process::exit(1);
}

fn print_usage() {
    println!("Kiln expression-language evaluator");
    println!();
    println!("Usage: kiln <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.json>      Evaluate a program and print its result");
    println!("  parse <file.json>    Decode a program and print its AST");
    println!("  check <file.json>    Decode a program and validate its functions");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --max-depth=<n>        Fail once more than <n> calls are active");
    println!("  --allow-redefinition   Later function definitions replace earlier ones");
    println!();
    println!("Environment:");
    println!("  RUST_LOG=<filter>      Enable tracing output on stderr (e.g. kiln_eval=debug)");
    println!();
    println!("Examples:");
    println!("  kiln run demos/factorial.json");
    println!("  kiln run demos/countdown.json --max-depth=5000");
    println!("  kiln parse demos/factorial.json");
    println!("  kiln demos/loop.json");
}
