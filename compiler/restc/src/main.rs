//! Request file checker CLI.

use restc::commands::{check_file, explain_error, hover_file, lex_file, tags_file};
use restc::options::CliOptions;

fn main() {
    restc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let (options, rest) = match CliOptions::parse(&args[2..]) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    match command.as_str() {
        "check" => {
            let [path] = rest.as_slice() else {
                eprintln!("Usage: rest check <file.http> [options]");
                std::process::exit(1);
            };
            check_file(path, &options);
        }
        "lex" => {
            let [path] = rest.as_slice() else {
                eprintln!("Usage: rest lex <file.http>");
                std::process::exit(1);
            };
            lex_file(path, &options);
        }
        "tags" => {
            let (path, start, end) = match rest.as_slice() {
                [path] => (path, Some(0), None),
                [path, start] => (path, start.parse().ok(), None),
                [path, start, end] => match end.parse() {
                    Ok(end) => (path, start.parse().ok(), Some(end)),
                    Err(_) => (path, None, None),
                },
                _ => {
                    eprintln!("Usage: rest tags <file.http> [start] [end]");
                    std::process::exit(1);
                }
            };
            let Some(start) = start else {
                eprintln!("error: range bounds must be byte offsets");
                std::process::exit(1);
            };
            tags_file(path, start, end, &options);
        }
        "hover" => {
            let [path, position] = rest.as_slice() else {
                eprintln!("Usage: rest hover <file.http> <offset | line:col>");
                eprintln!("Example: rest hover api.http 3:12");
                std::process::exit(1);
            };
            hover_file(path, position, &options);
        }
        "--explain" | "explain" => {
            let [code] = rest.as_slice() else {
                eprintln!("Usage: rest --explain <ERROR_CODE>");
                eprintln!("Example: rest --explain E0001");
                std::process::exit(1);
            };
            explain_error(code);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("rest {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare request file is checked.
            if std::path::Path::new(command).extension().is_some_and(|ext| {
                ext.eq_ignore_ascii_case("http") || ext.eq_ignore_ascii_case("rest")
            }) {
                check_file(command, &options);
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
    println!("rest: checker for HTTP request files");
    println!();
    println!("Usage: rest <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file.http>              Report every problem in a file");
    println!("  lex <file.http>                Tokenize and display tokens");
    println!("  tags <file.http> [start] [end] Display the tags of a byte range");
    println!("  hover <file.http> <position>   Show hover content (offset or line:col)");
    println!("  --explain <code>               Explain an error code (e.g., E0001)");
    println!("  help                           Show this help message");
    println!("  version                        Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>        Colored output: auto (default), always, never");
    println!("  --error-limit=<n>     Report at most n problems (0 = unlimited)");
    println!("  --no-url-check        Do not validate request targets");
    println!("  --no-reference-check  Do not report undefined variables");
    println!();
    println!("Examples:");
    println!("  rest check api.http");
    println!("  rest api.http --color=never");
    println!("  rest hover api.http 4:18");
    println!("  rest tags api.http 0 120");
    println!("  rest --explain E0003");
    println!();
    println!("Set RUST_LOG=rest_tagger=debug to trace engine decisions.");
}
