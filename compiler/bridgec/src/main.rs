//! bridgegen CLI
//!
//! Generates native-facing wrappers from a declaration model.

use bridgec::commands::{explain_error, generate_file, parse_generate_options};

fn main() {
    bridgec::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "generate" | "gen" => {
            if args.len() < 3 {
                eprintln!("Usage: bridgec generate <model.json> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --out=<dir>                Output directory (default: ./generated)");
                eprintln!("  --class-suffix=<s>         Suffix of generated classes");
                eprintln!("  --interface-suffix=<s>     Suffix of generated interfaces");
                eprintln!("  --runtime-package=<pkg>    Package of the runtime wrapper types");
                eprintln!("  --dry-run                  List files without writing them");
                eprintln!("  --color=<mode>             auto, always, never");
                std::process::exit(1);
            }

            let mut model_path = None;
            let mut flags = Vec::new();
            for arg in args.iter().skip(2) {
                if arg.starts_with('-') {
                    flags.push(arg.clone());
                } else if model_path.is_none() {
                    model_path = Some(arg.as_str());
                }
            }

            let Some(path) = model_path else {
                eprintln!("error: missing model path");
                eprintln!("Usage: bridgec generate <model.json> [options]");
                std::process::exit(1);
            };

            let options = parse_generate_options(&flags);
            generate_file(path, &options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("bridgec {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: bridgec explain <ERROR_CODE>");
                eprintln!("Example: bridgec explain E1002");
                std::process::exit(1);
            }
            explain_error(&args[2]);
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
    println!("bridgec: coroutine-friendly wrapper generator");
    println!();
    println!("Usage: bridgec <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <model.json>  Generate wrappers for a declaration model");
    println!("  explain <code>         Explain an error code (e.g., E1002)");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Generate options:");
    println!("  --out=<dir>              Output directory (default: ./generated)");
    println!("  --class-suffix=<s>       Suffix of generated classes (default: Native)");
    println!("  --interface-suffix=<s>   Suffix of generated interfaces (default: NativeProtocol)");
    println!("  --runtime-package=<pkg>  Package of SuspendWrapper/FlowWrapper/ScopeProvider");
    println!("  --dry-run                List the files that would be written");
    println!("  --color=<mode>           Diagnostic colors: auto, always, never");
    println!();
    println!("Examples:");
    println!("  bridgec generate model.json");
    println!("  bridgec generate model.json --out=build/generated");
    println!("  bridgec generate model.json --dry-run");
    println!("  bridgec explain E2001        # Explain inheritance cycles");
    println!();
    println!("Set RUST_LOG=debug to trace generation stages.");
}
