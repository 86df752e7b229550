//! Klang Compiler CLI

use std::io::{self, IsTerminal};

use klang_diagnostic::{DiagnosticEmitter, Environment, RenderMode, TerminalEmitter};
use klangc::commands::{explain_error, lex_file, resolve_render_mode};
use klangc::CliError;

fn main() {
    klangc::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    // A panic is a compiler bug, not a user error.
    let code = std::panic::catch_unwind(|| run(&args)).unwrap_or_else(|_| {
        eprintln!("error: internal compiler error");
        2
    });
    std::process::exit(code);
}

fn run(args: &[String]) -> i32 {
    let Some(command) = args.get(1) else {
        print_usage();
        return 0;
    };

    match command.as_str() {
        "lex" => {
            let mut path = None;
            let mut color = None;
            for arg in &args[2..] {
                if let Some(value) = arg.strip_prefix("--color=") {
                    color = Some(value);
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    eprintln!("Usage: kc lex <file.k> [--color=<mode>]");
                    return 1;
                }
            }

            let env_value = std::env::var("KLANG_COLOR").ok();
            let env = Environment::capture(io::stderr().is_terminal());
            let mode = match resolve_render_mode(color, env_value.as_deref(), &env) {
                Ok(mode) => mode,
                Err(err) => return report(err, RenderMode::Plain),
            };

            let Some(path) = path else {
                return report(
                    CliError::Usage {
                        command: "lex",
                        usage: "kc lex <file.k> [--color=<mode>]",
                    },
                    mode,
                );
            };

            match lex_file(path, &mut io::stdout().lock()) {
                Ok(_) => 0,
                Err(err) => report(err, mode),
            }
        }
        "explain" | "--explain" => {
            let Some(code) = args.get(2) else {
                return report(
                    CliError::Usage {
                        command: "explain",
                        usage: "kc explain <CODE>   (e.g. kc explain E002)",
                    },
                    RenderMode::Plain,
                );
            };
            match explain_error(code, &mut io::stdout().lock()) {
                Ok(()) => 0,
                Err(err) => report(err, RenderMode::Plain),
            }
        }
        "version" | "--version" | "-V" => {
            println!("Klang version {}", env!("CARGO_PKG_VERSION"));
            0
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            1
        }
    }
}

/// Write a failure to stderr; returns the exit code for it.
fn report(err: CliError, mode: RenderMode) -> i32 {
    match err {
        CliError::Diagnostic(diagnostic) => {
            let mut emitter = TerminalEmitter::stderr(mode);
            emitter.emit(&diagnostic);
            emitter.emit_summary(1, 0);
            emitter.flush();
        }
        other => eprint!("{}", other.render(mode)),
    }
    1
}

fn print_usage() {
    println!("Klang Compiler");
    println!();
    println!("Usage: kc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.k>         Tokenize a file and print one token per line");
    println!("  explain <code>       Explain a diagnostic code (e.g., E002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --color=<mode>       Diagnostic colors: auto, always, never, debug");
    println!("                       (default: $KLANG_COLOR, then auto)");
    println!();
    println!("Environment:");
    println!("  KLANG_COLOR          Default for --color");
    println!("  NO_COLOR             Disable colors in auto mode");
    println!("  RUST_LOG             Enable compiler tracing (e.g., klang_lexer=trace)");
    println!();
    println!("Examples:");
    println!("  kc lex main.k");
    println!("  kc lex main.k --color=never");
    println!("  kc explain E002");
}
