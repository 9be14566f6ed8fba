//! console-lexer - highlight console scripts from the command line
//!
//! Reads a file (or stdin) and prints it colorized, or answers the same
//! span and token queries the console editor makes.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::sync::Once;

use console_lexer::error::{ConsoleError, Result};
use console_lexer::{Config, Markup};

static TRACING_INIT: Once = Once::new();

/// What the invocation asked for
#[derive(Debug, Default)]
struct Options {
    file: Option<PathBuf>,
    config: Option<PathBuf>,
    markup: Option<Markup>,
    tokens: bool,
    token_at: Option<usize>,
    strip: bool,
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Install a subscriber only when `RUST_LOG` is set
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    // Handle --help and --version
    if let Some(first) = args.first() {
        match first.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            _ => {}
        }
    }

    let options = parse_args(&args)?;

    let mut config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if let Some(markup) = options.markup {
        config.markup = markup;
    }
    let engine = config.engine()?;

    let source = match &options.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if options.strip {
        print!("{}", engine.theme().strip(&source));
        return Ok(());
    }

    if let Some(caret) = options.token_at {
        match engine.token_at(&source, caret) {
            Some(token) => {
                let kind = token
                    .matcher
                    .map(|m| format!("{:?}", m))
                    .unwrap_or_else(|| "Identifier".to_string());
                println!("{}..{} {} {:?}", token.start, token.end, kind, token.text(&source));
            }
            None => println!("no token at {}", caret),
        }
        return Ok(());
    }

    if options.tokens {
        let chars: Vec<char> = source.chars().collect();
        for span in engine.tokenize(&source) {
            let text: String = chars[span.start..span.end].iter().collect();
            println!(
                "{:>6}..{:<6} {:<8} {:?}",
                span.start,
                span.end,
                span.token_type().name(),
                text
            );
        }
        return Ok(());
    }

    print!("{}", engine.render(&source));
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--ansi" => options.markup = Some(Markup::Ansi),
            "--rich-text" => options.markup = Some(Markup::RichText),
            "--tokens" => options.tokens = true,
            "--strip" => options.strip = true,
            "--token-at" => {
                let value = iter.next().ok_or_else(|| {
                    ConsoleError::Message("--token-at needs a caret offset".to_string())
                })?;
                let caret = value.parse::<usize>().map_err(|_| {
                    ConsoleError::Message(format!("invalid caret offset: {}", value))
                })?;
                options.token_at = Some(caret);
            }
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ConsoleError::Message("--config needs a path".to_string()))?;
                options.config = Some(PathBuf::from(value));
            }
            other if other.starts_with('-') => {
                return Err(ConsoleError::Message(format!("unknown option: {}", other)));
            }
            path => {
                if options.file.is_some() {
                    return Err(ConsoleError::Message(
                        "only one input file is supported".to_string(),
                    ));
                }
                options.file = Some(PathBuf::from(path));
            }
        }
    }

    Ok(options)
}

fn print_usage() {
    println!("console-lexer {} - console script highlighter", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: console-lexer [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE, or stdin when no file is given.");
    println!();
    println!("Options:");
    println!("  --ansi           Emit ANSI escape sequences");
    println!("  --rich-text      Emit <color=#rrggbb> rich-text tags (default)");
    println!("  --tokens         List matched spans instead of rendering");
    println!("  --token-at N     Show the token containing or preceding caret N");
    println!("  --strip          Remove highlight markup from the input");
    println!("  --config PATH    Read settings from PATH instead of ~/.console-lexer.toml");
    println!("  -h, --help       Show this help message");
    println!("  -V, --version    Show version information");
    println!();
    println!("Set RUST_LOG=console_lexer=debug for scan diagnostics.");
}

fn print_version() {
    println!("console-lexer {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(&args(&["--ansi", "--token-at", "12", "script.cs"])).unwrap();
        assert_eq!(options.markup, Some(Markup::Ansi));
        assert_eq!(options.token_at, Some(12));
        assert_eq!(options.file, Some(PathBuf::from("script.cs")));
        assert!(!options.tokens);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&args(&["--token-at"])).is_err());
        assert!(parse_args(&args(&["--token-at", "x"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["a.cs", "b.cs"])).is_err());
    }
}
