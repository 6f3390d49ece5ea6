use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::Parser;
use tokenizer::{display_error, tokenize_file, Lexer, LexerConfig, Token};
use tracing_subscriber::EnvFilter;

/// Print the tokens of a source file, one per line.
#[derive(Parser)]
#[command(name = "tokenizer", version)]
struct Cli {
    /// Source file to lex
    #[arg(value_name = "FILE", required_unless_present = "source")]
    file: Option<PathBuf>,

    /// Lex this text instead of a file
    #[arg(long, conflicts_with = "file")]
    source: Option<String>,

    /// Emit `=` for a bare `*`, `/` or `!`, like older scanners did
    #[arg(long)]
    legacy_operator_fallback: bool,

    /// Log level when RUST_LOG is not set: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();

    let (tokens, source_text) = match (&cli.source, &cli.file) {
        (Some(source), _) => {
            let config = LexerConfig::default()
                .with_legacy_operator_fallback(cli.legacy_operator_fallback);
            (Lexer::from_source(source.clone(), config).analyse(), Some(source.clone()))
        }
        (None, Some(file)) => {
            let config = LexerConfig::default()
                .with_legacy_operator_fallback(cli.legacy_operator_fallback);
            (tokenize_file(file, config), None)
        }
        (None, None) => unreachable!("clap requires FILE or --source"),
    };

    let tokens = match tokens {
        Ok(tokens) => tokens,
        Err(error) => {
            let text = source_text
                .or_else(|| cli.file.as_ref().and_then(|file| read_to_string(file).ok()))
                .unwrap_or_default();
            display_error(&error, &text);
            process::exit(1);
        }
    };

    tracing::info!("tokenized in {:?}", start.elapsed());

    for token in &tokens {
        print_token(token);
    }
}

fn print_token(token: &Token) {
    println!(
        "{:>5}..{:<5} {:<8} {}",
        token.span.start.0,
        token.span.end.0,
        token.kind.to_string(),
        token.value
    );
}
