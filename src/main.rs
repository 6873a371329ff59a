//! Command-line front end: reads a program file, writes its tokens one per
//! line, and exits non-zero on a fatal lexical error.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use javo_lexer::{render_error, tokenize, Token};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "javo-lexer")]
#[command(about = "Splits a program into classified lexical tokens", version)]
struct Cli {
    /// The program code file, e.g. program.txt
    input: PathBuf,

    /// Where to write the tokens (`-` for stdout)
    #[arg(short, long, default_value = "out.txt")]
    output: PathBuf,

    /// Prefix every token with its line and column
    #[arg(long)]
    positions: bool,

    /// Log more (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let source = read_source(&cli.input)?;
    debug!(path = %cli.input.display(), bytes = source.len(), "read source");

    let tokens = match tokenize(source.clone()) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", render_error(&source, &error));
            return Err(anyhow::Error::new(error)
                .context(format!("failed to tokenize {}", cli.input.display())));
        }
    };

    if cli.output == Path::new("-") {
        write_tokens(io::stdout().lock(), &tokens, cli.positions)
            .context("failed to write tokens to stdout")?;
    } else {
        let file = File::create(&cli.output)
            .with_context(|| format!("failed to create {}", cli.output.display()))?;
        write_tokens(BufWriter::new(file), &tokens, cli.positions)
            .with_context(|| format!("failed to write {}", cli.output.display()))?;
    }

    info!(tokens = tokens.len(), output = %cli.output.display(), "wrote tokens");
    Ok(())
}

/// Reads the file and re-terminates every line with `\n`.
fn read_source(path: &Path) -> anyhow::Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut source = String::with_capacity(raw.len() + 1);
    for line in raw.lines() {
        source.push_str(line);
        source.push('\n');
    }

    Ok(source)
}

fn write_tokens(mut out: impl Write, tokens: &[Token], positions: bool) -> io::Result<()> {
    for token in tokens {
        if positions {
            writeln!(out, "{}", token.render_with_position())?;
        } else {
            writeln!(out, "{}", token)?;
        }
    }

    out.flush()
}
