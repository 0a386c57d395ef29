use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use algolang::{
    config::{Language, Locale},
    display_error,
    errors::errors::{Error, ErrorPhase},
    interpreter::interpreter::Interpreter,
    run,
};
use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, Level};

/// Static errors: the program never started.
const EXIT_STATIC_ERROR: u8 = 64;
/// Runtime errors: the program started and aborted.
const EXIT_RUNTIME_ERROR: u8 = 70;

/// Interpreter for a small bilingual pseudocode language
#[derive(Parser, Debug)]
#[command(name = "algolang")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to run (`.al`); starts a prompt when omitted
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Keyword and number language (fr or en)
    #[arg(short, long, default_value = "fr")]
    lang: Language,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let locale = Locale::new(args.lang);
    debug!(language = %locale.language(), "starting");

    match args.file {
        Some(file) => run_file(&file, &locale),
        None => run_prompt(&locale).map(|_| ExitCode::SUCCESS),
    }
}

fn run_file(path: &Path, locale: &Locale) -> Result<ExitCode> {
    if path.extension().and_then(|extension| extension.to_str()) != Some("al") {
        bail!("expected a `.al` source file, got {}", path.display());
    }

    let source =
        read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let stdout = io::stdout();
    let mut interpreter = Interpreter::new(stdout.lock());

    match run(&source, file_name.as_deref(), locale, &mut interpreter) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(errors) => {
            report(&errors, &source);
            Ok(ExitCode::from(exit_code(&errors)))
        }
    }
}

fn run_prompt(locale: &Locale) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush the prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;

        if line.trim() == ".exit" {
            break;
        }

        let mut interpreter = Interpreter::new(io::stdout()).with_echo(true);
        if let Err(errors) = run(&line, None, locale, &mut interpreter) {
            report(&errors, &line);
        }
    }

    Ok(())
}

fn report(errors: &[Error], source: &str) {
    for error in errors {
        display_error(error, source);
    }
}

fn exit_code(errors: &[Error]) -> u8 {
    if errors
        .iter()
        .any(|error| error.phase() == ErrorPhase::Runtime)
    {
        EXIT_RUNTIME_ERROR
    } else {
        EXIT_STATIC_ERROR
    }
}
