use clap::{command, Parser};
use std::path::{Path, PathBuf};
use steps_lexer::{Error, ScanConfig, TokenizedBuffer};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Dump the token stream of STEPS source files", long_about = None)]
struct Cli {
    /// Path to a JSON scanner config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print tokens as JSON lines
    #[arg(long)]
    json: bool,

    /// Hide white space, comments and line feeds
    #[arg(long)]
    skip_trivia: bool,

    /// Exit with status 1 when any diagnostic is reported
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<ScanConfig, Error> {
    let mut config = match &cli.config {
        Some(path) => ScanConfig::from_file(path)?,
        None => ScanConfig::default(),
    };
    if cli.skip_trivia {
        config.skip_trivia = true;
    }
    debug!("config: {:?}", config);
    Ok(config)
}

/// Dumps one file; returns whether it produced diagnostics.
fn dump(path: &Path, config: &ScanConfig, json: bool) -> Result<bool, Error> {
    let source = std::fs::read_to_string(path)?;
    let origin = path.display().to_string();
    let buffer = TokenizedBuffer::tokenize(&source, Some(&origin), config);

    for token in buffer.tokens() {
        if json {
            println!("{}", serde_json::to_string(token)?);
        } else {
            println!("{}", token);
        }
    }
    for diagnostic in buffer.diagnostics() {
        eprintln!("{}", diagnostic);
    }
    info!(file = %origin, tokens = buffer.len(), "scanned");
    Ok(buffer.has_errors())
}

fn run(cli: &Cli) -> Result<bool, Error> {
    let config = load_config(cli)?;
    let mut failed = false;
    for path in &cli.files {
        match dump(path, &config, cli.json) {
            Ok(has_errors) => failed |= cli.strict && has_errors,
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                failed = true;
            }
        }
    }
    Ok(failed)
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(false) => {}
        Ok(true) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
