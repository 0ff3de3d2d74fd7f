//! json2scss CLI.
//!
//! Resolves a JSON reference the way a stylesheet compiler would and prints
//! the generated SCSS.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use json_scss_importer::{CanonicalizeContext, Importer, ImporterOptions, JsonImporter};

#[derive(Parser)]
#[command(name = "json2scss")]
#[command(about = "Convert JSON documents into SCSS variables", long_about = None)]
#[command(version)]
struct Cli {
    /// Reference to resolve, e.g. `tokens/colors.json`
    reference: String,

    /// Directory to search, after the directory of `--from` (repeatable)
    #[arg(short = 'I', long = "load-path", value_name = "DIR")]
    load_paths: Vec<PathBuf>,

    /// Stylesheet the reference is imported from
    #[arg(long, value_name = "FILE")]
    from: Option<PathBuf>,

    /// Convert camelCase keys to kebab-case
    #[arg(long)]
    convert_case: bool,

    /// Rewrite `var:a|b` links to `var(--wp--a--b)`
    #[arg(long)]
    resolve_internal_links: bool,

    /// Quote nested map keys
    #[arg(long = "stringify-keys")]
    stringify_keys: bool,

    /// JSON file with importer options
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

const EXIT_LOAD_FAILED: u8 = 1;
const EXIT_NOT_FOUND: u8 = 2;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: &Path) -> Result<ImporterOptions, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read config {}: {}", path.display(), e))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config {}: {}", path.display(), e))
}

fn build_options(cli: &Cli) -> Result<ImporterOptions, String> {
    let mut options = match &cli.config {
        Some(path) => read_config(path)?,
        None => ImporterOptions::default(),
    };

    options.load_paths.extend(cli.load_paths.iter().cloned());
    if options.load_paths.is_empty() && cli.from.is_none() {
        options.load_paths.push(PathBuf::from("."));
    }
    options.convert_case |= cli.convert_case;
    options.resolve_internal_links |= cli.resolve_internal_links;
    options.stringify_all_keys |= cli.stringify_keys;
    Ok(options)
}

fn build_context(from: Option<&Path>) -> Result<CanonicalizeContext, String> {
    let Some(from) = from else {
        return Ok(CanonicalizeContext::default());
    };
    let absolute = std::path::absolute(from)
        .map_err(|e| format!("cannot resolve {}: {}", from.display(), e))?;
    let url = Url::from_file_path(&absolute)
        .map_err(|_| format!("cannot build a file URL for {}", absolute.display()))?;
    Ok(CanonicalizeContext::containing(url))
}

fn run(cli: &Cli) -> Result<(), (u8, String)> {
    let options = build_options(cli).map_err(|e| (EXIT_LOAD_FAILED, e))?;
    let context = build_context(cli.from.as_deref()).map_err(|e| (EXIT_LOAD_FAILED, e))?;
    let importer = JsonImporter::new(options);

    let locator = importer.canonicalize(&cli.reference, &context).ok_or_else(|| {
        (
            EXIT_NOT_FOUND,
            format!("Can't find JSON document to import: {}", cli.reference),
        )
    })?;
    info!(path = %locator.path().display(), "resolved");

    let output = importer
        .load(&locator)
        .map_err(|e| (EXIT_LOAD_FAILED, e.to_string()))?;

    match &cli.output {
        Some(path) => fs::write(path, format!("{}\n", output.contents))
            .map_err(|e| (EXIT_LOAD_FAILED, format!("cannot write {}: {}", path.display(), e))),
        None => {
            println!("{}", output.contents);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err((code, message)) => {
            eprintln!("error: {}", message);
            ExitCode::from(code)
        }
    }
}
