//! Command-line interface for typecat.
//!
//! With no arguments this walks the interactive flow: prompt for a root directory,
//! list the discovered file types, read a comma-separated selection, and write the
//! combined document. Flags make each step scriptable.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::exit;
use typecat::{Console, StdConsole, TypecatBuilder, TypecatError, combine, typecat};

/// typecat — combine files of selected types into one document
#[derive(Parser)]
#[command(name = "typecat", version, about, long_about = None)]
struct Cli {
    /// Root directory to scan (prompted for interactively when omitted)
    root: Option<PathBuf>,

    /// Directory the combined document is written to
    /// (default: an OutputFiles directory next to the executable)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Preselect extensions and skip the interactive prompt (leading dot optional)
    #[arg(short = 't', long = "types")]
    types: Vec<String>,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Include hidden files
    #[arg(long)]
    hidden: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Disable .gitignore handling
    #[arg(long)]
    no_gitignore: bool,
}

fn main() {
    let cli = Cli::parse();
    let mut console = StdConsole;
    if let Err(e) = run(cli, &mut console) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(cli: Cli, console: &mut dyn Console) -> Result<(), TypecatError> {
    let root = match cli.root {
        Some(root) => root,
        None => {
            let line = console.ask("Enter the full project directory: ")?;
            PathBuf::from(line.trim().trim_matches('"'))
        }
    };
    let output_dir = cli.output_dir.unwrap_or_else(default_output_dir);

    let mut builder = TypecatBuilder::new(root)
        .output_dir(output_dir)
        .respect_gitignore(!cli.no_gitignore)
        .include_hidden(cli.hidden)
        .follow_links(cli.follow_links)
        .ignore_patterns(cli.ignore_patterns);
    if let Some(depth) = cli.max_depth {
        builder = builder.max_depth(depth);
    }
    let options = builder.build();

    if cli.types.is_empty() {
        typecat(options, console)?;
    } else {
        let selected: Vec<String> = cli.types.iter().map(|t| normalize_extension(t)).collect();
        combine(&options, &selected, console)?;
    }
    Ok(())
}

fn normalize_extension(raw: &str) -> String {
    if raw.starts_with('.') {
        raw.to_string()
    } else {
        format!(".{raw}")
    }
}

/// The documented default output location: an `OutputFiles` directory next to the
/// executable, falling back to the working directory when the executable path is
/// unavailable.
fn default_output_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("OutputFiles")
}
