use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "descent-json", version, about = "Validate JSON documents")]
struct Args {
    /// Files or directories to check. Directories are walked recursively. Reads stdin when omitted.
    paths: Vec<PathBuf>,

    /// Only report failures.
    #[arg(short, long)]
    quiet: bool,

    /// Print every parsed document as pretty JSON.
    #[arg(short, long)]
    print: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn collect_files(path: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    if !path.is_dir() {
        files.push(path.to_path_buf());
        return Ok(());
    }

    let mut entries = fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();

    for entry in entries {
        collect_files(&entry, files)?;
    }

    Ok(())
}

/// Returns false when the text is not a valid document.
fn check(name: &str, text: &str, args: &Args) -> Result<bool, Box<dyn Error>> {
    match descent_json::parse(text) {
        Ok(value) => {
            if !args.quiet {
                println!("ok {}", name);
            }
            if args.print {
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            Ok(true)
        }
        Err(err) => {
            println!("error {}: {}", name, err);
            Ok(false)
        }
    }
}

/// Overall result of a run, ordered from best to worst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Outcome {
    Valid,
    Rejected,
    Unreadable,
}

impl Outcome {
    fn exit_code(self) -> i32 {
        match self {
            Self::Valid => 0,
            Self::Rejected => 1,
            Self::Unreadable => 2,
        }
    }
}

fn run(args: &Args) -> Result<Outcome, Box<dyn Error>> {
    if args.paths.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;

        let outcome = if check("<stdin>", &text, args)? {
            Outcome::Valid
        } else {
            Outcome::Rejected
        };

        return Ok(outcome);
    }

    let mut files = Vec::new();
    for path in &args.paths {
        collect_files(path, &mut files)?;
    }
    info!(count = files.len(), "checking files");

    let mut outcome = Outcome::Valid;
    for file in files {
        let name = file.display().to_string();
        debug!(file = %name, "reading");

        let text = match fs::read_to_string(&file) {
            Ok(text) => text,
            Err(err) => {
                warn!(file = %name, error = %err, "cannot read file");
                println!("error {}: {}", name, err);
                outcome = outcome.max(Outcome::Unreadable);
                continue;
            }
        };

        if !check(&name, &text, args)? {
            outcome = outcome.max(Outcome::Rejected);
        }
    }

    Ok(outcome)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(err) => {
            eprintln!("ERROR  {err}");
            process::exit(2);
        }
    }
}
