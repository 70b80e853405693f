use std::env;
use std::ffi::OsString;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};
use std::path::Path;
use trash_core::{relocate, ExitStatusLike, RelocateOptions};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TRASH_LOG";

const USAGE: &str = "\
Usage: trash [--allow-missing] <path>...

Move files/directories to the OS Trash (Linux: ~/.local/share/Trash/files, macOS: ~/.Trash).

Options:
  --allow-missing   Ignore missing paths (exit 0).
  -h, --help        Show this help.
";

#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Help,
    Trash { allow_missing: bool, targets: Vec<OsString> },
}

#[derive(Debug, PartialEq, Eq)]
enum CliError {
    UnknownOption(String),
    NoTargets,
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOption(arg) => write!(f, "unknown option: {arg}"),
            Self::NoTargets => write!(f, "no paths given"),
        }
    }
}

/// Arguments stay `OsString` so that file names which are not valid UTF-8
/// still reach the trash.
fn parse_args(args: &[OsString]) -> Result<Invocation, CliError> {
    let mut allow_missing = false;
    let mut targets = Vec::new();

    for arg in args {
        let text = arg.to_string_lossy();
        match text.as_ref() {
            "-h" | "--help" => return Ok(Invocation::Help),
            "--allow-missing" => allow_missing = true,
            _ if text.starts_with('-') => return Err(CliError::UnknownOption(text.to_string())),
            _ => targets.push(arg.clone()),
        }
    }

    if targets.is_empty() {
        return Err(CliError::NoTargets);
    }
    Ok(Invocation::Trash { allow_missing, targets })
}

/// Runs one invocation and returns the process exit code.
fn run(
    args: &[OsString],
    cwd: &Path,
    defaults: RelocateOptions,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> io::Result<u8> {
    let (allow_missing, targets) = match parse_args(args) {
        Ok(Invocation::Help) => {
            write!(stdout, "{USAGE}")?;
            return Ok(ExitStatusLike::Ok.as_code());
        }
        Ok(Invocation::Trash { allow_missing, targets }) => (allow_missing, targets),
        Err(err) => {
            if let CliError::UnknownOption(_) = err {
                writeln!(stderr, "trash: {err}")?;
            }
            write!(stderr, "{USAGE}")?;
            return Ok(ExitStatusLike::Usage.as_code());
        }
    };

    let options = defaults.allow_missing(allow_missing);
    let result = match relocate(&targets, cwd, &options) {
        Ok(result) => result,
        Err(err) => {
            writeln!(stderr, "trash: {err}")?;
            return Ok(ExitStatusLike::Error.as_code());
        }
    };

    for error in &result.errors {
        writeln!(stderr, "{error}")?;
    }
    if !allow_missing {
        for missing in &result.missing {
            writeln!(stderr, "trash: missing: {missing}")?;
        }
    }

    Ok(result.exit_status(allow_missing).as_code())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<OsString> = env::args_os().skip(1).collect();
    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            eprintln!("trash: unable to determine the working directory: {err}");
            std::process::exit(1);
        }
    };

    let code = run(
        &args,
        &cwd,
        RelocateOptions::default(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .unwrap_or_else(|err| {
        eprintln!("trash: failed to write output: {err}");
        ExitStatusLike::Error.as_code()
    });
    std::process::exit(i32::from(code));
}
