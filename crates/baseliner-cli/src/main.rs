//! Flagless entry point: splice recorded baseline blocks back into their
//! test source files, then truncate the baseline.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use baseliner_core::config::BaselinerConfig;
use baseliner_core::errors::BaselinerErrorCode;
use baseliner_engine::pipeline;
use baseliner_engine::report::{ConsoleReporter, Reporter};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: baseliner [ROOT]

Splices recorded baseline blocks back into their test source files,
then truncates the baseline file. ROOT defaults to the current
directory. Log verbosity is controlled by BASELINER_LOG.";

enum ParsedArgs {
    Run(PathBuf),
    Help,
}

fn main() {
    init_tracing();
    let exit_code = run(std::env::args_os());
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("BASELINER_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run<I>(args: I) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    let root = match parse_args(args) {
        Ok(ParsedArgs::Run(root)) => root,
        Ok(ParsedArgs::Help) => {
            println!("{USAGE}");
            return 0;
        }
        Err(message) => {
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "error: {message}");
            let _ = writeln!(stderr, "{USAGE}");
            return 2;
        }
    };

    let config = match BaselinerConfig::load(&root, None) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error [{}]: {error}", error.error_code());
            return 1;
        }
    };

    match pipeline::run(&root, &config) {
        Ok(report) => {
            let reporter = ConsoleReporter::default();
            match reporter.generate(&report) {
                Ok(text) => {
                    print!("{text}");
                    0
                }
                Err(message) => {
                    eprintln!("error: {message}");
                    1
                }
            }
        }
        Err(error) => {
            eprintln!("error [{}]: {error}", error.error_code());
            1
        }
    }
}

fn parse_args<I>(args: I) -> Result<ParsedArgs, String>
where
    I: IntoIterator<Item = OsString>,
{
    let mut iter = args.into_iter();
    let _argv0 = iter.next();

    let mut root: Option<PathBuf> = None;
    for argument in iter {
        let arg = argument.to_string_lossy().into_owned();
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParsedArgs::Help),
            s if s.starts_with('-') => return Err(format!("unknown option: {s}")),
            _ => {
                if root.is_some() {
                    return Err("at most one ROOT argument is accepted".to_string());
                }
                root = Some(PathBuf::from(argument));
            }
        }
    }

    Ok(ParsedArgs::Run(root.unwrap_or_else(|| PathBuf::from("."))))
}
