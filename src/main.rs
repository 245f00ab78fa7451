//! CLI tool to run assignment scripts and print the final variables.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

/// Evaluate an `identifier = expression;` script and print every
/// variable's final value, sorted by name.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run. Prompts for a file name when omitted.
    file: Option<String>,

    /// Only check that the script runs; print nothing on success.
    #[arg(long)]
    check: bool,
}

fn prompt_file_name() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter the file name: ")?;
    stdout.flush()?;

    let mut name = String::new();
    io::stdin().lock().read_line(&mut name)?;
    Ok(name.trim().to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let path = match args.file {
        Some(path) => path,
        None => match prompt_file_name() {
            Ok(path) if !path.is_empty() => path,
            Ok(_) => {
                eprintln!("Error: no file specified");
                return ExitCode::from(2);
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(2);
            }
        },
    };

    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match assigncalc::run_str(&content) {
        Ok(vars) if args.check => {
            eprintln!("{path}: valid ({} variable(s))", vars.len());
            ExitCode::SUCCESS
        }
        Ok(vars) => {
            print!("{}", assigncalc::report::format(&vars));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{path}: {e}");
            ExitCode::FAILURE
        }
    }
}
