use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::{LevelFilter, error, info};
use safecalc::{
    Calculation, safe_eval_with_limits,
    interpreter::limits::{Limits, MAX_DEPTH, MAX_INPUT_LEN},
};

/// safecalc evaluates arithmetic expressions built from numbers, `+ - * /`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every line of this file instead of a single expression.
    /// Blank lines and lines starting with `#` are skipped.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Longest accepted expression, in characters. Whitespace is not counted.
    #[arg(long, default_value_t = MAX_INPUT_LEN)]
    max_length: usize,

    /// Deepest accepted evaluator recursion.
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: usize,

    /// Increases log output; repeat for more (`-vvv` traces every step).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Lines are read from stdin when neither an
    /// expression nor a file is given.
    expression: Option<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();
}

/// Evaluates one expression, printing the calculation or the error.
///
/// Returns whether evaluation succeeded.
fn calculate(expression: &str, limits: Limits) -> bool {
    info!("Calculating expression: {expression}");
    match safe_eval_with_limits(expression, limits) {
        Ok(result) => {
            info!("Calculation result: {result:?}");
            let calc = Calculation { expression: expression.to_string(),
                                     result };
            println!("{calc}");
            true
        },
        Err(e) => {
            error!("Calculation error: {e}");
            eprintln!("Error: {e}");
            false
        },
    }
}

fn calculate_lines<I>(lines: I, limits: Limits) -> bool
    where I: IntoIterator<Item = io::Result<String>>
{
    let mut all_ok = true;
    for line in lines {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read input: {e}");
                eprintln!("Error: failed to read input: {e}");
                return false;
            },
        };
        let expression = line.trim();
        if expression.is_empty() || expression.starts_with('#') {
            continue;
        }
        all_ok &= calculate(expression, limits);
    }
    all_ok
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let limits = Limits { max_input_len: args.max_length,
                          max_depth:     args.max_depth, };

    let all_ok = if let Some(expression) = &args.expression {
        calculate(expression, limits)
    } else if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::from(2);
        };
        calculate_lines(script.lines().map(|line| Ok(line.to_string())), limits)
    } else {
        let stdin = io::stdin();
        calculate_lines(stdin.lock().lines(), limits)
    };

    if all_ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
