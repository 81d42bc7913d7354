//! Formula simplifier - Command Line Interface
//!
//! Reads one formula per line and prints one result per line.

use clap::{Parser, ValueEnum};
use qmc_logic::io::{simplify_line, simplify_lines, ERROR_MARKER};
use qmc_logic::{strip_whitespace, CoverCheck, Formula, Simplifier, SimplifyConfig};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, ValueEnum)]
enum CheckMode {
    /// Compare covered minterm sets (default)
    Exact,
    /// Compare integer OR-masks of the implicants
    Mask,
}

impl From<CheckMode> for CoverCheck {
    fn from(val: CheckMode) -> Self {
        match val {
            CheckMode::Exact => CoverCheck::Exact,
            CheckMode::Mask => CoverCheck::Mask,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Quine-McCluskey propositional formula simplifier", long_about = None)]
#[command(version)]
struct Args {
    /// Input file with one formula per line (reads stdin if omitted)
    #[arg(value_name = "FILE", conflicts_with = "expr")]
    input: Option<PathBuf>,

    /// Simplify a single formula given on the command line
    #[arg(short = 'e', long = "expr")]
    expr: Option<String>,

    /// How candidate covers are checked
    #[arg(short = 'c', long = "cover-check", value_enum, default_value = "exact")]
    cover_check: CheckMode,

    /// Stop the cover search after this many candidate subsets
    #[arg(long = "max-cover-candidates")]
    max_cover_candidates: Option<u64>,

    /// Do not rewrite results as x^y, x>y or x/y
    #[arg(long = "no-patterns")]
    no_patterns: bool,

    /// Reject a shorter result that is not equivalent to the input
    #[arg(long = "verify")]
    verify: bool,

    /// Print minterms, prime implicants and the chosen cover to stderr
    #[arg(short = 's', long = "steps", requires = "expr")]
    steps: bool,
}

fn print_steps(simplifier: &Simplifier, text: &str) {
    let Ok(formula) = Formula::parse(&strip_whitespace(text)) else {
        return;
    };
    let report = simplifier.analyze(&formula);
    let join = |set: &std::collections::BTreeSet<qmc_logic::cover::Implicant>| {
        set.iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    let variables: String = report.variables.iter().collect();
    eprintln!("Variables:        {}", variables);
    eprintln!("Minterms:         {}", join(&report.minterms));
    eprintln!("Prime implicants: {}", join(&report.prime_implicants));
    eprintln!("Cover:            {}", join(&report.cover));
    if let Some(minimized) = &report.minimized {
        eprintln!("Sum of products:  {}", minimized);
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = SimplifyConfig {
        cover_check: args.cover_check.into(),
        max_cover_candidates: args.max_cover_candidates,
        recognize_two_variable_forms: !args.no_patterns,
        verify: args.verify,
    };
    let simplifier = Simplifier::new(config);

    if let Some(ref text) = args.expr {
        if args.steps {
            print_steps(&simplifier, text);
        }
        let result = simplify_line(&simplifier, text).unwrap_or_else(|| ERROR_MARKER.to_string());
        println!("{}", result);
        if result == ERROR_MARKER {
            process::exit(1);
        }
        return;
    }

    let result = match args.input {
        Some(ref path) => match File::open(path) {
            Ok(file) => simplify_lines(&simplifier, BufReader::new(file), io::stdout().lock()),
            Err(e) => {
                eprintln!("Error reading input file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => simplify_lines(&simplifier, io::stdin().lock(), io::stdout().lock()),
    };

    match result {
        Ok(count) => log::info!("processed {} formulas", count),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
