#![allow(clippy::collapsible_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{io::BufReader, path::PathBuf};

use clap::Parser;

use tseitin_cnf::{
    dimacs,
    oracle::{self, builtin::BuiltinOracle},
    structures::clause::Clause,
    types::err::{self},
};

mod config;

/// Decides the satisfiability of a DIMACS CNF file with the built-in oracle.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The DIMACS file to read.
    pub file: PathBuf,

    /// Write a model, if one exists.
    #[arg(long)]
    pub model: bool,

    /// Write the instance read, in DIMACS form.
    #[arg(long)]
    pub dimacs: bool,

    /// The time limit of the solve, in seconds (zero for no limit).
    #[arg(long, value_name = "SECS")]
    pub time_limit: Option<u64>,

    /// The seed for random choices.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// The probability of valuing an atom true when freely choosing a value.
    #[arg(long, value_name = "P")]
    pub polarity_lean: Option<f64>,

    /// The probability of choosing a random atom when making a decision.
    #[arg(long, value_name = "P")]
    pub random_decision_bias: Option<f64>,

    /// Disable phase saving.
    #[arg(long)]
    pub no_phase_saving: bool,
}

const EXIT_SATISFIABLE: i32 = 10;
const EXIT_UNSATISFIABLE: i32 = 20;
const EXIT_UNKNOWN: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    #[cfg(feature = "log")]
    init_logger();

    let args = Args::parse();

    let config = match config::config_from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            println!("c {message}");
            std::process::exit(EXIT_ERROR);
        }
    };

    println!("c Reading DIMACS file from {:?}", args.file);

    let file = match std::fs::File::open(&args.file) {
        Ok(file) => file,
        Err(e) => {
            println!("c Failed to open CNF file: {e}");
            std::process::exit(EXIT_ERROR);
        }
    };

    let cnf = match dimacs::read_dimacs(BufReader::new(&file)) {
        Ok(cnf) => cnf,
        Err(e) => {
            println!("c Parse error: {e}");
            std::process::exit(EXIT_ERROR);
        }
    };

    println!(
        "c Parsed {} clauses over {} atoms",
        cnf.clause_count(),
        cnf.atom_count()
    );

    if args.dimacs {
        print!("{}", dimacs::render(&cnf));
    }

    let oracle = BuiltinOracle::from_config(config);

    match oracle::solve(&oracle, &cnf) {
        Ok(Some(model)) => {
            println!("s SATISFIABLE");
            if args.model {
                println!("v {}", model.literals().as_dimacs(true));
            }
            std::process::exit(EXIT_SATISFIABLE);
        }

        Ok(None) => {
            println!("s UNSATISFIABLE");
            std::process::exit(EXIT_UNSATISFIABLE);
        }

        Err(err::ErrorKind::Timeout) => {
            println!("s UNKNOWN");
            std::process::exit(EXIT_UNKNOWN);
        }

        Err(e) => {
            println!("c Solve error: {e}");
            std::process::exit(EXIT_ERROR);
        }
    }
}

/// Installs a logger writing every record to stderr.
#[cfg(feature = "log")]
fn init_logger() {
    use log::LevelFilter;
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config as LogConfig, Root},
    };

    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();

    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Trace));

    match log_config {
        Ok(log_config) => {
            if log4rs::init_config(log_config).is_err() {
                println!("c Failed to install a logger");
            }
        }
        Err(e) => println!("c Invalid log configuration: {e}"),
    }
}
