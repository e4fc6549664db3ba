//! sha1pow CLI
//!
//! Solves a SHA-1 proof-of-work challenge:
//!
//! ```text
//! sha1pow <problem> <difficulty>
//! ```
//!
//! Prints the 16-digit solution on stdout. Any invalid input exits with
//! status 1 and a message on stdout before the search starts.

use std::process;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use sha1pow::args::{parse_request, parse_solution, search_config, Request};
use sha1pow::report::{SolutionReport, VerifyReport};
use sha1pow::Solver;

#[derive(Parser)]
#[command(name = "sha1pow")]
#[command(author = "Cyberia")]
#[command(version = "0.1.0")]
#[command(about = "SHA-1 proof-of-work solver for 16-byte problem tokens")]
struct Cli {
    /// Problem token (exactly 16 characters)
    problem: String,

    /// Leading zero bits required in the first hash word (0-32)
    #[arg(allow_negative_numbers = true)]
    difficulty: i64,

    /// Search with one thread per CPU core
    #[arg(short, long)]
    parallel: bool,

    /// Number of worker threads (implies --parallel)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Stop after this many candidates (default: the full 16-digit space)
    #[arg(long)]
    max_index: Option<u64>,

    /// Check a solution instead of searching
    #[arg(long, value_name = "SOLUTION")]
    verify: Option<String>,

    /// Print a JSON report instead of the bare solution
    #[arg(long)]
    json: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            print!("{}", e);
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            process::exit(code);
        }
    };

    init_logging(cli.verbose);

    let result = match parse_request(&cli.problem, cli.difficulty) {
        Ok(request) => match cli.verify.as_deref() {
            Some(solution) => cmd_verify(request, solution, cli.json),
            None => cmd_solve(request, &cli),
        },
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            println!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn cmd_solve(request: Request, cli: &Cli) -> anyhow::Result<bool> {
    let config = search_config(cli.threads, cli.max_index)?;
    let solver = Solver::with_config(config);
    log::debug!("search config: {:?}", config);

    let report = if cli.parallel || cli.threads.is_some() {
        solver.search_parallel(&request.problem, request.difficulty)?
    } else {
        solver.search(&request.problem, request.difficulty)?
    };

    if cli.json {
        let json =
            SolutionReport::new(&request.problem, request.difficulty, config, &report);
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}", report.solution);
    }

    Ok(true)
}

fn cmd_verify(request: Request, solution: &str, json: bool) -> anyhow::Result<bool> {
    let solution = parse_solution(solution)?;
    let report = VerifyReport::new(&request.problem, request.difficulty, &solution);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", if report.valid { "valid" } else { "invalid" });
    }

    Ok(report.valid)
}
