//! Validation of command-line input
//!
//! Everything here runs before a search starts, so rejected input never
//! reaches the digest.

use sha1pow_core::{
    Difficulty, Error as CoreError, Problem, SearchConfig, Solution, PROBLEM_LEN,
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Problem string must be exactly 16 characters long.")]
    ProblemLength(usize),

    #[error("Difficulty must be between 0 and 32.")]
    DifficultyRange(i64),

    #[error("Invalid solution: {0}")]
    Solution(#[source] CoreError),

    #[error("Invalid search settings: {0}")]
    Config(#[source] CoreError),
}

/// A validated solve request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub problem: Problem,
    pub difficulty: Difficulty,
}

/// Validate the two positional arguments
///
/// The problem length is counted in bytes, since the token is fed to the
/// digest as raw bytes.
pub fn parse_request(problem: &str, difficulty: i64) -> Result<Request, ArgsError> {
    if problem.len() != PROBLEM_LEN {
        return Err(ArgsError::ProblemLength(problem.len()));
    }
    let problem = problem
        .parse::<Problem>()
        .map_err(|_| ArgsError::ProblemLength(problem.len()))?;
    let difficulty =
        Difficulty::try_from(difficulty).map_err(|_| ArgsError::DifficultyRange(difficulty))?;

    Ok(Request {
        problem,
        difficulty,
    })
}

/// Validate a solution passed for verification
pub fn parse_solution(solution: &str) -> Result<Solution, ArgsError> {
    solution.parse().map_err(ArgsError::Solution)
}

/// Build the search configuration from optional overrides
pub fn search_config(
    threads: Option<usize>,
    max_index: Option<u64>,
) -> Result<SearchConfig, ArgsError> {
    let mut config = SearchConfig::default();
    if let Some(threads) = threads {
        config = config.with_threads(threads);
    }
    if let Some(max_index) = max_index {
        config = config.with_max_index(max_index);
    }
    config.validate().map_err(ArgsError::Config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha1pow_core::MAX_THREADS;

    #[test]
    fn test_accepts_valid_request() {
        let request = parse_request("abcdefghijklmnop", 20).unwrap();
        assert_eq!(request.problem.as_bytes(), b"abcdefghijklmnop");
        assert_eq!(request.difficulty.bits(), 20);

        assert!(parse_request("abcdefghijklmnop", 0).is_ok());
        assert!(parse_request("abcdefghijklmnop", 32).is_ok());
    }

    #[test]
    fn test_rejects_problem_length() {
        assert_eq!(
            parse_request("abcdefghijklmno", 4),
            Err(ArgsError::ProblemLength(15))
        );
        assert_eq!(
            parse_request("abcdefghijklmnopq", 4),
            Err(ArgsError::ProblemLength(17))
        );
        assert_eq!(parse_request("", 4), Err(ArgsError::ProblemLength(0)));
    }

    #[test]
    fn test_rejects_difficulty_range() {
        assert_eq!(
            parse_request("abcdefghijklmnop", -1),
            Err(ArgsError::DifficultyRange(-1))
        );
        assert_eq!(
            parse_request("abcdefghijklmnop", 33),
            Err(ArgsError::DifficultyRange(33))
        );
    }

    #[test]
    fn test_problem_checked_before_difficulty() {
        assert_eq!(
            parse_request("short", 99),
            Err(ArgsError::ProblemLength(5))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ArgsError::ProblemLength(3).to_string(),
            "Problem string must be exactly 16 characters long."
        );
        assert_eq!(
            ArgsError::DifficultyRange(40).to_string(),
            "Difficulty must be between 0 and 32."
        );
    }

    #[test]
    fn test_parse_solution() {
        assert_eq!(parse_solution("0000000000000011").unwrap().index(), 11);
        assert!(matches!(
            parse_solution("11"),
            Err(ArgsError::Solution(CoreError::InvalidSolutionLength(2)))
        ));
    }

    #[test]
    fn test_search_config() {
        let config = search_config(Some(3), Some(1000)).unwrap();
        assert_eq!(config.worker_count(), 3);
        assert_eq!(config.limit(), 1000);

        assert_eq!(
            search_config(Some(0), None),
            Err(ArgsError::Config(CoreError::NoWorkers))
        );
        assert!(search_config(None, Some(u64::MAX)).is_err());
    }

    #[test]
    fn test_search_config_rejects_oversized_thread_count() {
        assert_eq!(
            search_config(Some(20_000), Some(100_000_000)),
            Err(ArgsError::Config(CoreError::TooManyWorkers(20_000)))
        );
        assert_eq!(
            search_config(Some(MAX_THREADS + 1), None),
            Err(ArgsError::Config(CoreError::TooManyWorkers(MAX_THREADS + 1)))
        );
        assert!(search_config(Some(MAX_THREADS), None).is_ok());
    }
}
