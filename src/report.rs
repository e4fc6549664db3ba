//! Machine-readable output for `--json`

use serde::{Deserialize, Serialize};
use sha1pow_core::{
    solution_digest, verify, Difficulty, Problem, SearchConfig, SearchReport, Solution,
};

/// A found solution and the work it took
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionReport {
    pub problem: String,
    pub difficulty: u32,
    pub solution: String,
    pub index: u64,
    /// SHA-1 of `problem || solution || problem`, hex
    pub digest: String,
    pub hashes: u64,
    pub threads: usize,
    pub elapsed_secs: f64,
    pub hashrate: f64,
    /// Settings the search ran with
    pub config: SearchConfig,
}

impl SolutionReport {
    pub fn new(
        problem: &Problem,
        difficulty: Difficulty,
        config: SearchConfig,
        report: &SearchReport,
    ) -> Self {
        Self {
            problem: String::from_utf8_lossy(problem.as_bytes()).into_owned(),
            difficulty: difficulty.bits(),
            solution: report.solution.to_string(),
            index: report.index(),
            digest: hex::encode(report.digest_bytes()),
            hashes: report.hashes,
            threads: report.threads,
            elapsed_secs: report.elapsed.as_secs_f64(),
            hashrate: report.hashrate(),
            config,
        }
    }
}

/// Result of checking a caller-supplied solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyReport {
    pub problem: String,
    pub difficulty: u32,
    pub solution: String,
    pub digest: String,
    pub valid: bool,
}

impl VerifyReport {
    pub fn new(problem: &Problem, difficulty: Difficulty, solution: &Solution) -> Self {
        let digest: Vec<u8> = solution_digest(problem, solution)
            .iter()
            .flat_map(|word| word.to_be_bytes())
            .collect();

        Self {
            problem: String::from_utf8_lossy(problem.as_bytes()).into_owned(),
            difficulty: difficulty.bits(),
            solution: solution.to_string(),
            digest: hex::encode(digest),
            valid: verify(problem, solution, difficulty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha1pow_core::Solver;

    #[test]
    fn test_solution_report_json() {
        let problem: Problem = "abcdefghijklmnop".parse().unwrap();
        let difficulty = Difficulty::saturating(8);
        let config = SearchConfig::default().with_max_index(1000);
        let found = Solver::with_config(config)
            .search(&problem, difficulty)
            .unwrap();

        let report = SolutionReport::new(&problem, difficulty, config, &found);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["problem"], "abcdefghijklmnop");
        assert_eq!(json["difficulty"], 8);
        assert_eq!(json["solution"], "0000000000000163");
        assert_eq!(json["index"], 163);
        assert_eq!(json["digest"], "007bd489203e8ad63ad4d9b981e12d531ec4ac4d");
        assert_eq!(json["hashes"], 164);
        assert_eq!(json["threads"], 1);
        assert_eq!(json["config"]["max_index"], 1000);
        assert!(json["config"]["threads"].is_null());

        let parsed: SolutionReport = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.config, config);
    }

    #[test]
    fn test_verify_report() {
        let problem: Problem = "AAAAAAAAAAAAAAAA".parse().unwrap();
        let solution: Solution = "0000000000000044".parse().unwrap();

        let ok = VerifyReport::new(&problem, Difficulty::saturating(4), &solution);
        assert!(ok.valid);
        assert_eq!(ok.digest, "01803f607914bf09d9a87b09bc5ddea1b5c4c203");

        let too_hard = VerifyReport::new(&problem, Difficulty::saturating(12), &solution);
        assert!(!too_hard.valid);
    }
}
