//! Multi-threaded search.
//!
//! Worker `t` of `N` enumerates `t, t + N, t + 2N, ...` with its own
//! candidate buffer and digest state. Workers share one `found` flag and a
//! single-assignment result slot:
//!
//! - the flag is polled with a relaxed load before every digest;
//! - a worker with an accepted candidate claims it by moving the flag from
//!   `false` to `true` with an acquire/release CAS;
//! - only the CAS winner writes the slot, so it is written at most once.
//!
//! The driver joins every worker before reading the slot. If the OS refuses
//! to start a worker, the running ones are stopped through the same flag and
//! the search fails with [`SolveError::Spawn`].

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use crate::candidate::CandidateBuffer;
use crate::digest::Digest160;
use crate::error::SolveError;
use crate::mask::DifficultyMask;
use crate::params::DIGEST_WORDS;
use crate::report::SearchReport;
use crate::solve::Solver;
use crate::token::{Difficulty, Problem, Solution};

/// Result written by the winning worker
#[derive(Debug)]
struct Claim {
    solution: Solution,
    digest: [u32; DIGEST_WORDS],
    worker: usize,
}

/// How a worker left its loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WorkerExit {
    /// Found a candidate and won the claim; its result is in the slot
    Claimed,
    /// Found a candidate but another worker claimed first
    Preempted,
    /// Saw the flag set by another worker
    Stopped,
    /// Ran past the index limit
    Exhausted,
}

#[derive(Debug, Clone, Copy)]
struct WorkerOutcome {
    exit: WorkerExit,
    hashes: u64,
}

/// Read-only state handed to each worker
#[derive(Clone, Copy)]
struct WorkerContext<'a> {
    problem: &'a Problem,
    mask: DifficultyMask,
    limit: u64,
    stride: u64,
    found: &'a AtomicBool,
    slot: &'a OnceLock<Claim>,
}

impl<D: Digest160 + Default> Solver<D> {
    /// Search with [`SearchConfig::worker_count`](crate::SearchConfig::worker_count)
    /// threads and return whichever accepted candidate is claimed first.
    pub fn search_parallel(
        &self,
        problem: &Problem,
        difficulty: Difficulty,
    ) -> Result<SearchReport, SolveError> {
        let mask = DifficultyMask::new(difficulty);
        let limit = self.config().limit();
        let workers = self.config().worker_count();

        let found = AtomicBool::new(false);
        let slot = OnceLock::new();
        let start = Instant::now();

        log::debug!(
            "parallel search: problem={:?} difficulty={} workers={} limit={}",
            problem,
            difficulty,
            workers,
            limit
        );

        let (outcomes, spawn_error) = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);
            let mut spawn_error = None;

            for worker in 0..workers {
                let ctx = WorkerContext {
                    problem,
                    mask,
                    limit,
                    stride: workers as u64,
                    found: &found,
                    slot: &slot,
                };
                let spawned = thread::Builder::new()
                    .name(format!("sha1pow-worker-{worker}"))
                    .spawn_scoped(scope, move || run_worker::<D>(worker, ctx));

                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        // Stop the workers that did start
                        found.store(true, Ordering::Release);
                        spawn_error = Some(SolveError::Spawn {
                            worker,
                            workers,
                            reason: e.to_string(),
                        });
                        break;
                    }
                }
            }

            let outcomes: Vec<WorkerOutcome> = handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect();
            (outcomes, spawn_error)
        });

        if let Some(error) = spawn_error {
            log::error!("{}", error);
            return Err(error);
        }

        let hashes = outcomes.iter().map(|outcome| outcome.hashes).sum();
        debug_assert!(
            outcomes
                .iter()
                .filter(|outcome| outcome.exit == WorkerExit::Claimed)
                .count()
                <= 1
        );
        let elapsed = start.elapsed();

        match slot.into_inner() {
            Some(claim) => {
                let report = SearchReport {
                    solution: claim.solution,
                    digest: claim.digest,
                    hashes,
                    threads: workers,
                    elapsed,
                };
                log::info!(
                    "worker {} found {} after {} hashes on {} threads ({:.0} H/s)",
                    claim.worker,
                    report.solution,
                    report.hashes,
                    workers,
                    report.hashrate()
                );
                Ok(report)
            }
            None => {
                log::warn!("search exhausted {} candidates at difficulty {}", limit, difficulty);
                Err(SolveError::Exhausted {
                    limit,
                    difficulty: difficulty.bits(),
                })
            }
        }
    }
}

fn run_worker<D: Digest160 + Default>(worker: usize, ctx: WorkerContext<'_>) -> WorkerOutcome {
    let mut digest = D::default();
    let mut buffer = CandidateBuffer::new(ctx.problem);
    let mut hashes = 0u64;
    let mut index = worker as u64;

    let exit = loop {
        if index >= ctx.limit {
            break WorkerExit::Exhausted;
        }
        if ctx.found.load(Ordering::Relaxed) {
            break WorkerExit::Stopped;
        }

        buffer.set_index(index);
        let words = digest.digest_words(buffer.as_bytes());
        hashes += 1;

        if ctx.mask.accepts(words[0]) {
            break claim(worker, ctx, &buffer, words);
        }

        index = match index.checked_add(ctx.stride) {
            Some(next) => next,
            None => break WorkerExit::Exhausted,
        };
    };

    log::debug!("worker {} exited {:?} after {} hashes", worker, exit, hashes);
    WorkerOutcome { exit, hashes }
}

fn claim(
    worker: usize,
    ctx: WorkerContext<'_>,
    buffer: &CandidateBuffer,
    digest: [u32; DIGEST_WORDS],
) -> WorkerExit {
    if ctx
        .found
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        return WorkerExit::Preempted;
    }

    ctx.slot
        .set(Claim {
            solution: buffer.solution(),
            digest,
            worker,
        })
        .ok();
    WorkerExit::Claimed
}
