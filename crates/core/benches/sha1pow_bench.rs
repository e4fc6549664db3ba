//! Benchmarks for the sha1pow search engine

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sha1pow_core::{
    CandidateBuffer, Difficulty, Digest160, Problem, SearchConfig, Sha1Digest, Solver,
};

fn problem() -> Problem {
    Problem::new(*b"abcdefghijklmnop")
}

fn bench_candidate(c: &mut Criterion) {
    let mut digest = Sha1Digest::new();
    let mut buffer = CandidateBuffer::new(&problem());

    c.bench_function("candidate_encode_and_hash", |b| {
        let mut index: u64 = 0;
        b.iter(|| {
            buffer.set_index(black_box(index));
            index += 1;
            digest.first_word(buffer.as_bytes())
        })
    });
}

fn bench_solvers(c: &mut Criterion) {
    let difficulty = Difficulty::saturating(16);
    let solver = Solver::with_config(SearchConfig::default());

    c.bench_function("solve_sequential_d16", |b| {
        b.iter(|| solver.search(black_box(&problem()), difficulty))
    });
    c.bench_function("solve_parallel_d16", |b| {
        b.iter(|| solver.search_parallel(black_box(&problem()), difficulty))
    });
}

criterion_group!(benches, bench_candidate, bench_solvers);
criterion_main!(benches);
