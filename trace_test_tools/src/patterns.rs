use std::env;
use std::ops::RangeInclusive;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

const SEED_VAR: &str = "SORT_TRACE_TEST_SEED";

static SEED: OnceCell<u64> = OnceCell::new();

/// Seed shared by every random pattern of this process.
///
/// Taken from `SORT_TRACE_TEST_SEED` if set, otherwise drawn once and printed so a failing run
/// can be repeated.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| {
        let seed = env::var(SEED_VAR)
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or_else(|| thread_rng().gen::<u64>());
        println!("\n{SEED_VAR}={seed}\n");
        seed
    })
}

fn rng_for(len: usize) -> StdRng {
    // Different lengths get different streams, the same length always the same one.
    StdRng::seed_from_u64(random_init_seed() ^ (len as u64).rotate_left(32))
}

/// A shuffled permutation of `1..=len`.
pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut v = ascending(len);
    v.shuffle(&mut rng_for(len));
    v
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<RangeInclusive<i32>>,
{
    //     .
    // : . : :
    // :.:::.::

    let range = range.into();
    let mut rng = rng_for(len);
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Values drawn from `1..=len` with a zipfian distribution, producing many duplicates of the
/// small values.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = rng_for(len);
    let dist = match ZipfDistribution::new(len, exponent) {
        Ok(dist) => dist,
        Err(()) => panic!("invalid zipf parameters len: {len} exponent: {exponent}"),
    };

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (1..=len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (1..=len as i32).rev().collect()
}

/// Ascending runs of roughly `len / runs` elements each.
pub fn saw_ascending(len: usize, runs: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    let run_len = (len / runs.max(1)).max(1);
    (0..len).map(|i| (i % run_len) as i32).collect()
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let half = len / 2;
    (0..len)
        .map(|i| {
            let height = if i < half { i } else { len - i - 1 };
            height as i32
        })
        .collect()
}
