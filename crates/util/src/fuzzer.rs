use rand::seq::SliceRandom;
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use score_forest::Record;

/// Seeded random workload generator.
///
/// Uses xoshiro256** so a failing run can be replayed from its `seed`.
///
/// # Examples
///
/// ```
/// use score_forest_util::fuzzer::Fuzzer;
///
/// let mut fuzzer = Fuzzer::new(Some(7));
/// let n = fuzzer.random_int(1, 10);
/// assert!((1..=10).contains(&n));
///
/// let records = fuzzer.records(20, 0, 100);
/// assert_eq!(records.len(), 20);
/// ```
pub struct Fuzzer {
    pub seed: u64,
    rng: Xoshiro256StarStar,
}

/// One step of a random container workload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Insert(Record),
    Remove(String),
    Search(i64),
    ExtractMax,
}

impl Fuzzer {
    /// Create a fuzzer; without a seed one is drawn from `OsRng`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| OsRng.next_u64());
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    pub fn pick<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
        let idx = self.rng.gen_range(0..elements.len());
        &elements[idx]
    }

    pub fn shuffle<T>(&mut self, elements: &mut [T]) {
        elements.shuffle(&mut self.rng);
    }

    /// `count` records with distinct ids and scores in `[min, max]`.
    pub fn records(&mut self, count: usize, min: i64, max: i64) -> Vec<Record> {
        (0..count)
            .map(|i| Record::new(format!("r{i}"), self.random_int(min, max)))
            .collect()
    }

    /// Random mix of container operations over ids `r0..r{ids}`.
    pub fn ops(&mut self, len: usize, ids: usize, max_score: i64) -> Vec<Op> {
        (0..len)
            .map(|_| {
                let id = format!("r{}", self.rng.gen_range(0..ids.max(1)));
                match self.rng.gen_range(0..10) {
                    0..=4 => Op::Insert(Record::new(id, self.random_int(0, max_score))),
                    5 | 6 => Op::Remove(id),
                    7 | 8 => Op::Search(self.random_int(0, max_score)),
                    _ => Op::ExtractMax,
                }
            })
            .collect()
    }
}
