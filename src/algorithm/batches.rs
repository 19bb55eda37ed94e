use crate::tiles::tile::Token;
use std::collections::HashSet;

/// A group of reserve tiles tried together
pub type Batch = Vec<Token>;

/// Enumerate the batches one driver round tries, in order
///
/// Sizes run from 1 to `max_size`; within a size, combinations follow
/// reserve positions lexicographically. Jokers take part only when
/// `include_jokers` is set. Batches with identical content are listed once,
/// at their first position.
pub fn candidate_batches(reserve: &[Token], max_size: usize, include_jokers: bool) -> Vec<Batch> {
    let pool: Vec<Token> = reserve
        .iter()
        .copied()
        .filter(|token| include_jokers || !token.is_joker())
        .collect();

    let mut seen: HashSet<Batch> = HashSet::new();
    let mut batches = Vec::new();
    for size in 1..=max_size.min(pool.len()) {
        for indices in IndexCombinations::new(pool.len(), size) {
            let batch: Batch = indices
                .iter()
                .filter_map(|&index| pool.get(index).copied())
                .collect();
            let mut content = batch.clone();
            content.sort_unstable();
            if seen.insert(content) {
                batches.push(batch);
            }
        }
    }
    batches
}

/// Lexicographic `k`-combinations of `0..n`
pub struct IndexCombinations {
    n: usize,
    current: Option<Vec<usize>>,
}

impl IndexCombinations {
    /// Start enumerating `k`-subsets of `0..n`
    pub fn new(n: usize, k: usize) -> Self {
        let current = (k <= n).then(|| (0..k).collect());
        Self { n, current }
    }
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current.take()?;
        let k = result.len();

        // Advance the rightmost index that still has room
        let mut following = result.clone();
        let mut position = k;
        while position > 0 {
            position -= 1;
            let limit = self.n - k + position;
            let Some(slot) = following.get_mut(position) else {
                break;
            };
            if *slot < limit {
                *slot += 1;
                let base = *slot;
                for (offset, later) in following.iter_mut().skip(position + 1).enumerate() {
                    *later = base + offset + 1;
                }
                self.current = Some(following);
                break;
            }
        }

        Some(result)
    }
}
