//! Base sequence similarity.
//!
//! [`ratio`] is the classic matching-block ratio: find the longest common
//! contiguous run, recurse into the unmatched left and right remainders, sum
//! the block lengths `M` and score `2M / (len(a) + len(b))`.
//!
//! This is not LCS. The greedy choice of the longest block decides what is
//! left to match on either side, so the block search has to pick the same
//! block every time: earliest start in `a`, then earliest start in `b`.
//!
//! When `b` has 200 or more elements, elements occurring more than
//! `len(b) / 100 + 1` times are treated as "popular": they are not used to
//! seed a block, but a block found elsewhere may still extend across them.

use std::collections::HashMap;

use crate::score::MatchScore;

const POPULAR_MIN_LEN: usize = 200;

/// A run of `size` equal chars at `a[a_start..]` and `b[b_start..]`.
///
/// Offsets count chars, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

struct SequenceMatcher<'s> {
    a: &'s [char],
    b: &'s [char],
    b2j: HashMap<char, Vec<usize>>,
}

impl<'s> SequenceMatcher<'s> {
    fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &ch) in b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }

        if b.len() >= POPULAR_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b2j }
    }

    /// Longest block inside `a[alo..ahi]` x `b[blo..bhi]`.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);

        // j2len[j] = length of the block ending at a[i - 1], b[j].
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        let mut next_j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            next_j2len.clear();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            std::mem::swap(&mut j2len, &mut next_j2len);
        }

        // Popular elements never seed a block; let the block grow over them.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchingBlock {
            a_start: best_i,
            b_start: best_j,
            size: best_size,
        }
    }

    fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            blocks.push(block);
            if alo < block.a_start && blo < block.b_start {
                pending.push((alo, block.a_start, blo, block.b_start));
            }
            let a_end = block.a_start + block.size;
            let b_end = block.b_start + block.size;
            if a_end < ahi && b_end < bhi {
                pending.push((a_end, ahi, b_end, bhi));
            }
        }

        blocks.sort_unstable_by_key(|block| (block.a_start, block.b_start));

        // Adjacent blocks are reported as one.
        let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len());
        for block in blocks {
            if let Some(last) = merged.last_mut() {
                if last.a_start + last.size == block.a_start
                    && last.b_start + last.size == block.b_start
                {
                    last.size += block.size;
                    continue;
                }
            }
            merged.push(block);
        }
        merged
    }
}

/// Matching blocks of `a` against `b`, ordered by position.
///
/// No zero-size sentinel is appended.
pub fn matching_blocks(a: &str, b: &str) -> Vec<MatchingBlock> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    SequenceMatcher::new(&a, &b).matching_blocks()
}

/// Matching-block similarity of two strings on the 0–100 scale.
///
/// Two identical strings (including two empty strings) score 100. One empty
/// side against a non-empty one scores 0.
pub fn ratio(a: &str, b: &str) -> MatchScore {
    if a == b {
        return MatchScore::MAX;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    let matched: usize = SequenceMatcher::new(&a, &b)
        .matching_blocks()
        .iter()
        .map(|block| block.size)
        .sum();

    MatchScore::from_ratio(2.0 * matched as f64 / total as f64)
}
