//! Matching-block similarity ratio.
//!
//! Finds the longest common contiguous block, recurses into the unmatched
//! regions on either side, and scores `2 * matched / (len_a + len_b)`.
//! Elements are Unicode scalar values. Long second strings get the
//! popular-element heuristic: characters that occur in more than 1% of
//! the positions are not indexed, although a match found elsewhere may
//! still extend over them.

use std::collections::HashMap;

/// Second-string length at which popular elements stop being indexed.
const POPULAR_MIN_LEN: usize = 200;

/// Returns the similarity of `a` and `b` in `[0.0, 1.0]`.
///
/// Two empty strings are identical and score 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let matcher = SequenceMatcher::new(a, b);
    let total = matcher.a.len() + matcher.b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matcher.matched_len();
    (2 * matched) as f64 / total as f64
}

/// A matching block: `a[a_start..a_start + size] == b[b_start..b_start + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a_start: usize,
    b_start: usize,
    size: usize,
}

struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of each indexed element of `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

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

    /// Longest block within `a[alo..ahi]` and `b[blo..bhi]`, earliest in `a`
    /// and then earliest in `b` on ties. Size zero when nothing matches.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);

        // Length of the match ending at (i - 1, j), keyed by j.
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = match j.checked_sub(1) {
                        Some(p) => j2len.get(&p).copied().unwrap_or(0),
                        None => 0,
                    };
                    let k = prev + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Extend over equal elements that were not indexed.
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

        Block {
            a_start: best_i,
            b_start: best_j,
            size: best_size,
        }
    }

    /// All non-overlapping matching blocks, longest first by recursion.
    fn matching_blocks(&self) -> Vec<Block> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            let (i, j, k) = (block.a_start, block.b_start, block.size);
            blocks.push(block);
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        blocks.sort_by_key(|b| (b.a_start, b.b_start));
        blocks
    }

    fn matched_len(&self) -> usize {
        self.matching_blocks().iter().map(|b| b.size).sum()
    }
}
