//! Four ways to compute R(n) = R(n - 2) + R(n - 3)
//!
//! The sequence is seeded with R(0) = 0, R(1) = 1, R(2) = 2 and computed
//! over `u64` with wrapping addition. Every [`Strategy`] produces the same
//! value for the same `n`; they differ only in time and memory:
//!
//! | strategy    | time   | memory |
//! |-------------|--------|--------|
//! | recursive   | O(2^n) | O(n)   |
//! | top-down    | O(n)   | O(n)   |
//! | bottom-up   | O(n)   | O(n)   |
//! | iterative   | O(n)   | O(1)   |

use std::fmt;

use crate::error::{EvalError, Result};

/// Largest index [`Strategy::try_compute`] accepts for [`recursive`]; the
/// call count grows roughly as 1.32^n.
pub const MAX_RECURSIVE_INDEX: u32 = 60;

/// Largest index accepted for [`top_down`], which recurses about n / 2 deep.
pub const MAX_TOP_DOWN_INDEX: u32 = 5_000;

/// Largest index accepted for [`bottom_up`], which allocates n + 1 terms.
pub const MAX_TABLE_INDEX: u32 = 1_000_000;

/// Naive double recursion.
pub fn recursive(n: u32) -> u64 {
    if n <= 2 {
        return u64::from(n);
    }
    recursive(n - 2).wrapping_add(recursive(n - 3))
}

/// Cache of already computed terms for [`top_down`].
#[derive(Debug, Clone, Default)]
pub struct Memo {
    terms: Vec<Option<u64>>,
}

impl Memo {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of terms stored so far.
    pub fn len(&self) -> usize {
        self.terms.iter().filter(|t| t.is_some()).count()
    }

    /// Check whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, n: u32) -> Option<u64> {
        self.terms.get(n as usize).copied().flatten()
    }

    fn insert(&mut self, n: u32, value: u64) {
        let index = n as usize;
        if self.terms.len() <= index {
            self.terms.resize(index + 1, None);
        }
        self.terms[index] = Some(value);
    }
}

/// Memoized recursion. Terms computed here are kept in `memo` and reused by
/// later calls with the same cache.
pub fn top_down(n: u32, memo: &mut Memo) -> u64 {
    if let Some(value) = memo.get(n) {
        return value;
    }

    let value = if n <= 2 {
        u64::from(n)
    } else {
        top_down(n - 2, memo).wrapping_add(top_down(n - 3, memo))
    };

    memo.insert(n, value);
    value
}

/// Forward table of `n + 1` terms (never fewer than the three seeds).
pub fn bottom_up(n: u32) -> u64 {
    let n = n as usize;
    let mut table = vec![0u64; (n + 1).max(3)];
    table[1] = 1;
    table[2] = 2;

    for i in 3..=n {
        table[i] = table[i - 2].wrapping_add(table[i - 3]);
    }

    table[n]
}

/// Constant space: three rolling terms.
pub fn iterative(n: u32) -> u64 {
    if n <= 2 {
        return u64::from(n);
    }

    let (mut f0, mut f1, mut f2) = (0u64, 1u64, 2u64);
    for _ in 3..=n {
        let next = f0.wrapping_add(f1);
        f0 = f1;
        f1 = f2;
        f2 = next;
    }
    f2
}

/// A way of computing the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`iterative`]
    Iterative,
    /// [`recursive`]
    Recursive,
    /// [`top_down`] with a fresh cache
    TopDown,
    /// [`bottom_up`]
    BottomUp,
}

impl Strategy {
    /// Every strategy, in reporting order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Iterative,
        Strategy::Recursive,
        Strategy::TopDown,
        Strategy::BottomUp,
    ];

    /// Label used when reporting results.
    pub const fn label(self) -> &'static str {
        match self {
            Strategy::Iterative => "Iterative",
            Strategy::Recursive => "Recursive",
            Strategy::TopDown => "(DP) Top Down",
            Strategy::BottomUp => "(DP) Bottom Up",
        }
    }

    /// Largest index this strategy accepts in [`Strategy::try_compute`],
    /// or `None` if it runs in constant space.
    pub const fn max_index(self) -> Option<u32> {
        match self {
            Strategy::Iterative => None,
            Strategy::Recursive => Some(MAX_RECURSIVE_INDEX),
            Strategy::TopDown => Some(MAX_TOP_DOWN_INDEX),
            Strategy::BottomUp => Some(MAX_TABLE_INDEX),
        }
    }

    /// Check whether `n` is within this strategy's limit.
    pub fn accepts(self, n: u32) -> bool {
        self.max_index().map_or(true, |limit| n <= limit)
    }

    /// Compute R(n), refusing indices that would take too long, overflow
    /// the stack or allocate too much for this strategy.
    pub fn try_compute(self, n: u32) -> Result<u64> {
        match self.max_index() {
            Some(limit) if n > limit => Err(EvalError::RecurrenceIndexTooLarge {
                strategy: self,
                index: n,
                limit,
            }),
            _ => Ok(self.compute(n)),
        }
    }

    /// Compute R(n) with this strategy, without any limit.
    pub fn compute(self, n: u32) -> u64 {
        match self {
            Strategy::Iterative => iterative(n),
            Strategy::Recursive => recursive(n),
            Strategy::TopDown => top_down(n, &mut Memo::new()),
            Strategy::BottomUp => bottom_up(n),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.compute(0), 0, "{strategy}");
            assert_eq!(strategy.compute(1), 1, "{strategy}");
            assert_eq!(strategy.compute(2), 2, "{strategy}");
        }
    }

    #[test]
    fn test_memo_is_filled() {
        let mut memo = Memo::new();
        assert!(memo.is_empty());
        assert_eq!(top_down(10, &mut memo), 13);
        assert!(!memo.is_empty());
        assert_eq!(memo.get(10), Some(13));
    }
}
