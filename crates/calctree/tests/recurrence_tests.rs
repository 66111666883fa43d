use calctree::recurrence::{
    bottom_up, iterative, recursive, top_down, Memo, MAX_RECURSIVE_INDEX, MAX_TABLE_INDEX,
    MAX_TOP_DOWN_INDEX,
};
use calctree::{EvalError, Strategy};

// R(0..=12) for R(n) = R(n-2) + R(n-3), seeds 0, 1, 2
const EXPECTED: [u64; 13] = [0, 1, 2, 1, 3, 3, 4, 6, 7, 10, 13, 17, 23];

#[test]
fn test_each_strategy_matches_table() {
    for (n, expected) in EXPECTED.iter().enumerate() {
        let n = n as u32;
        assert_eq!(recursive(n), *expected, "recursive({n})");
        assert_eq!(top_down(n, &mut Memo::new()), *expected, "top_down({n})");
        assert_eq!(bottom_up(n), *expected, "bottom_up({n})");
        assert_eq!(iterative(n), *expected, "iterative({n})");
    }
}

#[test]
fn test_strategies_agree() {
    for n in 0..=40 {
        let values: Vec<u64> = Strategy::ALL.iter().map(|s| s.compute(n)).collect();
        assert!(values.windows(2).all(|w| w[0] == w[1]), "n = {n}: {values:?}");
    }
}

#[test]
fn test_memo_reused_across_calls() {
    let mut memo = Memo::new();
    assert_eq!(top_down(30, &mut memo), iterative(30));
    let filled = memo.len();
    assert!(filled > 0);

    // Everything below 30 is already cached
    assert_eq!(top_down(20, &mut memo), iterative(20));
    assert_eq!(memo.len(), filled);
}

#[test]
fn test_large_index_fast_strategies() {
    assert_eq!(bottom_up(500), iterative(500));
    assert_eq!(top_down(500, &mut Memo::new()), iterative(500));
}

#[test]
fn test_labels() {
    assert_eq!(Strategy::Iterative.label(), "Iterative");
    assert_eq!(Strategy::Recursive.label(), "Recursive");
    assert_eq!(Strategy::TopDown.to_string(), "(DP) Top Down");
    assert_eq!(Strategy::BottomUp.to_string(), "(DP) Bottom Up");
}

// ═══════════════════════════════════════════════════════════════════════
// Index Limits
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_try_compute_within_limits() {
    assert_eq!(Strategy::Recursive.try_compute(12), Ok(23));
    for strategy in Strategy::ALL {
        assert_eq!(strategy.try_compute(40), Ok(iterative(40)), "{strategy}");
    }
}

#[test]
fn test_try_compute_rejects_over_limit() {
    assert_eq!(
        Strategy::Recursive.try_compute(MAX_RECURSIVE_INDEX + 1),
        Err(EvalError::RecurrenceIndexTooLarge {
            strategy: Strategy::Recursive,
            index: MAX_RECURSIVE_INDEX + 1,
            limit: MAX_RECURSIVE_INDEX,
        })
    );
    assert!(matches!(
        Strategy::TopDown.try_compute(300_000),
        Err(EvalError::RecurrenceIndexTooLarge { limit: MAX_TOP_DOWN_INDEX, .. })
    ));
    assert!(matches!(
        Strategy::BottomUp.try_compute(u32::MAX),
        Err(EvalError::RecurrenceIndexTooLarge { limit: MAX_TABLE_INDEX, .. })
    ));
}

#[test]
fn test_accepts() {
    assert!(Strategy::Recursive.accepts(MAX_RECURSIVE_INDEX));
    assert!(!Strategy::Recursive.accepts(MAX_RECURSIVE_INDEX + 1));
    assert!(Strategy::Iterative.accepts(u32::MAX));
    assert_eq!(Strategy::Iterative.max_index(), None);
}

#[test]
fn test_top_down_at_limit_fits_small_stack() {
    let value = std::thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(|| Strategy::TopDown.try_compute(MAX_TOP_DOWN_INDEX))
        .unwrap()
        .join()
        .unwrap();
    assert_eq!(value, Ok(iterative(MAX_TOP_DOWN_INDEX)));
}
