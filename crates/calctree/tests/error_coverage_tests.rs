// Coverage tests for error messages
use calctree::*;

// ═══════════════════════════════════════════════════════════════════════
// Display Messages
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_division_by_zero_message() {
    assert_eq!(EvalError::DivisionByZero.to_string(), "Division by zero");
}

#[test]
fn test_invalid_node_kind_message() {
    let err = EvalError::InvalidNodeKind {
        kind: OperatorKind::Literal,
    };
    assert_eq!(
        err.to_string(),
        "Invalid node kind: `literal` is not an operator"
    );
}

#[test]
fn test_malformed_tree_message() {
    let err = EvalError::MalformedTree {
        kind: OperatorKind::Add,
        reason: "missing right child".to_string(),
    };
    assert_eq!(err.to_string(), "Malformed `add` node: missing right child");
}

#[test]
fn test_limit_messages() {
    assert_eq!(
        EvalError::DepthLimitExceeded { limit: 3 }.to_string(),
        "Tree depth exceeds the limit of 3"
    );
    assert_eq!(
        EvalError::FibonacciIndexTooLarge {
            index: 50,
            limit: 40
        }
        .to_string(),
        "Fibonacci index 50 exceeds the limit of 40"
    );
}

#[test]
fn test_overflow_message() {
    let err = EvalError::IntegerOverflow {
        op: OperatorKind::Mul,
    };
    assert_eq!(err.to_string(), "Integer overflow in `mul`");
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error + Send + Sync> = Box::new(EvalError::DivisionByZero);
    assert_eq!(err.to_string(), "Division by zero");
}

#[test]
fn test_recurrence_limit_message() {
    let err = EvalError::RecurrenceIndexTooLarge {
        strategy: Strategy::TopDown,
        index: 9_000,
        limit: 5_000,
    };
    assert_eq!(
        err.to_string(),
        "(DP) Top Down cannot compute R(9000): the limit is 5000"
    );
}
