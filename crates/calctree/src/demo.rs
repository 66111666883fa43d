//! The reference scenario
//!
//! Six literals `{10, 6, 5, 4, 99, 11}` combined into five trees that
//! evaluate, in order, to `16, 20, 9, -4, 3`.

use crate::error::Result;
use crate::node::{make_literal, make_operation, Node, OperatorKind};

/// A named tree of the reference scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Short name of the root operation
    pub name: &'static str,
    /// The tree itself
    pub tree: Node,
}

/// Build the five trees of the reference scenario, in printing order:
/// `Add(10, 6)`, `Mul(5, 4)`, `Div(99, 11)`, `Sub(Add, Mul)` and
/// `Fib(Sub)`.
///
/// Later trees reuse earlier ones as subtrees; each reuse is a clone, so
/// all five trees are independent.
pub fn reference_scenario() -> Result<Vec<Example>> {
    let add = make_operation(OperatorKind::Add, make_literal(10), Some(make_literal(6)))?;
    let mul = make_operation(OperatorKind::Mul, make_literal(5), Some(make_literal(4)))?;
    let div = make_operation(OperatorKind::Div, make_literal(99), Some(make_literal(11)))?;
    let sub = make_operation(OperatorKind::Sub, add.clone(), Some(mul.clone()))?;
    let fib = make_operation(OperatorKind::Fib, sub.clone(), None)?;

    Ok(vec![
        Example { name: "add", tree: add },
        Example { name: "mul", tree: mul },
        Example { name: "div", tree: div },
        Example { name: "sub", tree: sub },
        Example { name: "fib", tree: fib },
    ])
}

/// Results of the reference scenario, in order.
pub const REFERENCE_RESULTS: [i32; 5] = [16, 20, 9, -4, 3];
