//! Operator kinds and the constructor table

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Node;
use crate::error::{EvalError, Result};

/// Construction function for an operator: takes the left child and the
/// optional right child and builds the parent node.
pub type Constructor = fn(Node, Option<Node>) -> Result<Node>;

/// The closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OperatorKind {
    /// Addition
    Add,
    /// Subtraction
    Sub,
    /// Multiplication
    Mul,
    /// Truncating integer division
    Div,
    /// Fibonacci of the absolute value of the argument
    Fib,
    /// Integer literal (not an operator)
    Literal,
}

impl OperatorKind {
    /// Every kind, in declaration order.
    pub const ALL: [OperatorKind; 6] = [
        OperatorKind::Add,
        OperatorKind::Sub,
        OperatorKind::Mul,
        OperatorKind::Div,
        OperatorKind::Fib,
        OperatorKind::Literal,
    ];

    /// Number of children a node of this kind owns.
    pub const fn arity(self) -> usize {
        match self {
            OperatorKind::Add | OperatorKind::Sub | OperatorKind::Mul | OperatorKind::Div => 2,
            OperatorKind::Fib => 1,
            OperatorKind::Literal => 0,
        }
    }

    /// Lowercase name, used in messages and logs.
    pub const fn name(self) -> &'static str {
        match self {
            OperatorKind::Add => "add",
            OperatorKind::Sub => "sub",
            OperatorKind::Mul => "mul",
            OperatorKind::Div => "div",
            OperatorKind::Fib => "fib",
            OperatorKind::Literal => "literal",
        }
    }

    /// Infix symbol for binary kinds, function name for `Fib`.
    pub const fn symbol(self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Sub => "-",
            OperatorKind::Mul => "*",
            OperatorKind::Div => "/",
            OperatorKind::Fib => "fib",
            OperatorKind::Literal => "",
        }
    }

    /// Check whether nodes of this kind are built from children.
    pub const fn is_operator(self) -> bool {
        !matches!(self, OperatorKind::Literal)
    }

    /// Look up the constructor for this kind.
    ///
    /// Returns `None` for [`OperatorKind::Literal`], which has no children
    /// to combine.
    pub fn constructor(self) -> Option<Constructor> {
        match self {
            OperatorKind::Add => Some(build_add),
            OperatorKind::Sub => Some(build_sub),
            OperatorKind::Mul => Some(build_mul),
            OperatorKind::Div => Some(build_div),
            OperatorKind::Fib => Some(build_fib),
            OperatorKind::Literal => None,
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Constructors
// ═══════════════════════════════════════════════════════════════════════

fn build_add(left: Node, right: Option<Node>) -> Result<Node> {
    Ok(Node::add(left, require_right(OperatorKind::Add, right)?))
}

fn build_sub(left: Node, right: Option<Node>) -> Result<Node> {
    Ok(Node::sub(left, require_right(OperatorKind::Sub, right)?))
}

fn build_mul(left: Node, right: Option<Node>) -> Result<Node> {
    Ok(Node::mul(left, require_right(OperatorKind::Mul, right)?))
}

fn build_div(left: Node, right: Option<Node>) -> Result<Node> {
    Ok(Node::div(left, require_right(OperatorKind::Div, right)?))
}

fn build_fib(arg: Node, right: Option<Node>) -> Result<Node> {
    if right.is_some() {
        return Err(EvalError::MalformedTree {
            kind: OperatorKind::Fib,
            reason: "takes a single argument but was given a right child".to_string(),
        });
    }
    Ok(Node::fib(arg))
}

fn require_right(kind: OperatorKind, right: Option<Node>) -> Result<Node> {
    right.ok_or_else(|| EvalError::MalformedTree {
        kind,
        reason: "missing right child".to_string(),
    })
}
