//! Expression tree representation

mod display;
mod kind;

pub use kind::{Constructor, OperatorKind};

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};

/// A node of an expression tree.
///
/// Every operation node exclusively owns its children, so a tree is a
/// single value that is released as a unit when the root is dropped.
/// Reusing a subtree under another parent requires an explicit `clone()`.
///
/// The variants carry exactly the children their operator needs, so a
/// `Node` is always well-formed: there is no way to build an `Add` without
/// a right operand or a `Fib` with one.
///
/// # Example
///
/// ```
/// use calctree::{evaluate, Node};
///
/// let tree = Node::sub(
///     Node::add(Node::literal(10), Node::literal(6)),
///     Node::mul(Node::literal(5), Node::literal(4)),
/// );
/// assert_eq!(evaluate(&tree).unwrap(), -4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Node {
    /// An integer literal
    Literal(i32),

    /// `left + right`
    Add(Box<Node>, Box<Node>),

    /// `left - right`
    Sub(Box<Node>, Box<Node>),

    /// `left * right`
    Mul(Box<Node>, Box<Node>),

    /// `left / right`, truncating toward zero
    Div(Box<Node>, Box<Node>),

    /// The Fibonacci number at `|arg|`
    Fib(Box<Node>),
}

impl Node {
    /// Create a literal node.
    pub fn literal(value: i32) -> Self {
        Node::Literal(value)
    }

    /// Create an addition node.
    pub fn add(left: Node, right: Node) -> Self {
        Node::Add(Box::new(left), Box::new(right))
    }

    /// Create a subtraction node.
    pub fn sub(left: Node, right: Node) -> Self {
        Node::Sub(Box::new(left), Box::new(right))
    }

    /// Create a multiplication node.
    pub fn mul(left: Node, right: Node) -> Self {
        Node::Mul(Box::new(left), Box::new(right))
    }

    /// Create a division node.
    pub fn div(left: Node, right: Node) -> Self {
        Node::Div(Box::new(left), Box::new(right))
    }

    /// Create a Fibonacci node over `arg`.
    pub fn fib(arg: Node) -> Self {
        Node::Fib(Box::new(arg))
    }

    /// The kind tag of this node.
    pub fn kind(&self) -> OperatorKind {
        match self {
            Node::Literal(_) => OperatorKind::Literal,
            Node::Add(..) => OperatorKind::Add,
            Node::Sub(..) => OperatorKind::Sub,
            Node::Mul(..) => OperatorKind::Mul,
            Node::Div(..) => OperatorKind::Div,
            Node::Fib(_) => OperatorKind::Fib,
        }
    }

    /// The literal value, if this is a literal node.
    pub fn as_literal(&self) -> Option<i32> {
        match self {
            Node::Literal(value) => Some(*value),
            _ => None,
        }
    }

    /// Check whether this node is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// The direct children of this node, left to right.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Literal(_) => Vec::new(),
            Node::Add(left, right)
            | Node::Sub(left, right)
            | Node::Mul(left, right)
            | Node::Div(left, right) => vec![left.as_ref(), right.as_ref()],
            Node::Fib(arg) => vec![arg.as_ref()],
        }
    }

    /// Height of the tree rooted here. A lone literal has height 1.
    pub fn height(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Node::height)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in the tree rooted here.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Node::node_count)
            .sum::<usize>()
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Literal(value)
    }
}

/// Create a literal node holding `value`.
pub fn make_literal(value: i32) -> Node {
    Node::literal(value)
}

/// Create an operation node of the given kind, taking ownership of its
/// children.
///
/// Binary kinds require `right`; `Fib` takes its argument in `left` and
/// rejects a `right` child. Asking for a `Literal` operation fails with
/// [`EvalError::InvalidNodeKind`].
///
/// # Example
///
/// ```
/// use calctree::{make_literal, make_operation, OperatorKind};
///
/// let add = make_operation(OperatorKind::Add, make_literal(10), Some(make_literal(6))).unwrap();
/// let fib = make_operation(OperatorKind::Fib, add, None).unwrap();
/// assert_eq!(fib.to_string(), "fib((10 + 6))");
/// ```
pub fn make_operation(kind: OperatorKind, left: Node, right: Option<Node>) -> Result<Node> {
    let construct = kind.constructor().ok_or(EvalError::InvalidNodeKind { kind })?;
    construct(left, right).inspect_err(|e| tracing::debug!(%kind, error = %e, "rejected operation"))
}
