//! # calctree
//!
//! A tree-walking evaluator for small integer expression trees.
//!
//! Trees are built from integer literals and five operators: addition,
//! subtraction, multiplication, truncating division and Fibonacci. Every
//! operation node owns its children, a finished tree is immutable, and
//! evaluation walks it depth-first, resolving children before combining
//! them in their parent.
//!
//! ## Architecture
//!
//! - **Node**: the tagged tree and its constructor table
//! - **Evaluator**: recursive post-order evaluation under an [`EvalContext`]
//! - **Fibonacci**: the table-based leaf computation behind the `Fib` operator
//! - **Recurrence**: four strategies for R(n) = R(n - 2) + R(n - 3)
//!
//! ## Example
//!
//! ```
//! use calctree::{evaluate, make_literal, make_operation, OperatorKind};
//!
//! let sub = make_operation(
//!     OperatorKind::Sub,
//!     make_literal(16),
//!     Some(make_literal(20)),
//! )?;
//! let fib = make_operation(OperatorKind::Fib, sub, None)?;
//! assert_eq!(evaluate(&fib)?, 3);
//! # Ok::<(), calctree::EvalError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod demo;
pub mod error;
pub mod eval;
pub mod fibonacci;
pub mod node;
pub mod recurrence;

// Re-export main types
pub use context::{EvalContext, OverflowMode};
pub use error::{EvalError, Result};
pub use eval::{calc, evaluate, evaluate_with, Evaluate};
pub use fibonacci::{checked_fibonacci, fibonacci};
pub use node::{make_literal, make_operation, Constructor, Node, OperatorKind};
pub use recurrence::{Memo, Strategy};

/// calctree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
