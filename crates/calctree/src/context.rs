//! Evaluation context configuration

/// How Add, Sub, Mul, Div and Fib treat `i32` overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowMode {
    /// Wrap around in two's complement, like native fixed-width arithmetic.
    #[default]
    Wrapping,

    /// Fail with [`EvalError::IntegerOverflow`](crate::EvalError::IntegerOverflow).
    Checked,
}

/// Configuration for evaluation.
///
/// This is passed by reference through every evaluation call. It holds no
/// mutable state, so one context can be shared by evaluations running on
/// different threads.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum tree height that will be evaluated (stack overflow protection)
    pub max_depth: usize,

    /// Overflow behavior of the arithmetic operators
    pub overflow: OverflowMode,

    /// Largest index the Fibonacci operator will build a table for
    pub max_fibonacci_index: u32,

    /// Whether to emit a trace event for every evaluated node
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: 500,
            overflow: OverflowMode::Wrapping,
            max_fibonacci_index: 1_000_000,
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Set the overflow mode.
    pub fn with_overflow(mut self, overflow: OverflowMode) -> Self {
        self.overflow = overflow;
        self
    }

    /// Set the largest accepted Fibonacci index.
    pub fn with_max_fibonacci_index(mut self, limit: u32) -> Self {
        self.max_fibonacci_index = limit;
        self
    }

    /// Turn per-node tracing on or off.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Check whether arithmetic should fail on overflow.
    pub fn is_checked(&self) -> bool {
        self.overflow == OverflowMode::Checked
    }
}
