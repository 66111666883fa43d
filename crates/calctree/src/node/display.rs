//! Display implementation for Node

use std::fmt;

use super::Node;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(value) => write!(f, "{}", value),

            Node::Add(left, right)
            | Node::Sub(left, right)
            | Node::Mul(left, right)
            | Node::Div(left, right) => {
                write!(f, "({} {} {})", left, self.kind().symbol(), right)
            }

            Node::Fib(arg) => write!(f, "fib({})", arg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_literal() {
        assert_eq!(Node::literal(42).to_string(), "42");
        assert_eq!(Node::literal(-4).to_string(), "-4");
    }

    #[test]
    fn test_display_nested() {
        let tree = Node::fib(Node::sub(
            Node::add(Node::literal(10), Node::literal(6)),
            Node::mul(Node::literal(5), Node::literal(4)),
        ));
        assert_eq!(tree.to_string(), "fib(((10 + 6) - (5 * 4)))");
    }

    #[test]
    fn test_display_div() {
        let tree = Node::div(Node::literal(99), Node::literal(11));
        assert_eq!(tree.to_string(), "(99 / 11)");
    }
}
