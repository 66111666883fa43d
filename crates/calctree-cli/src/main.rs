use anyhow::{ensure, Context, Result};
use calctree::demo::reference_scenario;
use calctree::{evaluate_with, fibonacci, EvalContext, OverflowMode, Strategy};
use clap::{Parser, Subcommand, ValueEnum};

/// calctree - evaluate small integer expression trees
#[derive(Parser, Debug)]
#[command(name = "calctree")]
#[command(about = "Evaluate expression trees of arithmetic and Fibonacci nodes", long_about = None)]
struct Args {
    /// Emit a trace event for every evaluated node (needs CALCTREE_LOG=trace)
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the reference scenario and print one result per line
    Demo {
        /// Print each expression before its result
        #[arg(long)]
        show_tree: bool,

        /// Fail on integer overflow instead of wrapping
        #[arg(long)]
        checked: bool,
    },

    /// Print the n-th Fibonacci number
    Fib {
        /// Index into the sequence
        n: u32,
    },

    /// Compute R(n) = R(n-2) + R(n-3) with one or all strategies
    Recurrence {
        /// Index into the sequence
        n: u32,

        /// Which strategy to run
        #[arg(long, value_enum, default_value_t = StrategyArg::All)]
        strategy: StrategyArg,
    },

    /// Print the reference scenario trees as JSON
    Tree {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    All,
    Recursive,
    TopDown,
    BottomUp,
    Iterative,
}

impl StrategyArg {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyArg::All => Strategy::ALL.to_vec(),
            StrategyArg::Recursive => vec![Strategy::Recursive],
            StrategyArg::TopDown => vec![Strategy::TopDown],
            StrategyArg::BottomUp => vec![Strategy::BottomUp],
            StrategyArg::Iterative => vec![Strategy::Iterative],
        }
    }
}

fn run_demo(show_tree: bool, ctx: &EvalContext) -> Result<()> {
    for example in reference_scenario().context("failed to build the reference scenario")? {
        let value = evaluate_with(&example.tree, ctx)
            .with_context(|| format!("failed to evaluate `{}`", example.name))?;
        if show_tree {
            println!("{} = {}", example.tree, value);
        } else {
            println!("{}", value);
        }
    }
    Ok(())
}

/// Report lines for R(n). `--strategy all` skips strategies whose limit `n`
/// exceeds; naming one explicitly turns that into an error.
fn recurrence_lines(n: u32, strategy: StrategyArg) -> Result<Vec<String>> {
    let mut lines = vec![
        "R(n) = R(n-2) + R(n-3)".to_string(),
        "----------------------------------".to_string(),
    ];
    for s in strategy.strategies() {
        let line = match (strategy, s.max_index()) {
            (StrategyArg::All, Some(limit)) if !s.accepts(n) => {
                format!("{}: skipped (limit is {})", s.label(), limit)
            }
            _ => format!("{}: {}", s.label(), s.try_compute(n)?),
        };
        lines.push(line);
    }
    Ok(lines)
}

fn run_tree(pretty: bool) -> Result<()> {
    let trees: Vec<_> = reference_scenario()
        .context("failed to build the reference scenario")?
        .into_iter()
        .map(|example| example.tree)
        .collect();
    let json = if pretty {
        serde_json::to_string_pretty(&trees)?
    } else {
        serde_json::to_string(&trees)?
    };
    println!("{}", json);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{fmt, EnvFilter};

    // CALCTREE_LOG takes precedence over RUST_LOG; default to WARN
    let filter = EnvFilter::try_from_env("CALCTREE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .context("invalid log filter")?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let command = args.command.unwrap_or(Command::Demo {
        show_tree: false,
        checked: false,
    });
    tracing::debug!(?command, "starting");

    match command {
        Command::Demo { show_tree, checked } => {
            let overflow = if checked {
                OverflowMode::Checked
            } else {
                OverflowMode::Wrapping
            };
            let ctx = EvalContext::new()
                .with_overflow(overflow)
                .with_trace(args.trace);
            run_demo(show_tree, &ctx)
        }
        Command::Fib { n } => {
            let limit = EvalContext::default().max_fibonacci_index;
            ensure!(n <= limit, "index {n} exceeds the limit of {limit}");
            println!("{}", fibonacci(n));
            Ok(())
        }
        Command::Recurrence { n, strategy } => {
            for line in recurrence_lines(n, strategy)? {
                println!("{}", line);
            }
            Ok(())
        }
        Command::Tree { pretty } => run_tree(pretty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurrence_all_strategies() {
        let lines = recurrence_lines(10, StrategyArg::All).unwrap();
        assert_eq!(lines[0], "R(n) = R(n-2) + R(n-3)");
        assert_eq!(
            &lines[2..],
            [
                "Iterative: 13",
                "Recursive: 13",
                "(DP) Top Down: 13",
                "(DP) Bottom Up: 13",
            ]
        );
    }

    #[test]
    fn test_recurrence_all_skips_over_limit() {
        let lines = recurrence_lines(100, StrategyArg::All).unwrap();
        assert_eq!(lines[3], "Recursive: skipped (limit is 60)");
        assert!(lines[2].starts_with("Iterative: "));
        assert!(lines[4].starts_with("(DP) Top Down: "));
    }

    #[test]
    fn test_recurrence_explicit_strategy_over_limit() {
        let err = recurrence_lines(100, StrategyArg::Recursive).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Recursive cannot compute R(100): the limit is 60"
        );
        assert!(recurrence_lines(300_000, StrategyArg::TopDown).is_err());
        assert!(recurrence_lines(u32::MAX, StrategyArg::BottomUp).is_err());
    }
}
