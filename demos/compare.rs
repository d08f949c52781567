//! Sorts one input with both pivot policies and prints a short textual playback.
//!
//! cargo run --example compare -- [reverse|sorted|random] [len] [ticks]
//!
//! `SORT_TRACE_SEED` and `SORT_TRACE_PARALLEL` configure the run, `RUST_LOG=debug` shows the
//! per run summaries of the library.

use std::fmt::Write;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use sort_trace_rs::{Comparison, ComparisonConfig, Frame, Highlight};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "compare",
    about = "Fixed vs randomized pivot quicksort, played back side by side"
)]
struct Cli {
    /// Shape of the input sequence.
    #[arg(value_enum, default_value_t = Input::Reverse)]
    input: Input,

    /// Number of elements to sort.
    #[arg(default_value_t = 40)]
    len: usize,

    /// Number of playback ticks to print.
    #[arg(default_value_t = 12)]
    ticks: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Input {
    /// `len..=1`, the worst case of the fixed policy.
    Reverse,
    /// `1..=len`.
    Sorted,
    /// A shuffled permutation of `1..=len`.
    Random,
}

impl Input {
    fn generate(self, len: usize) -> Vec<u32> {
        let n = len as u32;
        match self {
            Input::Reverse => (1..=n).rev().collect(),
            Input::Sorted => (1..=n).collect(),
            Input::Random => {
                use rand::seq::SliceRandom;

                let mut v: Vec<u32> = (1..=n).collect();
                v.shuffle(&mut rand::thread_rng());
                v
            }
        }
    }
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn render(frame: Option<&Frame<u32>>) -> String {
    let Some(frame) = frame else {
        return String::from("(done)");
    };

    let mut line = String::new();
    for (i, value) in frame.values().iter().enumerate() {
        match frame.highlight(i) {
            Highlight::Pivot => line.push_str(&format!("[{value}]")),
            Highlight::Compared => line.push_str(&format!("<{value}>")),
            Highlight::Default => line.push_str(&format!(" {value} ")),
        }
    }
    line
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let input = cli.input.generate(cli.len);

    let config = match ComparisonConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "bad configuration");
            return ExitCode::FAILURE;
        }
    };

    let comparison = match Comparison::run(&input, &config) {
        Ok(comparison) => comparison,
        Err(err) => {
            error!(%err, "run failed");
            return ExitCode::FAILURE;
        }
    };

    for run in [comparison.fixed(), comparison.randomized()] {
        info!(
            policy = %run.policy(),
            frames = run.trace().len(),
            comparisons = run.trace().comparisons(),
            "{:?} input of length {}",
            cli.input,
            cli.len
        );
    }

    let mut out = String::from("[x] pivot, <x> compared\n");
    for (tick, (fixed, randomized)) in comparison.playback().take(cli.ticks).enumerate() {
        writeln!(out, "{tick:>4} fixed      {}", render(fixed)).ok();
        writeln!(out, "     randomized {}", render(randomized)).ok();
    }
    print!("{out}");

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["compare"]).unwrap();
        assert_eq!(cli.input, Input::Reverse);
        assert_eq!(cli.len, 40);
        assert_eq!(cli.ticks, 12);
    }

    #[test]
    fn explicit_values() {
        let cli = Cli::try_parse_from(["compare", "random", "7", "3"]).unwrap();
        assert_eq!(cli.input, Input::Random);
        assert_eq!(cli.len, 7);
        assert_eq!(cli.ticks, 3);
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(Cli::try_parse_from(["compare", "reverse", "forty", "2"]).is_err());
        assert!(Cli::try_parse_from(["compare", "reverse", "40", "-1"]).is_err());
        assert!(Cli::try_parse_from(["compare", "shuffled"]).is_err());
    }

    #[test]
    fn inputs_have_requested_len() {
        assert_eq!(Input::Reverse.generate(4), [4, 3, 2, 1]);
        assert_eq!(Input::Sorted.generate(3), [1, 2, 3]);

        let mut random = Input::Random.generate(5);
        random.sort_unstable();
        assert_eq!(random, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn render_marks_pivot_and_compared() {
        let trace = sort_trace_rs::sort(&mut [2u32, 1], sort_trace_rs::PivotPolicy::Fixed, None)
            .unwrap();
        assert_eq!(render(trace.get(2)), "<2>[1]");
        assert_eq!(render(None), "(done)");
    }
}
