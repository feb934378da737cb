//! Eager vs lazy walkthrough.
//!
//! # Usage
//!
//! ```bash
//! arukay generators --count 10
//! ```
//!
//! Runs each producer pair from `arukay_core::sequence` side by side, prints
//! what each side did, and checks that both produced the same values. The lazy
//! side is narrated per pull, so its production interleaves with consumption.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::mem::size_of;

use arukay_core::sequence::{
    eager_range, lazy_range, trimmed_lines_eager, trimmed_lines_lazy, uppercase_eager,
    uppercase_lazy,
};

/// Default length of the numeric runs.
pub const DEFAULT_COUNT: u64 = 5;

const WORDS: &[&str] = &["python", "rust", "generator", "iterator", "lazy"];

const FILE_LINES: &[&str] = &[
    "line 1: welcome\n",
    "line 2: this is an example\n",
    "  line 3: with leading spaces  \n",
    "line 4: end of file\n",
];

/// Outcome of comparing one producer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub title: &'static str,
    pub eager: Vec<String>,
    pub lazy: Vec<String>,
    /// `producing`/`using` events from the lazy side, in the order they happened.
    pub lazy_trace: Vec<String>,
}

impl Comparison {
    /// Whether both disciplines produced the same values.
    #[must_use]
    pub fn agrees(&self) -> bool {
        self.eager == self.lazy
    }
}

/// Consume `values` one at a time, recording each production and each use.
fn pull_narrated(values: impl Iterator<Item = String>) -> (Vec<String>, Vec<String>) {
    let trace = RefCell::new(Vec::new());
    let mut used = Vec::new();

    for value in values.inspect(|v| trace.borrow_mut().push(format!("producing {v}"))) {
        trace.borrow_mut().push(format!("using {value}"));
        used.push(value);
    }

    (used, trace.into_inner())
}

fn compare(
    title: &'static str,
    eager: Vec<String>,
    lazy: impl Iterator<Item = String>,
) -> Comparison {
    let (lazy, lazy_trace) = pull_narrated(lazy);
    Comparison {
        title,
        eager,
        lazy,
        lazy_trace,
    }
}

/// Compare every producer pair.
#[must_use]
pub fn compare_all(count: u64) -> Vec<Comparison> {
    vec![
        compare(
            "Numbers",
            eager_range(count).iter().map(u64::to_string).collect(),
            lazy_range(count).map(|n| n.to_string()),
        ),
        compare("Uppercase words", uppercase_eager(WORDS), uppercase_lazy(WORDS)),
        compare(
            "Trimmed file lines",
            trimmed_lines_eager(FILE_LINES),
            trimmed_lines_lazy(FILE_LINES),
        ),
    ]
}

/// Render the walkthrough as text.
#[must_use]
pub fn render(count: u64) -> String {
    let mut out = String::new();

    for comparison in compare_all(count) {
        let _ = writeln!(out, "== {} ==", comparison.title);
        let _ = writeln!(out, "eager (built up front): {:?}", comparison.eager);
        let _ = writeln!(out, "lazy  (pulled one by one):");
        for event in &comparison.lazy_trace {
            let _ = writeln!(out, "   {event}");
        }
        let _ = writeln!(out, "lazy result: {:?}", comparison.lazy);
        let verdict = if comparison.agrees() { "same values" } else { "MISMATCH" };
        let _ = writeln!(out, "-> {verdict}\n");
    }

    let eager_bytes = count.saturating_mul(size_of::<u64>() as u64);
    let lazy_bytes = size_of::<arukay_core::LazyRange>();
    let lazy_sum: u128 = lazy_range(count).map(u128::from).sum();
    let _ = writeln!(out, "== Memory ==");
    let _ = writeln!(out, "eager run of {count} holds ~{eager_bytes} bytes of values");
    let _ = writeln!(
        out,
        "lazy run of {count} holds {lazy_bytes} bytes of state; summed to {lazy_sum} without storing"
    );

    out
}

/// Print the walkthrough to stdout.
pub fn run(count: u64) {
    let report = render(count);
    #[allow(clippy::print_stdout)]
    {
        print!("{report}");
    }

    if compare_all(count).iter().all(Comparison::agrees) {
        tracing::info!("Eager and lazy producers agree");
    } else {
        tracing::error!("Eager and lazy producers disagree");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pairs_agree() {
        for count in [0, 1, 5, 100] {
            assert!(compare_all(count).iter().all(Comparison::agrees), "count {count}");
        }
    }

    #[test]
    fn test_numbers_comparison_contents() {
        let comparisons = compare_all(3);
        assert_eq!(comparisons[0].eager, vec!["0", "1", "2"]);
    }

    #[test]
    fn test_trimmed_lines_strip_whitespace() {
        let comparisons = compare_all(0);
        assert_eq!(comparisons[2].lazy[2], "line 3: with leading spaces");
    }

    #[test]
    fn test_lazy_production_interleaves_with_use() {
        let comparisons = compare_all(3);
        assert_eq!(
            comparisons[0].lazy_trace,
            vec![
                "producing 0",
                "using 0",
                "producing 1",
                "using 1",
                "producing 2",
                "using 2"
            ]
        );
    }

    #[test]
    fn test_empty_run_has_no_trace() {
        assert!(compare_all(0)[0].lazy_trace.is_empty());
    }

    #[test]
    fn test_render_narrates_each_pull() {
        let report = render(2);
        let producing = report.find("producing 1").unwrap_or(usize::MAX);
        let used_before = report.find("using 0").unwrap_or(usize::MAX);
        assert!(used_before < producing);
        assert!(report.contains("producing PYTHON"));
    }

    #[test]
    fn test_render_mentions_every_section() {
        let report = render(4);
        assert!(report.contains("== Numbers =="));
        assert!(report.contains("== Uppercase words =="));
        assert!(report.contains("== Trimmed file lines =="));
        assert!(report.contains("summed to 6 without storing"));
        assert!(!report.contains("MISMATCH"));
    }
}
