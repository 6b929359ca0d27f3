use std::collections::HashMap;
use std::fmt::Write;
use std::time::Duration;

use clap::ValueEnum;
use serde::Deserialize;

use crate::Algorithm;

/// Time taken by one algorithm to sort its copy of the batch dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    elapsed: Duration,
}

impl BenchmarkResult {
    pub fn new(algorithm: Algorithm, elapsed: Duration) -> Self {
        Self { algorithm, elapsed }
    }

    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Human readable duration, scaled to µs, ms or s.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.001 {
        format!("{:.1} µs", seconds * 1_000_000.0)
    } else if seconds < 1.0 {
        format!("{:.2} ms", seconds * 1000.0)
    } else {
        format!("{:.4} s", seconds)
    }
}

/// Results paired with their rank, fastest first. Equal times keep selection order.
pub fn ranked(results: &[BenchmarkResult]) -> Vec<(usize, &BenchmarkResult)> {
    let mut sorted = results.iter().collect::<Vec<_>>();
    // `sort_by` is stable
    sorted.sort_by(|a, b| a.elapsed.cmp(&b.elapsed));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, r)| (i + 1, r))
        .collect()
}

/// Rank of every algorithm in the batch. Rank 1 is the fastest.
pub fn rank(results: &[BenchmarkResult]) -> HashMap<&'static str, usize> {
    ranked(results)
        .into_iter()
        .map(|(rank, r)| (r.name(), rank))
        .collect()
}

/// A bar of `█` cells proportional to `seconds / slowest`. The slowest result fills
/// `width` cells and any non-zero time gets at least one.
pub fn bar(seconds: f64, slowest: f64, width: usize) -> String {
    if width == 0 || seconds <= 0.0 || slowest <= 0.0 {
        return String::new();
    }
    let cells = ((seconds / slowest) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab_case")]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// One line per algorithm, in selection order
    #[default]
    Plain,
    /// Ranked table with a bar chart
    Table,
    /// `name: seconds` pairs
    Yaml,
}

/// Width of the bar chart column in the table report.
const BAR_WIDTH: usize = 30;

/// Renders the results of one batch.
pub struct Report<'a> {
    pub results: &'a [BenchmarkResult],
    pub count: usize,
    pub cancelled: bool,
}

impl<'a> Report<'a> {
    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Plain => self.render_plain(),
            ReportFormat::Table => self.render_table(),
            ReportFormat::Yaml => self.render_yaml(),
        }
    }

    fn render_plain(&self) -> String {
        let mut s = String::new();
        if let [single] = self.results {
            let _ = writeln!(s, "{} selected!", single.name());
            let _ = writeln!(
                s,
                "Time taken to sort: {:.6} seconds",
                single.elapsed_secs()
            );
        } else {
            let width = self
                .results
                .iter()
                .map(|r| r.name().len())
                .max()
                .unwrap_or_default();
            for r in self.results {
                let _ = writeln!(
                    s,
                    "{:width$}  {}",
                    r.name(),
                    format_duration(r.elapsed_secs()),
                    width = width
                );
            }
        }
        if self.cancelled {
            let _ = writeln!(s, "(cancelled)");
        }
        s
    }

    fn render_yaml(&self) -> String {
        let mut s = String::new();
        let _ = writeln!(s, "count: {}", self.count);
        let _ = writeln!(s, "cancelled: {}", self.cancelled);
        let _ = writeln!(s, "results:");
        let ranks = rank(self.results);
        for r in self.results {
            let _ = writeln!(s, "  - algorithm: {}", r.name());
            let _ = writeln!(s, "    seconds: {}", r.elapsed_secs());
            let _ = writeln!(s, "    rank: {}", ranks[r.name()]);
        }
        s
    }

    /// Markdown table, fastest first.
    fn render_table(&self) -> String {
        let slowest = self
            .results
            .iter()
            .map(|r| r.elapsed_secs())
            .fold(0.0, f64::max);
        let mut s = String::new();
        let _ = writeln!(s, "| Rank | Algorithm | Complexity | Time | |");
        let _ = writeln!(s, "|-:|:-|:-|-:|:-|");
        for (rank, r) in ranked(self.results) {
            let secs = r.elapsed_secs();
            let _ = writeln!(
                s,
                "| {} | {} | {} | {} | {} |",
                rank,
                r.name(),
                r.algorithm.complexity(),
                format_duration(secs),
                bar(secs, slowest, BAR_WIDTH)
            );
        }
        s
    }
}
