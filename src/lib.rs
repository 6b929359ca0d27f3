//! Benchmark classic sorting algorithms against identical random datasets.
//!
//! ```
//! use sortbench::{format_duration, rank, run_benchmark, Algorithm};
//!
//! let results = run_benchmark(&[Algorithm::Merge, Algorithm::Quick], 500).unwrap();
//! assert_eq!(results.len(), 2);
//! let ranks = rank(&results);
//! for r in &results {
//!     println!("#{} {}: {}", ranks[r.name()], r.name(), format_duration(r.elapsed_secs()));
//! }
//! ```

mod algorithm;
mod bencher;
mod dataset;
mod error;
mod record;
pub mod sort;
mod worker;

pub use algorithm::Algorithm;
pub use bencher::{run_benchmark, Batch, BenchTimer, Bencher, BenchmarkRequest};
pub use dataset::{generate, Dataset, DEFAULT_RANGE};
pub use error::BenchError;
pub use record::{bar, format_duration, rank, ranked, BenchmarkResult, Report, ReportFormat};
pub use worker::{BenchmarkHandle, Progress, Worker};
