use std::{
    cell::Cell,
    hint::black_box,
    time::{Duration, Instant},
};

use log::{debug, error};

use crate::{sort, Algorithm, BenchError, BenchmarkResult, Dataset, Progress};

/// Records the duration of a single timed span.
pub struct Bencher {
    elapsed: Cell<Option<Duration>>,
}

/// Guard returned by [`Bencher::start_timing`]. The span ends when it is dropped.
pub struct BenchTimer<'a> {
    start_time: Instant,
    bencher: &'a Bencher,
}

impl<'a> Drop for BenchTimer<'a> {
    fn drop(&mut self) {
        let elapsed = self.start_time.elapsed();
        let prev = self.bencher.elapsed.replace(Some(elapsed));
        assert!(prev.is_none(), "More than one benchmark timer detected");
    }
}

impl Bencher {
    pub fn new() -> Self {
        Self {
            elapsed: Cell::new(None),
        }
    }

    pub fn start_timing(&self) -> BenchTimer {
        BenchTimer {
            start_time: Instant::now(),
            bencher: self,
        }
    }

    /// Time `f`. Nothing outside the closure is measured.
    pub fn time<R>(&self, f: impl FnOnce() -> R) -> R {
        let _timer = self.start_timing();
        f()
    }

    /// Take the recorded duration, leaving the bencher ready for another span.
    pub fn take_elapsed(&self) -> Option<Duration> {
        self.elapsed.take()
    }
}

impl Default for Bencher {
    fn default() -> Self {
        Self::new()
    }
}

/// What to benchmark: the algorithms, in the order they were selected, and the
/// dataset they all sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkRequest {
    pub algorithms: Vec<Algorithm>,
    pub dataset: Dataset,
}

/// The outcome of one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// One result per algorithm, in selection order
    pub results: Vec<BenchmarkResult>,
    /// Set if the batch was cancelled before every algorithm ran
    pub cancelled: bool,
}

impl BenchmarkRequest {
    /// Repeated algorithms are only run once, at their first position.
    pub fn new(algorithms: impl IntoIterator<Item = Algorithm>, dataset: Dataset) -> Self {
        let mut unique: Vec<Algorithm> = vec![];
        for algorithm in algorithms {
            if unique.contains(&algorithm) {
                debug!("Ignoring repeated selection of {}", algorithm);
            } else {
                unique.push(algorithm);
            }
        }
        Self {
            algorithms: unique,
            dataset,
        }
    }

    /// Build a request from raw user input: the dataset size as typed and the
    /// algorithm identifiers.
    ///
    /// The whole request is rejected if any identifier is unknown.
    pub fn parse<S: AsRef<str>>(size: &str, algorithms: &[S]) -> Result<Self, BenchError> {
        let count = match size.trim().parse::<i64>() {
            Ok(n) if n > 0 => usize::try_from(n)
                .map_err(|_| BenchError::InvalidSize(size.to_owned()))?,
            _ => return Err(BenchError::InvalidSize(size.to_owned())),
        };
        if algorithms.is_empty() {
            return Err(BenchError::NoAlgorithmSelected);
        }
        let algorithms = algorithms
            .iter()
            .map(|a| a.as_ref().parse::<Algorithm>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(algorithms, Dataset::new(count)))
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.dataset.count == 0 {
            return Err(BenchError::InvalidSize(self.dataset.count.to_string()));
        }
        if self.algorithms.is_empty() {
            return Err(BenchError::NoAlgorithmSelected);
        }
        self.dataset.validate()
    }

    /// Run the batch on the current thread.
    pub fn run(&self) -> Result<Batch, BenchError> {
        self.run_with(|_| {}, || false)
    }

    /// Run the batch on the current thread, reporting each step to `on_progress`.
    ///
    /// `cancelled` is polled between algorithms, never while one is sorting.
    pub(crate) fn run_with(
        &self,
        mut on_progress: impl FnMut(Progress),
        cancelled: impl Fn() -> bool,
    ) -> Result<Batch, BenchError> {
        self.validate()?;
        on_progress(Progress::Generating {
            count: self.dataset.count,
        });
        let base = self.dataset.generate()?;
        debug!(
            "Generated {} values in [{}, {}]",
            base.len(),
            self.dataset.lower,
            self.dataset.upper
        );
        let bencher = Bencher::new();
        let mut results = Vec::with_capacity(self.algorithms.len());
        for &algorithm in &self.algorithms {
            if cancelled() {
                on_progress(Progress::Cancelled);
                return Ok(Batch {
                    results,
                    cancelled: true,
                });
            }
            on_progress(Progress::Running { algorithm });
            let mut data = base.clone();
            bencher.time(|| algorithm.sort(black_box(data.as_mut_slice())));
            let elapsed = bencher.take_elapsed().unwrap_or_default();
            if !sort::is_sorted(&data) {
                error!("{} produced an unsorted sequence", algorithm);
            }
            let result = BenchmarkResult::new(algorithm, elapsed);
            on_progress(Progress::Finished(result.clone()));
            results.push(result);
        }
        Ok(Batch {
            results,
            cancelled: false,
        })
    }
}

/// Sort one random dataset of `count` values with each algorithm in turn.
///
/// Results come back in the order the algorithms were given.
pub fn run_benchmark(
    algorithms: &[Algorithm],
    count: usize,
) -> Result<Vec<BenchmarkResult>, BenchError> {
    let request = BenchmarkRequest::new(algorithms.iter().copied(), Dataset::new(count));
    Ok(request.run()?.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_records_one_span() {
        let bencher = Bencher::new();
        let value = bencher.time(|| {
            std::thread::sleep(Duration::from_millis(5));
            42
        });
        assert_eq!(value, 42);
        let elapsed = bencher.take_elapsed().unwrap();
        assert!(elapsed >= Duration::from_millis(5));
        assert!(bencher.take_elapsed().is_none());
    }

    #[test]
    #[should_panic(expected = "More than one benchmark timer detected")]
    fn nested_timers_panic() {
        let bencher = Bencher::new();
        bencher.time(|| {
            let _inner = bencher.start_timing();
        });
    }

    #[test]
    fn parse_rejects_bad_sizes() {
        for size in ["0", "-5", "abc", "", "1.5"] {
            assert_eq!(
                BenchmarkRequest::parse(size, &["Merge Sort"]),
                Err(BenchError::InvalidSize(size.to_owned()))
            );
        }
    }

    #[test]
    fn parse_rejects_whole_batch_on_unknown_name() {
        assert_eq!(
            BenchmarkRequest::parse("10", &["Merge Sort", "Heap Sort"]),
            Err(BenchError::UnknownAlgorithm("Heap Sort".to_owned()))
        );
        let empty: &[&str] = &[];
        assert_eq!(
            BenchmarkRequest::parse("10", empty),
            Err(BenchError::NoAlgorithmSelected)
        );
    }

    #[test]
    fn parse_keeps_order_and_drops_repeats() {
        let request =
            BenchmarkRequest::parse(" 250 ", &["quick", "Merge Sort", "4", "bubble"]).unwrap();
        assert_eq!(
            request.algorithms,
            vec![Algorithm::Quick, Algorithm::Merge, Algorithm::Bubble]
        );
        assert_eq!(request.dataset.count, 250);
    }

    #[test]
    fn progress_is_reported_in_order() {
        let request = BenchmarkRequest::new(
            [Algorithm::Merge, Algorithm::Selection],
            Dataset::new(50).with_seed(Some(1)),
        );
        let mut events = vec![];
        let batch = request.run_with(|p| events.push(p), || false).unwrap();
        assert!(!batch.cancelled);
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], Progress::Generating { count: 50 });
        assert_eq!(
            events[1],
            Progress::Running {
                algorithm: Algorithm::Merge
            }
        );
        assert_eq!(events[2], Progress::Finished(batch.results[0].clone()));
        assert_eq!(
            events[3],
            Progress::Running {
                algorithm: Algorithm::Selection
            }
        );
        assert_eq!(events[4], Progress::Finished(batch.results[1].clone()));
    }

    #[test]
    fn cancellation_stops_between_algorithms() {
        let request = BenchmarkRequest::new(Algorithm::ALL, Dataset::new(20));
        let mut runs = 0;
        let batch = request
            .run_with(
                |p| {
                    if let Progress::Running { .. } = p {
                        runs += 1;
                    }
                },
                {
                    let polls = std::cell::Cell::new(0);
                    move || {
                        polls.set(polls.get() + 1);
                        polls.get() > 2
                    }
                },
            )
            .unwrap();
        assert!(batch.cancelled);
        assert_eq!(runs, 2);
        assert_eq!(batch.results.len(), 2);
        assert_eq!(batch.results[0].algorithm, Algorithm::Selection);
        assert_eq!(batch.results[1].algorithm, Algorithm::Bubble);
    }
}
