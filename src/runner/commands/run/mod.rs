use std::path::PathBuf;

use chrono::{DateTime, Local};
use clap::Parser;
use log::info;
use sortbench::{
    format_duration, Algorithm, Batch, BenchError, BenchmarkRequest, Progress, Report,
    ReportFormat, Worker,
};

use crate::config::{Config, Profile};

mod printer;

use printer::MarkdownPrinter;

/// Generate a random dataset and time each selected algorithm on its own copy
#[derive(Parser)]
pub struct RunArgs {
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    /// Number of values to sort
    pub size: Option<String>,
    #[arg(short = 'a', long = "algorithm")]
    /// Algorithm to run, by name (`Merge Sort`), key (`merge`) or menu number (`3`).
    /// Repeat to run several, in the given order.
    pub algorithms: Vec<String>,
    #[arg(long, default_value = "false")]
    /// Run all algorithms
    pub all: bool,
    #[arg(long)]
    /// Seed for the dataset
    pub seed: Option<u64>,
    #[arg(long, allow_hyphen_values = true)]
    /// Smallest generated value
    pub lower: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    /// Largest generated value
    pub upper: Option<i64>,
    #[arg(short = 'f', long)]
    /// Output format
    pub format: Option<ReportFormat>,
    #[arg(long, default_value = "default")]
    /// Benchmarking profile
    pub profile: String,
    #[arg(long)]
    /// Path to the config file. Default to ./sortbench.toml
    pub config: Option<PathBuf>,
}

impl RunArgs {
    fn generate_runid(&self) -> (String, DateTime<Local>) {
        let t = Local::now();
        let time = t.format("%Y-%m-%d-%a-%H%M%S").to_string();
        let host = crate::platform_info::PLATFORM_INFO.host.clone();
        let run_id = format!("{}-{}-{}", self.profile, host, time);
        (run_id, t)
    }

    /// Apply command line overrides on top of the profile.
    fn apply_overrides(&self, mut profile: Profile) -> anyhow::Result<Profile> {
        if let Some(size) = &self.size {
            profile.size = size
                .trim()
                .parse()
                .map_err(|_| BenchError::InvalidSize(size.clone()))?;
        }
        if self.all {
            profile.algorithms = Algorithm::ALL.iter().map(|a| a.name().to_owned()).collect();
        } else if !self.algorithms.is_empty() {
            profile.algorithms = self.algorithms.clone();
        }
        if let Some(seed) = self.seed {
            profile.seed = Some(seed);
        }
        if let Some(lower) = self.lower {
            profile.lower = lower;
        }
        if let Some(upper) = self.upper {
            profile.upper = upper;
        }
        if let Some(format) = self.format {
            profile.format = format;
        }
        Ok(profile)
    }

    fn build_request(profile: &Profile) -> anyhow::Result<BenchmarkRequest> {
        let mut request = BenchmarkRequest::parse(
            &profile.size.to_string(),
            profile.algorithms.as_slice(),
        )?;
        request.dataset = request
            .dataset
            .with_range(profile.lower, profile.upper)
            .with_seed(profile.seed);
        request.validate()?;
        Ok(request)
    }

    /// Start the batch on a worker thread and log progress until it completes.
    fn run_batch(request: BenchmarkRequest) -> anyhow::Result<Batch> {
        let handle = Worker::spawn(request)?;
        for event in handle.progress().iter() {
            match event {
                Progress::Generating { count } => info!("Generating {} random values", count),
                Progress::Running { algorithm } => info!("Running {}", algorithm),
                Progress::Finished(result) => info!(
                    "{} finished in {}",
                    result.name(),
                    format_duration(result.elapsed_secs())
                ),
                Progress::Cancelled => info!("Benchmark cancelled"),
            }
        }
        Ok(handle.wait()?)
    }

    fn print_report(&self, profile: &Profile, batch: &Batch, run_id: &str) {
        let report = Report {
            results: &batch.results,
            count: profile.size as usize,
            cancelled: batch.cancelled,
        };
        match profile.format {
            ReportFormat::Table => {
                let mut printer = MarkdownPrinter::new();
                printer.add(format!("# Sorting benchmark: {} values\n\n", profile.size));
                printer.add(format!("* run id: {}\n", run_id));
                printer.add(crate::platform_info::PLATFORM_INFO.to_markdown());
                printer.add("\n");
                printer.add(report.render(ReportFormat::Table));
                printer.dump();
            }
            format => print!("{}", report.render(format)),
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let config = Config::load(self.config.as_deref())?;
        let profile = self.apply_overrides(config.profile(&self.profile)?)?;
        let request = Self::build_request(&profile)?;
        let (run_id, start_time) = self.generate_runid();
        info!("RUNID: {}", run_id);
        let batch = Self::run_batch(request)?;
        info!(
            "Batch completed in {:.3}s",
            (Local::now() - start_time).num_milliseconds() as f64 / 1000.0
        );
        self.print_report(&profile, &batch, &run_id);
        Ok(())
    }
}
