use thiserror::Error;

/// Input validation failures. All of them are raised before any dataset is generated
/// or any sort runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BenchError {
    #[error("dataset size must be a positive integer, got `{0}`")]
    InvalidSize(String),
    #[error("no sorting algorithm selected")]
    NoAlgorithmSelected,
    #[error("unknown sorting algorithm `{0}`")]
    UnknownAlgorithm(String),
    #[error("invalid value range: lower bound {lower} is greater than upper bound {upper}")]
    InvalidRange { lower: i64, upper: i64 },
}
