use std::ops::RangeInclusive;

use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::BenchError;

/// Default value range of the generated integers.
pub const DEFAULT_RANGE: RangeInclusive<i64> = 1..=10000;

/// Describes the random dataset a benchmark batch sorts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Number of values
    pub count: usize,
    /// Smallest value that can be drawn
    pub lower: i64,
    /// Largest value that can be drawn
    pub upper: i64,
    /// Fixed RNG seed. The dataset is drawn from entropy if this is `None`.
    pub seed: Option<u64>,
}

impl Dataset {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            lower: *DEFAULT_RANGE.start(),
            upper: *DEFAULT_RANGE.end(),
            seed: None,
        }
    }

    pub fn with_range(mut self, lower: i64, upper: i64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.count == 0 {
            return Err(BenchError::InvalidSize(self.count.to_string()));
        }
        if self.lower > self.upper {
            return Err(BenchError::InvalidRange {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }

    /// Draw the values.
    pub fn generate(&self) -> Result<Vec<i64>, BenchError> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let range = self.lower..=self.upper;
        Ok((0..self.count)
            .map(|_| rng.gen_range(range.clone()))
            .collect())
    }
}

/// Generate `count` integers drawn independently and uniformly from `[lower, upper]`.
pub fn generate(count: usize, lower: i64, upper: i64) -> Result<Vec<i64>, BenchError> {
    Dataset::new(count).with_range(lower, upper).generate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_in_range() {
        let values = generate(2000, -3, 3).unwrap();
        assert_eq!(values.len(), 2000);
        assert!(values.iter().all(|v| (-3..=3).contains(v)));
        // Both ends of the range are reachable
        assert!(values.contains(&-3));
        assert!(values.contains(&3));
    }

    #[test]
    fn single_value_range() {
        assert_eq!(generate(5, 42, 42).unwrap(), vec![42; 5]);
    }

    #[test]
    fn seeded_datasets_repeat() {
        let dataset = Dataset::new(100).with_seed(Some(42));
        assert_eq!(dataset.generate().unwrap(), dataset.generate().unwrap());
        let other = Dataset::new(100).with_seed(Some(43));
        assert_ne!(dataset.generate().unwrap(), other.generate().unwrap());
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(
            generate(0, 1, 10),
            Err(BenchError::InvalidSize("0".to_owned()))
        );
        assert_eq!(
            generate(10, 5, 1),
            Err(BenchError::InvalidRange { lower: 5, upper: 1 })
        );
    }

    #[test]
    fn full_i64_range() {
        let values = generate(10, i64::MIN, i64::MAX).unwrap();
        assert_eq!(values.len(), 10);
    }
}
