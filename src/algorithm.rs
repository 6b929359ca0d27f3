use std::{fmt, str::FromStr};

use crate::{sort, BenchError};

/// The sorting algorithms that can be benchmarked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Bubble,
    Merge,
    Quick,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Display name, e.g. `Merge Sort`
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Short lowercase key, e.g. `merge`
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Bubble => "bubble",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Expected complexity label. Display only.
    pub fn complexity(&self) -> &'static str {
        match self {
            Algorithm::Selection | Algorithm::Bubble => "O(n²)",
            Algorithm::Merge | Algorithm::Quick => "O(n log n)",
        }
    }

    /// Position in the interactive menu, starting from 1.
    pub fn menu_number(&self) -> usize {
        Self::ALL.iter().position(|a| a == self).unwrap_or_default() + 1
    }

    pub fn is_stable(&self) -> bool {
        matches!(self, Algorithm::Merge)
    }

    /// Sort `slice` in place with this algorithm.
    pub fn sort<T: Ord + Clone>(&self, slice: &mut [T]) {
        match self {
            Algorithm::Selection => sort::selection_sort(slice),
            Algorithm::Bubble => sort::bubble_sort(slice),
            Algorithm::Merge => sort::merge_sort(slice),
            Algorithm::Quick => sort::quick_sort(slice),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = BenchError;

    /// Accepts the display name (`Quick Sort`, any case), the short key (`quick`,
    /// `quick-sort`, `quick_sort`) or the menu number (`4`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        let normalized = normalized.strip_suffix(" sort").unwrap_or(&normalized);
        Self::ALL
            .into_iter()
            .find(|a| {
                a.key() == normalized || a.menu_number().to_string() == normalized
            })
            .ok_or_else(|| BenchError::UnknownAlgorithm(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_keys_and_numbers() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(algorithm.key().parse::<Algorithm>(), Ok(algorithm));
            assert_eq!(
                algorithm.menu_number().to_string().parse::<Algorithm>(),
                Ok(algorithm)
            );
        }
        assert_eq!("  merge_sort ".parse::<Algorithm>(), Ok(Algorithm::Merge));
        assert_eq!("BUBBLE SORT".parse::<Algorithm>(), Ok(Algorithm::Bubble));
    }

    #[test]
    fn rejects_unknown_names() {
        for bad in ["Heap Sort", "", "5", "0", "sort"] {
            assert_eq!(
                bad.parse::<Algorithm>(),
                Err(BenchError::UnknownAlgorithm(bad.to_owned()))
            );
        }
    }

    #[test]
    fn menu_order_matches_all() {
        let numbers = Algorithm::ALL.map(|a| a.menu_number());
        assert_eq!(numbers, [1, 2, 3, 4]);
    }

    #[test]
    fn only_merge_sort_is_stable() {
        let stable = Algorithm::ALL.into_iter().filter(|a| a.is_stable());
        assert_eq!(stable.collect::<Vec<_>>(), vec![Algorithm::Merge]);
    }
}
