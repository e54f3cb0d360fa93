// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{algorithm::Algorithm, stats::SortStatistics};
use disks_model::{row::DiskRow, sorted::SortedDisks};

/// The full result of a monitored sort: which algorithm ran, the sorted
/// disks, and the statistics of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub algorithm: Algorithm,
    pub sorted: SortedDisks,
    pub statistics: SortStatistics,
}

impl SortOutcome {
    #[inline]
    pub fn new(algorithm: Algorithm, sorted: SortedDisks, statistics: SortStatistics) -> Self {
        Self {
            algorithm,
            sorted,
            statistics,
        }
    }

    /// Returns the final row.
    #[inline]
    pub fn after(&self) -> &DiskRow {
        self.sorted.after()
    }

    /// Returns the number of adjacent swaps performed.
    #[inline]
    pub fn swap_count(&self) -> u64 {
        self.sorted.swap_count()
    }

    /// Consumes the outcome and returns the sorted disks.
    #[inline]
    pub fn into_sorted(self) -> SortedDisks {
        self.sorted
    }
}

impl std::fmt::Display for SortOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} swaps in {} passes, after=[{}]",
            self.algorithm,
            self.sorted.swap_count(),
            self.statistics.passes,
            self.sorted.after()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SortOutcome;
    use crate::{algorithm::Algorithm, stats::SortStatisticsBuilder};
    use disks_model::sorted::SortedDisks;

    #[test]
    fn test_accessors_and_display() {
        let sorted = SortedDisks::new("D D L L".parse().unwrap(), 1);
        let stats = SortStatisticsBuilder::new().passes(2).swaps(1).build();
        let outcome = SortOutcome::new(Algorithm::Lawnmower, sorted.clone(), stats);

        assert_eq!(outcome.swap_count(), 1);
        assert_eq!(outcome.after(), sorted.after());
        assert_eq!(
            outcome.to_string(),
            "lawnmower: 1 swaps in 2 passes, after=[D D L L]"
        );
        assert_eq!(outcome.into_sorted(), sorted);
    }
}
