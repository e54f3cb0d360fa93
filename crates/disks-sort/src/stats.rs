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

/// Counters collected while sorting a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortStatistics {
    /// Number of passes (in either direction) over the row.
    pub passes: u64,
    /// Number of adjacent pairs compared.
    pub comparisons: u64,
    /// Number of adjacent swaps performed.
    pub swaps: u64,
    /// Total duration of the sort.
    pub sort_duration: std::time::Duration,
}

impl std::fmt::Display for SortStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sort Statistics:")?;
        writeln!(f, "  Passes: {}", self.passes)?;
        writeln!(f, "  Comparisons: {}", self.comparisons)?;
        writeln!(f, "  Swaps: {}", self.swaps)?;
        writeln!(
            f,
            "  Sort Duration (secs): {:.3}",
            self.sort_duration.as_secs_f64()
        )
    }
}

/// Builder for `SortStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortStatisticsBuilder {
    passes: u64,
    comparisons: u64,
    swaps: u64,
    sort_duration: std::time::Duration,
}

impl Default for SortStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SortStatisticsBuilder {
    /// Creates a new `SortStatisticsBuilder` with all counters at zero.
    #[inline]
    pub fn new() -> Self {
        Self {
            passes: 0,
            comparisons: 0,
            swaps: 0,
            sort_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of passes.
    #[inline]
    pub fn passes(mut self, passes: u64) -> Self {
        self.passes = passes;
        self
    }

    /// Sets the number of comparisons.
    #[inline]
    pub fn comparisons(mut self, comparisons: u64) -> Self {
        self.comparisons = comparisons;
        self
    }

    /// Sets the number of swaps.
    #[inline]
    pub fn swaps(mut self, swaps: u64) -> Self {
        self.swaps = swaps;
        self
    }

    /// Sets the total sort duration.
    #[inline]
    pub fn sort_duration(mut self, sort_duration: std::time::Duration) -> Self {
        self.sort_duration = sort_duration;
        self
    }

    /// Builds the `SortStatistics` instance.
    #[inline]
    pub fn build(self) -> SortStatistics {
        SortStatistics {
            passes: self.passes,
            comparisons: self.comparisons,
            swaps: self.swaps,
            sort_duration: self.sort_duration,
        }
    }
}
