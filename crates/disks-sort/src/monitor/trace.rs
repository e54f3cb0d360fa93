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

use crate::{
    algorithm::Algorithm,
    monitor::sort_monitor::{Direction, SortMonitor},
    stats::SortStatistics,
};
use disks_model::{index::DiskIndex, row::DiskRow};

/// Summary of a single pass recorded by `SwapTraceMonitor`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PassRecord {
    pub direction: Direction,
    pub swaps: u64,
}

/// A monitor that records the input row, every swap and every pass of a run.
///
/// Replaying the recorded swaps on the recorded input reproduces the sorted
/// output, which makes the trace useful for diagnostics and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwapTraceMonitor {
    algorithm: Option<Algorithm>,
    before: Option<DiskRow>,
    swaps: Vec<DiskIndex>,
    passes: Vec<PassRecord>,
    statistics: Option<SortStatistics>,
}

impl SwapTraceMonitor {
    /// Creates a new, empty `SwapTraceMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the algorithm of the last recorded run.
    #[inline]
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Returns the input row of the last recorded run.
    #[inline]
    pub fn before(&self) -> Option<&DiskRow> {
        self.before.as_ref()
    }

    /// Returns the left index of every swap, in order.
    #[inline]
    pub fn swaps(&self) -> &[DiskIndex] {
        &self.swaps
    }

    /// Returns the summary of every pass, in order.
    #[inline]
    pub fn passes(&self) -> &[PassRecord] {
        &self.passes
    }

    /// Returns the statistics reported at the end of the run.
    #[inline]
    pub fn statistics(&self) -> Option<&SortStatistics> {
        self.statistics.as_ref()
    }

    /// Applies the recorded swaps to the recorded input row.
    ///
    /// Returns `None` if no run has been recorded.
    pub fn replay(&self) -> Option<DiskRow> {
        let mut row = self.before.clone()?;
        for index in &self.swaps {
            row.swap(index.get());
        }
        Some(row)
    }
}

impl SortMonitor for SwapTraceMonitor {
    fn name(&self) -> &str {
        "SwapTraceMonitor"
    }

    fn on_enter_sort(&mut self, algorithm: Algorithm, before: &DiskRow) {
        self.algorithm = Some(algorithm);
        self.before = Some(before.clone());
        self.swaps.clear();
        self.passes.clear();
        self.statistics = None;
    }

    fn on_pass_start(&mut self, _direction: Direction, _pass: u64) {}

    fn on_swap(&mut self, _row: &DiskRow, left_index: DiskIndex) {
        self.swaps.push(left_index);
    }

    fn on_pass_end(&mut self, direction: Direction, swaps: u64) {
        self.passes.push(PassRecord { direction, swaps });
    }

    fn on_exit_sort(&mut self, statistics: &SortStatistics) {
        self.statistics = Some(statistics.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::{PassRecord, SwapTraceMonitor};
    use crate::{algorithm::Algorithm, monitor::sort_monitor::Direction};
    use disks_model::{index::DiskIndex, row::DiskRow};

    #[test]
    fn test_empty_trace() {
        let trace = SwapTraceMonitor::new();
        assert!(trace.before().is_none());
        assert!(trace.swaps().is_empty());
        assert!(trace.replay().is_none());
        assert!(trace.statistics().is_none());
    }

    #[test]
    fn test_two_light_disks_swap_at_index_one() {
        let mut trace = SwapTraceMonitor::new();
        Algorithm::LeftToRight.sort_monitored(&DiskRow::new(2), &mut trace);

        assert_eq!(trace.algorithm(), Some(Algorithm::LeftToRight));
        assert_eq!(trace.swaps(), &[DiskIndex::new(1)]);
        assert_eq!(trace.replay(), Some("D D L L".parse().unwrap()));
    }

    #[test]
    fn test_replay_reproduces_output() {
        for algorithm in Algorithm::ALL {
            for light_count in 1..=10 {
                let before = DiskRow::new(light_count);
                let mut trace = SwapTraceMonitor::new();
                let outcome = algorithm.sort_monitored(&before, &mut trace);

                assert_eq!(trace.before(), Some(&before));
                assert_eq!(trace.replay().as_ref(), Some(outcome.sorted.after()));
                assert_eq!(trace.swaps().len() as u64, outcome.sorted.swap_count());
                assert_eq!(trace.passes().len() as u64, outcome.statistics.passes);
                assert_eq!(trace.statistics(), Some(&outcome.statistics));

                let pass_swaps: u64 = trace.passes().iter().map(|p| p.swaps).sum();
                assert_eq!(pass_swaps, outcome.sorted.swap_count());
            }
        }
    }

    #[test]
    fn test_trace_is_reset_between_runs() {
        let mut trace = SwapTraceMonitor::new();
        Algorithm::Lawnmower.sort_monitored(&DiskRow::new(5), &mut trace);
        Algorithm::Lawnmower.sort_monitored(&DiskRow::new(1), &mut trace);

        assert!(trace.swaps().is_empty());
        assert_eq!(
            trace.passes(),
            &[PassRecord {
                direction: Direction::Forward,
                swaps: 0
            }]
        );
    }
}
