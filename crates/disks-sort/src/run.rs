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

//! Pass engine shared by the sorting algorithms.
//!
//! A `SortRun` owns the working copy of the row and the counters, and drives
//! a monitor. Algorithms only decide which range to sweep in which direction.

use crate::{
    algorithm::Algorithm,
    monitor::sort_monitor::{Direction, SortMonitor},
    result::SortOutcome,
    stats::SortStatisticsBuilder,
};
use disks_model::{index::DiskIndex, row::DiskRow, sorted::SortedDisks};
use std::{ops::Range, time::Instant};

pub(crate) struct SortRun<'m, M>
where
    M: SortMonitor + ?Sized,
{
    algorithm: Algorithm,
    row: DiskRow,
    monitor: &'m mut M,
    start_time: Instant,
    passes: u64,
    comparisons: u64,
    swaps: u64,
}

impl<'m, M> SortRun<'m, M>
where
    M: SortMonitor + ?Sized,
{
    /// Starts a run on `row`, which becomes the working copy.
    pub(crate) fn start(algorithm: Algorithm, row: DiskRow, monitor: &'m mut M) -> Self {
        monitor.on_enter_sort(algorithm, &row);
        Self {
            algorithm,
            row,
            monitor,
            start_time: Instant::now(),
            passes: 0,
            comparisons: 0,
            swaps: 0,
        }
    }

    #[inline]
    pub(crate) fn total_count(&self) -> usize {
        self.row.total_count()
    }

    /// Compares every adjacent pair whose left index lies in `left_indices`,
    /// visiting them in `direction`, and swaps each pair where a light disk
    /// precedes a dark one. Returns the number of swaps of this pass.
    ///
    /// # Panics
    ///
    /// Panics if the range reaches past the second-to-last disk.
    pub(crate) fn sweep(&mut self, direction: Direction, left_indices: Range<usize>) -> u64 {
        debug_assert!(
            left_indices.end < self.row.total_count() || left_indices.is_empty(),
            "called `SortRun::sweep` with a range past the last pair: the len is {} but the range is {:?}",
            self.row.total_count(),
            left_indices
        );

        self.monitor.on_pass_start(direction, self.passes);

        let mut swaps = 0;
        match direction {
            Direction::Forward => {
                for i in left_indices {
                    swaps += self.compare_and_swap(i);
                }
            }
            Direction::Backward => {
                for i in left_indices.rev() {
                    swaps += self.compare_and_swap(i);
                }
            }
        }

        self.monitor.on_pass_end(direction, swaps);
        self.passes += 1;
        swaps
    }

    #[inline]
    fn compare_and_swap(&mut self, left_index: usize) -> u64 {
        self.comparisons += 1;
        if self.row.is_inverted_at(left_index) {
            self.row.swap(left_index);
            self.swaps += 1;
            self.monitor.on_swap(&self.row, DiskIndex::new(left_index));
            1
        } else {
            0
        }
    }

    /// Ends the run and packages the working copy with its statistics.
    pub(crate) fn finish(self) -> SortOutcome {
        let statistics = SortStatisticsBuilder::new()
            .passes(self.passes)
            .comparisons(self.comparisons)
            .swaps(self.swaps)
            .sort_duration(self.start_time.elapsed())
            .build();

        self.monitor.on_exit_sort(&statistics);

        SortOutcome::new(
            self.algorithm,
            SortedDisks::new(self.row, self.swaps),
            statistics,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::SortRun;
    use crate::{
        algorithm::Algorithm,
        monitor::{no_op::NoOperationMonitor, sort_monitor::Direction},
    };
    use disks_model::row::DiskRow;

    #[test]
    fn test_forward_sweep_bubbles_light_disk_right() {
        let mut monitor = NoOperationMonitor::new();
        let row: DiskRow = "L D D L".parse().unwrap();
        let mut run = SortRun::start(Algorithm::LeftToRight, row, &mut monitor);

        assert_eq!(run.sweep(Direction::Forward, 0..3), 2);
        let outcome = run.finish();

        assert_eq!(outcome.sorted.after(), &"D D L L".parse::<DiskRow>().unwrap());
        assert_eq!(outcome.statistics.passes, 1);
        assert_eq!(outcome.statistics.comparisons, 3);
        assert_eq!(outcome.statistics.swaps, 2);
    }

    #[test]
    fn test_backward_sweep_bubbles_dark_disk_left() {
        let mut monitor = NoOperationMonitor::new();
        let row: DiskRow = "D L L D".parse().unwrap();
        let mut run = SortRun::start(Algorithm::Lawnmower, row, &mut monitor);

        assert_eq!(run.sweep(Direction::Backward, 0..3), 2);
        let outcome = run.finish();

        assert_eq!(outcome.sorted.after(), &"D D L L".parse::<DiskRow>().unwrap());
        assert_eq!(outcome.sorted.swap_count(), 2);
    }

    #[test]
    fn test_empty_range_counts_a_pass_without_comparisons() {
        let mut monitor = NoOperationMonitor::new();
        let mut run = SortRun::start(Algorithm::Lawnmower, DiskRow::new(1), &mut monitor);

        assert_eq!(run.sweep(Direction::Forward, 0..0), 0);
        let outcome = run.finish();
        assert_eq!(outcome.statistics.passes, 1);
        assert_eq!(outcome.statistics.comparisons, 0);
    }
}
