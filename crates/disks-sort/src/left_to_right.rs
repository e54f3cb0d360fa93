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

//! Left-to-right algorithm
//!
//! Repeats a full left-to-right pass `n - 1` times for a row of `n` disks.
//! Each pass compares every adjacent pair and swaps it when a light disk
//! sits left of a dark disk. After pass `p` the `p + 1` rightmost disks are
//! settled, so `n - 1` passes always suffice. There is no early exit: the
//! number of passes and comparisons depends only on the row length.
//!
//! Every swap removes exactly one inversion, so the swap count equals the
//! number of (light, dark) pairs in the input. For an alternating row with
//! `k` light disks that is `k * (k - 1) / 2`, the minimum possible.

use crate::{
    algorithm::Algorithm,
    monitor::sort_monitor::{Direction, SortMonitor},
    result::SortOutcome,
    run::SortRun,
    sorter::{DiskSorter, assert_alternating},
};
use disks_model::row::DiskRow;

/// The left-to-right sorter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct LeftToRight;

impl LeftToRight {
    pub(crate) fn run<M>(run: &mut SortRun<'_, M>)
    where
        M: SortMonitor + ?Sized,
    {
        let n = run.total_count();
        for _ in 0..n - 1 {
            run.sweep(Direction::Forward, 0..n - 1);
        }
    }
}

impl DiskSorter for LeftToRight {
    #[inline]
    fn algorithm(&self) -> Algorithm {
        Algorithm::LeftToRight
    }

    fn sort_monitored<M>(&self, before: &DiskRow, monitor: &mut M) -> SortOutcome
    where
        M: SortMonitor + ?Sized,
    {
        assert_alternating("LeftToRight::sort", before);

        let mut run = SortRun::start(self.algorithm(), before.clone(), monitor);
        Self::run(&mut run);
        run.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::LeftToRight;
    use crate::{
        algorithm::Algorithm,
        monitor::{no_op::NoOperationMonitor, trace::SwapTraceMonitor},
        run::SortRun,
        sorter::DiskSorter,
    };
    use disks_model::row::DiskRow;

    #[test]
    fn test_pass_and_comparison_counts_depend_only_on_length() {
        for light_count in 1..=10 {
            let n = 2 * light_count as u64;
            let outcome =
                LeftToRight.sort_monitored(&DiskRow::new(light_count), &mut NoOperationMonitor);

            assert_eq!(outcome.statistics.passes, n - 1);
            assert_eq!(outcome.statistics.comparisons, (n - 1) * (n - 1));
            assert_eq!(outcome.statistics.swaps, outcome.sorted.swap_count());
        }
    }

    #[test]
    fn test_first_pass_swaps_every_light_but_the_last() {
        let mut trace = SwapTraceMonitor::new();
        LeftToRight.sort_monitored(&DiskRow::new(4), &mut trace);

        // D L D L D L D L: the first pass moves each of the last three dark
        // disks one step left.
        assert_eq!(trace.passes()[0].swaps, 3);
        assert!(trace.passes().iter().skip(3).all(|p| p.swaps == 0));
    }

    #[test]
    fn test_sorted_row_is_left_unchanged() {
        for light_count in 1..=8 {
            let sorted: DiskRow = sorted_row(light_count);
            let mut monitor = NoOperationMonitor;
            let mut run = SortRun::start(Algorithm::LeftToRight, sorted.clone(), &mut monitor);
            LeftToRight::run(&mut run);
            let outcome = run.finish();

            assert_eq!(outcome.sorted.swap_count(), 0);
            assert_eq!(outcome.sorted.after(), &sorted);
        }
    }

    fn sorted_row(light_count: usize) -> DiskRow {
        let dark = vec!["D"; light_count].join(" ");
        let light = vec!["L"; light_count].join(" ");
        format!("{} {}", dark, light).parse().unwrap()
    }
}
