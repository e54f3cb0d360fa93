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

//! Lawnmower algorithm
//!
//! Sweeps the row back and forth over a shrinking window `[lo, hi)`:
//!
//! 1. A forward pass over the window carries the rightmost unsettled light
//!    disk to `hi - 1`. If it swaps nothing, the row is sorted.
//! 2. `hi` shrinks by one, then a backward pass carries the leftmost
//!    unsettled dark disk to `lo`. If it swaps nothing, the row is sorted.
//! 3. `lo` grows by one and the cycle repeats.
//!
//! Like the left-to-right algorithm it only swaps inverted pairs, so it
//! reaches the same final row with the same swap count, usually in far fewer
//! passes.

use crate::{
    algorithm::Algorithm,
    monitor::sort_monitor::{Direction, SortMonitor},
    result::SortOutcome,
    run::SortRun,
    sorter::{DiskSorter, assert_alternating},
};
use disks_model::row::DiskRow;

/// The lawnmower sorter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Lawnmower;

impl Lawnmower {
    pub(crate) fn run<M>(run: &mut SortRun<'_, M>)
    where
        M: SortMonitor + ?Sized,
    {
        let mut lo = 0;
        let mut hi = run.total_count();

        // The window holds the pairs (i, i + 1) with lo <= i and i + 1 < hi.
        while lo + 1 < hi {
            if run.sweep(Direction::Forward, lo..hi - 1) == 0 {
                break;
            }
            hi -= 1;

            if lo + 1 >= hi {
                break;
            }
            let swapped = run.sweep(Direction::Backward, lo..hi - 1);
            lo += 1;

            if swapped == 0 {
                break;
            }
        }
    }
}

impl DiskSorter for Lawnmower {
    #[inline]
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lawnmower
    }

    fn sort_monitored<M>(&self, before: &DiskRow, monitor: &mut M) -> SortOutcome
    where
        M: SortMonitor + ?Sized,
    {
        assert_alternating("Lawnmower::sort", before);

        let mut run = SortRun::start(self.algorithm(), before.clone(), monitor);
        Self::run(&mut run);
        run.finish()
    }
}
