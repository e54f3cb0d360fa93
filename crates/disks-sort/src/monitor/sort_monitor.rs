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

//! Sort monitoring interface
//!
//! Declares the `SortMonitor` trait for observing a sort run. Callbacks follow
//! the lifecycle of a run:
//!
//! - enter → { pass start → swap* → pass end }* → exit
//!
//! Monitors observe only; a run cannot be cancelled. Methods take
//! `&mut self` and monitors are assumed single-threaded.

use crate::{algorithm::Algorithm, stats::SortStatistics};
use disks_model::{index::DiskIndex, row::DiskRow};

/// The direction of a pass over the row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    /// Scanning from low to high indices.
    Forward,
    /// Scanning from high to low indices.
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "Forward"),
            Direction::Backward => write!(f, "Backward"),
        }
    }
}

/// Trait for observing the progress of a sorting algorithm.
pub trait SortMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once before the first pass, with the unsorted input row.
    fn on_enter_sort(&mut self, algorithm: Algorithm, before: &DiskRow);
    /// Called when a pass starts. `pass` counts from zero.
    fn on_pass_start(&mut self, direction: Direction, pass: u64);
    /// Called after the disks at `left_index` and its right neighbor were
    /// swapped. `row` is the state after the swap.
    fn on_swap(&mut self, row: &DiskRow, left_index: DiskIndex);
    /// Called when a pass ends with the number of swaps it performed.
    fn on_pass_end(&mut self, direction: Direction, swaps: u64);
    /// Called once after the last pass.
    fn on_exit_sort(&mut self, statistics: &SortStatistics);
}

impl std::fmt::Debug for dyn SortMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SortMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn SortMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SortMonitor({})", self.name())
    }
}

impl<M> SortMonitor for &mut M
where
    M: SortMonitor + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter_sort(&mut self, algorithm: Algorithm, before: &DiskRow) {
        (**self).on_enter_sort(algorithm, before)
    }

    fn on_pass_start(&mut self, direction: Direction, pass: u64) {
        (**self).on_pass_start(direction, pass)
    }

    fn on_swap(&mut self, row: &DiskRow, left_index: DiskIndex) {
        (**self).on_swap(row, left_index)
    }

    fn on_pass_end(&mut self, direction: Direction, swaps: u64) {
        (**self).on_pass_end(direction, swaps)
    }

    fn on_exit_sort(&mut self, statistics: &SortStatistics) {
        (**self).on_exit_sort(statistics)
    }
}
