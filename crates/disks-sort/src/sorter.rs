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

//! The `DiskSorter` trait and the plain sorting entry points.

use crate::{
    algorithm::Algorithm,
    error::SortError,
    lawnmower::Lawnmower,
    left_to_right::LeftToRight,
    monitor::{no_op::NoOperationMonitor, sort_monitor::SortMonitor},
    result::SortOutcome,
};
use disks_model::{row::DiskRow, sorted::SortedDisks};

/// An algorithm that sorts an alternating row of disks using adjacent swaps.
///
/// Implementations never mutate the input row: they sort a private copy and
/// return it inside the outcome.
pub trait DiskSorter {
    /// Returns which algorithm this sorter implements.
    fn algorithm(&self) -> Algorithm;

    /// Sorts `before`, reporting progress to `monitor`.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not alternating.
    fn sort_monitored<M>(&self, before: &DiskRow, monitor: &mut M) -> SortOutcome
    where
        M: SortMonitor + ?Sized;

    /// Sorts `before` and returns the sorted row with its swap count.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not alternating.
    #[inline]
    fn sort(&self, before: &DiskRow) -> SortedDisks {
        self.sort_monitored(before, &mut NoOperationMonitor::new())
            .into_sorted()
    }

    /// Sorts `before`, or returns `SortError::NotAlternating` if the row does
    /// not satisfy the precondition.
    fn try_sort(&self, before: &DiskRow) -> Result<SortOutcome, SortError> {
        if !before.is_alternating() {
            return Err(SortError::NotAlternating(before.clone()));
        }
        Ok(self.sort_monitored(before, &mut NoOperationMonitor::new()))
    }
}

#[inline]
pub(crate) fn assert_alternating(caller: &str, before: &DiskRow) {
    assert!(
        before.is_alternating(),
        "called `{}` with a row that is not alternating: [{}]",
        caller,
        before
    );
}

/// Sorts `before` with the left-to-right algorithm.
///
/// # Panics
///
/// Panics if `before` is not alternating.
///
/// # Examples
///
/// ```rust
/// use disks_model::row::DiskRow;
/// use disks_sort::sorter::sort_left_to_right;
///
/// let sorted = sort_left_to_right(&DiskRow::new(3));
/// assert_eq!(sorted.after().to_string(), "D D D L L L");
/// assert_eq!(sorted.swap_count(), 3);
/// ```
#[inline]
pub fn sort_left_to_right(before: &DiskRow) -> SortedDisks {
    LeftToRight.sort(before)
}

/// Sorts `before` with the lawnmower algorithm.
///
/// # Panics
///
/// Panics if `before` is not alternating.
///
/// # Examples
///
/// ```rust
/// use disks_model::row::DiskRow;
/// use disks_sort::sorter::sort_lawnmower;
///
/// let sorted = sort_lawnmower(&DiskRow::new(4));
/// assert!(sorted.after().is_sorted());
/// assert_eq!(sorted.swap_count(), 6);
/// ```
#[inline]
pub fn sort_lawnmower(before: &DiskRow) -> SortedDisks {
    Lawnmower.sort(before)
}
