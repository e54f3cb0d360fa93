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
    error::SortError,
    lawnmower::Lawnmower,
    left_to_right::LeftToRight,
    monitor::sort_monitor::SortMonitor,
    result::SortOutcome,
    sorter::DiskSorter,
};
use disks_model::{row::DiskRow, sorted::SortedDisks};

/// Selects one of the sorting algorithms at runtime.
///
/// Parses from its name, so the choice can come from a command line or a
/// configuration value:
///
/// ```rust
/// use disks_model::row::DiskRow;
/// use disks_sort::algorithm::Algorithm;
///
/// let algorithm: Algorithm = "lawnmower".parse().unwrap();
/// let sorted = algorithm.sort(&DiskRow::new(2));
/// assert_eq!(sorted.swap_count(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Algorithm {
    /// Repeated left-to-right passes.
    LeftToRight,
    /// Alternating forward and backward passes over a shrinking window.
    Lawnmower,
}

impl Algorithm {
    /// Every available algorithm.
    pub const ALL: [Algorithm; 2] = [Algorithm::LeftToRight, Algorithm::Lawnmower];

    /// Returns the canonical name of the algorithm.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::LeftToRight => "left-to-right",
            Algorithm::Lawnmower => "lawnmower",
        }
    }

    /// Sorts `before` with this algorithm.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not alternating.
    #[inline]
    pub fn sort(self, before: &DiskRow) -> SortedDisks {
        match self {
            Algorithm::LeftToRight => LeftToRight.sort(before),
            Algorithm::Lawnmower => Lawnmower.sort(before),
        }
    }

    /// Sorts `before` with this algorithm, reporting progress to `monitor`.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not alternating.
    pub fn sort_monitored<M>(self, before: &DiskRow, monitor: &mut M) -> SortOutcome
    where
        M: SortMonitor + ?Sized,
    {
        match self {
            Algorithm::LeftToRight => LeftToRight.sort_monitored(before, monitor),
            Algorithm::Lawnmower => Lawnmower.sort_monitored(before, monitor),
        }
    }

    /// Sorts `before` with this algorithm, or returns
    /// `SortError::NotAlternating` if the row is not alternating.
    pub fn try_sort(self, before: &DiskRow) -> Result<SortOutcome, SortError> {
        match self {
            Algorithm::LeftToRight => LeftToRight.try_sort(before),
            Algorithm::Lawnmower => Lawnmower.try_sort(before),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = SortError;

    /// Accepts the canonical names case-insensitively, with `_` or spaces in
    /// place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "left-to-right" => Ok(Algorithm::LeftToRight),
            "lawnmower" => Ok(Algorithm::Lawnmower),
            _ => Err(SortError::UnknownAlgorithm(s.to_string())),
        }
    }
}
