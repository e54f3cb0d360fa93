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

//! # Disks Sort
//!
//! Adjacent-swap sorting algorithms for the alternating disks problem. Given
//! a row `D L D L ... D L`, both algorithms produce `D ... D L ... L` using
//! the minimum number of adjacent swaps, `k * (k - 1) / 2` for `k` light
//! disks.
//!
//! ## Entry points
//!
//! - `sorter::sort_left_to_right` / `sorter::sort_lawnmower`: plain sorts
//!   returning `SortedDisks`.
//! - `sorter::DiskSorter`: trait implemented by `LeftToRight` and
//!   `Lawnmower`, with monitored and checked variants.
//! - `algorithm::Algorithm`: runtime selection by name.
//!
//! ## Modules
//!
//! - `left_to_right`, `lawnmower`: the two algorithms.
//! - `monitor`: observers for passes and swaps (log, composite, trace).
//! - `result`: `SortOutcome`, sorted disks plus statistics.
//! - `stats`: pass, comparison and swap counters.
//! - `error`: `SortError` for the checked entry points.
//!
//! Sorting never mutates the caller's row. Rows that are not alternating
//! violate the precondition of both algorithms: the plain entry points
//! panic, the `try_sort` variants return `SortError::NotAlternating`.

pub mod algorithm;
pub mod error;
pub mod lawnmower;
pub mod left_to_right;
pub mod monitor;
pub mod result;
mod run;
pub mod sorter;
pub mod stats;
