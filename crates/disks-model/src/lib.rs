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

//! # Disks Model
//!
//! Data model for the alternating disks problem: a row of `2n` disks,
//! alternating dark and light, that has to be sorted into all dark disks on
//! the left and all light disks on the right using adjacent swaps only.
//!
//! ## Modules
//!
//! - `color`: `DiskColor` with the order `Dark < Light` and single-letter
//!   codes (`D`, `L`).
//! - `index`: Phantom-tagged, zero-cost typed positions (`DiskIndex`).
//! - `row`: `DiskRow`, the fixed-length row with its `is_alternating` and
//!   `is_sorted` predicates, adjacent swap, rendering and parsing.
//! - `sorted`: `SortedDisks`, a final row paired with its swap count.
//! - `error`: `RowError` for building rows from untrusted input.
//!
//! ## Usage
//!
//! ```rust
//! use disks_model::row::DiskRow;
//!
//! let mut row = DiskRow::new(2);
//! assert_eq!(row.to_string(), "D L D L");
//! assert!(row.is_alternating());
//!
//! row.swap(1);
//! assert!(row.is_sorted());
//! assert_eq!(row, "D D L L".parse::<DiskRow>().unwrap());
//! ```

pub mod color;
pub mod error;
pub mod index;
pub mod row;
pub mod sorted;
