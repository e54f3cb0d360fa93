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

/// The error type for building a `DiskRow` from untrusted input.
///
/// Out-of-range indices are not represented here: those are programming
/// errors and panic at the call site.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// A row was requested with zero light disks.
    #[error("a row must contain at least one light disk")]
    ZeroLightCount,
    /// The input did not contain a single disk.
    #[error("a row must contain at least one disk")]
    Empty,
    /// The input contained an odd number of disks.
    #[error("a row must contain an even number of disks, found {0}")]
    OddLength(usize),
    /// A token was neither `D` nor `L`.
    #[error("unknown disk color code '{0}'")]
    UnknownColor(String),
    /// The number of dark disks differs from the number of light disks.
    #[error("a row must contain as many dark as light disks, found {dark} dark and {light} light")]
    Unbalanced { dark: usize, light: usize },
}
