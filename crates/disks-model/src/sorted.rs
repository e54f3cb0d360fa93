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

use crate::row::DiskRow;

/// The output of a sort: the final row together with the number of adjacent
/// swaps it took to get there.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortedDisks {
    after: DiskRow,
    swap_count: u64,
}

impl SortedDisks {
    /// Constructs a new `SortedDisks`.
    #[inline]
    pub fn new(after: DiskRow, swap_count: u64) -> Self {
        Self { after, swap_count }
    }

    /// Returns the final state of the row.
    #[inline]
    pub fn after(&self) -> &DiskRow {
        &self.after
    }

    /// Returns the number of adjacent swaps performed.
    #[inline]
    pub fn swap_count(&self) -> u64 {
        self.swap_count
    }

    /// Consumes `self` and returns the final row.
    #[inline]
    pub fn into_after(self) -> DiskRow {
        self.after
    }
}

impl std::fmt::Display for SortedDisks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SortedDisks(swaps={}, after=[{}])", self.swap_count, self.after)
    }
}

#[cfg(test)]
mod tests {
    use super::SortedDisks;
    use crate::row::DiskRow;

    #[test]
    fn test_accessors() {
        let row: DiskRow = "D D L L".parse().unwrap();
        let sorted = SortedDisks::new(row.clone(), 1);
        assert_eq!(sorted.after(), &row);
        assert_eq!(sorted.swap_count(), 1);
        assert_eq!(sorted.into_after(), row);
    }

    #[test]
    fn test_display() {
        let sorted = SortedDisks::new("D D L L".parse().unwrap(), 1);
        assert_eq!(sorted.to_string(), "SortedDisks(swaps=1, after=[D D L L])");
    }
}
