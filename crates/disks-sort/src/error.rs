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

use disks_model::row::DiskRow;

/// The error type for the checked sorting entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The input row does not strictly alternate colors.
    #[error("cannot sort a row that is not alternating: [{0}]")]
    NotAlternating(DiskRow),
    /// An algorithm name did not match any known algorithm.
    #[error("unknown sorting algorithm '{0}', expected one of: left-to-right, lawnmower")]
    UnknownAlgorithm(String),
}

#[cfg(test)]
mod tests {
    use super::SortError;

    #[test]
    fn test_display_messages() {
        let row = "D D L L".parse().unwrap();
        assert_eq!(
            SortError::NotAlternating(row).to_string(),
            "cannot sort a row that is not alternating: [D D L L]"
        );
        assert_eq!(
            SortError::UnknownAlgorithm("quick".into()).to_string(),
            "unknown sorting algorithm 'quick', expected one of: left-to-right, lawnmower"
        );
    }
}
