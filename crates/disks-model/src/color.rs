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

//! Disk colors.
//!
//! A disk is either dark or light. Colors are totally ordered with
//! `Dark < Light`, which is the order the sorting algorithms establish:
//! every dark disk ends up to the left of every light disk.

use crate::error::RowError;

/// The color of a single disk.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum DiskColor {
    /// A dark disk. Belongs in the left half of a sorted row.
    Dark,
    /// A light disk. Belongs in the right half of a sorted row.
    Light,
}

impl DiskColor {
    /// Returns the single-letter code of the color (`"D"` or `"L"`).
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            DiskColor::Dark => "D",
            DiskColor::Light => "L",
        }
    }

    /// Returns the other color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            DiskColor::Dark => DiskColor::Light,
            DiskColor::Light => DiskColor::Dark,
        }
    }

    #[inline]
    pub const fn is_dark(self) -> bool {
        matches!(self, DiskColor::Dark)
    }

    #[inline]
    pub const fn is_light(self) -> bool {
        matches!(self, DiskColor::Light)
    }
}

impl std::fmt::Display for DiskColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for DiskColor {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "D" => Ok(DiskColor::Dark),
            "L" => Ok(DiskColor::Light),
            other => Err(RowError::UnknownColor(other.to_string())),
        }
    }
}
