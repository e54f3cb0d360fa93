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

//! The row of disks.
//!
//! A `DiskRow` owns a fixed-length sequence of `2 * light_count` colors. The
//! length never changes after construction and the only mutation primitive
//! is [`DiskRow::swap`], which exchanges a disk with its right neighbor. This
//! mirrors the physical constraint of the puzzle: disks may only trade places
//! with an adjacent disk.
//!
//! Rows render as space separated color codes (`"D L D L"`) and parse back
//! from the same format via `FromStr`.

use crate::{color::DiskColor, error::RowError, index::DiskIndex};

/// A fixed-length row of dark and light disks.
///
/// The row always holds an even, non-zero number of disks with as many dark
/// as light disks.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DiskRow {
    colors: Vec<DiskColor>,
}

impl DiskRow {
    /// Creates an alternating row of `2 * light_count` disks, starting with a
    /// dark disk at index 0.
    ///
    /// # Panics
    ///
    /// Panics if `light_count` is zero.
    pub fn new(light_count: usize) -> Self {
        assert!(
            light_count > 0,
            "called `DiskRow::new` with zero light count: a row must contain at least one light disk"
        );

        Self::alternating(light_count)
    }

    /// Creates an alternating row of `2 * light_count` disks, or returns
    /// `RowError::ZeroLightCount` if `light_count` is zero.
    pub fn try_new(light_count: usize) -> Result<Self, RowError> {
        if light_count == 0 {
            return Err(RowError::ZeroLightCount);
        }
        Ok(Self::alternating(light_count))
    }

    /// Creates a row from an explicit color sequence.
    ///
    /// The sequence must be non-empty, of even length, and contain as many
    /// dark as light disks. It does not need to be alternating.
    pub fn from_colors(colors: Vec<DiskColor>) -> Result<Self, RowError> {
        if colors.is_empty() {
            return Err(RowError::Empty);
        }
        if colors.len() % 2 != 0 {
            return Err(RowError::OddLength(colors.len()));
        }

        let dark = colors.iter().filter(|c| c.is_dark()).count();
        let light = colors.len() - dark;
        if dark != light {
            return Err(RowError::Unbalanced { dark, light });
        }

        Ok(Self { colors })
    }

    fn alternating(light_count: usize) -> Self {
        let colors = (0..light_count * 2)
            .map(|i| {
                if i % 2 == 0 {
                    DiskColor::Dark
                } else {
                    DiskColor::Light
                }
            })
            .collect();

        Self { colors }
    }

    /// Returns the total number of disks in the row.
    #[inline]
    pub fn total_count(&self) -> usize {
        self.colors.len()
    }

    /// Returns the number of light disks in the row.
    #[inline]
    pub fn light_count(&self) -> usize {
        self.total_count() / 2
    }

    /// Returns the number of dark disks in the row.
    #[inline]
    pub fn dark_count(&self) -> usize {
        self.light_count()
    }

    /// Returns `true` if `index` addresses a disk of this row.
    #[inline]
    pub fn is_index(&self, index: usize) -> bool {
        index < self.total_count()
    }

    /// Returns the color of the disk at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> DiskColor {
        assert!(
            self.is_index(index),
            "called `DiskRow::get` with index out of bounds: the len is {} but the index is {}",
            self.total_count(),
            index
        );

        self.colors[index]
    }

    /// Returns the color of the disk at `index`, or `None` if out of bounds.
    #[inline]
    pub fn try_get(&self, index: usize) -> Option<DiskColor> {
        self.colors.get(index).copied()
    }

    /// Returns the color of the disk at the typed position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn color_at(&self, index: DiskIndex) -> DiskColor {
        self.get(index.get())
    }

    /// Swaps the disk at `left_index` with the disk at `left_index + 1`.
    ///
    /// # Panics
    ///
    /// Panics if either `left_index` or `left_index + 1` is out of bounds.
    #[inline]
    pub fn swap(&mut self, left_index: usize) {
        assert!(
            self.is_index(left_index),
            "called `DiskRow::swap` with index out of bounds: the len is {} but the index is {}",
            self.total_count(),
            left_index
        );
        let right_index = left_index + 1;
        assert!(
            self.is_index(right_index),
            "called `DiskRow::swap` without a right neighbor: the len is {} but the right index is {}",
            self.total_count(),
            right_index
        );

        self.colors.swap(left_index, right_index);
    }

    /// Returns `true` if the pair starting at `left_index` is out of order,
    /// i.e. a light disk sits directly left of a dark disk.
    ///
    /// # Panics
    ///
    /// Panics if either `left_index` or `left_index + 1` is out of bounds.
    #[inline]
    pub fn is_inverted_at(&self, left_index: usize) -> bool {
        self.get(left_index) > self.get(left_index + 1)
    }

    /// Returns `true` if the colors strictly alternate from start to end.
    ///
    /// Every disk has the same color as the disk two positions ahead, and the
    /// first two disks differ.
    pub fn is_alternating(&self) -> bool {
        let periodic = self.colors.windows(3).all(|w| w[0] == w[2]);
        periodic && self.colors[0] != self.colors[1]
    }

    /// Returns `true` if every disk in the left half is dark and every disk
    /// in the right half is light.
    pub fn is_sorted(&self) -> bool {
        let (left, right) = self.colors.split_at(self.total_count() / 2);
        left.iter().all(|c| c.is_dark()) && right.iter().all(|c| c.is_light())
    }

    /// Returns the number of dark disks in the right half. This equals the
    /// number of light disks in the left half and is zero iff the row is
    /// sorted.
    pub fn misplaced_count(&self) -> usize {
        let (_, right) = self.colors.split_at(self.total_count() / 2);
        right.iter().filter(|c| c.is_dark()).count()
    }

    /// Returns the colors of the row as a slice.
    #[inline]
    pub fn colors(&self) -> &[DiskColor] {
        &self.colors
    }

    /// Returns an iterator over the colors of the row, left to right.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, DiskColor>> {
        self.colors.iter().copied()
    }
}

impl std::fmt::Display for DiskRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for DiskRow {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .split_whitespace()
            .map(str::parse::<DiskColor>)
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_colors(colors)
    }
}

impl<'a> IntoIterator for &'a DiskRow {
    type Item = DiskColor;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, DiskColor>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn row(s: &str) -> DiskRow {
        s.parse().unwrap()
    }

    #[test]
    fn test_construction_invariant() {
        for light_count in 1..=32 {
            let r = DiskRow::new(light_count);
            assert!(r.is_alternating(), "row {} not alternating", r);
            assert_eq!(r.total_count(), 2 * light_count);
            assert_eq!(r.light_count(), light_count);
            assert_eq!(r.dark_count(), light_count);
            assert_eq!(r.get(0), DiskColor::Dark);
            assert_eq!(r.get(1), DiskColor::Light);
        }
    }

    #[test]
    #[should_panic(expected = "called `DiskRow::new` with zero light count")]
    fn test_new_panics_on_zero_light_count() {
        let _ = DiskRow::new(0);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(DiskRow::try_new(0), Err(RowError::ZeroLightCount));
        assert_eq!(DiskRow::try_new(3), Ok(DiskRow::new(3)));
    }

    #[test]
    fn test_get_and_try_get() {
        let r = DiskRow::new(2);
        assert_eq!(r.get(2), DiskColor::Dark);
        assert_eq!(r.get(3), DiskColor::Light);
        assert_eq!(r.try_get(3), Some(DiskColor::Light));
        assert_eq!(r.try_get(4), None);
        assert_eq!(r.color_at(DiskIndex::new(1)), DiskColor::Light);
    }

    #[test]
    #[should_panic(expected = "called `DiskRow::get` with index out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let r = DiskRow::new(2);
        let _ = r.get(4);
    }

    #[test]
    fn test_swap_exchanges_neighbors() {
        let mut r = DiskRow::new(2);
        r.swap(1);
        assert_eq!(r, row("D D L L"));
        r.swap(0);
        assert_eq!(r, row("D D L L"));
        r.swap(2);
        assert_eq!(r, row("D D L L"));
        r.swap(1);
        assert_eq!(r, row("D L D L"));
    }

    #[test]
    #[should_panic(expected = "called `DiskRow::swap` without a right neighbor")]
    fn test_swap_last_index_panics() {
        let mut r = DiskRow::new(2);
        r.swap(3);
    }

    #[test]
    #[should_panic(expected = "called `DiskRow::swap` with index out of bounds")]
    fn test_swap_out_of_bounds_panics() {
        let mut r = DiskRow::new(2);
        r.swap(10);
    }

    #[test]
    fn test_broken_alternation_is_detected() {
        let mut r = DiskRow::new(4);
        r.swap(3);
        assert!(!r.is_alternating());

        let mut r = DiskRow::new(1);
        r.swap(0);
        // "L D" still strictly alternates.
        assert!(r.is_alternating());

        assert!(!row("D D L L").is_alternating());
        assert!(!row("D L L D").is_alternating());
        assert!(row("L D L D").is_alternating());
    }

    #[test]
    fn test_is_sorted_definition() {
        assert!(row("D L").is_sorted());
        assert!(row("D D L L").is_sorted());
        assert!(row("D D D L L L").is_sorted());
        assert!(!row("L D").is_sorted());
        assert!(!row("D L D L").is_sorted());
        // Misplaced disk right at the midpoint.
        assert!(!row("D D L D L L").is_sorted());
        assert!(!row("D D D L L L L D").is_sorted());
    }

    #[test]
    fn test_single_misplaced_pair_is_not_sorted() {
        for light_count in 1..=8 {
            let sorted: Vec<DiskColor> = (0..light_count * 2)
                .map(|i| {
                    if i < light_count {
                        DiskColor::Dark
                    } else {
                        DiskColor::Light
                    }
                })
                .collect();
            let base = DiskRow::from_colors(sorted).unwrap();
            assert!(base.is_sorted());
            assert_eq!(base.misplaced_count(), 0);

            // Exchange any dark with any light disk.
            for d in 0..light_count {
                for l in light_count..light_count * 2 {
                    let mut colors = base.colors().to_vec();
                    colors.swap(d, l);
                    let broken = DiskRow::from_colors(colors).unwrap();
                    assert!(!broken.is_sorted(), "{} reported sorted", broken);
                    assert_eq!(broken.misplaced_count(), 1);
                }
            }
        }
    }

    #[test]
    fn test_is_sorted_matches_misplaced_count_on_random_rows() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let light_count = rng.random_range(1..=10);
            let mut r = DiskRow::new(light_count);
            let swaps = rng.random_range(0..50);
            for _ in 0..swaps {
                let i = rng.random_range(0..r.total_count() - 1);
                r.swap(i);
            }
            assert_eq!(r.total_count(), 2 * light_count);
            assert_eq!(r.is_sorted(), r.misplaced_count() == 0, "row {}", r);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(DiskRow::new(1).to_string(), "D L");
        assert_eq!(DiskRow::new(3).to_string(), "D L D L D L");
    }

    #[test]
    fn test_display_parse_reconstructs_equal_row() {
        for light_count in 1..=10 {
            let mut r = DiskRow::new(light_count);
            if light_count > 1 {
                r.swap(1);
            }
            let parsed: DiskRow = r.to_string().parse().unwrap();
            assert_eq!(parsed, r);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<DiskRow>(), Err(RowError::Empty));
        assert_eq!("   ".parse::<DiskRow>(), Err(RowError::Empty));
        assert_eq!("D L D".parse::<DiskRow>(), Err(RowError::OddLength(3)));
        assert_eq!(
            "D L X L".parse::<DiskRow>(),
            Err(RowError::UnknownColor("X".to_string()))
        );
        assert_eq!(
            "D D D L".parse::<DiskRow>(),
            Err(RowError::Unbalanced { dark: 3, light: 1 })
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(DiskRow::new(2), row("D L D L"));
        assert_ne!(DiskRow::new(2), row("D D L L"));
        assert_ne!(DiskRow::new(2), DiskRow::new(3));
    }

    #[test]
    fn test_iteration() {
        let r = DiskRow::new(2);
        let collected: Vec<DiskColor> = r.iter().collect();
        assert_eq!(collected, r.colors());
        assert_eq!((&r).into_iter().filter(|c| c.is_light()).count(), 2);
    }
}
