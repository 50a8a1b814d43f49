// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decomposition of a triangle into column sections.
//!
//! Two copies of the triangle with side `n` make an `n x (n+1)` rectangle of
//! dots. Reading the median length `T / n` as a number of columns, each column
//! holds `n` dots. The columns are cut into sections:
//!
//! ```text
//! first section:    median / 2 columns   (median / 3 when T is odd)
//! then, repeatedly: half of the columns still left
//! last section:     the single column left over
//! ```
//!
//! The triangle is beautiful when the dot counts of these sections reproduce
//! the divisors of `T` above the median in order, and the divisors below the
//! median sum to `n - 1`.
//!
//! For `T = 28, n = 7`, median 4:
//!
//! ```text
//! section   columns   dots   divisor
//!    1         2       14      14
//!    2         1        7       7
//!    3         1        7     (unit)
//! divisors below the median: 2 + 4 + 1 = 7 = n
//! ```

use serde::Serialize;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};
use thiserror::Error;

use crate::arith::DivisorPairing;

/// One block of columns of the decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Section {
    pub columns: u64,
    pub dots: u64,
}

/// The check a decomposition failed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Error, EnumCountMacro, EnumIter, IntoStaticStr,
)]
#[repr(u8)]
pub enum Mismatch {
    #[error("n(n+1) is not 2T")]
    NotTriangular,

    #[error("median length not divisible by the first divisor")]
    MedianNotDivisible,

    #[error("no divisors besides T and 1")]
    NoInnerDivisors,

    #[error("first section does not match the largest proper divisor")]
    FirstSection,

    #[error("more sections than divisors above the median")]
    DivisorsExhausted,

    #[error("section does not match its divisor")]
    SectionDivisor,

    #[error("columns left over after halving")]
    ColumnsLeftOver,

    #[error("unit section does not hold n dots")]
    UnitSection,

    #[error("divisors below the median do not sum to n - 1")]
    AfterMedianSum,
}

/// Sections of the triangle `t` with side `n`, if it is beautiful.
///
/// Same as [`decompose`], discarding the reason for a mismatch.
///
/// # Example
///
/// ```
/// use beautiful_triangles::decompose::{analyze, Section};
///
/// let sections = analyze(28, 7, 4).unwrap();
/// assert_eq!(sections[0], Section { columns: 2, dots: 14 });
/// assert_eq!(sections.len(), 3);
///
/// assert!(analyze(66, 11, 6).is_none());
/// ```
pub fn analyze(t: u64, n: u64, median_length: u64) -> Option<Vec<Section>> {
    decompose(t, n, median_length).ok()
}

/// Decompose the triangle `t` with side `n` and the given median length.
///
/// Returns the sections in order (first section, halving sections, unit
/// section), or the first check that failed.
pub fn decompose(t: u64, n: u64, median_length: u64) -> Result<Vec<Section>, Mismatch> {
    let rows = n.checked_add(1).ok_or(Mismatch::NotTriangular)?;
    let rectangle = rows.checked_mul(n);
    if rectangle.is_none() || rectangle != t.checked_mul(2) {
        return Err(Mismatch::NotTriangular);
    }

    let first_divisor = if t % 2 == 0 { 2 } else { 3 };
    if median_length % first_divisor != 0 {
        return Err(Mismatch::MedianNotDivisible);
    }
    let columns_in_first_section = median_length / first_divisor;
    let dots_in_first_section = n.checked_mul(columns_in_first_section);

    let pairing = DivisorPairing::new(t);
    let before_median = pairing.before_median();
    let after_median = pairing.after_median();

    let Some(&largest) = before_median.first() else {
        return Err(Mismatch::NoInnerDivisors);
    };
    if dots_in_first_section != Some(largest) {
        return Err(Mismatch::FirstSection);
    }

    let mut sections = vec![Section {
        columns: columns_in_first_section,
        dots: largest,
    }];

    let mut remaining_columns = median_length - columns_in_first_section;
    let mut index = 1;
    while remaining_columns > 1 {
        let columns = remaining_columns / 2;
        if columns == 0 {
            break;
        }
        let &expected = before_median
            .get(index)
            .ok_or(Mismatch::DivisorsExhausted)?;
        if n.checked_mul(columns) != Some(expected) {
            return Err(Mismatch::SectionDivisor);
        }
        sections.push(Section {
            columns,
            dots: expected,
        });
        remaining_columns -= columns;
        index += 1;
    }

    if remaining_columns != 1 {
        return Err(Mismatch::ColumnsLeftOver);
    }
    let last_dots = (rows - 1) * remaining_columns;
    if last_dots != n {
        return Err(Mismatch::UnitSection);
    }
    sections.push(Section {
        columns: remaining_columns,
        dots: last_dots,
    });

    let after_sum: u128 = after_median.iter().map(|&d| d as u128).sum::<u128>() + 1;
    if after_sum != n as u128 {
        return Err(Mismatch::AfterMedianSum);
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(columns: u64, dots: u64) -> Section {
        Section { columns, dots }
    }

    #[test]
    fn test_six() {
        assert_eq!(analyze(6, 3, 2), Some(vec![section(1, 3), section(1, 3)]));
    }

    #[test]
    fn test_twenty_eight() {
        assert_eq!(
            analyze(28, 7, 4),
            Some(vec![section(2, 14), section(1, 7), section(1, 7)])
        );
    }

    #[test]
    fn test_eight_thousand_one_hundred_twenty_eight() {
        let sections = analyze(8128, 127, 64).unwrap();
        let columns: Vec<u64> = sections.iter().map(|s| s.columns).collect();
        assert_eq!(columns, vec![32, 16, 8, 4, 2, 1, 1]);
        let dots: Vec<u64> = sections.iter().map(|s| s.dots).collect();
        assert_eq!(dots, vec![4064, 2032, 1016, 508, 254, 127, 127]);
    }

    #[test]
    fn test_not_triangular() {
        assert_eq!(decompose(27, 7, 4), Err(Mismatch::NotTriangular));
        assert_eq!(decompose(u64::MAX, u64::MAX, 1), Err(Mismatch::NotTriangular));
    }

    #[test]
    fn test_median_not_divisible() {
        // 45 is odd, so the first section takes a third of 5 columns
        assert_eq!(decompose(45, 9, 5), Err(Mismatch::MedianNotDivisible));
    }

    #[test]
    fn test_no_inner_divisors() {
        assert_eq!(decompose(3, 2, 3), Err(Mismatch::NoInnerDivisors));
    }

    #[test]
    fn test_first_section_mismatch() {
        // Median 8 gives a first section of 28 dots, but 14 is the largest proper divisor
        assert_eq!(decompose(28, 7, 8), Err(Mismatch::FirstSection));
        assert_eq!(analyze(28, 7, 8), None);
    }

    #[test]
    fn test_section_divisor_mismatch() {
        // Sections 33, 11 against divisors 33, 22, 11
        assert_eq!(decompose(66, 11, 6), Err(Mismatch::SectionDivisor));
        assert_eq!(decompose(120, 15, 8), Err(Mismatch::SectionDivisor));
    }

    #[test]
    fn test_divisors_exhausted() {
        // 190 = 2 * 5 * 19: sections 95, 38, 19 use up the divisors with 2 columns left
        assert_eq!(decompose(190, 19, 10), Err(Mismatch::DivisorsExhausted));
    }

    #[test]
    fn test_zero() {
        assert_eq!(decompose(0, 0, 0), Err(Mismatch::NoInnerDivisors));
    }

    #[test]
    fn test_sections_cover_median() {
        for (t, n, median) in [(6u64, 3u64, 2u64), (28, 7, 4), (496, 31, 16), (8128, 127, 64)] {
            let sections = analyze(t, n, median).unwrap();
            assert_eq!(sections.iter().map(|s| s.columns).sum::<u64>(), median);
            assert_eq!(sections.iter().map(|s| s.dots).sum::<u64>(), n * median);
        }
    }
}
