// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by the filter and decomposition predicates recording why a candidate failed.

use serde::ser::{Serialize, SerializeMap, Serializer};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

use crate::context::SearchContext;
use crate::decompose::Mismatch;
use crate::engine::{Predicate, PredicateResult};
use crate::filter::FilterRejection;

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    CandidatesChecked,
    PassedFilters,
    BeautifulFound,
}

const REJECTIONS_OFFSET: usize = Counters::COUNT;
const MISMATCHES_OFFSET: usize = REJECTIONS_OFFSET + FilterRejection::COUNT;
const COUNT: usize = MISMATCHES_OFFSET + Mismatch::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that increments the given counter each time it is reached.
    pub fn counting_predicate(counter: Counters) -> Box<dyn Predicate> {
        Box::new(CountingPredicate { counter })
    }

    /// Increment the specified counter by 1.
    fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn record_rejection(&mut self, rejection: FilterRejection) {
        self.stats[REJECTIONS_OFFSET + rejection as usize] += 1;
    }

    /// Number of candidates the filters rejected for `rejection`.
    pub fn rejections(&self, rejection: FilterRejection) -> u64 {
        self.stats[REJECTIONS_OFFSET + rejection as usize]
    }

    pub fn record_mismatch(&mut self, mismatch: Mismatch) {
        self.stats[MISMATCHES_OFFSET + mismatch as usize] += 1;
    }

    /// Number of filtered candidates whose decomposition failed with `mismatch`.
    pub fn mismatches(&self, mismatch: Mismatch) -> u64 {
        self.stats[MISMATCHES_OFFSET + mismatch as usize]
    }

    /// Add the counts of another search, e.g. one chunk of a parallel search.
    pub fn merge(&mut self, other: &Statistics) {
        for (total, count) in self.stats.iter_mut().zip(other.stats.iter()) {
            *total += count;
        }
    }
}

/// Serialized as a map from counter name to count.
impl Serialize for Statistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COUNT))?;
        for counter in Counters::iter() {
            let name: &'static str = counter.into();
            map.serialize_entry(name, &self.get(counter))?;
        }
        for rejection in FilterRejection::iter() {
            let name: &'static str = rejection.into();
            map.serialize_entry(name, &self.rejections(rejection))?;
        }
        for mismatch in Mismatch::iter() {
            let name: &'static str = mismatch.into();
            map.serialize_entry(name, &self.mismatches(mismatch))?;
        }
        map.end()
    }
}

#[derive(Debug)]
struct CountingPredicate {
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        ctx.statistics.increment_counter(self.counter);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_independent() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::PassedFilters);
        stats.record_rejection(FilterRejection::Semiprime);
        stats.record_rejection(FilterRejection::Semiprime);
        stats.record_mismatch(Mismatch::AfterMedianSum);

        assert_eq!(stats.get(Counters::PassedFilters), 1);
        assert_eq!(stats.get(Counters::CandidatesChecked), 0);
        assert_eq!(stats.rejections(FilterRejection::Semiprime), 2);
        assert_eq!(stats.rejections(FilterRejection::IndivisibleByIndex), 0);
        assert_eq!(stats.mismatches(Mismatch::AfterMedianSum), 1);
        assert_eq!(stats.mismatches(Mismatch::NotTriangular), 0);
    }

    #[test]
    fn test_merge() {
        let mut a = Statistics::new();
        a.increment_counter(Counters::BeautifulFound);
        a.record_mismatch(Mismatch::SectionDivisor);
        let mut b = Statistics::new();
        b.increment_counter(Counters::BeautifulFound);
        b.record_rejection(FilterRejection::IndivisibleByIndex);

        a.merge(&b);
        assert_eq!(a.get(Counters::BeautifulFound), 2);
        assert_eq!(a.mismatches(Mismatch::SectionDivisor), 1);
        assert_eq!(a.rejections(FilterRejection::IndivisibleByIndex), 1);
    }

    #[test]
    fn test_counting_predicate() {
        let mut ctx = SearchContext::new();
        let mut count = Statistics::counting_predicate(Counters::PassedFilters);

        assert_eq!(count.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(count.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.statistics.get(Counters::PassedFilters), 2);
        assert_eq!(ctx.statistics.get(Counters::BeautifulFound), 0);
    }
}
