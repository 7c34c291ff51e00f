//! Annual contribution limits.
//!
//! This module holds the fixed year-to-amount table and the
//! [`ContributionTable`] type used to look amounts up.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::YearlyAmount;

/// Annual CELI contribution room, in whole dollars, by calendar year.
pub const ANNUAL_LIMITS: [(i32, u32); 17] = [
    (2009, 5000),
    (2010, 5000),
    (2011, 5000),
    (2012, 5000),
    (2013, 5500),
    (2014, 5500),
    (2015, 10000),
    (2016, 5500),
    (2017, 5500),
    (2018, 5500),
    (2019, 6000),
    (2020, 6000),
    (2021, 6000),
    (2022, 6000),
    (2023, 6500),
    (2024, 7000),
    (2025, 7000),
];

/// A read-only lookup from calendar year to annual contribution room.
///
/// Years missing from the table have no room; amounts are never carried
/// forward past the last known year.
///
/// # Example
///
/// ```
/// use celi_engine::calculation::ContributionTable;
/// use rust_decimal::Decimal;
///
/// let table = ContributionTable::standard();
/// assert_eq!(table.amount_for(2015), Some(Decimal::from(10000)));
/// assert_eq!(table.amount_for(2026), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionTable {
    amounts: BTreeMap<i32, Decimal>,
}

impl ContributionTable {
    /// Builds the table from [`ANNUAL_LIMITS`].
    pub fn standard() -> Self {
        Self::from_whole_amounts(ANNUAL_LIMITS)
    }

    /// Builds a table from `(year, whole dollars)` pairs.
    ///
    /// A repeated year keeps the last amount given.
    pub fn from_whole_amounts<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (i32, u32)>,
    {
        let amounts = entries
            .into_iter()
            .map(|(year, amount)| (year, Decimal::from(amount)))
            .collect();
        Self { amounts }
    }

    /// Returns the room for `year`, or `None` if the year is not in the table.
    pub fn amount_for(&self, year: i32) -> Option<Decimal> {
        self.amounts.get(&year).copied()
    }

    /// Returns the table entries for `start..=end` in ascending year order.
    ///
    /// An empty range (`start > end`) yields nothing.
    pub fn entries_between(&self, start: i32, end: i32) -> Vec<YearlyAmount> {
        if start > end {
            return Vec::new();
        }
        self.amounts
            .range(start..=end)
            .map(|(&year, &amount)| YearlyAmount { year, amount })
            .collect()
    }

    /// Returns every entry in ascending year order.
    pub fn entries(&self) -> Vec<YearlyAmount> {
        self.amounts
            .iter()
            .map(|(&year, &amount)| YearlyAmount { year, amount })
            .collect()
    }

    /// Returns the earliest year in the table.
    pub fn first_year(&self) -> Option<i32> {
        self.amounts.keys().next().copied()
    }

    /// Returns the latest year in the table.
    pub fn last_year(&self) -> Option<i32> {
        self.amounts.keys().next_back().copied()
    }

    /// Returns the number of years in the table.
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

impl Default for ContributionTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_matches_published_limits() {
        let table = ContributionTable::standard();
        let expected = [
            (2009, 5000),
            (2010, 5000),
            (2011, 5000),
            (2012, 5000),
            (2013, 5500),
            (2014, 5500),
            (2015, 10000),
            (2016, 5500),
            (2017, 5500),
            (2018, 5500),
            (2019, 6000),
            (2020, 6000),
            (2021, 6000),
            (2022, 6000),
            (2023, 6500),
            (2024, 7000),
            (2025, 7000),
        ];

        assert_eq!(table.len(), expected.len());
        for (year, amount) in expected {
            assert_eq!(table.amount_for(year), Some(Decimal::from(amount)), "year {}", year);
        }
    }

    #[test]
    fn test_standard_table_bounds() {
        let table = ContributionTable::standard();
        assert_eq!(table.first_year(), Some(2009));
        assert_eq!(table.last_year(), Some(2025));
    }

    #[test]
    fn test_years_outside_table_have_no_amount() {
        let table = ContributionTable::standard();
        assert_eq!(table.amount_for(2008), None);
        assert_eq!(table.amount_for(2026), None);
        assert_eq!(table.amount_for(2030), None);
    }

    #[test]
    fn test_entries_between_is_inclusive_and_ordered() {
        let table = ContributionTable::standard();
        let entries = table.entries_between(2014, 2016);

        let years: Vec<i32> = entries.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2014, 2015, 2016]);
        assert_eq!(entries[1].amount, Decimal::from(10000));
    }

    #[test]
    fn test_entries_between_skips_years_past_table() {
        let table = ContributionTable::standard();
        let entries = table.entries_between(2024, 2030);

        let years: Vec<i32> = entries.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2024, 2025]);
    }

    #[test]
    fn test_entries_between_empty_range() {
        let table = ContributionTable::standard();
        assert!(table.entries_between(2020, 2019).is_empty());
        assert!(table.entries_between(2026, 2030).is_empty());
    }

    #[test]
    fn test_sparse_table_lookup() {
        let table = ContributionTable::from_whole_amounts([(2009, 100), (2012, 300)]);
        let years: Vec<i32> = table.entries_between(2009, 2012).iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2009, 2012]);
        assert_eq!(table.amount_for(2010), None);
    }
}
