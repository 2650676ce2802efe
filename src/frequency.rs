//! Symbol frequency counting.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::symbol::Symbol;

/// Occurrence counts for each distinct symbol of an input.
///
/// Every entry is positive. Iteration is in ascending symbol order, which
/// is also the order leaves receive their creation numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    counts: BTreeMap<S, u64>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count every symbol of `data`.
    pub fn from_symbols<I>(data: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut counts = BTreeMap::new();
        for s in data {
            *counts.entry(s).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Build from explicit `(symbol, count)` pairs.
    ///
    /// Repeated symbols have their counts summed.
    ///
    /// # Errors
    ///
    /// Returns `Error::ZeroFrequency` if any count is 0, and
    /// `Error::FrequencyOverflow` if the counts sum past `u64::MAX`.
    pub fn from_counts<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut counts = BTreeMap::new();
        let mut total: u64 = 0;
        for (s, n) in pairs {
            if n == 0 {
                return Err(Error::ZeroFrequency {
                    symbol: format!("{s:?}"),
                });
            }
            // Bounding the total also bounds every merged tree weight.
            total = total.checked_add(n).ok_or(Error::FrequencyOverflow)?;
            *counts.entry(s).or_insert(0) += n;
        }
        Ok(Self { counts })
    }

    /// Count for `symbol`, if it occurs.
    pub fn count(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no symbols were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the input length.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.counts.iter().map(|(s, &n)| (s, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_symbol() {
        let table = FrequencyTable::from_symbols("abracadabra".chars());
        assert_eq!(table.len(), 5);
        assert_eq!(table.count(&'a'), Some(5));
        assert_eq!(table.count(&'b'), Some(2));
        assert_eq!(table.count(&'r'), Some(2));
        assert_eq!(table.count(&'c'), Some(1));
        assert_eq!(table.count(&'d'), Some(1));
        assert_eq!(table.count(&'z'), None);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn test_iterates_in_symbol_order() {
        let table = FrequencyTable::from_symbols(b"dcba".iter().copied());
        let order: Vec<u8> = table.iter().map(|(&s, _)| s).collect();
        assert_eq!(order, b"abcd");
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::<u8>::from_symbols(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_from_counts_sums_duplicates() {
        let table = FrequencyTable::from_counts([('x', 2), ('y', 1), ('x', 3)]).unwrap();
        assert_eq!(table.count(&'x'), Some(5));
        assert_eq!(table.count(&'y'), Some(1));
    }

    #[test]
    fn test_from_counts_rejects_overflowing_total() {
        let err = FrequencyTable::from_counts([('a', u64::MAX), ('b', 1)]).unwrap_err();
        assert_eq!(err, Error::FrequencyOverflow);

        let err = FrequencyTable::from_counts([('a', u64::MAX), ('a', 1)]).unwrap_err();
        assert_eq!(err, Error::FrequencyOverflow);
    }

    #[test]
    fn test_from_counts_accepts_total_at_max() {
        let table = FrequencyTable::from_counts([('a', u64::MAX - 1), ('b', 1)]).unwrap();
        assert_eq!(table.total(), u64::MAX);

        let tree = crate::tree::HuffmanTree::from_frequencies(&table).unwrap();
        assert_eq!(tree.weight(), u64::MAX);
    }

    #[test]
    fn test_from_counts_rejects_zero() {
        let err = FrequencyTable::from_counts([('x', 2), ('y', 0)]).unwrap_err();
        assert_eq!(
            err,
            Error::ZeroFrequency {
                symbol: "'y'".to_string()
            }
        );
    }
}
