//! Utility functions and traits for `ChainedHashTable`

use crate::{Bid, ChainedHashTable, error::Result};

/// Extension trait for bid tables that provides additional utility methods
pub trait TableExtensions {
    /// Returns the stored ids in iteration order
    fn ids(&self) -> Vec<String>;

    /// Returns clones of the stored bids in iteration order
    fn bids(&self) -> Vec<Bid>;

    /// Returns true if the table contains the given id
    fn contains_id(&self, id: &str) -> bool;

    /// Returns the length of every chain, indexed by bucket
    fn chain_lengths(&self) -> Vec<usize>;
}

impl TableExtensions for ChainedHashTable {
    fn ids(&self) -> Vec<String> {
        self.iter().map(|bid| bid.id.clone()).collect()
    }

    fn bids(&self) -> Vec<Bid> {
        self.iter().cloned().collect()
    }

    fn contains_id(&self, id: &str) -> bool {
        self.contains(id)
    }

    fn chain_lengths(&self) -> Vec<usize> {
        (0..self.capacity()).map(|index| self.chain(index).count()).collect()
    }
}

/// Creates a `ChainedHashTable` with `bucket_count` buckets from an iterator of bids
///
/// # Errors
///
/// Fails if `bucket_count` is rejected by [`ChainedHashTable::with_capacity`].
pub fn from_bids<I>(bucket_count: usize, iter: I) -> Result<ChainedHashTable>
where
    I: IntoIterator<Item = Bid>,
{
    let mut table = ChainedHashTable::with_capacity(bucket_count)?;
    table.extend(iter);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(id: &str) -> Bid {
        Bid::new(id, "", "", 0.0)
    }

    #[test]
    fn test_from_bids() {
        let table = from_bids(4, ["1", "5", "2", "1"].map(bid)).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.ids(), vec!["1".to_string(), "5".to_string(), "2".to_string()]);
        assert!(from_bids(0, Vec::<Bid>::new()).is_err());
    }

    #[test]
    fn test_bids_and_contains_id() {
        let table = from_bids(3, ["7", "8"].map(bid)).unwrap();

        assert_eq!(table.bids(), vec![bid("7"), bid("8")]);
        assert!(table.contains_id("7"));
        assert!(!table.contains_id("9"));
    }

    #[test]
    fn test_chain_lengths() {
        let table = from_bids(3, ["0", "3", "6", "2"].map(bid)).unwrap();

        let lengths = table.chain_lengths();
        assert_eq!(lengths, vec![3, 0, 1]);
        assert_eq!(lengths.iter().sum::<usize>(), table.len());
    }
}
