//! Run configuration for the bid loader and menu

use crate::DEFAULT_BUCKET_COUNT;
use std::path::{Path, PathBuf};

/// CSV file read when no path is given
pub const DEFAULT_CSV_PATH: &str = "eBid_Monthly_Sales.csv";

/// Bid id looked up when no key is given
pub const DEFAULT_BID_KEY: &str = "98223";

/// Column positions of the bid fields in a CSV row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Column holding the title
    pub title: usize,
    /// Column holding the id
    pub id: usize,
    /// Column holding the amount
    pub amount: usize,
    /// Column holding the fund
    pub fund: usize,
    /// Currency symbol stripped from the amount before parsing
    pub currency_symbol: char,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self { title: 0, id: 1, amount: 4, fund: 8, currency_symbol: '$' }
    }
}

impl ColumnLayout {
    /// Positions of the bid fields
    fn positions(&self) -> [usize; 4] {
        [self.title, self.id, self.amount, self.fund]
    }

    /// Number of columns a row needs to hold every field
    #[must_use]
    pub fn required_width(&self) -> usize {
        self.positions().into_iter().max().unwrap_or_default().saturating_add(1)
    }

    /// Lowest field position a row of `width` columns lacks, `None` if the row is wide enough
    #[must_use]
    pub fn first_missing_column(&self, width: usize) -> Option<usize> {
        if width >= self.required_width() {
            return None;
        }
        self.positions().into_iter().filter(|&column| column >= width).min()
    }
}

/// Settings of one interactive run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV file the load command reads
    pub csv_path: PathBuf,
    /// Id the find command uses until another one is entered
    pub bid_key: String,
    /// Number of buckets of the table
    pub bucket_count: usize,
    /// Where the bid fields live in a row
    pub columns: ColumnLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            bid_key: DEFAULT_BID_KEY.to_owned(),
            bucket_count: DEFAULT_BUCKET_COUNT,
            columns: ColumnLayout::default(),
        }
    }
}

impl Config {
    /// Builds a config from up to two positional arguments.
    ///
    /// No arguments keeps both defaults, one argument replaces the CSV path,
    /// two replace the path and the bid key.
    #[must_use]
    pub fn from_positionals(csv_path: Option<PathBuf>, bid_key: Option<String>) -> Self {
        let config = Self::default();
        match (csv_path, bid_key) {
            (Some(path), Some(key)) => config.csv_path(path).bid_key(key),
            (Some(path), None) => config.csv_path(path),
            (None, _) => config,
        }
    }

    /// Sets the CSV path.
    #[must_use]
    pub fn csv_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.csv_path = path.as_ref().to_path_buf();
        self
    }

    /// Sets the bid key used by the find command.
    #[must_use]
    pub fn bid_key(mut self, key: impl Into<String>) -> Self {
        self.bid_key = key.into();
        self
    }

    /// Sets the bucket count.
    ///
    /// The value is validated when the table is built.
    #[must_use]
    pub fn bucket_count(mut self, count: usize) -> Self {
        self.bucket_count = count;
        self
    }

    /// Sets the CSV column layout.
    #[must_use]
    pub fn columns(mut self, columns: ColumnLayout) -> Self {
        self.columns = columns;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positionals_none() {
        let config = Config::from_positionals(None, None);
        assert_eq!(config, Config::default());
        assert_eq!(config.csv_path, PathBuf::from("eBid_Monthly_Sales.csv"));
        assert_eq!(config.bid_key, "98223");
        assert_eq!(config.bucket_count, 179);
    }

    #[test]
    fn test_positionals_path_only() {
        let config = Config::from_positionals(Some("bids.csv".into()), None);
        assert_eq!(config.csv_path, PathBuf::from("bids.csv"));
        assert_eq!(config.bid_key, DEFAULT_BID_KEY);
    }

    #[test]
    fn test_positionals_path_and_key() {
        let config = Config::from_positionals(Some("bids.csv".into()), Some("1234".into()));
        assert_eq!(config.csv_path, PathBuf::from("bids.csv"));
        assert_eq!(config.bid_key, "1234");
    }

    #[test]
    fn test_required_width() {
        assert_eq!(ColumnLayout::default().required_width(), 9);
        let layout = ColumnLayout { title: 0, id: 1, amount: 2, fund: 3, currency_symbol: '€' };
        assert_eq!(layout.required_width(), 4);
    }

    #[test]
    fn test_first_missing_column() {
        let layout = ColumnLayout::default();
        assert_eq!(layout.first_missing_column(9), None);
        assert_eq!(layout.first_missing_column(12), None);
        assert_eq!(layout.first_missing_column(8), Some(8));
        assert_eq!(layout.first_missing_column(3), Some(4));
        assert_eq!(layout.first_missing_column(0), Some(0));
    }
}
