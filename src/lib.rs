//! # Bid Table
//!
//! A fixed-size hash table with separate chaining that indexes bid records by id.
//!
//! This crate provides:
//!
//! - `ChainedHashTable`: the table itself, sized once and never resized
//! - `loader`: a bulk loader reading bids from the monthly sales CSV export
//! - `menu`: an interactive menu to load, list, find and remove bids
//!
//! Ids are numeric text. The table hashes an id by parsing its leading digits
//! (non-numeric text counts as `0`) and taking the result modulo the bucket
//! count. Colliding bids are chained in insertion order.
//!
//! ## Basic Usage
//!
//! ```rust
//! use bidtable::{Bid, ChainedHashTable};
//!
//! // Five buckets: "0", "5" and "10" all land in bucket 0
//! let mut table = ChainedHashTable::with_capacity(5)?;
//!
//! table.insert(Bid::new("0", "Desk", "General Fund", 45.0));
//! table.insert(Bid::new("5", "Chair", "General Fund", 12.5));
//! table.insert(Bid::new("10", "Lamp", "Enterprise", 7.0));
//!
//! // Inserting an existing id keeps the stored bid
//! assert!(!table.insert(Bid::new("5", "Sofa", "Enterprise", 99.0)));
//! assert_eq!(table.search("5").map(|bid| bid.title.as_str()), Some("Chair"));
//!
//! // Removing the head of a chain keeps the rest reachable
//! table.remove("0");
//! assert!(table.search("10").is_some());
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.capacity(), 5);
//! # Ok::<(), bidtable::Error>(())
//! ```
//!
//! ## Loading Bids
//!
//! ```rust
//! use bidtable::{ChainedHashTable, config::ColumnLayout, loader::load_bids_from_reader};
//!
//! let data = "Title,ArticleID,Department,Close Date,Winning Bid,Inventory ID,Vehicle ID,Receipt Number,Fund\n\
//!             Hoover Steam Vac,98223,General Services,11/16/2016,$27.00,A,,B,Enterprise\n";
//!
//! let mut table = ChainedHashTable::new();
//! let report = load_bids_from_reader(data.as_bytes(), &ColumnLayout::default(), &mut table);
//!
//! assert_eq!(report.rows_read, 1);
//! assert_eq!(table.search("98223").map(|bid| bid.amount), Some(27.0));
//! ```

/// The bid record and the parsers used to index it
mod bid;
/// The separate chaining hash table
mod chained_table;
/// Run configuration
pub mod config;
/// Error type of the crate
mod error;
/// CSV bulk loader
pub mod loader;
/// Interactive menu
pub mod menu;
/// Utility functions and traits for the table
mod utils;

pub use bid::{Bid, numeric_key, parse_amount};
pub use chained_table::{
    Chain, ChainedHashTable, DEFAULT_BUCKET_COUNT, Iter, MAX_BUCKET_COUNT,
};
pub use error::{Error, Result};
pub use utils::{TableExtensions, from_bids};
