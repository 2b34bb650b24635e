use crate::{
    Bid,
    bid::numeric_key,
    error::{Error, Result},
};
use std::{fmt, iter::FusedIterator, mem};

/// Bucket count used when the caller does not pick one
pub const DEFAULT_BUCKET_COUNT: usize = 179;

/// Largest bucket count accepted by [`ChainedHashTable::with_capacity`]
pub const MAX_BUCKET_COUNT: usize = 1 << 24;

/// A link in a collision chain
#[derive(Debug)]
struct Node {
    /// The stored bid
    bid: Bid,
    /// The rest of the chain, owned by this node
    next: Option<Box<Self>>,
}

impl Node {
    /// Creates a node at the end of a chain
    fn new(bid: Bid) -> Self {
        Self { bid, next: None }
    }
}

/// One slot of the bucket array; the head node is stored inline
#[derive(Debug, Default)]
enum Bucket {
    /// Holds no bid
    #[default]
    Empty,
    /// Holds the head of a chain
    Occupied(Node),
}

impl Bucket {
    /// Iterates the bids of this bucket in insertion order
    fn chain(&self) -> Chain<'_> {
        match self {
            Self::Empty => Chain { node: None },
            Self::Occupied(head) => Chain { node: Some(head) },
        }
    }
}

/// A fixed-size hash table with separate chaining, indexing bids by id.
///
/// The bucket count is chosen once at construction and never changes. Each
/// bucket holds the head of a singly linked chain inline; colliding bids are
/// appended to the tail, so a chain always reflects insertion order.
///
/// Inserting an id that is already present is a no-op: the stored bid is kept
/// and the new one is dropped.
///
/// Note: this table is not thread-safe and has no resizing policy.
pub struct ChainedHashTable {
    /// The bucket array, `capacity` slots long
    buckets: Box<[Bucket]>,
    /// Number of stored bids across all chains
    len: usize,
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChainedHashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl Extend<Bid> for ChainedHashTable {
    fn extend<T: IntoIterator<Item = Bid>>(&mut self, iter: T) {
        for bid in iter {
            self.insert(bid);
        }
    }
}

impl ChainedHashTable {
    /// Creates a table with [`DEFAULT_BUCKET_COUNT`] empty buckets
    #[must_use]
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Creates a table with `bucket_count` empty buckets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `bucket_count` is zero or
    /// larger than [`MAX_BUCKET_COUNT`].
    pub fn with_capacity(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 || bucket_count > MAX_BUCKET_COUNT {
            return Err(Error::InvalidConfiguration { bucket_count });
        }
        Ok(Self::with_buckets(bucket_count))
    }

    /// Allocates the bucket array; callers validate the count
    fn with_buckets(bucket_count: usize) -> Self {
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Bucket::default);
        Self { buckets: buckets.into_boxed_slice(), len: 0 }
    }

    /// Maps a numeric key to a bucket index in `[0, capacity)`
    #[must_use]
    pub fn hash(&self, numeric_key: i64) -> usize {
        let capacity = i64::try_from(self.buckets.len()).unwrap_or(i64::MAX);
        numeric_key
            .checked_rem_euclid(capacity)
            .and_then(|index| usize::try_from(index).ok())
            .unwrap_or(0)
    }

    /// Returns the bucket an id hashes to
    #[must_use]
    pub fn bucket_index(&self, id: &str) -> usize {
        self.hash(numeric_key(id))
    }

    /// Inserts a bid at the tail of its bucket's chain.
    ///
    /// Returns `false` without touching the table if a bid with the same id is
    /// already stored.
    pub fn insert(&mut self, bid: Bid) -> bool {
        let index = self.bucket_index(&bid.id);
        let Some(bucket) = self.buckets.get_mut(index) else {
            return false;
        };

        match bucket {
            Bucket::Empty => {
                *bucket = Bucket::Occupied(Node::new(bid));
            }
            Bucket::Occupied(head) => {
                if head.bid.id == bid.id {
                    return false;
                }

                let mut link = &mut head.next;
                while let Some(node) = link {
                    if node.bid.id == bid.id {
                        return false;
                    }
                    link = &mut node.next;
                }
                *link = Some(Box::new(Node::new(bid)));
            }
        }

        self.len = self.len.saturating_add(1);
        true
    }

    /// Finds the bid stored under `id`
    #[must_use]
    pub fn search(&self, id: &str) -> Option<&Bid> {
        self.chain(self.bucket_index(id)).find(|bid| bid.id == id)
    }

    /// Returns true if a bid with this id is stored
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.search(id).is_some()
    }

    /// Removes the bid stored under `id` and returns it.
    ///
    /// Removing the head of a chain promotes the second node to head, so the
    /// rest of the chain stays reachable. Removing any other node splices it
    /// out without reordering its neighbours.
    pub fn remove(&mut self, id: &str) -> Option<Bid> {
        let index = self.bucket_index(id);
        let bucket = self.buckets.get_mut(index)?;
        let Bucket::Occupied(head) = bucket else {
            return None;
        };

        let removed = if head.bid.id == id {
            let promoted = head.next.take().map_or(Bucket::Empty, |next| Bucket::Occupied(*next));
            match mem::replace(bucket, promoted) {
                Bucket::Occupied(node) => node.bid,
                Bucket::Empty => return None,
            }
        } else {
            let mut link = &mut head.next;
            while link.as_ref().is_some_and(|node| node.bid.id != id) {
                link = &mut link.as_mut()?.next;
            }
            let Node { bid, next } = *link.take()?;
            *link = next;
            bid
        };

        self.len = self.len.saturating_sub(1);
        Some(removed)
    }

    /// Iterates every bid in bucket order, then chain order within a bucket
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter { buckets: self.buckets.iter(), chain: Chain { node: None } }
    }

    /// Iterates the occupied buckets as `(bucket index, chain)` pairs
    pub fn chains(&self) -> impl Iterator<Item = (usize, Chain<'_>)> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| matches!(bucket, Bucket::Occupied(_)))
            .map(|(index, bucket)| (index, bucket.chain()))
    }

    /// Iterates the chain of one bucket; out-of-range indices yield nothing
    #[must_use]
    pub fn chain(&self, bucket_index: usize) -> Chain<'_> {
        self.buckets.get(bucket_index).map_or(Chain { node: None }, Bucket::chain)
    }

    /// Returns the number of buckets, fixed at construction
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of stored bids
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no bid is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Drop for ChainedHashTable {
    fn drop(&mut self) {
        // Unlink overflow nodes one by one so long chains don't recurse.
        for bucket in &mut *self.buckets {
            if let Bucket::Occupied(head) = bucket {
                let mut link = head.next.take();
                while let Some(mut node) = link {
                    link = node.next.take();
                }
            }
        }
    }
}

/// Iterator over the bids of one bucket, head first
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    /// Next node to yield
    node: Option<&'a Node>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.as_deref();
        Some(&node.bid)
    }
}

impl FusedIterator for Chain<'_> {}

/// Iterator over every bid of a [`ChainedHashTable`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// Buckets not visited yet
    buckets: std::slice::Iter<'a, Bucket>,
    /// Remaining part of the bucket being visited
    chain: Chain<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Bid;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(bid) = self.chain.next() {
                return Some(bid);
            }
            self.chain = self.buckets.next()?.chain();
        }
    }
}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ChainedHashTable {
    type Item = &'a Bid;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
