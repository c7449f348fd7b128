use crate::bucket::BucketStore;
use crate::hasher;
use crate::hasher::BucketId;
use std::borrow::Borrow;
use std::fmt::Display;

/// A hash table that routes keys to buckets by the character sum of their
/// `Display` form and resolves collisions by key equality inside each bucket.
///
/// Lookups, insertions and removals cost O(n) in the size of the addressed
/// bucket. There is no resizing; colliding keys simply share a bucket.
///
/// Keys must be `Eq`: a key that is not equal to itself (such as a float NaN)
/// could never be overwritten, found or removed.
#[derive(Debug, Clone)]
pub struct HashTable<K, V> {
    store: BucketStore<K, V>,
    len: usize,
}

impl<K: Display + Eq, V> HashTable<K, V> {
    /// Create an empty table with no buckets.
    pub fn new() -> Self {
        Self {
            store: BucketStore::new(),
            len: 0,
        }
    }

    /// The bucket id `key` is routed to.
    pub fn hash<Q: Display + ?Sized>(&self, key: &Q) -> BucketId {
        hasher::hash(key)
    }

    /// Associate `value` with `key`, overwriting any value already stored for an equal key.
    pub fn add(&mut self, key: K, value: V) {
        let id = hasher::hash(&key);
        if self.store.insert(id, key, value).is_none() {
            self.len += 1;
        }
    }

    /// Remove the entry for `key`. Does nothing if the key is not present.
    ///
    /// `key` is hashed in its borrowed form, see [`HashTable::lookup`].
    pub fn remove<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Display + Eq + ?Sized,
    {
        if self.store.remove(hasher::hash(key), key).is_some() {
            self.len -= 1;
        }
    }

    /// Get the value stored for `key`. If the key does not exist, return None.
    ///
    /// The bucket is chosen by hashing `key` itself, not the owned `K` it
    /// borrows from. The borrowed form must therefore render the same `Display`
    /// output as the owned key (true for `str`/`String` and the integer types);
    /// otherwise the lookup goes to the wrong bucket and returns None.
    pub fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Display + Eq + ?Sized,
    {
        self.store.get(hasher::hash(key), key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Display + Eq + ?Sized,
    {
        self.lookup(key).is_some()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of non-empty buckets. Always at most `len()`.
    pub fn bucket_count(&self) -> usize {
        self.store.bucket_count()
    }
}

impl<K: Display + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
