use crate::hasher::BucketId;
use std::borrow::Borrow;
use std::collections::HashMap;

/// Entries that share a bucket id, unique by key equality.
#[derive(Debug, Clone)]
pub(crate) struct Bucket<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: Eq, V> Bucket<K, V> {
    fn with_entry(key: K, value: V) -> Self {
        Self {
            entries: vec![(key, value)],
        }
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().position(|(k, _)| k.borrow() == key)
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// Insert or overwrite. Return the previous value for `key`, if any.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key)
            .map(|i| self.entries.swap_remove(i))
            .map(|(_, value)| value)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps bucket ids to their buckets. Buckets that become empty are dropped.
#[derive(Debug, Clone)]
pub(crate) struct BucketStore<K, V> {
    buckets: HashMap<BucketId, Bucket<K, V>>,
}

impl<K: Eq, V> BucketStore<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }

    pub(crate) fn get<Q>(&self, id: BucketId, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.buckets.get(&id).and_then(|bucket| bucket.get(key))
    }

    pub(crate) fn insert(&mut self, id: BucketId, key: K, value: V) -> Option<V> {
        match self.buckets.get_mut(&id) {
            Some(bucket) => bucket.insert(key, value),
            None => {
                self.buckets.insert(id, Bucket::with_entry(key, value));
                None
            }
        }
    }

    pub(crate) fn remove<Q>(&mut self, id: BucketId, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let bucket = self.buckets.get_mut(&id)?;
        let value = bucket.remove(key);
        if bucket.is_empty() {
            self.buckets.remove(&id);
        }
        value
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
