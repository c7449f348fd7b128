use std::fmt;
use std::fmt::Write;

/// Identifier of the bucket a key is routed to.
pub type BucketId = u64;

/// Accumulates the character codes of everything written into it.
struct CharSum(u64);

impl Write for CharSum {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.0 = self.0.wrapping_add(u64::from(c));
        }
        Ok(())
    }
}

/// Hash a key by summing the character codes of its `Display` form.
///
/// The sum ignores character order, so any two keys whose rendered forms are
/// permutations of each other land in the same bucket. An empty rendering
/// hashes to 0.
///
/// A `Display` impl that returns an error mid-way leaves the hash at the sum
/// of whatever it wrote before failing. Debug builds assert on that error.
pub fn hash<K: fmt::Display + ?Sized>(key: &K) -> BucketId {
    let mut sum = CharSum(0);
    let result = write!(sum, "{}", key);
    debug_assert!(result.is_ok(), "Display impl of a hashed key failed");
    sum.0
}
