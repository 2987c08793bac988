//! Hash map construction with ahash
//!
//! The tag registry indexes schemas by prefix; these helpers keep the hasher
//! choice in one place.

use ahash::RandomState;
use std::collections::HashMap;

/// Create an empty `HashMap` using ahash
///
/// # Example
///
/// ```rust
/// use ass_script::utils::hashers::create_hash_map;
///
/// let mut map = create_hash_map::<&str, i32>();
/// map.insert("fs", 20);
/// assert_eq!(map.get("fs"), Some(&20));
/// ```
#[must_use]
pub fn create_hash_map<K, V>() -> HashMap<K, V, RandomState> {
    HashMap::with_hasher(RandomState::new())
}

/// Create a `HashMap` using ahash with room for `capacity` entries
#[must_use]
pub fn create_hash_map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V, RandomState> {
    HashMap::with_capacity_and_hasher(capacity, RandomState::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_reserved() {
        let map = create_hash_map_with_capacity::<&str, usize>(64);
        assert!(map.capacity() >= 64);
        assert!(map.is_empty());
    }
}
