//! Optimized collection types for Astrelis.
//!
//! This module provides:
//! - Re-exports of optimized hash collections using AHash
//! - Insertion-ordered maps and sets with the same hasher

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

/// Insertion-ordered map hashed with AHash.
///
/// Use when iteration order must be deterministic (e.g. hit testing in
/// registration order).
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, RandomState>;

/// Insertion-ordered set hashed with AHash.
pub type IndexSet<T> = indexmap::IndexSet<T, RandomState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_ahash() {
        let mut map = HashMap::new();
        map.insert("key", "value");
        assert_eq!(map.get("key"), Some(&"value"));
    }

    #[test]
    fn test_hashset_ahash() {
        let mut set = HashSet::new();
        set.insert(42);
        assert!(set.contains(&42));
    }

    #[test]
    fn test_index_map_keeps_insertion_order() {
        let mut map = IndexMap::default();
        map.insert("c", 3);
        map.insert("a", 1);
        map.insert("b", 2);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);

        map.shift_remove("a");
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["c", "b"]);
    }
}
