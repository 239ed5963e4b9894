//! Single-entry memoization.

/// Remembers the last `(key, value)` pair and only recomputes when the key
/// changes.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    last: Option<(K, V)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing it first on a miss.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        let hit = matches!(&self.last, Some((last, _)) if *last == key);
        if !hit {
            self.last = None;
        }
        let (_, value) = self.last.get_or_insert_with(|| {
            let value = compute(&key);
            (key, value)
        });
        value
    }

    /// Forget the cached pair.
    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recompute_only_on_key_change() {
        let mut memo = Memo::new();
        let mut calls = 0;

        for key in [1, 1, 2, 2, 1] {
            memo.get_or_compute(key, |key| {
                calls += 1;
                key * 10
            });
        }
        assert_eq!(calls, 3);
        assert_eq!(*memo.get_or_compute(1, |_| 0), 10);
    }
}
