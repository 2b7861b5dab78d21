use std::collections::BTreeMap;

/// Key/value counters that outlive an engine instance.
pub trait ScoreStore {
    fn get(&self, key: &str) -> Option<u32>;

    fn set(&mut self, key: &str, value: u32);

    /// Writes several counters as one batch.
    fn set_many(&mut self, entries: &[(&str, u32)]) {
        for (key, value) in entries {
            self.set(key, *value);
        }
    }
}

impl<T: ScoreStore + ?Sized> ScoreStore for Box<T> {
    fn get(&self, key: &str) -> Option<u32> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: u32) {
        (**self).set(key, value)
    }

    fn set_many(&mut self, entries: &[(&str, u32)]) {
        (**self).set_many(entries)
    }
}

/// Stand-in for absent persistence: nothing is read, writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScoreStore;

impl ScoreStore for NullScoreStore {
    fn get(&self, _key: &str) -> Option<u32> {
        None
    }

    fn set(&mut self, _key: &str, _value: u32) {}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    values: BTreeMap<String, u32>,
    writes: usize,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(entries: &[(&str, u32)]) -> Self {
        Self {
            values: entries.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            writes: 0,
        }
    }

    /// Number of `set` or `set_many` calls seen so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
    }

    fn set_many(&mut self, entries: &[(&str, u32)]) {
        for (key, value) in entries {
            self.values.insert(key.to_string(), *value);
        }
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_store_reads_nothing() {
        let mut store = NullScoreStore;
        store.set("highScore", 9);
        assert_eq!(store.get("highScore"), None);
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemoryScoreStore::new();
        store.set("highScore", 4);
        store.set_many(&[("botWins", 1), ("botLosses", 2)]);
        assert_eq!(store.get("highScore"), Some(4));
        assert_eq!(store.get("botLosses"), Some(2));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_boxed_store_forwards() {
        let mut store: Box<dyn ScoreStore> = Box::new(MemoryScoreStore::new());
        store.set("playerWins", 3);
        assert_eq!(store.get("playerWins"), Some(3));
    }
}
