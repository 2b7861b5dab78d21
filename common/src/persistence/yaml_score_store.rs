use std::collections::BTreeMap;

use crate::config::{ConfigSerializer, ContentProvider, FileContentProvider, YamlConfigSerializer};
use crate::log;
use super::ScoreStore;

/// Counters kept as a flat YAML map, rewritten in full on every change.
/// Read and write failures are logged and otherwise ignored.
pub struct YamlScoreStore<P: ContentProvider = FileContentProvider> {
    provider: P,
    serializer: YamlConfigSerializer,
    values: BTreeMap<String, u32>,
}

impl YamlScoreStore<FileContentProvider> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentProvider::new(file_path))
    }
}

impl<P: ContentProvider> YamlScoreStore<P> {
    pub fn new(provider: P) -> Self {
        let serializer = YamlConfigSerializer::new();
        let values = match provider.get_content() {
            Ok(Some(content)) => {
                ConfigSerializer::<BTreeMap<String, u32>>::deserialize(&serializer, &content)
                    .unwrap_or_else(|e| {
                        log!("Ignoring unreadable stats: {}", e);
                        BTreeMap::new()
                    })
            }
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                log!("Ignoring unreadable stats: {}", e);
                BTreeMap::new()
            }
        };

        Self {
            provider,
            serializer,
            values,
        }
    }

    fn flush(&self) {
        let result = self
            .serializer
            .serialize(&self.values)
            .and_then(|content| self.provider.set_content(&content));
        if let Err(e) = result {
            log!("Failed to persist stats: {}", e);
        }
    }
}

impl<P: ContentProvider> ScoreStore for YamlScoreStore<P> {
    fn get(&self, key: &str) -> Option<u32> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_string(), value);
        self.flush();
    }

    fn set_many(&mut self, entries: &[(&str, u32)]) {
        for (key, value) in entries {
            self.values.insert(key.to_string(), *value);
        }
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::config::MemoryContentProvider;

    #[derive(Default)]
    struct ReadOnlyContentProvider {
        attempts: Cell<usize>,
    }

    impl ContentProvider for ReadOnlyContentProvider {
        fn get_content(&self) -> Result<Option<String>, String> {
            Ok(Some("highScore: 4\n".to_string()))
        }

        fn set_content(&self, _content: &str) -> Result<(), String> {
            self.attempts.set(self.attempts.get() + 1);
            Err("read-only".to_string())
        }
    }

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_stats_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_reads_existing_counters() {
        let provider = MemoryContentProvider::with_content("highScore: 12\nbotWins: 3\n");
        let store = YamlScoreStore::new(provider);
        assert_eq!(store.get("highScore"), Some(12));
        assert_eq!(store.get("botWins"), Some(3));
        assert_eq!(store.get("playerWins"), None);
    }

    #[test]
    fn test_garbage_content_reads_as_empty() {
        let provider = MemoryContentProvider::with_content("highScore: [not, a, number]");
        let store = YamlScoreStore::new(provider);
        assert_eq!(store.get("highScore"), None);
    }

    #[test]
    fn test_failed_writes_keep_values_in_memory() {
        let mut store = YamlScoreStore::new(ReadOnlyContentProvider::default());
        assert_eq!(store.get("highScore"), Some(4));

        store.set("highScore", 9);
        store.set_many(&[("playerWins", 2), ("botLosses", 2)]);

        assert_eq!(store.provider.attempts.get(), 2);
        assert_eq!(store.get("highScore"), Some(9));
        assert_eq!(store.get("playerWins"), Some(2));
        assert_eq!(store.get("botLosses"), Some(2));
    }

    #[test]
    fn test_counters_survive_reopen() {
        let file_path = get_temp_file_path();
        {
            let mut store = YamlScoreStore::from_yaml_file(&file_path);
            store.set("highScore", 7);
            store.set_many(&[("playerWins", 2), ("playerLosses", 1)]);
        }

        let store = YamlScoreStore::from_yaml_file(&file_path);
        assert_eq!(store.get("highScore"), Some(7));
        assert_eq!(store.get("playerWins"), Some(2));
        assert_eq!(store.get("playerLosses"), Some(1));

        std::fs::remove_file(&file_path).unwrap();
    }
}
