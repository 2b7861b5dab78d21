use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::defaults::{DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL_MS};
use super::entity::Snake;
use super::types::{BoundaryPolicy, Direction, Point, SnakeId};

/// Construction-time parameters of an engine instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub grid_size: usize,
    pub snake_count: usize,
    pub boundary_policy: BoundaryPolicy,
    pub food_count: usize,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::duel()
    }
}

impl EngineSettings {
    /// Player against bot on a wrapping grid with two food items.
    pub fn duel() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            snake_count: 2,
            boundary_policy: BoundaryPolicy::Wrap,
            food_count: 2,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }

    /// Single player on a walled grid with one food item.
    pub fn solo() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            snake_count: 1,
            boundary_policy: BoundaryPolicy::Wall,
            food_count: 1,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn snake_ids(&self) -> impl Iterator<Item = SnakeId> + use<> {
        (0..self.snake_count).filter_map(SnakeId::from_index)
    }

    /// Fresh snake for `id`. On the default 20x20 grid the player starts at
    /// (8,8) heading right and the bot at (12,12) heading left; other sizes
    /// scale those positions.
    pub fn spawn_snake(&self, id: SnakeId) -> Snake {
        let n = self.grid_size;
        match id {
            SnakeId::Player => {
                let head = Point::new(2 * n / 5, 2 * n / 5);
                let neck = Point::new(head.x.saturating_sub(1), head.y);
                Snake::new([head, neck], Direction::Right)
            }
            SnakeId::Bot => {
                let head = Point::new(3 * n / 5, 3 * n / 5);
                let neck = Point::new((head.x + 1).min(n - 1), head.y);
                Snake::new([head, neck], Direction::Left)
            }
        }
    }
}

impl Validate for EngineSettings {
    fn validate(&self) -> Result<(), String> {
        if !(5..=200).contains(&self.grid_size) {
            return Err("Grid size must be between 5 and 200".to_string());
        }
        if !(1..=2).contains(&self.snake_count) {
            return Err("Snake count must be 1 or 2".to_string());
        }
        if !(1..=50).contains(&self.food_count) {
            return Err("Food count must be between 1 and 50".to_string());
        }
        if !(20..=5000).contains(&self.tick_interval_ms) {
            return Err("Tick interval must be between 20ms and 5000ms".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigManager, ConfigSerializer, FileContentProvider, MemoryContentProvider,
        YamlConfigSerializer,
    };

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_engine_settings_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_is_duel_and_valid() {
        let settings = EngineSettings::default();
        assert_eq!(settings, EngineSettings::duel());
        assert!(settings.validate().is_ok());
        assert!(EngineSettings::solo().validate().is_ok());
    }

    #[test]
    fn test_spawn_matches_classic_layout() {
        let settings = EngineSettings::duel();
        let player = settings.spawn_snake(SnakeId::Player);
        let bot = settings.spawn_snake(SnakeId::Bot);
        assert_eq!(player.body, [Point::new(8, 8), Point::new(7, 8)]);
        assert_eq!(player.direction, Direction::Right);
        assert_eq!(bot.body, [Point::new(12, 12), Point::new(13, 12)]);
        assert_eq!(bot.direction, Direction::Left);
    }

    #[test]
    fn test_spawn_stays_in_smallest_grid() {
        let settings = EngineSettings { grid_size: 5, ..EngineSettings::duel() };
        for id in settings.snake_ids() {
            let snake = settings.spawn_snake(id);
            assert!(snake.body.iter().all(|p| p.x < 5 && p.y < 5));
            assert_eq!(snake.len(), 2);
        }
    }

    #[test]
    fn test_snake_ids_follow_count() {
        let solo: Vec<SnakeId> = EngineSettings::solo().snake_ids().collect();
        assert_eq!(solo, vec![SnakeId::Player]);
        let duel: Vec<SnakeId> = EngineSettings::duel().snake_ids().collect();
        assert_eq!(duel, vec![SnakeId::Player, SnakeId::Bot]);
    }

    #[test]
    fn test_validation_rejects_out_of_range() {
        let bad = [
            EngineSettings { grid_size: 2, ..EngineSettings::duel() },
            EngineSettings { snake_count: 3, ..EngineSettings::duel() },
            EngineSettings { food_count: 0, ..EngineSettings::duel() },
            EngineSettings { tick_interval_ms: 1, ..EngineSettings::duel() },
        ];
        for settings in bad {
            assert!(settings.validate().is_err(), "{:?}", settings);
        }
    }

    #[test]
    fn test_yaml_parses_policy_names() {
        let yaml = "grid_size: 30\nsnake_count: 1\nboundary_policy: wall\nfood_count: 3\n";
        let settings: EngineSettings = YamlConfigSerializer::new().deserialize(yaml).unwrap();
        assert_eq!(settings.boundary_policy, BoundaryPolicy::Wall);
        assert_eq!(settings.grid_size, 30);
        assert_eq!(settings.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
    }

    #[test]
    fn test_missing_config_yields_default() {
        let manager: ConfigManager<_, EngineSettings> =
            ConfigManager::new(MemoryContentProvider::new(), YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), EngineSettings::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let yaml = "grid_size: 1\nsnake_count: 2\nboundary_policy: wrap\nfood_count: 2\n";
        let provider = MemoryContentProvider::with_content(yaml);
        let manager: ConfigManager<_, EngineSettings> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("Grid size"), "{}", err);
    }

    #[test]
    fn test_settings_survive_file_round_trip() {
        let file_path = get_temp_file_path();
        let settings = EngineSettings::solo();

        let writer: ConfigManager<_, EngineSettings> = ConfigManager::from_yaml_file(&file_path);
        writer.set_config(&settings).unwrap();

        let provider = FileContentProvider::new(file_path.clone());
        let reader: ConfigManager<_, EngineSettings> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert_eq!(reader.get_config().unwrap(), settings);

        std::fs::remove_file(&file_path).unwrap();
    }
}
