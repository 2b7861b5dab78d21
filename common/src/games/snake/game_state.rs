use crate::games::SessionRng;
use super::settings::EngineSettings;
use super::entity::Snake;
use super::types::{BoundaryPolicy, DeathReason, Direction, Point, SnakeId};

/// Board contents: snakes (indexed by `SnakeId::index`), food in claim order,
/// and the grid they live on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeGameState {
    pub snakes: Vec<Snake>,
    pub food: Vec<Point>,
    pub grid_size: usize,
    pub boundary_policy: BoundaryPolicy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoodEaten {
    pub snake: SnakeId,
    pub at: Point,
    pub score: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// In the order the items were claimed.
    pub eaten: Vec<FoodEaten>,
    pub deaths: Vec<(SnakeId, DeathReason)>,
    pub spawned: Vec<Point>,
    pub game_over: bool,
}

impl SnakeGameState {
    pub fn new(settings: &EngineSettings, rng: &mut SessionRng) -> Self {
        let snakes = settings.snake_ids().map(|id| settings.spawn_snake(id)).collect();
        let food = (0..settings.food_count)
            .map(|_| rng.random_point(settings.grid_size))
            .collect();

        Self {
            snakes,
            food,
            grid_size: settings.grid_size,
            boundary_policy: settings.boundary_policy,
        }
    }

    pub fn from_parts(
        snakes: Vec<Snake>,
        food: Vec<Point>,
        grid_size: usize,
        boundary_policy: BoundaryPolicy,
    ) -> Self {
        Self {
            snakes,
            food,
            grid_size,
            boundary_policy,
        }
    }

    pub fn snake(&self, id: SnakeId) -> Option<&Snake> {
        self.snakes.get(id.index())
    }

    pub fn snake_mut(&mut self, id: SnakeId) -> Option<&mut Snake> {
        self.snakes.get_mut(id.index())
    }

    pub fn snake_ids(&self) -> impl Iterator<Item = SnakeId> + '_ {
        (0..self.snakes.len()).filter_map(SnakeId::from_index)
    }

    /// Returns whether the intent was accepted; unknown ids are ignored.
    pub fn set_direction(&mut self, id: SnakeId, direction: Direction) -> bool {
        self.snake_mut(id)
            .is_some_and(|snake| snake.request_direction(direction))
    }

    pub fn any_dead(&self) -> bool {
        self.snakes.iter().any(|snake| !snake.is_alive())
    }

    /// Computes the board one tick later. Every check runs against the bodies
    /// as they stood before this tick, so both snakes move simultaneously.
    pub fn advance(&self, rng: &mut SessionRng) -> (SnakeGameState, TickReport) {
        let mut next = self.clone();
        let count = next.snakes.len();
        let live: Vec<usize> = (0..count).filter(|&i| self.snakes[i].is_alive()).collect();

        let mut candidates: Vec<Option<Point>> = vec![None; count];
        let mut deaths: Vec<Option<DeathReason>> = vec![None; count];

        for &i in &live {
            let snake = &mut next.snakes[i];
            snake.apply_pending_direction();
            match self.boundary_policy.next_head(snake.head(), snake.direction, self.grid_size) {
                Some(head) => candidates[i] = Some(head),
                None => deaths[i] = Some(DeathReason::WallCollision),
            }
        }

        for &i in &live {
            let Some(head) = candidates[i] else { continue };
            let hits_other = (0..count)
                .filter(|&j| j != i)
                .any(|j| self.snakes[j].occupies(head));
            if hits_other {
                deaths[i] = Some(DeathReason::OtherSnakeCollision);
            }
        }

        for (a, &i) in live.iter().enumerate() {
            for &j in &live[a + 1..] {
                if candidates[i].is_some() && candidates[i] == candidates[j] {
                    deaths[i] = Some(DeathReason::HeadToHeadCollision);
                    deaths[j] = Some(DeathReason::HeadToHeadCollision);
                }
            }
        }

        for &i in &live {
            if let Some(head) = candidates[i]
                && deaths[i].is_none()
                && self.snakes[i].occupies(head)
            {
                deaths[i] = Some(DeathReason::SelfCollision);
            }
        }

        let mut report = TickReport::default();
        let mut ate = vec![false; count];
        let mut remaining_food = Vec::with_capacity(self.food.len());

        for &food in &self.food {
            let claimant = live
                .iter()
                .copied()
                .find(|&i| !ate[i] && candidates[i] == Some(food));

            let Some(i) = claimant else {
                remaining_food.push(food);
                continue;
            };

            ate[i] = true;
            let snake = &mut next.snakes[i];
            snake.score = snake.score.saturating_add(1);
            if let Some(id) = SnakeId::from_index(i) {
                report.eaten.push(FoodEaten {
                    snake: id,
                    at: food,
                    score: snake.score,
                });
            }
        }

        for &i in &live {
            if let Some(head) = candidates[i] {
                next.snakes[i].advance_to(head, ate[i]);
            }
            if let Some(reason) = deaths[i] {
                next.snakes[i].death_reason = Some(reason);
                if let Some(id) = SnakeId::from_index(i) {
                    report.deaths.push((id, reason));
                }
            }
        }

        for _ in 0..report.eaten.len() {
            let food = rng.random_point(self.grid_size);
            report.spawned.push(food);
            remaining_food.push(food);
        }
        next.food = remaining_food;

        report.game_over = next.any_dead();
        (next, report)
    }
}
