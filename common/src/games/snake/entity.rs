use std::collections::VecDeque;

use super::types::{DeathReason, Direction, Point};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub death_reason: Option<DeathReason>,
    pub score: u32,
}

impl Snake {
    /// `body` is head first and must not be empty.
    pub fn new(body: impl IntoIterator<Item = Point>, direction: Direction) -> Self {
        let body: VecDeque<Point> = body.into_iter().collect();
        assert!(!body.is_empty(), "Snake body should never be empty");

        Self {
            body,
            direction,
            pending_direction: None,
            death_reason: None,
            score: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.death_reason.is_none()
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// Records the intent for the next tick. Reversals against the direction the
    /// snake last moved in are ignored, so two quick turns within one tick cannot
    /// fold the head back onto the neck. Returns whether the intent was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !self.is_alive() || direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub(crate) fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    pub(crate) fn advance_to(&mut self, new_head: Point, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_moving_right() -> Snake {
        Snake::new([Point::new(8, 8), Point::new(7, 8)], Direction::Right)
    }

    #[test]
    fn test_reverse_request_is_ignored() {
        let mut snake = snake_moving_right();
        assert!(!snake.request_direction(Direction::Left));
        assert_eq!(snake.pending_direction, None);
        snake.apply_pending_direction();
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn test_double_turn_cannot_reverse() {
        let mut snake = snake_moving_right();
        assert!(snake.request_direction(Direction::Up));
        // Still moving right until the next tick, so Left is a reversal.
        assert!(!snake.request_direction(Direction::Left));
        snake.apply_pending_direction();
        assert_eq!(snake.direction, Direction::Up);
    }

    #[test]
    fn test_dead_snake_ignores_turns() {
        let mut snake = snake_moving_right();
        snake.death_reason = Some(DeathReason::WallCollision);
        assert!(!snake.request_direction(Direction::Up));
    }

    #[test]
    fn test_advance_to_keeps_or_grows_length() {
        let mut snake = snake_moving_right();
        snake.advance_to(Point::new(9, 8), false);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Point::new(9, 8));
        assert_eq!(snake.tail(), Point::new(8, 8));

        snake.advance_to(Point::new(10, 8), true);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), Point::new(8, 8));
    }
}
