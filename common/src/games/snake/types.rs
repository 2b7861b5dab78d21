use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// `Up` moves towards row 0.
    pub fn delta(&self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SnakeId {
    Player,
    Bot,
}

impl SnakeId {
    pub fn index(&self) -> usize {
        match self {
            SnakeId::Player => 0,
            SnakeId::Bot => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<SnakeId> {
        match index {
            0 => Some(SnakeId::Player),
            1 => Some(SnakeId::Bot),
            _ => None,
        }
    }
}

impl std::fmt::Display for SnakeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnakeId::Player => write!(f, "player"),
            SnakeId::Bot => write!(f, "bot"),
        }
    }
}

/// What happens when a head steps off the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Toroidal grid: leaving one edge re-enters at the opposite edge.
    Wrap,
    /// Leaving the grid is fatal.
    Wall,
}

impl BoundaryPolicy {
    /// Next head cell, or `None` when the move leaves a walled grid.
    pub fn next_head(&self, head: Point, direction: Direction, grid_size: usize) -> Option<Point> {
        let (dx, dy) = direction.delta();
        let x = head.x as i64 + dx;
        let y = head.y as i64 + dy;
        let size = grid_size as i64;

        match self {
            BoundaryPolicy::Wrap => Some(Point::new(
                ((x + size) % size) as usize,
                ((y + size) % size) as usize,
            )),
            BoundaryPolicy::Wall => {
                if (0..size).contains(&x) && (0..size).contains(&y) {
                    Some(Point::new(x as usize, y as usize))
                } else {
                    None
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    OtherSnakeCollision,
    HeadToHeadCollision,
}

impl std::fmt::Display for DeathReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            DeathReason::WallCollision => "hit a wall",
            DeathReason::SelfCollision => "ran into itself",
            DeathReason::OtherSnakeCollision => "ran into the other snake",
            DeathReason::HeadToHeadCollision => "collided head-to-head",
        };
        write!(f, "{}", text)
    }
}
