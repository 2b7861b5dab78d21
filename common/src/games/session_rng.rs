use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::snake::Point;

/// Seeded source of randomness for one engine instance, so food placement is
/// reproducible from the seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Uniformly random cell of a `grid_size` x `grid_size` grid.
    pub fn random_point(&mut self, grid_size: usize) -> Point {
        let x = self.random_range(0..grid_size);
        let y = self.random_range(0..grid_size);
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_points() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        for _ in 0..20 {
            assert_eq!(a.random_point(20), b.random_point(20));
        }
    }

    #[test]
    fn test_random_point_in_grid() {
        let mut rng = SessionRng::new(42);
        for _ in 0..500 {
            let p = rng.random_point(5);
            assert!(p.x < 5 && p.y < 5);
        }
    }
}
