use super::*;

/// Endless-mode generation: every cell gets a uniformly random palette color and there is no
/// move budget.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLevelGenerator {
    seed: u64,
}

impl RandomLevelGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LevelGenerator for RandomLevelGenerator {
    fn generate(self, size: Coord, adjacency: AdjacencyMode) -> LevelDescriptor {
        use rand::prelude::*;
        use rand::rngs::SmallRng;

        if size == 0 {
            log::warn!("Requested an empty board, generated anyway");
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let colors: Vec<Color> = (0..mult(size, size))
            .map(|_| rng.random_range(0..PALETTE_SIZE))
            .collect();

        log::debug!(
            "Generated {}x{} {} level from seed {}",
            size,
            size,
            adjacency,
            self.seed
        );
        LevelDescriptor::endless(size, colors, adjacency)
    }
}
