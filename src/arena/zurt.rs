//! Zurt entities and their movement rules

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::arena::grid::Grid;
use crate::core::types::{Direction, Position, ZurtColor, ZurtId, ZURT_HEALTH};

/// A single zurt: a colored, health-bearing mobile entity
///
/// A zurt holds no reference to its arena; the grid and RNG it needs are
/// passed in per call, and all side effects stay within the zurt itself.
#[derive(Debug, Clone)]
pub struct Zurt {
    id: ZurtId,
    position: Position,
    color: ZurtColor,
    health: u32,
}

impl Zurt {
    pub(crate) fn new(position: Position, color: ZurtColor) -> Self {
        Self {
            id: ZurtId::new(),
            position,
            color,
            health: ZURT_HEALTH,
        }
    }

    pub fn id(&self) -> ZurtId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn color(&self) -> ZurtColor {
        self.color
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Attempt one step in a uniformly random direction. A blocked step
    /// leaves the zurt where it is; an unforced failure costs no health.
    pub(crate) fn random_move(&mut self, grid: &Grid, rng: &mut ChaCha8Rng) {
        if self.is_dead() {
            return;
        }
        let dir = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        if let Some(dest) = grid.try_step(self.position, dir) {
            self.position = dest;
        }
    }

    /// Attempt one step in the thrown direction. A blocked step costs one
    /// health. Other zurts on the destination cell are no obstacle; zurts
    /// stack freely.
    pub(crate) fn forced_move(&mut self, grid: &Grid, dir: Direction) {
        if self.is_dead() {
            return;
        }
        match grid.try_step(self.position, dir) {
            Some(dest) => self.position = dest,
            None => self.health -= 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::grid::CellStatus;
    use rand::SeedableRng;

    #[test]
    fn test_forced_move_into_wall_costs_health() {
        let mut grid = Grid::new(2, 2);
        grid.set_status(Position::new(1, 2), CellStatus::Wall);

        let mut zurt = Zurt::new(Position::new(1, 1), ZurtColor::Red);
        zurt.forced_move(&grid, Direction::East);

        assert_eq!(zurt.position(), Position::new(1, 1));
        assert_eq!(zurt.health(), ZURT_HEALTH - 1);
    }

    #[test]
    fn test_forced_move_into_open_cell_is_free() {
        let grid = Grid::new(2, 2);
        let mut zurt = Zurt::new(Position::new(1, 1), ZurtColor::Yellow);
        zurt.forced_move(&grid, Direction::South);

        assert_eq!(zurt.position(), Position::new(2, 1));
        assert_eq!(zurt.health(), ZURT_HEALTH);
    }

    #[test]
    fn test_random_move_failures_never_cost_health() {
        // Every direction is blocked on a 1x1 grid
        let grid = Grid::new(1, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut zurt = Zurt::new(Position::new(1, 1), ZurtColor::Blue);

        for _ in 0..100 {
            zurt.random_move(&grid, &mut rng);
        }

        assert_eq!(zurt.position(), Position::new(1, 1));
        assert_eq!(zurt.health(), ZURT_HEALTH);
    }

    #[test]
    fn test_three_failed_forced_moves_kill() {
        let grid = Grid::new(1, 1);
        let mut zurt = Zurt::new(Position::new(1, 1), ZurtColor::Red);

        for _ in 0..ZURT_HEALTH {
            assert!(!zurt.is_dead());
            zurt.forced_move(&grid, Direction::North);
        }
        assert!(zurt.is_dead());

        // Dead zurts no longer move or lose health
        zurt.forced_move(&grid, Direction::North);
        assert_eq!(zurt.health(), 0);
    }
}
