//! Move-safety advisor for the player
//!
//! A greedy one-ply heuristic: the danger of a cell approximates the number
//! of zurts that could step onto it next turn. The advisor recommends the
//! first strictly safer direction, if any, and otherwise standing. It
//! reduces local risk only; it does not guarantee survival.

use crate::arena::Arena;
use crate::core::types::{Direction, Position, CERTAIN_DEATH};

/// Danger estimate for `pos`.
///
/// A cell already holding a zurt is certain death and reports a sentinel
/// larger than any attainable count. Otherwise the estimate is the zurt
/// count summed over the in-bounds orthogonal neighbors, each of which has
/// some chance of stepping onto `pos` next turn.
pub fn compute_danger(arena: &Arena, pos: Position) -> u32 {
    if arena.zurt_count_at(pos) > 0 {
        return CERTAIN_DEATH;
    }
    Direction::ALL
        .iter()
        .filter_map(|&dir| pos.neighbor(dir))
        .filter(|&n| arena.in_bounds(n))
        .map(|n| arena.zurt_count_at(n) as u32)
        .sum()
}

/// Recommend a move for a player standing at `pos`, or `None` to stand.
///
/// When standing is already safe (danger 0) the recommendation is to
/// stand. Otherwise each legal step is scored in N, E, S, W order and the
/// first encountered minimum wins; it is only recommended when strictly
/// safer than standing.
pub fn recommend_move(arena: &Arena, pos: Position) -> Option<Direction> {
    let stand_danger = compute_danger(arena, pos);
    if stand_danger == 0 {
        return None;
    }

    let mut best: Option<(Direction, u32)> = None;
    for dir in Direction::ALL {
        let Some(dest) = arena.try_step(pos, dir) else {
            continue;
        };
        let danger = compute_danger(arena, dest);
        if best.map_or(danger < stand_danger, |(_, b)| danger < b) {
            best = Some((dir, danger));
        }
    }
    best.map(|(dir, _)| dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ZurtColor;

    #[test]
    fn test_occupied_cell_is_certain_death() {
        let mut arena = Arena::with_seed(3, 3, 1);
        arena.add_zurt(Position::new(2, 2), ZurtColor::Red);

        assert_eq!(compute_danger(&arena, Position::new(2, 2)), CERTAIN_DEATH);
        assert!(compute_danger(&arena, Position::new(2, 2)) > 100);
    }

    #[test]
    fn test_danger_sums_stacked_neighbors() {
        let mut arena = Arena::with_seed(3, 3, 1);
        arena.add_zurt(Position::new(1, 2), ZurtColor::Red);
        arena.add_zurt(Position::new(1, 2), ZurtColor::Yellow);
        arena.add_zurt(Position::new(1, 2), ZurtColor::Blue);
        arena.add_zurt(Position::new(2, 1), ZurtColor::Red);

        assert_eq!(compute_danger(&arena, Position::new(2, 2)), 4);
        // Corner only counts in-bounds neighbors
        assert_eq!(compute_danger(&arena, Position::new(1, 1)), 2);
    }

    #[test]
    fn test_safe_cell_recommends_standing() {
        let arena = Arena::with_seed(3, 3, 1);
        assert_eq!(recommend_move(&arena, Position::new(2, 2)), None);
    }

    #[test]
    fn test_first_minimum_wins() {
        // Zurt west of the player: danger at (2,2) is 1. North and east
        // both reach danger 0, but north is scanned first.
        let mut arena = Arena::with_seed(3, 3, 1);
        arena.add_zurt(Position::new(2, 1), ZurtColor::Red);

        assert_eq!(
            recommend_move(&arena, Position::new(2, 2)),
            Some(Direction::North)
        );
    }

    #[test]
    fn test_never_recommends_occupied_cell() {
        let mut arena = Arena::with_seed(3, 3, 1);
        arena.add_zurt(Position::new(2, 1), ZurtColor::Red);

        let rec = recommend_move(&arena, Position::new(2, 2));
        assert_ne!(rec, Some(Direction::West));
    }

    #[test]
    fn test_walls_exclude_directions_from_the_scan() {
        use crate::arena::grid::CellStatus;

        // North is walled off, so the scan starts at east.
        let mut arena = Arena::with_seed(3, 3, 1);
        arena.set_status(Position::new(1, 2), CellStatus::Wall);
        arena.add_zurt(Position::new(2, 1), ZurtColor::Red);

        assert_eq!(
            recommend_move(&arena, Position::new(2, 2)),
            Some(Direction::East)
        );
    }

    #[test]
    fn test_stands_when_no_move_improves() {
        // Surrounded on all four sides: every legal step lands next to or on
        // a zurt and never improves on standing.
        let mut arena = Arena::with_seed(3, 3, 1);
        arena.add_zurt(Position::new(1, 2), ZurtColor::Red);
        arena.add_zurt(Position::new(2, 1), ZurtColor::Red);
        arena.add_zurt(Position::new(2, 3), ZurtColor::Red);
        arena.add_zurt(Position::new(3, 2), ZurtColor::Red);

        assert_eq!(recommend_move(&arena, Position::new(2, 2)), None);
    }
}
