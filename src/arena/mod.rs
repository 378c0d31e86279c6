//! The arena: grid, player, and zurt population
//!
//! The arena is the sole mutable state container. It owns the grid, the
//! optional player, the zurt collection, and the RNG driving zurt movement;
//! all movement, collision, and death resolution happens here.

pub mod grid;
pub mod player;
pub mod zurt;

use std::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::types::{Direction, Position, ZurtColor, MAX_ZURTS};
use self::grid::{CellStatus, Grid};
use self::player::{Player, PlayerOutcome};
use self::zurt::Zurt;

/// Outcome of a population turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    ZurtsDestroyed,
    NoZurtsDestroyed,
}

impl TurnOutcome {
    pub fn any_destroyed(self) -> bool {
        self == TurnOutcome::ZurtsDestroyed
    }
}

impl fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnOutcome::ZurtsDestroyed => write!(f, "Some zurts have been destroyed."),
            TurnOutcome::NoZurtsDestroyed => write!(f, "No zurts were destroyed."),
        }
    }
}

/// The bounded arena and everything occupying it
#[derive(Debug)]
pub struct Arena {
    grid: Grid,
    player: Option<Player>,
    zurts: Vec<Zurt>,
    rng: ChaCha8Rng,
}

impl Arena {
    /// Create an empty arena seeded from entropy.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is outside [1, 20].
    pub fn new(rows: u32, cols: u32) -> Self {
        Self::with_seed(rows, cols, rand::random())
    }

    /// Create an empty arena with a fixed RNG seed, for deterministic play.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is outside [1, 20].
    pub fn with_seed(rows: u32, cols: u32, seed: u64) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            player: None,
            zurts: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    // === QUERY SURFACE ===

    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    pub fn cols(&self) -> u32 {
        self.grid.cols()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        self.grid.in_bounds(pos)
    }

    /// # Panics
    ///
    /// Panics when `pos` is out of bounds.
    pub fn status_at(&self, pos: Position) -> CellStatus {
        self.grid.status_at(pos)
    }

    /// # Panics
    ///
    /// Panics when `pos` is out of bounds.
    pub fn set_status(&mut self, pos: Position, status: CellStatus) {
        self.grid.set_status(pos, status);
    }

    /// The step destination from `pos`, or `None` when blocked by a wall or
    /// the arena edge.
    pub fn try_step(&self, pos: Position, dir: Direction) -> Option<Position> {
        self.grid.try_step(pos, dir)
    }

    /// Number of zurts currently on `pos`. Zurts stack freely, so this can
    /// exceed one.
    pub fn zurt_count_at(&self, pos: Position) -> usize {
        self.zurts.iter().filter(|z| z.position() == pos).count()
    }

    pub fn zurt_count(&self) -> usize {
        self.zurts.len()
    }

    pub fn zurts(&self) -> &[Zurt] {
        &self.zurts
    }

    pub fn player_position(&self) -> Option<Position> {
        self.player.as_ref().map(Player::position)
    }

    pub fn player_is_dead(&self) -> bool {
        self.player.as_ref().is_some_and(Player::is_dead)
    }

    // === INSERTION ===

    /// Add a zurt on `pos`. Returns false when the position is out of
    /// bounds, the cell is a wall or holds the player, or the arena already
    /// holds the maximum of 100 zurts. Stacking on another zurt is allowed.
    pub fn add_zurt(&mut self, pos: Position, color: ZurtColor) -> bool {
        if !self.grid.in_bounds(pos) || self.grid.status_at(pos) != CellStatus::Empty {
            return false;
        }
        if self.player_position() == Some(pos) {
            return false;
        }
        if self.zurts.len() == MAX_ZURTS {
            return false;
        }
        self.zurts.push(Zurt::new(pos, color));
        true
    }

    /// Add the player on `pos`. Returns false when a player already exists,
    /// the position is out of bounds, or the cell is a wall or holds a zurt.
    pub fn add_player(&mut self, pos: Position) -> bool {
        if self.player.is_some()
            || !self.grid.in_bounds(pos)
            || self.grid.status_at(pos) != CellStatus::Empty
            || self.zurt_count_at(pos) > 0
        {
            return false;
        }
        self.player = Some(Player::new(pos));
        true
    }

    // === TURN SURFACE ===

    /// The player stands for a turn.
    ///
    /// # Panics
    ///
    /// Panics when the arena has no player.
    pub fn player_stand(&mut self) -> PlayerOutcome {
        if self.player.is_none() {
            panic!("player_stand called on an arena with no player");
        }
        PlayerOutcome::Stood
    }

    /// Move the player one step. A blocked step leaves the player in place;
    /// stepping onto a zurt-occupied cell kills the player.
    ///
    /// # Panics
    ///
    /// Panics when the arena has no player.
    pub fn move_player(&mut self, dir: Direction) -> PlayerOutcome {
        let Some(pos) = self.player_position() else {
            panic!("move_player called on an arena with no player");
        };
        let Some(dest) = self.grid.try_step(pos, dir) else {
            return PlayerOutcome::Blocked;
        };
        let fatal = self.zurt_count_at(dest) > 0;
        if let Some(player) = self.player.as_mut() {
            player.set_position(dest);
            if fatal {
                player.mark_dead();
            }
        }
        if fatal {
            tracing::debug!(%dest, "player walked into a zurt");
            PlayerOutcome::WalkedIntoZurt
        } else {
            PlayerOutcome::Moved(dir)
        }
    }

    /// Run one population turn for the given color throw.
    ///
    /// A single coin flip decides whether every zurt of the thrown color
    /// follows the direction this turn; it is deliberately not a per-zurt
    /// flip. Zurts that follow and fail to move lose one health; everyone
    /// else moves randomly at no risk. A zurt landing on the player's cell
    /// kills the player.
    ///
    /// The collection is traversed back to front so dead zurts can be
    /// swap-removed in O(1): the element swapped into the vacated slot has
    /// already been visited, so every survivor is visited exactly once.
    pub fn move_zurts(&mut self, color: ZurtColor, dir: Direction) -> TurnOutcome {
        let will_follow = self.rng.gen_bool(0.5);
        let count_before = self.zurts.len();

        for k in (0..self.zurts.len()).rev() {
            if will_follow && self.zurts[k].color() == color {
                self.zurts[k].forced_move(&self.grid, dir);
            } else {
                self.zurts[k].random_move(&self.grid, &mut self.rng);
            }

            let pos = self.zurts[k].position();
            if let Some(player) = self.player.as_mut() {
                if player.position() == pos {
                    player.mark_dead();
                }
            }

            if self.zurts[k].is_dead() {
                tracing::debug!(?color, %pos, "zurt destroyed");
                self.zurts.swap_remove(k);
            }
        }

        if self.zurts.len() < count_before {
            TurnOutcome::ZurtsDestroyed
        } else {
            TurnOutcome::NoZurtsDestroyed
        }
    }
}
