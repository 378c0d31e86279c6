//! The player entity

use std::fmt;

use crate::core::types::{Direction, Position};

/// Outcome of a player turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOutcome {
    /// The player chose to stand
    Stood,
    /// The player moved one step
    Moved(Direction),
    /// The move was blocked by a wall or the arena edge
    Blocked,
    /// The player stepped onto a zurt-occupied cell and died
    WalkedIntoZurt,
}

impl fmt::Display for PlayerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerOutcome::Stood => write!(f, "Player stands."),
            PlayerOutcome::Moved(dir) => write!(f, "Player moved {}.", dir),
            PlayerOutcome::Blocked => write!(f, "Player couldn't move; player stands."),
            PlayerOutcome::WalkedIntoZurt => write!(f, "Player walked into a zurt and died."),
        }
    }
}

/// The player: a position and a dead flag
///
/// Death is irreversible; there is no way to clear the flag.
#[derive(Debug, Clone)]
pub struct Player {
    position: Position,
    dead: bool,
}

impl Player {
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            dead: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn mark_dead(&mut self) {
        self.dead = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_descriptions() {
        assert_eq!(PlayerOutcome::Stood.to_string(), "Player stands.");
        assert_eq!(
            PlayerOutcome::Moved(Direction::North).to_string(),
            "Player moved north."
        );
        assert_eq!(
            PlayerOutcome::Blocked.to_string(),
            "Player couldn't move; player stands."
        );
        assert_eq!(
            PlayerOutcome::WalkedIntoZurt.to_string(),
            "Player walked into a zurt and died."
        );
    }

    #[test]
    fn test_death_is_permanent() {
        let mut player = Player::new(Position::new(1, 1));
        assert!(!player.is_dead());
        player.mark_dead();
        assert!(player.is_dead());
    }
}
