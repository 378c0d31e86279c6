//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum number of rows in an arena
pub const MAX_ROWS: u32 = 20;

/// Maximum number of columns in an arena
pub const MAX_COLS: u32 = 20;

/// Maximum number of zurts an arena can hold
pub const MAX_ZURTS: usize = 100;

/// Health every zurt starts with
pub const ZURT_HEALTH: u32 = 3;

/// Fraction of empty cells that receive a wall during setup
pub const WALL_DENSITY: f64 = 0.13;

/// Danger reported for a cell already holding a zurt.
/// Larger than any attainable neighbor sum.
pub const CERTAIN_DEATH: u32 = MAX_ZURTS as u32 + 1;

/// Unique identifier for zurts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZurtId(pub Uuid);

impl ZurtId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ZurtId {
    fn default() -> Self {
        Self::new()
    }
}

/// The four orthogonal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Scan order used wherever all four directions are tried
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Parse a single input character (case-insensitive)
    pub fn from_char(ch: char) -> Option<Direction> {
        match ch.to_ascii_lowercase() {
            'n' => Some(Direction::North),
            'e' => Some(Direction::East),
            's' => Some(Direction::South),
            'w' => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        write!(f, "{}", name)
    }
}

/// Zurt colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZurtColor {
    Red,
    Yellow,
    Blue,
}

impl ZurtColor {
    pub const ALL: [ZurtColor; 3] = [ZurtColor::Red, ZurtColor::Yellow, ZurtColor::Blue];

    /// Parse a color letter (case-insensitive)
    pub fn from_char(ch: char) -> Option<ZurtColor> {
        match ch.to_ascii_uppercase() {
            'R' => Some(ZurtColor::Red),
            'Y' => Some(ZurtColor::Yellow),
            'B' => Some(ZurtColor::Blue),
            _ => None,
        }
    }

    /// Display letter used on the grid
    pub fn as_char(self) -> char {
        match self {
            ZurtColor::Red => 'R',
            ZurtColor::Yellow => 'Y',
            ZurtColor::Blue => 'B',
        }
    }
}

/// 1-based (row, col) arena coordinate
///
/// Valid positions lie in [1, rows] x [1, cols] of the owning grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The adjacent position one step away, or `None` when the step would
    /// leave the 1-based coordinate space (row or column 0). Steps past the
    /// far edge are still returned; clipping against a concrete grid is the
    /// grid's job.
    pub fn neighbor(self, dir: Direction) -> Option<Position> {
        match dir {
            Direction::North => (self.row > 1).then(|| Position::new(self.row - 1, self.col)),
            Direction::East => Some(Position::new(self.row, self.col + 1)),
            Direction::South => Some(Position::new(self.row + 1, self.col)),
            Direction::West => (self.col > 1).then(|| Position::new(self.row, self.col - 1)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
