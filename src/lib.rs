//! zurts - Turn-Based Arena Mini-Game
//!
//! A player shares a bounded, walled arena with a population of colored
//! "zurts". Each round the player moves or stands, then the whole
//! population moves in response to a color+direction throw; zurts that
//! follow the throw and hit a wall lose health and eventually die. The
//! player wins by outlasting every zurt and loses on contact with one.

pub mod advisor;
pub mod arena;
pub mod core;
pub mod game;
pub mod render;
