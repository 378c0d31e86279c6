//! Game driver: randomized setup and the interactive turn loop
//!
//! Thin glue over the arena surface. Setup seeds walls, the player, and the
//! zurt population; `play` alternates player and population turns against
//! stdin until the player dies or the last zurt is destroyed.

use std::io::{self, BufRead, Write};

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::advisor;
use crate::arena::grid::CellStatus;
use crate::arena::Arena;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::{Direction, Position, ZurtColor, MAX_ZURTS};
use crate::render;

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every zurt was destroyed
    Won,
    /// The player died
    Lost,
}

/// One interactive game over a freshly generated arena
pub struct Game {
    arena: Arena,
}

impl Game {
    /// Build a game from the config: walls on the configured fraction of
    /// empty cells, then the player and the zurts on random empty cells.
    ///
    /// # Panics
    ///
    /// Setup parameters are a caller contract: an invalid zurt count, a
    /// wall density outside [0, 1], or an arena too small to hold the
    /// player and every zurt panics. Use [`GameConfig::validate`] first for
    /// a recoverable check.
    pub fn new(config: &GameConfig) -> Self {
        if config.zurts > MAX_ZURTS {
            panic!("invalid number of zurts: {}", config.zurts);
        }
        let empty = (config.rows * config.cols) as i64 - config.zurts as i64 - 1;
        if empty < 0 {
            panic!(
                "a {} by {} arena is too small to hold a player and {} zurts",
                config.rows, config.cols, config.zurts
            );
        }
        assert!(
            (0.0..=1.0).contains(&config.wall_density),
            "wall density {} must be within [0, 1]",
            config.wall_density
        );

        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::info!(
            seed,
            rows = config.rows,
            cols = config.cols,
            zurts = config.zurts,
            "setting up arena"
        );

        let mut arena = Arena::with_seed(config.rows, config.cols, seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

        let mut walls = (config.wall_density * empty as f64) as i64;
        while walls > 0 {
            let pos = random_pos(&mut rng, config.rows, config.cols);
            if arena.status_at(pos) == CellStatus::Wall {
                continue;
            }
            arena.set_status(pos, CellStatus::Wall);
            walls -= 1;
        }

        loop {
            if arena.add_player(random_pos(&mut rng, config.rows, config.cols)) {
                break;
            }
        }

        let mut remaining = config.zurts;
        while remaining > 0 {
            let pos = random_pos(&mut rng, config.rows, config.cols);
            let color = ZurtColor::ALL[rng.gen_range(0..ZurtColor::ALL.len())];
            if arena.add_zurt(pos, color) {
                remaining -= 1;
            }
        }

        Self { arena }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Run the interactive loop until the player dies or no zurts remain.
    pub fn play(&mut self) -> Result<GameOutcome> {
        let stdin = io::stdin();
        let mut input = stdin.lock();

        render::draw(&self.arena, "")?;
        while !self.arena.player_is_dead() && self.arena.zurt_count() > 0 {
            let msg = self.take_player_turn(&mut input)?;
            render::draw(&self.arena, &msg)?;
            if self.arena.player_is_dead() {
                break;
            }
            let msg = self.take_zurts_turn(&mut input)?;
            render::draw(&self.arena, &msg)?;
        }

        Ok(if self.arena.player_is_dead() {
            GameOutcome::Lost
        } else {
            GameOutcome::Won
        })
    }

    /// Prompt until a valid player command arrives, then resolve it. An
    /// empty line asks the advisor; `x` stands; `n/e/s/w` moves.
    fn take_player_turn(&mut self, input: &mut impl BufRead) -> Result<String> {
        loop {
            let line = prompt(input, "Your move (n/e/s/w/x or nothing): ")?;
            let line = line.trim();

            if line.is_empty() {
                let pos = self
                    .arena
                    .player_position()
                    .expect("a running game always has a player");
                let outcome = match advisor::recommend_move(&self.arena, pos) {
                    Some(dir) => self.arena.move_player(dir),
                    None => self.arena.player_stand(),
                };
                return Ok(outcome.to_string());
            }

            let mut chars = line.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                if ch.eq_ignore_ascii_case(&'x') {
                    return Ok(self.arena.player_stand().to_string());
                }
                if let Some(dir) = Direction::from_char(ch) {
                    return Ok(self.arena.move_player(dir).to_string());
                }
            }
            println!("Player move must be nothing, or 1 character n/e/s/w/x.");
        }
    }

    /// Prompt until a valid color+direction throw arrives, then run the
    /// population turn.
    fn take_zurts_turn(&mut self, input: &mut impl BufRead) -> Result<String> {
        loop {
            let line = prompt(input, "Color thrown and direction (e.g., Rn or bw): ")?;
            match parse_throw(line.trim()) {
                Ok((color, dir)) => return Ok(self.arena.move_zurts(color, dir).to_string()),
                Err(msg) => println!("{}", msg),
            }
        }
    }
}

/// Parse a 2-character color+direction token such as `Rn` or `bw`.
pub fn parse_throw(token: &str) -> std::result::Result<(ZurtColor, Direction), &'static str> {
    let mut chars = token.chars();
    let (Some(c), Some(d), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err("You must specify a color followed by a direction.");
    };
    let color = ZurtColor::from_char(c).ok_or("Color must be upper or lower R, Y, or B.")?;
    let dir = Direction::from_char(d).ok_or("Direction must be n, e, s, or w.")?;
    Ok((color, dir))
}

fn prompt(input: &mut impl BufRead, text: &str) -> Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(line)
}

fn random_pos(rng: &mut ChaCha8Rng, rows: u32, cols: u32) -> Position {
    Position::new(rng.gen_range(1..=rows), rng.gen_range(1..=cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_throw_accepts_both_cases() {
        assert_eq!(parse_throw("Rn"), Ok((ZurtColor::Red, Direction::North)));
        assert_eq!(parse_throw("bw"), Ok((ZurtColor::Blue, Direction::West)));
        assert_eq!(parse_throw("yE"), Ok((ZurtColor::Yellow, Direction::East)));
    }

    #[test]
    fn test_parse_throw_rejects_bad_tokens() {
        assert!(parse_throw("").is_err());
        assert!(parse_throw("R").is_err());
        assert!(parse_throw("Rnn").is_err());
        assert!(parse_throw("Gn").is_err());
        assert!(parse_throw("Rq").is_err());
    }

    #[test]
    fn test_setup_places_everything_off_walls() {
        let config = GameConfig {
            rows: 10,
            cols: 12,
            zurts: 50,
            seed: Some(42),
            ..GameConfig::default()
        };
        let game = Game::new(&config);
        let arena = game.arena();

        assert_eq!(arena.zurt_count(), 50);
        let player = arena.player_position().unwrap();
        assert_eq!(arena.status_at(player), CellStatus::Empty);
        for zurt in arena.zurts() {
            assert_eq!(arena.status_at(zurt.position()), CellStatus::Empty);
            assert_ne!(zurt.position(), player);
        }
    }

    #[test]
    fn test_setup_wall_count_matches_density() {
        let config = GameConfig {
            rows: 10,
            cols: 12,
            zurts: 50,
            seed: Some(7),
            ..GameConfig::default()
        };
        let game = Game::new(&config);
        let arena = game.arena();

        let empty = 10 * 12 - 50 - 1;
        let expected = (config.wall_density * empty as f64) as i64;
        let mut walls = 0;
        for r in 1..=10 {
            for c in 1..=12 {
                if arena.status_at(Position::new(r, c)) == CellStatus::Wall {
                    walls += 1;
                }
            }
        }
        assert_eq!(walls, expected);
    }

    #[test]
    fn test_setup_is_deterministic_for_a_seed() {
        let config = GameConfig {
            seed: Some(1234),
            ..GameConfig::default()
        };
        let a = Game::new(&config);
        let b = Game::new(&config);

        assert_eq!(a.arena().player_position(), b.arena().player_position());
        let positions_a: Vec<_> = a.arena().zurts().iter().map(|z| z.position()).collect();
        let positions_b: Vec<_> = b.arena().zurts().iter().map(|z| z.position()).collect();
        assert_eq!(positions_a, positions_b);
    }

    #[test]
    #[should_panic(expected = "too small")]
    fn test_overcrowded_setup_panics() {
        let config = GameConfig {
            rows: 3,
            cols: 3,
            zurts: 9,
            ..GameConfig::default()
        };
        Game::new(&config);
    }
}
