//! Goban: a rules engine for Go-like stone placement games.
//!
//! The engine tracks a square board, rejects occupied and suicidal moves,
//! captures groups that lose their last liberty, ends the game after two
//! consecutive passes and computes an area score.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size and rendering glyphs
//! - [`config`] - Game configuration
//! - [`error`] - Error type for configuration and move legality
//! - [`board`] - Grid storage, group and liberty traversal, text vertices
//! - [`position`] - The game state machine (moves, passes, scoring)
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use goban::position::Position;
//!
//! let mut pos = Position::new(9).unwrap();
//! pos.play((4, 4)).unwrap();
//! assert!(pos.play((4, 4)).is_err());
//!
//! pos.pass();
//! pos.pass();
//! assert!(pos.is_game_over());
//! let score = pos.score();
//! assert_eq!(score.black + score.white, 81);
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod gtp;
pub mod position;
