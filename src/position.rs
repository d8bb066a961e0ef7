//! The game state machine: stone placement, captures, passes and scoring.
//!
//! A [`Position`] owns the board, the player to move and the count of
//! consecutive passes. Those three fields fully determine the game.
//!
//! Moves are applied transactionally. The stone is placed tentatively,
//! adjacent enemy groups without liberties are captured, and only when
//! nothing was captured is the new stone checked for suicide. A rejected
//! move leaves the position exactly as it was.

use crate::board::{Board, Color, Point};
use crate::config::GameConfig;
use crate::constants::PASSES_TO_END;
use crate::error::GameError;

/// What a successful move did to the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Enemy stones removed by the move, sorted.
    pub captured: Vec<Point>,
}

impl MoveOutcome {
    pub fn captures(&self) -> usize {
        self.captured.len()
    }
}

/// Area score: stones on the board plus half of the empty points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// The leading player, or `None` on a tie.
    pub fn winner(&self) -> Option<Color> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Result string in the usual `B+n` / `W+n` / `0` notation.
    pub fn result(&self) -> String {
        match self.winner() {
            Some(Color::Black) => format!("B+{}", self.black - self.white),
            Some(Color::White) => format!("W+{}", self.white - self.black),
            None => "0".to_string(),
        }
    }
}

/// A game in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: Board,
    to_play: Color,
    passes: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self::from_validated(GameConfig::default())
    }
}

impl Position {
    /// Start a game on an empty `size` x `size` board with Black to move.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Self::from_config(&GameConfig::new(size)?)
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::from_validated(*config))
    }

    fn from_validated(config: GameConfig) -> Self {
        Position {
            board: Board::empty(config.size),
            to_play: Color::Black,
            passes: 0,
        }
    }

    /// Reset to an empty board with Black to move.
    pub fn clear(&mut self) {
        self.board.clear();
        self.to_play = Color::Black;
        self.passes = 0;
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_play(&self) -> Color {
        self.to_play
    }

    /// Consecutive passes since the last stone was placed.
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Copy of the grid, row by row from the top.
    pub fn snapshot(&self) -> Vec<Vec<Option<Color>>> {
        self.board.rows().map(<[_]>::to_vec).collect()
    }

    /// Place a stone for the player to move.
    ///
    /// # Errors
    /// - [`GameError::OutOfBounds`] if `pt` is not on the board
    /// - [`GameError::CellOccupied`] if `pt` already holds a stone
    /// - [`GameError::SuicideMove`] if the stone would have no liberties and
    ///   captures nothing
    pub fn play(&mut self, pt: Point) -> Result<MoveOutcome, GameError> {
        let (row, col) = pt;
        if !self.board.contains(pt) {
            return Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size(),
            });
        }
        if self.board.get(pt).is_some() {
            return Err(GameError::CellOccupied { row, col });
        }

        let color = self.to_play;
        self.board.set(pt, Some(color));

        // Groups are marked as they are captured so that a group touching
        // the new stone on several sides is only removed once.
        let mut marked = vec![false; self.size() * self.size()];
        let mut captured = Vec::new();
        let enemies: Vec<Point> = self
            .board
            .neighbors(pt)
            .filter(|&n| self.board.get(n) == Some(color.opponent()))
            .collect();
        for n in enemies {
            if !self.board.has_liberty(n) {
                self.board.collect_group(n, &mut marked, &mut captured);
            }
        }

        if captured.is_empty() {
            if !self.board.has_liberty(pt) {
                self.board.set(pt, None);
                return Err(GameError::SuicideMove { row, col });
            }
        } else {
            for &r in &captured {
                self.board.set(r, None);
            }
            captured.sort_unstable();
        }

        self.to_play = color.opponent();
        self.passes = 0;
        Ok(MoveOutcome { captured })
    }

    /// Pass the turn. Always succeeds, also after the game has ended.
    pub fn pass(&mut self) {
        self.passes = self.passes.saturating_add(1);
        self.to_play = self.to_play.opponent();
    }

    /// True once both players have passed in a row.
    pub fn is_game_over(&self) -> bool {
        self.passes >= PASSES_TO_END
    }

    /// Area score for both players.
    ///
    /// Each player gets their stones plus half the empty points, rounded
    /// down. When the number of empty points is odd the leftover point goes
    /// to the player to move at the time of the call, so the result depends
    /// on whose turn it is. This is a known quirk of the scoring rule, not a
    /// komi or tie-break convention.
    pub fn score(&self) -> Score {
        let empty = self.board.count(None);
        let half = empty / 2;
        let mut score = Score {
            black: self.board.count(Some(Color::Black)) + half,
            white: self.board.count(Some(Color::White)) + half,
        };
        if empty % 2 != 0 {
            match self.to_play {
                Color::Black => score.black += 1,
                Color::White => score.white += 1,
            }
        }
        score
    }
}
