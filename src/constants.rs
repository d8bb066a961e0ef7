//! Board dimensions and rendering glyphs.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size used when none is configured.
pub const DEFAULT_SIZE: usize = 16;

/// Smallest board on which a game can be played.
pub const MIN_SIZE: usize = 2;

/// Largest board accepted by [`GameConfig`](crate::config::GameConfig).
/// Keeps the cell count (and every per-move scratch buffer) bounded.
pub const MAX_SIZE: usize = 1024;

/// Largest board addressable by text vertices (`A`..`Z` without `I`).
pub const MAX_VERTEX_SIZE: usize = 25;

// =============================================================================
// Game Lifecycle
// =============================================================================

/// Consecutive passes that end the game.
pub const PASSES_TO_END: u32 = 2;

// =============================================================================
// Rendering
// =============================================================================

/// Glyph for a black stone.
pub const GLYPH_BLACK: char = 'X';

/// Glyph for a white stone.
pub const GLYPH_WHITE: char = 'O';

/// Glyph for an empty point.
pub const GLYPH_EMPTY: char = '.';

/// Column letters for vertices. `I` is skipped to avoid confusion with `J`.
pub const COLUMN_LETTERS: &[u8; MAX_VERTEX_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";
