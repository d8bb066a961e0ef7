//! Go Text Protocol (GTP) front end.
//!
//! A line-oriented text interface to the rules engine, so the engine can be
//! driven from a terminal, a script or a GUI that speaks GTP. There is no
//! move generation: both colours are played by the caller.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - Engine identification
//! - `list_commands`, `known_command <cmd>` - Command discovery
//! - `quit` - Exit the loop
//! - `boardsize <size>` - Start a new game on a `size` x `size` board
//! - `clear_board` - Reset the board to empty, Black to move
//! - `play <color> <vertex>` - Play a stone (or `pass`) for the player to move
//! - `pass` - Pass for the player to move
//! - `showboard` - Print the board
//! - `current_player` - `black` or `white`
//! - `is_game_over` - `true` after two consecutive passes
//! - `score` - Both area scores
//! - `final_score` - Result as `B+n`, `W+n` or `0`
//! - `liberties <vertex>` - Liberty count of the group at a point
//!
//! ## Example
//!
//! ```ignore
//! use goban::gtp::GtpEngine;
//! let mut engine = GtpEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use crate::board::{Color, Vertex, format_vertex, parse_vertex};
use crate::config::GameConfig;
use crate::constants::MAX_VERTEX_SIZE;
use crate::error::GameError;
use crate::position::Position;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "current_player",
    "final_score",
    "is_game_over",
    "known_command",
    "liberties",
    "list_commands",
    "name",
    "pass",
    "play",
    "protocol_version",
    "quit",
    "score",
    "showboard",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    /// Current game
    pos: Position,
    /// Print diagnostics for rejected commands on stderr
    verbose: bool,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Create an engine with the default board size.
    pub fn new() -> Self {
        Self {
            pos: Position::default(),
            verbose: false,
        }
    }

    /// Create an engine for a given configuration.
    ///
    /// Sizes above 25 are rejected because their points cannot be written
    /// as vertices.
    pub fn with_config(config: &GameConfig) -> Result<Self, GameError> {
        check_vertex_size(config.size)?;
        Ok(Self {
            pos: Position::from_config(config)?,
            verbose: false,
        })
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Run the GTP command loop on stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the GTP command loop over arbitrary streams until `quit` or EOF.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            if !success && self.verbose {
                eprintln!("gtp: {command_line} -> {message}");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0
            && let Ok(id) = trimmed[..end].parse::<u32>()
        {
            return (Some(id), trimmed[end..].trim());
        }
        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                let result = GameConfig::new(size).and_then(|config| {
                    check_vertex_size(size)?;
                    Position::from_config(&config)
                });
                match result {
                    Ok(pos) => {
                        self.pos = pos;
                        (true, String::new())
                    }
                    Err(e) => (false, format!("unacceptable size: {e}")),
                }
            }

            "clear_board" => {
                self.pos.clear();
                (true, String::new())
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(color) = parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                if color != self.pos.to_play() {
                    return (
                        false,
                        format!("illegal move: {} is to play", self.pos.to_play()),
                    );
                }
                match parse_vertex(args[1], self.pos.size()) {
                    Some(Vertex::Pass) => {
                        self.pos.pass();
                        (true, String::new())
                    }
                    Some(Vertex::Point(pt)) => match self.pos.play(pt) {
                        Ok(_) => (true, String::new()),
                        Err(e) => (false, e.to_string()),
                    },
                    None => (false, "invalid vertex".to_string()),
                }
            }

            "pass" => {
                self.pos.pass();
                (true, String::new())
            }

            "showboard" => (true, format!("\n{}", self.pos.board())),

            "current_player" => (true, color_name(self.pos.to_play()).to_string()),

            "is_game_over" => (true, self.pos.is_game_over().to_string()),

            "score" => {
                let score = self.pos.score();
                (true, format!("black {} white {}", score.black, score.white))
            }

            "final_score" => (true, self.pos.score().result()),

            "liberties" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match parse_vertex(arg, self.pos.size()) {
                    Some(Vertex::Point(pt)) if self.pos.board().get(pt).is_some() => {
                        (true, self.pos.board().liberties(pt).to_string())
                    }
                    Some(Vertex::Point(pt)) => {
                        let name = format_vertex(Vertex::Point(pt), self.pos.size())
                            .unwrap_or_default();
                        (false, format!("no stone at {name}"))
                    }
                    _ => (false, "invalid vertex".to_string()),
                }
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

fn check_vertex_size(size: usize) -> Result<(), GameError> {
    if size > MAX_VERTEX_SIZE {
        return Err(GameError::InvalidConfiguration(format!(
            "board size must be at most {MAX_VERTEX_SIZE} for text play (got {size})"
        )));
    }
    Ok(())
}

fn parse_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "black",
        Color::White => "white",
    }
}
