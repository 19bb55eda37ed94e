//! Puzzle descriptions: board and reserve token lists
//!
//! File format, one directive per line:
//!
//! ```text
//! # comment
//! board: R1 R2 R3 K7 K8 K9
//! reserve: O4 J b10
//! ```
//!
//! Directives may repeat; their tokens accumulate in order.

use crate::io::error::{Result, SolverError};
use crate::tiles::tile::{Token, parse_tokens};
use std::path::Path;

/// Starting board and reserve for the placement driver
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Puzzle {
    /// Tiles already on the board
    pub board: Vec<Token>,
    /// Tiles available to add
    pub reserve: Vec<Token>,
}

impl Puzzle {
    /// Build a puzzle from two token strings
    ///
    /// # Errors
    ///
    /// Returns `InvalidToken` for the first token that fails to parse
    pub fn from_strs(board: &str, reserve: &str) -> Result<Self> {
        Ok(Self {
            board: parse_tokens(board)?,
            reserve: parse_tokens(reserve)?,
        })
    }

    /// Parse the line-oriented puzzle format
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A line is neither blank, a comment, nor a `board:`/`reserve:` directive
    /// - A token fails to parse
    pub fn parse(text: &str) -> Result<Self> {
        let mut puzzle = Self::default();

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line
                .split_once('#')
                .map_or(raw_line, |(content, _comment)| content)
                .trim();
            if line.is_empty() {
                continue;
            }

            let Some((directive, tokens)) = line.split_once(':') else {
                return Err(SolverError::MalformedInput {
                    line: index + 1,
                    reason: format!("expected 'board:' or 'reserve:', found '{line}'"),
                });
            };

            let target = match directive.trim().to_ascii_lowercase().as_str() {
                "board" => &mut puzzle.board,
                "reserve" => &mut puzzle.reserve,
                other => {
                    return Err(SolverError::MalformedInput {
                        line: index + 1,
                        reason: format!("unknown directive '{other}'"),
                    });
                }
            };
            target.extend(parse_tokens(tokens)?);
        }

        Ok(puzzle)
    }

    /// Load a puzzle file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| SolverError::FileSystem {
            path: path.to_path_buf(),
            operation: "read puzzle",
            source: e,
        })?;
        Self::parse(&text)
    }

    /// Total number of tiles in both pools
    pub fn len(&self) -> usize {
        self.board.len() + self.reserve.len()
    }

    /// Whether both pools are empty
    pub fn is_empty(&self) -> bool {
        self.board.is_empty() && self.reserve.is_empty()
    }
}
