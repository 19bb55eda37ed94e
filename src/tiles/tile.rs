//! Tile value types and token parsing
//!
//! A colored tile is a (color, number) pair validated on construction, so
//! every `Tile` that exists is inside the fixed domain. Jokers have no
//! identity of their own and only appear as `Token::Joker`.

use crate::io::configuration::{COLOR_COUNT, MAX_NUMBER, MIN_NUMBER, TILE_KINDS};
use crate::io::error::{Result, invalid_token};
use std::fmt;
use std::str::FromStr;

/// Character used for jokers in token notation
pub const JOKER_CODE: char = 'J';

/// One of the four tile colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Red, written `R`
    Red,
    /// Blue, written `B`
    Blue,
    /// Black, written `K`
    Black,
    /// Orange, written `O`
    Orange,
}

impl Color {
    /// All colors in canonical order
    pub const ALL: [Self; COLOR_COUNT] = [Self::Red, Self::Blue, Self::Black, Self::Orange];

    /// Single-letter code
    pub const fn code(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Black => 'K',
            Self::Orange => 'O',
        }
    }

    /// Parse a color code, ignoring case
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'B' => Some(Self::Blue),
            'K' => Some(Self::Black),
            'O' => Some(Self::Orange),
            _ => None,
        }
    }

    /// Position in canonical order
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A colored, numbered tile
///
/// Ordered by color, then number. Two tiles with the same color and number
/// are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    color: Color,
    number: u8,
}

impl Tile {
    /// Create a tile, rejecting numbers outside `1..=13`
    ///
    /// # Errors
    ///
    /// Returns `InvalidToken` if `number` is out of range
    pub fn new(color: Color, number: u8) -> Result<Self> {
        if (MIN_NUMBER..=MAX_NUMBER).contains(&number) {
            Ok(Self { color, number })
        } else {
            Err(invalid_token(
                &format!("{}{number}", color.code()),
                "number must be between 1 and 13",
            ))
        }
    }

    /// Rebuild a tile from its dense index (see [`Tile::index`])
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= TILE_KINDS {
            return None;
        }
        let per_color = MAX_NUMBER as usize;
        let color = match index / per_color {
            0 => Color::Red,
            1 => Color::Blue,
            2 => Color::Black,
            _ => Color::Orange,
        };
        Some(Self {
            color,
            number: (index % per_color) as u8 + MIN_NUMBER,
        })
    }

    /// Tile color
    pub const fn color(self) -> Color {
        self.color
    }

    /// Tile number
    pub const fn number(self) -> u8 {
        self.number
    }

    /// Dense index in `0..52`, matching the canonical order
    pub const fn index(self) -> usize {
        self.color.index() * MAX_NUMBER as usize + (self.number - MIN_NUMBER) as usize
    }

    /// Every tile of the domain in canonical order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TILE_KINDS).filter_map(Self::from_index)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.code(), self.number)
    }
}

/// A tile as it appears in input: a colored tile or a joker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    /// A colored tile
    Colored(Tile),
    /// A wildcard
    Joker,
}

impl Token {
    /// The colored tile, if this is not a joker
    pub const fn tile(self) -> Option<Tile> {
        match self {
            Self::Colored(tile) => Some(tile),
            Self::Joker => None,
        }
    }

    /// Whether this token is a joker
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }
}

impl From<Tile> for Token {
    fn from(tile: Tile) -> Self {
        Self::Colored(tile)
    }
}

impl FromStr for Token {
    type Err = crate::io::error::SolverError;

    /// Parse `R12`, `k4`, `J` and similar, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let Some(head) = chars.next() else {
            return Err(invalid_token(&trimmed, "empty token"));
        };
        let rest = chars.as_str();

        if head.eq_ignore_ascii_case(&JOKER_CODE) {
            return if rest.is_empty() {
                Ok(Self::Joker)
            } else {
                Err(invalid_token(&trimmed, "joker takes no number"))
            };
        }

        let color = Color::from_code(head)
            .ok_or_else(|| invalid_token(&trimmed, "unknown color code (expected R, B, K, O or J)"))?;
        let number = rest
            .parse::<u8>()
            .map_err(|_parse_error| invalid_token(&trimmed, "missing or non-numeric tile number"))?;

        Ok(Self::Colored(Tile::new(color, number)?))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Colored(tile) => tile.fmt(f),
            Self::Joker => write!(f, "{JOKER_CODE}"),
        }
    }
}

/// Parse a whitespace or comma separated list of tokens
///
/// # Errors
///
/// Returns the first `InvalidToken` encountered
pub fn parse_tokens(text: &str) -> Result<Vec<Token>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

/// Format tokens as a space separated list
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
