//! Text rendering of solutions
//!
//! Tiles that come from the originally supplied board are bracketed; every
//! other tile is padded to the same width. Each original tile instance marks
//! at most one printed tile, consumed in rendering order.

use crate::algorithm::solver::{Placement, Solution};
use crate::tiles::hand::Hand;
use crate::tiles::tile::{Color, Tile, Token};

/// How tile colors and jokers are drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Glyphs {
    /// Letter codes: `R`, `B`, `K`, `O`, `J`
    #[default]
    Text,
    /// Colored emoji
    Icons,
}

impl Glyphs {
    fn color(self, color: Color) -> String {
        match self {
            Self::Text => color.code().to_string(),
            Self::Icons => match color {
                Color::Red => "\u{1f534}",
                Color::Blue => "\u{1f535}",
                Color::Black => "\u{26ab}",
                Color::Orange => "\u{1f7e0}",
            }
            .to_string(),
        }
    }

    const fn joker(self) -> &'static str {
        match self {
            Self::Text => "J",
            Self::Icons => "\u{1f921}",
        }
    }
}

/// Renders solutions while tracking which original board tiles were printed
pub struct Renderer {
    glyphs: Glyphs,
    unmarked: Hand,
}

impl Renderer {
    /// Create a renderer that brackets tiles from `original_board`
    pub fn new(original_board: &[Token], glyphs: Glyphs) -> Self {
        Self {
            glyphs,
            unmarked: Hand::from_tokens(original_board),
        }
    }

    /// Render one line per meld, numbered from 1
    pub fn render(&mut self, solution: &Solution) -> Vec<String> {
        solution
            .placements()
            .iter()
            .enumerate()
            .map(|(index, placement)| {
                format!("{:2}: {}", index + 1, self.render_placement(placement).join(" "))
            })
            .collect()
    }

    /// Render the slots of one meld, ordered by number then color
    pub fn render_placement(&mut self, placement: &Placement) -> Vec<String> {
        let mut slots: Vec<(Tile, bool)> = placement
            .meld()
            .tiles()
            .iter()
            .map(|&tile| (tile, placement.jokers().contains(&tile)))
            .collect();
        slots.sort_by_key(|&(tile, _)| (tile.number(), tile.color()));

        slots
            .into_iter()
            .map(|(tile, by_joker)| {
                if by_joker {
                    let marked = self.consume(Token::Joker);
                    Self::frame(format!("{}  ", self.glyphs.joker()), marked)
                } else {
                    let marked = self.consume(Token::Colored(tile));
                    Self::frame(
                        format!("{}{:2}", self.glyphs.color(tile.color()), tile.number()),
                        marked,
                    )
                }
            })
            .collect()
    }

    fn consume(&mut self, token: Token) -> bool {
        match self.unmarked.without(token) {
            Some(rest) => {
                self.unmarked = rest;
                true
            }
            None => false,
        }
    }

    fn frame(body: String, marked: bool) -> String {
        if marked {
            format!("[{body}]")
        } else {
            format!(" {body} ")
        }
    }
}

/// Render a solution in one call
pub fn render_solution(solution: &Solution, original_board: &[Token], glyphs: Glyphs) -> Vec<String> {
    Renderer::new(original_board, glyphs).render(solution)
}
