use crate::algorithm::bitset::TileMask;
use crate::algorithm::library::Meld;
use crate::tiles::hand::Hand;
use crate::tiles::tile::Tile;

/// Tiles that jokers stood in for within one applied meld, in meld order
pub type JokerAssignment = Vec<Tile>;

/// Result of removing one meld from a hand
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subtraction {
    /// What remains of the hand
    pub residual: Hand,
    /// Tiles covered by jokers
    pub jokers: JokerAssignment,
}

/// Number of jokers needed to complete `meld` from a hand whose present
/// tiles are `present`
///
/// Meld tiles are distinct, so each one absent from the hand costs one joker.
pub fn joker_shortfall(present: &TileMask, meld: &Meld) -> u32 {
    (meld.len() - meld.mask().overlap(present)) as u32
}

/// Whether `meld` can be taken from `hand`, with jokers covering missing tiles
///
/// Jokers are fungible, so only the total shortfall matters.
pub fn is_feasible(hand: &Hand, meld: &Meld) -> bool {
    joker_shortfall(&hand.mask(), meld) <= hand.jokers()
}

/// Remove `meld` from `hand`, real tiles first and jokers for the rest
///
/// Returns `None` when the hand runs out of jokers before the meld is
/// complete. The input hand is left untouched.
pub fn apply(hand: &Hand, meld: &Meld) -> Option<Subtraction> {
    let mut residual = hand.clone();
    let mut jokers = JokerAssignment::new();
    for &tile in meld.tiles() {
        if residual.take(tile, 1) == 0 {
            if residual.take_jokers(1) == 0 {
                return None;
            }
            jokers.push(tile);
        }
    }

    Some(Subtraction { residual, jokers })
}
