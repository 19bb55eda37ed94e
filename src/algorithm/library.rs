//! Precomputed library of every legal meld
//!
//! Runs are generated color by color, start number ascending, length
//! ascending. Groups follow, number ascending, three-color combinations
//! before four-color ones. The solver breaks ties by this order, so it must
//! never change between runs.

use crate::algorithm::bitset::TileMask;
use crate::io::configuration::{GROUP_SIZES, MAX_NUMBER, MIN_NUMBER, MIN_RUN_LENGTH};
use crate::tiles::tile::{Color, Tile};
use std::fmt;
use std::sync::LazyLock;

static GLOBAL_LIBRARY: LazyLock<MeldLibrary> = LazyLock::new(MeldLibrary::new);

/// Meld family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeldKind {
    /// Same color, consecutive numbers
    Run,
    /// Same number, distinct colors
    Group,
}

/// A legal meld: a fixed set of distinct colored tiles
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Meld {
    kind: MeldKind,
    tiles: Vec<Tile>,
    mask: TileMask,
}

impl Meld {
    fn new(kind: MeldKind, tiles: Vec<Tile>) -> Self {
        let mask = tiles.iter().copied().collect();
        Self { kind, tiles, mask }
    }

    /// Meld family
    pub const fn kind(&self) -> MeldKind {
        self.kind
    }

    /// Tiles in meld order (ascending number for runs, color order for groups)
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles in the meld
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the meld has no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether the meld uses `tile`
    pub fn contains(&self, tile: Tile) -> bool {
        self.mask.contains(tile)
    }

    /// Bit mask of the meld's tiles
    pub const fn mask(&self) -> &TileMask {
        &self.mask
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiles: Vec<String> = self.tiles.iter().map(ToString::to_string).collect();
        write!(f, "{}", tiles.join(" "))
    }
}

/// Every legal meld in a fixed order, with a per-tile index
pub struct MeldLibrary {
    melds: Vec<Meld>,
    /// For each tile index, positions of the melds containing that tile
    by_tile: Vec<Vec<usize>>,
}

impl Default for MeldLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl MeldLibrary {
    /// Generate the full library
    pub fn new() -> Self {
        let mut melds = generate_runs();
        melds.extend(generate_groups());

        let by_tile = Tile::all()
            .map(|tile| {
                melds
                    .iter()
                    .enumerate()
                    .filter(|(_, meld)| meld.contains(tile))
                    .map(|(position, _)| position)
                    .collect()
            })
            .collect();

        Self { melds, by_tile }
    }

    /// Shared process-wide library, generated on first use
    pub fn global() -> &'static Self {
        &GLOBAL_LIBRARY
    }

    /// All melds in library order
    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    /// Number of melds
    pub fn len(&self) -> usize {
        self.melds.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.melds.is_empty()
    }

    /// Melds containing `tile`, in library order
    pub fn containing(&self, tile: Tile) -> impl Iterator<Item = &Meld> + '_ {
        self.by_tile
            .get(tile.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|&position| self.melds.get(position))
    }

    /// Melds worth trying for a hand whose pivot is `pivot`
    ///
    /// With a pivot only the melds containing it qualify. A hand without a
    /// colored tile has no pivot, and every meld qualifies.
    pub fn candidates(&self, pivot: Option<Tile>) -> impl Iterator<Item = &Meld> + '_ {
        let indexed = pivot.map(|tile| self.containing(tile));
        let everything = pivot.is_none().then(|| self.melds.iter());
        indexed
            .into_iter()
            .flatten()
            .chain(everything.into_iter().flatten())
    }
}

fn generate_runs() -> Vec<Meld> {
    let mut runs = Vec::new();
    for color in Color::ALL {
        for start in MIN_NUMBER..=MAX_NUMBER {
            for length in MIN_RUN_LENGTH..=MAX_NUMBER as usize {
                let end = start as usize + length - 1;
                if end > MAX_NUMBER as usize {
                    break;
                }
                let tiles = (start..=end as u8)
                    .filter_map(|number| Tile::new(color, number).ok())
                    .collect();
                runs.push(Meld::new(MeldKind::Run, tiles));
            }
        }
    }
    runs
}

fn generate_groups() -> Vec<Meld> {
    let mut groups = Vec::new();
    for number in MIN_NUMBER..=MAX_NUMBER {
        for size in GROUP_SIZES {
            for colors in color_combinations(size) {
                let tiles = colors
                    .into_iter()
                    .filter_map(|color| Tile::new(color, number).ok())
                    .collect();
                groups.push(Meld::new(MeldKind::Group, tiles));
            }
        }
    }
    groups
}

/// Combinations of `size` distinct colors in lexicographic order
fn color_combinations(size: usize) -> Vec<Vec<Color>> {
    fn extend(start: usize, size: usize, current: &mut Vec<Color>, out: &mut Vec<Vec<Color>>) {
        if current.len() == size {
            out.push(current.clone());
            return;
        }
        for (offset, &color) in Color::ALL.iter().enumerate().skip(start) {
            current.push(color);
            extend(offset + 1, size, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    extend(0, size, &mut Vec::with_capacity(size), &mut out);
    out
}
