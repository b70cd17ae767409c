#![warn(clippy::all, clippy::pedantic)]

use log::trace;

use crate::components::{BlockColor, Piece, TetrominoType};

/// Supplies the pieces a game draws from.
pub trait PieceSource {
    /// Produces the next piece, anchored at the spawn point of a grid of the
    /// given width.
    fn spawn(&mut self, grid_width: usize) -> Piece;
}

/// Random piece generator: tetromino and color are drawn uniformly and
/// independently of each other.
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: fastrand::Rng,
}

impl PieceFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(fastrand::Rng::new())
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(fastrand::Rng::with_seed(seed))
    }

    #[must_use]
    pub fn from_rng(rng: fastrand::Rng) -> Self {
        Self { rng }
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceSource for PieceFactory {
    fn spawn(&mut self, grid_width: usize) -> Piece {
        let kind = TetrominoType::ALL[self.rng.usize(..TetrominoType::ALL.len())];
        let color = BlockColor::ALL[self.rng.usize(..BlockColor::ALL.len())];
        trace!("Spawning {kind:?} in {color:?}");
        Piece::spawned(kind, color, grid_width)
    }
}

/// Replays a fixed list of pieces in order, wrapping around at the end.
pub struct SequenceSource {
    pieces: Vec<(TetrominoType, BlockColor)>,
    index: usize,
}

impl SequenceSource {
    /// # Panics
    ///
    /// Panics if `pieces` is empty.
    #[must_use]
    pub fn new(pieces: Vec<(TetrominoType, BlockColor)>) -> Self {
        assert!(!pieces.is_empty(), "a piece sequence needs at least one piece");
        Self { pieces, index: 0 }
    }

    /// Same tetromino every time, handy for building predictable stacks.
    #[must_use]
    pub fn repeating(kind: TetrominoType, color: BlockColor) -> Self {
        Self::new(vec![(kind, color)])
    }
}

impl PieceSource for SequenceSource {
    fn spawn(&mut self, grid_width: usize) -> Piece {
        let (kind, color) = self.pieces[self.index % self.pieces.len()];
        self.index += 1;
        Piece::spawned(kind, color, grid_width)
    }
}
