#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss,
    // Allow potential wrapping when casting between types of same size as we validate values are in range
    clippy::cast_possible_wrap
)]

/// Largest bounding box any tetromino occupies in either orientation.
pub const MAX_SHAPE_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl TetrominoType {
    pub const ALL: [TetrominoType; 7] = [
        TetrominoType::I,
        TetrominoType::O,
        TetrominoType::T,
        TetrominoType::L,
        TetrominoType::J,
        TetrominoType::S,
        TetrominoType::Z,
    ];

    /// Spawn orientation of this tetromino, `#` marking a filled cell.
    fn pattern(self) -> &'static [&'static str] {
        match self {
            TetrominoType::I => &["####"],
            TetrominoType::O => &["##", "##"],
            TetrominoType::T => &["###", ".#."],
            TetrominoType::L => &["###", "#.."],
            TetrominoType::J => &["###", "..#"],
            TetrominoType::S => &["##.", ".##"],
            TetrominoType::Z => &[".##", "##."],
        }
    }

    #[must_use]
    pub fn shape(self) -> Shape {
        Shape::from_pattern(self.pattern())
    }
}

/// The fixed palette settled blocks are painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Cyan,
    Yellow,
    Magenta,
    Red,
    Green,
    Blue,
    Orange,
}

impl BlockColor {
    pub const ALL: [BlockColor; 7] = [
        BlockColor::Cyan,
        BlockColor::Yellow,
        BlockColor::Magenta,
        BlockColor::Red,
        BlockColor::Green,
        BlockColor::Blue,
        BlockColor::Orange,
    ];

    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            BlockColor::Cyan => (0, 240, 240),
            BlockColor::Yellow => (240, 240, 0),
            BlockColor::Magenta => (240, 0, 240),
            BlockColor::Red => (240, 0, 0),
            BlockColor::Green => (0, 240, 0),
            BlockColor::Blue => (0, 0, 240),
            BlockColor::Orange => (240, 160, 0),
        }
    }

    /// A darker variant of the color, used for the drop shadow.
    #[must_use]
    pub fn shadow_rgb(self) -> (u8, u8, u8) {
        let (r, g, b) = self.rgb();
        (r / 3, g / 3, b / 3)
    }
}

/// Boolean occupancy matrix of a piece, stored inline.
///
/// Only the top-left `rows × cols` corner of `cells` is meaningful; the rest
/// stays `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    rows: usize,
    cols: usize,
}

impl Shape {
    fn from_pattern(pattern: &[&str]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let rows = pattern.len().min(MAX_SHAPE_SIZE);
        let cols = pattern
            .first()
            .map_or(0, |row| row.len())
            .min(MAX_SHAPE_SIZE);

        for (r, row) in pattern.iter().take(rows).enumerate() {
            for (c, ch) in row.bytes().take(cols).enumerate() {
                cells[r][c] = ch == b'#';
            }
        }

        Self { cells, rows, cols }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at `(row, col)` is filled. Out-of-range cells are empty.
    #[must_use]
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row][col]
    }

    /// Offsets `(row, col)` of every filled cell, row-major.
    pub fn filled(self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r, c))
        })
    }

    /// Rotates the matrix a quarter turn clockwise: columns are read bottom to
    /// top and become rows, so the dimensions swap.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in cells.iter_mut().enumerate().take(self.cols) {
            for (c, cell) in row.iter_mut().enumerate().take(self.rows) {
                *cell = self.cells[self.rows - 1 - c][r];
            }
        }

        Self {
            cells,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A tetromino in play: its shape in the current orientation, its color and
/// the grid coordinate of its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: TetrominoType,
    pub shape: Shape,
    pub color: BlockColor,
    pub position: Position,
}

impl Piece {
    #[must_use]
    pub fn new(kind: TetrominoType, color: BlockColor) -> Self {
        Self {
            kind,
            shape: kind.shape(),
            color,
            position: Position { x: 0, y: 0 },
        }
    }

    /// A piece horizontally centered on a grid of the given width, on the top row.
    #[must_use]
    pub fn spawned(kind: TetrominoType, color: BlockColor, grid_width: usize) -> Self {
        let piece = Self::new(kind, color);
        let x = (grid_width / 2) as i32 - (piece.shape.cols() / 2) as i32;
        piece.at(x, 0)
    }

    #[must_use]
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.position = Position { x, y };
        self
    }

    #[must_use]
    pub fn moved(self, dx: i32, dy: i32) -> Self {
        let Position { x, y } = self.position;
        self.at(x + dx, y + dy)
    }

    #[must_use]
    pub fn rotated(mut self) -> Self {
        self.shape = self.shape.rotated();
        self
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.shape.cols()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.shape.rows()
    }

    /// Absolute grid coordinates `(x, y)` of every filled cell.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        self.cells_at(self.position.x, self.position.y)
    }

    /// Coordinates the piece's cells would cover if anchored at `(x, y)`.
    pub fn cells_at(self, x: i32, y: i32) -> impl Iterator<Item = (i32, i32)> {
        self.shape
            .filled()
            .map(move |(r, c)| (x + c as i32, y + r as i32))
    }
}

pub type Cell = Option<BlockColor>;

/// The playfield: `height` rows of `width` cells, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![None; width]; height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Contents of the cell at `(x, y)`, `None` when empty or off the grid.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .flatten()
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if let Some(slot) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *slot = cell;
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(None);
        }
    }

    /// Blocking test for a single coordinate. Walls and everything below the
    /// floor block; the space above the top row never does.
    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if y < 0 {
            return false;
        }
        if x < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return true;
        }
        self.rows[y as usize][x as usize].is_some()
    }

    /// Writes the piece's color into every cell it covers. Callers must have
    /// validated the placement; cells above the top row are dropped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if x >= 0 && y >= 0 {
                self.set(x as usize, y as usize, Some(piece.color));
            }
        }
    }

    #[must_use]
    pub fn is_row_complete(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| !row.is_empty() && row.iter().all(Option::is_some))
    }

    /// Removes every complete row in one bottom-up pass, inserting an empty
    /// row at the top for each. Returns the number of rows removed.
    pub fn clear_completed_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut scan = self.height;

        while scan > 0 {
            let y = scan - 1;
            if self.is_row_complete(y) {
                self.rows.remove(y);
                self.rows.insert(0, vec![None; self.width]);
                cleared += 1;
                // The row above has slid into `y`; examine it again
            } else {
                scan -= 1;
            }
        }

        cleared
    }

    #[must_use]
    pub fn filled_cells(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled_cells() == 0
    }
}
