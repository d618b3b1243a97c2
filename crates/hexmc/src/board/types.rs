//! Core board types: `Player`, `Board`, and the bordered augmentation.
//!
//! - `Board` is a plain row-major square grid of `Player` values. It is
//!   immutable during a solve; the experiment driver mutates it only through
//!   the fixed-cell overlay before handing it to the walk.
//! - `BorderedBoard` wraps a board with the one-cell synthetic border that
//!   turns winner determination into a boundary-following walk with no
//!   special-cased edges. It exists only transiently inside the walk.

use std::fmt;

use nalgebra::Vector2;

/// Lattice vertex on the bordered grid: `x` is the row, `y` the column.
pub type Vertex = Vector2<i64>;

/// Board cell coordinate `(row, col)` in `[0, n-1]²`.
pub type Coord = (usize, usize);

/// Cell value and winner tag. `One` connects top/bottom, `Two` left/right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Digit used by grid displays and the persisted tables (1 or 2).
    #[inline]
    pub fn as_digit(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Fully-filled square board of side `n ≥ 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    side: usize,
    cells: Vec<Player>,
}

impl Board {
    /// Board with every cell set to `value`.
    pub fn filled(side: usize, value: Player) -> Self {
        Self {
            side,
            cells: vec![value; side * side],
        }
    }

    /// Build a board cell by cell from `f(row, col)`.
    pub fn from_fn(side: usize, mut f: impl FnMut(usize, usize) -> Player) -> Self {
        let mut cells = Vec::with_capacity(side * side);
        for r in 0..side {
            for c in 0..side {
                cells.push(f(r, c));
            }
        }
        Self { side, cells }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Player {
        self.cells[row * self.side + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Player) {
        self.cells[row * self.side + col] = value;
    }

    /// Point rotation: `(r, c) ↦ (n-1-r, n-1-c)`, values unchanged.
    ///
    /// This maps the hex adjacency onto itself and swaps top↔bottom and
    /// left↔right, so each player's connection task is preserved.
    pub fn rotate180(&self) -> Self {
        let n = self.side;
        Self::from_fn(n, |r, c| self.get(n - 1 - r, n - 1 - c))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.side {
            for c in 0..self.side {
                if c > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{}", self.get(r, c).as_digit())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Board surrounded by the one-cell synthetic border used by the walk.
///
/// Layout for side `n` (bordered side `n + 2`):
/// - first row: `[2, 1, 1, …, 1]`
/// - middle rows: `[2, row…, 2]`
/// - last row: `[1, …, 1, 2]`
///
/// The all-`One` top/bottom strips and all-`Two` side strips make the walk's
/// turn rule total on every interior lattice edge.
#[derive(Clone, Debug)]
pub struct BorderedBoard {
    side: usize, // bordered side, n + 2
    cells: Vec<Player>,
}

impl BorderedBoard {
    pub fn new(board: &Board) -> Self {
        let n = board.side();
        let m = n + 2;
        let mut cells = Vec::with_capacity(m * m);
        cells.push(Player::Two);
        cells.extend(std::iter::repeat(Player::One).take(n + 1));
        for r in 0..n {
            cells.push(Player::Two);
            for c in 0..n {
                cells.push(board.get(r, c));
            }
            cells.push(Player::Two);
        }
        cells.extend(std::iter::repeat(Player::One).take(n + 1));
        cells.push(Player::Two);
        Self { side: m, cells }
    }

    /// Bordered side length, `n + 2`.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Value at a lattice vertex. A `-1` index wraps to the opposite border
    /// strip; the walk's start window straddles the grid seam this way.
    #[inline]
    pub fn get(&self, v: Vertex) -> Player {
        let m = self.side as i64;
        let r = v.x.rem_euclid(m) as usize;
        let c = v.y.rem_euclid(m) as usize;
        self.cells[r * self.side + c]
    }
}
