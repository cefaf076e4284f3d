use serde::{Deserialize, Serialize};

/// Number of cells on the board, indexed 0-8 in row-major order.
pub const CELL_COUNT: usize = 9;

/// The eight index triples whose equal occupation wins the game:
/// three rows, three columns, two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// The human, marks "X", moves first.
    Player,
    /// The engine, marks "O".
    Computer,
}

impl Side {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }

    pub const fn mark(self) -> char {
        match self {
            Self::Player => 'X',
            Self::Computer => 'O',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Side>; CELL_COUNT],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupant of a cell. Out-of-range indices read as empty; the
    /// rules reject them before any move reaches the board.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Side> {
        self.cells.get(index).copied().flatten()
    }

    #[must_use]
    pub fn is_cell_empty(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Sets a cell without any rule checks. Used by the search to try a
    /// move on its scratch board; callers go through the rules instead.
    pub fn place_quiet(&mut self, index: usize, side: Side) {
        self.cells[index] = Some(side);
    }

    /// Clears a cell without any rule checks, undoing `place_quiet`
    /// when the search backtracks.
    pub fn clear_quiet(&mut self, index: usize) {
        self.cells[index] = None;
    }

    pub fn cells(&self) -> &[Option<Side>; CELL_COUNT] {
        &self.cells
    }

    /// Parses a nine-character mark string, e.g. `"XX...O..."`.
    /// `X`/`O` place a side, `.` leaves the cell empty.
    #[must_use]
    pub fn from_marks(marks: &str) -> Option<Self> {
        if marks.chars().count() != CELL_COUNT {
            return None;
        }
        let mut board = Self::new();
        for (index, ch) in marks.chars().enumerate() {
            board.cells[index] = match ch {
                'X' | 'x' => Some(Side::Player),
                'O' | 'o' => Some(Side::Computer),
                '.' => None,
                _ => return None,
            };
        }
        Some(board)
    }

    /// Inverse of `from_marks`, for logs and test failure output.
    #[must_use]
    pub fn to_marks(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or('.', Side::mark))
            .collect()
    }
}
