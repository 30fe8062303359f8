use std::fmt;
use std::str::FromStr;

use crate::EngineError;

use super::types::Mark;

pub const CELL_COUNT: usize = 9;
pub const SIDE: usize = 3;

/// A 3×3 board stored row-major, cells 0..=8.
///
/// `Board` is `Copy`: every query receives its own snapshot, so search code
/// never needs to restore a cell it tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Copy of this board with `index` set to `mark`. Panics if `index` is not a cell.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) -> Result<(), EngineError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(EngineError::OutOfBounds { index })?;
        *cell = mark;
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(SIDE).enumerate() {
            if row_index > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();

        if symbols.len() != CELL_COUNT {
            return Err(EngineError::InvalidBoardLength {
                expected: CELL_COUNT,
                got: symbols.len(),
            });
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (position, &character) in symbols.iter().enumerate() {
            cells[position] = match character {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '_' | '-' => Mark::Empty,
                _ => {
                    return Err(EngineError::InvalidCellCharacter {
                        character,
                        position,
                    });
                }
            };
        }

        Ok(Board::from_cells(cells))
    }
}
