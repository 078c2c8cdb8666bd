//! Snapshot module - plain-data board view for the presentation layer

use blockpop_types::{GridPos, HintIcon, Piece};

use crate::pool::VisualBundle;

/// Everything the presentation layer maps to visuals for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub piece: Piece,
    pub cluster_size: u32,
    pub hint: HintIcon,
    /// Binding is meaningful for occupied cells only.
    pub visual: VisualBundle,
}

/// A copy of the whole board, column-major (`x * height + y`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub width: u8,
    pub height: u8,
    pub cells: Vec<CellView>,
}

impl BoardSnapshot {
    /// Cell view at `pos`, or `None` out of bounds.
    pub fn cell(&self, pos: GridPos) -> Option<&CellView> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width as i8 || pos.y >= self.height as i8 {
            return None;
        }
        self.cells
            .get(pos.x as usize * self.height as usize + pos.y as usize)
    }

    /// Iterate cells with their positions, storage order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &CellView)> {
        let h = self.height as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (GridPos::new((i / h) as i8, (i % h) as i8), cell))
    }
}
