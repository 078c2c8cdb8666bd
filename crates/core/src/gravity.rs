//! Gravity module - per-column compaction and refill
//!
//! Each column is handled independently with a single bottom-up pass: a
//! running gap counter tracks empty cells, survivors shift down by the
//! current gap, and the vacated top slots are refilled with freshly drawn
//! blocks. Shifts move the piece value and its visual binding together as an
//! identity move; only refills touch the pool. Columns are processed left to
//! right and slots bottom to top so the draw order is canonical.

use blockpop_types::{GridPos, Piece};

use crate::grid::Grid2D;
use crate::pool::{ResourcePool, VisualBundle};
use crate::rng::SimpleRng;

/// Compact every column and refill the gaps with random normal blocks.
pub(crate) fn collapse_and_refill(
    pieces: &mut Grid2D<Piece>,
    bindings: &mut Grid2D<VisualBundle>,
    pool: &mut ResourcePool,
    palette_len: u32,
    rng: &mut SimpleRng,
) {
    let (w, h) = (pieces.width() as i8, pieces.height() as i8);

    for x in 0..w {
        // Make the survivors fall
        let mut gap: i8 = 0;
        for y in 0..h {
            let pos = GridPos::new(x, y);
            if pieces[pos].is_empty() {
                gap += 1;
            } else if gap > 0 {
                let dst = GridPos::new(x, y - gap);
                pieces[dst] = pieces[pos];
                bindings[dst] = bindings[pos];
            }
        }

        // Spawn new blocks in the vacated top slots
        for y in h - gap..h {
            let pos = GridPos::new(x, y);
            pieces[pos] = Piece::block(rng.next_range(palette_len) as u8);
            bindings[pos] = pool.acquire();
        }
        if gap > 0 {
            log::trace!("column {}: refilled {} cells", x, gap);
        }
    }
}
