//! Resolver module - clearing a selected cluster and spawning power pieces

use blockpop_types::{power_kind, power_tier, GridPos, Piece, PieceKind};

use crate::grid::Grid2D;
use crate::pool::{ResourcePool, VisualBundle};
use crate::rng::SimpleRng;
use crate::solver::Cluster;

/// A power piece placed at the selected cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerSpawn {
    pub pos: GridPos,
    pub piece: Piece,
    pub tier: u8,
}

/// Feedback for clears that removed normal blocks, carrying the cleared
/// variant for transient presentation effects (e.g. a color flash).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    pub variant: u8,
}

/// What a resolve step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Cells cleared (the selected cluster's size).
    pub cleared: u32,
    pub power: Option<PowerSpawn>,
    pub reaction: Option<Reaction>,
}

/// Clear the cluster containing `selected` and spawn any earned power piece.
///
/// Caller guarantees `selected` is in bounds and non-empty, and that
/// `clusters` reflects the current `pieces`.
pub(crate) fn resolve(
    pieces: &mut Grid2D<Piece>,
    bindings: &mut Grid2D<VisualBundle>,
    pool: &mut ResourcePool,
    clusters: &Grid2D<Cluster>,
    selected: GridPos,
    rng: &mut SimpleRng,
) -> ResolveOutcome {
    let cluster = clusters[selected];
    let picked = pieces[selected];

    // Clusters are kind+variant uniform, so the selected piece decides
    // whether this clear removed normal blocks.
    let reaction = (picked.kind == PieceKind::Block).then_some(Reaction {
        variant: picked.variant,
    });

    // Remove the cluster
    let mut cleared = 0u32;
    for i in 0..pieces.len() {
        if clusters[i].root == cluster.root {
            pieces[i] = Piece::EMPTY;
            pool.release(bindings[i]);
            cleared += 1;
        }
    }

    // Create a power piece at the selected cell (not the cluster root)
    let power = power_tier(cluster.size).map(|tier| {
        let piece = match power_kind(tier) {
            // ExplosI gets one of its two orientations at random.
            PieceKind::ExplosI => Piece::new(PieceKind::ExplosI, rng.next_range(2) as u8),
            kind => Piece::new(kind, 0),
        };
        pieces[selected] = piece;
        bindings[selected] = pool.acquire();
        PowerSpawn {
            pos: selected,
            piece,
            tier,
        }
    });

    ResolveOutcome {
        cleared,
        power,
        reaction,
    }
}
