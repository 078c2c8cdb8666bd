//! Solver module - connected-cluster partitioning
//!
//! Recomputes the connected components of equal adjacent pieces for the whole
//! board. Two cells belong to the same cluster when their pieces match
//! exactly (kind and variant) and they touch through a chain of 4-neighbor
//! adjacencies; empty cells cluster together the same way.
//!
//! The implementation is an incremental union-find over a coordinate arena:
//! each cell holds a parent *coordinate* (never an owning reference), with
//! `(-1, -1)` marking a root. The table is scratch state, fully rebuilt by
//! every [`ClusterSolver::solve`] call.
//!
//! Scan order is part of the contract. Cells are visited bottom row first,
//! then the left column, then the remainder in storage order, testing the
//! left neighbor before the one below; each match re-parents the neighbor's
//! current *root* under the cell being visited. A later match can therefore
//! hang one existing tree under another without flattening intermediate
//! links, and root lookup walks the resulting chain as-is, with no path
//! compression and no length cap. Changing any of this changes which
//! coordinate ends up labeling a cluster, so downstream tests compare
//! per-cell sizes rather than root identities.

use blockpop_types::{GridPos, Piece};

use crate::grid::Grid2D;

/// Parent value marking a root node.
const NO_PARENT: GridPos = GridPos::new(-1, -1);

/// Union-find node; parent links are grid coordinates.
#[derive(Debug, Clone, Copy, Default)]
struct Node {
    pos: GridPos,
    parent: GridPos,
}

impl Node {
    fn is_root(&self) -> bool {
        self.parent.x < 0
    }
}

/// Per-cell cluster record.
///
/// After a solve, every cell (root or leaf) carries its cluster's full size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cluster {
    pub root: GridPos,
    pub size: u32,
}

/// Recomputes the cluster partition of a board.
#[derive(Debug, Clone)]
pub struct ClusterSolver {
    width: u8,
    height: u8,
    nodes: Grid2D<Node>,
    clusters: Grid2D<Cluster>,
}

impl ClusterSolver {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            nodes: Grid2D::new(width, height),
            clusters: Grid2D::new(width, height),
        }
    }

    /// Cluster record for `pos`, or `None` out of bounds.
    pub fn cluster(&self, pos: GridPos) -> Option<Cluster> {
        self.clusters.get(pos).copied()
    }

    /// The full per-cell cluster table from the last solve.
    pub fn clusters(&self) -> &Grid2D<Cluster> {
        &self.clusters
    }

    /// Walk the parent chain up to the root coordinate.
    ///
    /// No path compression: nodes can be re-parented mid-scan, so chains stay
    /// exactly as the scan built them and may be arbitrarily long.
    fn root_of(&self, mut node: Node) -> GridPos {
        while !node.is_root() {
            node = self.nodes[node.parent];
        }
        node.pos
    }

    /// Hang `child`'s tree under `parent` (no-op when they are the same cell).
    fn attach(&mut self, parent: GridPos, child: GridPos) {
        if child != parent {
            self.nodes[child].parent = parent;
        }
    }

    /// Rebuild the cluster table for `pieces`.
    pub fn solve(&mut self, pieces: &Grid2D<Piece>) {
        let (w, h) = (self.width as i8, self.height as i8);

        // clear state
        for x in 0..w {
            for y in 0..h {
                let pos = GridPos::new(x, y);
                self.nodes[pos] = Node {
                    pos,
                    parent: NO_PARENT,
                };
            }
        }

        // bottom row
        for x in 1..w {
            let pos = GridPos::new(x, 0);
            if pieces[pos] == pieces[pos.left()] {
                let root = self.root_of(self.nodes[pos.left()]);
                self.attach(pos, root);
            }
        }

        // left column
        for y in 1..h {
            let pos = GridPos::new(0, y);
            if pieces[pos] == pieces[pos.below()] {
                let root = self.root_of(self.nodes[pos.below()]);
                self.attach(pos, root);
            }
        }

        // the rest: left neighbor first, then below, in storage order
        for x in 1..w {
            for y in 1..h {
                let pos = GridPos::new(x, y);
                if pieces[pos] == pieces[pos.left()] {
                    let root = self.root_of(self.nodes[pos.left()]);
                    self.attach(pos, root);
                }
                if pieces[pos] == pieces[pos.below()] {
                    let root = self.root_of(self.nodes[pos.below()]);
                    self.attach(pos, root);
                }
            }
        }

        // Bake the linked nodes into cluster records
        for i in 0..self.clusters.len() {
            self.clusters[i] = Cluster {
                root: self.root_of(self.nodes[i]),
                size: 0,
            };
        }

        // Sum each cluster at its root
        for i in 0..self.clusters.len() {
            let root = self.clusters[i].root;
            self.clusters[root].size += 1;
        }

        // Spread the sum to every member
        for i in 0..self.clusters.len() {
            let root = self.clusters[i].root;
            self.clusters[i].size = self.clusters[root].size;
        }
    }
}
