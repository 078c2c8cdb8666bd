//! Simulation module - the driver that owns all state
//!
//! Ties together the grid, the cluster solver, the resource pool, and the
//! seeded RNG, and runs the atomic resolve cycle. Exclusively owned by one
//! consumer and single-threaded by construction; the one mutating entry
//! point is [`Simulation::resolve_at`], invoked once per validated input
//! event. There are no timers and nothing to cancel: a resolve either fully
//! completes or never began.

use blockpop_types::{GridPos, HintIcon, LevelConfig, Piece, PieceKind, POWER_TIER_COUNT};
use log::debug;
use thiserror::Error;

use crate::grid::Grid2D;
use crate::gravity;
use crate::pool::{ResourcePool, VisualBundle};
use crate::resolver::{self, ResolveOutcome};
use crate::rng::SimpleRng;
use crate::snapshot::{BoardSnapshot, CellView};
use crate::solver::{Cluster, ClusterSolver};

/// Largest grid dimension the signed coordinate space supports.
pub const MAX_DIMENSION: u8 = i8::MAX as u8;

/// Fatal configuration problems; the simulation refuses to start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid dimensions must be within 1..=127 per axis, got {width}x{height}")]
    InvalidDimensions { width: u8, height: u8 },
    #[error("block palette must not be empty")]
    EmptyPalette,
    #[error("block palette holds {0} styles, more than variant ids can address")]
    PaletteTooLarge(usize),
    #[error("power tables must define one icon per tier and at least one hint icon")]
    PowerTableMismatch,
}

fn validate(config: &LevelConfig) -> Result<(), ConfigError> {
    if config.width == 0
        || config.height == 0
        || config.width > MAX_DIMENSION
        || config.height > MAX_DIMENSION
    {
        return Err(ConfigError::InvalidDimensions {
            width: config.width,
            height: config.height,
        });
    }
    if config.palette.is_empty() {
        return Err(ConfigError::EmptyPalette);
    }
    if config.palette.len() > u8::MAX as usize + 1 {
        return Err(ConfigError::PaletteTooLarge(config.palette.len()));
    }
    if config.power_icons.len() != POWER_TIER_COUNT as usize || config.power_hints.is_empty() {
        return Err(ConfigError::PowerTableMismatch);
    }
    Ok(())
}

/// One level's board and everything that animates it.
///
/// Single source of truth for occupancy and piece types. The board is always
/// fully populated between steps: empties exist only transiently inside a
/// resolve cycle, and every cell borrows exactly one visual bundle from the
/// pool at all times.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: LevelConfig,
    pieces: Grid2D<Piece>,
    bindings: Grid2D<VisualBundle>,
    hints: Grid2D<HintIcon>,
    solver: ClusterSolver,
    pool: ResourcePool,
    rng: SimpleRng,
}

impl Simulation {
    /// Validate `config` and build a fully populated board from `seed`.
    pub fn new(config: LevelConfig, seed: u32) -> Result<Self, ConfigError> {
        validate(&config)?;
        let (w, h) = (config.width, config.height);
        let cell_count = w as usize * h as usize;

        let mut sim = Self {
            pieces: Grid2D::new(w, h),
            bindings: Grid2D::new(w, h),
            hints: Grid2D::new(w, h),
            solver: ClusterSolver::new(w, h),
            pool: ResourcePool::for_cell_count(cell_count),
            rng: SimpleRng::new(seed),
            config,
        };

        let palette_len = sim.palette_len();
        for i in 0..cell_count {
            sim.pieces[i] = Piece::block(sim.rng.next_range(palette_len) as u8);
            sim.bindings[i] = sim.pool.acquire();
        }
        sim.solver.solve(&sim.pieces);
        sim.update_hints();
        Ok(sim)
    }

    pub fn width(&self) -> u8 {
        self.config.width
    }

    pub fn height(&self) -> u8 {
        self.config.height
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Piece at `pos`, or `None` out of bounds.
    pub fn piece(&self, pos: GridPos) -> Option<Piece> {
        self.pieces.get(pos).copied()
    }

    /// Cluster record at `pos` from the last solve.
    pub fn cluster(&self, pos: GridPos) -> Option<Cluster> {
        self.solver.cluster(pos)
    }

    /// Size of the cluster containing `pos`.
    pub fn cluster_size(&self, pos: GridPos) -> Option<u32> {
        self.solver.cluster(pos).map(|c| c.size)
    }

    /// Current icon hint at `pos`.
    pub fn hint(&self, pos: GridPos) -> Option<HintIcon> {
        self.hints.get(pos).copied()
    }

    /// Visual bundle bound to `pos`. Meaningful for occupied cells only.
    pub fn visual(&self, pos: GridPos) -> Option<VisualBundle> {
        self.bindings.get(pos).copied()
    }

    /// Bundles currently free. Zero whenever the board is at rest.
    pub fn pool_available(&self) -> usize {
        self.pool.available()
    }

    /// Everything the presentation layer needs for `pos`.
    pub fn cell_view(&self, pos: GridPos) -> Option<CellView> {
        let idx = self.pieces.idx(pos)?;
        Some(CellView {
            piece: self.pieces[idx],
            cluster_size: self.solver.clusters()[idx].size,
            hint: self.hints[idx],
            visual: self.bindings[idx],
        })
    }

    /// Plain-data copy of the whole board in storage order.
    pub fn snapshot(&self) -> BoardSnapshot {
        let cells = (0..self.pieces.len())
            .map(|i| CellView {
                piece: self.pieces[i],
                cluster_size: self.solver.clusters()[i].size,
                hint: self.hints[i],
                visual: self.bindings[i],
            })
            .collect();
        BoardSnapshot {
            width: self.config.width,
            height: self.config.height,
            cells,
        }
    }

    /// Resolve the cluster at `pos`: clear it, spawn any earned power piece,
    /// let the columns fall, refill, re-solve, and refresh the hints.
    ///
    /// Out-of-bounds or currently-empty selections are a no-op returning
    /// `None`: no state mutation, no pool traffic.
    pub fn resolve_at(&mut self, pos: GridPos) -> Option<ResolveOutcome> {
        let picked = *self.pieces.get(pos)?;
        if picked.is_empty() {
            return None;
        }
        let cluster = self.solver.cluster(pos)?;
        debug!(
            "resolve at ({}, {}): {} variant {} in cluster of {}",
            pos.x,
            pos.y,
            picked.kind.as_str(),
            picked.variant,
            cluster.size
        );

        let outcome = resolver::resolve(
            &mut self.pieces,
            &mut self.bindings,
            &mut self.pool,
            self.solver.clusters(),
            pos,
            &mut self.rng,
        );

        let palette_len = self.palette_len();
        gravity::collapse_and_refill(
            &mut self.pieces,
            &mut self.bindings,
            &mut self.pool,
            palette_len,
            &mut self.rng,
        );

        self.solver.solve(&self.pieces);
        self.update_hints();
        Some(outcome)
    }

    fn palette_len(&self) -> u32 {
        self.config.palette.len() as u32
    }

    /// Recompute the pre-clear icon hints from the current clustering.
    ///
    /// Blocks in clusters too small to earn a power show their normal icon;
    /// bigger clusters preview the tier a clear would currently yield.
    fn update_hints(&mut self) {
        let max_hint = self.config.power_hints.len() as u32 - 1;
        for i in 0..self.hints.len() {
            let piece = self.pieces[i];
            self.hints[i] = match piece.kind {
                PieceKind::Block => match self.solver.clusters()[i].size / 3 {
                    0 => HintIcon::Normal(piece.variant),
                    group => HintIcon::Power((group - 1).min(max_hint) as u8),
                },
                _ => HintIcon::None,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpop_types::BlockStyle;

    fn config(width: u8, height: u8, palette_len: usize) -> LevelConfig {
        LevelConfig {
            width,
            height,
            palette: (0..palette_len)
                .map(|i| BlockStyle {
                    color: i as u32,
                    icon: i as u32,
                })
                .collect(),
            power_icons: vec![0, 1, 2, 3],
            power_hints: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let err = Simulation::new(config(0, 5, 2), 1).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDimensions { width: 0, height: 5 });
        assert!(Simulation::new(config(5, 0, 2), 1).is_err());
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        assert!(Simulation::new(config(128, 5, 2), 1).is_err());
        assert!(Simulation::new(config(127, 127, 2), 1).is_ok());
    }

    #[test]
    fn test_rejects_empty_palette() {
        let err = Simulation::new(config(4, 4, 0), 1).unwrap_err();
        assert_eq!(err, ConfigError::EmptyPalette);
    }

    #[test]
    fn test_rejects_bad_power_tables() {
        let mut cfg = config(4, 4, 2);
        cfg.power_icons.pop();
        assert_eq!(
            Simulation::new(cfg, 1).unwrap_err(),
            ConfigError::PowerTableMismatch
        );

        let mut cfg = config(4, 4, 2);
        cfg.power_hints.clear();
        assert_eq!(
            Simulation::new(cfg, 1).unwrap_err(),
            ConfigError::PowerTableMismatch
        );
    }

    #[test]
    fn test_selecting_empty_cell_is_a_no_op() {
        let mut sim = Simulation::new(config(2, 2, 1), 1).unwrap();

        // Empties never persist between steps, so force one in for the guard.
        let pos = GridPos::new(0, 0);
        let released = sim.bindings[pos];
        sim.pieces[pos] = Piece::EMPTY;
        sim.pool.release(released);
        let pieces_before = sim.pieces.clone();
        let available_before = sim.pool.available();

        assert!(sim.resolve_at(pos).is_none());
        assert_eq!(sim.pieces, pieces_before);
        assert_eq!(sim.pool.available(), available_before);
    }

    #[test]
    fn test_initial_board_is_full_and_pool_drained() {
        let sim = Simulation::new(config(5, 7, 3), 99).unwrap();
        for i in 0..sim.pieces.len() {
            assert_eq!(sim.pieces[i].kind, PieceKind::Block);
            assert!((sim.pieces[i].variant as usize) < 3);
        }
        assert_eq!(sim.pool_available(), 0);
    }
}
