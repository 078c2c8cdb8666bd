//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the whole grid-matching simulation: cluster solving,
//! match resolution, gravity, refill, and visual-resource pooling. It has
//! **zero dependencies** on rendering, asset loading, or device input,
//! making it:
//!
//! - **Deterministic**: same config and seed produce identical boards and
//!   identical outcomes for identical selections
//! - **Testable**: every rule is exercised by unit and property tests
//! - **Portable**: runs headless anywhere; presentation attaches via
//!   snapshots and opaque visual handles
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size column-major grid storage with bounds-checked access
//! - [`solver`]: connected-cluster partitioning of equal adjacent pieces
//! - [`pool`]: free list of pooled visual-handle bundles, one per cell
//! - [`rng`]: seeded generator for reproducible piece draws
//! - [`sim`]: the simulation driver and its atomic resolve cycle
//! - [`snapshot`]: plain-data board view for the presentation layer
//!
//! # Resolve cycle
//!
//! One externally invoked step per validated input event; there is no
//! timer-driven behavior. A step that passes the boundary guard runs to
//! completion before returning:
//!
//! 1. clear the selected cluster, releasing its visual bundles
//! 2. spawn a power piece at the selected cell when the cluster was big enough
//! 3. compact every column under gravity and refill the vacated top slots
//! 4. re-solve the clustering and recompute the per-cell icon hints
//!
//! # Example
//!
//! ```
//! use blockpop_core::Simulation;
//! use blockpop_types::{BlockStyle, GridPos, LevelConfig};
//!
//! let config = LevelConfig {
//!     width: 4,
//!     height: 4,
//!     palette: vec![BlockStyle { color: 0, icon: 0 }],
//!     power_icons: vec![10, 11, 12, 13],
//!     power_hints: vec![20, 21, 22],
//! };
//! let mut sim = Simulation::new(config, 1235).unwrap();
//!
//! // A single-variant palette makes the whole board one cluster.
//! assert_eq!(sim.cluster_size(GridPos::new(0, 0)), Some(16));
//!
//! let outcome = sim.resolve_at(GridPos::new(1, 2)).unwrap();
//! assert_eq!(outcome.cleared, 16);
//! assert!(outcome.power.is_some()); // 16 pieces earn the top tier
//!
//! // The board is full again and every bundle is borrowed by a cell.
//! assert_eq!(sim.pool_available(), 0);
//! ```

pub mod grid;
mod gravity;
pub mod pool;
mod resolver;
pub mod rng;
pub mod sim;
pub mod snapshot;
pub mod solver;

pub use blockpop_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid2D;
pub use pool::{ResourcePool, VisualBundle, VisualHandle};
pub use resolver::{PowerSpawn, Reaction, ResolveOutcome};
pub use rng::SimpleRng;
pub use sim::{ConfigError, Simulation, MAX_DIMENSION};
pub use snapshot::{BoardSnapshot, CellView};
pub use solver::{Cluster, ClusterSolver};
