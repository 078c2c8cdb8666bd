//! blockpop (workspace facade crate).
//!
//! This package keeps the public `blockpop::{core,input,types}` API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use blockpop_core as core;
pub use blockpop_input as input;
pub use blockpop_types as types;
