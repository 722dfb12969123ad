//! Toroidal Life - Conway's Game of Life on a fixed-size wrapping grid.
//!
//! This crate provides a dense, byte-per-cell implementation of the
//! standard B3/S23 rule on a torus, shared by a console driver and a
//! browser binding.
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `schema`: Configuration types and seeding for simulations
//! - `compute`: Grid storage, neighbor counting and generation stepping
//! - `render`: ASCII rendering for terminals
//!
//! # Example
//!
//! ```rust
//! use toroidal_life::{
//!     compute::GridEngine,
//!     schema::{Pattern, Seed},
//! };
//!
//! let mut engine = GridEngine::new(5, 5)?;
//! let seed = Seed {
//!     pattern: Pattern::Blinker { origin: (1, 2) },
//! };
//! seed.apply(&mut engine)?;
//!
//! engine.step();
//! assert!(engine.get_cell(2, 1)?);
//! assert_eq!(engine.generation(), 1);
//! # Ok::<(), toroidal_life::compute::GridError>(())
//! ```

pub mod compute;
pub mod render;
pub mod schema;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use compute::{GridEngine, GridError, GridStats};
pub use schema::{Pattern, Seed, SimulationConfig};
