//! Repository modules implementing CRUD operations for Limud entities.
//!
//! Each module adds methods to `LimudService` via `impl LimudService` blocks.

pub mod conjugation;
pub mod word;
