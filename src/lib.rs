//! Tambola (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so callers can write
//! `tambola::{core,caller,types}` while the implementation lives under `crates/`.

pub use tambola_caller as caller;
pub use tambola_core as core;
pub use tambola_types as types;
