//! Top-level command orchestration.
pub mod stow;
