//! Dotfiles stow engine.
//!
//! Mirrors a source directory tree into a target directory (the home
//! directory) as links, skipping entries named in a `.stow-local-ignore`
//! file.  Where symbolic links cannot be created, files fall back to hard
//! links and then to copies; directories fall back to recursive copies.
//!
//! The public API is organised into these layers:
//!
//! - **[`config`]**: resolve the run configuration and load the ignore list
//! - **[`plan`]**: walk the source tree and decide what to link
//! - **[`materialize`]**: apply a plan, one independent entry at a time
//! - **[`resources`]**: the per-entry link primitive and its outcomes
//! - **[`commands`]**: top-level orchestration used by the binary
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod materialize;
pub mod operations;
pub mod plan;
pub mod report;
pub mod resources;
