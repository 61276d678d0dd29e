//! CLI commands

pub mod copy;
pub mod favorites;
pub mod list;
pub mod show;
pub mod state;
pub mod utils;
