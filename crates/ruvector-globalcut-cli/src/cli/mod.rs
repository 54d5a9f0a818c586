//! CLI module for GlobalCut

pub mod commands;
pub mod format;
