//! Command implementations for the rebundle CLI

pub mod attach;
pub mod completions;
pub mod detach;
pub mod helpers;
pub mod list;
pub mod reconcile;
pub mod show;
pub mod version;
